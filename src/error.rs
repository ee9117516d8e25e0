//! Error handling for the sprout application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for sprout operations.
///
/// This enum represents all possible errors that can occur while building the
/// template or generating a project. It implements the standard Error trait
/// through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur while assembling or copying the template
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents errors that occur while reading or rewriting package.json
    #[error("Manifest error: {0}.")]
    ManifestError(String),

    /// Represents errors in the exclusion rule set
    #[error("Exclude error: {0}.")]
    ExcludeError(String),

    /// Represents failures of external commands (git, package managers)
    #[error("Command error: {0}.")]
    CommandError(String),

    /// Represents failures of the interactive prompt backend
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// Represents validation failures in user input
    #[error("Validation error: {0}.")]
    ValidationError(String),
}

/// Convenience type alias for Results with sprout's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
