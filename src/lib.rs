//! sprout is a scaffolding tool for React single-page applications.
//! It assembles a distributable template from a working source tree and
//! instantiates that template into new project directories, with optional
//! environment-file seeding, git initialization and dependency installation.

/// Command-line interface module for the sprout application
pub mod cli;

/// Resolution of the per-run generation configuration
/// (project name, package manager, optional-step switches)
pub mod config;

/// Error types and handling for the sprout application
pub mod error;

/// Exclusion rules applied while assembling the template
/// (dependency caches, build output, lock files, VCS metadata)
pub mod exclude;

/// Template builder: filtered tree copy, manifest rewrite, auxiliary files
pub mod builder;

/// Typed access to package.json
pub mod manifest;

/// Project generator: the step pipeline that instantiates the template
pub mod generator;

/// User input and interaction handling
pub mod prompt;

/// Logger configuration
pub mod logger;
