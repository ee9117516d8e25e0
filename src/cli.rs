//! Command-line interface implementation for sprout.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, Args as ClapArgs, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::PackageManager;

/// Command-line arguments structure for sprout.
#[derive(Parser, Debug)]
#[command(author, version, about = "sprout: React application scaffolding tool", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project from the bundled template
    New(NewArgs),

    /// Assemble the distributable template from a working source tree
    BuildTemplate(BuildTemplateArgs),
}

#[derive(ClapArgs, Debug)]
pub struct NewArgs {
    /// Name of the project to create (prompted when omitted)
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Template variant to instantiate
    #[arg(long, value_name = "VARIANT", default_value = "default")]
    pub template: String,

    /// Package manager used for dependency installation
    #[arg(long, value_enum, value_name = "MANAGER")]
    pub package_manager: Option<PackageManager>,

    /// Directory containing the pre-built template.
    /// Defaults to templates/<VARIANT> next to the sprout executable.
    #[arg(long, value_name = "DIR")]
    pub template_dir: Option<PathBuf>,

    /// Skip dependency installation
    #[arg(long)]
    pub skip_install: bool,

    /// Skip git repository initialization
    #[arg(long)]
    pub skip_git: bool,

    /// Skip seeding .env from .env.example
    #[arg(long)]
    pub skip_env: bool,
}

#[derive(ClapArgs, Debug)]
pub struct BuildTemplateArgs {
    /// Source tree to assemble the template from
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub source: PathBuf,

    /// Output directory for the assembled template
    #[arg(long, value_name = "DIR", default_value = "templates/default")]
    pub output: PathBuf,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if the subcommand or required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(
                e.kind(),
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
