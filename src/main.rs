//! sprout's main application entry point and orchestration logic.
//! Handles command-line argument parsing and dispatches to the template
//! builder or the project generator.

use sprout::{
    builder::{build_template, rewrite_manifest, write_aux_files},
    cli::{get_args, Args, BuildTemplateArgs, Command, NewArgs},
    config::resolve_config,
    error::{default_error_handler, Error, Result},
    exclude::ExcludeSet,
    generator::{default_template_root, generate, print_summary, RunOutcome},
    logger::init_logger,
    prompt::DialoguerPrompter,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::New(new_args) => run_new(new_args),
        Command::BuildTemplate(build_args) => run_build_template(build_args),
    }
}

/// Instantiates the template into a new project directory under the
/// current working directory.
fn run_new(args: NewArgs) -> Result<()> {
    let prompter = DialoguerPrompter::new();
    let config = resolve_config(&args, &prompter)?;

    let template_root = match &args.template_dir {
        Some(dir) => dir.clone(),
        None => default_template_root(&config.template_variant)?,
    };
    let base_dir = std::env::current_dir().map_err(Error::IoError)?;

    match generate(&config, &template_root, &base_dir, &prompter)? {
        RunOutcome::Created { reports, .. } => print_summary(&config, &reports),
        RunOutcome::Cancelled => println!("Cancelled. No changes were made."),
    }
    Ok(())
}

/// Assembles a clean template tree from the working source tree.
fn run_build_template(args: BuildTemplateArgs) -> Result<()> {
    let excludes = ExcludeSet::defaults()?;

    build_template(&args.source, &args.output, &excludes)?;
    rewrite_manifest(&args.output)?;
    write_aux_files(&args.output)?;

    println!("Template written to {}.", args.output.display());
    Ok(())
}
