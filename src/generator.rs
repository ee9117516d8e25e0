//! Project generator: instantiates the pre-built template into a new
//! project directory and reports per-step outcomes.
//!
//! The pipeline is linear. The two required steps (template copy, manifest
//! rename) abort the run on failure; the three optional steps (environment
//! file, git init, dependency install) degrade to warnings and the run
//! continues.

use crate::builder::copy_tree;
use crate::config::GenerationConfig;
use crate::error::{Error, Result};
use crate::exclude::ExcludeSet;
use crate::manifest::Manifest;
use crate::prompt::Prompter;
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Conventional environment file names inside the template.
pub const ENV_EXAMPLE_FILE: &str = ".env.example";
pub const ENV_FILE: &str = ".env";

/// Scripts the template ships with, listed in the final summary.
const TEMPLATE_SCRIPTS: [&str; 5] = ["dev", "build", "preview", "lint", "test"];

/// What the template contains; a fixed description, not derived from
/// inspecting the copied tree.
const TEMPLATE_FEATURES: [&str; 5] = [
    "React 18 single-page application with Vite",
    "Client-side routing with React Router",
    "Centralized state management with Redux Toolkit",
    "Authentication flow scaffolding (sign in / sign up / reset)",
    "Tailwind CSS design system with dark mode",
];

/// Outcome of one generation step.
#[derive(Debug)]
pub enum StepStatus {
    Done,
    Skipped(String),
    Degraded(String),
}

#[derive(Debug)]
pub struct StepReport {
    pub name: &'static str,
    pub status: StepStatus,
}

/// Result of a whole generation run.
#[derive(Debug)]
pub enum RunOutcome {
    /// Both required steps succeeded; the project exists on disk.
    Created { target: PathBuf, reports: Vec<StepReport> },
    /// The user declined to overwrite an existing target. Nothing was
    /// touched; this is not an error.
    Cancelled,
}

/// Resolves the bundled template location: `templates/<variant>` next to
/// the sprout executable.
pub fn default_template_root(variant: &str) -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(Error::IoError)?;
    let exe_dir = exe.parent().ok_or_else(|| {
        Error::TemplateError("cannot determine the executable's directory".to_string())
    })?;
    Ok(exe_dir.join("templates").join(variant))
}

/// Runs a subprocess with `working_dir` as its working directory, output
/// suppressed. The working directory is passed to the child explicitly; the
/// tool's own working directory never changes.
fn run_quiet(program: &str, args: &[&str], working_dir: &Path) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .current_dir(working_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|e| Error::CommandError(format!("failed to run {}: {}", program, e)))?;

    if !status.success() {
        return Err(Error::CommandError(format!(
            "{} {} exited with {}",
            program,
            args.join(" "),
            status
        )));
    }
    Ok(())
}

/// Copies the example environment file to its conventional name inside the
/// target directory.
fn setup_env(target: &Path) -> Result<()> {
    let example = target.join(ENV_EXAMPLE_FILE);
    if !example.exists() {
        return Err(Error::TemplateError(format!(
            "template has no {}",
            ENV_EXAMPLE_FILE
        )));
    }
    fs::copy(&example, target.join(ENV_FILE)).map(|_| ()).map_err(Error::IoError)
}

/// Initializes a git repository with one commit in `target`.
fn init_git(target: &Path) -> Result<()> {
    run_quiet("git", &["init"], target)?;
    run_quiet("git", &["add", "."], target)?;
    run_quiet("git", &["commit", "-m", "Initial commit"], target)
}

/// Installs dependencies in `target` with the configured package manager.
fn install_deps(config: &GenerationConfig, target: &Path) -> Result<()> {
    run_quiet(config.package_manager.command(), &["install"], target)
}

fn optional_step(
    name: &'static str,
    enabled: bool,
    remedy: &str,
    action: impl FnOnce() -> Result<()>,
) -> StepReport {
    if !enabled {
        return StepReport { name, status: StepStatus::Skipped("disabled".to_string()) };
    }
    match action() {
        Ok(()) => StepReport { name, status: StepStatus::Done },
        Err(e) => {
            let message = format!("{} ({})", e, remedy);
            warn!("{}: {}", name, message);
            StepReport { name, status: StepStatus::Degraded(message) }
        }
    }
}

/// Runs the generation pipeline for one resolved configuration.
///
/// The target directory is `<base_dir>/<project name>`. An existing entry
/// there prompts for overwrite confirmation; declining cancels the run with
/// no changes made. The existence check and the later copy are not atomic;
/// the tool is designed for single-user interactive use.
///
/// # Errors
/// * `Error::TemplateError` if the template directory is missing or the
///   copy fails
/// * `Error::ManifestError` if the copied manifest cannot be rewritten
pub fn generate(
    config: &GenerationConfig,
    template_root: &Path,
    base_dir: &Path,
    prompter: &dyn Prompter,
) -> Result<RunOutcome> {
    if !template_root.is_dir() {
        return Err(Error::TemplateError(format!(
            "template directory not found: {} (run `sprout build-template` first)",
            template_root.display()
        )));
    }

    let target = base_dir.join(&config.project_name);
    if target.exists() {
        let overwrite = prompter.confirm(
            &format!("'{}' already exists. Overwrite it?", config.project_name),
            false,
        )?;
        if !overwrite {
            return Ok(RunOutcome::Cancelled);
        }
        if target.is_dir() {
            fs::remove_dir_all(&target).map_err(Error::IoError)?;
        } else {
            fs::remove_file(&target).map_err(Error::IoError)?;
        }
    }

    let mut reports = Vec::new();

    // Required: byte-for-byte copy of the template tree.
    copy_tree(template_root, &target, &ExcludeSet::empty())?;
    reports.push(StepReport { name: "copy template", status: StepStatus::Done });

    // Required: rewrite the manifest name. A template without a manifest is
    // tolerated, but visibly so.
    match Manifest::load(&target)? {
        Some(mut manifest) => {
            manifest.set_name(&config.project_name);
            manifest.save()?;
            reports.push(StepReport { name: "set project name", status: StepStatus::Done });
        }
        None => {
            warn!("template has no package.json; skipping the name rewrite");
            reports.push(StepReport {
                name: "set project name",
                status: StepStatus::Skipped("no package.json in template".to_string()),
            });
        }
    }

    reports.push(optional_step(
        "environment file",
        config.setup_env,
        &format!("copy {} to {} manually", ENV_EXAMPLE_FILE, ENV_FILE),
        || setup_env(&target),
    ));
    reports.push(optional_step(
        "git repository",
        config.init_git,
        "run `git init` manually",
        || init_git(&target),
    ));
    reports.push(optional_step(
        "install dependencies",
        config.install_deps,
        &format!(
            "run `{}` inside {} manually",
            config.package_manager.install_command(),
            config.project_name
        ),
        || install_deps(config, &target),
    ));

    Ok(RunOutcome::Created { target, reports })
}

/// Prints the fixed-format end-of-run summary. Only called once both
/// required steps have succeeded.
pub fn print_summary(config: &GenerationConfig, reports: &[StepReport]) {
    println!();
    println!("Created project '{}'.", config.project_name);
    for report in reports {
        match &report.status {
            StepStatus::Done => println!("  ok      {}", report.name),
            StepStatus::Skipped(reason) => println!("  skipped {} ({})", report.name, reason),
            StepStatus::Degraded(message) => println!("  warning {} ({})", report.name, message),
        }
    }

    println!();
    println!("Next steps:");
    println!("  cd {}", config.project_name);
    if !config.install_deps {
        println!("  {}", config.package_manager.install_command());
    }
    println!("  {} run dev", config.package_manager);

    println!();
    println!("Available scripts:");
    for script in TEMPLATE_SCRIPTS {
        println!("  {} run {}", config.package_manager, script);
    }

    println!();
    println!("Included features:");
    for feature in TEMPLATE_FEATURES {
        println!("  - {}", feature);
    }
}
