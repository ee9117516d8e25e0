//! Resolution of the generation configuration.
//! Explicit flags take precedence, unanswered fields fall back to an
//! interactive prompt, and prompts fall back to hard defaults. The resolved
//! configuration is immutable for the rest of the run.

use crate::cli::NewArgs;
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use clap::ValueEnum;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Template variants this build of the tool ships with.
pub const TEMPLATE_VARIANTS: [&str; 1] = ["default"];

/// Supported dependency managers for the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// The executable to invoke for this manager.
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// The install invocation suggested to the user on failure.
    pub fn install_command(&self) -> String {
        format!("{} install", self.command())
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

/// The resolved configuration for one generation run.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub project_name: String,
    pub package_manager: PackageManager,
    pub install_deps: bool,
    pub init_git: bool,
    pub setup_env: bool,
    pub template_variant: String,
}

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("^[A-Za-z0-9_-]+$").expect("valid pattern"))
}

/// A valid project name is non-empty after trimming and restricted to
/// letters, digits, hyphen and underscore.
pub fn is_valid_project_name(name: &str) -> bool {
    let name = name.trim();
    !name.is_empty() && name_pattern().is_match(name)
}

/// Resolves the project name from the positional argument, falling back to
/// an interactive retry loop. An invalid answer re-prompts; it never aborts
/// the run.
pub fn resolve_project_name(arg: Option<&str>, prompter: &dyn Prompter) -> Result<String> {
    if let Some(arg) = arg {
        if is_valid_project_name(arg) {
            return Ok(arg.trim().to_string());
        }
        eprintln!(
            "'{}' is not a valid project name (letters, digits, '-' and '_' only)",
            arg
        );
    }

    loop {
        let answer = prompter.input("Project name", None)?;
        if is_valid_project_name(&answer) {
            return Ok(answer.trim().to_string());
        }
        eprintln!(
            "'{}' is not a valid project name (letters, digits, '-' and '_' only)",
            answer.trim()
        );
    }
}

/// Merges flags, interactive answers and defaults into a `GenerationConfig`.
///
/// # Errors
/// * `Error::ValidationError` for an unknown template variant
/// * `Error::PromptError` if the prompt backend fails (or, for the scripted
///   backend, runs out of answers)
pub fn resolve_config(args: &NewArgs, prompter: &dyn Prompter) -> Result<GenerationConfig> {
    let project_name = resolve_project_name(args.name.as_deref(), prompter)?;

    if !TEMPLATE_VARIANTS.contains(&args.template.as_str()) {
        return Err(Error::ValidationError(format!(
            "unknown template variant '{}' (available: {})",
            args.template,
            TEMPLATE_VARIANTS.join(", ")
        )));
    }

    let package_manager = match args.package_manager {
        Some(manager) => manager,
        None => {
            let items = ["npm", "yarn", "pnpm"];
            let choice = prompter.select("Package manager", &items, 0)?;
            match choice {
                1 => PackageManager::Yarn,
                2 => PackageManager::Pnpm,
                _ => PackageManager::Npm,
            }
        }
    };

    // Optional steps default to enabled; the common case is a fully
    // automated setup.
    let install_deps = if args.skip_install {
        false
    } else {
        prompter.confirm("Install dependencies?", true)?
    };
    let init_git = if args.skip_git {
        false
    } else {
        prompter.confirm("Initialize a git repository?", true)?
    };
    let setup_env = if args.skip_env {
        false
    } else {
        prompter.confirm("Create .env from .env.example?", true)?
    };

    Ok(GenerationConfig {
        project_name,
        package_manager,
        install_deps,
        init_git,
        setup_env,
        template_variant: args.template.clone(),
    })
}
