use sprout::config::{
    is_valid_project_name, resolve_config, resolve_project_name, GenerationConfig,
    PackageManager,
};
use sprout::cli::NewArgs;
use sprout::error::Error;
use sprout::generator::{generate, RunOutcome, StepStatus};
use sprout::manifest::Manifest;
use sprout::prompt::ScriptedPrompter;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Lays out a minimal pre-built template, as `build-template` would have
/// left it (no tool packaging fields).
fn make_template(root: &Path) {
    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(root.join("src/main.tsx"), "render(<App />);\n").unwrap();
    fs::write(root.join("index.html"), "<div id=\"root\"></div>\n").unwrap();
    fs::write(root.join(".env.example"), "VITE_API_URL=http://localhost:3000\n").unwrap();
    fs::write(
        root.join("package.json"),
        r#"{ "name": "my-app", "version": "0.1.0", "private": true }
"#,
    )
    .unwrap();
}

fn config(name: &str) -> GenerationConfig {
    GenerationConfig {
        project_name: name.to_string(),
        package_manager: PackageManager::Npm,
        install_deps: false,
        init_git: false,
        setup_env: false,
        template_variant: "default".to_string(),
    }
}

fn new_args(name: Option<&str>) -> NewArgs {
    NewArgs {
        name: name.map(str::to_string),
        template: "default".to_string(),
        package_manager: Some(PackageManager::Npm),
        template_dir: None,
        skip_install: true,
        skip_git: true,
        skip_env: true,
    }
}

#[test]
fn test_project_name_validation() {
    assert!(is_valid_project_name("test-cli-project"));
    assert!(is_valid_project_name("my_app2"));
    assert!(is_valid_project_name("  padded  "));
    assert!(!is_valid_project_name("my app"));
    assert!(!is_valid_project_name(""));
    assert!(!is_valid_project_name("   "));
    assert!(!is_valid_project_name("app/nested"));
    assert!(!is_valid_project_name("café"));
}

#[test]
fn test_invalid_name_reprompts_until_valid() {
    let prompter = ScriptedPrompter::new().with_input("my app").with_input("my-app");
    let name = resolve_project_name(None, &prompter).unwrap();
    assert_eq!(name, "my-app");
}

#[test]
fn test_invalid_name_argument_falls_back_to_prompt() {
    let prompter = ScriptedPrompter::new().with_input("fixed-name");
    let name = resolve_project_name(Some("bad name"), &prompter).unwrap();
    assert_eq!(name, "fixed-name");
}

#[test]
fn test_exhausted_prompter_errors_instead_of_hanging() {
    let prompter = ScriptedPrompter::new().with_input("still bad");
    assert!(matches!(
        resolve_project_name(None, &prompter),
        Err(Error::PromptError(_))
    ));
}

#[test]
fn test_resolve_config_from_flags_only() {
    let prompter = ScriptedPrompter::new();
    let config = resolve_config(&new_args(Some("my-app")), &prompter).unwrap();
    assert_eq!(config.project_name, "my-app");
    assert_eq!(config.package_manager, PackageManager::Npm);
    assert!(!config.install_deps);
    assert!(!config.init_git);
    assert!(!config.setup_env);
}

#[test]
fn test_resolve_config_prompts_for_unanswered_fields() {
    let args = NewArgs {
        name: None,
        template: "default".to_string(),
        package_manager: None,
        template_dir: None,
        skip_install: false,
        skip_git: false,
        skip_env: false,
    };
    let prompter = ScriptedPrompter::new()
        .with_input("prompted-app")
        .with_selection(1)
        .with_confirm(true)
        .with_confirm(false)
        .with_confirm(true);

    let config = resolve_config(&args, &prompter).unwrap();
    assert_eq!(config.project_name, "prompted-app");
    assert_eq!(config.package_manager, PackageManager::Yarn);
    assert!(config.install_deps);
    assert!(!config.init_git);
    assert!(config.setup_env);
}

#[test]
fn test_resolve_config_rejects_unknown_variant() {
    let mut args = new_args(Some("my-app"));
    args.template = "mobile".to_string();
    let prompter = ScriptedPrompter::new();
    assert!(matches!(
        resolve_config(&args, &prompter),
        Err(Error::ValidationError(_))
    ));
}

#[test]
fn test_generate_copies_template_and_renames_manifest() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("template");
    let base = dir.path().join("projects");
    make_template(&template);
    fs::create_dir_all(&base).unwrap();

    let prompter = ScriptedPrompter::new();
    let outcome = generate(&config("my-project"), &template, &base, &prompter).unwrap();

    let RunOutcome::Created { target, reports } = outcome else {
        panic!("Expected a created project");
    };
    assert_eq!(target, base.join("my-project"));
    assert!(target.join("src/main.tsx").exists());
    assert_eq!(
        fs::read(template.join("index.html")).unwrap(),
        fs::read(target.join("index.html")).unwrap()
    );

    let manifest = Manifest::load(&target).unwrap().unwrap();
    assert_eq!(manifest.name(), Some("my-project"));

    assert!(matches!(reports[0].status, StepStatus::Done));
    assert!(matches!(reports[1].status, StepStatus::Done));
    // Disabled optional steps are skipped, not failed.
    for report in &reports[2..] {
        assert!(matches!(report.status, StepStatus::Skipped(_)));
    }
}

#[test]
fn test_generate_without_template_dir_is_fatal() {
    let dir = TempDir::new().unwrap();
    let prompter = ScriptedPrompter::new();
    let result = generate(
        &config("my-project"),
        &dir.path().join("absent"),
        dir.path(),
        &prompter,
    );
    assert!(matches!(result, Err(Error::TemplateError(_))));
}

#[test]
fn test_generate_tolerates_template_without_manifest() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("template");
    fs::create_dir_all(template.join("src")).unwrap();
    fs::write(template.join("src/main.tsx"), "render(<App />);\n").unwrap();

    let prompter = ScriptedPrompter::new();
    let outcome = generate(&config("my-project"), &template, dir.path(), &prompter).unwrap();

    let RunOutcome::Created { reports, .. } = outcome else {
        panic!("Expected a created project");
    };
    assert!(matches!(reports[1].status, StepStatus::Skipped(_)));
}

#[test]
fn test_declined_overwrite_leaves_target_unchanged() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("template");
    make_template(&template);

    let target = dir.path().join("my-project");
    fs::create_dir_all(&target).unwrap();
    fs::write(target.join("precious.txt"), "do not touch\n").unwrap();

    let prompter = ScriptedPrompter::new().with_confirm(false);
    let outcome = generate(&config("my-project"), &template, dir.path(), &prompter).unwrap();

    assert!(matches!(outcome, RunOutcome::Cancelled));
    assert_eq!(
        fs::read_to_string(target.join("precious.txt")).unwrap(),
        "do not touch\n"
    );
    assert!(!target.join("src").exists());
}

#[test]
fn test_accepted_overwrite_replaces_target() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("template");
    make_template(&template);

    let target = dir.path().join("my-project");
    fs::create_dir_all(&target).unwrap();
    fs::write(target.join("stale.txt"), "old contents\n").unwrap();

    let prompter = ScriptedPrompter::new().with_confirm(true);
    let outcome = generate(&config("my-project"), &template, dir.path(), &prompter).unwrap();

    assert!(matches!(outcome, RunOutcome::Created { .. }));
    assert!(!target.join("stale.txt").exists());
    assert!(target.join("src/main.tsx").exists());
}

#[test]
fn test_env_file_is_seeded_from_example() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("template");
    make_template(&template);

    let mut config = config("my-project");
    config.setup_env = true;

    let prompter = ScriptedPrompter::new();
    generate(&config, &template, dir.path(), &prompter).unwrap();

    let target = dir.path().join("my-project");
    assert_eq!(
        fs::read(target.join(".env")).unwrap(),
        fs::read(target.join(".env.example")).unwrap()
    );
}

#[test]
fn test_missing_env_example_degrades_instead_of_failing() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("template");
    make_template(&template);
    fs::remove_file(template.join(".env.example")).unwrap();

    let mut config = config("my-project");
    config.setup_env = true;

    let prompter = ScriptedPrompter::new();
    let outcome = generate(&config, &template, dir.path(), &prompter).unwrap();

    let RunOutcome::Created { target, reports } = outcome else {
        panic!("Expected a created project");
    };
    let env_report = reports.iter().find(|r| r.name == "environment file").unwrap();
    assert!(matches!(env_report.status, StepStatus::Degraded(_)));
    assert!(!target.join(".env").exists());
    // The required steps still succeeded.
    assert_eq!(Manifest::load(&target).unwrap().unwrap().name(), Some("my-project"));
}

#[test]
fn test_failed_install_degrades_with_manual_remedy() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("template");
    make_template(&template);
    // A dependency pointing at a missing local path makes the install fail
    // without touching the network (and a missing npm binary fails the
    // spawn); either way the step degrades.
    fs::write(
        template.join("package.json"),
        r#"{ "name": "my-app", "version": "0.1.0", "private": true,
  "dependencies": { "missing-local-dep": "file:/nonexistent/path" } }
"#,
    )
    .unwrap();

    let mut config = config("my-project");
    config.install_deps = true;

    let prompter = ScriptedPrompter::new();
    let outcome = generate(&config, &template, dir.path(), &prompter).unwrap();

    let RunOutcome::Created { target, reports } = outcome else {
        panic!("Expected a created project despite the failed install");
    };
    let install_report =
        reports.iter().find(|r| r.name == "install dependencies").unwrap();
    let StepStatus::Degraded(message) = &install_report.status else {
        panic!("Expected the install step to degrade");
    };
    assert!(message.contains("npm install"));
    assert_eq!(Manifest::load(&target).unwrap().unwrap().name(), Some("my-project"));
}
