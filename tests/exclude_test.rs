use sprout::exclude::{ExcludeSet, DEFAULT_EXCLUDES};

#[test]
fn test_exact_match() {
    let set = ExcludeSet::new(&[".env"]).unwrap();
    assert!(set.matches(".env"));
    assert!(!set.matches(".env.example"));
}

#[test]
fn test_directory_prefix_match() {
    let set = ExcludeSet::new(&["dist"]).unwrap();
    assert!(set.matches("dist"));
    assert!(set.matches("dist/assets/app.js"));
    assert!(!set.matches("distribution/app.js"));
}

#[test]
fn test_basename_match_at_any_depth() {
    let set = ExcludeSet::new(&["node_modules"]).unwrap();
    assert!(set.matches("node_modules"));
    assert!(set.matches("packages/web/node_modules"));
    assert!(set.matches("node_modules/react/package.json"));
}

#[test]
fn test_basename_match_applies_to_top_level_files() {
    // Matching is a union of the strategies; a top-level file that shares a
    // rule's name is excluded too.
    let set = ExcludeSet::new(&["build"]).unwrap();
    assert!(set.matches("build"));
    assert!(set.matches("scripts/build"));
}

#[test]
fn test_glob_rule() {
    let set = ExcludeSet::new(&["*.log"]).unwrap();
    assert!(set.matches("debug.log"));
    assert!(!set.matches("src/app.tsx"));
}

#[test]
fn test_invalid_glob_rule() {
    assert!(ExcludeSet::new(&["[unclosed"]).is_err());
}

#[test]
fn test_empty_set_matches_nothing() {
    let set = ExcludeSet::empty();
    assert!(!set.matches("node_modules"));
    assert!(!set.matches(".git"));
}

#[test]
fn test_default_rules() {
    let set = ExcludeSet::defaults().unwrap();
    for rule in DEFAULT_EXCLUDES {
        assert!(set.matches(rule), "default rule '{}' should match itself", rule);
    }
    assert!(set.matches("node_modules/react/index.js"));
    assert!(set.matches(".git/HEAD"));
    assert!(set.matches("package-lock.json"));
    assert!(!set.matches(".env.example"));
    assert!(!set.matches("src/main.tsx"));
    assert!(!set.matches("package.json"));
}
