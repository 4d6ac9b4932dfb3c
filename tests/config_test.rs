use std::fs;

use tempfile::TempDir;

use bump::config::{Config, Settings};
use bump::version::{BumpKind, Version};

#[test]
fn test_default_action_is_patch() {
    let config = Config::from_flags(None, false, false, false, false, false).unwrap();
    assert_eq!(config.bump, BumpKind::Patch);
    assert_eq!(config.version, None);
    assert!(!config.dry_run);
    assert!(!config.force);
}

#[test]
fn test_increment_flags_select_bump_kind() {
    let config = Config::from_flags(None, false, true, false, false, false).unwrap();
    assert_eq!(config.bump, BumpKind::Minor);

    let config = Config::from_flags(None, false, false, true, true, true).unwrap();
    assert_eq!(config.bump, BumpKind::Major);
    assert!(config.dry_run);
    assert!(config.force);
}

#[test]
fn test_version_excludes_increment_flags() {
    let err =
        Config::from_flags(Some("v2.0.0".to_string()), true, false, false, false, false)
            .unwrap_err();
    assert!(err
        .to_string()
        .contains("cannot set --version and an increment flag"));
}

#[test]
fn test_at_most_one_increment_flag() {
    let err = Config::from_flags(None, true, true, false, false, false).unwrap_err();
    assert!(err
        .to_string()
        .contains("cannot set more than one increment flag"));

    let err = Config::from_flags(None, false, true, true, false, false).unwrap_err();
    assert!(err
        .to_string()
        .contains("cannot set more than one increment flag"));
}

#[test]
fn test_explicit_version_allowed_alone() {
    let config =
        Config::from_flags(Some("v2.0.0".to_string()), false, false, false, false, false).unwrap();
    assert_eq!(config.version.as_deref(), Some("v2.0.0"));
}

#[test]
fn test_settings_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.commit_message, "bump version to {version}");
    assert_eq!(settings.tag_message, "tag created by bump");
    assert_eq!(settings.ignore_file, ".bumpignore");
}

#[test]
fn test_settings_load_from_repo_root() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("bump.toml"),
        "commit_message = \"release {version}\"\nignore_file = \".skipbump\"\n",
    )
    .unwrap();

    let settings = Settings::load(dir.path()).unwrap();
    assert_eq!(settings.commit_message, "release {version}");
    assert_eq!(settings.ignore_file, ".skipbump");
    // Unset keys fall back to their defaults.
    assert_eq!(settings.tag_message, "tag created by bump");
}

#[test]
fn test_settings_invalid_toml_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bump.toml"), "commit_message = [broken\n").unwrap();

    let err = Settings::load(dir.path()).unwrap_err();
    assert!(err.to_string().contains("invalid bump.toml"));
}

#[test]
fn test_commit_message_template() {
    let settings = Settings::default();
    let version = Version::parse("v1.2.3").unwrap();
    assert_eq!(settings.commit_message_for(&version), "bump version to v1.2.3");
}
