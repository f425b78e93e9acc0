use cram_launcher::{LauncherConfig, LauncherError};
use std::fs;
use tempfile::tempdir;

#[test]
fn missing_default_file_falls_back_to_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let cfg = LauncherConfig::load(tmp.path(), None)?;
    assert_eq!(cfg, LauncherConfig::default());
    Ok(())
}

#[test]
fn default_file_in_root_is_layered_over_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    fs::write(
        tmp.path().join("cram.toml"),
        "venv_name = \".venv\"\n\n[runner]\nversion = \"0.16.0\"\n",
    )?;

    let cfg = LauncherConfig::load(tmp.path(), None)?;
    assert_eq!(cfg.venv_name, ".venv");
    assert_eq!(cfg.runner.version, "0.16.0");
    assert_eq!(cfg.runner.package, "prysk");
    assert_eq!(cfg.python, "python3");
    Ok(())
}

#[test]
fn explicit_missing_file_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let err = LauncherConfig::load(tmp.path(), Some(&tmp.path().join("nope.toml")))
        .expect_err("explicit config must exist");
    assert!(matches!(err, LauncherError::Config { .. }));
    Ok(())
}

#[test]
fn malformed_file_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let path = tmp.path().join("cram.toml");
    fs::write(&path, "[runner\nversion = ")?;

    let err = LauncherConfig::load(tmp.path(), Some(&path)).expect_err("invalid toml");
    assert!(err.to_string().starts_with("Config error (Failed to build config)"), "{err}");
    Ok(())
}
