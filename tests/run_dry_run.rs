// tests/run_dry_run.rs

mod common;
use crate::common::init_tracing;

use std::fs;
use std::path::Path;

use tempfile::tempdir;

use templerun::cli::CliArgs;
use templerun::errors::TemplerunError;

fn args_for(dir: &Path) -> CliArgs {
    CliArgs {
        config: dir.join("Templerun.toml").display().to_string(),
        templates: None,
        texts: None,
        strict: false,
        log_level: None,
        dry_run: true,
    }
}

fn write_config(dir: &Path) {
    fs::write(
        dir.join("Templerun.toml"),
        format!(
            r#"
[tool]
executable = "DataTemple"
config = "config.xml"

[inputs]
templates = "{}"
texts = "{}"
"#,
            dir.join("templates.json").display(),
            dir.join("texts.json").display()
        ),
    )
    .unwrap();
}

#[tokio::test]
async fn dry_run_succeeds_with_valid_sources() {
    init_tracing();

    let dir = tempdir().unwrap();
    write_config(dir.path());
    fs::write(
        dir.path().join("templates.json"),
        r#"[["p0", "t0", "o0.xml"], ["p1", "t1", "o1.xml"]]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("texts.json"),
        r#"["first sample", "second sample", "dropped sample"]"#,
    )
    .unwrap();

    templerun::run(args_for(dir.path())).await.unwrap();
}

#[tokio::test]
async fn missing_templates_source_aborts_before_any_execution() {
    init_tracing();

    let dir = tempdir().unwrap();
    write_config(dir.path());
    // Only the texts source exists.
    fs::write(dir.path().join("texts.json"), r#"["only text"]"#).unwrap();

    let err = templerun::run(args_for(dir.path())).await.unwrap_err();
    let err = err
        .downcast::<TemplerunError>()
        .expect("expected a TemplerunError");
    assert!(matches!(err, TemplerunError::InputNotFound { .. }));
}

#[tokio::test]
async fn missing_config_file_aborts_with_a_message_naming_it() {
    init_tracing();

    let args = args_for(Path::new("/nonexistent"));

    let err = templerun::run(args).await.unwrap_err();
    let msg = format!("{err:#}");
    assert!(
        msg.contains("/nonexistent/Templerun.toml"),
        "message does not name the config path: {msg}"
    );
}

#[tokio::test]
async fn unconfigured_texts_source_is_a_config_error() {
    init_tracing();

    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("Templerun.toml"),
        r#"
[tool]
executable = "DataTemple"
config = "config.xml"
"#,
    )
    .unwrap();

    let mut args = args_for(dir.path());
    args.templates = Some(dir.path().join("templates.json").display().to_string());

    let err = templerun::run(args).await.unwrap_err();
    let err = err
        .downcast::<TemplerunError>()
        .expect("expected a TemplerunError");
    assert!(matches!(err, TemplerunError::ConfigError(_)));
}
