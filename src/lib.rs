// src/lib.rs

pub mod batch;
pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod records;

use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info};

use crate::batch::{run_batch, Invocation, ProcessBackend};
use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::ConfigFile;
use crate::errors::TemplerunError;
use crate::records::{load_templates, load_texts, pair_records};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - record loading (templates + texts)
/// - positional pairing
/// - the process executor backend
/// - the sequential batch driver
pub async fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let cfg = load_and_validate(&config_path)?;

    let templates_path = resolve_input_path(
        args.templates.as_deref(),
        cfg.inputs.templates.as_deref(),
        "templates",
    )?;
    let texts_path =
        resolve_input_path(args.texts.as_deref(), cfg.inputs.texts.as_deref(), "texts")?;

    // Both sources load fully before anything executes; a fatal input error
    // here means zero invocations have happened.
    let templates = load_templates(&templates_path)?;
    let texts = load_texts(&texts_path)?;

    let pairs = pair_records(&templates, &texts);
    info!(
        templates = templates.len(),
        texts = texts.len(),
        pairs = pairs.len(),
        "paired input records"
    );

    if args.dry_run {
        print_dry_run(&cfg, &pairs);
        return Ok(());
    }

    let mut backend = ProcessBackend::new();
    let report = run_batch(&pairs, &cfg.tool, &mut backend).await?;

    if args.strict {
        report.strict_result()?;
    }

    Ok(())
}

/// Resolve one input path: CLI flag wins, then `[inputs]` from the config.
///
/// Neither being set is a configuration error, reported before any loading.
fn resolve_input_path(
    cli_value: Option<&str>,
    config_value: Option<&str>,
    name: &str,
) -> errors::Result<PathBuf> {
    match cli_value.or(config_value) {
        Some(path) => Ok(PathBuf::from(path)),
        None => Err(TemplerunError::ConfigError(format!(
            "no {name} source configured: pass --{name} or set [inputs].{name}"
        ))),
    }
}

/// Simple dry-run output: print every invocation line without executing.
fn print_dry_run(
    cfg: &ConfigFile,
    pairs: &[(&records::TextRecord, &records::TemplateRecord)],
) {
    println!("templerun dry-run");
    println!("  tool.executable = {}", cfg.tool.executable);
    println!("  tool.config = {}", cfg.tool.config);
    println!();

    println!("invocations ({}):", pairs.len());
    for &(text, template) in pairs.iter() {
        let invocation = Invocation::build(&cfg.tool, text, template);
        println!("  {}", invocation.render());
    }

    debug!("dry-run complete (no execution)");
}
