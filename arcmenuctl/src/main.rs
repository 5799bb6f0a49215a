//! Drive a headless arcmenu from the command line.
#![allow(missing_docs)]

mod script;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use arcmenu_core::infra::RuntimeConfig;
use arcmenu_model::{IconRef, normalize_entries};
use clap::{Parser, Subcommand};
use env_logger::{Builder, Target};
use log::LevelFilter;
use serde_json::Value;

use crate::script::{Replay, parse_script};

#[derive(Parser)]
#[command(name = "arcmenuctl", about = "Headless arcmenu driver")]
struct Cli {
    /// Log controller decisions at debug level (ignored when RUST_LOG is set)
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a JSON script of host messages and input events
    Replay {
        script: PathBuf,
        /// TOML or JSON file with runtime overrides
        #[arg(long)]
        config: Option<PathBuf>,
        /// Viewport width in pixels
        #[arg(long, default_value_t = 1280.0)]
        viewport: f32,
        /// Print the menu state after every step
        #[arg(long)]
        trace: bool,
    },
    /// Print the HTML fragments for a JSON array of entries
    Render { entries: PathBuf },
    /// Show how an icon value would be rendered
    ClassifyIcon { value: String },
}

fn init_logger(verbose: bool) {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
        return;
    }
    let crate_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    Builder::new()
        .target(Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .filter_module("arcmenu_core", crate_level)
        .filter_module("arcmenuctl", crate_level)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Command::Replay {
            script,
            config,
            viewport,
            trace,
        } => replay(&script, config.as_deref(), viewport, trace),
        Command::Render { entries } => render(&entries),
        Command::ClassifyIcon { value } => {
            println!("{}", IconRef::classify(&value));
            Ok(())
        }
    }
}

fn render(path: &Path) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read entries {}", path.display()))?;
    let values: Vec<Value> = serde_json::from_str(&text)
        .context("entries must be a JSON array of objects")?;
    let entries = normalize_entries(&values)?;
    let output = arcmenu_core::render::render(&entries);
    if let Some(header) = output.header_markup() {
        println!("{header}");
    }
    println!("{}", output.items_markup());
    Ok(())
}

fn replay(
    script: &Path,
    config: Option<&Path>,
    viewport: f32,
    trace: bool,
) -> Result<()> {
    let rc = match config {
        Some(path) => RuntimeConfig::load(path).with_context(|| {
            format!("failed to load config {}", path.display())
        })?,
        None => RuntimeConfig::default(),
    };
    anyhow::ensure!(
        viewport.is_finite() && viewport >= 0.0,
        "viewport must be a non-negative width, got {viewport}"
    );

    let text = std::fs::read_to_string(script)
        .with_context(|| format!("failed to read script {}", script.display()))?;
    let steps = parse_script(&text)?;
    log::debug!("[Menu] replaying {} steps", steps.len());

    let mut replay = Replay::new(&rc, viewport, trace);
    for line in replay.run(&steps)? {
        println!("{line}");
    }
    Ok(())
}
