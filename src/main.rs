//! numgen - regenerate the numeric vector types
//!
//! Usage: numgen [--config <PATH>] [--out-dir <DIR>] [--check]
//!
//! Without flags every file is regenerated into `generated/`, overwriting
//! what is there.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use numgen::{Driver, GeneratorConfig};

#[derive(Parser)]
#[command(name = "numgen")]
#[command(about = "Generate the Int/Float/Double/Bool vector value types")]
struct Cli {
    /// YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory, overriding the configuration
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Compare with the files on disk instead of writing
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "numgen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(dir) = cli.out_dir {
        config.output_dir = dir;
    }

    let driver = Driver::new(config);

    if cli.check {
        let report = driver.check()?;
        if !report.is_clean() {
            bail!(
                "{} missing and {} drifted file(s) in {}",
                report.missing.len(),
                report.changed.len(),
                driver.output_dir().display()
            );
        }
        tracing::info!(files = report.checked, "Generated files are up to date");
        return Ok(());
    }

    let manifest = driver.write_all()?;
    tracing::info!(
        files = manifest.len(),
        dir = %driver.output_dir().display(),
        namespace = %driver.config().emit.namespace,
        "Generation complete"
    );
    Ok(())
}
