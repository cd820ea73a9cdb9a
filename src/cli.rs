use crate::api::{self, Components};
use crate::config::ExportConfig;
use crate::logging::init_logging;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

#[derive(Parser)]
#[command(name = "sitecat", version, about = "Export a listing catalog from a sitemap (JSON output)")]
pub struct Cli {
    /// JSON config file; missing keys keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sitemap URL to resolve
    #[arg(long)]
    sitemap: Option<String>,

    /// Output file, replaced on every run
    #[arg(long)]
    output: Option<PathBuf>,

    /// Category written on every listing
    #[arg(long)]
    category: Option<String>,

    /// Print the effective configuration and exit
    #[arg(long = "print-config")]
    print_config: bool,

    /// Print a JSON summary after a successful export
    #[arg(long)]
    summary: bool,
}

impl Cli {
    fn effective_config(&self) -> anyhow::Result<ExportConfig> {
        let mut cfg = match &self.config {
            Some(path) => ExportConfig::load(path)?,
            None => ExportConfig::default(),
        };
        if let Some(url) = &self.sitemap {
            cfg.sitemap_url = url.clone();
        }
        if let Some(path) = &self.output {
            cfg.output_path = path.clone();
        }
        if let Some(category) = &self.category {
            cfg.category = category.clone();
        }
        cfg.validate().context("invalid configuration")?;
        Ok(cfg)
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> anyhow::Result<()> {
    let cfg = cli.effective_config()?;
    if cli.print_config {
        print_json(&cfg)?;
        return Ok(());
    }

    let components = Components::from_config(&cfg).context("failed to set up exporter")?;
    let summary = api::export_catalog(&cfg, &components)
        .with_context(|| format!("export from {} failed", cfg.sitemap_url))?;

    if cli.summary {
        print_json(&summary)?;
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(val: &T) -> anyhow::Result<()> {
    // pretty JSON output
    println!("{}", serde_json::to_string_pretty(val)?);
    Ok(())
}
