//! Entry point for the locale synchronization CLI.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use i18n_locale_sync::config::{
    self,
    ConfigError,
    SyncSettings,
};
use i18n_locale_sync::sync::sync_locales;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "i18n-locale-sync",
    version,
    about = "Synchronize i18next-style translation files against a master locale",
    long_about = None
)]
struct Cli {
    /// Master locale whose key structure is authoritative
    #[arg(short, long)]
    master: Option<String>,

    /// Directory holding one subdirectory per locale
    #[arg(short, long)]
    locales_dir: Option<PathBuf>,

    /// Translation file name inside each locale directory
    #[arg(long)]
    file_name: Option<String>,

    /// Produce a side-by-side CSV of all locales
    #[arg(long)]
    csv: bool,

    /// Output directory for the CSV export
    #[arg(long)]
    csv_out_dir: Option<PathBuf>,

    /// Output file stem for the CSV export (".csv" is appended)
    #[arg(long)]
    csv_out_file: Option<String>,

    /// Workspace root to read `.i18n-sync.json` from
    #[arg(short, long, default_value = ".")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut settings = config::load_from_workspace(&cli.config)?.unwrap_or_default();
    apply_overrides(&mut settings, cli);
    settings.validate().map_err(ConfigError::ValidationErrors)?;

    let report = sync_locales(&settings)?;
    tracing::debug!(?report, "Synchronization finished");

    Ok(())
}

/// CLI flags win over the workspace configuration file.
fn apply_overrides(settings: &mut SyncSettings, cli: &Cli) {
    if let Some(master) = &cli.master {
        settings.master_locale.clone_from(master);
    }
    if let Some(dir) = &cli.locales_dir {
        settings.locales_dir.clone_from(dir);
    }
    if let Some(name) = &cli.file_name {
        settings.translation_file_name.clone_from(name);
    }
    if cli.csv {
        settings.export.enabled = true;
    }
    if let Some(dir) = &cli.csv_out_dir {
        settings.export.out_dir.clone_from(dir);
    }
    if let Some(stem) = &cli.csv_out_file {
        settings.export.out_file.clone_from(stem);
    }
}
