//! CLI entry point for licenseguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup, and
//! exit codes. All business logic lives in the `licenseguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use licenseguard_app::{CheckInput, GateInput, ReportFormat, run_check, run_gate};
use licenseguard_domain::{CollectMode, GateOutcome};
use licenseguard_repo::ProjectFiles;
use std::io::Read;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "licenseguard",
    version,
    about = "License policy auditor for installed package dependencies"
)]
struct Cli {
    /// Project root (directory containing the root manifest).
    #[arg(long, short = 'd', default_value = ".")]
    working_dir: Utf8PathBuf,

    /// Root manifest path [default: <working-dir>/composer.json].
    #[arg(long)]
    manifest: Option<Utf8PathBuf>,

    /// Installed-package database [default: <working-dir>/vendor/composer/installed.json].
    #[arg(long)]
    installed: Option<Utf8PathBuf>,

    /// Standalone policy TOML; replaces the manifest's policy block.
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check licenses of installed dependencies against the project policy.
    #[command(name = "check-licenses")]
    CheckLicenses {
        /// Output format (text or json).
        #[arg(long, short = 'f', default_value = "text")]
        format: String,

        /// Only check packages reachable through runtime requirements.
        #[arg(long)]
        no_dev: bool,
    },

    /// Decide one package lifecycle event; exits 1 when the operation must be aborted.
    Gate {
        /// Event JSON file, or `-` for stdin.
        #[arg(long, default_value = "-")]
        event: String,
    },
}

impl Cli {
    fn files(&self) -> ProjectFiles {
        let defaults = ProjectFiles::in_root(&self.working_dir);
        let files = ProjectFiles {
            manifest: self.manifest.clone().unwrap_or(defaults.manifest),
            installed: self.installed.clone().unwrap_or(defaults.installed),
        };
        tracing::debug!(manifest = %files.manifest, installed = %files.installed, "project files");
        files
    }

    fn config_text(&self) -> anyhow::Result<Option<String>> {
        self.config
            .as_deref()
            .map(|path| read_text(path).context("read config"))
            .transpose()
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.cmd {
        Commands::CheckLicenses { format, no_dev } => cmd_check_licenses(&cli, format, *no_dev),
        Commands::Gate { event } => cmd_gate(&cli, event),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("licenseguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn cmd_check_licenses(cli: &Cli, format: &str, no_dev: bool) -> anyhow::Result<i32> {
    let format: ReportFormat = format.parse()?;
    let files = cli.files();
    let config_text = cli.config_text()?;

    let output = run_check(CheckInput {
        manifest_path: &files.manifest,
        installed_path: &files.installed,
        config_text: config_text.as_deref(),
        format,
        mode: CollectMode::from_no_dev(no_dev),
    })?;

    print!("{}", output.rendered);
    Ok(output.exit_code())
}

fn cmd_gate(cli: &Cli, event: &str) -> anyhow::Result<i32> {
    let event_text = if event == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read event from stdin")?;
        buf
    } else {
        read_text(Utf8Path::new(event)).context("read event")?
    };
    let files = cli.files();
    let config_text = cli.config_text()?;

    let output = run_gate(GateInput {
        manifest_path: &files.manifest,
        config_text: config_text.as_deref(),
        event_text: &event_text,
    })?;

    match &output.decision {
        Ok(GateOutcome::Warned { message }) => eprintln!("{message}"),
        Ok(GateOutcome::Passed | GateOutcome::Skipped) => {}
        Err(blocked) => eprintln!("{blocked}"),
    }
    Ok(output.exit_code())
}

fn read_text(path: &Utf8Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read {path}"))
}
