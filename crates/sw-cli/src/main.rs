use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use sw_config::SwinConfig;

mod cmd_check;
mod cmd_explain;
mod cmd_fmt;
mod tracing_init;

use tracing_init::init_tracing;

const DEFAULT_CONFIG: &str = "swin.toml";

#[derive(Parser)]
#[command(name = "swin", about = "Streaming window clause compiler")]
struct Cli {
    /// Path to swin.toml (defaults to ./swin.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical form of a window clause
    Fmt {
        #[command(flatten)]
        input: ClauseInput,
    },
    /// Check a window clause and report diagnostics
    Check {
        #[command(flatten)]
        input: ClauseInput,
    },
    /// Explain a window clause and the descriptor it lowers to
    Explain {
        #[command(flatten)]
        input: ClauseInput,
    },
}

#[derive(Args)]
struct ClauseInput {
    /// Window clause, e.g. "HOPPING ( SIZE 5 SECONDS , ADVANCE BY 2 SECONDS )"
    #[arg(required_unless_present = "file")]
    clause: Option<String>,

    /// Read the clause from a file instead
    #[arg(short, long, conflicts_with = "clause")]
    file: Option<PathBuf>,
}

impl ClauseInput {
    fn read(&self) -> Result<String> {
        match (&self.clause, &self.file) {
            (Some(clause), _) => Ok(clause.clone()),
            (None, Some(path)) => std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display())),
            (None, None) => anyhow::bail!("no window clause given"),
        }
    }
}

fn load_config(explicit: Option<&Path>) -> Result<(SwinConfig, PathBuf)> {
    let cwd = std::env::current_dir()?;
    let path = match explicit {
        Some(p) => Some(
            p.canonicalize()
                .map_err(|e| anyhow::anyhow!("config path '{}': {e}", p.display()))?,
        ),
        None => Some(cwd.join(DEFAULT_CONFIG)).filter(|p| p.is_file()),
    };
    match path {
        Some(path) => {
            let config = SwinConfig::load(&path)?;
            let base_dir = path.parent().map(Path::to_path_buf).unwrap_or(cwd);
            Ok((config, base_dir))
        }
        None => Ok((SwinConfig::default(), cwd)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, base_dir) = load_config(cli.config.as_deref())?;
    let _guard = init_tracing(&config.logging, &base_dir)?;
    tracing::debug!(domain = "conf", base_dir = %base_dir.display(), "configuration loaded");

    let options = config.check.to_options();
    match cli.command {
        Commands::Fmt { input } => cmd_fmt::run(&input.read()?),
        Commands::Check { input } => cmd_check::run(&input.read()?, &options),
        Commands::Explain { input } => cmd_explain::run(&input.read()?, &options),
    }
}
