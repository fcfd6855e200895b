use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_SNAP_URL: &str =
    "https://github.com/omnivector-solutions/snap-slurm/releases/download/20.02/slurm_20.02.1_amd64_classic.snap";

#[derive(Parser, Debug)]
#[command(
    name = "charmdev",
    version,
    about = "Slurm charm development tasks",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        short = 'C',
        long,
        global = true,
        default_value = ".",
        help = "Working directory for all targets"
    )]
    pub directory: PathBuf,
    #[arg(
        long,
        global = true,
        help = "Print what would run without touching anything"
    )]
    pub dry_run: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_SNAP_URL,
        help = "URL of the classic slurm snap"
    )]
    pub snap_url: String,
    #[command(subcommand)]
    pub target: Option<Target>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Target {
    /// Run linter against charm source
    Lint,
    /// Remove build dirs, temp files, and artifacts
    Clean,
    /// Build all charms
    Charms,
    /// Pull the classic slurm snap
    PullClassicSnap,
    /// Push charms to edge channel on the charm store
    PushCharmsToEdge,
    /// Show the target listing
    Help,
}
