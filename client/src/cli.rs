use clap::{Args, Parser, Subcommand};

use crate::options::PlayerKind;

pub const DEFAULT_CONFIG: &str = "knights.conf";

#[derive(Parser)]
#[clap(author, version)]
#[clap(name = "knights")]
#[clap(
    about = "Two knights on a shrinking board. The player who cannot move loses.",
    long_about = None
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Play(PlayCommand),
}

/// Command line values override the config file.
#[derive(Args)]
pub struct PlayCommand {
    #[clap(short, long, default_value_t = String::from(DEFAULT_CONFIG))]
    pub config: String,

    #[clap(long)]
    pub width: Option<usize>,

    #[clap(long)]
    pub height: Option<usize>,

    /// Search depth in plies for AI players.
    #[clap(short, long)]
    pub depth: Option<usize>,

    #[clap(long, value_enum)]
    pub player1: Option<PlayerKind>,

    #[clap(long, value_enum)]
    pub player2: Option<PlayerKind>,

    /// Seed for random players.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Writes the finished game as JSON to this path.
    #[clap(short, long)]
    pub record: Option<String>,
}
