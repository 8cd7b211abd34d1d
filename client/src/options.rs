use anyhow::{anyhow, Result};
use clap::ValueEnum;
use common::{Config, ConfigLoader};
use knights::MAX_BOARD_WIDTH;
use serde::{Deserialize, Serialize};

use crate::cli::PlayCommand;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Ai,
    Human,
    Random,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct PlayOptions {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
    pub player1: PlayerKind,
    pub player2: PlayerKind,
    pub table_capacity: usize,
    pub seed: Option<u64>,
}

impl PlayOptions {
    pub fn apply_overrides(&mut self, command: &PlayCommand) {
        if let Some(width) = command.width {
            self.width = width;
        }
        if let Some(height) = command.height {
            self.height = height;
        }
        if let Some(depth) = command.depth {
            self.depth = depth;
        }
        if let Some(player1) = command.player1 {
            self.player1 = player1;
        }
        if let Some(player2) = command.player2 {
            self.player2 = player2;
        }
        if command.seed.is_some() {
            self.seed = command.seed;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.width > MAX_BOARD_WIDTH {
            return Err(anyhow!(
                "width must be between 1 and {}, got {}",
                MAX_BOARD_WIDTH,
                self.width
            ));
        }

        if self.height == 0 {
            return Err(anyhow!("height must be at least 1"));
        }

        if self.depth == 0 {
            return Err(anyhow!("depth must be at least 1"));
        }

        Ok(())
    }
}

fn get_player_kind(config: &ConfigLoader, name: &str, default: PlayerKind) -> Result<PlayerKind> {
    match config.get(name).and_then(|v| v.as_string()) {
        Some(kind) => PlayerKind::from_str(&kind, true)
            .map_err(|_| anyhow!("{} must be one of ai, human or random, got {:?}", name, kind)),
        None => Ok(default),
    }
}

impl Config for PlayOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        Ok(Self {
            width: config
                .get("width")
                .and_then(|v| v.as_usize())
                .unwrap_or(8),
            height: config
                .get("height")
                .and_then(|v| v.as_usize())
                .unwrap_or(8),
            depth: config
                .get("depth")
                .and_then(|v| v.as_usize())
                .unwrap_or(11),
            player1: get_player_kind(config, "player1", PlayerKind::Ai)?,
            player2: get_player_kind(config, "player2", PlayerKind::Human)?,
            table_capacity: config
                .get("table_capacity")
                .and_then(|v| v.as_usize())
                .unwrap_or(1_000_000),
            seed: config.get("seed").and_then(|v| v.as_u64()),
        })
    }
}
