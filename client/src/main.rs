mod cli;
mod game;
mod options;
mod player;

use std::path::Path;

use anyhow::{anyhow, Result};
use clap::Parser;
use cli::{Cli, Commands, PlayCommand, DEFAULT_CONFIG};
use common::{ConfigLoader, FsExt};
use dotenv::dotenv;
use env_logger::Env;
use knights::GameState;
use log::info;
use options::PlayOptions;
use player::create_player;

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Play(play_args) => play(play_args),
    }
}

fn play(play_args: &PlayCommand) -> Result<()> {
    let config = load_config(&play_args.config)?;

    let mut options: PlayOptions = config.load()?;
    options.apply_overrides(play_args);
    options.validate()?;

    info!("{:?}", options);

    let mut players = [
        create_player(options.player1, &options),
        create_player(options.player2, &options),
    ];

    let game_state = GameState::new(options.width, options.height);
    let record = game::play_game(game_state, &mut players, &mut std::io::stdout())?;

    if let Some(record_path) = &play_args.record {
        let record_path = record_path.relative_to_cwd()?;
        record.save(&record_path)?;
        info!("Saved game record to {:?}", record_path);
    }

    Ok(())
}

/// The default config file is optional. An explicitly passed one must exist.
fn load_config(config: &str) -> Result<ConfigLoader> {
    let config_path = config.relative_to_cwd()?;
    let scope = "play".to_string();

    if config_path.is_file() {
        ConfigLoader::new(config_path, scope)
    } else if config == DEFAULT_CONFIG {
        info!("No {} found, using defaults", DEFAULT_CONFIG);
        Ok(ConfigLoader::empty(scope))
    } else {
        Err(anyhow!("{:?} is not a valid config file", Path::new(config)))
    }
}
