use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use knights::{Coordinate, GameState};
use log::info;
use serde::{Deserialize, Serialize};

use crate::player::Player;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct GameRecord {
    pub width: usize,
    pub height: usize,
    pub moves: Vec<Coordinate>,
    pub loser: usize,
}

impl GameRecord {
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create game record at: {:?}", path))?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;

        Ok(())
    }
}

/// Plays until the player to move has no legal move, printing the board before every ply.
pub fn play_game(
    mut game_state: GameState,
    players: &mut [Box<dyn Player>; 2],
    output: &mut impl Write,
) -> Result<GameRecord> {
    let mut moves = vec![];

    loop {
        writeln!(output, "{}", game_state)?;

        if game_state.is_terminal() {
            break;
        }

        let player_to_move = game_state.player_to_move();
        let player = &mut players[player_to_move - 1];
        let action = player.choose_action(&mut game_state)?;

        game_state
            .apply_move(&action.to_string())
            .with_context(|| {
                format!("{} player {} chose {}", player.name(), player_to_move, action)
            })?;

        info!("Player {} ({}) plays {}", player_to_move, player.name(), action);
        writeln!(output, "Move #{}: player {} plays {}", moves.len() + 1, player_to_move, action)?;

        moves.push(action);
    }

    let loser = game_state.player_to_move();
    writeln!(output, "player {} loses", loser)?;

    Ok(GameRecord {
        width: game_state.width(),
        height: game_state.height(),
        moves,
        loser,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{AiPlayer, RandomPlayer};

    #[test]
    fn test_degenerate_board_ends_immediately() {
        let mut players: [Box<dyn Player>; 2] = [
            Box::new(RandomPlayer::from_seed(1)),
            Box::new(RandomPlayer::from_seed(2)),
        ];
        let mut output = vec![];

        let record = play_game(GameState::new(1, 2), &mut players, &mut output).unwrap();

        assert!(record.moves.is_empty());
        assert_eq!(record.loser, 1);
        assert!(String::from_utf8(output).unwrap().ends_with("player 1 loses\n"));
    }

    #[test]
    fn test_random_game_replays_to_same_result() {
        let mut players: [Box<dyn Player>; 2] = [
            Box::new(RandomPlayer::from_seed(3)),
            Box::new(AiPlayer::new(3, 10_000)),
        ];
        let mut output = vec![];

        let record = play_game(GameState::new(6, 6), &mut players, &mut output).unwrap();

        let mut state = GameState::new(record.width, record.height);
        for action in &record.moves {
            state.apply_move(&action.to_string()).unwrap();
        }

        assert!(state.is_terminal());
        assert_eq!(state.player_to_move(), record.loser);
        assert!(record.moves.len() <= 36);
    }

    #[test]
    fn test_record_serializes_labels() {
        let record = GameRecord {
            width: 4,
            height: 4,
            moves: vec!["B3".parse().unwrap(), "C2".parse().unwrap()],
            loser: 1,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"width":4,"height":4,"moves":["B3","C2"],"loser":1}"#
        );
        assert_eq!(serde_json::from_str::<GameRecord>(&json).unwrap(), record);
    }
}
