use std::io::{BufRead, Cursor, Stdin, Stdout, Write};

use anyhow::{anyhow, Result};
use itertools::Itertools;
use knights::{Coordinate, Engine, GameState};
use log::{info, warn};
use negamax::Negamax;
use rand::prelude::{SeedableRng, StdRng};
use rand::Rng;

use crate::options::{PlayOptions, PlayerKind};

pub trait Player {
    fn name(&self) -> &str;

    /// Picks a legal move. Implementations may search `game_state` in place but must leave it as
    /// they found it.
    fn choose_action(&mut self, game_state: &mut GameState) -> Result<Coordinate>;
}

pub fn create_player(kind: PlayerKind, options: &PlayOptions) -> Box<dyn Player> {
    match kind {
        PlayerKind::Ai => Box::new(AiPlayer::new(options.depth, options.table_capacity)),
        PlayerKind::Human => Box::new(HumanPlayer::stdio()),
        PlayerKind::Random => Box::new(match options.seed {
            Some(seed) => RandomPlayer::from_seed(seed),
            None => RandomPlayer::new(),
        }),
    }
}

pub struct AiPlayer {
    engine: Engine,
    negamax: Negamax<Engine>,
}

impl AiPlayer {
    pub fn new(depth: usize, table_capacity: usize) -> Self {
        Self {
            engine: Engine::new(),
            negamax: Negamax::with_table_capacity(depth, table_capacity),
        }
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        "AI"
    }

    fn choose_action(&mut self, game_state: &mut GameState) -> Result<Coordinate> {
        let result = self
            .negamax
            .search(&self.engine, game_state)
            .ok_or_else(|| anyhow!("No legal moves to search"))?;

        info!(
            "AI chose {} with value {} after {} nodes at depth {}",
            result.action,
            result.value,
            result.nodes,
            self.negamax.depth()
        );

        Ok(result.action)
    }
}

/// Source of typed moves. Stdin is only locked for the duration of a single read, so several
/// human players can share it.
pub trait LineReader {
    fn read_line(&mut self, buf: &mut String) -> std::io::Result<usize>;
}

impl LineReader for Stdin {
    fn read_line(&mut self, buf: &mut String) -> std::io::Result<usize> {
        Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineReader for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> std::io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Reads moves line by line. `show moves` lists the legal moves and `quit` aborts the game.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
}

impl HumanPlayer<Stdin, Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin(), std::io::stdout())
    }
}

impl<R: LineReader, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: LineReader, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        "Human"
    }

    fn choose_action(&mut self, game_state: &mut GameState) -> Result<Coordinate> {
        loop {
            write!(self.output, "Player {} what do you play? ", game_state.player_to_move())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(anyhow!("Input closed before a move was entered"));
            }

            let line = line.trim();
            match line.to_lowercase().as_str() {
                "" => continue,
                "quit" => return Err(anyhow!("Game aborted")),
                "show moves" => {
                    let moves = game_state.legal_move_labels().iter().join(" ");
                    writeln!(self.output, "Possible moves: {}", moves)?;
                    continue;
                }
                _ => {}
            }

            match game_state.check_move(&line.to_uppercase()) {
                Ok(coord) => return Ok(coord),
                Err(err) => {
                    warn!("Rejected input {:?}: {}", line, err);
                    writeln!(self.output, "{}", err)?;
                }
            }
        }
    }
}

pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_action(&mut self, game_state: &mut GameState) -> Result<Coordinate> {
        let moves = game_state.legal_moves();
        if moves.is_empty() {
            return Err(anyhow!("No legal moves to choose from"));
        }

        Ok(moves[self.rng.gen_range(0..moves.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn human(input: &str) -> HumanPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        HumanPlayer::new(Cursor::new(input.as_bytes().to_vec()), vec![])
    }

    #[test]
    fn test_human_accepts_legal_move() {
        let mut player = human("C2\n");
        let mut state = GameState::new(4, 4);

        assert_eq!(player.choose_action(&mut state).unwrap().to_string(), "C2");
    }

    #[test]
    fn test_human_accepts_lowercase() {
        let mut player = human("b3\n");
        let mut state = GameState::new(4, 4);

        assert_eq!(player.choose_action(&mut state).unwrap().to_string(), "B3");
    }

    #[test]
    fn test_human_reprompts_on_bad_input() {
        let mut player = human("Z9\nA2\n\nshow moves\nB3\n");
        let mut state = GameState::new(4, 4);

        assert_eq!(player.choose_action(&mut state).unwrap().to_string(), "B3");

        let output = String::from_utf8(player.output).unwrap();
        assert!(output.contains("invalid move label \"Z9\""));
        assert!(output.contains("illegal move A2"));
        assert!(output.contains("Possible moves: B3 C2"));
    }

    #[test]
    fn test_human_quit() {
        let mut player = human("quit\n");
        let mut state = GameState::new(4, 4);

        assert!(player.choose_action(&mut state).is_err());
    }

    #[test]
    fn test_human_closed_input() {
        let mut player = human("");
        let mut state = GameState::new(4, 4);

        assert!(player.choose_action(&mut state).is_err());
    }

    #[test]
    fn test_two_human_players_share_stdin() {
        let options = PlayOptions {
            width: 4,
            height: 4,
            depth: 2,
            player1: PlayerKind::Human,
            player2: PlayerKind::Human,
            table_capacity: 100,
            seed: None,
        };

        let players = [
            create_player(options.player1, &options),
            create_player(options.player2, &options),
        ];

        assert!(players.iter().all(|player| player.name() == "Human"));

        // Constructing players must not hold the stdin lock.
        drop(std::io::stdin().lock());
    }

    #[test]
    fn test_random_player_picks_legal_moves() {
        let mut player = RandomPlayer::from_seed(5);
        let mut state = GameState::new(8, 8);

        while !state.is_terminal() {
            let action = player.choose_action(&mut state).unwrap();
            assert!(state.legal_moves().contains(&action));
            state.take_action(action);
        }

        assert!(player.choose_action(&mut state).is_err());
    }

    #[test]
    fn test_ai_player_leaves_state_unchanged() {
        let mut player = AiPlayer::new(4, 1_000);
        let mut state = GameState::new(5, 5);
        let before = state.clone();

        let action = player.choose_action(&mut state).unwrap();

        assert_eq!(state, before);
        assert!(state.legal_moves().contains(&action));
    }
}
