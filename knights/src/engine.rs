use engine::GameEngine;

use super::{Coordinate, GameState};

/// Exposes `GameState` to searches written against `engine::GameEngine`.
#[derive(Default)]
pub struct Engine {}

impl Engine {
    pub fn new() -> Self {
        Self {}
    }
}

impl GameEngine for Engine {
    type Action = Coordinate;
    type State = GameState;

    fn legal_actions(&self, game_state: &Self::State) -> Vec<Self::Action> {
        game_state.legal_moves()
    }

    fn take_action(&self, game_state: &mut Self::State, action: &Self::Action) {
        game_state.take_action(*action)
    }

    fn player_to_move(&self, game_state: &Self::State) -> usize {
        game_state.player_to_move()
    }

    fn move_number(&self, game_state: &Self::State) -> usize {
        game_state.move_number()
    }

    fn is_terminal(&self, game_state: &Self::State) -> bool {
        game_state.is_terminal()
    }

    fn is_lose(&self, game_state: &Self::State) -> bool {
        game_state.is_lose()
    }

    fn score(&self, game_state: &Self::State) -> i32 {
        game_state.score()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::GameState as GameStateTrait;

    #[test]
    fn test_engine_delegates_to_game_state() {
        let engine = Engine::new();
        let mut state = GameState::new(4, 4);

        assert_eq!(engine.player_to_move(&state), 1);
        assert_eq!(engine.move_number(&state), 0);
        assert_eq!(engine.legal_actions(&state), state.legal_moves());
        assert!(!engine.is_terminal(&state));
        assert_eq!(engine.score(&state), 0);

        let action = engine.legal_actions(&state)[0];
        engine.take_action(&mut state, &action);

        assert_eq!(engine.player_to_move(&state), 2);
        assert_eq!(engine.move_number(&state), 1);
        assert_eq!(state.position(1), action);
    }

    #[test]
    fn test_engine_take_action_then_restore() {
        let engine = Engine::new();
        let mut state = GameState::new(5, 5);
        let original = state.clone();

        let entry = GameStateTrait::transposition_entry(&state);
        let action = engine.legal_actions(&state)[1];
        engine.take_action(&mut state, &action);
        assert_ne!(state, original);

        GameStateTrait::restore(&mut state, &entry);
        assert_eq!(state, original);
    }

    #[test]
    fn test_engine_lose_on_degenerate_board() {
        let engine = Engine::new();
        let state = GameState::new(1, 2);

        assert!(engine.is_terminal(&state));
        assert!(engine.is_lose(&state));
        assert_eq!(engine.score(&state), -100);
    }
}
