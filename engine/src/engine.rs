use super::game_state::GameState;

/// Capabilities a depth-bounded adversarial search needs from a game.
///
/// Scores are always relative to the player to move. None of these methods
/// fail as long as actions come from `legal_actions`.
pub trait GameEngine {
    type Action: Clone + PartialEq;
    type State: GameState;

    /// Legal actions for the player to move, in a deterministic order.
    fn legal_actions(&self, game_state: &Self::State) -> Vec<Self::Action>;

    /// Applies a legal action in place. Only reversible through
    /// `GameState::restore`.
    fn take_action(&self, game_state: &mut Self::State, action: &Self::Action);

    fn player_to_move(&self, game_state: &Self::State) -> usize;

    fn move_number(&self, game_state: &Self::State) -> usize;

    fn is_terminal(&self, game_state: &Self::State) -> bool;

    /// Whether the player to move has lost.
    fn is_lose(&self, game_state: &Self::State) -> bool;

    fn score(&self, game_state: &Self::State) -> i32;
}
