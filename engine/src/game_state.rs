use std::fmt::Debug;
use std::hash::Hash;

/// A mutable game state that a backtracking search can snapshot and restore.
///
/// Searches do not clone states per node. They take a transposition entry
/// before applying an action and restore it once the subtree is explored.
pub trait GameState: Debug {
    /// Canonical snapshot of the full configuration. Equal entries mean
    /// transposition-equivalent states, including the player to move.
    type Entry: Hash + Eq + Clone + Debug;

    fn transposition_entry(&self) -> Self::Entry;

    /// Resets the state to exactly the configuration captured in `entry`.
    fn restore(&mut self, entry: &Self::Entry);
}
