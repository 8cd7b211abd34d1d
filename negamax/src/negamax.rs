use engine::{GameEngine, GameState};
use log::debug;

use super::transposition_table::{Bound, TableEntry, TranspositionTable};

const INF: i32 = i32::MAX;
const DEFAULT_TABLE_CAPACITY: usize = 1_000_000;

type Table<E> = TranspositionTable<
    <<E as GameEngine>::State as GameState>::Entry,
    <E as GameEngine>::Action,
>;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<A> {
    pub action: A,
    /// Value for the player to move at the root.
    pub value: i32,
    pub nodes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub table_hits: u64,
    pub table_size: usize,
}

/// Depth bounded negamax with alpha-beta pruning and a transposition table.
///
/// The state is searched in place: every action is applied to the caller's state and undone by
/// restoring the transposition entry taken before it. The table is kept between searches.
pub struct Negamax<E: GameEngine> {
    depth: usize,
    table: Table<E>,
    nodes: u64,
    table_hits: u64,
}

impl<E: GameEngine> Negamax<E> {
    pub fn new(depth: usize) -> Self {
        Self::with_table_capacity(depth, DEFAULT_TABLE_CAPACITY)
    }

    pub fn with_table_capacity(depth: usize, capacity: usize) -> Self {
        assert!(depth > 0, "Search depth must be at least 1");

        Self {
            depth,
            table: TranspositionTable::new(capacity),
            nodes: 0,
            table_hits: 0,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats {
            nodes: self.nodes,
            table_hits: self.table_hits,
            table_size: self.table.len(),
        }
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Finds the best action for the player to move. Returns `None` for a terminal state.
    ///
    /// `game_state` is left in the configuration it was passed in.
    pub fn search(
        &mut self,
        engine: &E,
        game_state: &mut E::State,
    ) -> Option<SearchResult<E::Action>> {
        if engine.is_terminal(game_state) {
            return None;
        }

        self.nodes = 0;
        self.table_hits = 0;

        let (value, action) = self.negamax(engine, game_state, self.depth, -INF, INF);

        debug!(
            "Searched {} nodes to depth {} for player {}: value {}, {} table hits, {} entries",
            self.nodes,
            self.depth,
            engine.player_to_move(game_state),
            value,
            self.table_hits,
            self.table.len()
        );

        action.map(|action| SearchResult {
            action,
            value,
            nodes: self.nodes,
        })
    }

    fn negamax(
        &mut self,
        engine: &E,
        game_state: &mut E::State,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<E::Action>) {
        self.nodes += 1;

        if depth == 0 || engine.is_terminal(game_state) {
            return (engine.score(game_state), None);
        }

        let entry = game_state.transposition_entry();

        if let Some(cached) = self.table.get(&entry) {
            if cached.depth >= depth {
                self.table_hits += 1;

                match cached.bound {
                    Bound::Exact => return (cached.value, cached.best_action.clone()),
                    Bound::Lower => alpha = alpha.max(cached.value),
                    Bound::Upper => beta = beta.min(cached.value),
                }

                if alpha >= beta {
                    return (cached.value, cached.best_action.clone());
                }
            }
        }

        // Bounds are classified against the window actually searched.
        let alpha_orig = alpha;
        let mut best_value = -INF;
        let mut best_action = None;

        for action in engine.legal_actions(game_state) {
            engine.take_action(game_state, &action);
            let (child_value, _) = self.negamax(engine, game_state, depth - 1, -beta, -alpha);
            game_state.restore(&entry);

            let value = -child_value;
            if value > best_value {
                best_value = value;
                best_action = Some(action);
            }

            alpha = alpha.max(value);
            if alpha >= beta {
                break;
            }
        }

        let bound = if best_value <= alpha_orig {
            Bound::Upper
        } else if best_value >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };

        self.table.store(
            entry,
            TableEntry {
                depth,
                value: best_value,
                bound,
                best_action: best_action.clone(),
            },
        );

        (best_value, best_action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knights::{Engine, GameState as KnightsState};

    #[test]
    fn test_search_terminal_state_returns_none() {
        let engine = Engine::new();
        let mut state = KnightsState::new(2, 2);
        let mut negamax = Negamax::new(4);

        assert_eq!(negamax.search(&engine, &mut state), None);
    }

    #[test]
    fn test_search_single_legal_move() {
        let engine = Engine::new();
        let mut state = KnightsState::new(4, 4);
        state.apply_move("B3").unwrap();
        let mut negamax = Negamax::new(3);

        let result = negamax.search(&engine, &mut state).unwrap();

        assert_eq!(result.action.to_string(), "C2");
    }

    #[test]
    fn test_search_leaves_state_unchanged() {
        let engine = Engine::new();
        let mut state = KnightsState::new(5, 5);
        state.apply_move("B3").unwrap();
        let before = state.clone();
        let mut negamax = Negamax::new(6);

        negamax.search(&engine, &mut state).unwrap();

        assert_eq!(state, before);
    }

    #[test]
    fn test_search_finds_immediate_win() {
        // 3x3: after B3 B1 C1 A3 A2 player 2 must play C2, leaving player 1 without a move.
        let engine = Engine::new();
        let mut state = KnightsState::new(3, 3);
        for label in ["B3", "B1", "C1", "A3", "A2"] {
            state.apply_move(label).unwrap();
        }
        let mut negamax = Negamax::new(2);

        let result = negamax.search(&engine, &mut state).unwrap();

        assert_eq!(result.action.to_string(), "C2");
        assert_eq!(result.value, 100);
    }

    #[test]
    fn test_depth_one_is_neutral() {
        let engine = Engine::new();
        let mut state = KnightsState::new(8, 8);
        let mut negamax = Negamax::new(1);

        let result = negamax.search(&engine, &mut state).unwrap();

        assert_eq!(result.value, 0);
        assert_eq!(result.action.to_string(), "B3");
    }

    #[test]
    fn test_stats_track_table() {
        let engine = Engine::new();
        let mut state = KnightsState::new(5, 5);
        let mut negamax = Negamax::new(5);

        let result = negamax.search(&engine, &mut state).unwrap();
        let stats = negamax.stats();

        assert_eq!(stats.nodes, result.nodes);
        assert!(stats.table_size > 0);

        negamax.clear();
        assert_eq!(negamax.stats().table_size, 0);
    }

    #[test]
    #[should_panic]
    fn test_zero_depth_rejected() {
        Negamax::<Engine>::new(0);
    }
}
