use crate::board::{Board, Player, Utility};
use crate::error::{Error, Result};
use tracing::{debug, instrument, trace};

/// Rule for choosing among actions that reach the same minimax value.
///
/// Every choice is equally optimal; the rule only makes the pick
/// deterministic with respect to the board's enumeration order.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub enum TieBreak {
    /// Keep the first action found with the optimal value.
    #[default]
    First,
    /// Keep the last action found with the optimal value.
    Last,
}

/// Counters collected during one search.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub struct SearchStats {
    /// Number of child positions evaluated below the root.
    pub nodes_explored: u64,
    /// Deepest ply reached, the root being ply 0.
    pub max_depth: usize,
}

/// The outcome of searching a position to the end of the game.
#[derive(Debug, PartialEq, Clone)]
pub struct SearchResult<M> {
    /// Game-theoretic value of the position under optimal play.
    pub value: Utility,
    /// The move achieving `value` for the active player, `None` on terminal boards.
    pub best_action: Option<M>,
    /// Counters gathered while searching.
    pub stats: SearchStats,
}

/// Exhaustive minimax solver.
///
/// Explores the whole game tree below a position and backs terminal
/// utilities up to the root: player A takes the maximum over its children,
/// player B the minimum. No pruning and no caching is done, so the node
/// count reflects the full tree.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub struct Minimax {
    tie_break: TieBreak,
}

/// A builder for creating instances of `Minimax`.
#[derive(Debug, Default)]
pub struct MinimaxBuilder {
    tie_break: TieBreak,
}

impl MinimaxBuilder {
    /// Creates a builder with the default tie-break.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rule used to pick among equally valued actions.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Builds the `Minimax` instance with the configured parameters.
    pub fn build(self) -> Minimax {
        Minimax::new(self.tie_break)
    }
}

impl Minimax {
    /// Returns a new builder for `Minimax`.
    pub fn builder() -> MinimaxBuilder {
        MinimaxBuilder::new()
    }

    /// Creates a new `Minimax` solver.
    ///
    /// It is recommended to use the builder pattern via `Minimax::builder()` instead.
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    /// Returns the rule used to pick among equally valued actions.
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Searches `board` to the end of the game.
    ///
    /// Terminal boards are valid input: the result carries their utility and
    /// no action.
    #[instrument(level = "debug", skip_all)]
    pub fn solve<T: Board>(&self, board: &T) -> Result<SearchResult<T::Move>> {
        let mut stats = SearchStats::default();
        let (value, best_action) = self.search(board, 0, &mut stats)?;
        debug!(
            value = value.value(),
            nodes_explored = stats.nodes_explored,
            max_depth = stats.max_depth,
            best_action = ?best_action,
            "minimax search finished"
        );
        Ok(SearchResult {
            value,
            best_action,
            stats,
        })
    }

    /// Returns the value of `board` under optimal play by both sides.
    pub fn value<T: Board>(&self, board: &T) -> Result<Utility> {
        Ok(self.solve(board)?.value)
    }

    /// Returns an optimal move for the active player.
    ///
    /// Fails with [`Error::NoLegalMoves`] when the game is already over.
    pub fn best_action<T: Board>(&self, board: &T) -> Result<T::Move> {
        if board.is_terminal() {
            return Err(Error::NoLegalMoves);
        }
        self.solve(board)?.best_action.ok_or(Error::NoLegalMoves)
    }

    /// Returns every move achieving the optimal value, in enumeration order.
    pub fn optimal_actions<T: Board>(&self, board: &T) -> Result<Vec<T::Move>> {
        if board.is_terminal() {
            return Ok(Vec::new());
        }

        let player = board.active_player();
        let mut stats = SearchStats::default();
        let mut scored = Vec::new();
        for action in board.legal_actions() {
            let child = board.apply(&action)?;
            let (value, _) = self.search(&child, 1, &mut stats)?;
            scored.push((action, value));
        }

        let values = scored.iter().map(|(_, value)| *value);
        let best = match player {
            Player::A => values.max(),
            Player::B => values.min(),
        };
        Ok(scored
            .into_iter()
            .filter(|(_, value)| Some(*value) == best)
            .map(|(action, _)| action)
            .collect())
    }

    fn search<T: Board>(
        &self,
        board: &T,
        depth: usize,
        stats: &mut SearchStats,
    ) -> Result<(Utility, Option<T::Move>)> {
        stats.max_depth = stats.max_depth.max(depth);
        if board.is_terminal() {
            return Ok((board.utility()?, None));
        }

        let player = board.active_player();
        let mut best: Option<(Utility, T::Move)> = None;
        for action in board.legal_actions() {
            stats.nodes_explored += 1;
            let child = board.apply(&action)?;
            let (child_value, _) = self.search(&child, depth + 1, stats)?;
            if depth == 0 {
                trace!(action = ?action, value = child_value.value(), "evaluated root action");
            }

            let replace = match best {
                None => true,
                Some((current, _)) => self.prefers(player, child_value, current),
            };
            if replace {
                best = Some((child_value, action));
            }
        }

        match best {
            Some((value, action)) => Ok((value, Some(action))),
            None => Ok((board.utility()?, None)),
        }
    }

    fn prefers(&self, player: Player, candidate: Utility, current: Utility) -> bool {
        let better = match player {
            Player::A => candidate > current,
            Player::B => candidate < current,
        };
        better || (self.tie_break == TieBreak::Last && candidate == current)
    }
}

/// Returns an optimal move for the active player using the default solver.
pub fn best_action<T: Board>(board: &T) -> Result<T::Move> {
    Minimax::default().best_action(board)
}

/// Returns the minimax value of `board` using the default solver.
pub fn value<T: Board>(board: &T) -> Result<Utility> {
    Minimax::default().value(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::tic_tac_toe::Cell::{A, B, Empty as E};
    use crate::boards::tic_tac_toe::{Action, TicTacToeBoard};

    #[test]
    fn empty_board_is_a_forced_draw() {
        // arrange
        let board = TicTacToeBoard::initial();

        // act
        let result = Minimax::default().solve(&board).unwrap();

        // assert
        assert_eq!(result.value, Utility::Draw);
        assert_eq!(result.best_action, Some(Action::new(0, 0)));
        assert_eq!(result.stats.nodes_explored, 549_945);
        assert_eq!(result.stats.max_depth, 9);
    }

    #[test]
    fn completes_own_row_to_win() {
        // arrange
        let board = TicTacToeBoard::from_rows([[A, A, E], [B, B, E], [E, E, E]]);
        assert_eq!(board.active_player(), Player::A);

        // act
        let action = best_action(&board).unwrap();
        let next = board.apply(&action).unwrap();

        // assert
        assert_eq!(action, Action::new(0, 2));
        assert_eq!(value(&next), Ok(Utility::AWins));
        assert_eq!(value(&board), Ok(Utility::AWins));
    }

    #[test]
    fn second_player_takes_the_win() {
        // arrange
        let board = TicTacToeBoard::from_rows([[A, A, E], [B, B, E], [A, E, E]]);
        assert_eq!(board.active_player(), Player::B);

        // act
        let action = best_action(&board).unwrap();
        let optimal = Minimax::default().optimal_actions(&board).unwrap();

        // assert
        assert_eq!(value(&board), Ok(Utility::BWins));
        assert_eq!(value(&board.apply(&action).unwrap()), Ok(Utility::BWins));
        assert!(optimal.contains(&Action::new(1, 2)));
        assert!(optimal.contains(&action));
    }

    #[test]
    fn block_that_forks_is_the_only_optimal_move() {
        let board = TicTacToeBoard::from_rows([[B, B, E], [E, A, E], [E, E, A]]);
        assert_eq!(board.active_player(), Player::A);
        assert_eq!(value(&board), Ok(Utility::AWins));

        for tie_break in [TieBreak::First, TieBreak::Last] {
            let solver = Minimax::builder().with_tie_break(tie_break).build();

            let action = solver.best_action(&board).unwrap();

            assert_eq!(action, Action::new(0, 2));
            assert_eq!(
                solver.optimal_actions(&board).unwrap(),
                vec![Action::new(0, 2)]
            );
        }
    }

    #[test]
    fn tie_break_picks_first_or_last_equal_action() {
        // arrange
        let board = TicTacToeBoard::initial()
            .apply(&Action::new(1, 1))
            .unwrap();
        let first = Minimax::builder().with_tie_break(TieBreak::First).build();
        let last = Minimax::builder().with_tie_break(TieBreak::Last).build();

        // act
        let optimal = first.optimal_actions(&board).unwrap();

        // assert
        assert_eq!(
            optimal,
            vec![
                Action::new(0, 0),
                Action::new(0, 2),
                Action::new(2, 0),
                Action::new(2, 2),
            ]
        );
        assert_eq!(first.best_action(&board), Ok(Action::new(0, 0)));
        assert_eq!(last.best_action(&board), Ok(Action::new(2, 2)));
        assert_eq!(first.value(&board), last.value(&board));
    }

    #[test]
    fn terminal_board_has_no_best_action() {
        let won = TicTacToeBoard::from_rows([[A, A, A], [B, B, E], [E, E, E]]);

        let result = Minimax::default().solve(&won).unwrap();

        assert_eq!(best_action(&won), Err(Error::NoLegalMoves));
        assert_eq!(result.value, Utility::AWins);
        assert_eq!(result.best_action, None);
        assert_eq!(result.stats, SearchStats::default());
        assert_eq!(
            Minimax::default().optimal_actions(&won),
            Ok(Vec::<Action>::new())
        );
    }

    #[test]
    fn single_empty_cell_counts_one_node() {
        let board = TicTacToeBoard::from_rows([[A, B, A], [A, B, B], [B, A, E]]);

        let result = Minimax::default().solve(&board).unwrap();

        assert_eq!(result.value, Utility::Draw);
        assert_eq!(result.best_action, Some(Action::new(2, 2)));
        assert_eq!(
            result.stats,
            SearchStats {
                nodes_explored: 1,
                max_depth: 1,
            }
        );
    }

    #[test]
    fn builder_defaults_to_first() {
        assert_eq!(Minimax::builder().build().tie_break(), TieBreak::First);
        assert_eq!(Minimax::default(), Minimax::new(TieBreak::First));
    }
}
