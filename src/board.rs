use crate::error::{Error, Result};
use std::fmt::Debug;

/// The central trait of the library, defining the interface for a game state.
///
/// Any finite, fully observable, two-player game with strictly alternating
/// moves can be searched by implementing this trait. Boards are values:
/// [`Board::apply`] returns the successor position and leaves `self` untouched,
/// so sibling branches of a search never observe each other.
pub trait Board: Default + Clone {
    /// The type representing a move in the game.
    type Move: Copy + PartialEq + Debug;

    /// Returns the player whose turn it is to make a move.
    fn active_player(&self) -> Player;

    /// Returns every legal move from the current state, each exactly once.
    ///
    /// The order is the enumeration order used by the solver for tie-breaking,
    /// so implementations should keep it deterministic.
    fn legal_actions(&self) -> Vec<Self::Move>;

    /// Returns the board that results from the active player making `action`.
    fn apply(&self, action: &Self::Move) -> Result<Self>;

    /// Returns the player owning a completed line, if any.
    fn winner(&self) -> Option<Player>;

    /// Returns a hash value for the current board state.
    ///
    /// Distinct positions must map to distinct values.
    fn get_hash(&self) -> u128;

    /// Returns `true` once the game is decided or no move is left.
    fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.legal_actions().is_empty()
    }

    /// Returns the signed outcome of a finished game.
    fn utility(&self) -> Result<Utility> {
        if !self.is_terminal() {
            return Err(Error::NotTerminal);
        }
        Ok(Utility::from_winner(self.winner()))
    }

    /// Returns the current outcome of the game.
    fn get_outcome(&self) -> GameOutcome {
        match self.winner() {
            Some(player) => GameOutcome::Won(player),
            None if self.legal_actions().is_empty() => GameOutcome::Draw,
            None => GameOutcome::InProgress,
        }
    }
}

/// The two sides of an alternating game.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Player {
    /// Moves first and maximizes the utility.
    A,
    /// Moves second and minimizes the utility.
    B,
}

impl Player {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }
}

/// Value of a terminal position, seen from player A.
///
/// Variants are declared in ascending order so that `Ord` agrees with the
/// numeric value and `max`/`min` pick the best result for A/B respectively.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
pub enum Utility {
    BWins = -1,
    Draw = 0,
    AWins = 1,
}

impl Utility {
    /// Returns the utility as `-1`, `0` or `+1`.
    pub fn value(self) -> i8 {
        self as i8
    }

    /// Scores a finished game from its winner, `None` meaning a draw.
    pub fn from_winner(winner: Option<Player>) -> Self {
        match winner {
            Some(Player::A) => Utility::AWins,
            Some(Player::B) => Utility::BWins,
            None => Utility::Draw,
        }
    }
}

/// Represents the possible outcomes of a game.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum GameOutcome {
    /// The game is still ongoing.
    InProgress,
    /// The given player completed a line.
    Won(Player),
    /// The board filled up without a winner.
    Draw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utility_orders_by_value() {
        assert!(Utility::BWins < Utility::Draw);
        assert!(Utility::Draw < Utility::AWins);
        assert_eq!(Utility::AWins.value(), 1);
        assert_eq!(Utility::Draw.value(), 0);
        assert_eq!(Utility::BWins.value(), -1);
    }

    #[test]
    fn utility_from_winner() {
        assert_eq!(Utility::from_winner(Some(Player::A)), Utility::AWins);
        assert_eq!(Utility::from_winner(Some(Player::B)), Utility::BWins);
        assert_eq!(Utility::from_winner(None), Utility::Draw);
    }

    #[test]
    fn opponent_swaps_sides() {
        assert_eq!(Player::A.opponent(), Player::B);
        assert_eq!(Player::B.opponent(), Player::A);
    }
}
