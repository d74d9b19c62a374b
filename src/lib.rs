//! A small and simple library for exhaustive minimax game search.
//!
//! The library solves finite, two-player, zero-sum games with perfect
//! information and strictly alternating moves. It walks the whole game tree
//! below a position, scores finished games as `+1` (player A wins), `0`
//! (draw) or `-1` (player B wins) and backs those values up: A maximizes,
//! B minimizes. Tic-Tac-Toe ships as a ready-made game.
//!
//! # Example
//!
//! ```rust
//! use minimax_lib::board::{Board, Utility};
//! use minimax_lib::boards::tic_tac_toe::TicTacToeBoard;
//! use minimax_lib::minimax::{Minimax, TieBreak};
//!
//! // Create a new Tic-Tac-Toe board
//! let board = TicTacToeBoard::initial();
//!
//! // Configure the solver using the builder
//! let solver = Minimax::builder()
//!     .with_tie_break(TieBreak::First)
//!     .build();
//!
//! // Search the position to the end of the game
//! let result = solver.solve(&board).unwrap();
//! assert_eq!(result.value, Utility::Draw);
//!
//! let best_move = result.best_action.unwrap();
//! println!("The best move is: {:?}", best_move);
//! let next = board.apply(&best_move).unwrap();
//! assert_eq!(solver.value(&next).unwrap(), Utility::Draw);
//! ```

/// Agents and a loop that plays games between them.
pub mod arena;
/// Contains the `Board` trait and related enums that define the interface for a game.
pub mod board;
/// Contains pre-made implementations of the `Board` trait for common games.
pub mod boards;
/// Error type shared by every fallible operation.
pub mod error;
/// A fully materialized, annotated game tree.
pub mod game_tree;
/// The core module of the library, containing the `Minimax` solver.
pub mod minimax;
/// Contains traits and implementations for random number generation.
pub mod random;

pub use error::{Error, Result};
pub use minimax::{best_action, value};
