//! Agents and a driver loop for playing complete games.

use crate::board::{Board, GameOutcome, Player};
use crate::error::{Error, Result};
use crate::minimax::Minimax;
use crate::random::RandomGenerator;
use tracing::{debug, trace};

/// Anything that can pick a move for the side to act.
pub trait Agent<T: Board> {
    /// Returns the move to play on `board`.
    ///
    /// Fails with [`Error::NoLegalMoves`] when the game is already over.
    fn choose_action(&mut self, board: &T) -> Result<T::Move>;
}

/// Plays optimally by running a full minimax search before every move.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinimaxAgent {
    solver: Minimax,
}

impl MinimaxAgent {
    /// Creates an agent that asks `solver` for every move.
    pub fn new(solver: Minimax) -> Self {
        Self { solver }
    }
}

impl<T: Board> Agent<T> for MinimaxAgent {
    fn choose_action(&mut self, board: &T) -> Result<T::Move> {
        self.solver.best_action(board)
    }
}

/// Picks uniformly among the legal moves.
#[derive(Debug, Default)]
pub struct RandomAgent<K: RandomGenerator> {
    random: K,
}

impl<K: RandomGenerator> RandomAgent<K> {
    /// Creates an agent drawing its choices from `random`.
    pub fn new(random: K) -> Self {
        Self { random }
    }
}

impl<T: Board, K: RandomGenerator> Agent<T> for RandomAgent<K> {
    fn choose_action(&mut self, board: &T) -> Result<T::Move> {
        if board.is_terminal() {
            return Err(Error::NoLegalMoves);
        }
        let actions = board.legal_actions();
        self.random
            .choose(&actions)
            .copied()
            .ok_or(Error::NoLegalMoves)
    }
}

/// Everything that happened in one game.
#[derive(Debug, Clone)]
pub struct GameRecord<T: Board> {
    /// Every position in order, the starting board first and the final board last.
    pub positions: Vec<T>,
    /// The moves played; `actions[i]` leads from `positions[i]` to `positions[i + 1]`.
    pub actions: Vec<T::Move>,
    /// How the final position ended.
    pub outcome: GameOutcome,
}

impl<T: Board> GameRecord<T> {
    /// Returns the player who completed a line, `None` for a draw.
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            GameOutcome::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// Plays `board` to the end, asking `agent_a` or `agent_b` for a move depending
/// on whose turn it is.
pub fn play<T: Board>(
    board: T,
    agent_a: &mut dyn Agent<T>,
    agent_b: &mut dyn Agent<T>,
) -> Result<GameRecord<T>> {
    let mut positions = vec![board.clone()];
    let mut actions = Vec::new();
    let mut current = board;

    while !current.is_terminal() {
        let player = current.active_player();
        let agent: &mut dyn Agent<T> = match player {
            Player::A => &mut *agent_a,
            Player::B => &mut *agent_b,
        };
        let action = agent.choose_action(&current)?;
        trace!(?player, ?action, "move played");
        current = current.apply(&action)?;
        actions.push(action);
        positions.push(current.clone());
    }

    let outcome = current.get_outcome();
    debug!(moves = actions.len(), ?outcome, "game finished");
    Ok(GameRecord {
        positions,
        actions,
        outcome,
    })
}
