use crate::board::{Board, Player};
use crate::error::{ActionRejection, Error, Result};
use std::collections::HashSet;

/// Side length of the grid.
pub const SIZE: usize = 3;
const CELLS: usize = SIZE * SIZE;

/// Rows, columns and both diagonals as row-major cell indices.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Content of a single cell.
#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Cell {
    #[default]
    Empty,
    A,
    B,
}

impl Cell {
    /// Returns the player whose mark occupies the cell.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::A => Some(Player::A),
            Cell::B => Some(Player::B),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::A => Cell::A,
            Player::B => Cell::B,
        }
    }
}

/// A move: the coordinates of the cell to mark.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    /// Creates an action targeting the given cell; range is checked by `apply`.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index of the target cell, or `None` when off the grid.
    pub fn index(self) -> Option<usize> {
        (self.row < SIZE && self.col < SIZE).then(|| self.row * SIZE + self.col)
    }

    fn from_index(index: usize) -> Self {
        Self::new(index / SIZE, index % SIZE)
    }

    fn rejected(self, reason: ActionRejection) -> Error {
        Error::InvalidAction {
            row: self.row,
            col: self.col,
            reason,
        }
    }
}

/// An implementation of the `Board` trait for the game of Tic-Tac-Toe.
///
/// The board is a 9-element array in row-major order. It is a plain `Copy`
/// value: whose turn it is is derived from the marks, never stored.
/// Player A places the first mark.
#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone)]
pub struct TicTacToeBoard {
    field: [Cell; CELLS],
}

impl TicTacToeBoard {
    /// Returns the empty starting board.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Builds a board from its rows, top row first.
    ///
    /// No consistency check is made; boards that cannot arise from
    /// alternating play are accepted as-is.
    pub fn from_rows(rows: [[Cell; SIZE]; SIZE]) -> Self {
        let mut field = [Cell::Empty; CELLS];
        for (row, cells) in rows.iter().enumerate() {
            field[row * SIZE..(row + 1) * SIZE].copy_from_slice(cells);
        }
        Self { field }
    }

    /// Returns the rows of the board, top row first.
    pub fn rows(&self) -> [[Cell; SIZE]; SIZE] {
        let mut rows = [[Cell::Empty; SIZE]; SIZE];
        for (index, &cell) in self.field.iter().enumerate() {
            rows[index / SIZE][index % SIZE] = cell;
        }
        rows
    }

    /// Returns the cell at the given coordinates, or `None` when off the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        Action::new(row, col).index().map(|index| self.field[index])
    }

    /// Number of marks the given player has placed.
    pub fn mark_count(&self, player: Player) -> usize {
        let mark = Cell::from(player);
        self.field.iter().filter(|&&cell| cell == mark).count()
    }

    fn is_full(&self) -> bool {
        !self.field.contains(&Cell::Empty)
    }
}

impl Board for TicTacToeBoard {
    type Move = Action;

    fn active_player(&self) -> Player {
        if self.mark_count(Player::A) <= self.mark_count(Player::B) {
            Player::A
        } else {
            Player::B
        }
    }

    fn legal_actions(&self) -> Vec<Self::Move> {
        self.field
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(i, _)| Action::from_index(i))
            .collect()
    }

    fn apply(&self, action: &Self::Move) -> Result<Self> {
        let index = action
            .index()
            .ok_or_else(|| action.rejected(ActionRejection::OutOfRange))?;
        if self.field[index] != Cell::Empty {
            return Err(action.rejected(ActionRejection::Occupied));
        }

        let mut next = *self;
        next.field[index] = Cell::from(self.active_player());
        Ok(next)
    }

    fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|&[a, b, c]| {
            let cell = self.field[a];
            if cell != Cell::Empty && cell == self.field[b] && cell == self.field[c] {
                cell.owner()
            } else {
                None
            }
        })
    }

    fn get_hash(&self) -> u128 {
        let mut hash = 0;
        for (i, &cell) in self.field.iter().enumerate() {
            let cell_value = match cell {
                Cell::Empty => 0,
                Cell::A => 1,
                Cell::B => 2,
            };
            hash += cell_value * 3u128.pow(i as u32);
        }
        hash
    }

    fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }
}

/// Enumerates every distinct board reachable from the empty board by legal
/// play, including the empty board itself. Play stops at terminal positions.
pub fn reachable_positions() -> Vec<TicTacToeBoard> {
    let mut seen = HashSet::new();
    let mut positions = Vec::new();
    let mut pending = vec![TicTacToeBoard::initial()];

    while let Some(board) = pending.pop() {
        if !seen.insert(board.get_hash()) {
            continue;
        }
        positions.push(board);
        if board.is_terminal() {
            continue;
        }
        for action in board.legal_actions() {
            if let Ok(next) = board.apply(&action) {
                pending.push(next);
            }
        }
    }

    positions
}
