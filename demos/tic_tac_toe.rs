extern crate minimax_lib;

use minimax_lib::arena::{MinimaxAgent, RandomAgent, play};
use minimax_lib::board::{Board, GameOutcome, Player};
use minimax_lib::boards::tic_tac_toe::{Cell, TicTacToeBoard};
use minimax_lib::minimax::Minimax;
use minimax_lib::random::StandardRandomGenerator;

fn main() {
    // Create a new Tic-Tac-Toe board
    let board = TicTacToeBoard::initial();

    // Print the value of every opening move
    let solver = Minimax::default();
    for action in board.legal_actions() {
        let next = board.apply(&action).unwrap();
        let result = solver.solve(&next).unwrap();
        println!(
            "Move: {:?} = {:+} ({} positions explored)",
            action,
            result.value.value(),
            result.stats.nodes_explored
        );
    }

    // Let the solver play both sides
    let mut a = MinimaxAgent::default();
    let mut b = MinimaxAgent::default();
    let record = play(board, &mut a, &mut b).unwrap();
    for (action, position) in record.actions.iter().zip(record.positions.iter().skip(1)) {
        println!("{:?}", action);
        print_board(position);
    }
    println!("Optimal self-play ends in: {:?}", record.outcome);
    assert_eq!(record.outcome, GameOutcome::Draw);

    // The solver never loses against random play
    let mut random = RandomAgent::new(StandardRandomGenerator);
    let record = play(board, &mut random, &mut b).unwrap();
    println!("Random vs optimal ends in: {:?}", record.outcome);
    assert_ne!(record.winner(), Some(Player::A));
}

fn print_board(board: &TicTacToeBoard) {
    for row in board.rows() {
        let line: String = row
            .iter()
            .map(|cell| match cell {
                Cell::Empty => '.',
                Cell::A => 'X',
                Cell::B => 'O',
            })
            .collect();
        println!("{line}");
    }
    println!();
}
