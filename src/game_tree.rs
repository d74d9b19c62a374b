use crate::board::{Board, Player, Utility};
use crate::error::Result;
use crate::minimax::TieBreak;
use ego_tree::{NodeMut, NodeRef, Tree};
use tracing::debug;

/// A single position in a fully expanded game tree.
#[derive(Debug, Clone)]
pub struct GameTreeNode<T: Board> {
    /// The game state that this node represents.
    pub board: T,
    /// The move that led here from the parent. `None` for the root node.
    pub prev_move: Option<T::Move>,
    /// The depth of the node in the tree.
    pub height: usize,
    /// The player whose turn it is in this node's game state.
    pub current_player: Player,
    /// Minimax value of the position.
    pub value: Utility,
}

impl<T: Board> GameTreeNode<T> {
    fn new(board: T, prev_move: Option<T::Move>, height: usize) -> Self {
        let current_player = board.active_player();
        Self {
            board,
            prev_move,
            height,
            current_player,
            // overwritten once the subtree is evaluated
            value: Utility::Draw,
        }
    }
}

/// Every position reachable from a root board, annotated with its minimax value.
///
/// Unlike [`Minimax`](crate::minimax::Minimax), which only keeps the call
/// stack alive, this materializes the whole tree so it can be walked
/// afterwards. Expect roughly half a million nodes from the empty
/// Tic-Tac-Toe board.
pub struct GameTree<T: Board> {
    tree: Tree<GameTreeNode<T>>,
    tie_break: TieBreak,
}

impl<T: Board> GameTree<T> {
    /// Expands the complete tree below `board` and evaluates every node.
    pub fn build(board: T, tie_break: TieBreak) -> Result<Self> {
        let mut tree = Tree::new(GameTreeNode::new(board, None, 0));
        let root_value = Self::expand(tree.root_mut())?;
        debug!(
            root_value = root_value.value(),
            nodes = tree.nodes().count(),
            "game tree built"
        );
        Ok(Self { tree, tie_break })
    }

    fn expand(mut node: NodeMut<'_, GameTreeNode<T>>) -> Result<Utility> {
        let board = node.value().board.clone();
        if board.is_terminal() {
            let utility = board.utility()?;
            node.value().value = utility;
            return Ok(utility);
        }

        let height = node.value().height + 1;
        let player = board.active_player();
        let mut best: Option<Utility> = None;
        for action in board.legal_actions() {
            let child_board = board.apply(&action)?;
            let child = node.append(GameTreeNode::new(child_board, Some(action), height));
            let child_value = Self::expand(child)?;
            best = Some(match (best, player) {
                (None, _) => child_value,
                (Some(current), Player::A) => current.max(child_value),
                (Some(current), Player::B) => current.min(child_value),
            });
        }

        let value = match best {
            Some(value) => value,
            None => board.utility()?,
        };
        node.value().value = value;
        Ok(value)
    }

    /// Returns an immutable reference to the underlying tree.
    pub fn tree(&self) -> &Tree<GameTreeNode<T>> {
        &self.tree
    }

    /// Returns a reference to the root node of the tree.
    pub fn root(&self) -> NodeRef<'_, GameTreeNode<T>> {
        self.tree.root()
    }

    /// Minimax value of the root position.
    pub fn root_value(&self) -> Utility {
        self.tree.root().value().value
    }

    /// Number of positions in the tree, the root included.
    pub fn node_count(&self) -> usize {
        self.tree.nodes().count()
    }

    /// Returns the line of optimal play from the root to the end of the game.
    ///
    /// At each node the child sharing the node's value is followed; ties
    /// are resolved with the tree's [`TieBreak`].
    pub fn principal_variation(&self) -> Vec<T::Move> {
        let mut line = Vec::new();
        let mut node = self.tree.root();
        loop {
            let target = node.value().value;
            let mut optimal = node.children().filter(|child| child.value().value == target);
            let next = match self.tie_break {
                TieBreak::First => optimal.next(),
                TieBreak::Last => optimal.last(),
            };
            let Some(child) = next else {
                break;
            };
            if let Some(action) = child.value().prev_move {
                line.push(action);
            }
            node = child;
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::tic_tac_toe::Cell::{A, B, Empty as E};
    use crate::boards::tic_tac_toe::{Action, TicTacToeBoard};
    use crate::minimax::Minimax;

    #[test]
    fn two_empty_cells_tree() {
        // arrange
        let board = TicTacToeBoard::from_rows([[A, B, A], [B, B, E], [A, A, E]]);
        assert_eq!(board.active_player(), Player::B);

        // act
        let tree = GameTree::build(board, TieBreak::First).unwrap();

        // assert
        // (1,2) completes B's middle row; (2,2) blocks A and leads to a draw.
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.root_value(), Utility::BWins);
        assert_eq!(tree.principal_variation(), vec![Action::new(1, 2)]);
        let children: Vec<_> = tree.root().children().map(|c| c.value().value).collect();
        assert_eq!(children, vec![Utility::BWins, Utility::Draw]);
        assert_eq!(tree.root().value().current_player, Player::B);
    }

    #[test]
    fn terminal_root_is_a_single_node() {
        let won = TicTacToeBoard::from_rows([[B, B, B], [A, A, E], [A, E, E]]);

        let tree = GameTree::build(won, TieBreak::Last).unwrap();

        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.root_value(), Utility::BWins);
        assert!(tree.principal_variation().is_empty());
    }

    #[test]
    fn agrees_with_minimax_on_a_midgame_position() {
        // arrange
        let board = TicTacToeBoard::from_rows([[A, E, E], [E, B, E], [E, E, A]]);

        // act
        let tree = GameTree::build(board, TieBreak::First).unwrap();
        let solved = Minimax::default().solve(&board).unwrap();

        // assert
        assert_eq!(tree.root_value(), solved.value);
        assert_eq!(tree.node_count() as u64, solved.stats.nodes_explored + 1);
        assert_eq!(tree.principal_variation().first(), solved.best_action.as_ref());
        assert_eq!(tree.root().value().height, 0);
        assert!(tree.tree().nodes().all(|node| node.value().height <= 6));
    }

    #[test]
    fn principal_variation_ends_on_a_terminal_board() {
        let board = TicTacToeBoard::initial().apply(&Action::new(0, 0)).unwrap();
        let tree = GameTree::build(board, TieBreak::Last).unwrap();

        let mut end = board;
        for action in tree.principal_variation() {
            end = end.apply(&action).unwrap();
        }

        assert!(end.is_terminal());
        assert_eq!(end.utility(), Ok(tree.root_value()));
        assert_eq!(tree.root_value(), Utility::Draw);
    }
}
