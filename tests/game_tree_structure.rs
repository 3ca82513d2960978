//! Whole-tree checks from the empty board.
//!
//! The full tree has 549,946 nodes, so it is built once per test here.

use ttt_minimax::{GameTree, Node, Player, Position};

fn solved_tree() -> GameTree {
    let mut tree = GameTree::build(Position::new()).expect("empty board is valid");
    tree.evaluate().expect("evaluation from empty board succeeds");
    tree
}

#[test]
fn empty_board_is_a_draw() {
    let tree = solved_tree();
    assert_eq!(tree.value(), Some(0));
    assert_eq!(tree.root().children().len(), 9);
    assert_eq!(tree.root().best_moves(), (0..9).collect::<Vec<_>>());
}

#[test]
fn full_tree_counts_match_known_totals() {
    let tree = GameTree::build(Position::new()).unwrap();
    let stats = tree.stats();

    assert_eq!(stats.total_nodes, 549_946);
    assert_eq!(
        stats.nodes_by_depth,
        vec![1, 9, 72, 504, 3024, 15120, 54720, 148176, 200448, 127872]
    );
    assert_eq!(stats.terminal_nodes(), 255_168);
    assert_eq!(stats.outcomes.x_wins, 131_184);
    assert_eq!(stats.outcomes.o_wins, 77_904);
    assert_eq!(stats.outcomes.draws, 46_080);
    assert_eq!(
        stats.terminals_by_depth,
        vec![0, 0, 0, 0, 0, 1440, 5328, 47952, 72576, 127872]
    );
}

#[test]
fn every_node_satisfies_minimax_invariants() {
    let tree = solved_tree();
    let mut visited = 0usize;

    tree.root().walk(&mut |node: &Node, depth: usize| {
        visited += 1;
        let value = node.value().expect("every node is evaluated");
        assert!((-1..=1).contains(&value));
        assert_eq!(node.position().occupied_count(), depth);

        match node.result().payoff() {
            Some(payoff) => {
                assert_eq!(value, payoff);
                assert!(node.children().is_empty());
            }
            None => {
                let empty = node.position().empty_positions();
                assert_eq!(node.children().len(), empty.len());

                let values = node.children().iter().map(|c| c.value().unwrap());
                let expected = match node.position().side_to_move().unwrap() {
                    Player::X => values.max(),
                    Player::O => values.min(),
                };
                assert_eq!(Some(value), expected);
            }
        }
    });

    assert_eq!(visited, 549_946);
}
