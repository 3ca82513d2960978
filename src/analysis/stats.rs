//! Structural statistics of a game tree

use serde::{Deserialize, Serialize};

use crate::tictactoe::{Node, Outcome, Player};

/// Distribution of terminal leaves by outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeDistribution {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl OutcomeDistribution {
    pub fn total(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Node counts collected from one traversal of a tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    pub total_nodes: usize,
    /// Node count per depth below the root (index 0 is the root)
    pub nodes_by_depth: Vec<usize>,
    /// Terminal nodes (complete games) per depth below the root
    pub terminals_by_depth: Vec<usize>,
    pub outcomes: OutcomeDistribution,
}

impl TreeStats {
    /// Walk the tree below `root` and count its nodes
    pub fn collect(root: &Node) -> Self {
        let mut stats = TreeStats::default();
        root.walk(&mut |node: &Node, depth: usize| stats.record(node, depth));
        stats
    }

    fn record(&mut self, node: &Node, depth: usize) {
        if self.nodes_by_depth.len() <= depth {
            self.nodes_by_depth.resize(depth + 1, 0);
            self.terminals_by_depth.resize(depth + 1, 0);
        }
        self.total_nodes += 1;
        self.nodes_by_depth[depth] += 1;

        let outcome = node.result();
        if outcome.is_terminal() {
            self.terminals_by_depth[depth] += 1;
        }
        match outcome {
            Outcome::Win(Player::X) => self.outcomes.x_wins += 1,
            Outcome::Win(Player::O) => self.outcomes.o_wins += 1,
            Outcome::Draw => self.outcomes.draws += 1,
            Outcome::Undecided => {}
        }
    }

    /// Number of terminal leaves (complete games)
    pub fn terminal_nodes(&self) -> usize {
        self.outcomes.total()
    }

    /// Deepest level reached below the root
    pub fn max_depth(&self) -> usize {
        self.nodes_by_depth.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use crate::tictactoe::{GameTree, Position};

    #[test]
    fn terminal_root_is_single_node() {
        let tree = GameTree::build(Position::from_string("XXX/OO./...").unwrap()).unwrap();
        let stats = tree.stats();
        assert_eq!(stats.total_nodes, 1);
        assert_eq!(stats.nodes_by_depth, vec![1]);
        assert_eq!(stats.outcomes.x_wins, 1);
        assert_eq!(stats.max_depth(), 0);
    }

    #[test]
    fn counts_two_empty_cells() {
        // X O X
        // X O O
        // . X .
        // O to move: 6 then X fills 8 (draw), or 8 then X wins at 6.
        let tree = GameTree::build(Position::from_string("XOX/XOO/.X.").unwrap()).unwrap();
        let stats = tree.stats();
        assert_eq!(stats.nodes_by_depth, vec![1, 2, 2]);
        assert_eq!(stats.terminals_by_depth, vec![0, 0, 2]);
        assert_eq!(stats.outcomes.x_wins, 1);
        assert_eq!(stats.outcomes.draws, 1);
        assert_eq!(stats.terminal_nodes(), 2);
    }
}
