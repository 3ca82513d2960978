//! Game tree construction and minimax evaluation
//!
//! Every node exclusively owns its children, so the structure is a plain
//! tree: transposed positions reached through different move orders are
//! separate nodes. The tree is built top-down in one pass and evaluated
//! bottom-up in a second pass.

use super::{
    board::{Player, Position},
    outcome::{Outcome, Value},
};
use crate::{Error, Result, analysis::TreeStats};

/// One position in the game tree.
#[derive(Debug, Clone)]
pub struct Node {
    position: Position,
    children: Vec<Node>,
    value: Option<Value>,
}

impl Node {
    /// Create an unexpanded, unevaluated node
    pub fn new(position: Position) -> Self {
        Self {
            position,
            children: Vec::new(),
            value: None,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Cached minimax value, `None` until [`Node::minimax`] has run
    pub fn value(&self) -> Option<Value> {
        self.value
    }

    pub fn result(&self) -> Outcome {
        self.position.result()
    }

    pub fn is_terminal(&self) -> bool {
        self.position.is_terminal()
    }

    /// Generate the children of this node.
    ///
    /// One child per empty cell, in row-major order, each holding a copy of
    /// this position with the side to move's mark in that cell. Terminal
    /// nodes get no children. A node is expanded at most once; later calls
    /// return the existing children.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if the piece counts do not allow a side
    /// to move.
    pub fn expand(&mut self) -> Result<&[Node]> {
        if !self.children.is_empty() || self.is_terminal() {
            return Ok(&self.children);
        }

        let mover = self.position.side_to_move()?;
        self.children = self
            .position
            .empty_positions()
            .into_iter()
            .map(|pos| Node::new(self.position.with_mark(pos, mover)))
            .collect();
        Ok(&self.children)
    }

    /// Expand this node and every non-terminal descendant, depth-first.
    pub fn expand_all(&mut self) -> Result<()> {
        self.expand()?;
        for child in &mut self.children {
            child.expand_all()?;
        }
        Ok(())
    }

    /// Compute and cache the minimax value of this node.
    ///
    /// Terminal nodes take their payoff (+1 X win, -1 O win, 0 draw). Other
    /// nodes take the maximum of their children's values when X is to move
    /// and the minimum when O is to move. The subtree must already be fully
    /// expanded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unexpanded`] if a non-terminal node in the subtree has
    /// no children, and propagates [`Error::InvalidState`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ttt_minimax::tictactoe::{Node, Position};
    ///
    /// let mut node = Node::new(Position::from_string("XOX/OXO/OX.").unwrap());
    /// node.expand_all().unwrap();
    /// assert_eq!(node.minimax().unwrap(), 1);
    /// ```
    pub fn minimax(&mut self) -> Result<Value> {
        if let Some(value) = self.value {
            return Ok(value);
        }

        let value = match self.result().payoff() {
            Some(payoff) => payoff,
            None => {
                if self.children.is_empty() {
                    return Err(Error::Unexpanded {
                        position: self.position.encode(),
                    });
                }

                let mover = self.position.side_to_move()?;
                let mut best_value = match mover {
                    Player::X => Value::MIN,
                    Player::O => Value::MAX,
                };
                for child in &mut self.children {
                    let child_value = child.minimax()?;
                    best_value = match mover {
                        Player::X => best_value.max(child_value),
                        Player::O => best_value.min(child_value),
                    };
                }
                best_value
            }
        };

        self.value = Some(value);
        Ok(value)
    }

    /// Cell index and cached value of every evaluated child
    pub fn move_values(&self) -> Vec<(usize, Value)> {
        self.children
            .iter()
            .filter_map(|child| {
                let pos = self.position.find_changed_position(&child.position)?;
                Some((pos, child.value?))
            })
            .collect()
    }

    /// Cells whose child value equals this node's value, in row-major order.
    ///
    /// Empty for terminal or unevaluated nodes.
    pub fn best_moves(&self) -> Vec<usize> {
        let Some(value) = self.value else {
            return Vec::new();
        };
        self.move_values()
            .into_iter()
            .filter(|&(_, child_value)| child_value == value)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Visit this node and all descendants in pre-order with their depth
    /// below this node.
    pub fn walk<F: FnMut(&Node, usize)>(&self, visit: &mut F) {
        self.walk_at(0, visit);
    }

    fn walk_at<F: FnMut(&Node, usize)>(&self, depth: usize, visit: &mut F) {
        visit(self, depth);
        for child in &self.children {
            child.walk_at(depth + 1, visit);
        }
    }
}

/// A fully materialized game tree rooted at a starting position.
#[derive(Debug, Clone)]
pub struct GameTree {
    root: Node,
}

impl GameTree {
    /// Build the complete tree below `position`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if any reachable position has
    /// inconsistent piece counts.
    pub fn build(position: Position) -> Result<Self> {
        let mut root = Node::new(position);
        root.expand_all()?;
        Ok(Self { root })
    }

    /// Run minimax over the whole tree and return the root value.
    pub fn evaluate(&mut self) -> Result<Value> {
        self.root.minimax()
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Root value, `None` until [`GameTree::evaluate`] has run
    pub fn value(&self) -> Option<Value> {
        self.root.value()
    }

    pub fn stats(&self) -> TreeStats {
        TreeStats::collect(&self.root)
    }
}
