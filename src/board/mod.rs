//! Board descriptions.
//!
//! A board file lists the node count, the two terminals and the edges:
//!
//! ```text
//! N
//! 4
//! S
//! 0 2
//! E
//! 0,1
//! 1,2
//! 2,3
//! 3,0
//! ```
//!
//! Section headers are recognized by their first character. Every
//! non-blank line after `E` is an edge.

mod parser;

use std::path::Path;

use crate::core::GameResult;
use crate::graph::GraphState;

/// Parsed, not yet validated, board description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// Node count.
    pub num_nodes: usize,
    /// The two terminal nodes.
    pub terminals: (usize, usize),
    /// Initial edges, in file order.
    pub edges: Vec<(usize, usize)>,
}

impl Board {
    /// Parse a board description.
    pub fn parse(text: &str) -> GameResult<Self> {
        parser::parse(text)
    }

    /// Read and parse a board file.
    pub fn load(path: impl AsRef<Path>) -> GameResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded board file");
        Self::parse(&text)
    }

    /// Build the game board. Validation happens here.
    pub fn to_graph(&self) -> GameResult<GraphState> {
        GraphState::new(self.num_nodes, self.terminals, &self.edges)
    }
}
