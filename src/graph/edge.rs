//! Edge identity and edge state.
//!
//! An [`Edge`] is an unordered node pair stored as `(low, high)`, so
//! `Edge::new(2, 0) == Edge::new(0, 2)`. [`EdgeState`] is the three-valued
//! state carried by every pair of the board.

use serde::{Deserialize, Serialize};

/// State of the position between two nodes.
///
/// Only two transitions exist: `Normal -> Colored` (a SHORT ply) and
/// `Normal -> Absent` (a CUT ply). `Colored` and `Absent` are final.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeState {
    /// No edge here, now or ever again.
    #[default]
    Absent,
    /// Edge present and not yet claimed by either role.
    Normal,
    /// Edge present and claimed by SHORT.
    Colored,
}

impl EdgeState {
    /// Is there an edge at all (normal or colored)?
    #[must_use]
    pub const fn is_present(self) -> bool {
        !matches!(self, EdgeState::Absent)
    }

    /// Has SHORT claimed this edge?
    #[must_use]
    pub const fn is_colored(self) -> bool {
        matches!(self, EdgeState::Colored)
    }

    /// Can either role still act on this edge?
    #[must_use]
    pub const fn is_eligible(self) -> bool {
        matches!(self, EdgeState::Normal)
    }

    /// Digit used by the matrix renderer: 0 absent, 1 normal, 2 colored.
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            EdgeState::Absent => 0,
            EdgeState::Normal => 1,
            EdgeState::Colored => 2,
        }
    }
}

/// Unordered pair of node indices, normalized so that `low <= high`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    low: usize,
    high: usize,
}

impl Edge {
    /// Create an edge between `a` and `b` in either order.
    ///
    /// ```
    /// use shannon_switch::graph::Edge;
    ///
    /// assert_eq!(Edge::new(4, 1), Edge::new(1, 4));
    /// assert_eq!(Edge::new(4, 1).nodes(), (1, 4));
    /// ```
    #[must_use]
    pub const fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// The endpoints as `(low, high)`.
    #[must_use]
    pub const fn nodes(self) -> (usize, usize) {
        (self.low, self.high)
    }

    /// Does this edge join a node to itself?
    #[must_use]
    pub const fn is_loop(self) -> bool {
        self.low == self.high
    }
}

impl From<(usize, usize)> for Edge {
    fn from((a, b): (usize, usize)) -> Self {
        Edge::new(a, b)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.low, self.high)
    }
}
