//! Match history.
//!
//! Every applied ply is recorded with the role that made it and the edge it
//! touched. Together with the first player and the seed, a `MatchRecord`
//! reproduces the whole match; see `GameEngine::replay`.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{GameResult, Role};
use crate::graph::Edge;

/// How a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// One role met its win condition.
    Winner(Role),
    /// The ply bound was reached first. This is a diagnostic, not a draw:
    /// a well-formed board always produces a winner.
    PlyLimitExceeded,
}

impl Outcome {
    /// The winning role, if any.
    #[must_use]
    pub fn winner(self) -> Option<Role> {
        match self {
            Outcome::Winner(role) => Some(role),
            Outcome::PlyLimitExceeded => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(role) => write!(f, "{} won!", role),
            Outcome::PlyLimitExceeded => write!(f, "No winner within the ply limit."),
        }
    }
}

/// One applied ply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlyRecord {
    /// 0-based ply index.
    pub index: usize,
    /// Role that moved.
    pub role: Role,
    /// Edge colored (SHORT) or deleted (CUT).
    pub edge: Edge,
}

impl PlyRecord {
    /// Create a new ply record.
    #[must_use]
    pub fn new(index: usize, role: Role, edge: Edge) -> Self {
        Self { index, role, edge }
    }
}

impl std::fmt::Display for PlyRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.role {
            Role::Short => write!(f, "Short colors {}", self.edge),
            Role::Cut => write!(f, "Cut deletes {}", self.edge),
        }
    }
}

/// Complete history of a match.
///
/// `plies` is a persistent vector so snapshots taken mid-match are cheap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Role that made ply 0.
    pub first_player: Role,
    /// Seed of the move policy, when it was random.
    pub seed: Option<u64>,
    /// Applied plies, in order.
    pub plies: Vector<PlyRecord>,
    /// Final outcome; `None` while the match is running.
    pub outcome: Option<Outcome>,
}

impl MatchRecord {
    /// Empty record for a match starting with `first_player`.
    #[must_use]
    pub fn new(first_player: Role, seed: Option<u64>) -> Self {
        Self {
            first_player,
            seed,
            plies: Vector::new(),
            outcome: None,
        }
    }

    /// Number of recorded plies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plies.len()
    }

    /// Has no ply been recorded yet?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plies.is_empty()
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> GameResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a record produced by [`MatchRecord::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> GameResult<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameError;

    fn sample() -> MatchRecord {
        let mut record = MatchRecord::new(Role::Cut, Some(17));
        record.plies.push_back(PlyRecord::new(0, Role::Cut, Edge::new(0, 1)));
        record.plies.push_back(PlyRecord::new(1, Role::Short, Edge::new(1, 2)));
        record.outcome = Some(Outcome::Winner(Role::Cut));
        record
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Winner(Role::Short).to_string(), "Short won!");
        assert_eq!(Outcome::Winner(Role::Cut).to_string(), "Cut won!");
        assert_eq!(Outcome::PlyLimitExceeded.winner(), None);
        assert_eq!(Outcome::Winner(Role::Cut).winner(), Some(Role::Cut));
    }

    #[test]
    fn test_ply_display() {
        let short = PlyRecord::new(0, Role::Short, Edge::new(3, 1));
        let cut = PlyRecord::new(1, Role::Cut, Edge::new(0, 2));
        assert_eq!(short.to_string(), "Short colors (1, 3)");
        assert_eq!(cut.to_string(), "Cut deletes (0, 2)");
    }

    #[test]
    fn test_bytes_preserve_record() {
        let record = sample();
        let bytes = record.to_bytes().unwrap();
        assert_eq!(MatchRecord::from_bytes(&bytes).unwrap(), record);
    }

    #[test]
    fn test_truncated_bytes_rejected() {
        let bytes = sample().to_bytes().unwrap();
        let err = MatchRecord::from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, GameError::Record(_)));
    }

    #[test]
    fn test_len() {
        let record = sample();
        assert_eq!(record.len(), 2);
        assert!(!record.is_empty());
        assert!(MatchRecord::new(Role::Short, None).is_empty());
    }
}
