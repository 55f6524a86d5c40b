//! Move selection policies.
//!
//! The engine asks a [`MovePolicy`] for one edge out of the currently
//! eligible (normal) edges. Policies are injectable so the turn loop can be
//! driven deterministically:
//! - `RandomPolicy`: uniform pick with a seeded `GameRng`
//! - `ScriptedPolicy`: replays a recorded list of plies

use crate::core::{GameError, GameResult, GameRng, Role};
use crate::graph::{Edge, GraphState};

use super::record::PlyRecord;

/// Chooses the edge the active role acts on.
pub trait MovePolicy {
    /// Pick an edge for `role` at ply `ply`.
    ///
    /// `eligible` is never empty when called by the engine and is sorted
    /// ascending. Returning an edge outside `eligible` makes the engine fail
    /// with `GameError::IllegalMove`.
    fn choose(
        &mut self,
        ply: usize,
        role: Role,
        eligible: &[Edge],
        graph: &GraphState,
    ) -> GameResult<Edge>;

    /// Seed behind this policy's randomness, if it has any.
    fn seed(&self) -> Option<u64> {
        None
    }
}

/// Uniformly random choice among eligible edges.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    /// Policy drawing from `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Policy seeded with `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}

impl MovePolicy for RandomPolicy {
    fn choose(
        &mut self,
        ply: usize,
        _role: Role,
        eligible: &[Edge],
        _graph: &GraphState,
    ) -> GameResult<Edge> {
        self.rng
            .choose(eligible)
            .copied()
            .ok_or(GameError::Stall { ply })
    }

    fn seed(&self) -> Option<u64> {
        Some(self.rng.seed())
    }
}

/// Replays a fixed sequence of plies.
///
/// Each recorded role must match the role to move; the recorded edge is
/// returned as-is, so an edge that is no longer normal surfaces as an
/// illegal move in the engine.
#[derive(Clone, Debug)]
pub struct ScriptedPolicy {
    script: Vec<PlyRecord>,
    cursor: usize,
}

impl ScriptedPolicy {
    /// Policy replaying `script` in order.
    pub fn new(script: impl IntoIterator<Item = PlyRecord>) -> Self {
        Self {
            script: script.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Plies not yet replayed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len() - self.cursor
    }
}

impl MovePolicy for ScriptedPolicy {
    fn choose(
        &mut self,
        ply: usize,
        role: Role,
        _eligible: &[Edge],
        _graph: &GraphState,
    ) -> GameResult<Edge> {
        let next = self
            .script
            .get(self.cursor)
            .ok_or_else(|| GameError::Record(format!("script ended before ply {}", ply)))?;
        if next.role != role {
            return Err(GameError::ReplayMismatch {
                ply,
                expected: role,
                found: next.role,
            });
        }
        self.cursor += 1;
        Ok(next.edge)
    }
}
