//! Game configuration.
//!
//! `GameConfig` collects everything the engine needs besides the board:
//! who moves first, the ply safety bound, the RNG seed and how often the
//! board is rendered.

use serde::{Deserialize, Serialize};

use super::Role;

/// Default safety bound on plies per match.
pub const DEFAULT_PLY_LIMIT: usize = 100;

/// How often the engine hands the board to its renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderCadence {
    /// Never render, not even the initial board.
    Never,
    /// After every ply.
    EveryPly,
    /// After every second ply (one move by each role).
    #[default]
    EveryRound,
}

impl RenderCadence {
    /// Should the board be rendered after `plies` plies have been played?
    #[must_use]
    pub fn renders_after(self, plies: usize) -> bool {
        match self {
            RenderCadence::Never => false,
            RenderCadence::EveryPly => true,
            RenderCadence::EveryRound => plies % 2 == 0,
        }
    }

    /// Is the initial board rendered?
    #[must_use]
    pub fn renders_initial(self) -> bool {
        self != RenderCadence::Never
    }
}

impl std::str::FromStr for RenderCadence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "never" => Ok(RenderCadence::Never),
            "ply" => Ok(RenderCadence::EveryPly),
            "round" => Ok(RenderCadence::EveryRound),
            other => Err(format!("unknown render cadence '{}', expected never, ply or round", other)),
        }
    }
}

/// Match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Role making the first ply.
    pub first_player: Role,

    /// Safety bound on plies. Reaching it is reported as
    /// `Outcome::PlyLimitExceeded`, never as a draw.
    pub ply_limit: usize,

    /// Seed for move selection. `None` draws one from OS entropy; the drawn
    /// seed is stored in the match record.
    pub seed: Option<u64>,

    /// Renderer cadence.
    pub render: RenderCadence,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: Role::Short,
            ply_limit: DEFAULT_PLY_LIMIT,
            seed: None,
            render: RenderCadence::default(),
        }
    }
}

impl GameConfig {
    /// Create a default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the role that moves first.
    #[must_use]
    pub fn with_first_player(mut self, role: Role) -> Self {
        self.first_player = role;
        self
    }

    /// Set the ply safety bound.
    #[must_use]
    pub fn with_ply_limit(mut self, limit: usize) -> Self {
        self.ply_limit = limit;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the render cadence.
    #[must_use]
    pub fn with_render(mut self, render: RenderCadence) -> Self {
        self.render = render;
        self
    }
}
