//! # shannon-switch
//!
//! Engine for the Shannon switching game.
//!
//! Two roles alternate on an undirected graph with two terminal nodes.
//! SHORT colors one edge per ply and wins once a colored path joins the
//! terminals. CUT deletes one edge per ply and wins once no path of
//! remaining edges joins them.
//!
//! ## Design Principles
//!
//! 1. **Tagged edge states**: `Absent`, `Normal`, `Colored`; only
//!    `Normal` edges can be acted on, and both transitions are final.
//!
//! 2. **Full-component traversal**: win checks run a filtered BFS that
//!    visits the whole reachable component before every ply.
//!
//! 3. **Injectable randomness**: moves come from a `MovePolicy`; the
//!    default policy draws from a seeded `GameRng`, so every match is
//!    reproducible.
//!
//! ## Modules
//!
//! - `core`: roles, configuration, RNG, errors
//! - `graph`: edge states, the board, connectivity and win checks
//! - `engine`: the ply loop, move policies, match records and replay
//! - `render`: read-only board views and renderers
//! - `board`: board file parsing
//! - `batch`: many independent matches on one board
//!
//! ## Example
//!
//! ```
//! use shannon_switch::{GameConfig, GameEngine, GraphState, Outcome, Role};
//!
//! let graph = GraphState::new(2, (0, 1), &[(0, 1)]).unwrap();
//! let mut engine = GameEngine::new(graph, GameConfig::new().with_seed(1));
//! let report = engine.run().unwrap();
//! assert_eq!(report.outcome, Outcome::Winner(Role::Short));
//! ```

pub mod batch;
pub mod board;
pub mod core;
pub mod engine;
pub mod graph;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameResult, GameRng, RenderCadence, Role, DEFAULT_PLY_LIMIT,
};

pub use crate::graph::{connected, cut_has_won, is_colored, is_present, short_has_won, Edge, EdgeState, GraphState};

pub use crate::engine::{
    GameEngine, MatchRecord, MatchReport, MovePolicy, Outcome, PlyRecord, RandomPolicy, ScriptedPolicy,
    StepResult,
};

pub use crate::render::{BoardView, NullRenderer, Renderer, TextRenderer};

pub use crate::board::Board;

pub use crate::batch::{BatchRunner, BatchSummary};
