//! Game engine: the ply loop, move policies and match history.
//!
//! `GameEngine` owns a `GraphState` for the length of a match. Before each
//! ply it checks both win conditions; otherwise it asks its `MovePolicy`
//! for a normal edge and applies the active role's transition.

pub mod game;
pub mod policy;
pub mod record;

pub use game::{GameEngine, MatchReport, StepResult};
pub use policy::{MovePolicy, RandomPolicy, ScriptedPolicy};
pub use record::{MatchRecord, Outcome, PlyRecord};
