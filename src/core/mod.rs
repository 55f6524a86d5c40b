//! Core types: roles, configuration, RNG and the crate error.
//!
//! Nothing here knows about graphs beyond the edge types named in
//! `GameError`.

pub mod config;
pub mod error;
pub mod rng;
pub mod role;

pub use config::{GameConfig, RenderCadence, DEFAULT_PLY_LIMIT};
pub use error::{GameError, GameResult};
pub use rng::GameRng;
pub use role::Role;
