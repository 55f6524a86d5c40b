//! The game board and reachability queries over it.
//!
//! - `edge`: `Edge` (normalized node pair) and `EdgeState`
//! - `state`: `GraphState`, the only mutable game data
//! - `connectivity`: filtered BFS and the SHORT / CUT win checks

pub mod connectivity;
pub mod edge;
pub mod state;

pub use connectivity::{connected, cut_has_won, is_colored, is_present, reachable, short_has_won};
pub use edge::{Edge, EdgeState};
pub use state::GraphState;
