//! The two roles of the switching game.
//!
//! ## Role
//!
//! `Short` colors an edge each ply and wants a colored path between the
//! terminals. `Cut` deletes an edge each ply and wants the terminals
//! separated.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Colors edges.
    Short,
    /// Deletes edges.
    Cut,
}

impl Role {
    /// The role that moves after this one.
    ///
    /// ```
    /// use shannon_switch::core::Role;
    ///
    /// assert_eq!(Role::Short.opponent(), Role::Cut);
    /// assert_eq!(Role::Cut.opponent(), Role::Short);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Role::Short => Role::Cut,
            Role::Cut => Role::Short,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Short => write!(f, "Short"),
            Role::Cut => write!(f, "Cut"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(Role::Short),
            "cut" => Ok(Role::Cut),
            other => Err(format!("unknown role '{}', expected 'short' or 'cut'", other)),
        }
    }
}
