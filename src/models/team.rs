//! Team (bracket entrant).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team (used in bracket slots and lookups).
pub type TeamId = Uuid;

/// A team that can be entered into a tournament. The bracket engine only reads `id`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Display color, passed through untouched.
    #[serde(default)]
    pub color: Option<String>,
}

impl Team {
    /// Create a new team with the given name and a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}
