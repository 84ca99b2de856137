//! Team reference as supplied by the roster.

use serde::{Deserialize, Serialize};

/// Unique identifier for a team (owned by whatever stores the roster).
pub type TeamId = String;

/// A registered team. The engine never creates or deletes these; it only pairs them.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub team_name: String,
}

impl Team {
    pub fn new(id: impl Into<TeamId>, team_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            team_name: team_name.into(),
        }
    }
}
