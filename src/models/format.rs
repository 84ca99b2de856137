//! Tournament format selector.

use crate::models::tournament::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How matches are generated. Fixed once a schedule exists.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentFormat {
    /// Everyone plays everyone once.
    #[default]
    RoundRobin,
    /// Single elimination from round 1.
    Knockout,
    /// Round-robin groups, then a knockout phase seeded from the tables.
    GroupKnockout,
}

impl TournamentFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentFormat::RoundRobin => "round_robin",
            TournamentFormat::Knockout => "knockout",
            TournamentFormat::GroupKnockout => "group_knockout",
        }
    }
}

impl fmt::Display for TournamentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TournamentFormat {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "round_robin" => Ok(TournamentFormat::RoundRobin),
            "knockout" => Ok(TournamentFormat::Knockout),
            "group_knockout" => Ok(TournamentFormat::GroupKnockout),
            other => Err(EngineError::UnknownFormat(other.to_string())),
        }
    }
}
