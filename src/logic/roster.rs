//! Roster boundary: validate team lists, import them from CSV, randomise the draw.

use crate::models::{EngineError, Team};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;

/// Reject blank ids or names and duplicate ids.
pub fn validate_teams(teams: &[Team]) -> Result<(), EngineError> {
    let mut seen = HashSet::with_capacity(teams.len());
    for team in teams {
        if team.id.trim().is_empty() || team.team_name.trim().is_empty() {
            return Err(EngineError::InvalidTeam);
        }
        if !seen.insert(team.id.as_str()) {
            return Err(EngineError::DuplicateTeam(team.id.clone()));
        }
    }
    Ok(())
}

#[derive(Deserialize)]
struct RosterRow {
    id: String,
    #[serde(alias = "teamName", alias = "team_name", alias = "name")]
    team_name: String,
}

/// Read an `id,teamName` CSV (header row required). Values are trimmed, then validated.
pub fn teams_from_csv<R: Read>(reader: R) -> Result<Vec<Team>, EngineError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let teams = rdr
        .deserialize::<RosterRow>()
        .map(|row| row.map(|r| Team::new(r.id, r.team_name)))
        .collect::<Result<Vec<Team>, csv::Error>>()?;
    validate_teams(&teams)?;
    Ok(teams)
}

/// Shuffled copy of the roster, for a random draw before scheduling.
pub fn draw_order<R: Rng + ?Sized>(teams: &[Team], rng: &mut R) -> Vec<Team> {
    let mut drawn = teams.to_vec();
    drawn.shuffle(rng);
    drawn
}
