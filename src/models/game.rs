//! Match record and score parsing.

use crate::models::team::Team;
use crate::models::tournament::EngineError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Group label used for non-grouped formats (and the synthetic group holding every team).
pub const DEFAULT_GROUP: &str = "A";

/// Group label carried by every knockout match.
pub const KNOCKOUT_GROUP: &str = "Knockout";

/// Largest score accepted from input.
pub const MAX_SCORE: u32 = 999;

/// A single fixture between two teams.
///
/// Only `score1`, `score2` and `scheduled_at` change after creation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// 1-based round number.
    pub round: u32,
    pub team1: Team,
    pub team2: Team,
    /// None if not yet played.
    #[serde(default, deserialize_with = "deserialize_score")]
    pub score1: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_score")]
    pub score2: Option<u32>,
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
    pub group: String,
}

impl Match {
    pub fn new(round: u32, team1: Team, team2: Team, group: impl Into<String>) -> Self {
        Self {
            round,
            team1,
            team2,
            score1: None,
            score2: None,
            scheduled_at: None,
            group: group.into(),
        }
    }

    /// Both scores recorded.
    pub fn is_complete(&self) -> bool {
        self.score1.is_some() && self.score2.is_some()
    }

    /// Both scores when the match is complete.
    pub fn scores(&self) -> Option<(u32, u32)> {
        Some((self.score1?, self.score2?))
    }

    /// Record (or clear, with empty input) both scores from raw text.
    /// Nothing is written unless both values parse.
    pub fn set_score(&mut self, raw1: &str, raw2: &str) -> Result<(), EngineError> {
        let score1 = parse_score(raw1)?;
        let score2 = parse_score(raw2)?;
        self.score1 = score1;
        self.score2 = score2;
        Ok(())
    }

    pub fn involves(&self, team_id: &str) -> bool {
        self.team1.id == team_id || self.team2.id == team_id
    }
}

/// Parse a raw score field. Empty means "not yet played"; otherwise an integer in
/// `0..=MAX_SCORE`.
pub fn parse_score(raw: &str) -> Result<Option<u32>, EngineError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<u32>() {
        Ok(n) if n <= MAX_SCORE => Ok(Some(n)),
        _ => Err(EngineError::InvalidScore(raw.to_string())),
    }
}

/// Accepts null, "", an integer up to `MAX_SCORE`, or a string holding one.
fn deserialize_score<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawScore {
        Number(u32),
        Text(String),
    }

    match Option::<RawScore>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawScore::Number(n)) if n <= MAX_SCORE => Ok(Some(n)),
        Some(RawScore::Number(n)) => Err(serde::de::Error::custom(EngineError::InvalidScore(
            n.to_string(),
        ))),
        Some(RawScore::Text(s)) => parse_score(&s).map_err(serde::de::Error::custom),
    }
}
