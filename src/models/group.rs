//! Group, GroupEntry and TeamStats.

use crate::models::team::Team;
use serde::{Deserialize, Serialize};

/// Table columns for one team within one group. Always derived from matches.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    #[serde(rename = "P")]
    pub played: u32,
    #[serde(rename = "W")]
    pub won: u32,
    #[serde(rename = "D")]
    pub drawn: u32,
    #[serde(rename = "L")]
    pub lost: u32,
    #[serde(rename = "GF")]
    pub goals_for: u32,
    #[serde(rename = "GA")]
    pub goals_against: u32,
    /// Can go negative.
    #[serde(rename = "GD")]
    pub goal_difference: i64,
    #[serde(rename = "Pts")]
    pub points: u32,
}

impl TeamStats {
    /// Fold one finished match into the record, from this team's point of view.
    pub fn record(&mut self, scored: u32, conceded: u32, rules: &PointsRules) {
        self.played = self.played.saturating_add(1);
        self.goals_for = self.goals_for.saturating_add(scored);
        self.goals_against = self.goals_against.saturating_add(conceded);
        self.goal_difference = self
            .goal_difference
            .saturating_add(i64::from(scored) - i64::from(conceded));
        let (tally, awarded) = if scored > conceded {
            (&mut self.won, rules.win)
        } else if scored < conceded {
            (&mut self.lost, rules.loss)
        } else {
            (&mut self.drawn, rules.draw)
        };
        *tally = tally.saturating_add(1);
        self.points = self.points.saturating_add(awarded);
    }
}

/// Points awarded per result.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PointsRules {
    pub win: u32,
    pub draw: u32,
    pub loss: u32,
}

impl Default for PointsRules {
    fn default() -> Self {
        Self {
            win: 3,
            draw: 1,
            loss: 0,
        }
    }
}

/// A team's slot in a group, with stats once they have been calculated.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupEntry {
    #[serde(flatten)]
    pub team: Team,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<TeamStats>,
}

impl GroupEntry {
    pub fn new(team: Team) -> Self {
        Self { team, stats: None }
    }

    /// Stats, or an empty record if not calculated yet.
    pub fn stats_or_default(&self) -> TeamStats {
        self.stats.unwrap_or_default()
    }
}

/// A lettered pool of teams.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub teams: Vec<GroupEntry>,
}

impl Group {
    pub fn new(name: impl Into<String>, teams: Vec<Team>) -> Self {
        Self {
            name: name.into(),
            teams: teams.into_iter().map(GroupEntry::new).collect(),
        }
    }

    pub fn contains(&self, team_id: &str) -> bool {
        self.teams.iter().any(|e| e.team.id == team_id)
    }
}

/// Letter label for the group at `index` (0 → "A").
pub fn group_label(index: usize) -> String {
    let letter = (b'A' + (index % 26) as u8) as char;
    letter.to_string()
}
