//! Tournament, TournamentState and EngineError.

use crate::models::format::TournamentFormat;
use crate::models::game::Match;
use crate::models::group::Group;
use crate::models::team::{Team, TeamId};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors returned by scheduling, standings and bracket operations.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum EngineError {
    /// Fewer teams than the algorithm needs.
    #[error("Need at least {required} teams (got {supplied})")]
    InsufficientTeams { required: usize, supplied: usize },
    /// Format value outside round_robin / knockout / group_knockout.
    #[error("Unknown tournament format: {0}")]
    UnknownFormat(String),
    /// Some matches in the round still lack a score.
    #[error("{incomplete} match(es) in the round have no result yet")]
    IncompleteRound { incomplete: usize },
    /// A knockout match ended level; someone has to win.
    #[error("Knockout match in round {round} between {team1} and {team2} is tied")]
    TiedKnockoutMatch {
        round: u32,
        team1: TeamId,
        team2: TeamId,
    },
    /// Score text that is neither blank nor a non-negative integer.
    #[error("Invalid score: {0:?}")]
    InvalidScore(String),
    /// Team with a blank id or name.
    #[error("Team entries need a non-empty id and name")]
    InvalidTeam,
    /// Two roster entries share an id.
    #[error("Duplicate team id: {0}")]
    DuplicateTeam(TeamId),
    /// Round too far out to get a kick-off time.
    #[error("No kick-off time can be computed for round {round}")]
    KickoffOutOfRange { round: u32 },
    /// Index outside the tournament's match list.
    #[error("Match {0} not found")]
    MatchNotFound(usize),
    /// Tournament is not in a state that allows this action.
    #[error("Invalid state for this action")]
    InvalidState,
    /// Roster CSV could not be read.
    #[error("Could not read team list: {0}")]
    Csv(String),
}

impl From<csv::Error> for EngineError {
    fn from(err: csv::Error) -> Self {
        EngineError::Csv(err.to_string())
    }
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Current phase of the tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentState {
    /// Round-robin play: the whole league, or the groups before a knockout.
    #[default]
    GroupStage,
    /// Single-elimination rounds.
    Knockout,
    /// Champion decided; no more results accepted.
    Completed,
}

/// Everything the caller holds for one tournament: roster, groups, fixtures and phase.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub format: TournamentFormat,
    /// Registered teams in draw order.
    pub teams: Vec<Team>,
    /// Group partition (a single synthetic group for non-grouped formats).
    pub groups: Vec<Group>,
    /// All fixtures so far, every phase.
    pub matches: Vec<Match>,
    pub state: TournamentState,
    pub champion: Option<Team>,
}

impl Tournament {
    /// Empty tournament with no schedule. See `logic::create_tournament` for a ready one.
    pub fn new(name: impl Into<String>, format: TournamentFormat) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            format,
            teams: Vec::new(),
            groups: Vec::new(),
            matches: Vec::new(),
            state: TournamentState::GroupStage,
            champion: None,
        }
    }

    /// Highest round number among matches in the given group label.
    pub fn current_round(&self, group: &str) -> Option<u32> {
        self.matches
            .iter()
            .filter(|m| m.group == group)
            .map(|m| m.round)
            .max()
    }

    pub fn match_mut(&mut self, index: usize) -> Result<&mut Match, EngineError> {
        self.matches
            .get_mut(index)
            .ok_or(EngineError::MatchNotFound(index))
    }

    pub fn is_finished(&self) -> bool {
        self.state == TournamentState::Completed
    }
}
