//! Data structures for the engine: teams, matches, groups, tournament state.

mod format;
mod game;
mod group;
mod team;
mod tournament;

pub use format::TournamentFormat;
pub use game::{parse_score, Match, DEFAULT_GROUP, KNOCKOUT_GROUP, MAX_SCORE};
pub use group::{group_label, Group, GroupEntry, PointsRules, TeamStats};
pub use team::{Team, TeamId};
pub use tournament::{EngineError, Tournament, TournamentId, TournamentState};
