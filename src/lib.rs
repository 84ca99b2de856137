//! Tournament engine: round-robin, knockout and group-stage scheduling, group standings and
//! bracket advancement. Pure functions over in-memory records; persistence is the caller's job.

pub mod config;
pub mod logic;
pub mod models;

pub use logic::{
    advance, advance_knockout_round, calculate_group_stats, calculate_group_stats_with,
    calculate_standings, create_tournament, draw_order, generate_group_knockout_schedule,
    generate_knockout_schedule, generate_round_robin, generate_schedule, rank_group,
    record_score, schedule_match, schedule_rounds, seed_knockout_from_groups, standings,
    teams_from_csv, validate_teams, Advancement, Schedule,
};
pub use models::{
    parse_score, EngineError, Group, GroupEntry, Match, PointsRules, Team, TeamId, TeamStats,
    Tournament, TournamentFormat, TournamentId, TournamentState, DEFAULT_GROUP, KNOCKOUT_GROUP,
    MAX_SCORE,
};
