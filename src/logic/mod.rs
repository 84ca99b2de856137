//! Engine logic: scheduling, standings, bracket progression and the tournament lifecycle.

mod bracket;
mod progression;
mod roster;
mod scheduler;
mod standings;

pub use bracket::{
    advance_knockout_round, match_winner, seed_knockout_from_groups, Advancement,
    DEFAULT_QUALIFIERS_PER_GROUP,
};
pub use progression::{advance, create_tournament, record_score, schedule_match, standings};
pub use roster::{draw_order, teams_from_csv, validate_teams};
pub use scheduler::{
    generate_group_knockout_schedule, generate_knockout_schedule, generate_round_robin,
    generate_schedule, schedule_rounds, Schedule, MAX_GROUPS, TEAMS_PER_GROUP,
};
pub use standings::{
    calculate_group_stats, calculate_group_stats_with, calculate_standings, compare_entries,
    rank_group,
};
