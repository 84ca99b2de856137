//! Group tables: per-team stats derived from match results, and ranking.

use crate::models::{Group, GroupEntry, Match, PointsRules, TeamStats, DEFAULT_GROUP};
use std::cmp::Ordering;

/// Stats for every team in every group, with the default 3/1/0 points.
pub fn calculate_group_stats(groups: &[Group], matches: &[Match]) -> Vec<Group> {
    calculate_group_stats_with(groups, matches, &PointsRules::default())
}

/// Stats for every team in every group.
///
/// A match counts toward a group when its label is the group's name or the shared default
/// label, and only once both scores are in. Inputs are left untouched; every team in the
/// returned groups carries fresh stats.
pub fn calculate_group_stats_with(
    groups: &[Group],
    matches: &[Match],
    rules: &PointsRules,
) -> Vec<Group> {
    groups
        .iter()
        .map(|group| {
            let mut table = group.clone();
            for entry in &mut table.teams {
                entry.stats = Some(TeamStats::default());
            }

            let counted = matches
                .iter()
                .filter(|m| m.group == group.name || m.group == DEFAULT_GROUP);
            for m in counted {
                let Some((score1, score2)) = m.scores() else {
                    continue;
                };
                if let Some(stats) = stats_for(&mut table.teams, &m.team1.id) {
                    stats.record(score1, score2, rules);
                }
                if let Some(stats) = stats_for(&mut table.teams, &m.team2.id) {
                    stats.record(score2, score1, rules);
                }
            }
            table
        })
        .collect()
}

fn stats_for<'a>(entries: &'a mut [GroupEntry], team_id: &str) -> Option<&'a mut TeamStats> {
    entries
        .iter_mut()
        .find(|e| e.team.id == team_id)
        .map(|e| e.stats.get_or_insert_with(TeamStats::default))
}

/// Table order: points, goal difference, goals scored (all descending), then team name and
/// id ascending so equal records still have a fixed order.
pub fn compare_entries(a: &GroupEntry, b: &GroupEntry) -> Ordering {
    let (sa, sb) = (a.stats_or_default(), b.stats_or_default());
    sb.points
        .cmp(&sa.points)
        .then_with(|| sb.goal_difference.cmp(&sa.goal_difference))
        .then_with(|| sb.goals_for.cmp(&sa.goals_for))
        .then_with(|| a.team.team_name.cmp(&b.team.team_name))
        .then_with(|| a.team.id.cmp(&b.team.id))
}

/// Entries of one group, best first.
pub fn rank_group(group: &Group) -> Vec<GroupEntry> {
    let mut ranked = group.teams.clone();
    ranked.sort_by(compare_entries);
    ranked
}

/// Stats plus ranking for every group: what a standings screen shows.
pub fn calculate_standings(groups: &[Group], matches: &[Match]) -> Vec<Group> {
    calculate_group_stats(groups, matches)
        .into_iter()
        .map(|group| Group {
            teams: rank_group(&group),
            name: group.name,
        })
        .collect()
}
