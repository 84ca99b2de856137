//! Single-elimination progression: winners of a finished round meet in the next one.

use crate::logic::scheduler::{generate_knockout_schedule, pair_knockout_round};
use crate::logic::standings::{calculate_group_stats, rank_group};
use crate::models::{EngineError, Group, Match, Team};
use log::info;
use serde::{Deserialize, Serialize};

/// Qualifiers taken from each group when the caller does not say otherwise.
pub const DEFAULT_QUALIFIERS_PER_GROUP: usize = 2;

/// Result of advancing a knockout round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advancement {
    /// Matches of the following round.
    NextRound(Vec<Match>),
    /// Only one team left.
    Champion(Team),
}

/// Winner of a finished knockout match.
pub fn match_winner(m: &Match) -> Result<&Team, EngineError> {
    let (score1, score2) = m
        .scores()
        .ok_or(EngineError::IncompleteRound { incomplete: 1 })?;
    if score1 == score2 {
        return Err(EngineError::TiedKnockoutMatch {
            round: m.round,
            team1: m.team1.id.clone(),
            team2: m.team2.id.clone(),
        });
    }
    Ok(if score1 > score2 { &m.team1 } else { &m.team2 })
}

/// Take a fully scored round and produce the next one, or the champion.
///
/// The caller passes only the current round's matches. Winners keep the order of the matches
/// they won; the next round number is one past the highest round in the input.
pub fn advance_knockout_round(current_round: &[Match]) -> Result<Advancement, EngineError> {
    if current_round.is_empty() {
        return Err(EngineError::InsufficientTeams {
            required: 2,
            supplied: 0,
        });
    }

    let incomplete = current_round.iter().filter(|m| !m.is_complete()).count();
    if incomplete > 0 {
        return Err(EngineError::IncompleteRound { incomplete });
    }

    let winners = current_round
        .iter()
        .map(|m| match_winner(m).cloned())
        .collect::<Result<Vec<Team>, EngineError>>()?;

    if let [champion] = winners.as_slice() {
        info!("Champion: {}", champion.team_name);
        return Ok(Advancement::Champion(champion.clone()));
    }

    let next_round = current_round.iter().map(|m| m.round).max().unwrap_or(0) + 1;
    info!(
        "Knockout round {}: {} teams advance",
        next_round,
        winners.len()
    );
    Ok(Advancement::NextRound(pair_knockout_round(
        &winners, next_round,
    )))
}

/// Round 1 of the knockout phase from finished group tables.
///
/// The top `qualifiers_per_group` of every group are listed rank by rank (A1, B1, ..., A2,
/// B2, ...), then folded so consecutive pairing puts the best remaining seed against the
/// worst remaining one.
pub fn seed_knockout_from_groups(
    groups: &[Group],
    matches: &[Match],
    qualifiers_per_group: usize,
) -> Result<Vec<Match>, EngineError> {
    let group_matches: Vec<&Match> = matches
        .iter()
        .filter(|m| groups.iter().any(|g| g.name == m.group))
        .collect();
    let incomplete = group_matches.iter().filter(|m| !m.is_complete()).count();
    if incomplete > 0 {
        return Err(EngineError::IncompleteRound { incomplete });
    }

    let tables: Vec<Vec<Team>> = calculate_group_stats(groups, matches)
        .iter()
        .map(|g| {
            rank_group(g)
                .into_iter()
                .take(qualifiers_per_group)
                .map(|e| e.team)
                .collect()
        })
        .collect();

    let mut seeds = Vec::new();
    for rank in 0..qualifiers_per_group {
        seeds.extend(tables.iter().filter_map(|t| t.get(rank).cloned()));
    }

    generate_knockout_schedule(&fold_seeds(seeds))
}

/// [s0, s1, ..., sn-1] -> [s0, sn-1, s1, sn-2, ...]
fn fold_seeds(seeds: Vec<Team>) -> Vec<Team> {
    let mut folded = Vec::with_capacity(seeds.len());
    let mut queue: std::collections::VecDeque<Team> = seeds.into();
    while let Some(top) = queue.pop_front() {
        folded.push(top);
        if let Some(bottom) = queue.pop_back() {
            folded.push(bottom);
        }
    }
    folded
}
