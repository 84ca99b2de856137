//! Fixture generation: round robin (circle method), knockout pairing and group stage.
//!
//! Everything here is deterministic in the order of the input slice.

use crate::models::{
    group_label, EngineError, Group, Match, Team, TournamentFormat, DEFAULT_GROUP, KNOCKOUT_GROUP,
};
use chrono::{DateTime, Duration, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

/// Upper bound on the number of groups in a group stage.
pub const MAX_GROUPS: usize = 4;

/// Minimum group size used to derive the number of groups.
pub const TEAMS_PER_GROUP: usize = 3;

/// Groups plus the fixtures generated for them.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub groups: Vec<Group>,
    pub matches: Vec<Match>,
}

/// Every team plays every other team once.
///
/// Circle method: with N slots (a bye slot is appended when the count is odd), round r pairs
/// slot i with slot N-1-i. Between rounds slot 0 stays put and the last slot moves to index 1.
/// Pairings against the bye are not returned.
pub fn generate_round_robin(teams: &[Team]) -> Result<Vec<Match>, EngineError> {
    if teams.len() < 2 {
        return Err(EngineError::InsufficientTeams {
            required: 2,
            supplied: teams.len(),
        });
    }

    // None is the bye.
    let mut slots: Vec<Option<&Team>> = teams.iter().map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }
    let n = slots.len();

    let mut matches = Vec::with_capacity(teams.len() * (teams.len() - 1) / 2);
    for round in 1..n {
        for i in 0..n / 2 {
            if let (Some(home), Some(away)) = (slots[i], slots[n - 1 - i]) {
                matches.push(Match::new(
                    round as u32,
                    home.clone(),
                    away.clone(),
                    DEFAULT_GROUP,
                ));
            }
        }
        slots[1..].rotate_right(1);
    }

    debug!(
        "Round robin: {} teams, {} rounds, {} matches",
        teams.len(),
        n - 1,
        matches.len()
    );
    Ok(matches)
}

/// First knockout round: pairs (0,1), (2,3), ... in input order.
///
/// With an odd count the last team gets no match in this round.
pub fn generate_knockout_schedule(teams: &[Team]) -> Result<Vec<Match>, EngineError> {
    if teams.len() < 2 {
        return Err(EngineError::InsufficientTeams {
            required: 2,
            supplied: teams.len(),
        });
    }
    Ok(pair_knockout_round(teams, 1))
}

/// Pair consecutive teams into knockout matches for `round`.
pub(crate) fn pair_knockout_round(teams: &[Team], round: u32) -> Vec<Match> {
    if let Some(left_out) = teams.chunks_exact(2).remainder().first() {
        debug!(
            "Knockout round {}: odd team count, {} is not paired",
            round, left_out.team_name
        );
    }
    teams
        .chunks_exact(2)
        .map(|pair| Match::new(round, pair[0].clone(), pair[1].clone(), KNOCKOUT_GROUP))
        .collect()
}

/// Split teams into lettered groups and generate each group's round robin.
///
/// Group count is `min(len / 3, 4)`; team i goes to group `i mod count`.
/// Only the group stage is produced here.
pub fn generate_group_knockout_schedule(teams: &[Team]) -> Result<Schedule, EngineError> {
    let group_count = (teams.len() / TEAMS_PER_GROUP).min(MAX_GROUPS);
    if group_count == 0 {
        return Err(EngineError::InsufficientTeams {
            required: TEAMS_PER_GROUP,
            supplied: teams.len(),
        });
    }

    let mut buckets: Vec<Vec<Team>> = vec![Vec::new(); group_count];
    for (i, team) in teams.iter().enumerate() {
        buckets[i % group_count].push(team.clone());
    }

    let mut groups = Vec::with_capacity(group_count);
    let mut matches = Vec::new();
    for (index, bucket) in buckets.into_iter().enumerate() {
        let name = group_label(index);
        let mut group_matches = generate_round_robin(&bucket)?;
        for m in &mut group_matches {
            m.group = name.clone();
        }
        matches.append(&mut group_matches);
        groups.push(Group::new(name, bucket));
    }

    debug!(
        "Group stage: {} teams in {} groups, {} matches",
        teams.len(),
        group_count,
        matches.len()
    );
    Ok(Schedule { groups, matches })
}

/// Initial schedule for any format, with the group partition the standings use.
pub fn generate_schedule(
    format: TournamentFormat,
    teams: &[Team],
) -> Result<Schedule, EngineError> {
    match format {
        TournamentFormat::RoundRobin => Ok(Schedule {
            matches: generate_round_robin(teams)?,
            groups: vec![Group::new(DEFAULT_GROUP, teams.to_vec())],
        }),
        TournamentFormat::Knockout => Ok(Schedule {
            matches: generate_knockout_schedule(teams)?,
            groups: vec![Group::new(KNOCKOUT_GROUP, teams.to_vec())],
        }),
        TournamentFormat::GroupKnockout => generate_group_knockout_schedule(teams),
    }
}

/// Kick-off times by round: round r starts at `first + (r - 1) * gap`.
///
/// Fails without touching any match if a kick-off would fall outside the representable range.
pub fn schedule_rounds(
    matches: &mut [Match],
    first: DateTime<Utc>,
    gap: Duration,
) -> Result<(), EngineError> {
    let kickoffs = matches
        .iter()
        .map(|m| {
            i32::try_from(m.round.saturating_sub(1))
                .ok()
                .and_then(|steps| gap.checked_mul(steps))
                .and_then(|offset| first.checked_add_signed(offset))
                .ok_or(EngineError::KickoffOutOfRange { round: m.round })
        })
        .collect::<Result<Vec<_>, EngineError>>()?;

    for (m, kickoff) in matches.iter_mut().zip(kickoffs) {
        m.scheduled_at = Some(kickoff);
    }
    Ok(())
}
