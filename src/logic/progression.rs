//! Tournament lifecycle: create with a schedule, record results, advance phase by phase.

use crate::logic::bracket::{
    advance_knockout_round, seed_knockout_from_groups, Advancement, DEFAULT_QUALIFIERS_PER_GROUP,
};
use crate::logic::roster::validate_teams;
use crate::logic::scheduler::generate_schedule;
use crate::logic::standings::calculate_standings;
use crate::models::{
    EngineError, Group, Match, Team, Tournament, TournamentFormat, TournamentState,
    KNOCKOUT_GROUP,
};
use chrono::{DateTime, Utc};
use log::info;

/// Validate the roster and build a tournament with its opening schedule.
///
/// Knockout tournaments start in `Knockout`; the other formats start in `GroupStage`.
pub fn create_tournament(
    name: impl Into<String>,
    format: TournamentFormat,
    teams: Vec<Team>,
) -> Result<Tournament, EngineError> {
    validate_teams(&teams)?;
    let schedule = generate_schedule(format, &teams)?;

    let mut tournament = Tournament::new(name, format);
    tournament.state = match format {
        TournamentFormat::Knockout => TournamentState::Knockout,
        TournamentFormat::RoundRobin | TournamentFormat::GroupKnockout => {
            TournamentState::GroupStage
        }
    };
    tournament.teams = teams;
    tournament.groups = schedule.groups;
    tournament.matches = schedule.matches;

    info!(
        "Created {} tournament '{}' with {} teams, {} matches",
        format,
        tournament.name,
        tournament.teams.len(),
        tournament.matches.len()
    );
    Ok(tournament)
}

/// Set (or clear, with blank input) the score of one match.
///
/// Once the knockout phase is running only the current knockout round can be edited; earlier
/// results are final.
pub fn record_score(
    tournament: &mut Tournament,
    match_index: usize,
    score1: &str,
    score2: &str,
) -> Result<(), EngineError> {
    if tournament.is_finished() {
        return Err(EngineError::InvalidState);
    }
    let state = tournament.state;
    let current_knockout_round = tournament.current_round(KNOCKOUT_GROUP);
    let m = tournament.match_mut(match_index)?;
    let locked = state == TournamentState::Knockout
        && (m.group != KNOCKOUT_GROUP || Some(m.round) != current_knockout_round);
    if locked {
        return Err(EngineError::InvalidState);
    }
    m.set_score(score1, score2)
}

/// Set or clear the kick-off time of one match.
pub fn schedule_match(
    tournament: &mut Tournament,
    match_index: usize,
    when: Option<DateTime<Utc>>,
) -> Result<(), EngineError> {
    tournament.match_mut(match_index)?.scheduled_at = when;
    Ok(())
}

/// Ranked tables for the tournament's groups.
pub fn standings(tournament: &Tournament) -> Vec<Group> {
    calculate_standings(&tournament.groups, &tournament.matches)
}

/// Move the tournament forward once the current phase is fully scored.
///
/// - league (round robin): the table leader becomes champion
/// - group stage: knockout round 1 is seeded from the tables
/// - knockout: next round is appended, or the last winner becomes champion
pub fn advance(tournament: &mut Tournament) -> Result<TournamentState, EngineError> {
    match (tournament.state, tournament.format) {
        (TournamentState::Completed, _) => Err(EngineError::InvalidState),
        (TournamentState::GroupStage, TournamentFormat::RoundRobin) => {
            let incomplete = tournament
                .matches
                .iter()
                .filter(|m| !m.is_complete())
                .count();
            if incomplete > 0 {
                return Err(EngineError::IncompleteRound { incomplete });
            }
            let leader = standings(tournament)
                .first()
                .and_then(|g| g.teams.first())
                .map(|e| e.team.clone())
                .ok_or(EngineError::InvalidState)?;
            Ok(finish(tournament, leader))
        }
        (TournamentState::GroupStage, TournamentFormat::GroupKnockout) => {
            let round_one = seed_knockout_from_groups(
                &tournament.groups,
                &tournament.matches,
                DEFAULT_QUALIFIERS_PER_GROUP,
            )?;
            info!(
                "'{}': group stage finished, {} knockout matches seeded",
                tournament.name,
                round_one.len()
            );
            tournament.matches.extend(round_one);
            tournament.state = TournamentState::Knockout;
            Ok(tournament.state)
        }
        (TournamentState::GroupStage, TournamentFormat::Knockout) => {
            Err(EngineError::InvalidState)
        }
        (TournamentState::Knockout, _) => {
            let round = tournament
                .current_round(KNOCKOUT_GROUP)
                .ok_or(EngineError::InvalidState)?;
            let current: Vec<Match> = tournament
                .matches
                .iter()
                .filter(|m| m.group == KNOCKOUT_GROUP && m.round == round)
                .cloned()
                .collect();
            match advance_knockout_round(&current)? {
                Advancement::NextRound(next) => {
                    tournament.matches.extend(next);
                    Ok(tournament.state)
                }
                Advancement::Champion(team) => Ok(finish(tournament, team)),
            }
        }
    }
}

fn finish(tournament: &mut Tournament, champion: Team) -> TournamentState {
    info!("'{}' completed, champion {}", tournament.name, champion.team_name);
    tournament.champion = Some(champion);
    tournament.state = TournamentState::Completed;
    tournament.state
}
