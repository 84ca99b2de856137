//! Integration tests for fixture generation: round robin, knockout, group stage.

use chrono::{Duration, TimeZone, Utc};
use std::collections::HashSet;
use tournament_engine::{
    generate_group_knockout_schedule, generate_knockout_schedule, generate_round_robin,
    generate_schedule, schedule_rounds, EngineError, Match, Team, TournamentFormat,
    DEFAULT_GROUP, KNOCKOUT_GROUP,
};

fn teams(names: &[&str]) -> Vec<Team> {
    names.iter().map(|n| Team::new(*n, format!("Team {n}"))).collect()
}

fn numbered(n: usize) -> Vec<Team> {
    (0..n).map(|i| Team::new(format!("t{i}"), format!("Team {i}"))).collect()
}

fn pairing(m: &Match) -> (u32, &str, &str) {
    (m.round, m.team1.id.as_str(), m.team2.id.as_str())
}

#[test]
fn round_robin_requires_two_teams() {
    assert_eq!(
        generate_round_robin(&teams(&["A"])),
        Err(EngineError::InsufficientTeams {
            required: 2,
            supplied: 1
        })
    );
    assert!(generate_round_robin(&[]).is_err());
}

#[test]
fn round_robin_four_teams_follows_circle_rotation() {
    let matches = generate_round_robin(&teams(&["A", "B", "C", "D"])).unwrap();
    let got: Vec<_> = matches.iter().map(pairing).collect();
    assert_eq!(
        got,
        vec![
            (1, "A", "D"),
            (1, "B", "C"),
            (2, "A", "C"),
            (2, "D", "B"),
            (3, "A", "B"),
            (3, "C", "D"),
        ]
    );
    for m in &matches {
        assert_eq!(m.group, DEFAULT_GROUP);
        assert!(!m.is_complete());
        assert_eq!(m.scheduled_at, None);
    }
}

#[test]
fn round_robin_three_teams_rotates_the_bye() {
    let matches = generate_round_robin(&teams(&["A", "B", "C"])).unwrap();
    let got: Vec<_> = matches.iter().map(pairing).collect();
    // A sits out round 1, B round 2, C round 3.
    assert_eq!(got, vec![(1, "B", "C"), (2, "A", "C"), (3, "A", "B")]);
}

#[test]
fn round_robin_is_deterministic() {
    let roster = numbered(7);
    assert_eq!(
        generate_round_robin(&roster).unwrap(),
        generate_round_robin(&roster).unwrap()
    );
}

#[test]
fn round_robin_each_team_plays_at_most_once_per_round() {
    let matches = generate_round_robin(&numbered(6)).unwrap();
    for round in 1..=5 {
        let mut seen = HashSet::new();
        for m in matches.iter().filter(|m| m.round == round) {
            assert!(seen.insert(m.team1.id.clone()));
            assert!(seen.insert(m.team2.id.clone()));
        }
        assert_eq!(seen.len(), 6);
    }
}

#[test]
fn knockout_pairs_consecutive_teams() {
    let matches = generate_knockout_schedule(&teams(&["A", "B", "C", "D"])).unwrap();
    let got: Vec<_> = matches.iter().map(pairing).collect();
    assert_eq!(got, vec![(1, "A", "B"), (1, "C", "D")]);
    assert!(matches.iter().all(|m| m.group == KNOCKOUT_GROUP));
}

#[test]
fn knockout_odd_count_drops_last_team() {
    let matches = generate_knockout_schedule(&teams(&["A", "B", "C"])).unwrap();
    assert_eq!(matches.len(), 1);
    assert!(!matches[0].involves("C"));
}

#[test]
fn knockout_requires_two_teams() {
    assert!(matches!(
        generate_knockout_schedule(&teams(&["A"])),
        Err(EngineError::InsufficientTeams { .. })
    ));
}

#[test]
fn group_stage_requires_three_teams() {
    assert_eq!(
        generate_group_knockout_schedule(&teams(&["A", "B"])),
        Err(EngineError::InsufficientTeams {
            required: 3,
            supplied: 2
        })
    );
}

#[test]
fn group_stage_distributes_by_index() {
    // 7 / 3 = 2 groups
    let schedule = generate_group_knockout_schedule(&numbered(7)).unwrap();
    assert_eq!(schedule.groups.len(), 2);
    assert_eq!(schedule.groups[0].name, "A");
    assert_eq!(schedule.groups[1].name, "B");

    let ids = |g: usize| -> Vec<String> {
        schedule.groups[g].teams.iter().map(|e| e.team.id.clone()).collect()
    };
    assert_eq!(ids(0), ["t0", "t2", "t4", "t6"]);
    assert_eq!(ids(1), ["t1", "t3", "t5"]);

    // 4 teams -> 6 matches, 3 teams -> 3 matches
    assert_eq!(schedule.matches.len(), 9);
    assert_eq!(schedule.matches.iter().filter(|m| m.group == "A").count(), 6);
    assert_eq!(schedule.matches.iter().filter(|m| m.group == "B").count(), 3);
    for m in &schedule.matches {
        let group = schedule.groups.iter().find(|g| g.name == m.group).unwrap();
        assert!(group.contains(&m.team1.id) && group.contains(&m.team2.id));
    }
}

#[test]
fn group_stage_caps_at_four_groups() {
    let schedule = generate_group_knockout_schedule(&numbered(20)).unwrap();
    let names: Vec<_> = schedule.groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C", "D"]);
    assert!(schedule.groups.iter().all(|g| g.teams.len() == 5));
    assert_eq!(schedule.matches.len(), 4 * 10);
}

#[test]
fn generate_schedule_dispatches_on_format() {
    let roster = numbered(4);

    let league = generate_schedule(TournamentFormat::RoundRobin, &roster).unwrap();
    assert_eq!(league.groups.len(), 1);
    assert_eq!(league.groups[0].name, DEFAULT_GROUP);
    assert_eq!(league.groups[0].teams.len(), 4);
    assert_eq!(league.matches.len(), 6);

    let cup = generate_schedule(TournamentFormat::Knockout, &roster).unwrap();
    assert_eq!(cup.groups[0].name, KNOCKOUT_GROUP);
    assert_eq!(cup.matches.len(), 2);

    let groups = generate_schedule(TournamentFormat::GroupKnockout, &roster).unwrap();
    assert_eq!(groups.groups.len(), 1);
    assert_eq!(groups.matches.len(), 6);
}

#[test]
fn schedule_rounds_spaces_rounds_by_gap() {
    let mut matches = generate_round_robin(&numbered(4)).unwrap();
    let first = Utc.with_ymd_and_hms(2026, 3, 1, 15, 0, 0).unwrap();
    schedule_rounds(&mut matches, first, Duration::days(7)).unwrap();
    for m in &matches {
        let expected = first + Duration::days(7 * (i64::from(m.round) - 1));
        assert_eq!(m.scheduled_at, Some(expected));
    }
}

#[test]
fn schedule_rounds_rejects_rounds_beyond_the_calendar() {
    let mut matches = generate_round_robin(&numbered(4)).unwrap();
    matches[5].round = 3_000_000_000;
    let first = Utc.with_ymd_and_hms(2026, 3, 1, 15, 0, 0).unwrap();
    assert_eq!(
        schedule_rounds(&mut matches, first, Duration::days(1)),
        Err(EngineError::KickoffOutOfRange {
            round: 3_000_000_000
        })
    );
    assert!(matches.iter().all(|m| m.scheduled_at.is_none()));

    // Fits in i32 but not in the calendar.
    matches[5].round = 2_000_000_000;
    assert!(matches!(
        schedule_rounds(&mut matches, first, Duration::days(1)),
        Err(EngineError::KickoffOutOfRange { .. })
    ));
}
