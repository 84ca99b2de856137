//! Property tests: pair coverage, zero-sum goal difference, points per result, idempotence.

use proptest::prelude::*;
use std::collections::HashSet;
use tournament_engine::{
    advance_knockout_round, calculate_group_stats, generate_knockout_schedule,
    generate_round_robin, Advancement, Group, Match, Team, TeamStats, DEFAULT_GROUP,
};

fn roster(n: usize) -> Vec<Team> {
    (0..n)
        .map(|i| Team::new(format!("t{i}"), format!("Team {i}")))
        .collect()
}

fn stats(groups: &[Group], id: &str) -> TeamStats {
    groups[0]
        .teams
        .iter()
        .find(|e| e.team.id == id)
        .and_then(|e| e.stats)
        .unwrap_or_default()
}

proptest! {
    #[test]
    fn round_robin_covers_every_pair_once(n in 2usize..24) {
        let teams = roster(n);
        let matches = generate_round_robin(&teams).unwrap();
        prop_assert_eq!(matches.len(), n * (n - 1) / 2);

        let ids: HashSet<&str> = teams.iter().map(|t| t.id.as_str()).collect();
        let mut pairs = HashSet::new();
        for m in &matches {
            prop_assert!(ids.contains(m.team1.id.as_str()));
            prop_assert!(ids.contains(m.team2.id.as_str()));
            prop_assert_ne!(&m.team1.id, &m.team2.id);
            let pair = if m.team1.id < m.team2.id {
                (m.team1.id.clone(), m.team2.id.clone())
            } else {
                (m.team2.id.clone(), m.team1.id.clone())
            };
            prop_assert!(pairs.insert(pair));
        }

        let rounds = if n % 2 == 0 { n - 1 } else { n };
        prop_assert!(matches.iter().all(|m| m.round >= 1 && m.round as usize <= rounds));
    }

    #[test]
    fn single_match_stats_are_consistent(s1 in 0u32..20, s2 in 0u32..20) {
        let (a, b) = (Team::new("a", "A"), Team::new("b", "B"));
        let groups = vec![Group::new(DEFAULT_GROUP, vec![a.clone(), b.clone()])];
        let mut m = Match::new(1, a, b, DEFAULT_GROUP);
        m.score1 = Some(s1);
        m.score2 = Some(s2);

        let table = calculate_group_stats(&groups, &[m]);
        let (x, y) = (stats(&table, "a"), stats(&table, "b"));

        prop_assert_eq!(x.goal_difference + y.goal_difference, 0);
        prop_assert_eq!(x.played, 1);
        prop_assert_eq!(y.played, 1);

        let a_wins = x.won == 1 && y.lost == 1;
        let b_wins = y.won == 1 && x.lost == 1;
        let draw = x.drawn == 1 && y.drawn == 1;
        prop_assert_eq!([a_wins, b_wins, draw].iter().filter(|v| **v).count(), 1);
        prop_assert_eq!(x.points + y.points, if draw { 2 } else { 3 });
    }

    #[test]
    fn group_stats_are_idempotent(
        n in 2usize..9,
        scores in prop::collection::vec(prop::option::of((0u32..6, 0u32..6)), 0..40),
    ) {
        let teams = roster(n);
        let groups = vec![Group::new(DEFAULT_GROUP, teams.clone())];
        let mut matches = generate_round_robin(&teams).unwrap();
        for (m, s) in matches.iter_mut().zip(scores) {
            if let Some((s1, s2)) = s {
                m.score1 = Some(s1);
                m.score2 = Some(s2);
            }
        }

        let first = calculate_group_stats(&groups, &matches);
        let second = calculate_group_stats(&groups, &matches);
        prop_assert_eq!(&first, &second);

        let gd: i64 = first[0].teams.iter().map(|e| e.stats.unwrap().goal_difference).sum();
        prop_assert_eq!(gd, 0);
    }

    #[test]
    fn knockout_final_yields_champion(s1 in 0u32..10, s2 in 0u32..10) {
        prop_assume!(s1 != s2);
        let mut final_match = generate_knockout_schedule(&roster(2)).unwrap();
        final_match[0].score1 = Some(s1);
        final_match[0].score2 = Some(s2);
        let expected = if s1 > s2 { "t0" } else { "t1" };
        match advance_knockout_round(&final_match).unwrap() {
            Advancement::Champion(t) => prop_assert_eq!(t.id, expected),
            Advancement::NextRound(_) => prop_assert!(false, "final produced another round"),
        }
    }
}
