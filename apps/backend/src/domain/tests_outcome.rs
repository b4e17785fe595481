use crate::domain::outcome::{
    score_pair_mode, score_round, score_round_for, score_weighted_mode, SWEEP_LEVELS,
};
use crate::domain::ranks::{parse_ranks, parse_ranks_for};
use crate::domain::rules::{
    PairRules, PointTable, RuleConfig, Side, TableSize, Thresholds, WeightedRules,
};

fn pair_rules() -> PairRules {
    PairRules::new().with(1, 2, 3).with(1, 3, 2).with(1, 4, 1)
}

fn eight_rules() -> WeightedRules {
    WeightedRules {
        points: PointTable::new(vec![7, 6, 5, 4, 3, 2, 1, 0]),
        thresholds: Thresholds::new(1, 6, 11),
    }
}

fn six_rules() -> WeightedRules {
    WeightedRules {
        points: PointTable::new(vec![5, 4, 3, 2, 1, 0]),
        thresholds: Thresholds::new(1, 4, 7),
    }
}

fn rules(must1: bool) -> RuleConfig {
    RuleConfig {
        first_place_required: must1,
        strict_a: false,
        pair: pair_rules(),
        six: six_rules(),
        eight: eight_rules(),
    }
}

#[test]
fn pair_sweep_overrides_table() {
    let team1 = parse_ranks("21", 2).unwrap();
    for table in [PairRules::new(), pair_rules(), PairRules::new().with(1, 2, 0)] {
        for must1 in [false, true] {
            let out = score_pair_mode(&team1, &table, must1);
            assert_eq!(out.winner, Some(Side::Team1));
            assert_eq!(out.level_delta, SWEEP_LEVELS);
            assert!(out.is_sweep);
            assert_eq!(out.note, "complete sweep");
        }
    }
}

#[test]
fn pair_must1_without_first_place_gives_opponent_the_round() {
    let team1 = parse_ranks("3 4", 2).unwrap();
    let out = score_pair_mode(&team1, &pair_rules(), true);
    assert_eq!(out.winner, Some(Side::Team2));
    assert_eq!(out.level_delta, 0);
    assert!(!out.is_sweep);
    assert_eq!(out.note, "opponent wins (not first place)");

    let team1 = parse_ranks("2 3", 2).unwrap();
    let out = score_pair_mode(&team1, &pair_rules(), true);
    assert_eq!(out.winner, Some(Side::Team2));
}

#[test]
fn pair_table_lookup() {
    let out = score_pair_mode(&parse_ranks("31", 2).unwrap(), &pair_rules(), true);
    assert_eq!(out.winner, Some(Side::Team1));
    assert_eq!(out.level_delta, 2);

    let out = score_pair_mode(&parse_ranks("14", 2).unwrap(), &pair_rules(), false);
    assert_eq!(out.winner, Some(Side::Team1));
    assert_eq!(out.level_delta, 1);
}

#[test]
fn pair_unlisted_pair_scores_the_other_side() {
    // Team 1 on 2nd and 3rd leaves team 2 with (1,4)
    let out = score_pair_mode(&parse_ranks("23", 2).unwrap(), &pair_rules(), false);
    assert_eq!(out.winner, Some(Side::Team2));
    assert_eq!(out.level_delta, 1);
    assert_eq!(out.note, "team 2 up 1");

    let out = score_pair_mode(&parse_ranks("2 4", 2).unwrap(), &pair_rules(), false);
    assert_eq!(out.winner, Some(Side::Team2));
    assert_eq!(out.level_delta, 2);
}

#[test]
fn pair_team2_sweep() {
    let out = score_pair_mode(&parse_ranks("34", 2).unwrap(), &PairRules::new(), false);
    assert_eq!(out.winner, Some(Side::Team2));
    assert_eq!(out.level_delta, SWEEP_LEVELS);
    assert!(out.is_sweep);
}

#[test]
fn pair_zero_delta_is_a_draw() {
    // Neither (1,3) nor (2,4) earns anything: nobody moves
    let zero = PairRules::new().with(1, 3, 0);
    let out = score_pair_mode(&parse_ranks("13", 2).unwrap(), &zero, false);
    assert_eq!(out.winner, None);
    assert_eq!(out.level_delta, 0);
    assert_eq!(out.note, "draw, no level change");
}

#[test]
fn team2_report_mirrors_team1_report() {
    let cfg = rules(false);
    for (size, team1) in [
        (TableSize::Four, "1 3"),
        (TableSize::Four, "3 4"),
        (TableSize::Six, "2 5 6"),
        (TableSize::Eight, "5 6 7 8"),
    ] {
        let team1 = parse_ranks_for(team1, size).unwrap();
        let team2 = team1.complement(size.max_rank());
        let a = score_round(size, &team1, &cfg);
        let b = score_round_for(size, Side::Team2, &team2, &cfg);
        assert_eq!(a, b, "{size:?} {team1}");
    }
}

#[test]
fn must1_is_judged_for_the_reporting_side() {
    let cfg = rules(true);
    // Team 2 holds 1st and 2nd and says so
    let team2 = parse_ranks("1 2", 2).unwrap();
    let out = score_round_for(TableSize::Four, Side::Team2, &team2, &cfg);
    assert_eq!(out.winner, Some(Side::Team2));
    assert!(out.is_sweep);

    // Team 2 on 1st and 4th: up 1
    let team2 = parse_ranks("1 4", 2).unwrap();
    let out = score_round_for(TableSize::Four, Side::Team2, &team2, &cfg);
    assert_eq!(out.winner, Some(Side::Team2));
    assert_eq!(out.level_delta, 1);

    // Team 2 without first place hands the round to team 1 at no levels
    let team2 = parse_ranks("2 3", 2).unwrap();
    let out = score_round_for(TableSize::Four, Side::Team2, &team2, &cfg);
    assert_eq!(out.winner, Some(Side::Team1));
    assert_eq!(out.level_delta, 0);
}

#[test]
fn weighted_full_sweep_at_eight() {
    let team = parse_ranks("4321", 4).unwrap();
    let opp = team.complement(8);
    let out = score_weighted_mode(&team, &opp, &eight_rules(), true);
    assert_eq!(out.winner, Some(Side::Team1));
    assert_eq!(out.level_delta, SWEEP_LEVELS);
    assert!(out.is_sweep);
}

#[test]
fn weighted_must1_gives_round_to_holder_of_first() {
    let team = parse_ranks("2 3 4 5", 4).unwrap();
    let opp = team.complement(8);
    let out = score_weighted_mode(&team, &opp, &eight_rules(), true);
    assert_eq!(out.winner, Some(Side::Team2));
    assert_eq!(out.level_delta, 0);

    // Without must1 the points decide: 6+5+4+3=18 vs 7+2+1+0=10 → diff 8, tier 2
    let out = score_weighted_mode(&team, &opp, &eight_rules(), false);
    assert_eq!(out.winner, Some(Side::Team1));
    assert_eq!(out.level_delta, 2);
}

#[test]
fn weighted_tie_has_no_winner() {
    // 1,4,5,8 → 7+4+3+0 = 14 ; 2,3,6,7 → 6+5+2+1 = 14
    let team = parse_ranks("1 4 5 8", 4).unwrap();
    let opp = team.complement(8);
    let out = score_weighted_mode(&team, &opp, &eight_rules(), false);
    assert_eq!(out.winner, None);
    assert_eq!(out.level_delta, 0);
    assert!(!out.is_sweep);

    // A zero threshold would otherwise grant a tier; a tie still moves nobody
    let generous = WeightedRules {
        points: eight_rules().points,
        thresholds: Thresholds::new(0, 1, 2),
    };
    let out = score_weighted_mode(&team, &opp, &generous, false);
    assert_eq!(out.winner, None);
    assert_eq!(out.level_delta, 0);
}

#[test]
fn weighted_negative_diff_goes_to_opponent() {
    // 6p: team 2,5,6 → 4+1+0 = 5 ; opp 1,3,4 → 5+3+2 = 10 ; diff -5 → tier 2
    let team = parse_ranks("256", 3).unwrap();
    let opp = team.complement(6);
    let out = score_weighted_mode(&team, &opp, &six_rules(), false);
    assert_eq!(out.winner, Some(Side::Team2));
    assert_eq!(out.level_delta, 2);
}

#[test]
fn weighted_below_threshold_records_winner_without_levels() {
    let rules = WeightedRules {
        points: PointTable::new(vec![5, 4, 3, 2, 1, 0]),
        thresholds: Thresholds::new(3, 5, 8),
    };
    // team 1,4,6 → 5+2+0 = 7 ; opp 2,3,5 → 4+3+1 = 8 ; diff -1 → tier 0
    let team = parse_ranks("1 4 6", 3).unwrap();
    let out = score_weighted_mode(&team, &team.complement(6), &rules, false);
    assert_eq!(out.winner, Some(Side::Team2));
    assert_eq!(out.level_delta, 0);
}

#[test]
fn weighted_missing_points_count_as_zero() {
    let rules = WeightedRules {
        points: PointTable::new(vec![3]),
        thresholds: Thresholds::new(1, 2, 3),
    };
    let team = parse_ranks("1 5 6", 3).unwrap();
    let out = score_weighted_mode(&team, &team.complement(6), &rules, false);
    assert_eq!(out.winner, Some(Side::Team1));
    assert_eq!(out.level_delta, 3);
}

#[test]
fn score_round_dispatches_on_table_size() {
    let cfg = rules(false);
    let four = score_round(TableSize::Four, &parse_ranks("13", 2).unwrap(), &cfg);
    assert_eq!(four.level_delta, 2);

    let six = score_round(TableSize::Six, &parse_ranks("256", 3).unwrap(), &cfg);
    assert_eq!(six.winner, Some(Side::Team2));

    let eight = score_round(TableSize::Eight, &parse_ranks("1234", 4).unwrap(), &cfg);
    assert!(eight.is_sweep);
}

#[test]
fn scoring_is_deterministic() {
    let cfg = rules(true);
    let team = parse_ranks("2 5 6", 3).unwrap();
    let a = score_round(TableSize::Six, &team, &cfg);
    let b = score_round(TableSize::Six, &team, &cfg);
    assert_eq!(a, b);
}

#[test]
fn weighted_team2_sweep_at_eight() {
    let team = parse_ranks("5 6 7 8", 4).unwrap();
    let out = score_weighted_mode(&team, &team.complement(8), &eight_rules(), false);
    assert_eq!(out.winner, Some(Side::Team2));
    assert_eq!(out.level_delta, SWEEP_LEVELS);
    assert!(out.is_sweep);
}

#[test]
fn weighted_extreme_points_do_not_overflow() {
    let rules = WeightedRules {
        points: PointTable::new(vec![i32::MAX, 0, 0, 0, 0, -1]),
        thresholds: Thresholds::new(1, 2, 3),
    };
    let team = parse_ranks("1 2 3", 3).unwrap();
    let out = score_weighted_mode(&team, &team.complement(6), &rules, false);
    assert_eq!(out.winner, Some(Side::Team1));
    assert_eq!(out.level_delta, 3);
    assert!(out.note.contains(&(i64::from(i32::MAX)).to_string()));

    let rules = WeightedRules {
        points: PointTable::new(vec![i32::MIN, i32::MAX, i32::MAX, i32::MIN, i32::MIN, i32::MIN]),
        ..rules
    };
    let out = score_weighted_mode(&team, &team.complement(6), &rules, false);
    assert_eq!(out.winner, Some(Side::Team1));
}
