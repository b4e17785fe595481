use crate::domain::a_level::{
    a_rules_apply, resolve_a_level, AResolveInput, RoundLevel, TeamLevelState,
};
use crate::domain::levels::Level;
use crate::domain::rules::Side;

fn state(level: Level, a_fail_count: u8) -> TeamLevelState {
    TeamLevelState {
        level,
        a_fail_count,
    }
}

fn input(
    winner: TeamLevelState,
    loser: TeamLevelState,
    round: RoundLevel,
    strict: bool,
) -> AResolveInput {
    AResolveInput {
        winner_side: Side::Team1,
        winner,
        loser,
        round,
        strict,
        base_delta: 2,
        base_note: "team 1 up 2".to_string(),
    }
}

#[test]
fn passes_through_when_round_not_at_a() {
    let res = resolve_a_level(input(
        state(Level::Ace, 1),
        state(Level::Five, 0),
        RoundLevel::owned_by(Level::Five, Side::Team2),
        true,
    ));
    assert_eq!(res.upgrade, 2);
    assert!(!res.cleared_a);
    assert_eq!(res.winner, state(Level::Ace, 1));
    assert_eq!(res.loser, state(Level::Five, 0));
    assert_eq!(res.note, "team 1 up 2");
}

#[test]
fn passes_through_when_nobody_at_a() {
    let winner = state(Level::King, 0);
    let loser = state(Level::Queen, 0);
    let round = RoundLevel::owned_by(Level::Ace, Side::Team1);
    assert!(!a_rules_apply(&winner, &loser, &round));
    let res = resolve_a_level(input(winner, loser, round, false));
    assert_eq!(res.upgrade, 2);
}

#[test]
fn winner_clears_own_a_round() {
    for strict in [false, true] {
        let res = resolve_a_level(input(
            state(Level::Ace, 2),
            state(Level::Nine, 0),
            RoundLevel::owned_by(Level::Ace, Side::Team1),
            strict,
        ));
        assert_eq!(res.upgrade, 1);
        assert!(res.cleared_a);
        assert_eq!(res.winner.a_fail_count, 0);
        assert_eq!(res.note, "team 1 clears A");
    }
}

#[test]
fn strict_mode_blocks_clearing_on_opponents_a_round() {
    let res = resolve_a_level(input(
        state(Level::Ace, 0),
        state(Level::Ace, 1),
        RoundLevel::owned_by(Level::Ace, Side::Team2),
        true,
    ));
    assert_eq!(res.upgrade, 0);
    assert!(!res.cleared_a);
    assert!(res.note.starts_with("team 1 won at A outside own A round, no level-up"));
    // the loser was on its own A round and takes a fail
    assert_eq!(res.loser, state(Level::Ace, 2));
    assert!(res.note.ends_with("team 2 A-fail 2/3"));
}

#[test]
fn lenient_mode_clears_on_any_a_round() {
    let res = resolve_a_level(input(
        state(Level::Ace, 0),
        state(Level::Ace, 0),
        RoundLevel::owned_by(Level::Ace, Side::Team2),
        false,
    ));
    assert_eq!(res.upgrade, 1);
    assert!(res.cleared_a);
    assert_eq!(res.note, "team 1 clears A; team 2 A-fail 1/3");
}

#[test]
fn third_a_fail_demotes_to_two() {
    let res = resolve_a_level(input(
        state(Level::Seven, 0),
        state(Level::Ace, 2),
        RoundLevel::owned_by(Level::Ace, Side::Team2),
        true,
    ));
    assert_eq!(res.loser, state(Level::Two, 0));
    assert!(res.demoted);
    assert_eq!(res.upgrade, 2);
    assert_eq!(res.note, "team 1 up 2; team 2 failed A 3 times, back to 2");
}

#[test]
fn unowned_round_counts_as_own_for_team_at_that_level() {
    let res = resolve_a_level(input(
        state(Level::Three, 0),
        state(Level::Ace, 2),
        RoundLevel {
            level: Level::Ace,
            owner: None,
        },
        false,
    ));
    assert!(res.demoted);
    assert_eq!(res.loser, state(Level::Two, 0));
}

#[test]
fn loser_not_on_own_round_keeps_fail_count() {
    let res = resolve_a_level(input(
        state(Level::Ace, 0),
        state(Level::Ace, 1),
        RoundLevel::owned_by(Level::Ace, Side::Team1),
        true,
    ));
    assert!(res.cleared_a);
    assert_eq!(res.loser, state(Level::Ace, 1));
    assert_eq!(res.note, "team 1 clears A");
}

#[test]
fn advanced_resets_fail_count_off_a() {
    let s = state(Level::Ace, 2);
    assert_eq!(s.advanced(1), state(Level::Ace, 2));
    assert_eq!(state(Level::King, 0).advanced(1), state(Level::Ace, 0));
    assert_eq!(state(Level::Ten, 0).advanced(2), state(Level::Queen, 0));
}
