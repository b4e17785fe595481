// Whole matches played through the room service.

use guandan_backend::domain::{Level, RuleConfig, Side, TableSize};
use guandan_backend::services::{NewRoom, RoomService};
use guandan_backend::state::app_state::AppState;

use crate::support::build_test_state;

async fn room_with(state: &AppState, size: TableSize, rules: RuleConfig) -> String {
    state
        .room_service()
        .create(NewRoom {
            name: "Match".to_string(),
            table_size: size,
            rules: Some(rules),
            seats: Default::default(),
        })
        .await
        .unwrap()
        .id
}

/// Record rounds in order; returns the last version.
async fn play(rooms: &RoomService, id: &str, mut version: i32, rounds: &[&str]) -> i32 {
    for ranks in rounds {
        version = rooms
            .record_round(id, version, ranks)
            .await
            .unwrap_or_else(|e| panic!("round {ranks:?}: {e}"))
            .room
            .version;
    }
    version
}

#[tokio::test]
async fn four_player_match_to_champion() {
    let state = build_test_state();
    let rooms = state.room_service();
    let id = room_with(&state, TableSize::Four, state.default_rules.clone()).await;

    // Team 1 sweeps twice, team 2 twice, then team 1's third sweep clamps at A
    let version = play(&rooms, &id, 1, &["12", "12", "34", "34", "12"]).await;
    let room = rooms.get(&id).await.unwrap();
    assert_eq!(room.state.team(Side::Team1).level, Level::Ace);
    assert_eq!(room.state.team(Side::Team2).level, Level::Ten);
    assert_eq!(room.state.rounds_played, 5);

    play(&rooms, &id, version, &["14"]).await;
    let room = rooms.get(&id).await.unwrap();
    assert_eq!(room.state.champion, Some(Side::Team1));
    assert_eq!(room.history.len(), 6);
}

#[tokio::test]
async fn team2_climbs_from_team1_reports() {
    let state = build_test_state();
    let rooms = state.room_service();
    let id = room_with(&state, TableSize::Four, state.default_rules.clone()).await;

    // Team 1 last and third: team 2 swept
    let swept = rooms.record_round(&id, 1, "3 4").await.unwrap();
    assert_eq!(swept.round.transition.outcome.winner, Some(Side::Team2));
    assert!(swept.round.transition.outcome.is_sweep);
    assert_eq!(swept.room.state.team(Side::Team2).level, Level::Six);

    // Team 1 second and fourth: team 2 holds (1,3)
    let second = rooms.record_round(&id, 2, "2 4").await.unwrap();
    assert_eq!(second.round.transition.upgrade, 2);
    assert_eq!(second.room.state.team(Side::Team2).level, Level::Eight);
    assert_eq!(second.room.state.team(Side::Team1).level, Level::Two);
    assert_eq!(second.room.state.round_level.owner, Some(Side::Team2));
}

#[tokio::test]
async fn team2_reports_its_own_positions_under_must1() {
    let state = build_test_state();
    let rooms = state.room_service();
    let mut rules = state.default_rules.clone();
    rules.first_place_required = true;
    let id = room_with(&state, TableSize::Four, rules).await;

    let recorded = rooms
        .record_round_for(&id, 1, Side::Team2, "1 3")
        .await
        .unwrap();
    assert_eq!(recorded.round.transition.outcome.winner, Some(Side::Team2));
    assert_eq!(recorded.round.transition.upgrade, 2);
    // history keeps team 1's positions
    assert_eq!(recorded.round.positions.as_slice(), &[2, 4]);
    assert_eq!(recorded.room.state.team(Side::Team2).level, Level::Four);

    // Undo restores the state from before it
    let undone = rooms.undo_last_round(&id, 2).await.unwrap();
    assert_eq!(undone.state.team(Side::Team2).level, Level::Two);
}

#[tokio::test]
async fn three_a_fails_send_a_team_back_to_two() {
    let state = build_test_state();
    let rooms = state.room_service();
    let mut rules = state.default_rules.clone();
    rules.strict_a = true;
    rules.first_place_required = true;
    let id = room_with(&state, TableSize::Four, rules).await;

    // Team 1 reaches A: 2 -> 6 -> 10 -> A
    let mut version = play(&rooms, &id, 1, &["12", "12", "12"]).await;

    for expected in 1..=2u8 {
        // Without first place team 1 loses its own A round
        let lost = rooms.record_round(&id, version, "2 3").await.unwrap();
        let team1 = lost.room.state.team(Side::Team1);
        assert_eq!(team1.level, Level::Ace);
        assert_eq!(team1.a_fail_count, expected);
        assert_eq!(lost.room.state.round_level.owner, Some(Side::Team2));

        // Winning team 2's round hands team 1 its own A round again
        let back = rooms
            .record_round(&id, lost.room.version, "1 3")
            .await
            .unwrap();
        assert_eq!(back.room.state.team(Side::Team1).a_fail_count, expected);
        assert_eq!(back.room.state.round_level.owner, Some(Side::Team1));
        version = back.room.version;
    }

    let third = rooms.record_round(&id, version, "2 3").await.unwrap();
    assert!(third.round.transition.demoted);
    let team1 = third.room.state.team(Side::Team1);
    assert_eq!(team1.level, Level::Two);
    assert_eq!(team1.a_fail_count, 0);
    assert!(third.room.state.champion.is_none());
}

#[tokio::test]
async fn eight_player_match_scores_by_points() {
    let state = build_test_state();
    let rooms = state.room_service();
    let id = room_with(&state, TableSize::Eight, state.default_rules.clone()).await;

    // 7+6+5+3 = 21 vs 4+2+1+0 = 7: difference 14, top tier
    let recorded = rooms.record_round(&id, 1, "1 2 3 5").await.unwrap();
    assert_eq!(recorded.round.transition.upgrade, 3);
    assert!(!recorded.round.transition.outcome.is_sweep);

    // 7+4+2+0 = 13 vs 6+5+3+1 = 15: team 2 ahead by 2, first tier
    let recorded = rooms.record_round(&id, 2, "1 4 6 8").await.unwrap();
    assert_eq!(recorded.round.transition.outcome.winner, Some(Side::Team2));
    assert_eq!(recorded.room.state.team(Side::Team2).level, Level::Three);
    assert_eq!(recorded.room.state.team(Side::Team1).level, Level::Five);
}
