//! Integration tests for tournament creation and result recording.

use league_bracket_web::{
    MatchResult, Team, Tournament, TournamentError, TournamentStatus, TournamentType,
};
use uuid::Uuid;

fn teams(n: usize) -> Vec<Team> {
    (0..n).map(|i| Team::new(format!("T{i}"))).collect()
}

#[test]
fn create_builds_bracket_in_setup() {
    let t = teams(4);
    let tournament =
        Tournament::create("  Spring Cup ", TournamentType::SingleElimination, &t).unwrap();
    assert_eq!(tournament.name, "Spring Cup");
    assert_eq!(tournament.status, TournamentStatus::Setup);
    assert_eq!(tournament.team_ids, t.iter().map(|x| x.id).collect::<Vec<_>>());
    assert_eq!(tournament.bracket.len(), 3);
    assert!(tournament
        .bracket
        .matches()
        .iter()
        .all(|m| m.tournament_id == tournament.id));
    assert_eq!(tournament.winner_id, None);
    assert_eq!(tournament.completed_at, None);
}

#[test]
fn create_rejects_empty_name() {
    let result = Tournament::create("   ", TournamentType::SingleElimination, &teams(4));
    assert!(matches!(result, Err(TournamentError::EmptyName)));
}

#[test]
fn create_rejects_unimplemented_formats() {
    for kind in [TournamentType::DoubleElimination, TournamentType::RoundRobin] {
        let err = Tournament::create("Cup", kind, &teams(4)).unwrap_err();
        assert_eq!(err, TournamentError::NotImplemented(kind));
    }
}

#[test]
fn create_rejects_invalid_entrants() {
    let err = Tournament::create("Cup", TournamentType::SingleElimination, &teams(1)).unwrap_err();
    assert_eq!(err.to_string(), "At least 2 teams are required");
}

#[test]
fn recording_results_moves_status_to_completed() {
    let t = teams(2);
    let mut tournament = Tournament::create("Duel", TournamentType::SingleElimination, &t).unwrap();
    let final_id = tournament.bracket.matches()[0].id;

    tournament
        .record_result(final_id, &MatchResult::with_scores(t[1].id, 1, 3))
        .unwrap();
    assert_eq!(tournament.status, TournamentStatus::Completed);
    assert_eq!(tournament.winner_id, Some(t[1].id));
    assert!(tournament.completed_at.is_some());

    // Correcting the final keeps the tournament completed with the new winner.
    tournament
        .record_result(final_id, &MatchResult::with_scores(t[0].id, 4, 3))
        .unwrap();
    assert_eq!(tournament.status, TournamentStatus::Completed);
    assert_eq!(tournament.winner_id, Some(t[0].id));
}

#[test]
fn first_result_moves_status_to_in_progress() {
    let t = teams(4);
    let mut tournament = Tournament::create("Cup", TournamentType::SingleElimination, &t).unwrap();
    let first = tournament.bracket.matches()[0].id;
    tournament
        .record_result(first, &MatchResult::winner(t[0].id))
        .unwrap();
    assert_eq!(tournament.status, TournamentStatus::InProgress);
    assert_eq!(tournament.winner_id, None);
}

#[test]
fn failed_result_leaves_status_untouched() {
    let t = teams(4);
    let mut tournament = Tournament::create("Cup", TournamentType::SingleElimination, &t).unwrap();
    let missing = Uuid::new_v4();
    assert_eq!(
        tournament.record_result(missing, &MatchResult::winner(t[0].id)),
        Err(TournamentError::MatchNotFound(missing))
    );
    assert_eq!(tournament.status, TournamentStatus::Setup);
}

#[test]
fn tournament_json_uses_type_tag_and_kebab_case() {
    let tournament =
        Tournament::create("Cup", TournamentType::SingleElimination, &teams(3)).unwrap();
    let json = serde_json::to_value(&tournament).unwrap();
    assert_eq!(json["type"], "single-elimination");
    assert_eq!(json["status"], "setup");
    assert_eq!(json["bracket"][1]["status"], "completed");
    assert_eq!(json["bracket"][0]["status"], "pending");
}

#[test]
fn champion_survives_rejected_early_correction() {
    let t = teams(4);
    let mut tournament = Tournament::create("Cup", TournamentType::SingleElimination, &t).unwrap();
    let ids: Vec<_> = tournament.bracket.matches().iter().map(|m| m.id).collect();
    let (r1p1, r1p2, r2p1) = (ids[0], ids[1], ids[2]);

    tournament.record_result(r1p1, &MatchResult::winner(t[0].id)).unwrap();
    tournament.record_result(r1p2, &MatchResult::winner(t[3].id)).unwrap();
    tournament.record_result(r2p1, &MatchResult::winner(t[0].id)).unwrap();

    let err = tournament
        .record_result(r1p1, &MatchResult::winner(t[1].id))
        .unwrap_err();
    assert!(matches!(err, TournamentError::NextMatchAlreadyPlayed { .. }));
    assert_eq!(tournament.winner_id, Some(t[0].id));
    assert_eq!(tournament.status, TournamentStatus::Completed);
    let final_match = &tournament.bracket.matches()[2];
    assert_eq!(final_match.team_1_id, Some(t[0].id));
    assert_eq!(final_match.winner_id, Some(t[0].id));
}
