//! Read-only views over a match list: completion, winner, round grouping and names.

use crate::models::{TeamId, TournamentMatch};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Highest round number present (0 for an empty list).
pub fn total_rounds(matches: &[TournamentMatch]) -> u32 {
    matches.iter().map(|m| m.round).max().unwrap_or(0)
}

fn final_match(matches: &[TournamentMatch]) -> Option<&TournamentMatch> {
    let last = total_rounds(matches);
    matches.iter().find(|m| m.round == last)
}

/// True iff the final is completed.
pub fn is_complete(matches: &[TournamentMatch]) -> bool {
    final_match(matches).is_some_and(|m| m.is_completed())
}

/// Winner of the final, if it has been played.
pub fn bracket_winner(matches: &[TournamentMatch]) -> Option<TeamId> {
    final_match(matches)
        .filter(|m| m.is_completed())
        .and_then(|m| m.winner_id)
}

/// Matches grouped by round, keeping their relative order.
pub fn group_by_round(matches: &[TournamentMatch]) -> BTreeMap<u32, Vec<&TournamentMatch>> {
    let mut rounds: BTreeMap<u32, Vec<&TournamentMatch>> = BTreeMap::new();
    for m in matches {
        rounds.entry(m.round).or_default().push(m);
    }
    rounds
}

/// Like [`group_by_round`], with each round sorted by position.
pub fn bracket_structure(matches: &[TournamentMatch]) -> BTreeMap<u32, Vec<&TournamentMatch>> {
    let mut rounds = group_by_round(matches);
    for round in rounds.values_mut() {
        round.sort_by_key(|m| m.position);
    }
    rounds
}

/// Display name of a round, counted back from the final.
pub fn round_name(round: u32, total_rounds: u32) -> String {
    let from_final = total_rounds.checked_sub(round).map(|d| d + 1);
    match from_final {
        Some(1) => "Final".to_string(),
        Some(2) => "Semifinals".to_string(),
        Some(3) => "Quarterfinals".to_string(),
        Some(4) => "Round of 16".to_string(),
        Some(5) => "Round of 32".to_string(),
        _ => format!("Round {}", round),
    }
}

/// One column of the bracket, ready for display.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundView {
    pub round: u32,
    pub name: String,
    pub matches: Vec<TournamentMatch>,
}

/// Rounds in ascending order with names and position-sorted matches.
pub fn bracket_rounds(matches: &[TournamentMatch]) -> Vec<RoundView> {
    let total = total_rounds(matches);
    bracket_structure(matches)
        .into_iter()
        .map(|(round, ms)| RoundView {
            round,
            name: round_name(round, total),
            matches: ms.into_iter().cloned().collect(),
        })
        .collect()
}
