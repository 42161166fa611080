//! Bracket construction: pad entrants with byes, create every round, link, resolve byes.

use crate::logic::advance::fill_next_slot;
use crate::logic::link_rounds;
use crate::logic::validate::validate_entrants;
use crate::models::{
    Bracket, MatchStatus, Team, TeamId, TournamentError, TournamentId, TournamentMatch,
};

/// Smallest power of two >= `entrants`, minimum 2.
pub fn bracket_size(entrants: usize) -> usize {
    entrants.max(2).next_power_of_two()
}

/// Build the full single-elimination bracket for `entrants` (seed order as given).
///
/// 1. Pad the entrant slots with byes up to the bracket size.
/// 2. Pair consecutive slots into round-1 matches; a match with exactly one
///    entrant is created completed with that entrant as winner.
/// 3. Create empty pending matches for every later round.
/// 4. Link rounds and write bye winners into their next-round slot.
pub fn build_bracket(
    tournament_id: TournamentId,
    entrants: &[Team],
) -> Result<Bracket, TournamentError> {
    validate_entrants(entrants)?;

    let size = bracket_size(entrants.len());
    let total_rounds = size.trailing_zeros();

    let slots: Vec<Option<TeamId>> = entrants
        .iter()
        .map(|t| Some(t.id))
        .chain(std::iter::repeat(None))
        .take(size)
        .collect();

    let mut matches = Vec::with_capacity(size - 1);
    for (i, pair) in slots.chunks_exact(2).enumerate() {
        let mut m = TournamentMatch::new(tournament_id, 1, i as u32 + 1);
        m.team_1_id = pair[0];
        m.team_2_id = pair[1];
        if let (Some(team), None) | (None, Some(team)) = (pair[0], pair[1]) {
            m.status = MatchStatus::Completed;
            m.winner_id = Some(team);
        }
        matches.push(m);
    }
    for round in 2..=total_rounds {
        let count = size >> round;
        for position in 1..=count {
            matches.push(TournamentMatch::new(tournament_id, round, position as u32));
        }
    }

    link_rounds(&mut matches);
    let mut bracket = Bracket::from(matches);

    let byes: Vec<_> = bracket
        .matches()
        .iter()
        .filter(|m| m.round == 1 && m.is_completed())
        .filter_map(|m| m.winner_id.map(|w| (m.id, w)))
        .collect();
    for &(match_id, winner) in &byes {
        fill_next_slot(&mut bracket, match_id, winner);
    }

    log::debug!(
        "Built bracket for {}: {} entrants, size {}, {} rounds, {} byes",
        tournament_id,
        entrants.len(),
        size,
        total_rounds,
        byes.len()
    );
    Ok(bracket)
}
