//! Result advancement: complete a match and move its winner into the next round.

use crate::logic::queries::bracket_structure;
use crate::models::{
    Bracket, MatchId, MatchResult, MatchStatus, TeamId, TournamentError, TournamentMatch,
};

/// Record `result` on the match and write the winner into the linked next match.
///
/// The winner goes to `team_1_id` of the next match when this match has an even
/// index within its round (ordered by position), `team_2_id` when odd. Calling this
/// again for the same match overwrites the previous result. The next match is never
/// completed automatically, even when both of its slots are now known.
///
/// Nothing changes when the result is rejected:
/// - the winner must occupy a slot of the match;
/// - a match with one empty slot is only playable as a walkover, i.e. when no
///   entrant can ever reach that slot;
/// - a corrected winner cannot replace a team in a next match that was already played.
pub fn advance_winner(
    bracket: &mut Bracket,
    match_id: MatchId,
    result: &MatchResult,
) -> Result<(), TournamentError> {
    let m = bracket
        .get(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if !m.has_team(result.winner_id) {
        return Err(TournamentError::WinnerNotInMatch {
            match_id,
            winner_id: result.winner_id,
        });
    }
    let open_slot = match (m.team_1_id, m.team_2_id) {
        (None, _) => Some(true),
        (_, None) => Some(false),
        _ => None,
    };
    if let Some(first_slot) = open_slot {
        if !slot_unreachable(bracket, match_id, first_slot) {
            return Err(TournamentError::OpponentNotDecided(match_id));
        }
    }

    let target = next_slot(bracket, match_id);
    if let Some((next_id, first_slot)) = target {
        if let Some(next) = bracket.get(next_id) {
            let current = if first_slot { next.team_1_id } else { next.team_2_id };
            if next.is_completed() && current != Some(result.winner_id) {
                return Err(TournamentError::NextMatchAlreadyPlayed {
                    match_id,
                    next_match_id: next_id,
                });
            }
        }
    }

    let m = bracket
        .get_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    m.status = MatchStatus::Completed;
    m.winner_id = Some(result.winner_id);
    if let Some(score) = result.team_1_score {
        m.team_1_score = Some(score);
    }
    if let Some(score) = result.team_2_score {
        m.team_2_score = Some(score);
    }
    log::debug!(
        "Match {} (round {}, position {}) won by {}",
        m.id,
        m.round,
        m.position,
        result.winner_id
    );

    if let Some((next_id, first_slot)) = target {
        set_slot(bracket, next_id, first_slot, result.winner_id);
    }
    Ok(())
}

/// Write `winner` into the slot of the next match fed by `match_id`.
/// No-op for the final.
pub(crate) fn fill_next_slot(bracket: &mut Bracket, match_id: MatchId, winner: TeamId) {
    if let Some((next_id, first_slot)) = next_slot(bracket, match_id) {
        set_slot(bracket, next_id, first_slot, winner);
    }
}

/// Next match id and whether this match feeds its first slot (even index in round).
fn next_slot(bracket: &Bracket, match_id: MatchId) -> Option<(MatchId, bool)> {
    let m = bracket.get(match_id)?;
    let next_id = m.next_match_id?;
    let index = bracket_structure(bracket.matches())
        .get(&m.round)?
        .iter()
        .position(|s| s.id == match_id)?;
    Some((next_id, index % 2 == 0))
}

fn set_slot(bracket: &mut Bracket, match_id: MatchId, first_slot: bool, team: TeamId) {
    if let Some(m) = bracket.get_mut(match_id) {
        if first_slot {
            m.team_1_id = Some(team);
        } else {
            m.team_2_id = Some(team);
        }
    }
}

/// True if no entrant can ever arrive in this slot: it is a round-1 bye, or every
/// match below it is empty for good.
fn slot_unreachable(bracket: &Bracket, match_id: MatchId, first_slot: bool) -> bool {
    let mut feeders: Vec<&TournamentMatch> = bracket
        .matches()
        .iter()
        .filter(|f| f.next_match_id == Some(match_id))
        .collect();
    feeders.sort_by_key(|f| f.position);
    let feeder = if first_slot {
        feeders.first()
    } else {
        feeders.get(1)
    };
    match feeder {
        None => true,
        Some(f) => {
            f.team_1_id.is_none()
                && f.team_2_id.is_none()
                && slot_unreachable(bracket, f.id, true)
                && slot_unreachable(bracket, f.id, false)
        }
    }
}
