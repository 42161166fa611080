//! Entrant validation before a bracket is built.

use crate::models::{Team, TournamentError};
use std::collections::HashSet;

pub const MIN_TEAMS: usize = 2;
pub const MAX_TEAMS: usize = 16;

/// Reject fewer than 2 entrants, more than 16, or the same team twice.
pub fn validate_entrants(entrants: &[Team]) -> Result<(), TournamentError> {
    if entrants.len() < MIN_TEAMS {
        return Err(TournamentError::NotEnoughTeams);
    }
    if entrants.len() > MAX_TEAMS {
        return Err(TournamentError::TooManyTeams);
    }
    let mut seen = HashSet::with_capacity(entrants.len());
    if !entrants.iter().all(|t| seen.insert(t.id)) {
        return Err(TournamentError::DuplicateTeams);
    }
    Ok(())
}
