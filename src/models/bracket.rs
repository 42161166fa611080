//! Bracket: the flat, ordered list of matches plus an id index.

use crate::models::tournament_match::{MatchId, TournamentMatch};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Owns every match of a tournament. The tree is encoded by `next_match_id`;
/// matches are looked up through an id index rebuilt whenever the list is loaded.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<TournamentMatch>", into = "Vec<TournamentMatch>")]
pub struct Bracket {
    matches: Vec<TournamentMatch>,
    index: HashMap<MatchId, usize>,
}

impl Bracket {
    /// All matches in creation order (round 1 first, then by position).
    pub fn matches(&self) -> &[TournamentMatch] {
        &self.matches
    }

    pub fn get(&self, id: MatchId) -> Option<&TournamentMatch> {
        self.index.get(&id).map(|&i| &self.matches[i])
    }

    /// Only slot fields may be changed through this; the structure stays fixed.
    pub(crate) fn get_mut(&mut self, id: MatchId) -> Option<&mut TournamentMatch> {
        let i = *self.index.get(&id)?;
        self.matches.get_mut(i)
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

impl From<Vec<TournamentMatch>> for Bracket {
    fn from(matches: Vec<TournamentMatch>) -> Self {
        let index = matches
            .iter()
            .enumerate()
            .map(|(i, m)| (m.id, i))
            .collect();
        Self { matches, index }
    }
}

impl From<Bracket> for Vec<TournamentMatch> {
    fn from(bracket: Bracket) -> Self {
        bracket.matches
    }
}
