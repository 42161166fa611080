//! In-memory record store for teams and tournaments.
//!
//! Callers follow a fetch / modify / persist cycle: `get_tournament` hands out a copy,
//! the caller records results on it, and `update_tournament` writes the whole
//! tournament back. The last write wins.

use crate::models::{Team, TeamId, Tournament, TournamentError, TournamentId, TournamentStatus};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct MemoryStore {
    teams: HashMap<TeamId, Team>,
    tournaments: HashMap<TournamentId, Tournament>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a team. Names are trimmed and must not be empty.
    pub fn insert_team(&mut self, mut team: Team) -> Result<Team, TournamentError> {
        team.name = team.name.trim().to_string();
        if team.name.is_empty() {
            return Err(TournamentError::EmptyName);
        }
        self.teams.insert(team.id, team.clone());
        Ok(team)
    }

    /// All teams sorted by name (case-insensitive).
    pub fn list_teams(&self) -> Vec<Team> {
        let mut teams: Vec<Team> = self.teams.values().cloned().collect();
        teams.sort_by_key(|t| t.name.to_lowercase());
        teams
    }

    /// Look up teams in the given order. Fails on the first unknown id.
    pub fn resolve_teams(&self, ids: &[TeamId]) -> Result<Vec<Team>, TournamentError> {
        ids.iter()
            .map(|id| {
                self.teams
                    .get(id)
                    .cloned()
                    .ok_or(TournamentError::TeamNotFound(*id))
            })
            .collect()
    }

    pub fn insert_tournament(&mut self, tournament: Tournament) -> TournamentId {
        let id = tournament.id;
        self.tournaments.insert(id, tournament);
        id
    }

    pub fn get_tournament(&self, id: TournamentId) -> Option<Tournament> {
        self.tournaments.get(&id).cloned()
    }

    /// Replace a stored tournament with `tournament`.
    pub fn update_tournament(&mut self, tournament: Tournament) -> Result<(), TournamentError> {
        match self.tournaments.get_mut(&tournament.id) {
            Some(stored) => {
                *stored = tournament;
                Ok(())
            }
            None => Err(TournamentError::TournamentNotFound(tournament.id)),
        }
    }

    pub fn remove_tournament(&mut self, id: TournamentId) -> Option<Tournament> {
        self.tournaments.remove(&id)
    }

    /// Tournaments newest first, optionally only those with `status`.
    pub fn list_tournaments(&self, status: Option<TournamentStatus>) -> Vec<Tournament> {
        let mut tournaments: Vec<Tournament> = self
            .tournaments
            .values()
            .filter(|t| status.map_or(true, |s| t.status == s))
            .cloned()
            .collect();
        tournaments.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.name.cmp(&b.name))
        });
        tournaments
    }
}
