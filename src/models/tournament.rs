//! Tournament, TournamentType and TournamentStatus.

use crate::logic::{advance_winner, bracket_winner, build_bracket};
use crate::models::bracket::Bracket;
use crate::models::team::{Team, TeamId};
use crate::models::tournament_match::{MatchId, MatchResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur while creating or playing a tournament.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Fewer than 2 entrants.
    NotEnoughTeams,
    /// More than 16 entrants.
    TooManyTeams,
    /// The same team was entered twice.
    DuplicateTeams,
    /// Tournament (or team) name is empty after trimming.
    EmptyName,
    /// Format exists as a tag but has no bracket engine.
    NotImplemented(TournamentType),
    /// No match with this id in the bracket.
    MatchNotFound(MatchId),
    /// Declared winner occupies neither slot of the match.
    WinnerNotInMatch { match_id: MatchId, winner_id: TeamId },
    /// One slot is still waiting for the winner of an earlier match.
    OpponentNotDecided(MatchId),
    /// A corrected winner would replace a team in a next match that was already played.
    NextMatchAlreadyPlayed {
        match_id: MatchId,
        next_match_id: MatchId,
    },
    TeamNotFound(TeamId),
    TournamentNotFound(TournamentId),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::NotEnoughTeams => write!(f, "At least 2 teams are required"),
            TournamentError::TooManyTeams => write!(f, "Maximum 16 teams allowed"),
            TournamentError::DuplicateTeams => write!(f, "Duplicate teams are not allowed"),
            TournamentError::EmptyName => write!(f, "Name is required"),
            TournamentError::NotImplemented(kind) => {
                write!(f, "{} tournaments are not implemented yet", kind)
            }
            TournamentError::MatchNotFound(_) => write!(f, "Match not found"),
            TournamentError::WinnerNotInMatch { .. } => {
                write!(f, "Winner must be one of the teams in the match")
            }
            TournamentError::OpponentNotDecided(_) => {
                write!(f, "Both teams must be known before entering a result")
            }
            TournamentError::NextMatchAlreadyPlayed { .. } => {
                write!(f, "Winner cannot change: the next match has already been played")
            }
            TournamentError::TeamNotFound(id) => write!(f, "Team {} not found", id),
            TournamentError::TournamentNotFound(_) => write!(f, "No tournament"),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Bracket format. Only single elimination has an engine.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TournamentType {
    #[default]
    SingleElimination,
    DoubleElimination,
    RoundRobin,
}

impl std::fmt::Display for TournamentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentType::SingleElimination => write!(f, "Single elimination"),
            TournamentType::DoubleElimination => write!(f, "Double elimination"),
            TournamentType::RoundRobin => write!(f, "Round robin"),
        }
    }
}

/// Advisory phase of the tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TournamentStatus {
    /// Bracket built, no result entered yet.
    #[default]
    Setup,
    InProgress,
    /// Final has a winner.
    Completed,
}

/// A tournament and its full bracket.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TournamentType,
    pub status: TournamentStatus,
    /// Entrants in seed order.
    pub team_ids: Vec<TeamId>,
    pub bracket: Bracket,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub winner_id: Option<TeamId>,
}

impl Tournament {
    /// Validate the input and build the bracket. Nothing is created on error.
    pub fn create(
        name: impl Into<String>,
        kind: TournamentType,
        entrants: &[Team],
    ) -> Result<Self, TournamentError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyName);
        }
        if kind != TournamentType::SingleElimination {
            return Err(TournamentError::NotImplemented(kind));
        }
        let id = Uuid::new_v4();
        let bracket = build_bracket(id, entrants)?;
        log::info!(
            "Created tournament '{}' ({}) with {} teams, {} matches",
            name,
            id,
            entrants.len(),
            bracket.len()
        );
        Ok(Self {
            id,
            name: name.to_string(),
            kind,
            status: TournamentStatus::Setup,
            team_ids: entrants.iter().map(|t| t.id).collect(),
            bracket,
            created_at: Utc::now(),
            completed_at: None,
            winner_id: None,
        })
    }

    /// Record a match result, advance the winner, and refresh the tournament status.
    pub fn record_result(
        &mut self,
        match_id: MatchId,
        result: &MatchResult,
    ) -> Result<(), TournamentError> {
        if let Err(e) = advance_winner(&mut self.bracket, match_id, result) {
            log::warn!("Rejected result for match {} in '{}': {}", match_id, self.name, e);
            return Err(e);
        }
        if self.status == TournamentStatus::Setup {
            self.status = TournamentStatus::InProgress;
        }
        if let Some(winner) = bracket_winner(self.bracket.matches()) {
            if self.status != TournamentStatus::Completed {
                log::info!("Tournament '{}' ({}) completed", self.name, self.id);
                self.status = TournamentStatus::Completed;
                self.completed_at = Some(Utc::now());
            }
            self.winner_id = Some(winner);
        }
        Ok(())
    }
}
