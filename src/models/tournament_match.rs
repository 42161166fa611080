//! A single bracket match, its status, and the result entered for it.

use crate::models::team::TeamId;
use crate::models::tournament::TournamentId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Lifecycle of a match. The engine only produces `Pending` and `Completed`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

/// One node of the single-elimination tree.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentMatch {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    /// 1 = first round; the final has the highest round number.
    pub round: u32,
    /// 1-based slot within the round.
    pub position: u32,
    /// None = TBD (or a bye in round 1).
    pub team_1_id: Option<TeamId>,
    pub team_2_id: Option<TeamId>,
    pub team_1_score: Option<u32>,
    pub team_2_score: Option<u32>,
    pub status: MatchStatus,
    /// Set only when `status` is `Completed`.
    pub winner_id: Option<TeamId>,
    /// Match in `round + 1` that receives the winner. None for the final.
    pub next_match_id: Option<MatchId>,
}

impl TournamentMatch {
    /// Create an empty pending match at the given round and position.
    pub fn new(tournament_id: TournamentId, round: u32, position: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            round,
            position,
            team_1_id: None,
            team_2_id: None,
            team_1_score: None,
            team_2_score: None,
            status: MatchStatus::Pending,
            winner_id: None,
            next_match_id: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    /// True if `team_id` occupies either slot.
    pub fn has_team(&self, team_id: TeamId) -> bool {
        self.team_1_id == Some(team_id) || self.team_2_id == Some(team_id)
    }
}

/// Result entered for a match: the winner plus optional scores.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner_id: TeamId,
    #[serde(default)]
    pub team_1_score: Option<u32>,
    #[serde(default)]
    pub team_2_score: Option<u32>,
}

impl MatchResult {
    /// Result without scores.
    pub fn winner(winner_id: TeamId) -> Self {
        Self {
            winner_id,
            team_1_score: None,
            team_2_score: None,
        }
    }

    pub fn with_scores(winner_id: TeamId, team_1_score: u32, team_2_score: u32) -> Self {
        Self {
            winner_id,
            team_1_score: Some(team_1_score),
            team_2_score: Some(team_2_score),
        }
    }
}
