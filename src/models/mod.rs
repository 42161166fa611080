//! Data structures for the league: teams, bracket matches, tournaments.

mod bracket;
mod team;
mod tournament;
mod tournament_match;

pub use bracket::Bracket;
pub use team::{Team, TeamId};
pub use tournament::{Tournament, TournamentError, TournamentId, TournamentStatus, TournamentType};
pub use tournament_match::{MatchId, MatchResult, MatchStatus, TournamentMatch};
