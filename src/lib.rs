//! League tournament manager: library with models, bracket engine, store and HTTP API.

pub mod api;
pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    advance_winner, bracket_rounds, bracket_size, bracket_structure, bracket_winner, build_bracket,
    group_by_round, is_complete, link_rounds, round_name, total_rounds, validate_entrants,
    RoundView,
};
pub use models::{
    Bracket, MatchId, MatchResult, MatchStatus, Team, TeamId, Tournament, TournamentError,
    TournamentId, TournamentMatch, TournamentStatus, TournamentType,
};
pub use store::MemoryStore;
