//! Bracket engine: validation, building, linking, advancement and queries.

mod advance;
mod builder;
mod linker;
mod queries;
mod validate;

pub use advance::advance_winner;
pub use builder::{bracket_size, build_bracket};
pub use linker::link_rounds;
pub use queries::{
    bracket_rounds, bracket_structure, bracket_winner, group_by_round, is_complete, round_name,
    total_rounds, RoundView,
};
pub use validate::{validate_entrants, MAX_TEAMS, MIN_TEAMS};
