//! Round linking: wire every match to the match it feeds in the next round.

use crate::models::TournamentMatch;
use std::collections::BTreeMap;

/// Set `next_match_id` of each round-r match at index i (by position) to the
/// round-(r+1) match at index i / 2. The final keeps `None`.
pub fn link_rounds(matches: &mut [TournamentMatch]) {
    let mut rounds: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
    for (i, m) in matches.iter().enumerate() {
        rounds.entry(m.round).or_default().push(i);
    }
    for indices in rounds.values_mut() {
        indices.sort_by_key(|&i| matches[i].position);
    }

    let rounds: Vec<(u32, Vec<usize>)> = rounds.into_iter().collect();
    for pair in rounds.windows(2) {
        let (round, current) = &pair[0];
        let (next_round, next) = &pair[1];
        if *next_round != *round + 1 {
            continue;
        }
        for (i, &idx) in current.iter().enumerate() {
            let target = next.get(i / 2).map(|&n| matches[n].id);
            matches[idx].next_match_id = target;
        }
    }
}
