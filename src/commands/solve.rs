//! Ladder solving command
//!
//! Runs one generator call for a start/end pair and collects result stats.

use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

use crate::core::Ladder;
use crate::search::generate;

/// Result of solving one start/end pair
pub struct SolveResult {
    pub from: String,
    pub to: String,
    pub ladders: Vec<Ladder>,
    pub lexicon_size: usize,
    pub duration: Duration,
}

impl SolveResult {
    /// Length shared by every returned ladder, or None when no ladder exists
    #[must_use]
    pub fn ladder_len(&self) -> Option<usize> {
        self.ladders.first().map(Ladder::len)
    }
}

/// Find all shortest ladders for one pair, with timing
#[must_use]
pub fn solve_pair(from: &str, to: &str, lexicon: &FxHashSet<String>) -> SolveResult {
    let start = Instant::now();
    let ladders = generate(from, to, lexicon);
    let duration = start.elapsed();

    SolveResult {
        from: from.to_owned(),
        to: to.to_owned(),
        ladders,
        lexicon_size: lexicon.len(),
        duration,
    }
}
