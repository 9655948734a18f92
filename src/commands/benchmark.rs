//! Benchmark command
//!
//! Measures generator throughput over randomly sampled start/end pairs.

use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::{Duration, Instant};

use crate::search::generate;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_pairs: usize,
    pub solved_pairs: usize,
    pub total_ladders: usize,
    /// Ladder length -> number of pairs whose shortest ladders have it
    pub length_distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub pairs_per_second: f64,
}

/// Run the generator on `count` random same-length word pairs
///
/// Pairs are drawn uniformly from the lexicon's word-length buckets; both
/// endpoints always come from the same bucket so a ladder is at least
/// possible. Returns None if the lexicon has no bucket with two words.
#[must_use]
pub fn run_benchmark(lexicon: &FxHashSet<String>, count: usize) -> Option<BenchmarkResult> {
    let mut buckets: FxHashMap<usize, Vec<&String>> = FxHashMap::default();
    for word in lexicon {
        buckets.entry(word.len()).or_default().push(word);
    }
    let buckets: Vec<&Vec<&String>> = buckets.values().filter(|b| b.len() >= 2).collect();
    if buckets.is_empty() {
        return None;
    }

    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut rng = rand::rng();
    let mut solved_pairs = 0;
    let mut total_ladders = 0;
    let mut length_distribution: FxHashMap<usize, usize> = FxHashMap::default();

    let start = Instant::now();
    for _ in 0..count {
        // Both choices may land on the same word; generate handles that as
        // the trivial single-word ladder.
        let bucket = buckets
            .choose(&mut rng)
            .expect("buckets checked non-empty above");
        let from = bucket.choose(&mut rng).expect("bucket has two words");
        let to = bucket.choose(&mut rng).expect("bucket has two words");

        let ladders = generate(from, to, lexicon);
        if !ladders.is_empty() {
            solved_pairs += 1;
            total_ladders += ladders.len();
            *length_distribution.entry(ladders[0].len()).or_insert(0) += 1;
        }

        pb.inc(1);
        pb.set_message(format!("{from} -> {to}"));
    }
    let duration = start.elapsed();
    pb.finish_and_clear();

    Some(BenchmarkResult {
        total_pairs: count,
        solved_pairs,
        total_ladders,
        length_distribution,
        duration,
        pairs_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
