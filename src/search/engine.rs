//! Bidirectional BFS over the one-letter-substitution graph
//!
//! Expands frontiers from both endpoints simultaneously, always growing the
//! smaller one, and records only edges that lie on some shortest path. Path
//! reconstruction then enumerates every branch of the recorded transition map.

use rustc_hash::{FxHashMap, FxHashSet};

use super::backtrack::collect_ladders;
use crate::core::Ladder;

/// Find every shortest transformation sequence from `from` to `to`
///
/// Each step substitutes exactly one letter and every intermediate word must
/// be in `lexicon`. Results are sorted lexicographically by element-wise
/// comparison. An empty result means no ladder exists; in particular the
/// result is empty whenever `to` is not in the lexicon, regardless of `from`.
///
/// Two degenerate inputs are resolved explicitly: `from == to` (with `to` in
/// the lexicon) yields the single trivial ladder `[from]`, and endpoints of
/// different lengths yield an empty result since substitution preserves
/// length.
///
/// # Examples
/// ```
/// use ladder_solver::lexicon::loader::lexicon_from_slice;
/// use ladder_solver::search::generate;
///
/// let lexicon = lexicon_from_slice(&["hot", "cot", "hog", "cog"]);
/// let ladders = generate("hot", "cog", &lexicon);
///
/// assert_eq!(ladders.len(), 2);
/// assert_eq!(ladders[0].words(), &["hot", "cot", "cog"]);
/// assert_eq!(ladders[1].words(), &["hot", "hog", "cog"]);
/// ```
#[must_use]
pub fn generate(from: &str, to: &str, lexicon: &FxHashSet<String>) -> Vec<Ladder> {
    if !lexicon.contains(to) {
        return Vec::new();
    }
    if from == to {
        return vec![Ladder::new(vec![from.to_owned()])];
    }
    if from.len() != to.len() {
        // Substitution preserves length, so no ladder can connect them.
        return Vec::new();
    }

    // The search owns its dictionary; words are removed once consumed into
    // a frontier so later rounds cannot revisit them on a longer path.
    let mut dictionary = lexicon.clone();
    dictionary.remove(from);
    dictionary.remove(to);

    let mut transitions: FxHashMap<String, Vec<String>> = FxHashMap::default();
    let mut end_found = false;
    let mut reversed = false;

    let mut begin_set: FxHashSet<String> = FxHashSet::default();
    begin_set.insert(from.to_owned());
    let mut end_set: FxHashSet<String> = FxHashSet::default();
    end_set.insert(to.to_owned());

    while !begin_set.is_empty() && !end_set.is_empty() && !end_found {
        // Always expand the smaller frontier; the flag keeps transition
        // edges oriented start -> end no matter which side is growing.
        if begin_set.len() > end_set.len() {
            std::mem::swap(&mut begin_set, &mut end_set);
            reversed = !reversed;
        }

        let mut next_level: FxHashSet<String> = FxHashSet::default();
        for word in &begin_set {
            expand(
                word,
                &end_set,
                &dictionary,
                &mut next_level,
                &mut transitions,
                &mut end_found,
                reversed,
            );
        }

        for word in &next_level {
            dictionary.remove(word);
        }

        begin_set = next_level;
    }

    let mut results = if end_found {
        collect_ladders(from, to, &transitions)
    } else {
        Vec::new()
    };

    results.sort();
    results
}

/// Expand one frontier word into all valid one-letter substitutions
///
/// A candidate found in the opposite frontier connects the two searches and
/// sets `end_found`. Other candidates still present in the dictionary seed
/// the next BFS level; once a connection exists the next level stops
/// growing, since any word reached later would lie on a longer path.
fn expand(
    word: &str,
    end_set: &FxHashSet<String>,
    dictionary: &FxHashSet<String>,
    next_level: &mut FxHashSet<String>,
    transitions: &mut FxHashMap<String, Vec<String>>,
    end_found: &mut bool,
    reversed: bool,
) {
    // Substitution ranges over ASCII letters only; any other word in the
    // lexicon simply has no neighbors.
    if !word.is_ascii() {
        return;
    }

    let mut candidate = word.as_bytes().to_vec();
    for i in 0..candidate.len() {
        let original = candidate[i];
        for letter in b'a'..=b'z' {
            if letter == original {
                continue;
            }
            candidate[i] = letter;
            let next = std::str::from_utf8(&candidate)
                .expect("ASCII substitution keeps the candidate valid UTF-8");
            if end_set.contains(next) {
                *end_found = true;
                record_edge(transitions, word, next, reversed);
            }
            if !*end_found && dictionary.contains(next) {
                next_level.insert(next.to_owned());
                record_edge(transitions, word, next, reversed);
            }
        }
        candidate[i] = original;
    }
}

/// Record a transition edge in the original start -> end orientation
fn record_edge(
    transitions: &mut FxHashMap<String, Vec<String>>,
    word: &str,
    next: &str,
    reversed: bool,
) {
    if reversed {
        transitions
            .entry(next.to_owned())
            .or_default()
            .push(word.to_owned());
    } else {
        transitions
            .entry(word.to_owned())
            .or_default()
            .push(next.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::loader::lexicon_from_slice;

    fn words(ladder: &Ladder) -> Vec<&str> {
        ladder.words().iter().map(String::as_str).collect()
    }

    #[test]
    fn generate_two_letters() {
        let lexicon = lexicon_from_slice(&["at", "it"]);
        let ladders = generate("at", "it", &lexicon);

        assert_eq!(ladders.len(), 1);
        assert_eq!(words(&ladders[0]), ["at", "it"]);
    }

    #[test]
    fn generate_three_letters_two_ladders() {
        let lexicon = lexicon_from_slice(&["hot", "cot", "hog", "cog"]);
        let ladders = generate("hot", "cog", &lexicon);

        assert_eq!(ladders.len(), 2);
        assert_eq!(words(&ladders[0]), ["hot", "cot", "cog"]);
        assert_eq!(words(&ladders[1]), ["hot", "hog", "cog"]);
    }

    #[test]
    fn generate_six_letters_single_ladder() {
        let lexicon = lexicon_from_slice(&["planet", "planes", "plates", "slates", "states"]);
        let ladders = generate("planet", "states", &lexicon);

        assert_eq!(ladders.len(), 1);
        assert_eq!(
            words(&ladders[0]),
            ["planet", "planes", "plates", "slates", "states"]
        );
    }

    #[test]
    fn generate_no_path_exists() {
        let lexicon = lexicon_from_slice(&["airplane", "abstract", "betrayal", "tricycle"]);
        let ladders = generate("airplane", "tricycle", &lexicon);

        assert!(ladders.is_empty());
    }

    #[test]
    fn generate_end_word_not_in_lexicon() {
        let lexicon = lexicon_from_slice(&["hot", "cot"]);
        assert!(generate("hot", "cog", &lexicon).is_empty());
    }

    #[test]
    fn generate_empty_endpoints() {
        let lexicon = lexicon_from_slice(&["at", "it"]);
        assert!(generate("", "", &lexicon).is_empty());
    }

    #[test]
    fn generate_same_word_in_lexicon() {
        let lexicon = lexicon_from_slice(&["hot", "cot"]);
        let ladders = generate("hot", "hot", &lexicon);

        assert_eq!(ladders.len(), 1);
        assert_eq!(words(&ladders[0]), ["hot"]);
    }

    #[test]
    fn generate_same_word_not_in_lexicon() {
        let lexicon = lexicon_from_slice(&["cot"]);
        assert!(generate("hot", "hot", &lexicon).is_empty());
    }

    #[test]
    fn generate_length_mismatch() {
        let lexicon = lexicon_from_slice(&["hot", "cot", "cogs"]);
        assert!(generate("hot", "cogs", &lexicon).is_empty());
    }

    #[test]
    fn generate_four_letters_many_ladders() {
        let lexicon = lexicon_from_slice(&[
            "work", "fork", "form", "foam", "flam", "flay", "play", "pork", "perk", "peak",
            "pean", "plan", "worm", "peat", "plat", "porn", "pirn", "pert", "pian", "port",
            "word", "wood", "pood", "plod", "ploy", "wort", "bort", "boat", "blat", "wert",
            "worn",
        ]);
        let ladders = generate("work", "play", &lexicon);

        let expected: Vec<Vec<&str>> = vec![
            vec!["work", "fork", "form", "foam", "flam", "flay", "play"],
            vec!["work", "pork", "perk", "peak", "pean", "plan", "play"],
            vec!["work", "pork", "perk", "peak", "peat", "plat", "play"],
            vec!["work", "pork", "perk", "pert", "peat", "plat", "play"],
            vec!["work", "pork", "porn", "pirn", "pian", "plan", "play"],
            vec!["work", "pork", "port", "pert", "peat", "plat", "play"],
            vec!["work", "word", "wood", "pood", "plod", "ploy", "play"],
            vec!["work", "worm", "form", "foam", "flam", "flay", "play"],
            vec!["work", "worn", "porn", "pirn", "pian", "plan", "play"],
            vec!["work", "wort", "bort", "boat", "blat", "plat", "play"],
            vec!["work", "wort", "port", "pert", "peat", "plat", "play"],
            vec!["work", "wort", "wert", "pert", "peat", "plat", "play"],
        ];

        let actual: Vec<Vec<&str>> = ladders.iter().map(words).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn generate_five_letters_two_ladders() {
        let lexicon = lexicon_from_slice(&[
            "awake", "aware", "sware", "share", "sharn", "shawn", "shewn", "sheen", "shire",
            "shirr", "shier", "sheer", "sheep", "sleep",
        ]);
        let ladders = generate("awake", "sleep", &lexicon);

        let expected: Vec<Vec<&str>> = vec![
            vec![
                "awake", "aware", "sware", "share", "sharn", "shawn", "shewn", "sheen", "sheep",
                "sleep",
            ],
            vec![
                "awake", "aware", "sware", "share", "shire", "shirr", "shier", "sheer", "sheep",
                "sleep",
            ],
        ];

        let actual: Vec<Vec<&str>> = ladders.iter().map(words).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn generate_all_ladders_same_length() {
        let lexicon = lexicon_from_slice(&[
            "work", "fork", "form", "foam", "flam", "flay", "play", "pork", "perk", "peak",
            "pean", "plan", "worm", "peat", "plat", "porn", "pirn", "pert", "pian", "port",
            "word", "wood", "pood", "plod", "ploy", "wort", "bort", "boat", "blat", "wert",
            "worn",
        ]);
        let ladders = generate("work", "play", &lexicon);

        assert!(!ladders.is_empty());
        let len = ladders[0].len();
        assert!(ladders.iter().all(|l| l.len() == len));
    }

    #[test]
    fn generate_results_are_sorted() {
        let lexicon = lexicon_from_slice(&["hot", "cot", "hog", "cog", "dot", "dog", "lot", "log"]);
        let ladders = generate("hot", "cog", &lexicon);

        let mut sorted = ladders.clone();
        sorted.sort();
        assert_eq!(ladders, sorted);
    }

    #[test]
    fn generate_only_lexicon_words_appear() {
        let lexicon =
            lexicon_from_slice(&["hit", "hot", "dot", "dog", "cog", "lot", "log"]);
        let ladders = generate("hit", "cog", &lexicon);

        assert!(!ladders.is_empty());
        for ladder in &ladders {
            for word in ladder.words() {
                assert!(
                    lexicon.contains(word) || word == "hit" || word == "cog",
                    "'{word}' is not a lexicon word"
                );
            }
        }
    }

    #[test]
    fn generate_consecutive_words_differ_by_one_letter() {
        let lexicon =
            lexicon_from_slice(&["hit", "hot", "dot", "dog", "cog", "lot", "log"]);
        let ladders = generate("hit", "cog", &lexicon);

        for ladder in &ladders {
            for pair in ladder.words().windows(2) {
                let diff = pair[0]
                    .bytes()
                    .zip(pair[1].bytes())
                    .filter(|(a, b)| a != b)
                    .count();
                assert_eq!(diff, 1, "'{}' -> '{}' is not one substitution", pair[0], pair[1]);
            }
        }
    }
}
