//! All-shortest-path enumeration over the transition map
//!
//! The BFS only ever records edges that lie on some shortest path, so the
//! transition map forms a DAG from the start word toward the end word and
//! every root-to-end branch is a valid minimum-length ladder.

use rustc_hash::FxHashMap;

use crate::core::Ladder;

/// Enumerate every ladder encoded in the transition map
pub(super) fn collect_ladders(
    from: &str,
    to: &str,
    transitions: &FxHashMap<String, Vec<String>>,
) -> Vec<Ladder> {
    let mut results = Vec::new();
    let mut path = vec![from.to_owned()];
    walk(from, to, transitions, &mut path, &mut results);
    results
}

/// Depth-first walk, extending `path` along each outgoing edge
///
/// Recursion depth is bounded by the ladder length, which is at most the
/// number of words of that length in the lexicon.
fn walk(
    current: &str,
    to: &str,
    transitions: &FxHashMap<String, Vec<String>>,
    path: &mut Vec<String>,
    results: &mut Vec<Ladder>,
) {
    if current == to {
        results.push(Ladder::new(path.clone()));
        return;
    }

    let Some(next_words) = transitions.get(current) else {
        return;
    };

    for word in next_words {
        path.push(word.clone());
        walk(word, to, transitions, path, results);
        path.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(edges: &[(&str, &[&str])]) -> FxHashMap<String, Vec<String>> {
        edges
            .iter()
            .map(|&(k, vs)| (k.to_owned(), vs.iter().map(|&v| v.to_owned()).collect()))
            .collect()
    }

    #[test]
    fn collect_single_path() {
        let transitions = map(&[("at", &["it"])]);
        let ladders = collect_ladders("at", "it", &transitions);

        assert_eq!(ladders.len(), 1);
        assert_eq!(ladders[0].words(), &["at", "it"]);
    }

    #[test]
    fn collect_branching_paths() {
        let transitions = map(&[("hot", &["cot", "hog"]), ("cot", &["cog"]), ("hog", &["cog"])]);
        let mut ladders = collect_ladders("hot", "cog", &transitions);
        ladders.sort();

        assert_eq!(ladders.len(), 2);
        assert_eq!(ladders[0].words(), &["hot", "cot", "cog"]);
        assert_eq!(ladders[1].words(), &["hot", "hog", "cog"]);
    }

    #[test]
    fn collect_dead_end_branch_yields_nothing() {
        // "dot" has no outgoing edges, so only the "cot" branch completes.
        let transitions = map(&[("hot", &["cot", "dot"]), ("cot", &["cog"])]);
        let ladders = collect_ladders("hot", "cog", &transitions);

        assert_eq!(ladders.len(), 1);
        assert_eq!(ladders[0].words(), &["hot", "cot", "cog"]);
    }

    #[test]
    fn collect_empty_map() {
        let transitions = FxHashMap::default();
        assert!(collect_ladders("hot", "cog", &transitions).is_empty());
    }
}
