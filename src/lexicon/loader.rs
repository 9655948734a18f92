//! Lexicon loading utilities
//!
//! Provides functions to load lexicons from files or from embedded constants.

use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load a lexicon from a whitespace-delimited text file
///
/// Every distinct token becomes one word; duplicates collapse into a single
/// entry. No length or character-set validation is applied here, the search
/// treats unusable words as having no neighbors. An empty file yields an
/// empty lexicon.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use ladder_solver::lexicon::loader::read_lexicon;
///
/// let lexicon = read_lexicon("data/words.txt").unwrap();
/// println!("Loaded {} words", lexicon.len());
/// ```
pub fn read_lexicon<P: AsRef<Path>>(path: P) -> io::Result<FxHashSet<String>> {
    let content = fs::read_to_string(path)?;

    Ok(content
        .split_whitespace()
        .map(str::to_owned)
        .collect())
}

/// Build a lexicon from an embedded string slice
///
/// # Examples
/// ```
/// use ladder_solver::lexicon::loader::lexicon_from_slice;
/// use ladder_solver::lexicon::WORDS;
///
/// let lexicon = lexicon_from_slice(WORDS);
/// assert_eq!(lexicon.len(), WORDS.len());
/// ```
#[must_use]
pub fn lexicon_from_slice(slice: &[&str]) -> FxHashSet<String> {
    slice.iter().map(|&s| s.to_owned()).collect()
}
