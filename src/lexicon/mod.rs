//! Word lexicons
//!
//! Provides the file loader and an embedded demo word list compiled into the
//! binary for zero-setup use.

mod embedded;
pub mod loader;

pub use embedded::{WORD_COUNT, WORDS};
