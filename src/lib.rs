//! Ladder Solver
//!
//! Finds every shortest word ladder between two words: each step substitutes
//! exactly one letter and every intermediate word must come from a lexicon.
//! The search runs a bidirectional BFS that only records shortest-path edges,
//! then backtracks over them to enumerate all minimum-length ladders.
//!
//! # Quick Start
//!
//! ```rust
//! use ladder_solver::lexicon::loader::lexicon_from_slice;
//! use ladder_solver::search::generate;
//!
//! let lexicon = lexicon_from_slice(&["hot", "cot", "hog", "cog"]);
//! let ladders = generate("hot", "cog", &lexicon);
//!
//! assert_eq!(ladders.len(), 2);
//! assert_eq!(format!("{}", ladders[0]), "hot -> cot -> cog");
//! ```

// Core domain types
pub mod core;

// The bidirectional BFS search
pub mod search;

// Lexicon loading and embedded word list
pub mod lexicon;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
