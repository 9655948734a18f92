//! Shortest-ladder search
//!
//! Bidirectional BFS plus backtracking reconstruction of every shortest path.

mod backtrack;
mod engine;

pub use engine::generate;
