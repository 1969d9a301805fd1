//! word-graph-core: In-memory word-adjacency graph engine.
//!
//! Builds a weighted directed graph from free-form text (edge `a → b`
//! weighted by how often `b` immediately follows `a`) and answers queries
//! over it: bridge words, bridge-word text rewriting, weighted shortest
//! paths (single pair or single source), and interactive random walks.
//!
//! The crate performs no I/O. Console prompts, file loading and rendering
//! live in the `word-graph-cli` crate; randomness and walk decisions are
//! injected by the caller.

mod bridge;
mod error;
mod graph;
mod path;
mod rewrite;
mod tokenize;
mod walk;

pub use bridge::{bridge_message, find_bridge_words, query_bridge_words, BridgeWords};
pub use error::LookupError;
pub use graph::{Edge, EdgeId, EdgeView, VertexId, WordGraph};
pub use path::{
    calc_shortest_path, shortest_path, shortest_paths_from, solve_all, solve_pair, AllPaths,
    PairPath, Path, PathQuery, ShortestPaths,
};
pub use rewrite::{generate_new_text, Rewrite};
pub use tokenize::{tokenize, tokenize_lines};
pub use walk::{
    random_walk, AutoContinue, RandomWalker, StopReason, TraversalRecord, WalkDecision,
    WalkOutcome, WalkPrompt, WalkState,
};
