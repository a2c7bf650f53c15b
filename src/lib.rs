//! Core of the trie visualizer.
//!
//! Words go into a [`trie::Trie`]; after every insert the tree is projected
//! into a positioned node/edge list by [`layout::build_layout`] and handed to
//! a React Flow canvas as JSON (see [`output`]).

pub mod error;
pub mod layout;
pub mod output;
pub mod search;
pub mod session;
pub mod trie;
mod wasm;

pub use error::{TrieError, TrieResult};
pub use layout::{LayoutConfig, LayoutEdge, LayoutNode, LayoutNodeId, TrieLayout, build_layout};
pub use search::{SearchOutcome, SearchTrace, search_layout};
pub use session::{Visualizer, VisualizerConfig};
pub use trie::{Trie, TrieNode};
pub use wasm::{TrieVisualizer, compile_words};
