//! Insert-then-rebuild session.
//!
//! `Visualizer` owns the trie and the most recent layout. Every accepted
//! insert rebuilds the whole layout from the root; searches only read it.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{TrieError, TrieResult};
use crate::layout::{LayoutConfig, TrieLayout, build_layout};
use crate::search::{SearchTrace, search_layout};
use crate::trie::Trie;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    pub layout: LayoutConfig,
    /// Longest accepted word, in characters. `None` disables the check.
    pub max_word_len: Option<usize>,
    /// Pause the renderer should leave between highlight steps.
    pub highlight_delay_ms: u32,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            max_word_len: Some(256),
            highlight_delay_ms: 1000,
        }
    }
}

impl VisualizerConfig {
    /// Parse a (possibly partial) JSON config; missing fields take defaults.
    pub fn from_json(input: &str) -> TrieResult<Self> {
        let cfg: VisualizerConfig = serde_json::from_str(input)?;
        if cfg.layout.x_spacing < 0 || cfg.layout.y_spacing < 0 {
            return Err(TrieError::InvalidConfig(
                "spacing must not be negative".to_string(),
            ));
        }
        Ok(cfg)
    }
}

#[derive(Debug)]
pub struct Visualizer {
    trie: Trie,
    config: VisualizerConfig,
    layout: TrieLayout,
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new(VisualizerConfig::default())
    }
}

impl Visualizer {
    pub fn new(config: VisualizerConfig) -> Self {
        let trie = Trie::new();
        let layout = build_layout(trie.root(), &config.layout);
        Self {
            trie,
            config,
            layout,
        }
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// The layout from the last rebuild.
    pub fn layout(&self) -> &TrieLayout {
        &self.layout
    }

    /// Insert `word` and rebuild the layout.
    ///
    /// An empty word changes nothing and returns the current layout.
    #[instrument(level = "debug", skip(self))]
    pub fn insert(&mut self, word: &str) -> TrieResult<&TrieLayout> {
        if word.is_empty() {
            return Ok(&self.layout);
        }
        if let Some(max) = self.config.max_word_len {
            let len = word.chars().count();
            if len > max {
                return Err(TrieError::WordTooLong { len, max });
            }
        }

        self.trie.insert(word);
        self.layout = build_layout(self.trie.root(), &self.config.layout);
        debug!(nodes = self.layout.nodes.len(), "layout rebuilt");
        Ok(&self.layout)
    }

    /// Walk `query` through the current layout.
    pub fn search(&self, query: &str) -> SearchTrace {
        search_layout(&self.layout, query)
    }

    /// Forget every word and go back to a root-only diagram.
    pub fn reset(&mut self) {
        self.trie.clear();
        self.layout = build_layout(self.trie.root(), &self.config.layout);
        debug!("visualizer reset");
    }
}
