//! WASM bindings for the trieviz-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.
//! Results are returned as JSON strings; errors are reported inside the JSON
//! and never thrown.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::layout::build_layout;
use crate::output::{DiagramOutput, SearchOutput};
use crate::session::{Visualizer, VisualizerConfig};
use crate::trie::Trie;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    pub fn console_log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

// Off the browser there is no console to import; route through tracing.
#[cfg(not(target_arch = "wasm32"))]
pub fn console_log(s: &str) {
    tracing::debug!("{}", s);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn console_error(s: &str) {
    tracing::error!("{}", s);
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        console_error(&format!("Error serializing output: {:?}", e));
        "{\"error\": {\"message\": \"Serialization error\"}}".to_string()
    })
}

/// A trie plus its current diagram, kept alive between calls from React.
#[wasm_bindgen]
pub struct TrieVisualizer {
    inner: Visualizer,
}

#[wasm_bindgen]
impl TrieVisualizer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> TrieVisualizer {
        TrieVisualizer {
            inner: Visualizer::default(),
        }
    }

    /// Create a visualizer from a JSON config. Falls back to defaults if the
    /// config does not parse.
    pub fn with_config(config_json: &str) -> TrieVisualizer {
        let config = match VisualizerConfig::from_json(config_json) {
            Ok(config) => config,
            Err(e) => {
                console_error(&format!("Error reading config: {}", e));
                VisualizerConfig::default()
            }
        };
        TrieVisualizer {
            inner: Visualizer::new(config),
        }
    }

    /// Insert a word and return the rebuilt diagram.
    pub fn insert_word(&mut self, word: &str) -> String {
        match self.inner.insert(word) {
            Ok(layout) => to_json(&DiagramOutput::from_layout(layout)),
            Err(e) => {
                console_error(&format!("Error inserting word: {}", e));
                to_json(&DiagramOutput::with_error(self.inner.layout(), &e))
            }
        }
    }

    /// The current diagram, unchanged.
    pub fn diagram(&self) -> String {
        to_json(&DiagramOutput::from_layout(self.inner.layout()))
    }

    /// Search the current diagram and return the highlight sequence.
    pub fn search_word(&self, query: &str) -> String {
        let trace = self.inner.search(query);
        console_log(&format!("Search '{}': {}", query, trace.outcome.message()));
        to_json(&SearchOutput::from_trace(
            &trace,
            self.inner.config().highlight_delay_ms,
        ))
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }
}

impl Default for TrieVisualizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a diagram from newline-separated words, without keeping any state.
#[wasm_bindgen]
pub fn compile_words(input: &str) -> String {
    let mut trie = Trie::new();
    for word in input.lines().map(str::trim).filter(|w| !w.is_empty()) {
        trie.insert(word);
    }
    let layout = build_layout(trie.root(), &VisualizerConfig::default().layout);
    to_json(&DiagramOutput::from_layout(&layout))
}
