//! Prefix search over a built layout.
//!
//! The walk starts at the root node and follows edges whose target label is
//! the next query character. It never looks at the trie itself, only at the
//! node/edge lists a renderer already has. The result carries a finite list of
//! highlight events the renderer can replay on a timer.

use serde::Serialize;
use tracing::debug;

use crate::layout::{LayoutNodeId, TrieLayout};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// Every character matched and the last node ends a word.
    Found,
    /// Every character matched but the last node is only a prefix.
    PrefixOnly,
    /// `missing` had no matching edge after `matched` characters.
    NotFound { matched: usize, missing: char },
}

impl SearchOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SearchOutcome::Found => "Word found!",
            SearchOutcome::PrefixOnly => "Only a prefix found, not a complete word",
            SearchOutcome::NotFound { .. } => "Character not found",
        }
    }
}

/// Turn a node's highlight on or off.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightStep {
    pub node: LayoutNodeId,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchTrace {
    pub query: String,
    pub outcome: SearchOutcome,
    /// Nodes visited, root first.
    pub path: Vec<LayoutNodeId>,
    pub steps: Vec<HighlightStep>,
}

fn flash(steps: &mut Vec<HighlightStep>, node: LayoutNodeId) {
    steps.push(HighlightStep {
        node,
        highlighted: true,
    });
    steps.push(HighlightStep {
        node,
        highlighted: false,
    });
}

/// Walk `query` through `layout` from its root.
pub fn search_layout(layout: &TrieLayout, query: &str) -> SearchTrace {
    let mut path = Vec::new();
    let mut steps = Vec::new();

    let Some(root) = layout.root() else {
        let outcome = match query.chars().next() {
            Some(missing) => SearchOutcome::NotFound {
                matched: 0,
                missing,
            },
            None => SearchOutcome::PrefixOnly,
        };
        return SearchTrace {
            query: query.to_string(),
            outcome,
            path,
            steps,
        };
    };

    let mut current = root.id;
    path.push(current);

    for (matched, letter) in query.chars().enumerate() {
        let mut buf = [0u8; 4];
        let label: &str = letter.encode_utf8(&mut buf);
        let next = layout
            .children_of(current)
            .find(|child| child.label == label)
            .map(|child| child.id);

        match next {
            Some(id) => {
                flash(&mut steps, id);
                path.push(id);
                current = id;
            }
            None => {
                flash(&mut steps, current);
                debug!(query, matched, missing = %letter, "search stopped");
                return SearchTrace {
                    query: query.to_string(),
                    outcome: SearchOutcome::NotFound {
                        matched,
                        missing: letter,
                    },
                    path,
                    steps,
                };
            }
        }
    }

    let is_end = layout.node(current).is_some_and(|n| n.is_end);
    let outcome = if is_end {
        SearchOutcome::Found
    } else {
        SearchOutcome::PrefixOnly
    };
    debug!(query, ?outcome, "search finished");

    SearchTrace {
        query: query.to_string(),
        outcome,
        path,
        steps,
    }
}

/// Apply one highlight event to the layout. Returns false if the node is unknown.
pub fn apply_step(layout: &mut TrieLayout, step: HighlightStep) -> bool {
    match layout.node_mut(step.node) {
        Some(node) => {
            node.highlighted = step.highlighted;
            true
        }
        None => false,
    }
}
