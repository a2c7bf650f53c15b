//! Output types for React Flow consumption.
//!
//! These structs are serialized to JSON and handed to the frontend, which
//! passes `nodes` and `edges` straight to its `<ReactFlow>` canvas.

use serde::Serialize;

use crate::error::TrieError;
use crate::layout::{LayoutEdge, LayoutNode, PointI, TrieLayout};
use crate::search::{SearchOutcome, SearchTrace};

const TERMINAL_BACKGROUND: &str = "#34d399";
const INNER_BACKGROUND: &str = "#93c5fd";
const HIGHLIGHT_BACKGROUND: &str = "#fef08a";
const DEFAULT_BORDER: &str = "1px solid #333";
const HIGHLIGHT_BORDER: &str = "3px solid yellow";

/// Display data carried on each node.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    pub label: String,
    pub highlighted: bool,
    pub is_end: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    pub background: &'static str,
    pub border: &'static str,
    pub border_radius: u32,
    pub padding: u32,
}

impl NodeStyle {
    pub fn for_node(is_end: bool, highlighted: bool) -> Self {
        let (background, border) = if highlighted {
            (HIGHLIGHT_BACKGROUND, HIGHLIGHT_BORDER)
        } else if is_end {
            (TERMINAL_BACKGROUND, DEFAULT_BORDER)
        } else {
            (INNER_BACKGROUND, DEFAULT_BORDER)
        };
        Self {
            background,
            border,
            border_radius: 50,
            padding: 10,
        }
    }
}

/// A rendered node ready for React Flow to display
#[derive(Debug, Clone, Serialize)]
pub struct NodeOutput {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub position: PointI,
    pub data: NodeData,
    pub style: NodeStyle,
}

impl From<&LayoutNode> for NodeOutput {
    fn from(n: &LayoutNode) -> Self {
        NodeOutput {
            id: n.id.to_string(),
            kind: "default",
            position: n.position,
            data: NodeData {
                label: n.label.clone(),
                highlighted: n.highlighted,
                is_end: n.is_end,
            },
            style: NodeStyle::for_node(n.is_end, n.highlighted),
        }
    }
}

/// An edge between two nodes
#[derive(Debug, Clone, Serialize)]
pub struct EdgeOutput {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub source: String,
    pub target: String,
}

impl From<&LayoutEdge> for EdgeOutput {
    fn from(e: &LayoutEdge) -> Self {
        let source = e.from.to_string();
        let target = e.to.to_string();
        EdgeOutput {
            id: format!("{}-{}", source, target),
            kind: "default",
            source,
            target,
        }
    }
}

/// Error information shown by the frontend
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub message: String,
}

impl From<&TrieError> for ErrorInfo {
    fn from(e: &TrieError) -> Self {
        ErrorInfo {
            message: e.to_string(),
        }
    }
}

/// The combined diagram sent to React
#[derive(Debug, Clone, Serialize)]
pub struct DiagramOutput {
    pub nodes: Vec<NodeOutput>,
    pub edges: Vec<EdgeOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl DiagramOutput {
    pub fn from_layout(layout: &TrieLayout) -> Self {
        DiagramOutput {
            nodes: layout.nodes.iter().map(NodeOutput::from).collect(),
            edges: layout.edges.iter().map(EdgeOutput::from).collect(),
            error: None,
        }
    }

    /// The current diagram plus an error to report alongside it.
    pub fn with_error(layout: &TrieLayout, error: &TrieError) -> Self {
        DiagramOutput {
            error: Some(ErrorInfo::from(error)),
            ..Self::from_layout(layout)
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HighlightOutput {
    pub id: String,
    pub highlighted: bool,
}

/// Search result plus the highlight events to replay
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutput {
    pub query: String,
    pub outcome: SearchOutcome,
    pub message: &'static str,
    pub path: Vec<String>,
    pub steps: Vec<HighlightOutput>,
    /// Pause between steps, in milliseconds.
    pub delay_ms: u32,
}

impl SearchOutput {
    pub fn from_trace(trace: &SearchTrace, delay_ms: u32) -> Self {
        SearchOutput {
            query: trace.query.clone(),
            outcome: trace.outcome,
            message: trace.outcome.message(),
            path: trace.path.iter().map(|id| id.to_string()).collect(),
            steps: trace
                .steps
                .iter()
                .map(|s| HighlightOutput {
                    id: s.node.to_string(),
                    highlighted: s.highlighted,
                })
                .collect(),
            delay_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LayoutConfig, build_layout};
    use crate::search::search_layout;
    use crate::trie::Trie;
    use serde_json::{Value, json};

    fn layout_of(words: &[&str]) -> TrieLayout {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word);
        }
        build_layout(trie.root(), &LayoutConfig::default())
    }

    #[test]
    fn test_diagram_json_shape() {
        let output = DiagramOutput::from_layout(&layout_of(&["go"]));
        let value: Value = serde_json::to_value(&output).unwrap();

        assert_eq!(
            value["nodes"][2],
            json!({
                "id": "node-2",
                "type": "default",
                "position": { "x": 0, "y": 240 },
                "data": { "label": "o", "highlighted": false, "isEnd": true },
                "style": {
                    "background": "#34d399",
                    "border": "1px solid #333",
                    "borderRadius": 50,
                    "padding": 10
                }
            })
        );
        assert_eq!(
            value["edges"][0],
            json!({
                "id": "node-0-node-1",
                "type": "default",
                "source": "node-0",
                "target": "node-1"
            })
        );
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_inner_and_highlighted_styles() {
        assert_eq!(NodeStyle::for_node(false, false).background, "#93c5fd");
        let lit = NodeStyle::for_node(true, true);
        assert_eq!(lit.background, "#fef08a");
        assert_eq!(lit.border, "3px solid yellow");
    }

    #[test]
    fn test_error_is_serialized() {
        let layout = layout_of(&[]);
        let err = TrieError::WordTooLong { len: 10, max: 4 };
        let value = serde_json::to_value(DiagramOutput::with_error(&layout, &err)).unwrap();
        assert_eq!(value["nodes"].as_array().unwrap().len(), 1);
        assert_eq!(
            value["error"]["message"],
            "Word is too long: 10 characters (limit is 4)"
        );
    }

    #[test]
    fn test_search_output() {
        let layout = layout_of(&["go"]);
        let output = SearchOutput::from_trace(&search_layout(&layout, "gx"), 1000);
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(
            value["outcome"],
            json!({ "kind": "not_found", "matched": 1, "missing": "x" })
        );
        assert_eq!(value["message"], "Character not found");
        assert_eq!(value["delayMs"], 1000);
        assert_eq!(value["path"], json!(["node-0", "node-1"]));
        assert_eq!(value["steps"][0], json!({ "id": "node-1", "highlighted": true }));
    }
}
