// Layout builder: Trie -> positioned node/edge lists.
//
// Goals:
// - Deterministic: same tree, same output (ids, labels, coordinates)
// - Pure: reads the trie, never mutates it, keeps no state between builds
// - Iterative: explicit stack, so deep tries cannot exhaust the call stack
//
// Placement:
// - y = depth * y_spacing
// - x = column * x_spacing, where `column` is one counter shared by the whole
//   traversal. It advances after each non-root subtree is finished, so a first
//   child sits directly below its parent and later siblings move right.
//
// Output:
// - TrieLayout with nodes in pre-order (id == index) and one edge per non-root node.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::trie::TrieNode;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PointI {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal distance between adjacent columns.
    pub x_spacing: i32,
    /// Vertical distance between tree levels.
    pub y_spacing: i32,
    /// Label shown on the root node.
    pub root_label: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            x_spacing: 50,
            y_spacing: 120,
            root_label: "root".to_string(),
        }
    }
}

/// Id of a node within one layout build. Equal to its pre-order index.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct LayoutNodeId(pub usize);

impl fmt::Display for LayoutNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutNode {
    pub id: LayoutNodeId,
    /// The edge character, or the configured root label.
    pub label: String,
    pub position: PointI,
    pub depth: usize,
    pub is_end: bool,
    pub highlighted: bool,
}

/// Parent -> child link.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutEdge {
    pub from: LayoutNodeId,
    pub to: LayoutNodeId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrieLayout {
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<LayoutEdge>,
}

impl TrieLayout {
    pub fn root(&self) -> Option<&LayoutNode> {
        self.nodes.first()
    }

    pub fn node(&self, id: LayoutNodeId) -> Option<&LayoutNode> {
        self.nodes.get(id.0).filter(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: LayoutNodeId) -> Option<&mut LayoutNode> {
        self.nodes.get_mut(id.0).filter(|n| n.id == id)
    }

    /// Children of `id`, in the order their edges were emitted.
    pub fn children_of(&self, id: LayoutNodeId) -> impl Iterator<Item = &LayoutNode> + '_ {
        self.edges
            .iter()
            .filter(move |e| e.from == id)
            .filter_map(move |e| self.node(e.to))
    }

    pub fn parent_of(&self, id: LayoutNodeId) -> Option<LayoutNodeId> {
        self.edges.iter().find(|e| e.to == id).map(|e| e.from)
    }
}

struct Frame<'t> {
    node: &'t TrieNode,
    id: LayoutNodeId,
    depth: usize,
    next_child: usize,
}

struct Placer<'c> {
    cfg: &'c LayoutConfig,
    nodes: Vec<LayoutNode>,
    edges: Vec<LayoutEdge>,
    column: usize,
}

impl Placer<'_> {
    fn place(
        &mut self,
        node: &TrieNode,
        label: String,
        depth: usize,
        parent: Option<LayoutNodeId>,
    ) -> LayoutNodeId {
        let id = LayoutNodeId(self.nodes.len());
        self.nodes.push(LayoutNode {
            id,
            label,
            position: PointI {
                x: scale(self.column, self.cfg.x_spacing),
                y: scale(depth, self.cfg.y_spacing),
            },
            depth,
            is_end: node.is_end(),
            highlighted: false,
        });
        if let Some(from) = parent {
            self.edges.push(LayoutEdge { from, to: id });
        }
        id
    }
}

fn scale(steps: usize, spacing: i32) -> i32 {
    i32::try_from(steps).unwrap_or(i32::MAX).saturating_mul(spacing)
}

/// Build a fresh layout for the tree under `root`.
pub fn build_layout(root: &TrieNode, cfg: &LayoutConfig) -> TrieLayout {
    let mut placer = Placer {
        cfg,
        nodes: Vec::new(),
        edges: Vec::new(),
        column: 0,
    };

    let root_id = placer.place(root, cfg.root_label.clone(), 0, None);
    let mut stack = vec![Frame {
        node: root,
        id: root_id,
        depth: 0,
        next_child: 0,
    }];

    while let Some(top) = stack.last_mut() {
        let node = top.node;
        match node.children().get_index(top.next_child) {
            Some((letter, child)) => {
                top.next_child += 1;
                let depth = top.depth + 1;
                let parent = top.id;
                let id = placer.place(child, letter.to_string(), depth, Some(parent));
                stack.push(Frame {
                    node: child,
                    id,
                    depth,
                    next_child: 0,
                });
            }
            None => {
                stack.pop();
                // subtree of a non-root node is done
                if !stack.is_empty() {
                    placer.column += 1;
                }
            }
        }
    }

    debug!(
        nodes = placer.nodes.len(),
        edges = placer.edges.len(),
        "built trie layout"
    );

    TrieLayout {
        nodes: placer.nodes,
        edges: placer.edges,
    }
}
