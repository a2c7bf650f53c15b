// Ordered child container for trie nodes.
//
// Edges are kept in the order their label was first inserted. Layout walks
// children in this order, so it must never change once an edge exists.

use super::TrieNode;

/// The outgoing edges of one trie node, in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Children {
    edges: Vec<(char, TrieNode)>,
}

impl Children {
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Look up the child reached through `letter`.
    pub fn get(&self, letter: char) -> Option<&TrieNode> {
        self.edges
            .iter()
            .find(|(c, _)| *c == letter)
            .map(|(_, node)| node)
    }

    /// Return the child reached through `letter`, appending a fresh node
    /// if the edge does not exist yet. The flag is true when a node was created.
    pub(crate) fn get_or_insert(&mut self, letter: char) -> (&mut TrieNode, bool) {
        match self.edges.iter().position(|(c, _)| *c == letter) {
            Some(pos) => (&mut self.edges[pos].1, false),
            None => {
                self.edges.push((letter, TrieNode::new()));
                let last = self.edges.len() - 1;
                (&mut self.edges[last].1, true)
            }
        }
    }

    pub(crate) fn from_edges(edges: Vec<(char, TrieNode)>) -> Self {
        Self { edges }
    }

    pub(crate) fn into_nodes(self) -> Vec<TrieNode> {
        self.edges.into_iter().map(|(_, node)| node).collect()
    }

    /// Iterate `(letter, child)` pairs in first-insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (char, &TrieNode)> + '_ {
        self.edges.iter().map(|(c, node)| (*c, node))
    }

    /// Child at position `index` in iteration order.
    pub fn get_index(&self, index: usize) -> Option<(char, &TrieNode)> {
        self.edges.get(index).map(|(c, node)| (*c, node))
    }
}
