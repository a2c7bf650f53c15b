//! Trie engine.
//!
//! A plain prefix tree over `char`. Each node owns its children outright;
//! nodes are created lazily on insert and never removed individually.
//! Child order is first-insertion order, which keeps layouts deterministic.

use std::fmt;

use tracing::debug;

pub mod children;

pub use children::Children;

/// One position in the prefix tree.
///
/// `Clone`, `PartialEq` and `Drop` walk the subtree with an explicit stack, so
/// a node of any depth can be copied, compared and dropped.
#[derive(Default)]
pub struct TrieNode {
    children: Children,
    is_end: bool,
}

impl TrieNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the path from the root to this node spells an inserted word.
    pub fn is_end(&self) -> bool {
        self.is_end
    }

    pub fn child(&self, letter: char) -> Option<&TrieNode> {
        self.children.get(letter)
    }

    pub fn children(&self) -> &Children {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub(crate) fn mark_end(&mut self) {
        self.is_end = true;
    }

    fn take_children(&mut self) -> Vec<TrieNode> {
        std::mem::take(&mut self.children).into_nodes()
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut pending = self.take_children();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.take_children());
        }
    }
}

impl Clone for TrieNode {
    fn clone(&self) -> Self {
        // Flatten into (is_end, [(letter, child index)]) with every child
        // indexed after its parent, then rebuild from the leaves up.
        let mut flat: Vec<(bool, Vec<(char, usize)>)> = vec![(self.is_end, Vec::new())];
        let mut stack: Vec<(&TrieNode, usize)> = vec![(self, 0)];
        while let Some((node, index)) = stack.pop() {
            for (letter, child) in node.children.iter() {
                let child_index = flat.len();
                flat.push((child.is_end, Vec::new()));
                flat[index].1.push((letter, child_index));
                stack.push((child, child_index));
            }
        }

        let mut built: Vec<Option<TrieNode>> = (0..flat.len()).map(|_| None).collect();
        while let Some((is_end, edges)) = flat.pop() {
            let index = flat.len();
            let edges = edges
                .into_iter()
                .map(|(letter, child)| (letter, built[child].take().unwrap_or_default()))
                .collect();
            built[index] = Some(TrieNode {
                children: Children::from_edges(edges),
                is_end,
            });
        }
        built[0].take().unwrap_or_default()
    }
}

impl PartialEq for TrieNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.is_end != b.is_end || a.children.len() != b.children.len() {
                return false;
            }
            for ((la, ca), (lb, cb)) in a.children.iter().zip(b.children.iter()) {
                if la != lb {
                    return false;
                }
                pending.push((ca, cb));
            }
        }
        true
    }
}

impl Eq for TrieNode {}

// Shallow: prints the child letters, not the subtrees.
impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: Vec<char> = self.children.iter().map(|(c, _)| c).collect();
        f.debug_struct("TrieNode")
            .field("is_end", &self.is_end)
            .field("children", &letters)
            .finish()
    }
}

/// The prefix tree: a root node plus the insert operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trie {
    root: TrieNode,
    node_count: usize,
    word_count: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            node_count: 1,
            word_count: 0,
        }
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Insert `word`, creating any missing nodes along its path.
    ///
    /// Returns true if `word` was not already a complete word. Inserting the
    /// empty string is a no-op and returns false: the root never counts as a word.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            debug!("ignoring empty word");
            return false;
        }

        let mut created = 0;
        let mut node = &mut self.root;
        for letter in word.chars() {
            let (next, is_new) = node.children.get_or_insert(letter);
            if is_new {
                created += 1;
            }
            node = next;
        }

        let added = !node.is_end;
        node.mark_end();

        self.node_count += created;
        if added {
            self.word_count += 1;
        }
        debug!(word, created, added, nodes = self.node_count, "inserted word");
        added
    }

    /// Follow `prefix` from the root. `None` if some character has no edge.
    pub fn find(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, letter| node.child(letter))
    }

    /// True if `word` was inserted as a complete word.
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(TrieNode::is_end)
    }

    /// Total node count, root included.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of distinct words inserted.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Drop every word, leaving a bare root.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.node_count = 1;
        self.word_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn trie_of(words: &[&str]) -> Trie {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word);
        }
        trie
    }

    #[test]
    fn test_new_trie_has_only_root() {
        let trie = Trie::new();
        assert_eq!(trie.node_count(), 1);
        assert!(trie.is_empty());
        assert!(!trie.root().is_end());
        assert_eq!(trie.root().child_count(), 0);
    }

    #[test]
    fn test_insert_twice_is_idempotent() {
        let once = trie_of(&["hello"]);
        let mut twice = trie_of(&["hello"]);
        assert!(!twice.insert("hello"));

        assert_eq!(once.root(), twice.root());
        assert_eq!(once.node_count(), twice.node_count());
        assert_eq!(twice.word_count(), 1);
    }

    #[test]
    fn test_prefix_sharing() {
        let trie = trie_of(&["cat", "car"]);
        assert_eq!(trie.node_count(), 5);

        let ca = trie.find("ca").unwrap();
        assert!(!ca.is_end());
        let letters: Vec<char> = ca.children().iter().map(|(c, _)| c).collect();
        assert_eq!(letters, vec!['t', 'r']);
        assert!(ca.child('t').unwrap().is_end());
        assert!(ca.child('r').unwrap().is_end());
    }

    #[rstest]
    #[case(&["go"], 3)]
    #[case(&["go", "golf"], 5)]
    #[case(&["ab", "ac"], 4)]
    #[case(&["cat", "car"], 5)]
    #[case(&["aaa"], 4)]
    #[case(&["a", "b", "c"], 4)]
    fn test_node_count(#[case] words: &[&str], #[case] expected: usize) {
        assert_eq!(trie_of(words).node_count(), expected);
    }

    #[test]
    fn test_termination_flags() {
        let trie = trie_of(&["go", "golf"]);
        assert!(trie.contains("go"));
        assert!(trie.contains("golf"));
        assert!(!trie.contains("g"));
        assert!(!trie.contains("gol"));
        assert!(!trie.contains("golfer"));
        assert!(trie.find("gol").is_some());
        assert!(trie.find("gx").is_none());
    }

    #[test]
    fn test_ab_ac_shape() {
        let trie = trie_of(&["ab", "ac"]);
        assert_eq!(trie.root().child_count(), 1);
        let a = trie.root().child('a').unwrap();
        assert_eq!(a.child_count(), 2);
        assert!(a.child('b').unwrap().is_end());
        assert!(a.child('c').unwrap().is_end());
    }

    #[test]
    fn test_empty_word_is_noop() {
        let mut trie = Trie::new();
        assert!(!trie.insert(""));
        assert!(!trie.root().is_end());
        assert_eq!(trie.node_count(), 1);
        assert!(!trie.contains(""));
    }

    #[test]
    fn test_repeated_characters_follow_single_edges() {
        let trie = trie_of(&["aa", "aaa"]);
        assert_eq!(trie.node_count(), 4);
        assert_eq!(trie.root().child_count(), 1);
        assert!(trie.contains("aa"));
        assert!(!trie.contains("a"));
    }

    #[test]
    fn test_unicode_labels() {
        let trie = trie_of(&["åsa", "ås"]);
        assert!(trie.contains("ås"));
        assert!(trie.contains("åsa"));
        assert_eq!(trie.node_count(), 4);
    }

    #[test]
    fn test_prefix_inserted_after_extension() {
        let mut trie = trie_of(&["golf"]);
        assert!(!trie.contains("go"));
        assert!(trie.insert("go"));
        assert!(trie.contains("go"));
        assert_eq!(trie.node_count(), 5);
    }

    #[test]
    fn test_clear() {
        let mut trie = trie_of(&["one", "two"]);
        trie.clear();
        assert_eq!(trie, Trie::new());
        assert!(!trie.contains("one"));
    }

    #[test]
    fn test_deep_trie_drops() {
        let word: String = std::iter::repeat_n('x', 200_000).collect();
        let trie = trie_of(&[word.as_str()]);
        assert_eq!(trie.node_count(), 200_001);
        drop(trie);
    }

    #[test]
    fn test_deep_trie_clones_and_compares() {
        let word: String = std::iter::repeat_n('x', 200_000).collect();
        let trie = trie_of(&[word.as_str()]);

        let copy = trie.clone();
        assert_eq!(copy, trie);
        assert!(copy.contains(&word));

        let subtree = trie.root().clone();
        assert_eq!(&subtree, trie.root());
        drop(subtree);

        let mut longer = trie.clone();
        longer.insert(&format!("{}y", word));
        assert_ne!(longer.root(), trie.root());
    }

    #[test]
    fn test_clone_keeps_order_and_flags() {
        let trie = trie_of(&["to", "tea", "ten", "i", "in"]);
        let copy = trie.root().clone();
        assert_eq!(&copy, trie.root());

        let letters: Vec<char> = copy
            .child('t')
            .unwrap()
            .children()
            .iter()
            .map(|(c, _)| c)
            .collect();
        assert_eq!(letters, vec!['o', 'e']);
        assert!(copy.child('i').unwrap().is_end());
        assert!(!copy.child('t').unwrap().child('e').unwrap().is_end());
    }

    #[test]
    fn test_eq_detects_flag_and_order_differences() {
        assert_ne!(trie_of(&["ab"]).root(), trie_of(&["a", "ab"]).root());
        assert_ne!(trie_of(&["ab", "ac"]).root(), trie_of(&["ac", "ab"]).root());
        assert_eq!(trie_of(&["ab", "ac"]).root(), trie_of(&["ab", "ac", "ab"]).root());
    }
}
