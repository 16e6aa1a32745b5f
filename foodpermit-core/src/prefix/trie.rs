//! Character trie answering prefix completion queries.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    terminal: bool,
}

/// A set of strings supporting prefix completion.
///
/// Children are ordered by character, so completions come back in lexical
/// order with every string preceding its own extensions. Duplicate inserts
/// are collapsed.
///
/// # Examples
/// ```
/// use foodpermit_core::PrefixTrie;
///
/// let trie: PrefixTrie = ["123", "1", "12", "2"].into_iter().collect();
/// assert_eq!(trie.complete("1"), vec!["1", "12", "123"]);
/// assert!(trie.complete("3").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixTrie {
    root: TrieNode,
    len: usize,
}

impl PrefixTrie {
    /// Create an empty trie.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value`, returning `false` when it was already present.
    pub fn insert(&mut self, value: &str) -> bool {
        let node = value.chars().fold(&mut self.root, |node, ch| {
            node.children.entry(ch).or_default()
        });
        if node.terminal {
            return false;
        }
        node.terminal = true;
        self.len += 1;
        true
    }

    /// Whether `value` was inserted.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.find(value).is_some_and(|node| node.terminal)
    }

    /// Number of distinct strings stored.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether no strings are stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Every stored string starting with `prefix`, in lexical order.
    ///
    /// An empty prefix returns every stored string.
    #[must_use]
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        let Some(start) = self.find(prefix) else {
            return Vec::new();
        };

        let mut matches = Vec::new();
        let mut pending = vec![(start, prefix.to_owned())];
        while let Some((node, word)) = pending.pop() {
            if node.terminal {
                matches.push(word.clone());
            }
            // Reverse so the smallest child is popped first.
            for (ch, child) in node.children.iter().rev() {
                let mut next = word.clone();
                next.push(*ch);
                pending.push((child, next));
            }
        }
        matches
    }

    fn find(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, ch| node.children.get(&ch))
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixTrie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixTrie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}
