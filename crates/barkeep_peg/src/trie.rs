//! Case-insensitive longest-match prefix tree.
//!
//! Backs the `one_of` rule: given a set of alternatives, find the longest one
//! that prefixes the remaining input.

/// Simple case folding for a single character, as used by every
/// case-insensitive rule.
///
/// Characters whose lowercase form expands to several characters fold to
/// the first of them.
#[must_use]
pub fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Returns the byte length of the prefix of `haystack` that equals `needle`
/// ignoring case, if any.
pub(crate) fn prefix_len_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    let mut chars = haystack.char_indices();
    let mut len = 0;
    for expected in needle.chars() {
        let (offset, actual) = chars.next()?;
        if fold_char(actual) != fold_char(expected) {
            return None;
        }
        len = offset + actual.len_utf8();
    }
    Some(len)
}

#[derive(Clone, Debug, Default)]
struct Node {
    /// Outgoing edges keyed by folded character.
    children: Vec<(char, usize)>,
    /// Index of the first alternative ending here.
    accept: Option<usize>,
}

impl Node {
    fn child(&self, c: char) -> Option<usize> {
        self.children
            .iter()
            .find_map(|&(key, next)| (key == c).then_some(next))
    }
}

/// A set of alternatives matched case-insensitively, longest first.
///
/// When two alternatives fold to the same string, the one declared first wins.
#[derive(Clone, Debug)]
pub struct Trie {
    nodes: Vec<Node>,
    alternatives: Vec<String>,
}

impl Trie {
    /// Builds a trie from alternatives in declaration order.
    #[must_use]
    pub fn new<I, S>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut trie = Self {
            nodes: vec![Node::default()],
            alternatives: Vec::new(),
        };
        for alternative in alternatives {
            trie.insert(alternative.into());
        }
        trie
    }

    fn insert(&mut self, alternative: String) {
        let index = self.alternatives.len();
        let mut node = 0;
        for c in alternative.chars().map(fold_char) {
            node = match self.nodes[node].child(c) {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[node].children.push((c, next));
                    next
                }
            };
        }
        if self.nodes[node].accept.is_none() {
            self.nodes[node].accept = Some(index);
        }
        self.alternatives.push(alternative);
    }

    /// Finds the longest alternative prefixing `input`.
    ///
    /// Returns the alternative's declaration index and the number of input
    /// bytes it covers.
    #[must_use]
    pub fn longest_match(&self, input: &str) -> Option<(usize, usize)> {
        let mut node = 0;
        let mut best = self.nodes[0].accept.map(|index| (index, 0));
        for (offset, c) in input.char_indices() {
            let Some(next) = self.nodes[node].child(fold_char(c)) else {
                break;
            };
            node = next;
            if let Some(index) = self.nodes[node].accept {
                best = Some((index, offset + c.len_utf8()));
            }
        }
        best
    }

    /// Returns the alternatives in declaration order.
    #[must_use]
    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    /// Returns the number of alternatives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns true if there are no alternatives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }
}
