use std::collections::VecDeque;

/// Naive trie supporting dynamic insertion. Used to build a [`Wordlist`](crate::Wordlist).
///
/// Children are kept sorted by label, so a breadth-first walk visits the labels
/// of each node in order.
#[derive(Debug, Default)]
pub struct TrieVec<T> {
    children: Vec<(T, TrieVec<T>)>,
    terminal: bool,
}

impl<T> TrieVec<T> {
    pub fn new() -> TrieVec<T> {
        TrieVec {
            children: Vec::new(),
            terminal: false,
        }
    }

    pub fn bf_iter(&self) -> BfIter<'_, T> {
        BfIter::new(self)
    }

    pub fn children(&self) -> &[(T, TrieVec<T>)] {
        &self.children
    }

    pub fn terminal(&self) -> bool {
        self.terminal
    }
}

impl<T: Ord + Clone> TrieVec<T> {
    pub fn insert<K: AsRef<[T]>>(&mut self, key: K) {
        let mut t = self;
        for c in key.as_ref() {
            let pos = match t.children.binary_search_by(|(c2, _)| c2.cmp(c)) {
                Ok(pos) => pos,
                Err(pos) => {
                    t.children.insert(pos, (c.clone(), TrieVec::new()));
                    pos
                }
            };
            t = &mut { t }.children[pos].1;
        }
        t.terminal = true;
    }
}

/// Breadth-first iterator over the nodes of a [`TrieVec`], paired with their label.
/// The root has no label.
pub struct BfIter<'a, T> {
    queue: VecDeque<(Option<&'a T>, &'a TrieVec<T>)>,
}

impl<'a, T> BfIter<'a, T> {
    fn new(t: &'a TrieVec<T>) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back((None, t));
        BfIter { queue }
    }
}

impl<'a, T> Iterator for BfIter<'a, T> {
    type Item = (Option<&'a T>, &'a TrieVec<T>);

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_front().map(|(label, node)| {
            for (c, child) in &node.children {
                self.queue.push_back((Some(c), child));
            }
            (label, node)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Wordlist;

    fn chars(key: &str) -> Vec<char> {
        key.chars().collect()
    }

    #[test]
    fn test_trie_vec() {
        let mut t = TrieVec::new();
        let keys = &["to", "tea", "ten", "i", "in", "inn", "we"];
        let keys_not = &["te", "inno", "web", "hoge", ""];
        for key in keys {
            t.insert(chars(key));
        }

        let wordlist = Wordlist::from(t);
        for key in keys {
            assert!(wordlist.is_word(key), "t should have key '{}'", key);
        }
        for key in keys_not {
            assert!(!wordlist.is_word(key), "t should not have key '{}'", key);
        }
    }

    #[test]
    fn test_bf_iter_order() {
        let mut t = TrieVec::new();
        for key in &["ba", "ab", "b"] {
            t.insert(chars(key));
        }
        let labels: Vec<Option<char>> = t.bf_iter().map(|(label, _)| label.copied()).collect();
        assert_eq!(labels, [None, Some('a'), Some('b'), Some('b'), Some('a')]);
        let terminals = t.bf_iter().filter(|(_, node)| node.terminal()).count();
        assert_eq!(terminals, 3);
    }
}
