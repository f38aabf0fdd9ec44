use crate::Wordlist;
use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

/// Answers whether a word may be played.
///
/// Words are passed in lowercase.
pub trait Dictionary {
    fn contains(&self, word: &str) -> bool;
}

impl Dictionary for Wordlist {
    fn contains(&self, word: &str) -> bool {
        self.is_word(word)
    }
}

impl<S: BuildHasher> Dictionary for HashSet<String, S> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl Dictionary for BTreeSet<String> {
    fn contains(&self, word: &str) -> bool {
        BTreeSet::contains(self, word)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check<D: Dictionary>(dictionary: D) {
        assert!(dictionary.contains("snow"));
        assert!(!dictionary.contains("sn"));
    }

    #[test]
    fn test_dictionaries() {
        let words = ["snow", "no"];
        check(Wordlist::from_words(&words));
        check(words.iter().map(|&w| String::from(w)).collect::<HashSet<_>>());
        check(words.iter().map(|&w| String::from(w)).collect::<BTreeSet<_>>());
        check(&Wordlist::from_words(&words));
    }
}
