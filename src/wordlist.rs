mod trievec;

use self::trievec::TrieVec;
use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::read_to_string;
use tracing::info;

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// A trie data structure that holds all the valid words.
pub struct Wordlist {
    /// List of nodes in trie. Each node is a tuple with the index of the first
    /// child node, and the number of children.
    pub nodes: Vec<(u32, u32)>,
    /// The label of each node. The children of a node are sorted by label.
    pub labels: Vec<char>,
    /// List indicating terminal nodes
    pub terminal: Vec<bool>,
    /// Path of the wordfile used to build the wordlist.
    /// Empty if the wordlist is not build from a file.
    pub wordfile: String,
    /// The number of words in the wordlist
    pub word_count: usize,
}

impl fmt::Display for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Wordlist: {} words, {} nodes from '{}'>",
            self.word_count,
            self.nodes.len(),
            self.wordfile
        )
    }
}

impl From<TrieVec<char>> for Wordlist {
    fn from(trie: TrieVec<char>) -> Self {
        let mut nodes = Vec::new();
        let mut labels = Vec::new();
        let mut terminal = Vec::new();
        // nodes are numbered in breadth-first order, so the children of a node are
        // numbered consecutively, starting after all nodes seen so far
        let mut seen = 1;
        for (label, node) in trie.bf_iter() {
            let count = node.children().len();
            nodes.push((seen as u32, count as u32));
            labels.push(label.copied().unwrap_or_default());
            terminal.push(node.terminal());
            seen += count;
        }
        let word_count = terminal.iter().filter(|&&t| t).count();
        Wordlist {
            nodes,
            labels,
            terminal,
            wordfile: String::new(),
            word_count,
        }
    }
}

impl Wordlist {
    /// Read the wordlist from a file. The file must be encoded in utf-8 and
    /// have one word per line. Words are stored in lowercase, empty lines are skipped.
    /// ## Errors
    /// Fails if the wordlist can not be read.
    pub fn from_file(wordfile: &str) -> Result<Wordlist, Error> {
        let contents = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut wordlist = Wordlist::from_words(&contents.lines().collect::<Vec<_>>());
        wordlist.wordfile = String::from(wordfile);
        info!(wordfile, words = wordlist.word_count, "wordlist loaded");
        Ok(wordlist)
    }

    /// Build a wordlist from a list of words.
    /// ## Examples
    /// ```
    /// use scrabble_referee::Wordlist;
    /// let wordlist = Wordlist::from_words(&["aardvark", "Zebra"]);
    /// assert!(wordlist.is_word("zebra"));
    /// assert!(!wordlist.is_word("aard"));
    /// ```
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Wordlist {
        let mut builder = TrieVec::new();
        for word in words {
            let word = word.as_ref().trim();
            if !word.is_empty() {
                builder.insert(word.to_lowercase().chars().collect::<Vec<_>>());
            }
        }
        Wordlist::from(builder)
    }

    #[cfg(all(feature = "serde", feature = "bincode"))]
    /// Deserialize the wordlist from a bincoded file.
    /// ## Errors
    /// - If the wordlist can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(wordfile: &str) -> Result<Wordlist, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut wordlist: Wordlist = bincode::deserialize_from(reader)
            .map_err(|_| Error::WordfileDeserializeError(String::from(wordfile)))?;
        wordlist.wordfile = String::from(wordfile);
        info!(wordfile, words = wordlist.word_count, "wordlist loaded");
        Ok(wordlist)
    }

    #[cfg(all(feature = "serde", feature = "bincode"))]
    /// Write the wordlist to `wordfile` with bincode.
    /// ## Errors
    /// If the file can not be created or written.
    pub fn serialize_into(&self, wordfile: &str) -> Result<(), Error> {
        use std::fs::File;
        use std::io::BufWriter;
        let file = File::create(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        bincode::serialize_into(BufWriter::new(file), self)
            .map_err(|_| Error::WordfileSerializeError(String::from(wordfile)))
    }

    /// Get the index of child with `label` for node `i` if present.
    pub fn get(&self, i: usize, label: char) -> Option<usize> {
        let (start, count) = self.nodes[i];
        let start = start as usize;
        let end = start + count as usize;
        self.labels[start..end]
            .binary_search(&label)
            .ok()
            .map(|pos| start + pos)
    }

    /// Returns true if `word` is in wordlist
    pub fn is_word(&self, word: &str) -> bool {
        if self.nodes.is_empty() {
            return false;
        }
        let mut i = 0;
        for c in word.chars() {
            match self.get(i, c) {
                Some(child) => i = child,
                None => return false,
            }
        }
        self.terminal[i]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    const WORDS: &[&str] = &[
        "af", "ah", "al", "aar", "aas", "bi", "bo", "bar", "bes", "bel", "belt",
    ];

    #[test]
    fn test_nodes() {
        let wordlist = Wordlist::from_words(WORDS);
        assert_eq!(wordlist.word_count, 11);
        assert_eq!(wordlist.nodes.len(), 17);
        // root has children 'a' and 'b'
        assert_eq!(wordlist.nodes[0], (1, 2));
        assert_eq!(&wordlist.labels[1..3], &['a', 'b']);
        assert!(!wordlist.terminal[0]);
    }

    #[test]
    fn test_is_word() {
        let wordlist = Wordlist::from_words(WORDS);
        for &word in WORDS {
            assert!(wordlist.is_word(word), "{} should be a word", word);
        }
        for &word in &["", "a", "be", "belts", "xyz"] {
            assert!(!wordlist.is_word(word), "{} should not be a word", word);
        }
    }

    #[test]
    fn test_empty_wordlist() {
        let wordlist = Wordlist::default();
        assert!(!wordlist.is_word("a"));
        let wordlist = Wordlist::from_words::<&str>(&[]);
        assert_eq!(wordlist.word_count, 0);
        assert!(!wordlist.is_word(""));
    }

    #[test]
    fn test_from_file() -> Result<(), Error> {
        let path = std::env::temp_dir().join(format!(
            "scrabble-referee-wordlist-{}.txt",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "Know\nsnow\n\nno").unwrap();
        let wordfile = path.to_string_lossy();
        let wordlist = Wordlist::from_file(&wordfile);
        std::fs::remove_file(&path).unwrap();
        let wordlist = wordlist?;
        assert_eq!(wordlist.word_count, 3);
        assert!(wordlist.is_word("know"));
        assert_eq!(wordlist.wordfile, wordfile);
        Ok(())
    }

    #[test]
    #[should_panic(expected = "ReadError")]
    fn test_missing_file() {
        Wordlist::from_file("no/such/wordfile.txt").unwrap();
    }
}
