use std::path::Path;
use thiserror::Error;
use tokio::fs;

use crate::error::{Result, SolverError};

const ALPHABET_SIZE: usize = 26;

/// Slot value for a missing child. The root lives at index 0 and is never
/// anybody's child, so 0 is free to mean "absent".
const NO_CHILD: u32 = 0;

/// How far a candidate string gets into the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match {
    /// No dictionary word starts with the candidate
    NoMatch,
    /// The candidate is a proper prefix of at least one word, but not a word itself
    Partial,
    /// The candidate is a complete dictionary word (and may also be a prefix)
    Word,
}

/// A character outside `a-z`/`A-Z` was handed to the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("illegal character {0:?}")]
pub struct IllegalCharacter(pub char);

#[derive(Debug, Clone, Default)]
struct Node {
    children: [u32; ALPHABET_SIZE],
    is_word: bool,
}

/// Prefix tree over the 26 ASCII letters, case-insensitive.
///
/// Nodes live in a single arena and refer to their children by index, so the
/// whole tree is dropped at once and no node has more than one parent.
#[derive(Debug, Clone)]
pub struct WordIndex {
    nodes: Vec<Node>,
    words: usize,
}

impl Default for WordIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl WordIndex {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            words: 0,
        }
    }

    /// Load and build the index from a word list file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| SolverError::InputUnavailable {
                path: path.to_path_buf(),
                source,
            })?;

        let index = Self::from_word_list(&content)?;
        if index.is_empty() {
            tracing::warn!("Dictionary {:?} contains no words", path);
        }

        tracing::info!(
            "Loaded {} words into dictionary ({} nodes)",
            index.len(),
            index.node_count()
        );

        Ok(index)
    }

    /// Build an index from one word per line.
    ///
    /// Only the line ending is stripped, so any other whitespace is an illegal
    /// character. Empty lines are skipped. The first word containing a non-letter
    /// aborts the whole build.
    pub fn from_word_list(content: &str) -> Result<Self> {
        let mut index = Self::new();

        for (line_no, line) in content.lines().enumerate() {
            let word = line.strip_suffix('\r').unwrap_or(line);
            if word.is_empty() {
                continue;
            }

            index
                .insert(word)
                .map_err(|IllegalCharacter(character)| {
                    tracing::error!("Illegal character {:?} in dictionary word {:?}", character, word);
                    SolverError::MalformedDictionaryEntry {
                        line: line_no + 1,
                        word: word.to_string(),
                        character,
                    }
                })?;
        }

        Ok(index)
    }

    /// Insert a word. Nothing is added if any character is not a letter.
    pub fn insert(&mut self, word: &str) -> std::result::Result<(), IllegalCharacter> {
        let slots = word
            .chars()
            .map(|c| slot(c).ok_or(IllegalCharacter(c)))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut current = 0;
        for slot in slots {
            let child = self.nodes[current].children[slot];
            current = if child == NO_CHILD {
                let next = self.nodes.len();
                self.nodes.push(Node::default());
                self.nodes[current].children[slot] = next as u32;
                next
            } else {
                child as usize
            };
        }

        let node = &mut self.nodes[current];
        if !node.is_word {
            node.is_word = true;
            self.words += 1;
        }

        Ok(())
    }

    /// Walk `candidate` from the root and report how far it gets
    pub fn matches(&self, candidate: &str) -> Match {
        let mut current = 0;
        for c in candidate.chars() {
            let Some(slot) = slot(c) else {
                return Match::NoMatch;
            };
            let child = self.nodes[current].children[slot];
            if child == NO_CHILD {
                return Match::NoMatch;
            }
            current = child as usize;
        }

        if self.nodes[current].is_word {
            Match::Word
        } else {
            Match::Partial
        }
    }

    /// Number of distinct words in the index
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of trie nodes, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

fn slot(c: char) -> Option<usize> {
    c.is_ascii_alphabetic()
        .then(|| (c.to_ascii_lowercase() as u8 - b'a') as usize)
}
