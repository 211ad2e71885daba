//! Word occurrence counting.

use std::collections::HashMap;

use crate::models::WordCount;

/// Occurrence counts keyed by word, remembering first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    index: HashMap<String, usize>,
    entries: Vec<WordCount>,
}

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build counts from a sequence of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts = Self::new();
        for word in words {
            counts.record(word);
        }
        counts
    }

    /// Count one occurrence of `word`.
    pub fn record(&mut self, word: impl Into<String>) {
        let word = word.into();
        match self.index.get(&word) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                self.index.insert(word.clone(), self.entries.len());
                self.entries.push(WordCount::new(word, 1));
            }
        }
    }

    /// Count for `word`, if it has been seen.
    pub fn get(&self, word: &str) -> Option<usize> {
        self.index.get(word).map(|&slot| self.entries[slot].count)
    }

    /// Total occurrences across all words.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    /// Number of distinct words.
    pub fn unique(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All words with their counts, in order of first appearance.
    pub fn entries(&self) -> &[WordCount] {
        &self.entries
    }

    /// The `n` most frequent words, count descending.
    ///
    /// Words with equal counts keep their first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<WordCount> {
        let mut ranked = self.entries.clone();
        // sort_by is stable
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        ranked
    }
}

impl<S: Into<String>> FromIterator<S> for WordCounts {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
