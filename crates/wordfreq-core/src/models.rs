//! Core data types for wordfreq.
//!
//! - [`WordCount`] - A single word with its occurrence count
//! - [`AnalysisResult`] - Complete result of analyzing a text

use serde::{Deserialize, Serialize};

/// Maximum number of entries in [`AnalysisResult::chart_data`].
pub const CHART_LIMIT: usize = 10;

/// A lowercase word and how many times it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Complete result of a word frequency analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Number of words in the text, counting repeats.
    pub total_words: usize,
    /// Number of distinct words.
    pub unique_words: usize,
    /// Every distinct word, in order of first appearance.
    pub words_data: Vec<WordCount>,
    /// Up to [`CHART_LIMIT`] most frequent words, count descending.
    /// Ties keep order of first appearance.
    pub chart_data: Vec<WordCount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_count_serialization() {
        let json = serde_json::to_string(&WordCount::new("cat", 3)).unwrap();
        assert_eq!(json, r#"{"word":"cat","count":3}"#);
    }

    #[test]
    fn analysis_result_field_names() {
        let result = AnalysisResult {
            total_words: 1,
            unique_words: 1,
            words_data: vec![WordCount::new("a", 1)],
            chart_data: vec![WordCount::new("a", 1)],
        };
        let value = serde_json::to_value(&result).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert_eq!(object["total_words"], 1);
        assert_eq!(object["unique_words"], 1);
        assert!(object["words_data"].is_array());
        assert!(object["chart_data"].is_array());
    }
}
