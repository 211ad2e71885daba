//! Error types for wordfreq-core.
//!
//! Analysis can only fail on input validation: either there is no text at
//! all, or the text contains nothing that counts as a word.

use thiserror::Error;

/// The error type for word frequency analysis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    /// Input was empty or whitespace-only.
    #[error("no text provided")]
    EmptyInput,

    /// Input had content, but no ASCII letter runs.
    #[error("no valid words found")]
    NoValidWords,
}

impl AnalyzeError {
    /// Feedback string suitable for showing to an end user.
    pub fn user_message(&self) -> &'static str {
        match self {
            AnalyzeError::EmptyInput => "Please enter some text to analyze",
            AnalyzeError::NoValidWords => "No valid words found in the text",
        }
    }
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalyzeError>;
