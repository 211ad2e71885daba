//! Word frequency analysis.

use crate::counts::WordCounts;
use crate::error::{AnalyzeError, Result};
use crate::models::{AnalysisResult, CHART_LIMIT};
use crate::tokenize::words;

/// Analyze the word frequencies of `text`.
///
/// Fails with [`AnalyzeError::EmptyInput`] if `text` is empty or only
/// whitespace, and with [`AnalyzeError::NoValidWords`] if it contains no
/// ASCII letters at all.
///
/// # Examples
///
/// ```
/// use wordfreq_core::analyze;
///
/// let result = analyze("Cat cat CAT").unwrap();
/// assert_eq!(result.total_words, 3);
/// assert_eq!(result.unique_words, 1);
/// assert_eq!(result.chart_data[0].word, "cat");
/// ```
pub fn analyze(text: &str) -> Result<AnalysisResult> {
    let text = text.trim_matches(is_blank);
    if text.is_empty() {
        return Err(AnalyzeError::EmptyInput);
    }

    let counts: WordCounts = words(text).collect();
    if counts.is_empty() {
        return Err(AnalyzeError::NoValidWords);
    }

    Ok(AnalysisResult {
        total_words: counts.total(),
        unique_words: counts.unique(),
        words_data: counts.entries().to_vec(),
        chart_data: counts.most_common(CHART_LIMIT),
    })
}

/// Unicode whitespace plus the ASCII file, group, record and unit separators.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
