//! # wordfreq-core
//!
//! Word frequency analysis for plain text.
//!
//! A word is a maximal run of ASCII letters, case-folded to lowercase.
//! Analysis produces the total and distinct word counts, a full per-word
//! listing, and a top-10 list suitable for charting.
//!
//! ## Features
//!
//! - **Deterministic**: Output order is fixed. The per-word listing follows
//!   first appearance; the top list sorts by count with ties in first-seen order.
//! - **Pure**: No I/O, no shared state. Safe to call from any thread.
//! - **Serde-ready**: Result types serialize to the JSON shape served over HTTP.
//!
//! ## Example
//!
//! ```rust
//! use wordfreq_core::prelude::*;
//!
//! let result = analyze("The cat and the hat").unwrap();
//!
//! assert_eq!(result.total_words, 5);
//! assert_eq!(result.unique_words, 4);
//! assert_eq!(result.chart_data[0], WordCount::new("the", 2));
//! ```

pub mod analyze;
pub mod counts;
pub mod error;
pub mod models;
pub mod tokenize;

// Re-export commonly used types at the crate root
pub use analyze::analyze;
pub use counts::WordCounts;
pub use error::{AnalyzeError, Result};
pub use models::{AnalysisResult, CHART_LIMIT, WordCount};

/// Prelude module for convenient imports.
///
/// ```
/// use wordfreq_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::analyze::analyze;
    pub use crate::counts::WordCounts;
    pub use crate::error::{AnalyzeError, Result};
    pub use crate::models::*;
    pub use crate::tokenize::words;
}
