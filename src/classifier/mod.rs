//! Line classification.
//!
//! Each input line is split on single spaces, its second field is read as a
//! signed integer score, and the score is mapped to a label against two
//! fixed thresholds.

pub mod runner;
pub mod score;
pub mod summary;
pub mod thresholds;

pub use runner::LineClassifier;
pub use score::extract_score;
pub use summary::ClassificationSummary;
pub use thresholds::{NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD, classify};
