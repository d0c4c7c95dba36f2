//! Domain layer for valence-classifier.
//!
//! Contains the types shared across all modules:
//! - `Record`: One input line split into space-separated fields
//! - `Label`: Sentiment category (NEG/NEU/POS)
//! - `ClassifierError`: Top-level error type

pub mod error;
pub mod label;
pub mod record;

pub use error::ClassifierError;
pub use label::Label;
pub use record::Record;
