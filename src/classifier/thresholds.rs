use crate::domain::Label;

/// Scores at or below this value are negative.
pub const NEGATIVE_THRESHOLD: i64 = -50;

/// Scores at or above this value are positive.
pub const POSITIVE_THRESHOLD: i64 = 50;

/// Maps a valence score to its label. Everything strictly between the two
/// thresholds is neutral.
pub fn classify(score: i64) -> Label {
    if score <= NEGATIVE_THRESHOLD {
        Label::Neg
    } else if score >= POSITIVE_THRESHOLD {
        Label::Pos
    } else {
        Label::Neu
    }
}
