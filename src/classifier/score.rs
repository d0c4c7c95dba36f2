use crate::domain::{ClassifierError, Record};
use std::num::IntErrorKind;
use tracing::debug;

/// Extracts the valence score from a record's second field.
///
/// Surrounding ASCII whitespace is ignored (`\r` from CRLF input, stray
/// tabs). Integers that do not fit in `i64` saturate rather than fail, so an
/// oversized score still lands in the outermost category.
pub fn extract_score(record: &Record<'_>) -> Result<i64, ClassifierError> {
    let field = record.score_field()?;
    parse_score(field).map_err(|reason| ClassifierError::InvalidScore {
        line: record.line_number(),
        field: String::from_utf8_lossy(field).into_owned(),
        reason,
    })
}

fn parse_score(field: &[u8]) -> Result<i64, String> {
    let text = std::str::from_utf8(field.trim_ascii())
        .map_err(|e| format!("score is not valid UTF-8: {e}"))?;

    match text.parse::<i64>() {
        Ok(score) => Ok(score),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => {
                debug!("Score '{}' exceeds i64::MAX, saturating", text);
                Ok(i64::MAX)
            }
            IntErrorKind::NegOverflow => {
                debug!("Score '{}' is below i64::MIN, saturating", text);
                Ok(i64::MIN)
            }
            _ => Err(e.to_string()),
        },
    }
}
