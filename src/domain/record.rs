use super::error::ClassifierError;

/// Field separator. Only the single space byte splits fields; tabs and runs
/// of spaces are not collapsed.
pub const FIELD_SEPARATOR: u8 = b' ';

/// Zero-based index of the field holding the valence score.
pub const SCORE_FIELD_INDEX: usize = 1;

/// One line of input, borrowed from the reader's buffer.
///
/// The line terminator has already been removed. Content is kept as raw
/// bytes: fields other than the score may hold anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    line_number: usize,
    raw: &'a [u8],
}

impl<'a> Record<'a> {
    pub fn new(line_number: usize, raw: &'a [u8]) -> Self {
        Self { line_number, raw }
    }

    /// 1-based position of this record in the input.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn raw(&self) -> &'a [u8] {
        self.raw
    }

    pub fn fields(self) -> impl Iterator<Item = &'a [u8]> {
        self.raw.split(|b| *b == FIELD_SEPARATOR)
    }

    pub fn score_field(&self) -> Result<&'a [u8], ClassifierError> {
        self.fields()
            .nth(SCORE_FIELD_INDEX)
            .ok_or_else(|| ClassifierError::MissingField {
                line: self.line_number,
                fields: self.fields().count(),
            })
    }
}
