use std::fmt;

/// Sentiment label assigned to a single input line.
///
/// The textual form (`NEG`, `NEU`, `POS`) is the exact output written for
/// every classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Neg,
    Neu,
    Pos,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Neg => "NEG",
            Label::Neu => "NEU",
            Label::Pos => "POS",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_as_str() {
        assert_eq!(Label::Neg.as_str(), "NEG");
        assert_eq!(Label::Neu.as_str(), "NEU");
        assert_eq!(Label::Pos.as_str(), "POS");
    }

    #[test]
    fn test_label_display_matches_as_str() {
        for label in [Label::Neg, Label::Neu, Label::Pos] {
            assert_eq!(label.to_string(), label.as_str());
        }
    }
}
