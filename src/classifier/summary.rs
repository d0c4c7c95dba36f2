use crate::domain::Label;

/// Per-label line counts for one classification run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassificationSummary {
    pub negative: usize,
    pub neutral: usize,
    pub positive: usize,
}

impl ClassificationSummary {
    pub fn record(&mut self, label: Label) {
        match label {
            Label::Neg => self.negative += 1,
            Label::Neu => self.neutral += 1,
            Label::Pos => self.positive += 1,
        }
    }

    pub fn count(&self, label: Label) -> usize {
        match label {
            Label::Neg => self.negative,
            Label::Neu => self.neutral,
            Label::Pos => self.positive,
        }
    }

    pub fn total(&self) -> usize {
        self.negative + self.neutral + self.positive
    }
}
