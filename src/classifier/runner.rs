use super::score::extract_score;
use super::summary::ClassificationSummary;
use super::thresholds::classify;
use crate::domain::{ClassifierError, Label, Record};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, trace};

/// Classifies every line of an input, writing one label per line.
///
/// Processing is fail-fast: the first malformed line aborts the run. Labels
/// for earlier lines have already been handed to the writer by then.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineClassifier {}

impl LineClassifier {
    pub fn new() -> Self {
        Self {}
    }

    pub fn classify_record(&self, record: &Record<'_>) -> Result<Label, ClassifierError> {
        extract_score(record).map(classify)
    }

    pub fn run_file<P: AsRef<Path>, W: Write>(
        &self,
        path: P,
        writer: &mut W,
    ) -> Result<ClassificationSummary, ClassifierError> {
        let path = path.as_ref();
        debug!("Classifying {}", path.display());

        let file = File::open(path).map_err(|source| ClassifierError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        self.run(BufReader::new(file), writer)
    }

    pub fn run<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        writer: &mut W,
    ) -> Result<ClassificationSummary, ClassifierError> {
        let mut summary = ClassificationSummary::default();
        let mut buf = Vec::new();
        let mut line_number = 0;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| ClassifierError::Read {
                    line: line_number + 1,
                    source,
                })?;
            if read == 0 {
                break;
            }
            line_number += 1;

            let line = buf.strip_suffix(b"\n").unwrap_or(&buf);
            let label = self.classify_record(&Record::new(line_number, line))?;
            trace!(line = line_number, label = %label, "classified");

            writeln!(writer, "{label}").map_err(|source| ClassifierError::Write { source })?;
            summary.record(label);
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_to_string(input: &str) -> (Result<ClassificationSummary, ClassifierError>, String) {
        let classifier = LineClassifier::new();
        let mut output = Vec::new();
        let result = classifier.run(Cursor::new(input.as_bytes()), &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_reference_scenario() {
        let (result, output) = run_to_string("id -75\nid -10\nid 0\nid 49\nid 50\nid 100\n");
        let summary = result.unwrap();

        assert_eq!(output, "NEG\nNEU\nNEU\nNEU\nPOS\nPOS\n");
        assert_eq!(summary.negative, 1);
        assert_eq!(summary.neutral, 3);
        assert_eq!(summary.positive, 2);
    }

    #[test]
    fn test_last_line_without_newline() {
        let (result, output) = run_to_string("a -50\nb 50");
        assert_eq!(result.unwrap().total(), 2);
        assert_eq!(output, "NEG\nPOS\n");
    }

    #[test]
    fn test_empty_input_produces_no_output() {
        let (result, output) = run_to_string("");
        assert_eq!(result.unwrap().total(), 0);
        assert!(output.is_empty());
    }

    #[test]
    fn test_crlf_input() {
        let (result, output) = run_to_string("id -75\r\nid 3\r\nid 80\r\n");
        assert!(result.is_ok());
        assert_eq!(output, "NEG\nNEU\nPOS\n");
    }

    #[test]
    fn test_missing_field_aborts_after_earlier_labels() {
        let (result, output) = run_to_string("id 60\nlonely\nid -60\n");

        assert_eq!(output, "POS\n");
        assert!(matches!(
            result,
            Err(ClassifierError::MissingField { line: 2, .. })
        ));
    }

    #[test]
    fn test_invalid_score_aborts_run() {
        let (result, output) = run_to_string("id abc\nid 10\n");

        assert!(output.is_empty());
        match result {
            Err(ClassifierError::InvalidScore { line, field, .. }) => {
                assert_eq!(line, 1);
                assert_eq!(field, "abc");
            }
            other => panic!("Expected InvalidScore, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_line_is_a_missing_field() {
        let (result, output) = run_to_string("id 1\n\nid 2\n");
        assert_eq!(output, "NEU\n");
        assert!(matches!(
            result,
            Err(ClassifierError::MissingField { line: 2, fields: 1 })
        ));
    }

    #[test]
    fn test_non_utf8_identifier_is_ignored() {
        let classifier = LineClassifier::new();
        let mut output = Vec::new();
        let input: &[u8] = b"\xFF\xFE -90\n";

        let summary = classifier.run(input, &mut output).unwrap();

        assert_eq!(output, b"NEG\n");
        assert_eq!(summary.negative, 1);
    }

    #[test]
    fn test_run_file_reports_missing_file() {
        let classifier = LineClassifier::new();
        let mut output = Vec::new();

        let result = classifier.run_file("/nonexistent/valence/input.txt", &mut output);

        assert!(matches!(result, Err(ClassifierError::Open { .. })));
        assert!(output.is_empty());
    }

    #[test]
    fn test_classify_record() {
        let classifier = LineClassifier::new();
        assert_eq!(
            classifier.classify_record(&Record::new(1, b"x -50")).unwrap(),
            Label::Neg
        );
        assert_eq!(
            classifier.classify_record(&Record::new(1, b"x 49")).unwrap(),
            Label::Neu
        );
    }
}
