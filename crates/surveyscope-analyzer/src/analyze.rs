use crate::csv_line::parse_line;
use crate::lexicon::{classify, Lexicon};
use crate::model::{AnalysisOutput, AnalysisResult};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use surveyscope_core::json::{determinism_hash, to_canonical_json_bytes, verify_determinism_hash};
use surveyscope_core::{AppError, AppResult};
use tracing::{error, info, warn};

const CHOICE_FIELD: usize = 3;
const REASON_FIELD: usize = 4;
const MIN_FIELDS: usize = CHOICE_FIELD + 1;
const CHOICE_TRIM: &[char] = &[' ', '\t', '\r', '\n'];

#[derive(Debug, Clone, Default)]
pub struct SurveyAnalyzer {
    lexicon: Lexicon,
}

impl SurveyAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn analyze(&self, path: &Path) -> AnalysisResult {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) => {
                error!(path = %path.display(), error = %err, "could not open survey file");
                return AnalysisResult::default();
            }
        };
        info!(path = %path.display(), "reading survey file");
        self.analyze_reader(BufReader::new(file))
    }

    pub fn analyze_reader<R: BufRead>(&self, mut reader: R) -> AnalysisResult {
        let mut result = AnalysisResult::default();
        let mut buf = Vec::new();
        let mut header_seen = false;
        let mut line_no = 0u64;

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(err) => {
                    warn!(error = %err, line = line_no, "read failed; keeping rows read so far");
                    break;
                }
            }
            if !header_seen {
                header_seen = true;
                continue;
            }
            let line = decode_line(&buf);
            if line.is_empty() {
                continue;
            }
            line_no += 1;
            self.process_line(line_no, &line, &mut result);
        }

        info!(
            processed = result.processed_rows(),
            skipped = result.skipped_rows,
            distinct_words = result.word_frequency.len(),
            "processed survey responses"
        );
        result
    }

    fn process_line(&self, line_no: u64, line: &str, result: &mut AnalysisResult) {
        let fields = parse_line(line);
        if fields.len() < MIN_FIELDS {
            result.skipped_rows += 1;
            return;
        }

        let choice = fields[CHOICE_FIELD].trim_matches(CHOICE_TRIM);
        info!(line = line_no, choice, "sentiment choice");
        result.record(classify(choice));

        let reason = fields.get(REASON_FIELD).map(String::as_str).unwrap_or("");
        self.lexicon.accumulate(reason, &mut result.word_frequency);
    }
}

fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw)
}

impl AnalysisOutput {
    pub fn from_result(result: &AnalysisResult, source: &Path) -> AppResult<Self> {
        let mut output = Self {
            source: source.display().to_string(),
            positive: result.positive,
            negative: result.negative,
            neutral: result.neutral,
            processed_rows: result.processed_rows(),
            skipped_rows: result.skipped_rows,
            word_frequency: result.word_frequency.clone(),
            determinism_hash: String::new(),
        };
        let value = serde_json::to_value(&output)
            .map_err(|e| AppError::internal(format!("analysis json encode error: {e}")))?;
        output.determinism_hash = determinism_hash(value)?;
        Ok(output)
    }

    pub fn to_result(&self) -> AnalysisResult {
        AnalysisResult {
            positive: self.positive,
            negative: self.negative,
            neutral: self.neutral,
            skipped_rows: self.skipped_rows,
            word_frequency: self.word_frequency.clone(),
        }
    }

    fn validate(&self) -> AppResult<()> {
        let total = self
            .positive
            .checked_add(self.negative)
            .and_then(|sum| sum.checked_add(self.neutral))
            .ok_or_else(|| AppError::validation("analysis.json sentiment counts overflow"))?;
        if total != self.processed_rows {
            return Err(AppError::validation(
                "analysis.json processed_rows does not match sentiment counts",
            ));
        }
        if self.word_frequency.values().any(|&count| count == 0) {
            return Err(AppError::validation(
                "analysis.json word_frequency contains a zero count",
            ));
        }
        Ok(())
    }
}

pub fn analyze_to_output(
    analyzer: &SurveyAnalyzer,
    input: &Path,
) -> AppResult<(AnalysisResult, AnalysisOutput)> {
    let result = analyzer.analyze(input);
    let output = AnalysisOutput::from_result(&result, input)?;
    Ok((result, output))
}

pub fn write_analysis(output: &AnalysisOutput, out_path: &Path) -> AppResult<()> {
    let bytes = to_canonical_json_bytes(output)?;
    std::fs::write(out_path, bytes)
        .map_err(|e| AppError::internal(format!("failed to write analysis.json: {e}")))
}

pub fn load_analysis(path: &Path) -> AppResult<AnalysisOutput> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| AppError::validation(format!("failed to read analysis.json: {e}")))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .map_err(|e| AppError::validation(format!("analysis.json parse error: {e}")))?;
    verify_determinism_hash(&value)?;
    let output: AnalysisOutput = serde_json::from_value(value)
        .map_err(|e| AppError::validation(format!("analysis.json decode error: {e}")))?;
    output.validate()?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sentiment;
    use std::collections::BTreeMap;
    use std::io::{self, Cursor, Read};
    use surveyscope_core::ErrorKind;
    use tempfile::tempdir;

    const SURVEY: &str = "\
Timestamp,Nama,Divisi,Suka checklock?,Alasan
2024-01-01,Ani,HR,\"Iya, saya suka!\",\"Praktis, cepat dan praktis\"
2024-01-01,Budi,IT,Tidak suka,Ribet dan sering error
2024-01-02,Citra,Ops,  Lumayan  ,
2024-01-02,Dodi,Ops
2024-01-03,Eka,IT,suka

";

    fn analyze_str(text: &str) -> AnalysisResult {
        SurveyAnalyzer::new().analyze_reader(Cursor::new(text.as_bytes()))
    }

    #[test]
    fn counts_each_row_once() {
        let result = analyze_str(SURVEY);
        assert_eq!(result.positive, 2);
        assert_eq!(result.negative, 1);
        assert_eq!(result.neutral, 1);
        assert_eq!(result.processed_rows(), 4);
        assert_eq!(result.skipped_rows, 1);
    }

    #[test]
    fn reason_words_are_counted() {
        let result = analyze_str(SURVEY);
        let freq = &result.word_frequency;
        assert_eq!(freq.get("praktis"), Some(&2));
        assert_eq!(freq.get("cepat"), Some(&1));
        assert_eq!(freq.get("ribet"), Some(&1));
        assert_eq!(freq.get("sering"), Some(&1));
        assert_eq!(freq.get("error"), Some(&1));
        assert!(!freq.contains_key("dan"));
        assert_eq!(freq.len(), 5);
    }

    #[test]
    fn header_is_skipped_even_if_it_looks_like_data() {
        let result = analyze_str("a,b,c,iya,enak\na,b,c,iya,enak\n");
        assert_eq!(result.processed_rows(), 1);
        assert_eq!(result.word_frequency.get("enak"), Some(&1));
    }

    #[test]
    fn header_only_file_is_empty() {
        let result = analyze_str("Timestamp,Nama,Divisi,Suka,Alasan\n");
        assert_eq!(result, AnalysisResult::default());
    }

    #[test]
    fn crlf_lines_are_handled() {
        let result = analyze_str("h\r\nx,y,z,Tidak suka,lambat sekali\r\n\r\n");
        assert_eq!(result.count(Sentiment::Negative), 1);
        assert_eq!(result.word_frequency.get("sekali"), Some(&1));
        assert_eq!(result.skipped_rows, 0);
    }

    #[test]
    fn missing_file_yields_empty_result() {
        let dir = tempdir().unwrap();
        let result = SurveyAnalyzer::new().analyze(&dir.path().join("absent.csv"));
        assert_eq!(result, AnalysisResult::default());
    }

    #[test]
    fn repeated_analysis_is_identical() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("survey_data.csv");
        std::fs::write(&path, SURVEY).unwrap();

        let analyzer = SurveyAnalyzer::new();
        let (first, first_out) = analyze_to_output(&analyzer, &path).unwrap();
        let (second, second_out) = analyze_to_output(&analyzer, &path).unwrap();
        assert_eq!(first, second);
        assert_eq!(first_out.determinism_hash, second_out.determinism_hash);
    }

    #[test]
    fn analysis_round_trips_through_disk() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("survey_data.csv");
        std::fs::write(&input, SURVEY).unwrap();
        let out_path = dir.path().join("analysis.json");

        let (result, output) = analyze_to_output(&SurveyAnalyzer::new(), &input).unwrap();
        write_analysis(&output, &out_path).unwrap();

        let loaded = load_analysis(&out_path).unwrap();
        assert_eq!(loaded.to_result(), result);
        assert_eq!(loaded.processed_rows, 4);
    }

    #[test]
    fn edited_analysis_is_rejected() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("survey_data.csv");
        std::fs::write(&input, SURVEY).unwrap();
        let out_path = dir.path().join("analysis.json");

        let (_, output) = analyze_to_output(&SurveyAnalyzer::new(), &input).unwrap();
        write_analysis(&output, &out_path).unwrap();
        let text = std::fs::read_to_string(&out_path).unwrap();
        std::fs::write(&out_path, text.replace("\"positive\":2", "\"positive\":9")).unwrap();

        let err = load_analysis(&out_path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let input: &[u8] = b"h\nx,y,z,iya,en\xffak mantap\n";
        let result = SurveyAnalyzer::new().analyze_reader(Cursor::new(input));
        assert_eq!(result.positive, 1);
        assert_eq!(result.word_frequency.get("enak"), Some(&1));
        assert_eq!(result.word_frequency.get("mantap"), Some(&1));
    }

    struct FailAfterFirstRead {
        data: Option<&'static [u8]>,
    }

    impl Read for FailAfterFirstRead {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.data.take() {
                Some(data) => {
                    let len = data.len().min(buf.len());
                    buf[..len].copy_from_slice(&data[..len]);
                    Ok(len)
                }
                None => Err(io::Error::new(io::ErrorKind::Other, "disk went away")),
            }
        }
    }

    #[test]
    fn read_error_keeps_rows_read_so_far() {
        let reader = FailAfterFirstRead {
            data: Some(b"h\nx,y,z,Tidak suka,lambat\n"),
        };
        let result = SurveyAnalyzer::new().analyze_reader(BufReader::new(reader));
        assert_eq!(result.negative, 1);
        assert_eq!(result.processed_rows(), 1);
        assert_eq!(result.word_frequency.get("lambat"), Some(&1));
    }

    #[test]
    fn overflowing_counts_are_rejected() {
        let dir = tempdir().unwrap();
        let out_path = dir.path().join("analysis.json");
        let mut output = AnalysisOutput {
            source: "survey_data.csv".to_string(),
            positive: u64::MAX,
            negative: 1,
            neutral: 0,
            processed_rows: 0,
            skipped_rows: 0,
            word_frequency: BTreeMap::new(),
            determinism_hash: String::new(),
        };
        output.determinism_hash = determinism_hash(serde_json::to_value(&output).unwrap()).unwrap();
        write_analysis(&output, &out_path).unwrap();

        let err = load_analysis(&out_path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.message().contains("overflow"));
    }
}
