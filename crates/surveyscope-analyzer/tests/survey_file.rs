use std::fs;
use surveyscope_analyzer::{ranked_words, summary_percentages, SurveyAnalyzer};
use tempfile::tempdir;

const SURVEY: &str = "\
Timestamp,Nama,Divisi,Apakah kamu suka menggunakan checklock?,Alasan
2024-03-01 08:00,Ani,HR,\"Iya, saya suka!\",\"Praktis, tidak perlu antri lagi\"
2024-03-01 08:05,Budi,IT,Tidak suka,\"Sering error, lambat, dan ribet\"
2024-03-01 08:10,Citra,Finance,Biasa saja,Kadang lambat
2024-03-01 08:15,Dodi,IT,Suka,Praktis dan modern
2024-03-01 08:20,Eka,Ops
2024-03-01 08:25,Fajar,Ops,iya,
";

#[test]
fn every_processed_row_lands_in_one_bucket() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("survey_data.csv");
    fs::write(&path, SURVEY).unwrap();

    let result = SurveyAnalyzer::new().analyze(&path);
    assert_eq!(result.positive, 3);
    assert_eq!(result.negative, 1);
    assert_eq!(result.neutral, 1);
    assert_eq!(result.processed_rows(), 5);
    assert_eq!(result.skipped_rows, 1);

    let pct = summary_percentages(&result);
    assert_eq!(pct.positive, 60.0);
    assert_eq!(pct.negative + pct.neutral, 40.0);
}

#[test]
fn ranked_reason_words() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("survey_data.csv");
    fs::write(&path, SURVEY).unwrap();

    let result = SurveyAnalyzer::new().analyze(&path);
    let ranked = ranked_words(&result.word_frequency);
    let top: Vec<(&str, u64)> = ranked
        .iter()
        .take(3)
        .map(|w| (w.word.as_str(), w.count))
        .collect();
    assert_eq!(top, [("lambat", 2), ("praktis", 2), ("antri", 1)]);
    assert!(!result.word_frequency.contains_key("tidak"));
    assert!(!result.word_frequency.contains_key("dan"));
}

#[test]
fn analysis_is_repeatable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("survey_data.csv");
    fs::write(&path, SURVEY).unwrap();

    let analyzer = SurveyAnalyzer::new();
    assert_eq!(analyzer.analyze(&path), analyzer.analyze(&path));
}
