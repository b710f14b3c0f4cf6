use std::fs;
use std::path::{Path, PathBuf};
use surveyscope_analyzer::{load_analysis, AnalysisResult, SurveyAnalyzer};
use surveyscope_core::config::Config;
use surveyscope_core::{AppError, AppResult};
use tracing::info;

pub fn input_path(csv: Option<PathBuf>, config: &Config) -> PathBuf {
    csv.unwrap_or_else(|| config.input.clone())
}

pub fn load_result(
    csv: Option<PathBuf>,
    analysis: Option<PathBuf>,
    config: &Config,
) -> AppResult<AnalysisResult> {
    match analysis {
        Some(path) => {
            let output = load_analysis(&path)?;
            info!(path = %path.display(), source = %output.source, "loaded saved analysis");
            Ok(output.to_result())
        }
        None => Ok(SurveyAnalyzer::new().analyze(&input_path(csv, config))),
    }
}

pub fn top_n(flag: Option<usize>, default: usize) -> AppResult<usize> {
    match flag {
        Some(0) => Err(AppError::usage("--top must be > 0")),
        Some(n) => Ok(n),
        None => Ok(default),
    }
}

pub fn write_output(path: &Path, contents: &str, what: &str) -> AppResult<()> {
    if path.is_dir() {
        return Err(AppError::validation(format!(
            "{what} output path is a directory"
        )));
    }
    fs::write(path, contents)
        .map_err(|e| AppError::internal(format!("failed to write {}: {e}", path.display())))?;
    info!(path = %path.display(), "{what} written");
    Ok(())
}
