use crate::input::{input_path, top_n};
use std::path::PathBuf;
use surveyscope_analyzer::{analyze_to_output, write_analysis, SurveyAnalyzer};
use surveyscope_core::config::Config;
use surveyscope_core::{AppError, AppResult};
use surveyscope_report::render_console;

pub fn analyze_command(
    csv: Option<PathBuf>,
    out: Option<PathBuf>,
    top: Option<usize>,
    overwrite: bool,
    config: &Config,
) -> AppResult<()> {
    let top = top_n(top, config.report.console_top_n)?;
    let out_path = out.unwrap_or_else(|| config.report.analysis_path.clone());
    if out_path.exists() && out_path.is_dir() {
        return Err(AppError::validation("analysis output path is a directory"));
    }
    if out_path.exists() && !overwrite {
        return Err(AppError::usage(
            "analysis.json already exists; use --overwrite to replace",
        ));
    }

    let input = input_path(csv, config);
    let (result, output) = analyze_to_output(&SurveyAnalyzer::new(), &input)?;
    print!("{}", render_console(&result, top));
    write_analysis(&output, &out_path)
}
