use crate::input::{load_result, top_n, write_output};
use std::path::PathBuf;
use surveyscope_core::config::Config;
use surveyscope_core::AppResult;
use surveyscope_report::{render_console, render_wordcloud};

pub fn report_command(
    csv: Option<PathBuf>,
    analysis: Option<PathBuf>,
    out: Option<PathBuf>,
    top: Option<usize>,
    config: &Config,
) -> AppResult<()> {
    let top = top_n(top, config.report.wordcloud_top_n)?;
    let out_path = out.unwrap_or_else(|| config.report.wordcloud_path.clone());

    let result = load_result(csv, analysis, config)?;
    print!("{}", render_console(&result, config.report.console_top_n));
    write_output(&out_path, &render_wordcloud(&result, top), "word cloud")?;
    println!(
        "\nOpen '{}' in a browser to see the word cloud.",
        out_path.display()
    );
    Ok(())
}
