use crate::input::{load_result, top_n, write_output};
use std::path::PathBuf;
use surveyscope_core::config::{validate_repository_url, Config};
use surveyscope_core::AppResult;
use surveyscope_report::{render_console, render_poster, PosterOptions};

pub fn poster_command(
    csv: Option<PathBuf>,
    analysis: Option<PathBuf>,
    out: Option<PathBuf>,
    repo_url: Option<String>,
    top: Option<usize>,
    config: &Config,
) -> AppResult<()> {
    let repository_url = repo_url.unwrap_or_else(|| config.report.repository_url.clone());
    validate_repository_url(&repository_url)?;
    let options = PosterOptions {
        repository_url,
        top_n: top_n(top, config.report.poster_top_n)?,
    };
    let out_path = out.unwrap_or_else(|| config.report.poster_path.clone());

    let result = load_result(csv, analysis, config)?;
    print!("{}", render_console(&result, config.report.console_top_n));
    write_output(&out_path, &render_poster(&result, &options), "poster")?;
    println!(
        "\n{} - A4 poster; open it in a browser and print to PDF or save as image.",
        out_path.display()
    );
    Ok(())
}
