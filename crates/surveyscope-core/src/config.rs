use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

pub const DEFAULT_INPUT: &str = "survey_data.csv";
pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/yourusername/sentiment-analysis";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub input: PathBuf,
    pub report: ReportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            report: ReportConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let config = if let Some(path) = path {
            let data = std::fs::read_to_string(path).map_err(|e| {
                AppError::usage(format!("failed to read config {}: {e}", path.display()))
            })?;
            serde_yaml::from_str::<Config>(&data).map_err(|e| {
                AppError::usage(format!("failed to parse config {}: {e}", path.display()))
            })?
        } else {
            Config::default()
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.input.as_os_str().is_empty() {
            return Err(AppError::usage("input must not be empty"));
        }
        self.report.validate()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub console_top_n: usize,
    pub wordcloud_top_n: usize,
    pub poster_top_n: usize,
    pub wordcloud_path: PathBuf,
    pub poster_path: PathBuf,
    pub analysis_path: PathBuf,
    pub repository_url: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            console_top_n: 20,
            wordcloud_top_n: 30,
            poster_top_n: 25,
            wordcloud_path: PathBuf::from("wordcloud.html"),
            poster_path: PathBuf::from("poster.html"),
            analysis_path: PathBuf::from("analysis.json"),
            repository_url: DEFAULT_REPOSITORY_URL.to_string(),
        }
    }
}

impl ReportConfig {
    pub fn validate(&self) -> AppResult<()> {
        for (field, value) in [
            ("report.console_top_n", self.console_top_n),
            ("report.wordcloud_top_n", self.wordcloud_top_n),
            ("report.poster_top_n", self.poster_top_n),
        ] {
            if value == 0 {
                return Err(AppError::usage(format!("{field} must be > 0")));
            }
        }
        validate_repository_url(&self.repository_url)
    }
}

pub fn validate_repository_url(value: &str) -> AppResult<()> {
    let url = Url::parse(value).map_err(|e| {
        AppError::usage(format!("invalid repository url '{value}': {e}"))
    })?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(AppError::usage(format!(
            "invalid repository url '{value}'; unsupported scheme {scheme}"
        ))),
    }
}
