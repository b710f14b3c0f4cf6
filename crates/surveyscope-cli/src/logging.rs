use surveyscope_core::{AppError, AppResult};
use tracing_subscriber::EnvFilter;

pub fn init(level: &str, format: &str) -> AppResult<()> {
    let filter = EnvFilter::try_new(level)
        .map_err(|e| AppError::usage(format!("invalid --log-level '{level}': {e}")))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let installed = match format {
        "json" => builder.json().try_init(),
        _ => builder.try_init(),
    };
    installed.map_err(|e| AppError::internal(format!("failed to initialize logging: {e}")))
}
