use anyhow::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Initializes the global tracing subscriber. Defaults to INFO; override
/// with the `LOG_LEVEL` environment variable.
pub fn init_logging() -> Result<()> {
    let level = std::env::var("LOG_LEVEL")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_line_number(true)
        .with_file(true)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
