use std::io::Write;

use anyhow::Context;
use workout_tracker::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("reading WORKOUT_TRACKER_* environment")?;

    // stdout carries the summaries, so logs go to stderr
    let env_filter = tracing_subscriber::EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::debug!("workout-tracker: log filter: {}", config.log_level);

    let packages = config.load_packages().with_context(|| match &config.packages_path {
        Some(path) => format!("loading sensor packages from {}", path.display()),
        None => "loading sample packages".to_string(),
    })?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    workout_tracker::run(&packages, config.output, &mut out)
        .context("summarizing sensor packages")?;
    out.flush()?;

    Ok(())
}
