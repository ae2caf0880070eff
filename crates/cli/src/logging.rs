use std::fs::OpenOptions;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use zk_core::LoggingConfig;

/// Install the global subscriber.
///
/// Notices go to stderr at the configured level (`RUST_LOG` overrides it).
/// `quiet` caps stderr at warnings, even over `RUST_LOG`, so `--vim` output
/// stays bare. When a log
/// file is configured, it receives everything at the configured level; the
/// returned guard must be held until exit so buffered lines are flushed.
#[must_use]
pub fn init(cfg: &LoggingConfig, quiet: bool) -> Option<WorkerGuard> {
    let level = parse_level(&cfg.level).unwrap_or(LevelFilter::INFO);
    let stderr_filter =
        EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::env::var_os("NO_COLOR").is_none())
        .with_target(false)
        .without_time()
        .with_filter(stderr_filter)
        .with_filter(stderr_cap(quiet));

    let registry = tracing_subscriber::registry().with(stderr_layer);

    let file = cfg.file.as_deref().and_then(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| eprintln!("Failed to open log file {}: {}", path.display(), e))
            .ok()
    });

    if let Some(file) = file {
        let file_filter =
            EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();

        let (non_blocking, guard) = tracing_appender::non_blocking(file);

        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
            .with_filter(file_filter);

        registry.with(file_layer).init();
        Some(guard)
    } else {
        registry.init();
        None
    }
}

/// Ceiling applied to stderr after the env filter.
fn stderr_cap(quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::WARN
    } else {
        LevelFilter::TRACE
    }
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.to_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}
