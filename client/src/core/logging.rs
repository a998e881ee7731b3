//! File-based logging initialization

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::ClientConfig;

/// Keeps the non-blocking file writer alive. Drop it only at shutdown.
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Initialize the logging system
///
/// Sets up:
/// - Daily-rotated `bakery-client.log` in the configured log directory
/// - Compact stderr output for interactive runs
/// - `EnvFilter` from `RUST_LOG`, falling back to the configured level
/// - Panic hook that routes panics through `tracing`
///
/// If the log directory cannot be created, logging continues on stderr only.
pub fn init(config: &ClientConfig) -> LogGuard {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("bakery_client=info,warn"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let registry = tracing_subscriber::registry().with(env_filter).with(stderr_layer);

    let guard = match fs::create_dir_all(&config.log_dir) {
        Ok(()) => {
            let file_appender = tracing_appender::rolling::daily(&config.log_dir, "bakery-client.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false);

            if registry.with(file_layer).try_init().is_err() {
                eprintln!("Warning: a global tracing subscriber was already installed");
            }
            Some(guard)
        }
        Err(e) => {
            eprintln!("Warning: Failed to create log directory: {}", e);
            if registry.try_init().is_err() {
                eprintln!("Warning: a global tracing subscriber was already installed");
            }
            None
        }
    };

    tracing::info!(
        log_dir = %config.log_dir.display(),
        log_level = %config.log_level,
        api_url = %config.api_url,
        "Logging initialized"
    );

    setup_panic_hook();

    LogGuard { _file: guard }
}

/// Set up panic hook to log panics with their location
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(location = %location, message = %message, "Application panic");

        default_panic(panic_info);
    }));
}
