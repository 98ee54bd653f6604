use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the stderr subscriber used by the binary.
///
/// `RUST_LOG` or `BFS_PATHS_LOG` override the level picked from the flags.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let level = match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("bfs_paths={}", level),
        (true, None) => "bfs_paths=debug".to_string(),
        (false, None) => "bfs_paths=warn".to_string(),
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("BFS_PATHS_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;
    Ok(())
}
