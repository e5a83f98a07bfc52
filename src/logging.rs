use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log records go.
#[derive(Debug, Clone)]
pub enum LogTarget {
    Stderr,
    /// Appends to a file. Used while the TUI owns the terminal.
    File(PathBuf),
}

/// Install the global subscriber. `RUST_LOG` overrides the `info` default.
///
/// A second call is a no-op.
pub fn init_tracing(target: LogTarget) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339());

    match target {
        LogTarget::Stderr => builder.with_writer(io::stderr).try_init().ok(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .ok()
        }
    };
    Ok(())
}
