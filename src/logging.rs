//! Logging setup.
//!
//! The TUI owns the terminal, so interactive runs log to
//! `~/.shorty/shorty.log`. One-shot commands log to stderr. The filter
//! comes from [`crate::config::ClientConfig::log_filter`].

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to a file
    File(PathBuf),
    /// Standard error
    Stderr,
}

/// `~/.shorty/shorty.log`, if a home directory is known.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".shorty").join("shorty.log"))
}

/// Install the global subscriber.
///
/// Returns the writer guard, which must stay alive until exit so buffered
/// lines are flushed. Failure is reported on stderr and leaves logging off.
pub fn init_logging(target: &LogTarget, filter: &str) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|e| {
        eprintln!("Invalid log filter {:?} ({}), using \"info\"", filter, e);
        EnvFilter::new("info")
    });

    let (writer, guard, ansi) = match target {
        LogTarget::File(path) => match open_log_file(path) {
            Ok(file) => {
                let (writer, guard) = tracing_appender::non_blocking(file);
                (writer, guard, false)
            }
            Err(e) => {
                eprintln!("Logging disabled: cannot open {}: {}", path.display(), e);
                return None;
            }
        },
        LogTarget::Stderr => {
            let (writer, guard) = tracing_appender::non_blocking(io::stderr());
            (writer, guard, true)
        }
    };

    let installed = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(false)
        .try_init();

    match installed {
        Ok(()) => Some(guard),
        Err(e) => {
            eprintln!("Logging disabled: {}", e);
            None
        }
    }
}

fn open_log_file(path: &Path) -> io::Result<std::fs::File> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_path_ends_with_file_name() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with(".shorty/shorty.log"));
        }
    }

    #[test]
    fn test_open_log_file_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("shorty.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
