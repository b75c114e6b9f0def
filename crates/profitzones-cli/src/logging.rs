use crate::error::{CliError, Result};
use std::fs::File;
use std::io::IsTerminal;
use std::path::Path;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn open_log_file(path: &Path) -> Result<File> {
    File::create(path).map_err(|e| CliError::FileWriting {
        kind: "log file",
        path: path.to_path_buf(),
        source: e.into(),
    })
}

/// Installs the global subscriber: compact events on stderr, plus a plain
/// copy with thread ids when `log_file` is given.
///
/// Colors are used only when stderr is a terminal. Fails if a global
/// subscriber is already installed.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    let file_layer = log_file
        .map(open_log_file)
        .transpose()?
        .map(|file| {
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_thread_ids(true)
        });

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(level_filter(verbosity, quiet))
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to install logger: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tracing::debug;

    #[test]
    fn verbosity_maps_to_level_filters() {
        assert_eq!(level_filter(0, false), LevelFilter::WARN);
        assert_eq!(level_filter(1, false), LevelFilter::INFO);
        assert_eq!(level_filter(2, false), LevelFilter::DEBUG);
        assert_eq!(level_filter(7, false), LevelFilter::TRACE);
        assert_eq!(level_filter(3, true), LevelFilter::OFF);
    }

    #[test]
    #[serial]
    fn global_logger_installs_once() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("run.log");

        // Whichever call comes first in this process wins; the next must fail.
        let _ = setup_logging(0, false, Some(&log_path));
        let second = setup_logging(0, false, None);
        assert!(matches!(second, Err(CliError::Other(_))));
    }

    #[test]
    #[serial]
    fn file_layer_writes_plain_events_with_thread_ids() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let file_layer = fmt::layer()
            .with_writer(open_log_file(&log_path).unwrap())
            .with_ansi(false)
            .with_thread_ids(true);
        let subscriber = tracing_subscriber::registry().with(file_layer);

        tracing::subscriber::with_default(subscriber, || {
            debug!("Mapped 3 zone(s).");
        });

        let content = std::fs::read_to_string(log_path).unwrap();
        assert!(content.contains("Mapped 3 zone(s)."));
        assert!(content.contains("DEBUG"));
        assert!(content.contains("ThreadId"));
        assert!(!content.contains('\u{1b}'));
    }

    #[test]
    #[serial]
    fn unwritable_log_file_names_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = setup_logging(0, false, Some(dir.path())).unwrap_err();
        assert!(matches!(err, CliError::FileWriting { kind: "log file", .. }));
        assert!(err.to_string().contains(&dir.path().display().to_string()));
    }
}
