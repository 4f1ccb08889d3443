use crate::config::{LoggingConfig, Section};
use std::{
    io::Write,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};
use tracing::Level;
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

use file_rotate::{
    compression::Compression,
    suffix::AppendCount,
    ContentLimit, FileRotate,
};

// -------- level helpers --------
fn parse_tracing_level(s: &str) -> Option<Level> {
    match s.to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        "off" | "none" => None,
        _ => Some(Level::INFO),
    }
}

// -------- rotating writer for files --------
#[derive(Clone)]
struct RotWriter(Arc<Mutex<FileRotate<AppendCount>>>);

impl<'a> fmt::MakeWriter<'a> for RotWriter {
    type Writer = RotWriterHandle;
    fn make_writer(&'a self) -> Self::Writer {
        RotWriterHandle(self.0.clone())
    }
}

#[derive(Clone)]
struct RotWriterHandle(Arc<Mutex<FileRotate<AppendCount>>>);

impl Write for RotWriterHandle {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0.lock().unwrap().flush()
    }
}

// -------- path resolution helpers --------

/// Resolve a log file path against `base_dir` (home_dir).
/// Absolute paths are kept as-is; relative paths are joined with `base_dir`.
fn resolve_log_path(file: &str, base_dir: &Path) -> PathBuf {
    let p = Path::new(file);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        base_dir.join(p)
    }
}

/// Create a rotating writer, ensuring the parent directory exists.
fn create_rotating_writer(
    log_path: &Path,
    max_bytes: usize,
    max_backups: usize,
) -> std::io::Result<RotWriter> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let rot = FileRotate::new(
        log_path,
        AppendCount::new(max_backups),
        ContentLimit::BytesSurpassed(max_bytes),
        Compression::None,
        #[cfg(unix)]
        None, // file permissions (Unix only)
    );

    Ok(RotWriter(Arc::new(Mutex::new(rot))))
}

/// Initialize global tracing from the "default" logging section:
/// a console fmt layer plus an optional rotating file sink.
///
/// Repeated calls are harmless (later calls keep the first subscriber),
/// which keeps test setups simple.
pub fn init_logging_from_config(cfg: &LoggingConfig, home_dir: &Path) {
    let section = cfg.get("default").cloned().unwrap_or(Section {
        console_level: "info".to_string(),
        file: String::new(),
        file_level: String::new(),
        max_backups: None,
        max_size_mb: None,
    });

    let console_level = parse_tracing_level(&section.console_level);
    let file_level = if section.file_level.trim().is_empty() {
        console_level
    } else {
        parse_tracing_level(&section.file_level)
    };

    let console_layer = console_level.map(|lvl| {
        fmt::layer()
            .with_target(true)
            .with_filter(LevelFilter::from_level(lvl))
    });

    let file_layer = match (file_level, section.file.trim()) {
        (Some(lvl), file) if !file.is_empty() => {
            let path = resolve_log_path(file, home_dir);
            let max_bytes = section.max_size_mb.unwrap_or(100) as usize * 1024 * 1024;
            let max_backups = section.max_backups.unwrap_or(3);
            match create_rotating_writer(&path, max_bytes, max_backups) {
                Ok(writer) => Some(
                    fmt::layer()
                        .with_ansi(false)
                        .with_writer(writer)
                        .with_filter(LevelFilter::from_level(lvl)),
                ),
                Err(e) => {
                    eprintln!("cannot open log file {}: {}", path.display(), e);
                    None
                }
            }
        }
        _ => None,
    };

    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_levels() {
        assert_eq!(parse_tracing_level("trace"), Some(Level::TRACE));
        assert_eq!(parse_tracing_level("DEBUG"), Some(Level::DEBUG));
        assert_eq!(parse_tracing_level("off"), None);
        assert_eq!(parse_tracing_level("none"), None);
        // Unknown strings fall back to info
        assert_eq!(parse_tracing_level("verbose"), Some(Level::INFO));
    }

    #[test]
    fn log_paths_resolve_against_home_dir() {
        let base = Path::new("/srv/amistad");
        assert_eq!(
            resolve_log_path("logs/api.log", base),
            PathBuf::from("/srv/amistad/logs/api.log")
        );
        assert_eq!(
            resolve_log_path("/var/log/amistad.log", base),
            PathBuf::from("/var/log/amistad.log")
        );
    }

    #[test]
    fn init_with_file_sink_writes_through() {
        let tmp = tempfile::tempdir().unwrap();
        let mut cfg = LoggingConfig::new();
        cfg.insert(
            "default".to_string(),
            Section {
                console_level: "off".to_string(),
                file: "logs/test.log".to_string(),
                file_level: "debug".to_string(),
                max_backups: Some(1),
                max_size_mb: Some(1),
            },
        );

        init_logging_from_config(&cfg, tmp.path());
        tracing::info!("logging smoke test");
        assert!(tmp.path().join("logs").exists());
    }
}
