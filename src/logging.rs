use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

// Conditional logging macros - only active in debug builds

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

const LOG_DIR_NAME: &str = "hangman";
const LOG_FILE_NAME: &str = "hangman.log";

/// Default log location: `<cache dir>/hangman/hangman.log`.
#[must_use]
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(LOG_DIR_NAME).join(LOG_FILE_NAME))
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Send `log` records to a file so they never land on the game screen.
///
/// The level comes from `RUST_LOG` and defaults to `info`. Returns the path
/// actually used, or `None` when no location could be determined.
///
/// # Errors
/// Returns an error if the log file cannot be created.
pub fn init(path: Option<&Path>) -> io::Result<Option<PathBuf>> {
    let Some(path) = path.map(Path::to_path_buf).or_else(default_log_path) else {
        return Ok(None);
    };
    let file = open_log_file(&path)?;

    let env = env_logger::Env::default().default_filter_or("info");
    let result = env_logger::Builder::from_env(env)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();

    // A logger installed earlier (e.g. by a test harness) stays in place.
    if result.is_err() {
        return Ok(None);
    }
    info_log!("Logging to {}", path.display());
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_path_file_name() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("hangman/hangman.log"));
        }
    }

    #[test]
    fn test_open_log_file_creates_parent() {
        let dir = std::env::temp_dir().join("hangman_logging_test");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("nested").join("test.log");

        let mut file = open_log_file(&path).unwrap();
        writeln!(file, "hello").unwrap();
        assert!(path.exists());

        let _ = fs::remove_dir_all(&dir);
    }
}
