//! Rolling File Logger
//!
//! Installs a `tracing` subscriber that writes to a size-rotated set of log
//! files and stderr. Records emitted through the `log` facade are bridged
//! into the same subscriber. The most recent lines are also kept in a small
//! in-memory ring so an application can show them without reading files.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

/// Size at which the active log file is rotated
pub const MAX_FILE_BYTES: u64 = 1024 * 1024;
/// Number of files kept, including the active one
pub const MAX_FILES: usize = 5;
/// Number of lines kept in the in-memory ring
pub const RECENT_CAPACITY: usize = 200;

static APP_NAME: OnceLock<String> = OnceLock::new();
static RECENT: Mutex<VecDeque<String>> = Mutex::new(VecDeque::new());

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("failed to open log directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("logger already initialized")]
    AlreadyInitialized,
    #[error("logger not initialized")]
    NotInitialized,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A log file that rotates to `<stem>.1.log`, `<stem>.2.log`, ... once it
/// grows past `max_bytes`. The oldest file is dropped.
pub struct RollingFile {
    dir: PathBuf,
    stem: String,
    file: File,
    written: u64,
    max_bytes: u64,
    max_files: usize,
}

impl RollingFile {
    pub fn open(dir: &Path, stem: &str, max_bytes: u64, max_files: usize) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{stem}.log"));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            dir: dir.to_path_buf(),
            stem: stem.to_string(),
            file,
            written,
            max_bytes,
            max_files: max_files.max(1),
        })
    }

    /// Path of the file at `index` (0 = active file)
    pub fn path_for(&self, index: usize) -> PathBuf {
        if index == 0 {
            self.dir.join(format!("{}.log", self.stem))
        } else {
            self.dir.join(format!("{}.{}.log", self.stem, index))
        }
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        let oldest = self.path_for(self.max_files - 1);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (0..self.max_files - 1).rev() {
            let from = self.path_for(index);
            if from.exists() {
                fs::rename(&from, self.path_for(index + 1))?;
            }
        }
        self.file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.path_for(0))?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Writer feeding the in-memory ring of recent lines
pub struct RecentLines;

impl Write for RecentLines {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        let mut recent = lock(&RECENT);
        for line in text.lines().filter(|line| !line.trim().is_empty()) {
            if recent.len() == RECENT_CAPACITY {
                recent.pop_front();
            }
            recent.push_back(line.to_string());
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Initialize the global logger writing to `log_dir/<app_name>.log`.
///
/// The filter honours `RUST_LOG` and defaults to `info`.
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), LoggerError> {
    let log_dir = log_dir.as_ref();
    let stem = app_name.to_lowercase();
    let file = RollingFile::open(log_dir, &stem, MAX_FILE_BYTES, MAX_FILES).map_err(|source| {
        LoggerError::Io {
            path: log_dir.to_path_buf(),
            source,
        }
    })?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let writer = Mutex::new(file).and(io::stderr).and(|| RecentLines);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S%.3f".to_string()))
        .with_writer(writer)
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    let _ = APP_NAME.set(app_name.to_string());
    tracing::info!(
        app = app_name,
        started = %chrono::Local::now().to_rfc3339(),
        "logger initialized"
    );
    Ok(())
}

/// Log an info line under the application name
pub fn info(message: &str) -> Result<(), LoggerError> {
    let app = APP_NAME.get().ok_or(LoggerError::NotInitialized)?;
    tracing::info!(app = app.as_str(), "{message}");
    Ok(())
}

/// Log an error line under the application name
pub fn error(message: &str) -> Result<(), LoggerError> {
    let app = APP_NAME.get().ok_or(LoggerError::NotInitialized)?;
    tracing::error!(app = app.as_str(), "{message}");
    Ok(())
}

/// Most recent log lines, oldest first
pub fn recent_lines() -> Vec<String> {
    lock(&RECENT).iter().cloned().collect()
}
