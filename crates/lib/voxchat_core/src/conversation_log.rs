//! Daily conversation log.
//!
//! Each calendar day (local time) gets one `conversation_log_YYYYMMDD.json`
//! file holding a JSON array of [`LogEntry`]. Appends read the whole array,
//! push one entry and replace the file through a temp file + rename, so a
//! reader never observes a half-written array. A process-wide mutex
//! serialises the read-modify-write cycle.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, warn};

/// One user/assistant exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Local time of the exchange, RFC 3339.
    pub timestamp: String,
    pub user_message: String,
    pub ai_response: String,
}

impl LogEntry {
    pub fn new(at: DateTime<Local>, user_message: &str, ai_response: &str) -> Self {
        Self {
            timestamp: at.to_rfc3339(),
            user_message: user_message.to_string(),
            ai_response: ai_response.to_string(),
        }
    }
}

/// Errors that can occur while writing the log.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Log task failed: {0}")]
    Task(String),
}

/// Append-only store of exchanges, one file per day.
#[derive(Debug, Clone)]
pub struct ConversationLog {
    dir: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl ConversationLog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Log file for the given day.
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir
            .join(format!("conversation_log_{}.json", date.format("%Y%m%d")))
    }

    /// Append one exchange to today's file. Returns the file written.
    pub async fn append(&self, user_message: &str, ai_response: &str) -> Result<PathBuf, LogError> {
        let now = Local::now();
        let entry = LogEntry::new(now, user_message, ai_response);
        let path = self.path_for(now.date_naive());
        let dir = self.dir.clone();
        let lock = Arc::clone(&self.lock);

        tokio::task::spawn_blocking(move || {
            let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
            append_entry(&dir, &path, entry)?;
            Ok(path)
        })
        .await
        .map_err(|e| LogError::Task(e.to_string()))?
    }

    /// Best-effort [`append`](Self::append): failures are logged, never
    /// returned.
    pub async fn record(&self, user_message: &str, ai_response: &str) {
        match self.append(user_message, ai_response).await {
            Ok(path) => debug!(path = %path.display(), "conversation logged"),
            Err(e) => warn!(error = %e, dir = %self.dir.display(), "failed to log conversation"),
        }
    }
}

/// Read all entries from `path`. A missing file is empty; an unparsable one
/// is discarded.
pub fn read_entries(path: &Path) -> Result<Vec<LogEntry>, LogError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    match serde_json::from_slice(&bytes) {
        Ok(entries) => Ok(entries),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "discarding unreadable conversation log");
            Ok(Vec::new())
        }
    }
}

fn append_entry(dir: &Path, path: &Path, entry: LogEntry) -> Result<(), LogError> {
    fs::create_dir_all(dir)?;

    let mut entries = read_entries(path)?;
    entries.push(entry);

    let mut tmp = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut tmp, &entries)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| LogError::Io(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_uses_compact_date() {
        let log = ConversationLog::new("/var/log/voxchat");
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(
            log.path_for(date),
            PathBuf::from("/var/log/voxchat/conversation_log_20250307.json")
        );
    }

    #[tokio::test]
    async fn first_append_creates_file_with_one_entry() {
        let dir = tempfile::tempdir().unwrap();
        let log = ConversationLog::new(dir.path().join("logs"));

        let path = log.append("hi", "hello").await.unwrap();

        let entries = read_entries(&path).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].user_message, "hi");
        assert_eq!(entries[0].ai_response, "hello");
        assert!(DateTime::parse_from_rfc3339(&entries[0].timestamp).is_ok());
    }

    #[tokio::test]
    async fn append_adds_exactly_one_entry() {
        let dir = tempfile::tempdir().unwrap();
        let log = ConversationLog::new(dir.path());

        log.append("one", "1").await.unwrap();
        let path = log.append("two", "2").await.unwrap();

        let entries = read_entries(&path).unwrap();
        let messages: Vec<_> = entries.iter().map(|e| e.user_message.as_str()).collect();
        assert_eq!(messages, ["one", "two"]);
    }

    #[tokio::test]
    async fn corrupted_file_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let log = ConversationLog::new(dir.path());
        let path = log.path_for(Local::now().date_naive());
        fs::write(&path, b"{ not json").unwrap();

        let written = log.append("fresh", "start").await.unwrap();

        let entries = read_entries(&written).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].user_message, "fresh");
    }

    #[tokio::test]
    async fn empty_file_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let log = ConversationLog::new(dir.path());
        fs::write(log.path_for(Local::now().date_naive()), b"").unwrap();

        let written = log.append("a", "b").await.unwrap();
        assert_eq!(read_entries(&written).unwrap().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_appends_are_not_lost() {
        let dir = tempfile::tempdir().unwrap();
        let log = ConversationLog::new(dir.path());

        let tasks: Vec<_> = (0..20)
            .map(|i| {
                let log = log.clone();
                tokio::spawn(async move { log.append(&format!("m{i}"), "r").await })
            })
            .collect();

        let mut path = None;
        for task in tasks {
            path = Some(task.await.unwrap().unwrap());
        }

        let entries = read_entries(&path.unwrap()).unwrap();
        assert_eq!(entries.len(), 20);
    }

    #[tokio::test]
    async fn record_swallows_errors() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the log directory should be.
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, b"x").unwrap();

        let log = ConversationLog::new(&blocker);
        assert!(log.append("a", "b").await.is_err());
        log.record("a", "b").await;
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_entries(&dir.path().join("absent.json")).unwrap().is_empty());
    }
}
