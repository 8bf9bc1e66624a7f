use std::path::PathBuf;

use async_trait::async_trait;
use serde::Serialize;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::{
    app_error::{AppError, AppResult},
    entities::waitlist_entry::WaitlistEntry,
    use_cases::waitlist::WaitlistSink,
};

/// Appends one newline-delimited JSON record per entry to a local file
/// (default `./.data/waitlist.jsonl`). Each record goes out in a single
/// append-mode write so concurrent writers cannot interleave lines.
pub struct JsonlFileSink {
    path: PathBuf,
}

impl JsonlFileSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonlRecord<'a> {
    email: &'a str,
    created_at: String,
}

#[async_trait]
impl WaitlistSink for JsonlFileSink {
    async fn append(&self, entry: &WaitlistEntry) -> AppResult<()> {
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| AppError::Sink(e.to_string()))?;
        }

        let record = JsonlRecord {
            email: &entry.email,
            created_at: entry.created_at.to_rfc3339(),
        };
        let mut line =
            serde_json::to_string(&record).map_err(|e| AppError::Sink(e.to_string()))?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| AppError::Sink(e.to_string()))?;
        file.write_all(line.as_bytes())
            .await
            .map_err(|e| AppError::Sink(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| AppError::Sink(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn entry(email: &str) -> WaitlistEntry {
        WaitlistEntry {
            email: email.to_string(),
            name: None,
            age: None,
            city: None,
            country: None,
            school: None,
            is_early_access: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn creates_directory_and_appends_one_line_per_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".data").join("waitlist.jsonl");
        let sink = JsonlFileSink::new(path.clone());

        sink.append(&entry("first@example.com")).await.unwrap();
        sink.append(&entry("second@example.com")).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["email"], "first@example.com");
        let stamp = first["createdAt"].as_str().unwrap();
        DateTime::parse_from_rfc3339(stamp).unwrap();

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["email"], "second@example.com");
    }

    #[tokio::test]
    async fn duplicate_entries_append_again() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("waitlist.jsonl");
        let sink = JsonlFileSink::new(path.clone());

        sink.append(&entry("dup@example.com")).await.unwrap();
        sink.append(&entry("dup@example.com")).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }
}
