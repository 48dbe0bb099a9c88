//! File-backed cache store persisting each bucket as a JSONL file.

use crate::error::OfflineError;
use crate::store::CacheStore;
use crate::types::StoredResponse;
use async_trait::async_trait;
use log::{debug, info};
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Durable cache store writing one JSONL file per bucket under a root dir.
///
/// Puts rewrite the bucket atomically through a temp-file rename, which
/// gives the per-key atomicity the worker relies on.
#[derive(Debug, Clone)]
pub struct FileCacheStore {
    root: PathBuf,
}

impl FileCacheStore {
    /// Create a file-backed store under the given root.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, OfflineError> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        info!("initialized file cache store (root={})", root.display());
        Ok(Self { root })
    }

    /// Path to a bucket's JSONL file.
    fn bucket_path(&self, bucket: &str) -> PathBuf {
        self.root.join(format!("{bucket}.jsonl"))
    }

    /// Path to a bucket's temporary rewrite file.
    fn temp_path(&self, bucket: &str) -> PathBuf {
        self.root.join(format!("{bucket}.jsonl.tmp"))
    }

    /// Load all entries of a bucket.
    fn load_entries(&self, bucket: &str) -> Result<Vec<StoredResponse>, OfflineError> {
        let path = self.bucket_path(bucket);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let file = OpenOptions::new().read(true).open(path)?;
        let reader = BufReader::new(file);
        let mut entries = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let entry: StoredResponse = serde_json::from_str(&line)?;
            entries.push(entry);
        }
        Ok(entries)
    }

    /// Rewrite a bucket's entries atomically.
    fn write_entries(&self, bucket: &str, entries: &[StoredResponse]) -> Result<(), OfflineError> {
        let path = self.bucket_path(bucket);
        let temp_path = self.temp_path(bucket);
        {
            let mut file = OpenOptions::new()
                .create(true)
                .truncate(true)
                .write(true)
                .open(&temp_path)?;
            for entry in entries {
                let line = serde_json::to_string(entry)?;
                writeln!(file, "{line}")?;
            }
        }
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
        std::fs::rename(temp_path, path)?;
        Ok(())
    }
}

#[async_trait]
impl CacheStore for FileCacheStore {
    /// Store a snapshot, replacing any previous entry for the URL.
    async fn put(&self, bucket: &str, response: StoredResponse) -> Result<(), OfflineError> {
        let mut entries = self.load_entries(bucket)?;
        entries.retain(|entry| entry.url != response.url);
        debug!(
            "cache put (bucket={}, url={}, bytes={})",
            bucket,
            response.url,
            response.body.len()
        );
        entries.push(response);
        self.write_entries(bucket, &entries)
    }

    /// Look up a snapshot by URL.
    async fn lookup(
        &self,
        bucket: &str,
        url: &str,
    ) -> Result<Option<StoredResponse>, OfflineError> {
        let entries = self.load_entries(bucket)?;
        Ok(entries.into_iter().find(|entry| entry.url == url))
    }

    /// List bucket names from the files on disk.
    async fn buckets(&self) -> Result<Vec<String>, OfflineError> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("jsonl") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        Ok(names)
    }

    /// Remove a bucket file if it exists.
    async fn delete_bucket(&self, bucket: &str) -> Result<(), OfflineError> {
        let path = self.bucket_path(bucket);
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}
