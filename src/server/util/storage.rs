//! Disk storage for uploaded files.
//!
//! Files are written under a single upload directory with a generated name of the form
//! `{unix millis}-{random hex}-{sanitized original name}`, so concurrent uploads of the same
//! file never collide and client-supplied names can't escape the directory.

use std::{io, path::PathBuf};

use chrono::Utc;

use crate::server::model::upload::Uploads;

const FALLBACK_NAME: &str = "upload";

#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub async fn ensure_dir(&self) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await
    }

    /// Writes `data` under a freshly generated name.
    ///
    /// # Returns
    /// - `Ok((String, PathBuf))` - Stored filename and full path of the written file
    /// - `Err(io::Error)` - The file could not be written
    pub async fn save(&self, original_name: &str, data: &[u8]) -> io::Result<(String, PathBuf)> {
        let filename = format!(
            "{}-{:08x}-{}",
            Utc::now().timestamp_millis(),
            rand::random::<u32>(),
            sanitize(original_name)
        );
        let path = self.dir.join(&filename);

        tokio::fs::write(&path, data).await?;
        tracing::debug!("Stored upload {} ({} bytes)", filename, data.len());

        Ok((filename, path))
    }

    /// Removes a stored file, best effort.
    ///
    /// Empty names, names that are not plain filenames and files that are already gone
    /// are ignored. Other failures are logged.
    pub async fn remove(&self, filename: &str) {
        if !is_stored_name(filename) {
            return;
        }

        match tokio::fs::remove_file(self.dir.join(filename)).await {
            Ok(()) => tracing::debug!("Removed upload {}", filename),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove upload {}: {}", filename, e),
        }
    }

    /// Removes every file of a request that did not complete.
    pub async fn discard(&self, uploads: &Uploads) {
        for file in uploads.iter() {
            self.remove(&file.filename).await;
        }
    }

    /// Passes `result` through, discarding `uploads` first when it is an error.
    pub async fn discard_on_err<T, E>(
        &self,
        uploads: &Uploads,
        result: Result<T, E>,
    ) -> Result<T, E> {
        if result.is_err() {
            self.discard(uploads).await;
        }

        result
    }
}

/// Reduces a client-supplied filename to a safe final path component.
fn sanitize(original_name: &str) -> String {
    let base = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');

    if cleaned.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        cleaned.to_string()
    }
}

fn is_stored_name(filename: &str) -> bool {
    !filename.is_empty()
        && !filename.starts_with('.')
        && !filename.contains(['/', '\\'])
}
