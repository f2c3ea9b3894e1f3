use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::input::{ImportError, ImportOptions, check_file_name, import_bytes};
use crate::model::derived::{DerivedMetrics, derive_metrics};
use crate::model::snapshot::MetricsSnapshot;

pub const SUCCESS_MESSAGE: &str = "Data updated successfully from CSV!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadStatus {
    #[serde(rename = "type")]
    pub kind: StatusKind,
    pub message: String,
}

impl UploadStatus {
    pub fn success() -> Self {
        Self {
            kind: StatusKind::Success,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn from_error(err: &ImportError) -> Self {
        Self {
            kind: StatusKind::Error,
            message: err.status_message(),
        }
    }
}

/// Holds the single writable snapshot for a session and the ratios derived
/// from it. Readers only ever get shared references.
#[derive(Debug, Clone)]
pub struct Dashboard {
    snapshot: MetricsSnapshot,
    derived: DerivedMetrics,
    options: ImportOptions,
    status: Option<UploadStatus>,
}

impl Dashboard {
    pub fn new(options: ImportOptions) -> Self {
        Self::with_snapshot(MetricsSnapshot::default(), options)
    }

    pub fn with_snapshot(snapshot: MetricsSnapshot, options: ImportOptions) -> Self {
        let derived = derive_metrics(&snapshot);
        Self {
            snapshot,
            derived,
            options,
            status: None,
        }
    }

    pub fn snapshot(&self) -> &MetricsSnapshot {
        &self.snapshot
    }

    pub fn derived(&self) -> &DerivedMetrics {
        &self.derived
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Outcome of the most recent import, if any.
    pub fn status(&self) -> Option<&UploadStatus> {
        self.status.as_ref()
    }

    /// Runs one upload through the parser. On success the new snapshot is
    /// committed and ratios are recomputed; on failure state is unchanged.
    pub fn import(&mut self, file_name: &str, bytes: &[u8]) -> &UploadStatus {
        let outcome = import_bytes(file_name, bytes, &self.snapshot, &self.options);
        self.settle(file_name, outcome)
    }

    /// Reads `path` and imports it. Non-`.csv` names are rejected without
    /// touching the filesystem.
    pub fn import_path(&mut self, path: &Path) -> &UploadStatus {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let outcome = check_file_name(&file_name).and_then(|()| {
            let bytes = std::fs::read(path).map_err(|source| ImportError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            import_bytes(&file_name, &bytes, &self.snapshot, &self.options)
        });
        self.settle(&file_name, outcome)
    }

    fn settle(
        &mut self,
        file_name: &str,
        outcome: Result<MetricsSnapshot, ImportError>,
    ) -> &UploadStatus {
        let status = match outcome {
            Ok(next) => {
                self.commit(next);
                info!(file = file_name, "dashboard updated");
                UploadStatus::success()
            }
            Err(err) => {
                warn!(file = file_name, error = %err, "import rejected; keeping current snapshot");
                UploadStatus::from_error(&err)
            }
        };
        self.status.insert(status)
    }

    fn commit(&mut self, next: MetricsSnapshot) {
        if next != self.snapshot {
            self.derived = derive_metrics(&next);
            self.snapshot = next;
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(ImportOptions::default())
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/session/tests.rs"]
mod tests;
