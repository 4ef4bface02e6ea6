//! Object Sync Port
//!
//! Abstracts the tool that mirrors a local folder into an object-storage
//! destination. The deploy step only owns the invocation shape; transfer
//! semantics (parallelism, retries, checksums) belong to the implementation.

use crate::error::SyncError;
use std::path::Path;

/// Exit status reported by a sync run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncStatus {
    /// Process exit code, `None` if the process was terminated by a signal
    pub code: Option<i32>,
}

impl SyncStatus {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success() -> Self {
        Self::from_code(0)
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for SyncStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// Trait for sync tools
pub trait ObjectSync {
    /// Program name (for diagnostics and error messages)
    fn name(&self) -> &str;

    /// Sync `source` to `destination_uri` in `region`
    ///
    /// Returns the tool's exit status; `Err` only when the tool could not run.
    fn sync(
        &self,
        source: &Path,
        destination_uri: &str,
        region: &str,
    ) -> Result<SyncStatus, SyncError>;
}

impl<T: ObjectSync + ?Sized> ObjectSync for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn sync(
        &self,
        source: &Path,
        destination_uri: &str,
        region: &str,
    ) -> Result<SyncStatus, SyncError> {
        (**self).sync(source, destination_uri, region)
    }
}
