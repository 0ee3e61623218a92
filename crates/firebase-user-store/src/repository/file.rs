//! File-backed user persistence.
//!
//! Stores the signed-in user as a single JSON document at
//! `<app-data-root>/<folder>/firebase.json`. The document is plain UTF-8
//! JSON, pretty-printed so it stays inspectable while debugging.
//!
//! File format:
//! ```json
//! {
//!     "UserInfo": { ... profile fields ... },
//!     "Credential": { ... credential fields, enums as strings ... }
//! }
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};
use crate::repository::UserRepository;
use crate::user::{FirebaseCredential, UserInfo};

// ── File format constants ─────────────────────────────────────────────────────

/// Fixed name of the record file inside the store directory.
pub const USER_FILE_NAME: &str = "firebase.json";

// ── On-disk structure ─────────────────────────────────────────────────────────

/// The persisted composite of exactly one profile and one credential.
///
/// Private to this module; collaborators must not depend on the document
/// shape or location.
#[derive(Debug, Serialize, Deserialize)]
struct StoredUserRecord {
    #[serde(rename = "UserInfo")]
    user_info: UserInfo,
    #[serde(rename = "Credential")]
    credential: FirebaseCredential,
}

// ── FileUserRepository ────────────────────────────────────────────────────────

/// Filesystem-backed store for the single signed-in user.
///
/// The target path is fixed at construction and the parent directory is
/// created then. Saves replace the record atomically (sibling temp file,
/// then rename), so a concurrent reader never observes a partial write.
/// Concurrent saves from multiple writers are last-write-wins; the store
/// does no cross-process coordination.
pub struct FileUserRepository {
    path: PathBuf,
}

impl FileUserRepository {
    /// Create a store under the platform's per-user application-data root.
    ///
    /// Resolves the root, appends `folder`, and creates the directory and
    /// any missing ancestors. The record path becomes
    /// `<root>/<folder>/firebase.json`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DataDir` if the platform root cannot be
    /// resolved, or `StoreError::Io` if the directory cannot be created.
    pub fn new(folder: &str) -> Result<Self> {
        let root = dirs::data_dir().ok_or(StoreError::DataDir)?;
        Self::in_dir(root.join(folder))
    }

    /// Create a store rooted at an explicit directory instead of the
    /// platform application-data root.
    ///
    /// The directory and any missing ancestors are created. Useful for
    /// tests and for applications that manage their own storage location.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            path: dir.join(USER_FILE_NAME),
        })
    }

    /// The full path of the record file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ── Internal helpers ──────────────────────────────────────────────────────

    /// Write `data` to the record path atomically.
    ///
    /// Writes to a sibling temp file, syncs it, then renames it over the
    /// target so a crash mid-write cannot leave a truncated record visible
    /// to readers. The temp file is removed if the rename fails.
    fn write_atomic(&self, data: &[u8]) -> Result<()> {
        use std::io::Write;

        let tmp_path = self
            .path
            .with_file_name(format!("{USER_FILE_NAME}.tmp.{}", std::process::id()));

        {
            let mut file = std::fs::File::create(&tmp_path)?;
            file.write_all(data)?;
            file.sync_all()?;
        }

        std::fs::rename(&tmp_path, &self.path).map_err(|e| {
            let _ = std::fs::remove_file(&tmp_path);
            StoreError::Io(e)
        })
    }
}

#[async_trait]
impl UserRepository for FileUserRepository {
    async fn user_exists(&self) -> bool {
        // Probe failures (e.g. permission denied) collapse to false, same
        // as the record being absent. read_user surfaces the real error.
        self.path.exists()
    }

    async fn read_user(&self) -> Result<(UserInfo, FirebaseCredential)> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(self.path.display().to_string()));
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        let record: StoredUserRecord = serde_json::from_slice(&bytes).map_err(|e| {
            warn!("Stored user record at {} is corrupt: {e}", self.path.display());
            StoreError::Corrupt(format!(
                "failed to parse {}: {e}",
                self.path.display()
            ))
        })?;

        Ok((record.user_info, record.credential))
    }

    async fn save_user(
        &self,
        user_info: &UserInfo,
        credential: &FirebaseCredential,
    ) -> Result<()> {
        let record = StoredUserRecord {
            user_info: user_info.clone(),
            credential: credential.clone(),
        };

        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        self.write_atomic(json.as_bytes())?;

        info!("Saved user {} to {}", user_info.uid, self.path.display());
        Ok(())
    }

    async fn delete_user(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Deleted stored user at {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
