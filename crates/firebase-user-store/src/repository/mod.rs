//! Persistence backends for the signed-in user record.
//!
//! # Modules
//!
//! - [`file`] — durable JSON-file store under the platform app-data root.
//! - [`memory`] — in-process store for tests and non-durable substitution.

pub mod file;
pub mod memory;

use async_trait::async_trait;

use crate::error::Result;
use crate::user::{FirebaseCredential, UserInfo};

// Re-export the primary types so callers can write `repository::FileUserRepository`
// without reaching into sub-modules.
pub use file::FileUserRepository;
pub use memory::InMemoryUserRepository;

/// Storage capability set for the single signed-in user.
///
/// At most one record exists at a time; presence of the record is the sole
/// signal that a user is cached. Operations complete immediately (the only
/// latency source is the backing storage) but are exposed async so callers
/// in a non-blocking context need no adapter. The trait provides no
/// locking; callers that save from multiple tasks must serialize access
/// themselves.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Whether a user record is currently present.
    ///
    /// Never fails: a probe failure reads as `false`. Callers that need to
    /// distinguish "absent" from "unreadable" should call
    /// [`read_user`](Self::read_user) and inspect the error.
    async fn user_exists(&self) -> bool;

    /// Return the stored profile and credential without mutating the record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`](crate::StoreError::NotFound) if no
    /// record is present, [`StoreError::Corrupt`](crate::StoreError::Corrupt)
    /// if the record does not match the expected schema, or
    /// [`StoreError::Io`](crate::StoreError::Io) for storage failures.
    async fn read_user(&self) -> Result<(UserInfo, FirebaseCredential)>;

    /// Persist the profile and credential, fully replacing any prior record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`](crate::StoreError::Io) if the write fails.
    /// A failed save never leaves a partially-written record observable.
    async fn save_user(
        &self,
        user_info: &UserInfo,
        credential: &FirebaseCredential,
    ) -> Result<()>;

    /// Remove the stored record. Deleting an absent record is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`](crate::StoreError::Io) if removal fails
    /// for any reason other than the record already being absent.
    async fn delete_user(&self) -> Result<()>;
}
