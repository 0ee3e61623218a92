//! In-process user persistence.
//!
//! Holds the record in a mutex instead of on disk. Substitutes for
//! [`FileUserRepository`](crate::FileUserRepository) wherever collaborators
//! take a [`UserRepository`], e.g. in tests that must not touch the
//! filesystem or deployments that should not persist across restarts.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::error::{Result, StoreError};
use crate::repository::UserRepository;
use crate::user::{FirebaseCredential, UserInfo};

/// Memory-backed store for the single signed-in user.
#[derive(Default)]
pub struct InMemoryUserRepository {
    record: Mutex<Option<(UserInfo, FirebaseCredential)>>,
}

impl InMemoryUserRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<(UserInfo, FirebaseCredential)>> {
        // A poisoned lock only means a panic elsewhere mid-access; the
        // Option inside is always in a valid state.
        self.record.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn user_exists(&self) -> bool {
        self.lock().is_some()
    }

    async fn read_user(&self) -> Result<(UserInfo, FirebaseCredential)> {
        self.lock()
            .clone()
            .ok_or_else(|| StoreError::NotFound("no user in memory store".to_string()))
    }

    async fn save_user(
        &self,
        user_info: &UserInfo,
        credential: &FirebaseCredential,
    ) -> Result<()> {
        *self.lock() = Some((user_info.clone(), credential.clone()));
        Ok(())
    }

    async fn delete_user(&self) -> Result<()> {
        self.lock().take();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::FirebaseProviderType;
    use chrono::Utc;

    fn sample() -> (UserInfo, FirebaseCredential) {
        (
            UserInfo {
                uid: "u1".to_string(),
                federated_id: None,
                first_name: None,
                last_name: None,
                display_name: Some("Alice".to_string()),
                email: None,
                is_email_verified: false,
                photo_url: None,
            },
            FirebaseCredential {
                id_token: "abc".to_string(),
                refresh_token: "refresh".to_string(),
                expires_in: 3600,
                created: Utc::now(),
                provider_type: FirebaseProviderType::Anonymous,
            },
        )
    }

    #[tokio::test]
    async fn test_memory_lifecycle() {
        let repo = InMemoryUserRepository::new();
        assert!(!repo.user_exists().await);

        let (user, cred) = sample();
        repo.save_user(&user, &cred).await.unwrap();
        assert!(repo.user_exists().await);

        let (read_user, read_cred) = repo.read_user().await.unwrap();
        assert_eq!(read_user, user);
        assert_eq!(read_cred, cred);

        repo.delete_user().await.unwrap();
        assert!(!repo.user_exists().await);
        assert!(matches!(
            repo.read_user().await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_memory_delete_is_idempotent() {
        let repo = InMemoryUserRepository::new();
        repo.delete_user().await.unwrap();
        repo.delete_user().await.unwrap();
    }
}
