//! Local persistence for a signed-in Firebase user.
//!
//! Stores a single user's profile ([`UserInfo`]) and authentication
//! credential ([`FirebaseCredential`]) as one JSON document on local disk
//! so an application can restore its session across restarts without
//! re-authenticating against the identity provider.
//!
//! The [`UserRepository`] trait is the seam collaborators depend on;
//! [`FileUserRepository`] is the durable implementation and
//! [`InMemoryUserRepository`] a filesystem-free substitute for tests.
//!
//! ```no_run
//! use firebase_user_store::{FileUserRepository, UserRepository};
//!
//! # async fn restore() -> firebase_user_store::Result<()> {
//! let repo = FileUserRepository::new("MyApp")?;
//! if repo.user_exists().await {
//!     let (user, credential) = repo.read_user().await?;
//!     // hand (user, credential) back to the session layer
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod repository;
pub mod user;

// Re-export primary types
pub use error::{Result, StoreError};
pub use repository::{FileUserRepository, InMemoryUserRepository, UserRepository};
pub use user::{FirebaseCredential, FirebaseProviderType, UserInfo};
