//! User profile and credential types persisted by the store.
//!
//! Field names serialize in PascalCase (`Uid`, `IdToken`, ...) so the
//! on-disk document matches the wire shape the identity provider SDKs use,
//! and the provider discriminator serializes as its symbolic name so the
//! format survives reordering of the enum between application versions.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Allowance for clock skew when deciding whether a credential has expired.
const EXPIRY_SKEW_SECONDS: i64 = 10;

/// Identity provider that issued a credential.
///
/// Serialized by variant name only. Do not add an integer representation;
/// the stored record must stay readable if variants are reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirebaseProviderType {
    EmailAndPassword,
    Google,
    Facebook,
    Twitter,
    Github,
    Apple,
    Microsoft,
    Anonymous,
}

/// Profile attributes of the signed-in user.
///
/// Owned by the authentication collaborator; the store serializes it
/// verbatim and never inspects it beyond `uid` for logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserInfo {
    /// Provider-assigned unique identifier.
    pub uid: String,
    pub federated_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub is_email_verified: bool,
    pub photo_url: Option<String>,
}

/// Authentication material for the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FirebaseCredential {
    /// Short-lived bearer token presented to provider APIs.
    pub id_token: String,
    /// Long-lived token used to mint a fresh `id_token`.
    pub refresh_token: String,
    /// Lifetime of `id_token` in seconds from `created`.
    pub expires_in: i64,
    /// When `id_token` was issued.
    pub created: DateTime<Utc>,
    /// Which identity provider issued this credential.
    pub provider_type: FirebaseProviderType,
}

impl FirebaseCredential {
    /// Whether `id_token` has outlived `expires_in`.
    ///
    /// Expiry is checked with a small skew allowance, so a credential is
    /// reported expired slightly before its nominal deadline. A restored
    /// credential that is expired still has a usable `refresh_token`; the
    /// session layer decides whether to refresh.
    pub fn is_expired(&self) -> bool {
        let deadline = self.created + Duration::seconds(self.expires_in - EXPIRY_SKEW_SECONDS);
        Utc::now() > deadline
    }
}
