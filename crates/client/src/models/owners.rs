//! Owner models for the Render owners API.
//!
//! An owner is the user or team account that services belong to. The owners
//! endpoint returns each owner wrapped together with a pagination cursor.

use serde::{Deserialize, Serialize};

/// An account authorized by the current API key.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Owner {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "twoFactorAuthEnabled")]
    pub two_factor_auth_enabled: bool,
    /// `user` or `team`.
    #[serde(rename = "type")]
    pub owner_type: String,
}

/// One element of the owners list response.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct OwnerResponse {
    pub owner: Owner,
    /// Opaque pagination marker. Not used to fetch further pages.
    pub cursor: String,
}
