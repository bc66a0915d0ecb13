//! Owner lookup methods for [`RenderClient`].
//!
//! # What this module handles:
//! - Listing the owners authorized by the API key, filtered by email
//! - Resolving an email to an owner id
//!
//! # What this module does NOT handle:
//! - Low-level owner endpoint HTTP calls (in [`crate::endpoints`])

use crate::client::{RenderClient, check_limit};
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::OwnerResponse;

impl RenderClient {
    /// List authorized owners whose email equals `email` exactly.
    ///
    /// `limit` is the page size sent to the server; filtering happens after.
    /// A `limit` outside `1..=100` fails with [`ClientError::InvalidLimit`].
    pub async fn list_authorized_users(
        &self,
        email: &str,
        limit: u32,
    ) -> Result<Vec<OwnerResponse>> {
        check_limit(&limit.to_string())?;
        endpoints::list_authorized_users(
            &self.http,
            &self.base_url,
            self.api_key(),
            email,
            limit,
            self.timeout,
        )
        .await
    }

    /// Return the id of the first owner with this email.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] when no owner matches.
    pub async fn resolve_owner_id(&self, email: &str) -> Result<String> {
        self.list_authorized_users(email, self.default_limit)
            .await?
            .into_iter()
            .next()
            .map(|entry| entry.owner.id)
            .ok_or_else(|| ClientError::NotFound(format!("owner with email '{}'", email)))
    }
}
