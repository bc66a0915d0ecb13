//! Service models and list filters for the Render services API.

use serde::{Deserialize, Serialize};

/// A deployable unit (web service, static site, worker, ...).
///
/// Timestamps are kept as the strings the API returns.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Service {
    pub id: String,
    pub name: String,
    /// Absent for image-backed services.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(rename = "dashboardUrl")]
    pub dashboard_url: String,
    #[serde(rename = "type")]
    pub service_type: String,
    /// Absent for image-backed services.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

/// One element of the services list response.
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceResponse {
    pub service: Service,
    #[serde(default)]
    pub cursor: Option<String>,
}

/// Free-form query filters for listing services.
///
/// Pairs are sent in insertion order. Setting `limit` here replaces the
/// client's default limit instead of adding a second one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceFilters {
    pairs: Vec<(String, String)>,
}

impl ServiceFilters {
    /// Create an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an arbitrary `key=value` filter.
    ///
    /// A later value for the same key replaces the earlier one.
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(existing) => existing.1 = value,
            None => self.pairs.push((key, value)),
        }
        self
    }

    /// Page size for this query.
    pub fn limit(self, limit: u32) -> Self {
        self.filter("limit", limit.to_string())
    }

    /// Service type, e.g. `web_service` or `static_site`.
    pub fn service_type(self, service_type: impl Into<String>) -> Self {
        self.filter("type", service_type)
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        self.filter("name", name)
    }

    pub fn region(self, region: impl Into<String>) -> Self {
        self.filter("region", region)
    }

    /// Runtime environment, e.g. `docker`, `node`, `image`.
    pub fn env(self, env: impl Into<String>) -> Self {
        self.filter("env", env)
    }

    /// `suspended` or `not_suspended`.
    pub fn suspended(self, status: impl Into<String>) -> Self {
        self.filter("suspended", status)
    }

    /// Look up a filter value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for ServiceFilters
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |filters, (k, v)| filters.filter(k, v))
    }
}
