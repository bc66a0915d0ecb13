//! Postgres instance models.

use serde::{Deserialize, Serialize};

use crate::models::deploy::CidrBlock;

/// Request body for `POST /postgres`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostgresRequest {
    pub name: String,
    pub owner_id: String,
    pub plan: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_user: Option<String>,
    pub enable_high_availability: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ip_allow_list: Vec<CidrBlock>,
}

/// A Postgres instance as returned by the API.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Postgres {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ip_allow_list: Vec<CidrBlock>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_api_field_names() {
        let request = PostgresRequest {
            name: "orders-db".to_string(),
            owner_id: "usr-1".to_string(),
            plan: "basic_256mb".to_string(),
            version: "16".to_string(),
            database_name: None,
            database_user: Some("orders".to_string()),
            enable_high_availability: false,
            ip_allow_list: vec![CidrBlock::everywhere()],
        };

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["ownerId"], "usr-1");
        assert_eq!(value["databaseUser"], "orders");
        assert_eq!(value["enableHighAvailability"], false);
        assert_eq!(value["ipAllowList"][0]["cidrBlock"], "0.0.0.0/0");
        assert!(value.get("databaseName").is_none());
    }

    #[test]
    fn test_response_tolerates_missing_optional_fields() {
        let postgres: Postgres =
            serde_json::from_str(r#"{"id": "dpg-1", "name": "orders-db"}"#).unwrap();
        assert_eq!(postgres.id, "dpg-1");
        assert!(postgres.status.is_none());
        assert!(postgres.ip_allow_list.is_empty());
    }
}
