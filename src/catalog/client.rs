use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::error::CatalogError;

pub const DATA_CONTAINER_TYPE: &str = "data-container";

/// Reference to a parent data container by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRef {
    pub name: String,
}

/// Payload for `organization_create`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationDraft {
    pub name: String,
    pub title: String,
    #[serde(rename = "type")]
    pub org_type: String,
    pub country: String,
    pub geographic_area: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<GroupRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_external: Option<bool>,
}

impl OrganizationDraft {
    pub fn data_container(name: impl Into<String>, title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            name: name.into(),
            geographic_area: title.clone(),
            title,
            org_type: DATA_CONTAINER_TYPE.to_string(),
            country: String::new(),
            groups: Vec::new(),
            visible_external: None,
        }
    }
}

/// Payload for `organization_patch`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationPatch {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_external: Option<bool>,
}

/// Payload for `user_create`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,
}

/// The subset of the catalog action API the administrative jobs rely on
#[async_trait]
pub trait CatalogClient: Send + Sync {
    async fn organization_create(&self, org: &OrganizationDraft) -> Result<Value, CatalogError>;

    async fn organization_patch(&self, patch: &OrganizationPatch) -> Result<Value, CatalogError>;

    async fn user_create(&self, user: &UserDraft) -> Result<Value, CatalogError>;
}
