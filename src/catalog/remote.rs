use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::catalog::client::{CatalogClient, OrganizationDraft, OrganizationPatch, UserDraft};
use crate::catalog::error::CatalogError;
use crate::config::CatalogConfig;

/// Envelope returned by every `/api/action/*` endpoint
#[derive(Debug, Deserialize)]
struct ActionResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    result: Value,
    #[serde(default)]
    error: Value,
}

/// Catalog client talking to a remote CKAN action API
#[derive(Debug, Clone)]
pub struct RemoteCatalog {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl RemoteCatalog {
    pub fn new(base_url: &str, api_key: impl Into<String>, settings: &CatalogConfig) -> Result<Self, CatalogError> {
        let mut base_url = Url::parse(base_url)?;
        // Url::join drops the last segment unless the path ends with a slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        if !settings.verify_tls {
            warn!("TLS certificate verification is disabled for {}", base_url);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .danger_accept_invalid_certs(!settings.verify_tls)
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }

    pub fn action_url(&self, action: &str) -> Result<Url, CatalogError> {
        Ok(self.base_url.join(&format!("api/action/{}", action))?)
    }

    /// POST `body` to an action and unwrap the response envelope
    pub async fn call_action<T: Serialize + ?Sized>(&self, action: &str, body: &T) -> Result<Value, CatalogError> {
        let url = self.action_url(action)?;
        debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, &self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;

        let envelope: ActionResponse = match serde_json::from_str(&text) {
            Ok(envelope) => envelope,
            Err(_) => {
                return Err(CatalogError::Api {
                    status,
                    message: text.chars().take(200).collect(),
                })
            }
        };

        if envelope.success {
            Ok(envelope.result)
        } else {
            Err(CatalogError::from_action_error(status, &envelope.error))
        }
    }
}

#[async_trait]
impl CatalogClient for RemoteCatalog {
    async fn organization_create(&self, org: &OrganizationDraft) -> Result<Value, CatalogError> {
        self.call_action("organization_create", org).await
    }

    async fn organization_patch(&self, patch: &OrganizationPatch) -> Result<Value, CatalogError> {
        self.call_action("organization_patch", patch).await
    }

    async fn user_create(&self, user: &UserDraft) -> Result<Value, CatalogError> {
        self.call_action("user_create", user).await
    }
}
