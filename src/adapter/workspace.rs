//! Namespace-provisioning service client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::WorkspaceConfig;
use crate::domain::QualifiedProjectId;
use crate::error::{RemoteError, Result};
use crate::port::NamespaceProvisioner;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateNamespaceBody<'a> {
    project_name: &'a str,
    project_id: String,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct CreateNamespaceResponse {
    #[serde(default)]
    ns_name: String,
    #[serde(default)]
    error: String,
}

/// HTTP client for the namespace-provisioning service.
pub struct WorkspaceServiceClient {
    http: HttpClient,
    api_url: String,
}

impl WorkspaceServiceClient {
    /// Build a client from validated configuration.
    #[must_use]
    pub fn from_config(config: &WorkspaceConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl NamespaceProvisioner for WorkspaceServiceClient {
    async fn create_namespace(
        &self,
        project_name: &str,
        project_id: &QualifiedProjectId,
    ) -> Result<String> {
        const OPERATION: &str = "create_namespace";

        let url = format!("{}/namespace", self.api_url);
        let body = CreateNamespaceBody {
            project_name,
            project_id: project_id.to_string(),
        };

        info!(operation = OPERATION, url = %url, project = project_name, "POST");
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|err| RemoteError::transport(OPERATION, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status {
                operation: OPERATION,
                status: status.as_u16(),
            }
            .into());
        }

        let decoded: CreateNamespaceResponse =
            response.json().await.map_err(|err| RemoteError::Decode {
                operation: OPERATION,
                source: err,
            })?;

        // The service reports failures inside a 2xx body.
        if !decoded.error.is_empty() {
            return Err(RemoteError::Rejected {
                operation: OPERATION,
                message: decoded.error,
            }
            .into());
        }

        Ok(decoded.ns_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_decodes_namespace_name() {
        let decoded: CreateNamespaceResponse =
            serde_json::from_str(r#"{"nsName":"acme-ns"}"#).unwrap();
        assert_eq!(decoded.ns_name, "acme-ns");
        assert!(decoded.error.is_empty());
    }

    #[test]
    fn response_decodes_error_body() {
        let decoded: CreateNamespaceResponse =
            serde_json::from_str(r#"{"error":"quota exhausted"}"#).unwrap();
        assert_eq!(decoded.error, "quota exhausted");
    }

    #[test]
    fn from_config_trims_trailing_slash() {
        let client = WorkspaceServiceClient::from_config(&WorkspaceConfig {
            api_url: "https://workspace.example.com/".into(),
            timeout_ms: 1_000,
        });
        assert_eq!(client.api_url, "https://workspace.example.com");
    }
}
