//! Assistants API client: the single "create assistant" call.

use super::Credential;
use crate::error::ProvisionError;
use crate::types::{AssistantRecord, AssistantSpec, ToolDeclaration};
use async_trait::async_trait;
use chrono::DateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Beta header value required by the assistants endpoints.
const ASSISTANTS_BETA: &str = "assistants=v2";

/// Remote service able to create assistants.
#[async_trait]
pub trait AssistantApi: Send + Sync {
    /// Create one assistant. Every call creates a new remote resource.
    async fn create_assistant(&self, spec: &AssistantSpec)
        -> Result<AssistantRecord, ProvisionError>;
}

/// HTTP client for an OpenAI-compatible assistants API.
#[derive(Debug, Clone)]
pub struct AssistantsClient {
    base_url: String,
    credential: Credential,
    http: reqwest::Client,
}

// -- Request / response types -----------------------------------------------

#[derive(Debug, Serialize)]
struct CreateAssistantRequest<'a> {
    name: &'a str,
    instructions: &'a str,
    tools: &'a [ToolDeclaration],
    model: &'a str,
}

#[derive(Debug, Deserialize)]
struct AssistantResponse {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    created_at: Option<i64>,
}

impl AssistantsClient {
    /// Create a new assistants client.
    pub fn new(base_url: &str, credential: Credential) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credential,
            http: reqwest::Client::new(),
        }
    }

    fn assistants_url(&self) -> String {
        format!("{}/v1/assistants", self.base_url)
    }
}

#[async_trait]
impl AssistantApi for AssistantsClient {
    async fn create_assistant(
        &self,
        spec: &AssistantSpec,
    ) -> Result<AssistantRecord, ProvisionError> {
        debug!(
            "Creating assistant '{}' (model: {}, tools: {})",
            spec.name,
            spec.model,
            spec.tools.len()
        );

        let resp = self
            .http
            .post(self.assistants_url())
            .bearer_auth(self.credential.expose())
            .header("OpenAI-Beta", ASSISTANTS_BETA)
            .json(&CreateAssistantRequest {
                name: &spec.name,
                instructions: &spec.instructions,
                tools: &spec.tools,
                model: &spec.model,
            })
            .send()
            .await
            .map_err(ProvisionError::Network)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => ProvisionError::Credential(format!("rejected ({status}): {body}")),
                400 | 422 => ProvisionError::Rejected(format!("({status}) {body}")),
                code => ProvisionError::Api { status: code, body },
            });
        }

        let body: AssistantResponse = resp
            .json()
            .await
            .map_err(|e| ProvisionError::Decode(e.to_string()))?;

        if body.id.is_empty() {
            return Err(ProvisionError::Decode(
                "assistant response has no id".into(),
            ));
        }

        Ok(AssistantRecord {
            id: body.id,
            name: body.name,
            model: body.model,
            created_at: body
                .created_at
                .and_then(|secs| DateTime::from_timestamp(secs, 0)),
        })
    }
}
