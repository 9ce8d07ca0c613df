use anyhow::{anyhow, Result};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::GestellConfig;

/// How hard the service works to answer a query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMethod {
    Fast,
    #[default]
    Normal,
    Precise,
}

/// How the query text is interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    Keywords,
    #[default]
    Phrase,
    Summary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    pub method: SearchMethod,
    #[serde(rename = "type")]
    pub search_type: SearchType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_depth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_depth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_queries: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub include_content: bool,
    pub include_edges: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            method: SearchMethod::default(),
            search_type: SearchType::default(),
            vector_depth: None,
            node_depth: None,
            max_queries: None,
            max_results: None,
            category: None,
            include_content: true,
            include_edges: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub prompt: String,
    #[serde(flatten)]
    pub options: SearchOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub content: String,
    #[serde(default)]
    pub citation: String,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub result: Vec<SearchResult>,
}

/// A prior turn handed to the prompt endpoint as conversation context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptOptions {
    pub method: SearchMethod,
    #[serde(rename = "type")]
    pub search_type: SearchType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_depth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_depth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_queries: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    pub cot: bool,
    pub messages: Vec<PromptMessage>,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            method: SearchMethod::default(),
            search_type: SearchType::default(),
            vector_depth: None,
            node_depth: None,
            max_queries: None,
            max_results: None,
            template: None,
            cot: true,
            messages: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptRequest {
    pub prompt: String,
    #[serde(flatten)]
    pub options: PromptOptions,
}

/// Thin client for the Gestell collection query API
#[derive(Debug, Clone)]
pub struct GestellClient {
    client: Client,
    api_key: String,
    api_url: String,
}

impl GestellClient {
    pub fn new<K: Into<String>, U: Into<String>>(api_key: K, api_url: U) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(600)) // 10 minutes timeout
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            api_url: api_url.into(),
        })
    }

    pub fn from_config(config: &GestellConfig) -> Result<Self> {
        Self::new(config.api_key.clone(), config.api_url.clone())
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Search a collection for content relevant to the request prompt
    pub async fn search(
        &self,
        collection_id: &str,
        request: &SearchRequest,
    ) -> Result<SearchResponse> {
        let response = self.post(collection_id, "search", request).await?;
        let body: SearchResponse = response.json().await?;

        if body.status.eq_ignore_ascii_case("error") {
            return Err(anyhow!(
                "Gestell API error: {}",
                body.message.as_deref().unwrap_or("unknown error")
            ));
        }

        Ok(body)
    }

    /// Ask the collection to answer the request prompt. The service streams
    /// the answer as plain text; the whole body is collected here.
    pub async fn prompt(&self, collection_id: &str, request: &PromptRequest) -> Result<String> {
        let response = self.post(collection_id, "prompt", request).await?;
        Ok(response.text().await?)
    }

    async fn post<T: Serialize + ?Sized>(
        &self,
        collection_id: &str,
        action: &str,
        payload: &T,
    ) -> Result<Response> {
        let url = format!(
            "{}/api/collection/{}/{}",
            self.api_url.trim_end_matches('/'),
            collection_id,
            action
        );
        tracing::debug!(%url, "sending gestell request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(payload)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(response),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(anyhow!("Gestell API error: {}: {}", status, body))
            }
        }
    }
}
