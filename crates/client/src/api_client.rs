//! HTTP client for the giglance REST API.
//!
//! Wraps `reqwest` with the three cross-cutting concerns every call shares:
//! bearer-token injection from durable storage, cold-start tracking, and
//! envelope validation. Errors pass through to the caller unmodified after
//! cleanup; there are no retries and no request cancellation.

use giglance_shared::{ApiEnvelope, ApiError};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::cold_start;
use crate::config;
use crate::storage;

/// Storage key for the bearer token. Written only by the auth store's
/// login/logout transitions; the client only ever reads it.
pub const TOKEN_KEY: &str = "giglance_token";

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: config::api_base_url(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url(&self, path: &str) -> String {
        config::join_url(&self.base_url, path)
    }

    /// GET a payload-carrying endpoint.
    pub async fn get_json<TRes: DeserializeOwned>(&self, path: &str) -> Result<TRes, ApiError> {
        let rb = self.client.get(self.url(path));
        self.execute(rb).await?.into_data()
    }

    /// POST a JSON body, expecting a payload back.
    pub async fn post_json<TReq: Serialize, TRes: DeserializeOwned>(
        &self,
        path: &str,
        body: &TReq,
    ) -> Result<TRes, ApiError> {
        let rb = self.client.post(self.url(path)).json(body);
        self.execute(rb).await?.into_data()
    }

    /// POST a JSON body where only the success flag matters.
    pub async fn post_ack<TReq: Serialize>(&self, path: &str, body: &TReq) -> Result<(), ApiError> {
        let rb = self.client.post(self.url(path)).json(body);
        self.execute::<serde_json::Value>(rb).await?.into_ack()
    }

    /// PUT a JSON body, expecting a payload back.
    pub async fn put_json<TReq: Serialize, TRes: DeserializeOwned>(
        &self,
        path: &str,
        body: &TReq,
    ) -> Result<TRes, ApiError> {
        let rb = self.client.put(self.url(path)).json(body);
        self.execute(rb).await?.into_data()
    }

    /// DELETE a resource; the server acks with an empty envelope.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let rb = self.client.delete(self.url(path));
        self.execute::<serde_json::Value>(rb).await?.into_ack()
    }

    /// Shared send path: token injection, cold-start bookkeeping, envelope
    /// decode. The cold-start ticket is released on every exit path.
    async fn execute<TRes: DeserializeOwned>(
        &self,
        rb: reqwest::RequestBuilder,
    ) -> Result<ApiEnvelope<TRes>, ApiError> {
        let rb = match storage::load::<String>(TOKEN_KEY) {
            Some(token) => rb.bearer_auth(token),
            None => rb,
        };

        let ticket = cold_start::request_started();
        let result = send_and_decode(rb).await;
        cold_start::request_finished(ticket);
        result
    }
}

async fn send_and_decode<TRes: DeserializeOwned>(
    rb: reqwest::RequestBuilder,
) -> Result<ApiEnvelope<TRes>, ApiError> {
    let resp = rb
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = resp.status().as_u16();
    let is_success = resp.status().is_success();

    let text = resp
        .text()
        .await
        .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

    if !is_success {
        // Non-2xx bodies usually still carry the envelope with a message.
        if let Some(message) = giglance_shared::try_server_message(&text) {
            return Err(ApiError::Server(message));
        }
        return Err(ApiError::Http { status, body: text });
    }

    serde_json::from_str(&text).map_err(|e| ApiError::Deserialize(e.to_string()))
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
