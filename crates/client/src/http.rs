use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::{ClientConfig, ClientError, ClientResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiType {
    Get,
    Post,
    Put,
    Delete,
}

/// One outbound call: method, absolute url, optional JSON body and bearer token.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub api_type: ApiType,
    pub url: String,
    pub data: Option<Value>,
    pub token: Option<String>,
}

impl ApiRequest {
    pub fn new(api_type: ApiType, url: impl Into<String>) -> Self {
        Self { api_type, url: url.into(), data: None, token: None }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.token = token.map(str::to_string);
        self
    }
}

/// Shared base for service clients. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client })
    }

    /// Send `req` and decode the response body as `T`. An empty body decodes
    /// from JSON `null`, so `T = ()` fits a 204.
    pub async fn send<T: DeserializeOwned>(&self, req: ApiRequest) -> ClientResult<T> {
        let mut request = match req.api_type {
            ApiType::Get => self.client.get(&req.url),
            ApiType::Post => self.client.post(&req.url),
            ApiType::Put => self.client.put(&req.url),
            ApiType::Delete => self.client.delete(&req.url),
        };
        if let Some(data) = &req.data {
            request = request.json(data);
        }
        if let Some(token) = req.token.as_deref().filter(|t| !t.is_empty()) {
            request = request.bearer_auth(token);
        }

        debug!(method = ?req.api_type, url = %req.url, "sending request");
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(match status {
                StatusCode::BAD_REQUEST => ClientError::BadRequest(text),
                StatusCode::NOT_FOUND => ClientError::NotFound(text),
                StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
                _ => ClientError::Server { status: status.as_u16(), body: text },
            });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(serde_json::from_value(Value::Null)?);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}
