use common::{VillaCreateDto, VillaUpdateDto};
use configs::ServiceUrls;
use serde::de::DeserializeOwned;

use crate::{ApiClient, ApiRequest, ApiType, ClientConfig, ClientError, ClientResult};

const VILLA_PATH: &str = "/api/villaAPI";

/// Calls the villa API at `base_url`.
///
/// Every method takes the response type the caller wants and an opaque
/// bearer token that is forwarded as-is.
#[derive(Debug, Clone)]
pub struct VillaClient {
    api: ApiClient,
    base_url: String,
}

impl VillaClient {
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::with_config(base_url, &ClientConfig::default())
    }

    pub fn with_config(base_url: impl Into<String>, config: &ClientConfig) -> ClientResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { api: ApiClient::new(config)?, base_url })
    }

    /// Build from the `[service_urls]` config section.
    pub fn from_service_urls(urls: &ServiceUrls) -> ClientResult<Self> {
        let base = urls
            .villa_api
            .as_deref()
            .ok_or_else(|| ClientError::Config("service_urls.villa_api is not set".into()))?;
        Self::new(base)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, VILLA_PATH)
    }

    fn item_url(&self, id: i32) -> String {
        format!("{}{}/{}", self.base_url, VILLA_PATH, id)
    }

    pub async fn get_all<T: DeserializeOwned>(&self, token: Option<&str>) -> ClientResult<T> {
        self.api
            .send(ApiRequest::new(ApiType::Get, self.collection_url()).with_token(token))
            .await
    }

    pub async fn get<T: DeserializeOwned>(&self, id: i32, token: Option<&str>) -> ClientResult<T> {
        self.api
            .send(ApiRequest::new(ApiType::Get, self.item_url(id)).with_token(token))
            .await
    }

    pub async fn create<T: DeserializeOwned>(&self, dto: &VillaCreateDto, token: Option<&str>) -> ClientResult<T> {
        let req = ApiRequest::new(ApiType::Post, self.collection_url())
            .with_data(serde_json::to_value(dto)?)
            .with_token(token);
        self.api.send(req).await
    }

    /// Full replace; the target url comes from `dto.id`.
    pub async fn update<T: DeserializeOwned>(&self, dto: &VillaUpdateDto, token: Option<&str>) -> ClientResult<T> {
        let req = ApiRequest::new(ApiType::Put, self.item_url(dto.id))
            .with_data(serde_json::to_value(dto)?)
            .with_token(token);
        self.api.send(req).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, id: i32, token: Option<&str>) -> ClientResult<T> {
        self.api
            .send(ApiRequest::new(ApiType::Delete, self.item_url(id)).with_token(token))
            .await
    }
}
