use crate::config::ClientConfig;
use crate::domain::ports::{ApiClient, ConfigProvider, RequestConfig};
use crate::utils::error::{ApiError, ApiResult, Result, DECODE_ERROR_MESSAGE};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::OnceCell;

static SHARED_CLIENT: OnceCell<Arc<ReqwestApiClient>> = OnceCell::const_new();

/// API client backed by a single pooled reqwest `Client`.
#[derive(Debug, Clone)]
pub struct ReqwestApiClient {
    client: Client,
    base_url: String,
}

impl ReqwestApiClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()?;

        tracing::info!(
            "API client ready: base_url={}, timeout={}ms",
            config.base_url(),
            config.timeout().as_millis()
        );

        Ok(Self {
            client,
            base_url: config.base_url().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        config: Option<RequestConfig>,
    ) -> ApiResult<T> {
        let url = self.url(path);
        let config = config.unwrap_or_default();

        tracing::debug!("{} {} params={:?}", method, url, config.params);

        let mut request = self.client.request(method.clone(), &url);
        if !config.params.is_empty() {
            request = request.query(&config.params);
        }
        for (key, value) in &config.headers {
            request = request.header(key.as_str(), value.as_str());
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!("{} {} failed before a response arrived: {}", method, url, e);
            ApiError::network()
        })?;

        let status = response.status();
        tracing::debug!("{} {} -> {}", method, url, status);

        let bytes = response.bytes().await.map_err(|e| {
            tracing::warn!("{} {} body could not be read: {}", method, url, e);
            ApiError::network()
        })?;

        if !status.is_success() {
            let body = serde_json::from_slice::<serde_json::Value>(&bytes).ok();
            let error = ApiError::from_response(status.as_u16(), body);
            tracing::warn!(
                "{} {} returned {}: {}",
                method,
                url,
                error.status_code,
                error.message
            );
            return Err(error);
        }

        decode_body(status.as_u16(), &bytes)
    }
}

/// Empty bodies decode as JSON `null` so `()`/`Option<_>` targets still succeed.
fn decode_body<T: DeserializeOwned>(status_code: u16, bytes: &[u8]) -> ApiResult<T> {
    let decoded = if bytes.is_empty() {
        serde_json::from_value(serde_json::Value::Null)
    } else {
        serde_json::from_slice(bytes)
    };

    decoded.map_err(|e| {
        tracing::warn!("response body did not match the expected shape: {}", e);
        ApiError::new(DECODE_ERROR_MESSAGE, status_code)
    })
}

impl ApiClient for ReqwestApiClient {
    async fn get<T: DeserializeOwned + Send>(
        &self,
        path: &str,
        config: Option<RequestConfig>,
    ) -> ApiResult<T> {
        self.send(Method::GET, path, None, config).await
    }

    async fn post<T: DeserializeOwned + Send>(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
        config: Option<RequestConfig>,
    ) -> ApiResult<T> {
        self.send(Method::POST, path, body, config).await
    }

    async fn put<T: DeserializeOwned + Send>(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
        config: Option<RequestConfig>,
    ) -> ApiResult<T> {
        self.send(Method::PUT, path, body, config).await
    }

    async fn delete<T: DeserializeOwned + Send>(
        &self,
        path: &str,
        config: Option<RequestConfig>,
    ) -> ApiResult<T> {
        self.send(Method::DELETE, path, None, config).await
    }
}

/// Process-wide client, built on first use. Later calls ignore `config`.
pub async fn shared_client<C: ConfigProvider>(config: &C) -> Result<Arc<ReqwestApiClient>> {
    SHARED_CLIENT
        .get_or_try_init(|| async { ReqwestApiClient::new(config).map(Arc::new) })
        .await
        .cloned()
}

pub async fn shared_client_from_env() -> Result<Arc<ReqwestApiClient>> {
    let config = ClientConfig::from_env()?;
    shared_client(&config).await
}
