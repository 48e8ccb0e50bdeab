use crate::error::ApiError;
use parking_lot::RwLock;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::ApiConfig;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct SupplyLineClient {
    http: Client,
    base_url: Url,
    token: Arc<RwLock<Option<String>>>,
}

impl std::fmt::Debug for SupplyLineClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupplyLineClient")
            .field("base_url", &self.base_url.as_str())
            .field("authenticated", &self.has_token())
            .finish_non_exhaustive()
    }
}

impl SupplyLineClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.request_timeout()?)
            .build()?;
        let client = Self::new_with_client(http, &config.base_url)?;
        client.set_token(config.token.clone());
        Ok(client)
    }

    pub fn new_with_client(http: Client, base_url: &str) -> Result<Self, ApiError> {
        // Without the trailing slash `join` would replace the last segment.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized).map_err(|e| ApiError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            http,
            base_url,
            token: Arc::new(RwLock::new(None)),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn set_token(&self, token: Option<String>) {
        *self.token.write() = token;
    }

    pub fn has_token(&self) -> bool {
        self.token.read().is_some()
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl {
                url: path.to_string(),
                reason: e.to_string(),
            })
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let builder = self.http.request(method, self.url(path)?);
        Ok(match self.token.read().as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    /// Sends the request and returns the body of a 2xx response.
    async fn send(&self, builder: RequestBuilder, endpoint: &str) -> Result<String, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let err = ApiError::rejected(status, &body);
            warn!(endpoint, status = status.as_u16(), error = %err, "request rejected");
            return Err(err);
        }
        debug!(endpoint, status = status.as_u16(), bytes = body.len(), "request succeeded");
        Ok(body)
    }

    fn decode<T: DeserializeOwned>(endpoint: &str, body: &str) -> Result<T, ApiError> {
        serde_json::from_str(body).map_err(|source| {
            warn!(endpoint, error = %source, "response did not match the expected shape");
            ApiError::Decode {
                endpoint: endpoint.to_string(),
                source,
            }
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.send(self.request(Method::GET, path)?, path).await?;
        Self::decode(path, &body)
    }

    pub(crate) async fn get_json_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let builder = self.request(Method::GET, path)?.query(query);
        let body = self.send(builder, path).await?;
        Self::decode(path, &body)
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, payload: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path)?.json(payload);
        let body = self.send(builder, path).await?;
        Self::decode(path, &body)
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.send(self.request(Method::POST, path)?, path).await?;
        Self::decode(path, &body)
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.send(self.request(Method::DELETE, path)?, path).await?;
        Self::decode(path, &body)
    }

    pub(crate) async fn get_bytes<Q>(&self, path: &str, query: &Q) -> Result<Vec<u8>, ApiError>
    where
        Q: Serialize + ?Sized,
    {
        let response = self.request(Method::GET, path)?.query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(ApiError::rejected(status, &body));
        }
        let bytes = response.bytes().await?;
        debug!(endpoint = path, bytes = bytes.len(), "downloaded export");
        Ok(bytes.to_vec())
    }
}
