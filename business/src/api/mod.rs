//! Admin API client.
//!
//! [`ApiClient::call`] is the single transport entry point: it joins a relative
//! path to the configured base URL, sends query parameters and/or a JSON body,
//! and converts the `{ success, data }` envelope into an [`ApiResult`]. The
//! per-resource modules are one-to-one wrappers over the endpoints; they do no
//! validation of their own because the backend owns every business rule.

mod error;
pub mod profiles;
pub mod registrations;
pub mod users;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub use error::{ApiError, ApiResult};

use crate::config::BusinessConfig;
use crate::envelope::ResponseEnvelope;
use crate::http::{Client, Method, query_pairs};
use crate::models::{BlacklistFlag, PageRequest, PageResult, UserQuery, UserRecord};

/// Query parameters and body of a single call.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    params: Vec<(String, String)>,
    data: Option<serde_json::Value>,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the fields of `value` as query parameters.
    pub fn params<T: Serialize + ?Sized>(mut self, value: &T) -> ApiResult<Self> {
        let pairs = query_pairs(value).map_err(|e| ApiError::Encode(e.message))?;
        self.params.extend(pairs);
        Ok(self)
    }

    /// Sets the JSON body.
    pub fn data<T: Serialize + ?Sized>(mut self, value: &T) -> ApiResult<Self> {
        let json = serde_json::to_value(value).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.data = Some(json);
        Ok(self)
    }

    pub fn query_params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn body(&self) -> Option<&serde_json::Value> {
        self.data.as_ref()
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    pub fn from_config(config: &BusinessConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins `path` to the base URL with exactly one `/` between them.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Sends one request and returns the envelope with `data` still untyped.
    ///
    /// A non-2xx response is still read as an envelope when its body is one, so a
    /// backend refusing with `400 {"success":false}` surfaces as a rejection.
    pub async fn call_envelope(
        &self,
        path: &str,
        method: Method,
        options: CallOptions,
    ) -> ApiResult<ResponseEnvelope<serde_json::Value>> {
        let url = self.url(path);
        log::debug!("{method} {url} params={:?}", options.params);

        let mut request = self.http.request(method, &url).query(options.params);
        if let Some(data) = &options.data {
            request = request.json(data)?;
        }

        let response = request.send().await?;

        match response.json::<ResponseEnvelope<serde_json::Value>>() {
            Ok(envelope) => {
                if !envelope.success {
                    log::warn!(
                        "{method} {url} rejected (status {}): {}",
                        response.status,
                        envelope.message.as_deref().unwrap_or("no reason given")
                    );
                }
                Ok(envelope)
            }
            Err(_) if !response.is_success() => {
                log::warn!(
                    "{method} {url} failed with status {}: {}",
                    response.status,
                    response.text().unwrap_or_default()
                );
                Err(ApiError::Status {
                    status: response.status,
                })
            }
            Err(e) => Err(ApiError::Decode(e.to_string())),
        }
    }

    /// Sends one request and decodes the envelope's `data` as `T`.
    pub async fn call<T: DeserializeOwned>(
        &self,
        path: &str,
        method: Method,
        options: CallOptions,
    ) -> ApiResult<T> {
        self.call_envelope(path, method, options)
            .await?
            .into_typed()
    }

    /// Sends one request whose `data` is an opaque acknowledgement.
    pub async fn call_ack(
        &self,
        path: &str,
        method: Method,
        options: CallOptions,
    ) -> ApiResult<()> {
        self.call_envelope(path, method, options).await?.into_ack()
    }
}

/// The user operations the user-general page depends on.
#[async_trait]
pub trait UsersApi: Send + Sync {
    async fn fetch_users(
        &self,
        query: &UserQuery,
        page: PageRequest,
    ) -> ApiResult<PageResult<UserRecord>>;

    async fn delete_user(&self, id: u64) -> ApiResult<()>;

    async fn set_blacklist(&self, id: u64, flag: BlacklistFlag) -> ApiResult<()>;
}

#[async_trait]
impl UsersApi for ApiClient {
    async fn fetch_users(
        &self,
        query: &UserQuery,
        page: PageRequest,
    ) -> ApiResult<PageResult<UserRecord>> {
        users::fetch_users(self, query, page).await
    }

    async fn delete_user(&self, id: u64) -> ApiResult<()> {
        users::delete_user(self, id).await
    }

    async fn set_blacklist(&self, id: u64, flag: BlacklistFlag) -> ApiResult<()> {
        users::set_blacklist(self, id, flag).await
    }
}
