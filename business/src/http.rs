//! HTTP transport used by the API client.
//!
//! Requests are assembled with [`Client`] into a [`RequestBuilder`] that only holds
//! plain data (method, url, headers, query pairs, body). Sending buffers the whole
//! reqwest response into a [`Response`], so callers never hold reqwest types across
//! their own state and tests can inspect a request before it leaves the process.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

/// HTTP method for requests.
///
/// The admin backend only exposes reads (`GET`) and mutations (`POST`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A buffered HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response headers (lowercased keys)
    pub headers: HashMap<String, String>,
    /// Response body as bytes
    pub body: Vec<u8>,
}

impl Response {
    /// Returns true if the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(|s| s.as_str())
    }

    /// Attempt to parse the body as UTF-8 text.
    pub fn text(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.clone())
    }

    /// Attempt to deserialize the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport-level failure: the request could not be encoded or never produced a response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("HTTP error: {message}")]
pub struct HttpError {
    pub message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result type for HTTP operations.
pub type HttpResult<T> = Result<T, HttpError>;

/// Flattens a serializable value into URL query pairs.
///
/// The value must serialize to a JSON object whose fields are scalars. `null`
/// fields are dropped, which is how optional filters stay out of the query string.
pub fn query_pairs<T: Serialize + ?Sized>(value: &T) -> HttpResult<Vec<(String, String)>> {
    let value = serde_json::to_value(value)
        .map_err(|e| HttpError::new(format!("Failed to encode query: {e}")))?;

    let Value::Object(fields) = value else {
        return Err(HttpError::new("Query parameters must be a struct or map"));
    };

    let mut pairs = Vec::with_capacity(fields.len());
    for (key, field) in fields {
        let encoded = match field {
            Value::Null => continue,
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => s,
            Value::Array(_) | Value::Object(_) => {
                return Err(HttpError::new(format!(
                    "Query parameter `{key}` must be a scalar"
                )));
            }
        };
        pairs.push((key, encoded));
    }
    Ok(pairs)
}

/// A builder for constructing HTTP requests.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    inner: reqwest::Client,
    method: Method,
    url: String,
    headers: HashMap<String, String>,
    query: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl RequestBuilder {
    fn new(inner: reqwest::Client, method: Method, url: impl Into<String>) -> Self {
        Self {
            inner,
            method,
            url: url.into(),
            headers: HashMap::new(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Append query pairs to the request.
    pub fn query(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize + ?Sized>(mut self, value: &T) -> HttpResult<Self> {
        let json_bytes = serde_json::to_vec(value)
            .map_err(|e| HttpError::new(format!("Failed to encode body: {e}")))?;
        self.body = Some(json_bytes);
        self.headers
            .insert("content-type".to_owned(), "application/json".to_owned());
        Ok(self)
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn query_params(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body_bytes(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Send the request and buffer the response.
    pub async fn send(self) -> HttpResult<Response> {
        let mut request = match self.method {
            Method::Get => self.inner.get(&self.url),
            Method::Post => self.inner.post(&self.url),
        };

        if !self.query.is_empty() {
            request = request.query(&self.query);
        }

        for (name, value) in &self.headers {
            request = request.header(name, value);
        }

        if let Some(body) = self.body {
            request = request.body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?;

        // Extract status and headers before consuming the response
        let status = response.status().as_u16();
        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(name.as_str().to_lowercase(), v.to_owned());
            }
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?
            .to_vec();

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}

/// HTTP client. Cloning is cheap; clones share one connection pool.
///
/// # Example
///
/// ```ignore
/// use roster_business::http::Client;
///
/// async fn fetch_data(client: &Client) {
///     let response = client
///         .get("https://admin.example.com/user/info")
///         .query([("pageIndex".to_owned(), "1".to_owned())])
///         .send()
///         .await?;
///
///     if response.is_success() {
///         let data: MyData = response.json()?;
///     }
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Client {
    inner: reqwest::Client,
}

impl Client {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(self.inner.clone(), Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(self.inner.clone(), Method::Post, url)
    }

    /// Create a request for the given method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(self.inner.clone(), method, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_is_success() {
        let response = Response {
            status: 200,
            headers: HashMap::new(),
            body: Vec::new(),
        };
        assert!(response.is_success());

        let response = Response {
            status: 502,
            headers: HashMap::new(),
            body: Vec::new(),
        };
        assert!(!response.is_success());
    }

    #[test]
    fn test_response_header_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_owned(), "application/json".to_owned());

        let response = Response {
            status: 200,
            headers,
            body: Vec::new(),
        };

        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn test_query_pairs_skip_null_fields() {
        let mut pairs = query_pairs(&serde_json::json!({
            "nickname": "amy",
            "gender": 2,
            "realname": null,
            "isBlack": false,
        }))
        .unwrap();
        pairs.sort();

        assert_eq!(
            pairs,
            vec![
                ("gender".to_owned(), "2".to_owned()),
                ("isBlack".to_owned(), "false".to_owned()),
                ("nickname".to_owned(), "amy".to_owned()),
            ]
        );
    }

    #[test]
    fn test_query_pairs_rejects_nested_values() {
        let err = query_pairs(&serde_json::json!({ "ids": [1, 2] })).unwrap_err();
        assert!(err.message.contains("ids"));

        let err = query_pairs(&42).unwrap_err();
        assert!(err.message.contains("struct or map"));
    }

    #[test]
    fn test_request_builder_json_sets_content_type() {
        let builder = Client::new()
            .post("https://example.com/user/blacklist")
            .json(&serde_json::json!({ "userId": 3, "isBlack": 1 }))
            .unwrap();

        assert_eq!(builder.method(), Method::Post);
        assert_eq!(
            builder.headers.get("content-type"),
            Some(&"application/json".to_owned())
        );
        let body: Value = serde_json::from_slice(builder.body_bytes().unwrap()).unwrap();
        assert_eq!(body["isBlack"], 1);
    }

    #[test]
    fn test_request_builder_query_accumulates() {
        let builder = Client::new()
            .get("https://example.com/register/info")
            .query([("pageIndex".to_owned(), "1".to_owned())])
            .query([("pageSize".to_owned(), "20".to_owned())]);

        assert_eq!(builder.query_params().len(), 2);
        assert_eq!(builder.url(), "https://example.com/register/info");
    }
}
