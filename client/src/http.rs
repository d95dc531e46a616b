//! Bearer-token HTTP client for the Materiah REST API
//!
//! Thin wrapper over reqwest: every call sends `Authorization: Token <value>`,
//! speaks JSON both ways, and maps failures to [`ApiError`]. Each call is
//! one-shot; there is no retry policy.

use std::time::Duration;

use reqwest::{header::AUTHORIZATION, Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::ApiConfig;
use crate::error::{messages_from_body, ApiError, ApiResult};

/// API client holding the base URL and the session token
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    token: String,
}

impl ApiClient {
    /// Create a new ApiClient for a given token
    pub fn new(config: &ApiConfig, token: impl Into<String>) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        let mut base_url = Url::parse(&config.base_url)?;
        // A trailing slash is required for Url::join to keep the API prefix
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        Ok(Self {
            http,
            base_url,
            token: token.into(),
        })
    }

    /// Resolve a relative endpoint path against the base URL
    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// GET a relative endpoint
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "GET");
        self.send(self.http.get(url)).await
    }

    /// GET a relative endpoint with query parameters
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> ApiResult<T> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, ?query, "GET");
        self.send(self.http.get(url).query(query)).await
    }

    /// GET an absolute URL, e.g. an opaque pagination cursor
    pub async fn get_url<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let url = Url::parse(url)?;
        tracing::debug!(%url, "GET (cursor)");
        self.send(self.http.get(url)).await
    }

    /// POST a JSON body
    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "POST");
        self.send(self.http.post(url).json(body)).await
    }

    /// PATCH a JSON body (partial update)
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "PATCH");
        self.send(self.http.patch(url).json(body)).await
    }

    /// DELETE an endpoint; the API answers 204 with no body
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "DELETE");
        let request = self.http.delete(url);
        let response = self.authorize(request).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(AUTHORIZATION, format!("Token {}", self.token))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = self.authorize(request).send().await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// Map a non-success response to an [`ApiError`]
    async fn check(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        tracing::error!(status = %status, url = %response.url(), "API request rejected");

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Unauthorized),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(response.url().path().to_string())),
            _ => {
                let body: serde_json::Value =
                    response.json().await.unwrap_or(serde_json::Value::Null);
                Err(ApiError::Rejected {
                    status: status.as_u16(),
                    messages: messages_from_body(&body),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        let config = ApiConfig {
            base_url: base.to_string(),
            ..ApiConfig::default()
        };
        ApiClient::new(&config, "test-token").unwrap()
    }

    #[test]
    fn test_endpoint_keeps_api_prefix() {
        let client = client("http://localhost:8000/api");
        let url = client.endpoint("products/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/products/");
    }

    #[test]
    fn test_endpoint_with_trailing_slash_base() {
        let client = client("http://localhost:8000/api/");
        let url = client.endpoint("orders/17/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/orders/17/");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let config = ApiConfig {
            base_url: "not a url".to_string(),
            ..ApiConfig::default()
        };
        assert!(ApiClient::new(&config, "t").is_err());
    }
}
