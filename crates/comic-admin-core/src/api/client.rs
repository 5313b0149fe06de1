//! HTTP client
//!
//! `reqwest` runs on `fetch` in the browser and on hyper natively, so the
//! same client is used by the UI and by native tooling.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiResult};
use super::DEFAULT_BASE_URL;
use crate::domain::{EntityId, Resource};
use crate::manager::CrudBackend;

/// Body of a backend error response
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// A successful response, already read
struct Reply {
    is_json: bool,
    body: String,
}

impl Reply {
    fn json<T: DeserializeOwned>(&self) -> ApiResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Stored record if the backend echoed one back
    ///
    /// The write has already happened, so a body that does not decode is
    /// dropped rather than reported.
    fn echoed<T: DeserializeOwned>(&self) -> Option<T> {
        if !self.is_json || self.body.trim().is_empty() {
            return None;
        }
        match serde_json::from_str(&self.body) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("ignoring undecodable write reply: {}", e);
                None
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http: reqwest::Client::new() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<Reply> {
        let url = self.url(path);
        log::debug!("{} {}", method, url);

        let mut request = self.http.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            log::warn!("{} {} failed: {}", method, url, e);
            ApiError::from(e)
        })?;

        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.contains("application/json"))
            .unwrap_or(false);
        let body = response.text().await?;

        if !is_success(status) {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message);
            log::warn!("{} {} returned {}", method, url, status);
            return Err(ApiError::Status { status: status.as_u16(), message });
        }

        Ok(Reply { is_json, body })
    }
}

fn is_success(status: StatusCode) -> bool {
    matches!(status, StatusCode::OK | StatusCode::CREATED | StatusCode::NO_CONTENT)
}

#[async_trait(?Send)]
impl<T: Resource> CrudBackend<T> for ApiClient {
    async fn list(&self) -> ApiResult<Vec<T>> {
        let reply = self.send::<()>(Method::GET, T::KIND.endpoints().list, None).await?;
        reply.json()
    }

    async fn create(&self, draft: &T) -> ApiResult<Option<T>> {
        let reply = self.send(Method::POST, T::KIND.endpoints().create, Some(draft)).await?;
        Ok(reply.echoed())
    }

    async fn update(&self, id: EntityId, draft: &T) -> ApiResult<Option<T>> {
        let path = T::KIND.endpoints().update_path(id);
        let reply = self.send(Method::PUT, &path, Some(draft)).await?;
        Ok(reply.echoed())
    }

    async fn delete(&self, id: EntityId) -> ApiResult<()> {
        let path = T::KIND.endpoints().delete_path(id);
        self.send::<()>(Method::DELETE, &path, None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://example.test/api/");
        assert_eq!(client.url("/aste/get-all"), "http://example.test/api/aste/get-all");
    }

    #[test]
    fn test_only_listed_statuses_succeed() {
        assert!(is_success(StatusCode::OK));
        assert!(is_success(StatusCode::CREATED));
        assert!(is_success(StatusCode::NO_CONTENT));
        assert!(!is_success(StatusCode::ACCEPTED));
        assert!(!is_success(StatusCode::SERVICE_UNAVAILABLE));
    }

    #[test]
    fn test_reply_without_json_yields_none() {
        let reply = Reply { is_json: false, body: "Eliminato".into() };
        let parsed: Option<crate::domain::Subscription> = reply.echoed();
        assert!(parsed.is_none());

        let reply = Reply {
            is_json: true,
            body: r#"{"abbonamentoId":3,"pianoAbbonamento":"ANNUALE"}"#.into(),
        };
        let parsed: Option<crate::domain::Subscription> = reply.echoed();
        assert_eq!(parsed.and_then(|s| s.id), Some(3));
    }

    #[test]
    fn test_mismatched_write_reply_is_dropped() {
        let reply = Reply {
            is_json: true,
            body: r#"{"fumettoId":9,"titolo":"Tex","categoria":"AZIONE"}"#.into(),
        };
        let parsed: Option<crate::domain::Comic> = reply.echoed();
        assert!(parsed.is_none());
    }
}
