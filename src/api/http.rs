use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Error type for API calls
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response. `message` is the body's `detail` string when the
    /// body is a JSON object carrying one, else the status's reason phrase.
    #[error("{message}")]
    Status {
        status: StatusCode,
        message: String,
        /// Parsed response body, when it was valid JSON
        body: Option<Value>,
    },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status of the failed response, if this was a status error
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Thin JSON client over a configured base URL.
///
/// Owns no retry or timeout policy; the transport stack's defaults apply.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    inner: reqwest::Client,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpClient {
            base_url: base_url.into(),
            inner: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join base URL and path with a single slash at the seam, then strip
    /// one trailing slash from the result.
    fn url(&self, path: &str) -> String {
        let base = self.base_url.strip_suffix('/').unwrap_or(&self.base_url);
        let mut url = format!("{}/{}", base, path.strip_prefix('/').unwrap_or(path));
        if url.ends_with('/') {
            url.pop();
        }
        url
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        decode(self.send(Method::GET, path, None).await?)
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body)?;
        decode(self.send(Method::POST, path, Some(body)).await?)
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body)?;
        decode(self.send(Method::PATCH, path, Some(body)).await?)
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::DELETE, path, None).await?;
        Ok(())
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Option<Value>, ApiError> {
        let url = self.url(path);
        tracing::debug!(method = %method, url = %url, "api request");

        // POST/PATCH always carry a JSON body, `{}` when none was given
        let body = body.or_else(|| {
            (method == Method::POST || method == Method::PATCH)
                .then(|| Value::Object(serde_json::Map::new()))
        });

        let mut request = self
            .inner
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            // Parse failure here is swallowed; the reason phrase stands in
            let body: Option<Value> = response.json().await.ok();
            let message = body
                .as_ref()
                .and_then(|b| b.get("detail"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            tracing::warn!(status = %status, message = %message, "api error response");
            return Err(ApiError::Status {
                status,
                message,
                body,
            });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        Ok(Some(response.json().await?))
    }
}

fn decode<T: DeserializeOwned>(value: Option<Value>) -> Result<T, ApiError> {
    Ok(serde_json::from_value(value.unwrap_or(Value::Null))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_url_join_no_doubled_or_missing_slash() {
        let with_slash = HttpClient::new("http://api.example.com/");
        assert_eq!(with_slash.url("/tasks"), "http://api.example.com/tasks");

        let without_slash = HttpClient::new("http://api.example.com");
        assert_eq!(without_slash.url("tasks"), "http://api.example.com/tasks");
        assert_eq!(without_slash.url("/tasks"), "http://api.example.com/tasks");
    }

    #[test]
    fn test_url_join_strips_one_trailing_slash() {
        let client = HttpClient::new("http://api.example.com");
        assert_eq!(client.url("/tasks/"), "http://api.example.com/tasks");
    }

    #[tokio::test]
    async fn test_error_message_prefers_detail_field() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/tasks/9")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail": "not found"}"#)
            .create_async()
            .await;

        let client = HttpClient::new(server.url());
        let err = client.get::<Value>("/tasks/9").await.unwrap_err();

        match err {
            ApiError::Status {
                status,
                message,
                body,
            } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(message, "not found");
                assert_eq!(body, Some(serde_json::json!({"detail": "not found"})));
            }
            other => panic!("expected status error, got {:?}", other),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_message_falls_back_to_reason_phrase() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/tasks")
            .with_status(500)
            .with_body("<html>oops</html>")
            .create_async()
            .await;

        let client = HttpClient::new(server.url());
        let err = client.get::<Value>("/tasks").await.unwrap_err();

        match err {
            ApiError::Status {
                status,
                message,
                body,
            } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(message, "Internal Server Error");
                assert_eq!(body, None);
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_string_detail_is_opaque() {
        // FastAPI validation errors carry a list under `detail`; anything
        // that is not a string falls back to the reason phrase
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/tasks")
            .with_status(422)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail": [{"loc": ["title"], "msg": "required"}]}"#)
            .create_async()
            .await;

        let client = HttpClient::new(server.url());
        let err = client
            .post::<Value, _>("/tasks", &serde_json::json!({}))
            .await
            .unwrap_err();

        match err {
            ApiError::Status {
                message, status, ..
            } => {
                assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
                assert_eq!(message, "Unprocessable Entity");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_no_content_resolves_without_parsing() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/tasks/3")
            .with_status(204)
            .create_async()
            .await;

        let client = HttpClient::new(server.url());
        client.delete("/tasks/3").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_requests_send_json_content_type() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/tags")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let client = HttpClient::new(server.url());
        let tags: Vec<Value> = client.get("/tags").await.unwrap();
        assert!(tags.is_empty());
        mock.assert_async().await;
    }
}
