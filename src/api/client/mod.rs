//! reqwest-backed implementation of [`QueryBackend`].

use super::{QueryBackend, QueryRequest, QueryResponse};
use crate::config::BackendConfig;
use crate::error::ApiError;
use async_trait::async_trait;
use std::time::Duration;

/// Client for the local query service.
pub struct HttpQueryClient {
    http: reqwest::Client,
    query_url: String,
}

impl HttpQueryClient {
    /// Build a client from resolved backend configuration.
    pub fn new(config: &BackendConfig) -> Self {
        Self::with_timeout(&config.query_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn with_timeout(query_url: &str, timeout: Duration) -> Self {
        Self {
            http: build_http_client(timeout),
            query_url: query_url.trim().to_string(),
        }
    }

    /// Send one command and decode the `{response, is_ai}` payload.
    pub async fn query(&self, command: &str) -> Result<QueryResponse, ApiError> {
        let body = QueryRequest {
            command: command.to_string(),
        };
        let response = self.http.post(&self.query_url).json(&body).send().await?;
        if !response.status().is_success() {
            let code = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { code, body });
        }

        let text = response.text().await?;
        serde_json::from_str::<QueryResponse>(&text)
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl QueryBackend for HttpQueryClient {
    async fn query(&self, command: &str) -> Result<QueryResponse, ApiError> {
        HttpQueryClient::query(self, command).await
    }
}

fn build_http_client(timeout: Duration) -> reqwest::Client {
    // Fall back to reqwest defaults if builder creation fails for any reason.
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response and hand back the raw request text.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.expect("accept");
            let request = read_request(&mut stream).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes()).await;
            request
        });
        (format!("http://{addr}/query"), server)
    }

    /// Read headers plus a `Content-Length` body; headers and body may
    /// arrive in separate writes.
    async fn read_request(stream: &mut tokio::net::TcpStream) -> String {
        let mut data = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).await.unwrap_or(0);
            if n == 0 {
                break;
            }
            data.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&data).to_string();
            let Some(header_end) = text.find("\r\n\r\n") else {
                continue;
            };
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if data.len() >= header_end + 4 + content_length {
                break;
            }
        }
        String::from_utf8_lossy(&data).to_string()
    }

    #[tokio::test]
    async fn query_posts_command_and_decodes_answer() {
        let (url, server) =
            serve_once("200 OK", r#"{"response":"I build things.","is_ai":true}"#).await;
        let client = HttpQueryClient::with_timeout(&url, Duration::from_secs(3));
        let answer = client.query("about").await.expect("query ok");
        assert_eq!(answer.response, "I build things.");
        assert!(answer.is_ai);

        let request = server.await.expect("server task");
        assert!(request.starts_with("POST /query"), "got: {request}");
        assert!(request.contains(r#"{"command":"about"}"#), "got: {request}");
    }

    #[tokio::test]
    async fn missing_is_ai_defaults_to_false() {
        let (url, _server) = serve_once("200 OK", r#"{"response":"hello"}"#).await;
        let client = HttpQueryClient::with_timeout(&url, Duration::from_secs(3));
        let answer = client.query("welcome").await.expect("query ok");
        assert!(!answer.is_ai);
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let (url, _server) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;
        let client = HttpQueryClient::with_timeout(&url, Duration::from_secs(3));
        let err = client.query("about").await.expect_err("status error");
        match err {
            ApiError::Status { code, body } => {
                assert_eq!(code, 500);
                assert!(body.contains("boom"), "got: {body}");
            }
            other => panic!("expected status error, got: {other}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_invalid_response() {
        let (url, _server) = serve_once("200 OK", r#"{"answer":"wrong shape"}"#).await;
        let client = HttpQueryClient::with_timeout(&url, Duration::from_secs(3));
        let err = client.query("about").await.expect_err("decode error");
        assert!(matches!(err, ApiError::InvalidResponse(_)), "got: {err}");
    }

    #[tokio::test]
    async fn client_respects_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Accept one connection and keep it open so the client must time out.
        let _accept = tokio::spawn(async move {
            let (_stream, _) = listener.accept().await.expect("accept");
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let url = format!("http://{addr}/query");
        let client = HttpQueryClient::with_timeout(&url, Duration::from_millis(50));
        let err = client.query("about").await.expect_err("timeout expected");
        match err {
            ApiError::Http(inner) => assert!(inner.is_timeout(), "unexpected error: {inner}"),
            other => panic!("expected timeout Http error, got: {other}"),
        }
    }
}
