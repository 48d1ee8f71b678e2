//! HTTP client wrapper - executes backend calls and normalizes responses

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;

use crate::config::ConfigStore;
use crate::error::{ApiError, ApiResult};
use crate::models::{ApiResponse, HttpMethod, RequestBody};

/// Issues calls against whatever backend URL is currently configured
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Arc<ConfigStore>,
}

impl ApiClient {
    pub fn new(config: Arc<ConfigStore>) -> Self {
        ApiClient {
            http: create_client(),
            config,
        }
    }

    /// Perform exactly one request against `<base url><endpoint>`.
    ///
    /// The endpoint is appended verbatim, so it needs its own leading slash.
    pub async fn api_call(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: RequestBody,
    ) -> ApiResult<ApiResponse> {
        let url = format!("{}{}", self.config.get_api_url(), endpoint);
        let result = self.send(&url, method, body).await;
        if let Err(e) = &result {
            tracing::error!(url = %url, method = method.as_str(), error = %e, "API Error");
        }
        result
    }

    async fn send(&self, url: &str, method: HttpMethod, body: RequestBody) -> ApiResult<ApiResponse> {
        let mut req_builder = self.http.request(method.to_reqwest(), url);

        req_builder = match body {
            RequestBody::Empty => req_builder,
            RequestBody::Json(value) => {
                let text = serde_json::to_string(&value)
                    .map_err(|e| ApiError::Malformed(format!("Could not encode body: {}", e)))?;
                req_builder.header(CONTENT_TYPE, "application/json").body(text)
            }
            // reqwest sets the multipart content type and boundary itself
            RequestBody::Form(form) => req_builder.multipart(form),
        };

        let resp = req_builder.send().await?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.bytes().await.unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), &body));
        }

        let is_json = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));

        let bytes = resp.bytes().await?;
        if is_json {
            serde_json::from_slice(&bytes)
                .map(ApiResponse::Json)
                .map_err(|e| ApiError::Malformed(format!("Invalid JSON response: {}", e)))
        } else {
            Ok(ApiResponse::Binary(bytes.to_vec()))
        }
    }
}

/// Create an HTTP client with default configuration.
///
/// No timeout is configured; the transport's own defaults apply.
pub fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(concat!("asbot-console/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::{tempdir, TempDir};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// One-shot backend: answers a single connection with a canned response
    /// and hands back the raw request it received.
    pub(crate) async fn mock_backend(
        status: u16,
        content_type: Option<&'static str>,
        body: &'static [u8],
    ) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let _ = tx.send(request);

            let mut head = format!("HTTP/1.1 {} Mock\r\n", status);
            if let Some(ct) = content_type {
                head.push_str(&format!("Content-Type: {}\r\n", ct));
            }
            head.push_str(&format!(
                "Content-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            ));
            socket.write_all(head.as_bytes()).await.unwrap();
            socket.write_all(body).await.unwrap();
            socket.shutdown().await.ok();
        });

        (format!("http://{}", addr), rx)
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut data = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            data.extend_from_slice(&buf[..n]);

            let text = String::from_utf8_lossy(&data);
            if let Some(end) = text.find("\r\n\r\n") {
                let content_length = text[..end]
                    .lines()
                    .filter_map(|l| l.split_once(':'))
                    .find(|(k, _)| k.trim().eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, v)| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if data.len() >= end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&data).to_string()
    }

    pub(crate) fn client_for(base_url: &str) -> (ApiClient, TempDir) {
        let dir = tempdir().unwrap();
        let config = ConfigStore::with_dir(dir.path());
        config.set_api_url(Some(base_url)).unwrap();
        (ApiClient::new(Arc::new(config)), dir)
    }

    fn header<'a>(request: &'a str, name: &str) -> Option<&'a str> {
        request
            .lines()
            .filter_map(|l| l.split_once(':'))
            .find(|(k, _)| k.trim().eq_ignore_ascii_case(name))
            .map(|(_, v)| v.trim())
    }

    #[tokio::test]
    async fn test_json_success() {
        let (url, req_rx) = mock_backend(200, Some("application/json"), br#"{"success":true}"#).await;
        let (client, _dir) = client_for(&url);

        let resp = client
            .api_call("/status", HttpMethod::GET, RequestBody::Empty)
            .await
            .unwrap();
        assert_eq!(resp, ApiResponse::Json(json!({"success": true})));

        let request = req_rx.await.unwrap();
        assert!(request.starts_with("GET /status HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_error_body_message() {
        let (url, _rx) = mock_backend(500, Some("application/json"), br#"{"error":"boom"}"#).await;
        let (client, _dir) = client_for(&url);

        let err = client
            .api_call("/status", HttpMethod::GET, RequestBody::Empty)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }

    #[tokio::test]
    async fn test_unparseable_error_body() {
        let (url, _rx) = mock_backend(500, Some("text/html"), b"<h1>Internal Server Error</h1>").await;
        let (client, _dir) = client_for(&url);

        let err = client
            .api_call("/status", HttpMethod::GET, RequestBody::Empty)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Request failed: 500");
    }

    #[tokio::test]
    async fn test_binary_payload_passthrough() {
        let (url, _rx) = mock_backend(200, Some("application/zip"), b"PK\x03\x04data").await;
        let (client, _dir) = client_for(&url);

        let resp = client
            .api_call("/export", HttpMethod::GET, RequestBody::Empty)
            .await
            .unwrap();
        assert_eq!(resp, ApiResponse::Binary(b"PK\x03\x04data".to_vec()));
    }

    #[tokio::test]
    async fn test_malformed_json_is_error() {
        let (url, _rx) = mock_backend(200, Some("application/json"), b"{not json").await;
        let (client, _dir) = client_for(&url);

        let err = client
            .api_call("/status", HttpMethod::GET, RequestBody::Empty)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_json_body_sets_content_type() {
        let (url, req_rx) = mock_backend(200, Some("application/json"), br#"{"success":true}"#).await;
        let (client, _dir) = client_for(&url);

        client
            .api_call("/move", HttpMethod::POST, RequestBody::Json(json!({"speed": 3})))
            .await
            .unwrap();

        let request = req_rx.await.unwrap();
        assert!(request.starts_with("POST /move HTTP/1.1"));
        assert_eq!(header(&request, "content-type"), Some("application/json"));
        assert!(request.ends_with(r#"{"speed":3}"#));
    }

    #[tokio::test]
    async fn test_form_body_has_no_json_content_type() {
        let (url, req_rx) = mock_backend(200, Some("application/json"), br#"{"success":true}"#).await;
        let (client, _dir) = client_for(&url);

        let form = reqwest::multipart::Form::new().part(
            "file",
            reqwest::multipart::Part::bytes(b"firmware".to_vec()).file_name("fw.bin"),
        );
        client
            .api_call("/upload", HttpMethod::POST, RequestBody::Form(form))
            .await
            .unwrap();

        let request = req_rx.await.unwrap();
        let content_type = header(&request, "content-type").unwrap();
        assert!(content_type.starts_with("multipart/form-data"));
        assert!(!content_type.contains("application/json"));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let (client, _dir) = client_for(&format!("http://{}", addr));
        let err = client
            .api_call("/status", HttpMethod::GET, RequestBody::Empty)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
