use std::io;

use anyhow::Result;
use bytes::Bytes;
use futures_util::stream;
use satchel_net::{BoxStream, HttpClient, download_to_file, gbp_exchange_rate};

/// Serves a canned body, both as a chunk stream and as text.
struct StaticClient {
    chunks: Vec<Bytes>,
    text: String,
}

impl StaticClient {
    fn with_chunks(chunks: &[&str]) -> Self {
        Self {
            chunks: chunks.iter().map(|c| Bytes::from(c.to_string())).collect(),
            text: chunks.concat(),
        }
    }

    fn with_text(text: &str) -> Self {
        Self::with_chunks(&[text])
    }
}

impl HttpClient for StaticClient {
    type Error = io::Error;

    async fn stream(
        &self,
        _url: &str,
    ) -> std::result::Result<BoxStream<'static, std::result::Result<Bytes, io::Error>>, io::Error>
    {
        let items: Vec<std::result::Result<Bytes, io::Error>> =
            self.chunks.iter().cloned().map(Ok).collect();
        Ok(Box::pin(stream::iter(items)))
    }

    async fn get_text(&self, _url: &str) -> std::result::Result<String, io::Error> {
        Ok(self.text.clone())
    }
}

/// Fails every request at the connection step.
struct FailingClient;

impl HttpClient for FailingClient {
    type Error = io::Error;

    async fn stream(
        &self,
        _url: &str,
    ) -> std::result::Result<BoxStream<'static, std::result::Result<Bytes, io::Error>>, io::Error>
    {
        Err(io::Error::other("connection refused"))
    }

    async fn get_text(&self, _url: &str) -> std::result::Result<String, io::Error> {
        Err(io::Error::other("connection refused"))
    }
}

#[tokio::test]
async fn download_writes_all_streamed_bytes() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let destination = dir.path().join("payload.bin");
    let client = StaticClient::with_chunks(&["hello ", "world"]);

    let written = download_to_file(&client, "http://example.test/payload", &destination).await?;

    assert_eq!(written, 11);
    assert_eq!(std::fs::read_to_string(&destination)?, "hello world");
    Ok(())
}

#[tokio::test]
async fn download_empty_body_creates_empty_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let destination = dir.path().join("empty.bin");
    let client = StaticClient::with_chunks(&[]);

    let written = download_to_file(&client, "http://example.test/empty", &destination).await?;

    assert_eq!(written, 0);
    assert_eq!(std::fs::metadata(&destination)?.len(), 0);
    Ok(())
}

#[tokio::test]
async fn download_connection_failure_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("never.bin");

    let result = download_to_file(&FailingClient, "http://example.test/x", &destination).await;

    assert!(result.is_err());
    // connection failed before the file was created
    assert!(!destination.exists());
}

#[tokio::test]
async fn rate_fetch_extracts_gbp() {
    let client = StaticClient::with_text(r#"{"rates":{"GBP":0.85,"USD":1.08},"base":"EUR"}"#);
    let rate = gbp_exchange_rate(&client, "EUR", 0.5).await;
    assert_eq!(rate, 0.85);
}

#[tokio::test]
async fn rate_fetch_missing_gbp_is_zero() {
    let client = StaticClient::with_text(r#"{"rates":{"USD":1.08}}"#);
    let rate = gbp_exchange_rate(&client, "EUR", 0.5).await;
    assert_eq!(rate, 0.0);
}

#[tokio::test]
async fn rate_fetch_bad_json_returns_fallback() {
    let client = StaticClient::with_text("<html>rate limited</html>");
    let rate = gbp_exchange_rate(&client, "EUR", 0.5).await;
    assert_eq!(rate, 0.5);
}

#[tokio::test]
async fn rate_fetch_request_failure_returns_fallback() {
    let rate = gbp_exchange_rate(&FailingClient, "EUR", 0.73).await;
    assert_eq!(rate, 0.73);
}
