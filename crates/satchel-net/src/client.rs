use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::Stream;

/// A boxed stream type for HTTP response bodies.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

/// Asynchronous HTTP client abstraction.
///
/// This trait is the minimal surface the crate's two network operations
/// need. Implementations handle their own redirect following and timeout
/// configuration.
///
/// # Implementations
///
/// - [`ReqwestClient`]: production implementation using `reqwest`
/// - In-memory mocks in tests
pub trait HttpClient: Send + Sync {
    /// Error type for HTTP operations.
    type Error: std::error::Error + Send + 'static;

    /// Open a streaming GET and return the response body as a chunk stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails (DNS failure, connection
    /// error, and so on).
    fn stream(
        &self,
        url: &str,
    ) -> impl Future<
        Output = std::result::Result<
            BoxStream<'static, std::result::Result<Bytes, Self::Error>>,
            Self::Error,
        >,
    > + Send;

    /// GET a URL and buffer the whole body as text.
    ///
    /// The body is returned regardless of the response status; callers that
    /// care about status-dependent content decode it and react to what they
    /// find.
    fn get_text(
        &self,
        url: &str,
    ) -> impl Future<Output = std::result::Result<String, Self::Error>> + Send;
}

/// Production HTTP client implementation using reqwest.
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a new client with default configuration.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestClient {
    type Error = reqwest::Error;

    async fn stream(
        &self,
        url: &str,
    ) -> std::result::Result<BoxStream<'static, std::result::Result<Bytes, Self::Error>>, Self::Error>
    {
        let response = self.client.get(url).send().await?;
        Ok(Box::pin(response.bytes_stream()))
    }

    async fn get_text(&self, url: &str) -> std::result::Result<String, Self::Error> {
        self.client.get(url).send().await?.text().await
    }
}
