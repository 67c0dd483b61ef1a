//! Configuration options for the Cantina client

use std::time::Duration;

/// Configuration options for the Cantina client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// The request timeout applied to every backend call
    pub request_timeout: Option<Duration>,

    /// Value sent as the `X-Client-Info` header
    pub client_info: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            request_timeout: Some(Duration::from_secs(30)),
            client_info: format!("cantina-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientOptions {
    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Set the `X-Client-Info` header value
    pub fn with_client_info(mut self, value: &str) -> Self {
        self.client_info = value.to_string();
        self
    }
}
