use crate::config::DownloaderConfig;
use crate::error::{FetchError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Raw response from the object store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteResponse {
    pub status: u16,

    /// Body bytes; only read for 200 responses
    pub body: Vec<u8>,
}

impl RemoteResponse {
    pub fn ok(body: Vec<u8>) -> Self {
        Self { status: StatusCode::OK.as_u16(), body }
    }

    pub fn status(status: u16) -> Self {
        Self { status, body: Vec::new() }
    }
}

/// Read-only access to the remote object store
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// GET a single object
    async fn get(&self, url: &str) -> Result<RemoteResponse>;
}

/// `RemoteStore` backed by plain HTTP GETs
pub struct HttpRemote {
    client: Client,
}

impl HttpRemote {
    pub fn new(config: &DownloaderConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| FetchError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl RemoteStore for HttpRemote {
    async fn get(&self, url: &str) -> Result<RemoteResponse> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(|e| FetchError::http(url, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Ok(RemoteResponse::status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| FetchError::http(url, e))?;
        Ok(RemoteResponse::ok(body.to_vec()))
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::collections::HashMap;
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tracing::subscriber::DefaultGuard;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer};
    use tracing_subscriber::prelude::*;

    pub(crate) fn gzip(bytes: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(bytes).unwrap();
        encoder.finish().unwrap()
    }

    /// Counts warn and error events on the current thread while installed
    #[derive(Clone, Default)]
    pub(crate) struct WarnCounter(Arc<AtomicUsize>);

    impl WarnCounter {
        pub(crate) fn install(&self) -> DefaultGuard {
            tracing::subscriber::set_default(tracing_subscriber::registry().with(self.clone()))
        }

        pub(crate) fn count(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }
    }

    impl<S: Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() <= Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    /// In-memory store; unknown URLs answer 404
    #[derive(Default)]
    pub(crate) struct MockRemote {
        responses: HashMap<String, RemoteResponse>,
        unreachable: Vec<String>,
        requests: Mutex<Vec<String>>,
    }

    impl MockRemote {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn with_json(mut self, url: impl Into<String>, json: &[u8]) -> Self {
            self.responses.insert(url.into(), RemoteResponse::ok(gzip(json)));
            self
        }

        pub(crate) fn with_raw(mut self, url: impl Into<String>, body: Vec<u8>) -> Self {
            self.responses.insert(url.into(), RemoteResponse::ok(body));
            self
        }

        pub(crate) fn with_status(mut self, url: impl Into<String>, status: u16) -> Self {
            self.responses.insert(url.into(), RemoteResponse::status(status));
            self
        }

        pub(crate) fn with_unreachable(mut self, url: impl Into<String>) -> Self {
            self.unreachable.push(url.into());
            self
        }

        pub(crate) fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RemoteStore for MockRemote {
        async fn get(&self, url: &str) -> Result<RemoteResponse> {
            self.requests.lock().unwrap().push(url.to_string());

            if self.unreachable.iter().any(|u| u == url) {
                return Err(FetchError::http(url, "connection refused"));
            }

            Ok(self.responses.get(url).cloned().unwrap_or_else(|| RemoteResponse::status(404)))
        }
    }
}
