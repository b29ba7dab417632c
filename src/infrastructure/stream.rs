//! OS image stream metadata source
//!
//! Reads CoreOS stream JSON from an HTTP(S) URL or a local file. HTTP
//! requests are bounded by the configured timeout.

use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;

use crate::domain::ports::{StreamError, StreamMetadata, StreamMetadataFetcher};

/// Published stream metadata for the installer's pinned OS images
pub const DEFAULT_STREAM_URL: &str =
    "https://raw.githubusercontent.com/openshift/installer/master/data/data/coreos/rhcos.json";

/// Default bound on a metadata request
pub const DEFAULT_METADATA_TIMEOUT: Duration = Duration::from_secs(30);

/// Where stream metadata is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamSource {
    Url(String),
    Path(PathBuf),
}

impl StreamSource {
    /// Anything with an `http(s)://` scheme is a URL, `file://` and bare paths are local
    pub fn parse(location: &str) -> Self {
        if let Some(path) = location.strip_prefix("file://") {
            return StreamSource::Path(PathBuf::from(path));
        }
        if location.starts_with("http://") || location.starts_with("https://") {
            return StreamSource::Url(location.to_string());
        }
        StreamSource::Path(PathBuf::from(location))
    }

    fn describe(&self) -> String {
        match self {
            StreamSource::Url(url) => url.clone(),
            StreamSource::Path(path) => path.display().to_string(),
        }
    }
}

impl Default for StreamSource {
    fn default() -> Self {
        StreamSource::Url(DEFAULT_STREAM_URL.to_string())
    }
}

/// `StreamMetadataFetcher` over HTTP or the local file system
#[derive(Debug, Clone)]
pub struct HttpStreamFetcher {
    source: StreamSource,
    timeout: Duration,
}

impl HttpStreamFetcher {
    pub fn new(source: StreamSource) -> Self {
        Self {
            source,
            timeout: DEFAULT_METADATA_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn read_url(&self, url: &str) -> Result<Vec<u8>, StreamError> {
        let request_error = |e: reqwest::Error| {
            if e.is_timeout() {
                StreamError::Timeout {
                    url: url.to_string(),
                    secs: self.timeout.as_secs(),
                }
            } else {
                StreamError::Request {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            }
        };

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(request_error)?;

        let response = client.get(url).send().map_err(request_error)?;
        if !response.status().is_success() {
            return Err(StreamError::Request {
                url: url.to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        response
            .bytes()
            .map(|body| body.to_vec())
            .map_err(request_error)
    }
}

impl StreamMetadataFetcher for HttpStreamFetcher {
    fn fetch_build(&self) -> Result<StreamMetadata, StreamError> {
        debug!("Fetching OS image stream metadata from {}", self.source.describe());

        let body = match &self.source {
            StreamSource::Url(url) => self.read_url(url)?,
            StreamSource::Path(path) => {
                std::fs::read(path).map_err(|e| StreamError::Request {
                    url: path.display().to_string(),
                    message: e.to_string(),
                })?
            }
        };

        serde_json::from_slice(&body).map_err(|e| StreamError::Parse {
            source_name: self.source.describe(),
            message: e.to_string(),
        })
    }
}
