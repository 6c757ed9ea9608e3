use crate::error::{FetchError, Result};
use crate::models::FetchOutcome;
use crate::remote::RemoteStore;
use crate::resource::ResourcePath;
use flate2::read::MultiGzDecoder;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Downloads gzip objects and writes them to the local mirror as JSON
pub struct GzipJsonFetcher<R> {
    remote: R,
    base_url: String,
    output_dir: PathBuf,
}

impl<R: RemoteStore> GzipJsonFetcher<R> {
    pub fn new(remote: R, base_url: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self { remote, base_url: base_url.into(), output_dir: output_dir.into() }
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Mirror one resource.
    ///
    /// An existing local file is the completion marker: it is never re-fetched
    /// or validated. The parent directory must already exist.
    pub async fn fetch(&self, resource: &ResourcePath) -> Result<FetchOutcome> {
        let local_path = resource.local_path(&self.output_dir);
        if tokio::fs::try_exists(&local_path).await? {
            debug!("{} already present, skipping", local_path.display());
            return Ok(FetchOutcome::AlreadyPresent);
        }

        let url = resource.remote_url(&self.base_url);
        let response = self.remote.get(&url).await?;

        match response.status {
            200 => {
                let json = decompress(resource, &response.body)?;
                tokio::fs::write(&local_path, &json).await?;
                info!("{}.json written", resource);
                Ok(FetchOutcome::Written)
            }
            404 => {
                debug!("{} not found in bucket", resource);
                Ok(FetchOutcome::NotFound)
            }
            status => {
                warn!("Failed to download {} (HTTP {})", resource, status);
                Ok(FetchOutcome::Failed { status })
            }
        }
    }
}

/// Gunzip a whole response body in memory, reading every gzip member
pub fn decompress(resource: &ResourcePath, body: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = MultiGzDecoder::new(body);
    let mut json = Vec::new();
    decoder
        .read_to_end(&mut json)
        .map_err(|source| FetchError::Decompress { resource: resource.to_string(), source })?;
    Ok(json)
}
