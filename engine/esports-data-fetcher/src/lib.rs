//! Esports Data Fetcher
//!
//! Mirrors the VCT esports bucket into a local directory tree: the league
//! metadata files first, then one JSON file per game listed in the mapping file.
//! Existing local files are never re-downloaded.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod logging;
pub mod models;
pub mod orchestrator;
pub mod progress;
pub mod remote;
pub mod resource;

pub use config::{DownloaderConfig, League, Year};
pub use error::{FetchError, Result};
pub use fetcher::GzipJsonFetcher;
pub use models::*;
pub use orchestrator::EsportsDownloader;
pub use remote::{HttpRemote, RemoteResponse, RemoteStore};
pub use resource::ResourcePath;
