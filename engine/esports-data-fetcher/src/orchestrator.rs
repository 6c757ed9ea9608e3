use crate::config::DownloaderConfig;
use crate::error::{FetchError, Result};
use crate::fetcher::GzipJsonFetcher;
use crate::models::*;
use crate::progress::ProgressTracker;
use crate::remote::{HttpRemote, RemoteStore};
use crate::resource::{category_dir, ResourceCategory, ResourcePath, MAPPING_FILE, METADATA_FILES};
use futures::stream::{self, StreamExt};
use std::path::PathBuf;
use tracing::{error, info};

/// Mirrors one league/year of the esports bucket into the local tree
pub struct EsportsDownloader<R> {
    config: DownloaderConfig,
    fetcher: GzipJsonFetcher<R>,
}

impl EsportsDownloader<HttpRemote> {
    /// Create a downloader talking HTTP to the configured bucket
    pub fn from_config(config: DownloaderConfig) -> Result<Self> {
        config.validate()?;
        let remote = HttpRemote::new(&config)?;
        Ok(Self::new(config, remote))
    }
}

impl<R: RemoteStore> EsportsDownloader<R> {
    pub fn new(config: DownloaderConfig, remote: R) -> Self {
        let fetcher = GzipJsonFetcher::new(remote, config.base_url.clone(), config.output_dir.clone());
        Self { config, fetcher }
    }

    pub fn config(&self) -> &DownloaderConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &GzipJsonFetcher<R> {
        &self.fetcher
    }

    /// Metadata pass followed by the game pass
    pub async fn run(&self) -> Result<RunSummary> {
        info!("Mirroring {} {} from {}", self.config.league, self.config.year, self.config.base_url);

        let metadata = self.download_esports_files().await?;
        let games = self.download_games().await?;

        info!(
            "Mirror complete: {} metadata files and {} games written",
            metadata.written, games.written
        );
        Ok(RunSummary { metadata, games })
    }

    /// Download leagues, tournaments, players, teams and mapping_data
    pub async fn download_esports_files(&self) -> Result<MetadataSummary> {
        let directory =
            category_dir(&self.config.output_dir, self.config.league, ResourceCategory::EsportsData);
        tokio::fs::create_dir_all(&directory).await?;

        let mut summary = MetadataSummary::default();
        for name in METADATA_FILES {
            let resource = ResourcePath::metadata(self.config.league, name);
            if self.fetch_logged(&resource).await? {
                summary.written += 1;
            } else {
                summary.not_written += 1;
            }
        }

        Ok(summary)
    }

    /// Path of the local mapping file the game pass reads
    pub fn mapping_path(&self) -> PathBuf {
        ResourcePath::metadata(self.config.league, MAPPING_FILE).local_path(&self.config.output_dir)
    }

    /// Read the game list from the local mapping file
    pub async fn load_mapping(&self) -> Result<Vec<MappingRecord>> {
        let path = self.mapping_path();
        let contents = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| FetchError::MappingFile { path: path.clone(), source })?;

        serde_json::from_str(&contents).map_err(|source| FetchError::Json { path, source })
    }

    /// Download one game file per mapping record.
    ///
    /// Fails if the mapping file is missing or malformed. Individual game
    /// failures are logged and skipped.
    pub async fn download_games(&self) -> Result<GameDownloadSummary> {
        let mut tracker = ProgressTracker::start();

        let records = self.load_mapping().await?;
        info!("Loaded {} games from {}", records.len(), self.mapping_path().display());

        let games_category = ResourceCategory::Games(self.config.year);
        let directory = category_dir(&self.config.output_dir, self.config.league, games_category);
        tokio::fs::create_dir_all(&directory).await?;

        let mut summary = GameDownloadSummary { records: records.len(), ..Default::default() };

        let league = self.config.league;
        let year = self.config.year;
        let mut fetches = stream::iter(records)
            .map(|record| async move {
                let resource = ResourcePath::game(league, year, record.game_id());
                self.fetch_logged(&resource).await
            })
            .buffer_unordered(self.config.concurrency.max(1));

        // Counting happens here, in completion order, so the every-tenth
        // progress line holds for any concurrency setting.
        while let Some(written) = fetches.next().await {
            if !written? {
                summary.not_written += 1;
                continue;
            }

            summary.written += 1;
            if let Some(report) = tracker.record_written() {
                info!(
                    "----- Processed {} games, current run time: {:.2} minutes",
                    report.games_written, report.elapsed_minutes
                );
                summary.progress_reports.push(report);
            }
        }

        summary.elapsed = tracker.started().elapsed();
        Ok(summary)
    }

    /// Fetch one resource, downgrading per-resource failures to "not written"
    async fn fetch_logged(&self, resource: &ResourcePath) -> Result<bool> {
        match self.fetcher.fetch(resource).await {
            Ok(outcome) => Ok(outcome.is_written()),
            Err(e) if e.is_recoverable() => {
                error!("Failed to download {}: {}", resource, e);
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}
