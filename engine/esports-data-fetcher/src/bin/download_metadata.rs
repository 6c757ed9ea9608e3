use esports_data_fetcher::logging::initialize_logging;
use esports_data_fetcher::{DownloaderConfig, EsportsDownloader};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    initialize_logging();

    let config = DownloaderConfig::from_env()?;
    info!("Downloading esports metadata for {} into {}", config.league, config.output_dir.display());

    let downloader = EsportsDownloader::from_config(config)?;
    let summary = downloader.download_esports_files().await?;

    info!("{} metadata files written, {} skipped", summary.written, summary.not_written);
    info!("Mapping file: {}", downloader.mapping_path().display());
    Ok(())
}
