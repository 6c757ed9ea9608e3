use esports_data_fetcher::logging::initialize_logging;
use esports_data_fetcher::{DownloaderConfig, EsportsDownloader};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    initialize_logging();

    info!("Starting esports data mirror");

    let config = DownloaderConfig::from_env()?;
    info!("Loaded configuration: {:?}", config);

    let downloader = EsportsDownloader::from_config(config)?;

    match downloader.run().await {
        Ok(summary) => {
            info!(
                "Done: {} games written, {} skipped, in {:.2} minutes",
                summary.games.written,
                summary.games.not_written,
                summary.games.elapsed.as_secs_f64() / 60.0
            );
            Ok(())
        }
        Err(e) => {
            error!("Mirror run failed: {}", e);
            Err(e.into())
        }
    }
}
