//! Mapping file records and fetch results

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One game entry of `mapping_data.json`
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MappingRecord {
    /// Usually a string like `val:<uuid>`; any JSON value is accepted
    #[serde(rename = "platformGameId")]
    pub platform_game_id: serde_json::Value,

    #[serde(rename = "esportsGameId", default, skip_serializing_if = "Option::is_none")]
    pub esports_game_id: Option<String>,

    #[serde(rename = "tournamentId", default, skip_serializing_if = "Option::is_none")]
    pub tournament_id: Option<String>,

    /// Team and participant mappings, kept as-is
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl MappingRecord {
    /// Game file name: strings verbatim, other values as their JSON text
    pub fn game_id(&self) -> String {
        match &self.platform_game_id {
            serde_json::Value::String(id) => id.clone(),
            other => other.to_string(),
        }
    }
}

/// Result of a single fetch attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Downloaded, decompressed and written to disk
    Written,

    /// Local file already existed; no request was made
    AlreadyPresent,

    /// Remote object does not exist (404)
    NotFound,

    /// Remote answered with an unexpected status
    Failed { status: u16 },
}

impl FetchOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, FetchOutcome::Written)
    }
}

/// Summary of the esports metadata pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataSummary {
    pub written: usize,
    pub not_written: usize,
}

/// Progress line emitted every tenth newly written game
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressReport {
    pub games_written: usize,

    /// Wall-clock minutes since the pass started, rounded to two decimals
    pub elapsed_minutes: f64,
}

/// Summary of the per-game download pass
#[derive(Debug, Clone, Default)]
pub struct GameDownloadSummary {
    pub records: usize,
    pub written: usize,
    pub not_written: usize,
    pub progress_reports: Vec<ProgressReport>,
    pub elapsed: Duration,
}

/// Summary of a full mirror run
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub metadata: MetadataSummary,
    pub games: GameDownloadSummary,
}
