use crate::error::{FetchError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Public bucket hosting the VCT esports dataset
pub const DEFAULT_BASE_URL: &str = "https://vcthackathon-data.s3.us-west-2.amazonaws.com";

/// Esports circuits published in the bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum League {
    GameChangers,
    VctInternational,
    VctChallengers,
}

impl League {
    pub const ALL: [League; 3] = [League::GameChangers, League::VctInternational, League::VctChallengers];

    /// Top-level directory name, both remote and local
    pub fn as_str(&self) -> &'static str {
        match self {
            League::GameChangers => "game-changers",
            League::VctInternational => "vct-international",
            League::VctChallengers => "vct-challengers",
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for League {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self> {
        League::ALL
            .into_iter()
            .find(|league| league.as_str() == s.trim())
            .ok_or_else(|| FetchError::config(format!("unknown league: {s}")))
    }
}

/// Seasons with game data in the bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Year {
    Y2022,
    Y2023,
    Y2024,
}

impl Year {
    pub const ALL: [Year; 3] = [Year::Y2022, Year::Y2023, Year::Y2024];

    pub fn as_u16(&self) -> u16 {
        match self {
            Year::Y2022 => 2022,
            Year::Y2023 => 2023,
            Year::Y2024 => 2024,
        }
    }
}

impl TryFrom<u16> for Year {
    type Error = FetchError;

    fn try_from(value: u16) -> Result<Self> {
        Year::ALL
            .into_iter()
            .find(|year| year.as_u16() == value)
            .ok_or_else(|| FetchError::config(format!("unsupported year: {value}")))
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.as_u16()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

impl FromStr for Year {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self> {
        let value: u16 =
            s.trim().parse().map_err(|_| FetchError::config(format!("invalid year: {s}")))?;
        Year::try_from(value)
    }
}

/// Configuration for a mirror run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloaderConfig {
    /// League to mirror
    pub league: League,

    /// Season whose game files are mirrored
    pub year: Year,

    /// Remote bucket base URL, without trailing slash
    pub base_url: String,

    /// Local root the league directories are created under
    pub output_dir: PathBuf,

    /// Maximum game downloads in flight (1 = sequential, file order)
    pub concurrency: usize,

    /// Per-request timeout; `None` keeps the HTTP client default
    pub request_timeout_secs: Option<u64>,
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            league: League::VctInternational,
            year: Year::Y2024,
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from("."),
            concurrency: 1,
            request_timeout_secs: None,
        }
    }
}

impl DownloaderConfig {
    pub fn new(league: League, year: Year) -> Self {
        Self { league, year, ..Self::default() }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Load configuration from environment variables (and a `.env` file if present)
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup, e.g. the process environment
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(league) = lookup("ESPORTS_LEAGUE") {
            self.league = league.parse()?;
        }

        if let Some(year) = lookup("ESPORTS_YEAR") {
            self.year = year.parse()?;
        }

        if let Some(base_url) = lookup("ESPORTS_DATA_BASE_URL") {
            self = self.with_base_url(base_url);
        }

        if let Some(dir) = lookup("ESPORTS_DATA_DIR") {
            self.output_dir = PathBuf::from(dir);
        }

        if let Some(concurrency) = lookup("ESPORTS_FETCH_CONCURRENCY") {
            self.concurrency = concurrency.trim().parse().map_err(|_| {
                FetchError::config(format!("invalid ESPORTS_FETCH_CONCURRENCY: {concurrency}"))
            })?;
        }

        if let Some(timeout) = lookup("ESPORTS_REQUEST_TIMEOUT_SECS") {
            let secs = timeout.trim().parse().map_err(|_| {
                FetchError::config(format!("invalid ESPORTS_REQUEST_TIMEOUT_SECS: {timeout}"))
            })?;
            self.request_timeout_secs = Some(secs);
        }

        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.concurrency == 0 {
            return Err(FetchError::config("concurrency must be at least 1"));
        }
        if self.base_url.is_empty() {
            return Err(FetchError::config("base URL must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_matches_bucket_layout() {
        let config = DownloaderConfig::default();
        assert_eq!(config.league, League::VctInternational);
        assert_eq!(config.year, Year::Y2024);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.concurrency, 1);
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn test_league_parsing() {
        assert_eq!("game-changers".parse::<League>().unwrap(), League::GameChangers);
        assert_eq!("vct-challengers".parse::<League>().unwrap(), League::VctChallengers);
        assert!("vct-masters".parse::<League>().is_err());

        for league in League::ALL {
            assert_eq!(league.to_string().parse::<League>().unwrap(), league);
        }
    }

    #[test]
    fn test_year_parsing() {
        assert_eq!("2023".parse::<Year>().unwrap(), Year::Y2023);
        assert!("2021".parse::<Year>().is_err());
        assert!("twenty".parse::<Year>().is_err());
        assert_eq!(Year::Y2022.to_string(), "2022");
    }

    #[test]
    fn test_serde_representation() {
        let config = DownloaderConfig::new(League::GameChangers, Year::Y2022);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["league"], "game-changers");
        assert_eq!(json["year"], 2022);

        let back: DownloaderConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back.league, League::GameChangers);
        assert_eq!(back.year, Year::Y2022);
    }

    #[test]
    fn test_overrides() {
        let config = DownloaderConfig::default()
            .with_overrides(lookup(&[
                ("ESPORTS_LEAGUE", "vct-challengers"),
                ("ESPORTS_YEAR", "2023"),
                ("ESPORTS_DATA_BASE_URL", "http://localhost:9000/"),
                ("ESPORTS_DATA_DIR", "/tmp/mirror"),
                ("ESPORTS_FETCH_CONCURRENCY", "4"),
                ("ESPORTS_REQUEST_TIMEOUT_SECS", "30"),
            ]))
            .unwrap();

        assert_eq!(config.league, League::VctChallengers);
        assert_eq!(config.year, Year::Y2023);
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.output_dir, PathBuf::from("/tmp/mirror"));
        assert_eq!(config.concurrency, 4);
        assert_eq!(config.request_timeout_secs, Some(30));
    }

    #[test]
    fn test_invalid_overrides_rejected() {
        assert!(DownloaderConfig::default()
            .with_overrides(lookup(&[("ESPORTS_FETCH_CONCURRENCY", "0")]))
            .is_err());
        assert!(DownloaderConfig::default()
            .with_overrides(lookup(&[("ESPORTS_YEAR", "2030")]))
            .is_err());
        assert!(DownloaderConfig::default()
            .with_overrides(lookup(&[("ESPORTS_REQUEST_TIMEOUT_SECS", "soon")]))
            .is_err());
    }
}
