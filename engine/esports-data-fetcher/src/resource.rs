//! Naming convention shared by the remote bucket and the local mirror
//!
//! A resource path such as `vct-international/games/2024/val:1234` maps to the
//! remote object `<base>/<path>.json.gz` and the local file `<root>/<path>.json`.

use crate::config::{League, Year};
use std::fmt;
use std::path::{Path, PathBuf};

/// Esports metadata files, in download order
pub const METADATA_FILES: [&str; 5] = ["leagues", "tournaments", "players", "teams", "mapping_data"];

/// Metadata file listing every game of the league
pub const MAPPING_FILE: &str = "mapping_data";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceCategory {
    EsportsData,
    Games(Year),
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceCategory::EsportsData => f.write_str("esports-data"),
            ResourceCategory::Games(year) => write!(f, "games/{year}"),
        }
    }
}

/// Key identifying both a remote gzip object and its local JSON file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    league: League,
    category: ResourceCategory,
    name: String,
}

impl ResourcePath {
    pub fn new(league: League, category: ResourceCategory, name: impl Into<String>) -> Self {
        Self { league, category, name: name.into() }
    }

    pub fn metadata(league: League, name: impl Into<String>) -> Self {
        Self::new(league, ResourceCategory::EsportsData, name)
    }

    pub fn game(league: League, year: Year, platform_game_id: impl Into<String>) -> Self {
        Self::new(league, ResourceCategory::Games(year), platform_game_id)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Remote object URL for this resource
    pub fn remote_url(&self, base_url: &str) -> String {
        format!("{}/{}.json.gz", base_url.trim_end_matches('/'), self)
    }

    /// Local file this resource is written to under `root`
    pub fn local_path(&self, root: &Path) -> PathBuf {
        self.directory(root).join(format!("{}.json", self.name))
    }

    /// Directory holding the local file under `root`
    pub fn directory(&self, root: &Path) -> PathBuf {
        category_dir(root, self.league, self.category)
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.league, self.category, self.name)
    }
}

/// Local directory of a league category, e.g. `<root>/vct-international/games/2024`
pub fn category_dir(root: &Path, league: League, category: ResourceCategory) -> PathBuf {
    let dir = root.join(league.as_str());
    match category {
        ResourceCategory::EsportsData => dir.join("esports-data"),
        ResourceCategory::Games(year) => dir.join("games").join(year.to_string()),
    }
}
