use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Language;

/// Boards larger than this can't be rendered with single-digit indices.
pub const MAX_BOARD_SIZE: usize = 10;
pub const MIN_BOARD_SIZE: usize = 2;

/// Game settings, loaded from a JSON file such as
///
/// ```json
/// { "size": 6, "winning_score": 4, "language": "en" }
/// ```
///
/// Missing keys take their default values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub size: usize,
    pub winning_score: u32,
    pub language: Language,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 5,
            winning_score: 3,
            language: Language::Czech,
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.is_file() {
            anyhow::bail!("Config file '{}' does not exist", path.display());
        }
        let reader = BufReader::new(File::open(path)?);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.size) {
            anyhow::bail!(
                "Board size must be between {} and {}, but is {}",
                MIN_BOARD_SIZE,
                MAX_BOARD_SIZE,
                self.size
            );
        }
        if self.winning_score == 0 {
            anyhow::bail!("The winning score must be at least 1");
        }
        Ok(())
    }
}
