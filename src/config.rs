use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::warn;

use crate::board::{Board, DEFAULT_BOARD_SIZE, PIECES_IN_LINE};
use crate::error::ConfigError;
use crate::search::{Searcher, DEFAULT_DEPTH, DEFAULT_SPAN};

/// Match configuration, loadable from TOML.
///
/// ```toml
/// rows = 9
/// cols = 9
/// depth = 2
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Stones in a row needed to win
    pub run_length: usize,
    /// Search depth of minimax agents, in plies
    pub depth: usize,
    /// Chebyshev radius of the search frontier
    pub span: usize,
    /// RNG seed; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: DEFAULT_BOARD_SIZE,
            cols: DEFAULT_BOARD_SIZE,
            run_length: PIECES_IN_LINE,
            depth: DEFAULT_DEPTH,
            span: DEFAULT_SPAN,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.run_length < 2 {
            return Err(ConfigError::Validation("run_length must be >= 2".into()));
        }
        let min_side = self.run_length.max(PIECES_IN_LINE);
        if self.rows < min_side || self.cols < min_side {
            return Err(ConfigError::Validation(format!(
                "board {}x{} is smaller than {min_side}",
                self.rows, self.cols
            )));
        }
        if self.rows > 256 || self.cols > 256 {
            return Err(ConfigError::Validation(format!(
                "board {}x{} is larger than 256x256",
                self.rows, self.cols
            )));
        }
        if self.depth == 0 {
            return Err(ConfigError::Validation("depth must be >= 1".into()));
        }
        if self.span == 0 {
            return Err(ConfigError::Validation("span must be >= 1".into()));
        }
        Ok(())
    }

    /// Fresh empty board of the configured size
    pub fn board(&self) -> Board {
        Board::new(self.rows, self.cols)
    }

    pub fn searcher(&self) -> Searcher {
        Searcher::new(self.run_length, self.span)
    }

    /// RNG for one consumer. With a seed configured, each `stream` gets its
    /// own reproducible sequence.
    pub fn rng(&self, stream: u64) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(stream)),
            None => StdRng::from_entropy(),
        }
    }
}

/// Command-line flags that override values from the config file
#[derive(Debug, Clone, Default, clap::Args)]
pub struct Overrides {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board rows
    #[arg(long)]
    pub rows: Option<usize>,

    /// Board columns
    #[arg(long)]
    pub cols: Option<usize>,

    /// Search depth of minimax players, in plies
    #[arg(short, long)]
    pub depth: Option<usize>,

    /// RNG seed for reproducible matches
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Overrides {
    /// Load the config file (or defaults), apply the flags on top and
    /// validate the result.
    pub fn resolve(&self) -> Result<GameConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load_or_default(path)?,
            None => GameConfig::default(),
        };
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }
}
