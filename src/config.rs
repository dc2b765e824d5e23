use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;
use rand::{SeedableRng, rngs::SmallRng};
use serde::Deserialize;

pub const CONFIG_ENV: &str = "SHUFFLECHESS_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Fixed seed for shuffling; a fresh one is drawn from the OS otherwise.
    pub seed: Option<u64>,
    /// Drop off-board destinations from every move list.
    pub bounded_moves: bool,
    /// Draw the board with ANSI background colors.
    pub colors: bool,
    /// Print row and column numbers around the board.
    pub coordinates: bool,
}
impl Default for Config {
    fn default() -> Self {
        Config {
            seed: None,
            bounded_moves: false,
            colors: false,
            coordinates: false,
        }
    }
}
impl Config {
    /// Reads the file at `path`, falling back to defaults when there is no
    /// path or nothing exists there.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Config::default());
        };
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path).map_err(|err| ConfigError::Io {
            path: path.to_owned(),
            source: err,
        })?;
        let config = Config::parse(&content).map_err(|err| match err {
            ConfigError::Yaml { source, .. } => ConfigError::Yaml {
                path: Some(path.to_owned()),
                source,
            },
            err => err,
        })?;
        debug!("loaded config from {}: {config:?}", path.display());
        Ok(config)
    }
    /// A seed given on the command line wins over the one in the file.
    #[must_use]
    pub fn with_seed_override(self, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Config {
                seed: Some(seed),
                ..self
            },
            None => self,
        }
    }
    pub fn seeded_rng(&self) -> Option<SmallRng> {
        self.seed.map(SmallRng::seed_from_u64)
    }
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => {
                debug!("seeding with {seed}");
                SmallRng::seed_from_u64(seed)
            }
            None => SmallRng::from_os_rng(),
        }
    }
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        // an empty document deserializes as unit, not as a mapping
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(content).map_err(|err| ConfigError::Yaml {
            path: None,
            source: err,
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Yaml {
        path: Option<PathBuf>,
        source: serde_yaml::Error,
    },
}
impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "could not read {}: {source}", path.display())?;
            }
            ConfigError::Yaml {
                path: Some(path),
                source,
            } => write!(f, "invalid config in {}: {source}", path.display())?,
            ConfigError::Yaml { path: None, source } => write!(f, "invalid config: {source}")?,
        }
        Ok(())
    }
}
impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Yaml { source, .. } => Some(source),
        }
    }
}
