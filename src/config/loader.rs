use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::CciConfig;
use super::scoring::{RankingConfig, ScoringWeights};
use crate::errors::AssessmentError;

/// File name searched for in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".cci.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a TOML document, replacing invalid sections with their defaults.
pub fn parse_and_validate_config(contents: &str) -> Result<CciConfig, String> {
    let mut config = toml::from_str::<CciConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    if let Err(e) = config.scoring.weights.validate() {
        log::warn!("Invalid scoring weights: {}. Using defaults.", e);
        config.scoring.weights = ScoringWeights::default();
    } else {
        config.scoring.weights.normalize();
    }

    if let Err(e) = config.scoring.ranking.validate() {
        log::warn!("Invalid ranking thresholds: {}. Using defaults.", e);
        config.scoring.ranking = RankingConfig::default();
    }

    Ok(config)
}

/// Load an explicitly named config file. Unlike discovery, a missing or
/// malformed file is an error here.
pub fn load_config_from(path: &Path) -> Result<CciConfig, AssessmentError> {
    let contents = read_config_file(path).map_err(|e| AssessmentError::io(path, e))?;
    let config = parse_and_validate_config(&contents)
        .map_err(|message| AssessmentError::config(message, Some(path.to_path_buf())))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<CciConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // A missing file is the normal case during discovery
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Discover `.cci.toml` from `start` upward.
pub fn discover_config(start: PathBuf) -> CciConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            CciConfig::default()
        })
}

/// Discover `.cci.toml` from the current directory upward.
pub fn load_config() -> CciConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            CciConfig::default()
        }
    }
}
