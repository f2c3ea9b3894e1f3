use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::input::{ImportOptions, Tokenizer};
use crate::model::snapshot::MetricsSnapshot;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("seed snapshot {} has no highlights", path.display())]
    EmptyHighlights { path: PathBuf },
}

/// Command-line switches layered over the options file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportFlags {
    pub strict: bool,
    pub naive_split: bool,
    pub enforce_invariants: bool,
}

impl ImportFlags {
    /// Flags only ever switch behavior on; an unset flag keeps the file value.
    pub fn apply(self, mut options: ImportOptions) -> ImportOptions {
        if self.strict {
            options.strict_mode = true;
        }
        if self.naive_split {
            options.tokenizer = Tokenizer::Naive;
        }
        if self.enforce_invariants {
            options.enforce_invariants = true;
        }
        options
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_options(path: &Path) -> Result<ImportOptions, ConfigError> {
    let options: ImportOptions = read_json(path)?;
    debug!(path = %path.display(), ?options, "loaded import options");
    Ok(options)
}

/// Initial snapshot for this run only; nothing is written back.
pub fn load_seed(path: &Path) -> Result<MetricsSnapshot, ConfigError> {
    let snapshot: MetricsSnapshot = read_json(path)?;
    if snapshot.highlights.is_empty() {
        return Err(ConfigError::EmptyHighlights {
            path: path.to_path_buf(),
        });
    }
    Ok(snapshot)
}

pub fn resolve_options(
    config_path: Option<&Path>,
    flags: ImportFlags,
) -> Result<ImportOptions, ConfigError> {
    let base = match config_path {
        Some(path) => load_options(path)?,
        None => ImportOptions::default(),
    };
    Ok(flags.apply(base))
}

#[cfg(test)]
#[path = "../tests/src_inline/config/tests.rs"]
mod tests;
