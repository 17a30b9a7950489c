//! Loader for the RON tuning file at startup.

use std::fs;
use std::path::{Path, PathBuf};

use ron::Options;
use thiserror::Error;

use super::data::CharacterTuningFile;

/// Error type for content loading failures.
#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse tuning from RON text. `path` is only used in the error.
pub fn parse_tuning(contents: &str, path: &Path) -> Result<CharacterTuningFile, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|source| ContentLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Load the character tuning file from disk.
pub fn load_tuning_file(path: &Path) -> Result<CharacterTuningFile, ContentLoadError> {
    let contents = fs::read_to_string(path).map_err(|source| ContentLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_tuning(&contents, path)
}
