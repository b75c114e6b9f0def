use crate::utils::parser::ParseError;
use profitzones::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unable to read {kind} '{path}': {source}", path = path.display())]
    FileParsing {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Unable to write {kind} '{path}': {source}", path = path.display())]
    FileWriting {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("{0} is not implemented")]
    Unsupported(&'static str),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ParseError> for CliError {
    fn from(e: ParseError) -> Self {
        CliError::Config(e.to_string())
    }
}
