use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Directory traversal error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Invalid document in file {file:?}: expected {expected}")]
    InvalidDocument { file: PathBuf, expected: &'static str },

    #[error("Empty input: No domain descriptor files found in the specified directories.")]
    NoFilesFound,
}

pub type Result<T> = std::result::Result<T, Error>;
