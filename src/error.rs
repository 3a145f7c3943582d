use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while turning markdown into HTML.
#[derive(Debug, Error)]
pub enum Error {
    /// A builder did not find the structure its block classification promised.
    #[error("malformed {kind} block: {block:?}")]
    MalformedBlock { kind: &'static str, block: String },

    #[error("list nesting exceeds the limit of {limit} levels")]
    NestingTooDeep { limit: usize },

    #[error("no `# ` title line found")]
    MissingTitle,

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    pub(crate) fn malformed(kind: &'static str, block: &str) -> Self {
        Error::MalformedBlock {
            kind,
            block: block.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
