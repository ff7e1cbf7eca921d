//! Error types for chart parsing and the convenience API.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the chartlib API.
#[derive(Debug, Error)]
pub enum ChartError {
    /// A chord-cell token that is not a chord, rest, repeat or space.
    /// Fatal for the whole parse: no chart is produced.
    #[error("Unparseable token '{token}' on line {line}")]
    UnparseableToken { token: String, line: usize },

    #[error("Failed to read file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid UTF-8 in chart text: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rejection of a single token by the event parser. Carries the token text;
/// the line tokenizer attaches the line number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unparseable token '{0}'")]
pub struct TokenError(pub String);
