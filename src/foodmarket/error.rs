use thiserror::Error;

/// Failure to read one typed token from the input stream.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("expected {expected}, got {token:?}")]
    Malformed {
        expected: &'static str,
        token: String,
    },

    #[error("unexpected end of input")]
    EndOfInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum MarketError {
    /// A token could not be read or parsed for the named field.
    #[error("Invalid {field}: {source}")]
    InputParse { field: String, source: TokenError },

    /// A well-formed number fell outside the offered menu choices.
    #[error("Invalid {field}")]
    InvalidSelection { field: String, choice: i64 },

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl MarketError {
    /// Wraps a token failure for `field`. Read failures from the underlying
    /// stream stay I/O errors rather than becoming user-facing input errors.
    pub fn input(field: impl Into<String>, err: TokenError) -> Self {
        match err {
            TokenError::Io(e) => MarketError::Io(e),
            other => MarketError::InputParse {
                field: field.into(),
                source: other,
            },
        }
    }

    /// True for the errors that end an interaction with a printed message.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            MarketError::InputParse { .. } | MarketError::InvalidSelection { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, MarketError>;
