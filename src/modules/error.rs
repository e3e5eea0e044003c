use rusoto_core::credential::CredentialsError;
use rusoto_core::request::TlsError;
use rusoto_core::RusotoError;
use rusoto_dynamodb::BatchWriteItemError;
use thiserror::Error;

// One variant per failure family, so callers can tell a bad URL from a bad
// profile (the network and service families are deliberately kept apart).
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("{0} is not a URL or a .json file")]
    Format(String),

    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("input is not a JSON array of objects: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("cannot access DynamoDB: {0}")]
    Access(String),

    #[error("batch write failed: {0}")]
    Service(#[from] RusotoError<BatchWriteItemError>),
}

impl ImportError {
    // each failure family gets its own exit status
    pub fn exit_code(&self) -> i32 {
        match self {
            ImportError::Format(_) => 2,
            ImportError::Fetch(_) => 3,
            ImportError::Read { .. } => 4,
            ImportError::Parse(_) => 5,
            ImportError::Access(_) => 6,
            ImportError::Service(_) => 7,
        }
    }
}

impl From<CredentialsError> for ImportError {
    fn from(error: CredentialsError) -> ImportError {
        ImportError::Access(error.to_string())
    }
}

impl From<TlsError> for ImportError {
    fn from(error: TlsError) -> ImportError {
        ImportError::Access(error.to_string())
    }
}
