use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("a client with national id {national_id} already exists")]
    DuplicateId { national_id: String },

    #[error("no client found for national id {national_id}")]
    NotFound { national_id: String },

    // Reserved for the rental ledger; no code path produces it yet.
    #[error("client {national_id} has an active rental and cannot be deleted")]
    ActiveRental { national_id: String },

    #[error("validation error on {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
