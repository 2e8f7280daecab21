use thiserror::Error;

#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored string ID could not be parsed back into a u64.
    #[error("Failed to parse stored ID {value}: {source}")]
    ParseStringId {
        value: String,
        source: std::num::ParseIntError,
    },

    /// A persisted job cursor holds a value the job cannot parse.
    #[error("Invalid cursor value for {key}: {value}")]
    InvalidCursor { key: String, value: String },

    /// A transaction row holds a kind tag unknown to this version.
    #[error("Unknown transaction kind: {0}")]
    UnknownTransactionKind(String),

    /// A ledger row holds a millisecond timestamp outside the representable range.
    #[error("Invalid ledger timestamp: {0}")]
    InvalidTimestamp(i64),
}
