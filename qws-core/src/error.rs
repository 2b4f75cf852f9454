use thiserror::Error;

#[derive(Error, Debug)]
pub enum QwsError {
    #[error("WHOIS connection failed: {0}")]
    ConnectionFailed(String),

    #[error("WHOIS transport error: {0}")]
    Transport(#[from] std::io::Error),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("multiple domain name fields in a single WHOIS reply")]
    DuplicateDomain,

    #[error("Invalid domain name: {0}")]
    InvalidDomain(String),

    #[error("WHOIS response exceeded the size limit")]
    ResponseTooLarge,

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QwsError>;
