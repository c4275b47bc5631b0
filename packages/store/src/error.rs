use thiserror::Error;

/// Errors raised by the local document store and config parsing.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("document payload is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
}
