use querysig::prelude::QuerySigError;
use thiserror::Error;

/// Result type for query signatures over http requests
pub type HyperSigResult<T> = std::result::Result<T, HyperSigError>;

/// Error type for query signatures over http requests
#[derive(Error, Debug)]
pub enum HyperSigError {
  /// The request uri carries no query string to verify
  #[error("No query string found: {0}")]
  NoQueryString(String),

  /// Failed to rebuild the request uri after signing
  #[error("Invalid uri: {0}")]
  InvalidUri(#[from] http::uri::InvalidUri),

  /// Failed to reassemble the request uri from its parts
  #[error("Invalid uri parts: {0}")]
  InvalidUriParts(#[from] http::uri::InvalidUriParts),

  /// Inherited from QuerySigError
  #[error("QuerySigError: {0}")]
  QuerySigError(#[from] QuerySigError),
}
