use thiserror::Error;

/// Result type for query signature operations
pub type QuerySigResult<T> = std::result::Result<T, QuerySigError>;

/// Error type for query signature operations.
///
/// All validation errors are terminal: none of these conditions is transient,
/// so a failed request must be rejected outright rather than retried.
#[derive(Error, Debug)]
pub enum QuerySigError {
  #[error("Base64 decode error: {0}")]
  Base64DecodeError(#[from] base64::DecodeError),

  /// Unknown algorithm name
  #[error("Invalid algorithm name: {0}")]
  InvalidAlgorithmName(String),

  /* ----- Validation errors ----- */
  /// A required parameter is absent or the timestamp does not parse
  #[error("Malformed request: {0}")]
  MalformedRequest(String),

  /// Freshness window exceeded, or the timestamp is too far in the future
  #[error("Signature expired: {0}")]
  Expired(String),

  /// Recomputed MAC does not match the presented signature
  #[error("Invalid signature: {0}")]
  InvalidSignature(String),

  /// The replay check rejected the nonce, reason supplied by the checker
  #[error("Invalid nonce: {0}")]
  InvalidNonce(String),

  /* ----- Signing errors ----- */
  /// The nonce generation capability failed
  #[error("Nonce generation failed: {0}")]
  NonceGenerationFailed(String),
}
