use crate::{
  nonce::{NonceChecker, NonceGenerator, RandomNonce},
  trace::*,
  util::has_unique_elements,
};
use std::sync::Arc;

/// Default validity window of a signature in seconds
const DEFAULT_MAX_LIFE: u64 = 900;

/* ---------------------------------------- */
/// Configuration for a [`Signer`](crate::signer::Signer), read-only after
/// construction.
///
/// The three reserved parameter names must be mutually distinct and must not
/// collide with application-level parameter names used by callers: a
/// collision silently overwrites application data and corrupts the signed
/// message. Neither case is defended here since rejecting it would change
/// the signature computation on the wire; construction only logs a warning
/// when the reserved names themselves collide.
#[derive(Clone)]
pub struct SignerOptions {
  /// Query key carrying the nonce
  pub nonce_param: String,
  /// Query key carrying the unix timestamp in seconds
  pub timestamp_param: String,
  /// Query key carrying the hex-encoded signature
  pub signature_param: String,
  /// Validity window of a signature in seconds
  pub max_life: u64,
  pub(crate) nonce_generator: Arc<dyn NonceGenerator + Send + Sync>,
  pub(crate) check_nonce: Option<Arc<dyn NonceChecker + Send + Sync>>,
}

impl SignerOptions {
  pub fn new(nonce_param: &str, timestamp_param: &str, signature_param: &str, max_life: u64) -> Self {
    if !has_unique_elements([nonce_param, timestamp_param, signature_param]) {
      warn!(
        nonce_param,
        timestamp_param, signature_param, "reserved parameter names are not mutually distinct"
      );
    }
    Self {
      nonce_param: nonce_param.to_string(),
      timestamp_param: timestamp_param.to_string(),
      signature_param: signature_param.to_string(),
      max_life,
      nonce_generator: Arc::new(RandomNonce),
      check_nonce: None,
    }
  }

  /// Replace the default random nonce source
  pub fn set_nonce_generator(&mut self, generator: impl NonceGenerator + Send + Sync + 'static) -> &mut Self {
    self.nonce_generator = Arc::new(generator);
    self
  }

  /// Enable replay detection through the given checker. When this is never
  /// called, nonce replay is not checked at all; that is a pluggability
  /// point, not an omission.
  pub fn set_check_nonce(&mut self, checker: impl NonceChecker + Send + Sync + 'static) -> &mut Self {
    self.check_nonce = Some(Arc::new(checker));
    self
  }
}

impl Default for SignerOptions {
  fn default() -> Self {
    Self::new("nonce", "timestamp", "signature", DEFAULT_MAX_LIFE)
  }
}

impl std::fmt::Debug for SignerOptions {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SignerOptions")
      .field("nonce_param", &self.nonce_param)
      .field("timestamp_param", &self.timestamp_param)
      .field("signature_param", &self.signature_param)
      .field("max_life", &self.max_life)
      .field("check_nonce", &self.check_nonce.as_ref().map(|_| "enabled"))
      .finish_non_exhaustive()
  }
}

/* ---------------------------------------- */
