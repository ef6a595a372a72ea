use crate::error::QuerySigResult;
use base64::{engine::general_purpose, Engine as _};
use rand::Rng;

/* --------------------------------------- */
/// Nonce generation capability.
///
/// Expected to produce an unpredictable, practically unique token per call.
/// Uniqueness is not enforced here; replay detection belongs to
/// [`NonceChecker`].
pub trait NonceGenerator {
  fn generate(&self) -> QuerySigResult<String>;
}

/// Default nonce source: 32 random bytes, url-safe base64 without padding
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomNonce;

impl NonceGenerator for RandomNonce {
  fn generate(&self) -> QuerySigResult<String> {
    let mut rng = rand::rng();
    let nonce = rng.random::<[u8; 32]>();
    Ok(general_purpose::URL_SAFE_NO_PAD.encode(nonce))
  }
}

/* --------------------------------------- */
/// Replay-detection capability.
///
/// `check` receives the nonce of a request whose signature already verified.
/// An `Err` marks the nonce as replayed or otherwise unusable and is
/// surfaced verbatim as [`InvalidNonce`](crate::error::QuerySigError::InvalidNonce).
/// Nonce storage is entirely the implementor's concern; the signer only
/// calls this, it never persists anything.
pub trait NonceChecker {
  fn check(&self, nonce: &str) -> Result<(), String>;
}

impl<F> NonceChecker for F
where
  F: Fn(&str) -> Result<(), String>,
{
  fn check(&self, nonce: &str) -> Result<(), String> {
    self(nonce)
  }
}

/* --------------------------------------- */
