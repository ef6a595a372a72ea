use crate::{
  canonical::{concat_query_values, sorted_query_keys},
  crypto::MacKey,
  error::{QuerySigError, QuerySigResult},
  options::SignerOptions,
  trace::*,
  util::unix_timestamp_now,
  values::QueryMap,
};

/// Tolerated clock skew for timestamps from the future, in seconds
pub const CLOCK_SKEW_TOLERANCE: u64 = 30;

/* ---------------------------------------- */
/// Signs and validates requests through their query-parameter map.
///
/// One instance is built once and shared across calls. Every operation runs
/// over a fresh MAC state (see [`MacKey::compute`]), so `&self` methods are
/// safe under concurrent use with no synchronization.
pub struct Signer<K: MacKey> {
  key: K,
  options: SignerOptions,
}

impl<K: MacKey> Signer<K> {
  /// Create a new signer from the MAC capability and options.
  ///
  /// Pure value construction: the secret is captured inside `key` and never
  /// stored separately, and no validation of secret strength happens here.
  pub fn new(key: K, options: SignerOptions) -> Self {
    Self { key, options }
  }

  /// The configuration this signer was built with
  pub fn options(&self) -> &SignerOptions {
    &self.options
  }

  /// Keys participating in the canonical message of `values`, ascending
  pub fn sorted_query_keys(&self, values: &impl QueryMap) -> Vec<String> {
    sorted_query_keys(values, &self.options.signature_param)
  }

  /// Canonical message of `values` as fed to the MAC
  pub fn canonical_message(&self, values: &impl QueryMap) -> String {
    concat_query_values(values, &self.options.signature_param)
  }

  /// Hex-encoded MAC over the canonical message of `values`
  fn expected_signature(&self, values: &impl QueryMap) -> QuerySigResult<String> {
    let message = self.canonical_message(values);
    let digest = self.key.compute(message.as_bytes())?;
    Ok(hex::encode(digest))
  }

  /// Augment `values` with nonce, timestamp and signature parameters.
  ///
  /// Nonce and timestamp are inserted before canonicalization so they
  /// participate in the signed message; all previously present parameters
  /// are preserved unchanged. Fails only when the nonce generator does.
  pub fn sign(&self, values: &mut impl QueryMap) -> QuerySigResult<()> {
    let nonce = self.options.nonce_generator.generate()?;
    let timestamp = unix_timestamp_now();
    values.set(&self.options.nonce_param, &nonce);
    values.set(&self.options.timestamp_param, &timestamp.to_string());
    let signature = self.expected_signature(values)?;
    values.set(&self.options.signature_param, &signature);
    debug!(timestamp, "signed query parameters");
    Ok(())
  }

  /// Validate `values` against the configured key and freshness window.
  ///
  /// `Ok(())` only when the request carries all three reserved parameters,
  /// the timestamp is fresh, the recomputed MAC matches, and the optional
  /// replay check accepts the nonce.
  pub fn is_valid(&self, values: &impl QueryMap) -> QuerySigResult<()> {
    self.is_valid_at(values, unix_timestamp_now())
  }

  /// Validation against an explicit clock, for callers with their own time
  /// source and for deterministic expiry tests
  pub fn is_valid_at(&self, values: &impl QueryMap, now: u64) -> QuerySigResult<()> {
    let timestamp = values
      .get(&self.options.timestamp_param)
      .ok_or_else(|| QuerySigError::MalformedRequest(format!("missing parameter {}", self.options.timestamp_param)))?;
    let nonce = values
      .get(&self.options.nonce_param)
      .ok_or_else(|| QuerySigError::MalformedRequest(format!("missing parameter {}", self.options.nonce_param)))?;
    let signature = values
      .get(&self.options.signature_param)
      .ok_or_else(|| QuerySigError::MalformedRequest(format!("missing parameter {}", self.options.signature_param)))?;
    let timestamp: u64 = timestamp
      .parse()
      .map_err(|_| QuerySigError::MalformedRequest(format!("timestamp is not an integer: {timestamp}")))?;

    // freshness runs even when replay checking is disabled
    if timestamp > now + CLOCK_SKEW_TOLERANCE {
      return Err(QuerySigError::Expired(format!(
        "timestamp {timestamp} is more than {CLOCK_SKEW_TOLERANCE}s in the future"
      )));
    }
    if now.saturating_sub(timestamp) > self.options.max_life {
      debug!(timestamp, now, max_life = self.options.max_life, "signature outlived its validity window");
      return Err(QuerySigError::Expired(format!(
        "signature older than {} seconds",
        self.options.max_life
      )));
    }

    let presented =
      hex::decode(signature).map_err(|_| QuerySigError::InvalidSignature("signature is not valid hex".to_string()))?;
    let message = self.canonical_message(values);
    self.key.verify(message.as_bytes(), &presented)?;

    if let Some(checker) = &self.options.check_nonce {
      checker.check(nonce).map_err(QuerySigError::InvalidNonce)?;
    }
    Ok(())
  }
}

/* ---------------------------------------- */
