mod symmetric;

use crate::error::{QuerySigError, QuerySigResult};

pub use symmetric::SharedKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Algorithm names
pub enum AlgorithmName {
  HmacSha1,
  HmacMd5,
  HmacSha256,
}

impl AlgorithmName {
  pub fn as_str(&self) -> &'static str {
    match self {
      AlgorithmName::HmacSha1 => "hmac-sha1",
      AlgorithmName::HmacMd5 => "hmac-md5",
      AlgorithmName::HmacSha256 => "hmac-sha256",
    }
  }
}

impl std::fmt::Display for AlgorithmName {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl core::str::FromStr for AlgorithmName {
  type Err = QuerySigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "hmac-sha1" => Ok(Self::HmacSha1),
      "hmac-md5" => Ok(Self::HmacMd5),
      "hmac-sha256" => Ok(Self::HmacSha256),
      _ => Err(QuerySigError::InvalidAlgorithmName(s.to_string())),
    }
  }
}

/// MacKey trait.
///
/// `compute` must run over an independent, freshly initialized keyed-hash
/// state on every call. A single key is shared across concurrent
/// sign/validate operations, and interleaved writes into one shared MAC
/// accumulator would produce corrupted digests.
pub trait MacKey {
  /// Compute the MAC digest over the message
  fn compute(&self, message: &[u8]) -> QuerySigResult<Vec<u8>>;

  /// Recompute the MAC over the message and compare against `expected` in
  /// constant time with respect to the digest bytes.
  fn verify(&self, message: &[u8], expected: &[u8]) -> QuerySigResult<()> {
    use subtle::ConstantTimeEq;
    let computed = self.compute(message)?;
    if bool::from(computed.as_slice().ct_eq(expected)) {
      Ok(())
    } else {
      Err(QuerySigError::InvalidSignature("mac mismatch".to_string()))
    }
  }

  /// Get the algorithm name
  fn alg(&self) -> AlgorithmName;
}

#[cfg(test)]
mod tests {
  use super::*;
  use core::str::FromStr;

  #[test]
  fn algorithm_name_round_trip() {
    for alg in [AlgorithmName::HmacSha1, AlgorithmName::HmacMd5, AlgorithmName::HmacSha256] {
      assert_eq!(AlgorithmName::from_str(alg.as_str()).unwrap(), alg);
    }
    assert!(AlgorithmName::from_str("hmac-sha512").is_err());
  }
}
