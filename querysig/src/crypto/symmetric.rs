use super::{AlgorithmName, MacKey};
use crate::error::QuerySigResult;
use base64::{engine::general_purpose, Engine as _};
use hmac::{Hmac, Mac};

type HmacSha1 = Hmac<sha1::Sha1>;
type HmacMd5 = Hmac<md5::Md5>;
type HmacSha256 = Hmac<sha2::Sha256>;

/* -------------------------------- */
/// Shared key for query signatures.
///
/// The secret lives only inside this value, captured at construction time.
/// HMAC accepts keys of any length, so construction cannot fail on the key
/// itself.
pub enum SharedKey {
  /// hmac-sha1
  HmacSha1(Vec<u8>),
  /// hmac-md5
  HmacMd5(Vec<u8>),
  /// hmac-sha256
  HmacSha256(Vec<u8>),
}

impl SharedKey {
  /// Create a new shared key from a base64 encoded secret
  pub fn from_base64(alg: &AlgorithmName, key: &str) -> QuerySigResult<Self> {
    let key = general_purpose::STANDARD.decode(key)?;
    Ok(match alg {
      AlgorithmName::HmacSha1 => SharedKey::HmacSha1(key),
      AlgorithmName::HmacMd5 => SharedKey::HmacMd5(key),
      AlgorithmName::HmacSha256 => SharedKey::HmacSha256(key),
    })
  }

  /// Create a new shared key from a raw secret
  pub fn from_raw(alg: &AlgorithmName, key: &[u8]) -> Self {
    match alg {
      AlgorithmName::HmacSha1 => SharedKey::HmacSha1(key.to_vec()),
      AlgorithmName::HmacMd5 => SharedKey::HmacMd5(key.to_vec()),
      AlgorithmName::HmacSha256 => SharedKey::HmacSha256(key.to_vec()),
    }
  }
}

impl MacKey for SharedKey {
  /// Compute the MAC with a fresh hmac state per call
  fn compute(&self, message: &[u8]) -> QuerySigResult<Vec<u8>> {
    match self {
      SharedKey::HmacSha1(key) => {
        let mut mac = HmacSha1::new_from_slice(key).unwrap();
        mac.update(message);
        Ok(mac.finalize().into_bytes().to_vec())
      }
      SharedKey::HmacMd5(key) => {
        let mut mac = HmacMd5::new_from_slice(key).unwrap();
        mac.update(message);
        Ok(mac.finalize().into_bytes().to_vec())
      }
      SharedKey::HmacSha256(key) => {
        let mut mac = HmacSha256::new_from_slice(key).unwrap();
        mac.update(message);
        Ok(mac.finalize().into_bytes().to_vec())
      }
    }
  }

  /// Get the algorithm name
  fn alg(&self) -> AlgorithmName {
    match self {
      SharedKey::HmacSha1(_) => AlgorithmName::HmacSha1,
      SharedKey::HmacMd5(_) => AlgorithmName::HmacMd5,
      SharedKey::HmacSha256(_) => AlgorithmName::HmacSha256,
    }
  }
}

/* -------------------------------- */
#[cfg(test)]
mod tests {
  use super::*;
  use base64::Engine as _;

  // test vectors from RFC 2202 (hmac-sha1, hmac-md5) and RFC 4231 (hmac-sha256),
  // case 2: key "Jefe", data "what do ya want for nothing?"
  const KEY: &[u8] = b"Jefe";
  const DATA: &[u8] = b"what do ya want for nothing?";

  #[test]
  fn hmac_sha1_test_vector() {
    let key = SharedKey::HmacSha1(KEY.to_vec());
    let digest = key.compute(DATA).unwrap();
    assert_eq!(hex::encode(digest), "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79");
  }

  #[test]
  fn hmac_md5_test_vector() {
    let key = SharedKey::HmacMd5(KEY.to_vec());
    let digest = key.compute(DATA).unwrap();
    assert_eq!(hex::encode(digest), "750c783e6ab0b503eaa86e310a5db738");
  }

  #[test]
  fn hmac_sha256_test_vector() {
    let key = SharedKey::HmacSha256(KEY.to_vec());
    let digest = key.compute(DATA).unwrap();
    assert_eq!(
      hex::encode(digest),
      "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
    );
  }

  #[test]
  fn verify_accepts_matching_and_rejects_tampered_mac() {
    let key = SharedKey::HmacSha256(KEY.to_vec());
    let mut digest = key.compute(DATA).unwrap();
    key.verify(DATA, &digest).unwrap();

    digest[0] ^= 0x01;
    assert!(key.verify(DATA, &digest).is_err());
    // truncated digest must not compare equal either
    assert!(key.verify(DATA, &digest[..16]).is_err());
  }

  #[test]
  fn from_base64_works() {
    let encoded = general_purpose::STANDARD.encode(KEY);
    let key = SharedKey::from_base64(&AlgorithmName::HmacSha1, &encoded).unwrap();
    assert_eq!(key.alg(), AlgorithmName::HmacSha1);
    let digest = key.compute(DATA).unwrap();
    assert_eq!(hex::encode(digest), "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79");
  }

  #[test]
  fn from_base64_rejects_garbage() {
    assert!(SharedKey::from_base64(&AlgorithmName::HmacSha256, "not base64 !!!").is_err());
  }
}
