mod canonical;
mod crypto;
mod error;
mod nonce;
mod options;
mod signer;
mod trace;
mod util;
mod values;

pub mod prelude {
  pub use crate::{
    canonical::{concat_query_values, sorted_query_keys},
    crypto::{AlgorithmName, MacKey, SharedKey},
    error::{QuerySigError, QuerySigResult},
    nonce::{NonceChecker, NonceGenerator, RandomNonce},
    options::SignerOptions,
    signer::{Signer, CLOCK_SKEW_TOLERANCE},
    values::{QueryMap, QueryValues},
  };
}

/* ----------------------------------------------------------------- */
#[cfg(test)]
mod tests {
  use super::prelude::*;
  use std::str::FromStr;

  const SECRET: &[u8] = b"secret";

  fn build_signer(alg: AlgorithmName) -> Signer<SharedKey> {
    Signer::new(SharedKey::from_raw(&alg, SECRET), SignerOptions::default())
  }

  /* ----------------------------------------------------------------- */
  // the canonical message is independent of how the query string was assembled
  #[test]
  fn test_signature_is_insertion_order_independent() {
    let signer = build_signer(AlgorithmName::HmacSha256);

    let mut values = QueryValues::from_str("foo=bar&id=42&q=search+term").unwrap();
    signer.sign(&mut values).unwrap();

    // rebuild the same parameter set in a different insertion order, as a
    // receiver parsing a reordered query string would
    let mut reordered = QueryValues::new();
    for key in ["q", "signature", "id", "timestamp", "foo", "nonce"] {
      let value = values.get(key).unwrap().to_string();
      reordered.set(key, &value);
    }
    signer.is_valid(&reordered).unwrap();
  }

  #[test]
  fn test_round_trip_for_all_algorithms() {
    for alg in [AlgorithmName::HmacSha1, AlgorithmName::HmacMd5, AlgorithmName::HmacSha256] {
      let signer = build_signer(alg);
      let mut values = QueryValues::from_str("foo=bar&baz=boz").unwrap();
      signer.sign(&mut values).unwrap();
      signer.is_valid(&values).unwrap();
    }
  }

  #[test]
  fn test_verifier_with_wrong_secret_rejects() {
    let signer = build_signer(AlgorithmName::HmacSha256);
    let mut values = QueryValues::from_str("foo=bar").unwrap();
    signer.sign(&mut values).unwrap();

    let verifier = Signer::new(
      SharedKey::from_raw(&AlgorithmName::HmacSha256, b"other secret"),
      SignerOptions::default(),
    );
    assert!(matches!(
      verifier.is_valid(&values),
      Err(QuerySigError::InvalidSignature(_))
    ));
  }

  #[test]
  fn test_replay_delegation_toggles_outcome() {
    let mut values = QueryValues::from_str("foo=bar").unwrap();
    build_signer(AlgorithmName::HmacSha1).sign(&mut values).unwrap();

    // without a checker the same request passes
    build_signer(AlgorithmName::HmacSha1).is_valid(&values).unwrap();

    // with an always-rejecting checker it fails as a replay
    let mut options = SignerOptions::default();
    options.set_check_nonce(|_: &str| -> Result<(), String> { Err("nonce already used".to_string()) });
    let checking = Signer::new(SharedKey::from_raw(&AlgorithmName::HmacSha1, SECRET), options);
    assert!(matches!(checking.is_valid(&values), Err(QuerySigError::InvalidNonce(_))));
  }

  #[test]
  fn test_sorted_keys_through_signer() {
    let signer = build_signer(AlgorithmName::HmacSha1);
    let values = QueryValues::from_str(
      "foo=bar&baz=boz&timestamp=14093294990&nonce=1usdfIHOOH%23%24B3NGP12NGIDIEFN3232IGP&signature=00",
    )
    .unwrap();
    assert_eq!(signer.sorted_query_keys(&values), vec!["baz", "foo", "nonce", "timestamp"]);
    assert_eq!(
      signer.canonical_message(&values),
      "bozbar1usdfIHOOH#$B3NGP12NGIDIEFN3232IGP14093294990"
    );
  }
}
