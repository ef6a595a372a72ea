use std::time::{SystemTime, UNIX_EPOCH};

/// Check duplicate elements in a vector
pub(crate) fn has_unique_elements<T>(iter: T) -> bool
where
  T: IntoIterator,
  T::Item: Eq + std::hash::Hash,
{
  let mut uniq = rustc_hash::FxHashSet::default();
  iter.into_iter().all(move |x| uniq.insert(x))
}

/// Current unix timestamp in integer seconds
pub(crate) fn unix_timestamp_now() -> u64 {
  SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_secs()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unique_elements() {
    assert!(has_unique_elements(["nonce", "timestamp", "signature"]));
    assert!(!has_unique_elements(["nonce", "nonce", "signature"]));
  }
}
