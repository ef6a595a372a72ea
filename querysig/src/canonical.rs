use crate::values::QueryMap;

/// Keys participating in the canonical message, in ascending byte-wise order.
///
/// The signature parameter itself is excluded: a request is never MACed over
/// its own signature field. Signer and verifier must agree on this ordering
/// byte for byte, so it is plain `Ord` on the raw bytes, independent of any
/// locale.
pub fn sorted_query_keys(values: &impl QueryMap, signature_param: &str) -> Vec<String> {
  let mut keys: Vec<String> = values
    .keys()
    .into_iter()
    .filter(|k| *k != signature_param)
    .map(|k| k.to_string())
    .collect();
  keys.sort_unstable();
  keys
}

/// Canonical message over which the MAC is computed: the first value of each
/// parameter, concatenated in sorted-key order.
///
/// Values of a multivalued parameter beyond the first do not participate in
/// the signature. This is a documented limitation kept for wire
/// compatibility, not an oversight.
pub fn concat_query_values(values: &impl QueryMap, signature_param: &str) -> String {
  sorted_query_keys(values, signature_param)
    .iter()
    .filter_map(|k| values.get(k))
    .collect()
}

/* --------------------------------------- */
