use crate::error::{QuerySigError, QuerySigResult};
use indexmap::IndexMap;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters serialized verbatim in a query component (RFC 3986 unreserved set)
const QUERY_UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/* --------------------------------------- */
/// Abstraction over the query-parameter multimap of a request.
///
/// The signer only ever touches a request through this interface, so any
/// request representation can be signed by adapting it to this trait.
pub trait QueryMap {
  /// First value associated with the key, if any
  fn get(&self, key: &str) -> Option<&str>;

  /// All values associated with the key, in insertion order
  fn get_all(&self, key: &str) -> Vec<&str>;

  /// Replace all values of the key with a single value
  fn set(&mut self, key: &str, value: &str);

  /// All keys, in no particular order
  fn keys(&self) -> Vec<&str>;

  /// Check if the key is present
  fn contains(&self, key: &str) -> bool;
}

/* --------------------------------------- */
/// Provided [`QueryMap`] implementation backed by an insertion-ordered
/// multimap, with `application/x-www-form-urlencoded` parsing and
/// serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryValues {
  inner: IndexMap<String, Vec<String>>,
}

impl QueryValues {
  pub fn new() -> Self {
    Self::default()
  }

  /// Append a value under the key, keeping any existing values
  pub fn append(&mut self, key: &str, value: &str) {
    self.inner.entry(key.to_string()).or_default().push(value.to_string());
  }

  pub fn len(&self) -> usize {
    self.inner.len()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.is_empty()
  }
}

impl QueryMap for QueryValues {
  fn get(&self, key: &str) -> Option<&str> {
    self.inner.get(key).and_then(|v| v.first()).map(|s| s.as_str())
  }

  fn get_all(&self, key: &str) -> Vec<&str> {
    self
      .inner
      .get(key)
      .map(|v| v.iter().map(|s| s.as_str()).collect())
      .unwrap_or_default()
  }

  fn set(&mut self, key: &str, value: &str) {
    self.inner.insert(key.to_string(), vec![value.to_string()]);
  }

  fn keys(&self) -> Vec<&str> {
    self.inner.keys().map(|k| k.as_str()).collect()
  }

  fn contains(&self, key: &str) -> bool {
    self.inner.contains_key(key)
  }
}

impl std::str::FromStr for QueryValues {
  type Err = QuerySigError;

  /// Parse a query string. `+` decodes to a space and a pair without `=`
  /// yields an empty value, matching common form decoding.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let mut values = Self::new();
    for pair in s.split('&').filter(|p| !p.is_empty()) {
      let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
      values.append(&decode_component(k)?, &decode_component(v)?);
    }
    Ok(values)
  }
}

impl std::fmt::Display for QueryValues {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let mut first = true;
    for (key, vals) in &self.inner {
      for val in vals {
        if !first {
          f.write_str("&")?;
        }
        first = false;
        write!(
          f,
          "{}={}",
          utf8_percent_encode(key, QUERY_UNRESERVED),
          utf8_percent_encode(val, QUERY_UNRESERVED)
        )?;
      }
    }
    Ok(())
  }
}

fn decode_component(s: &str) -> QuerySigResult<String> {
  let s = s.replace('+', " ");
  percent_decode_str(&s)
    .decode_utf8()
    .map(|c| c.into_owned())
    .map_err(|e| QuerySigError::MalformedRequest(format!("invalid percent-encoding in query: {e}")))
}

/* --------------------------------------- */
