use crate::error::{HyperSigError, HyperSigResult};
use http::{uri::PathAndQuery, Request, Uri};
use querysig::prelude::{MacKey, QueryMap, QueryValues, Signer};
use std::str::FromStr;
use tracing::debug;

/* --------------------------------------- */
/// A trait about the query signature of an http request
pub trait QuerySignatureReq {
  type Error;

  /// Check if the request query carries the configured signature parameter
  fn has_query_signature<K: MacKey>(&self, signer: &Signer<K>) -> bool;

  /// Sign the request query in place, appending nonce, timestamp and
  /// signature parameters and rewriting the request uri
  fn sign_query<K: MacKey>(&mut self, signer: &Signer<K>) -> Result<(), Self::Error>;

  /// Verify the query signature of the request
  fn verify_query<K: MacKey>(&self, signer: &Signer<K>) -> Result<(), Self::Error>;
}

/* --------------------------------------- */
impl<B> QuerySignatureReq for Request<B> {
  type Error = HyperSigError;

  /// Check if the request query carries the configured signature parameter
  fn has_query_signature<K: MacKey>(&self, signer: &Signer<K>) -> bool {
    self
      .uri()
      .query()
      .and_then(|q| QueryValues::from_str(q).ok())
      .map(|values| values.contains(&signer.options().signature_param))
      .unwrap_or(false)
  }

  /// Sign the request query in place
  fn sign_query<K: MacKey>(&mut self, signer: &Signer<K>) -> HyperSigResult<()> {
    let mut values = match self.uri().query() {
      Some(q) => QueryValues::from_str(q)?,
      None => QueryValues::new(),
    };
    signer.sign(&mut values)?;

    let path_and_query = PathAndQuery::from_str(&format!("{}?{}", self.uri().path(), values))?;
    let mut parts = self.uri().clone().into_parts();
    parts.path_and_query = Some(path_and_query);
    *self.uri_mut() = Uri::from_parts(parts)?;
    debug!(uri = %self.uri(), "signed request query");
    Ok(())
  }

  /// Verify the query signature of the request
  fn verify_query<K: MacKey>(&self, signer: &Signer<K>) -> HyperSigResult<()> {
    let query = self
      .uri()
      .query()
      .ok_or_else(|| HyperSigError::NoQueryString(self.uri().to_string()))?;
    let values = QueryValues::from_str(query)?;
    signer.is_valid(&values)?;
    Ok(())
  }
}
