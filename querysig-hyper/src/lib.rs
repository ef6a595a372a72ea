//! # querysig-hyper
//!
//! `querysig-hyper` extends hyper's http request type with the ability to
//! sign and verify its query string using a shared-secret MAC. Signing
//! appends nonce, timestamp and signature parameters to the uri query and
//! rewrites the uri in place; verification parses the query back and
//! delegates to the `querysig` core.
//!
//! All operations are synchronous: only the query string is touched, never
//! the request body.

mod error;
mod hyper_http;

pub use error::{HyperSigError, HyperSigResult};
pub use hyper_http::QuerySignatureReq;
pub use querysig::prelude;

/* ----------------------------------------------------------------- */
