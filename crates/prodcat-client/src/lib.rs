//! Catalog API client and response normalization.
//!
//! Responses arrive as JSON or XML with backend-specific envelopes and field
//! names. This crate parses them in the negotiated format, unwraps the
//! envelope, maps fields onto [`prodcat_core::Product`] and extracts the page
//! count. Everything past the HTTP exchange is synchronous and stateless.

pub mod client;
pub mod decode;
pub mod envelope;
pub mod error;
pub mod normalize;
pub mod pagination;
pub mod parse;
pub mod xml;

pub use client::{CatalogClient, ListQuery};
pub use decode::{decode_detail, decode_list};
pub use error::{classify_response, ClientError, FetchError};
pub use normalize::{canonicalize_detail, normalize_record};
