//! Pure helpers with no I/O.
//!
//! - [`codec`] - Base-62 conversion between record ids and short codes
//! - [`url_normalizer`] - URL validation and normalization

pub mod codec;
pub mod url_normalizer;
