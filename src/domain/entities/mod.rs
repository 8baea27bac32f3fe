//! Core domain entities.
//!
//! - [`ShortenedUrl`] - A stored URL and the id its short code is derived from

pub mod shortened_url;

pub use shortened_url::{MAX_URL_LENGTH, ShortenedUrl};
