//! Shortened URL entity.

use crate::utils::codec;

/// Maximum length of a stored URL, enforced by storage.
pub const MAX_URL_LENGTH: usize = 200;

/// A stored URL together with the id assigned by storage.
///
/// The short code is not a field: it is always derived from `id`, see
/// [`ShortenedUrl::code`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedUrl {
    pub id: i64,
    pub real_url: String,
}

impl ShortenedUrl {
    /// Creates a new ShortenedUrl instance.
    pub fn new(id: i64, real_url: String) -> Self {
        Self { id, real_url }
    }

    /// Returns the short code for this record.
    ///
    /// Ids are assigned by storage and never negative; a negative id would
    /// indicate a storage bug and encodes as id zero.
    pub fn code(&self) -> String {
        codec::encode(u64::try_from(self.id).unwrap_or_default())
    }
}
