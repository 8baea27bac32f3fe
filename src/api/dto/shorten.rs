//! DTOs for the shortening endpoint.

use serde::Deserialize;
use validator::Validate;

/// Form body of `POST /shorten`.
///
/// `link` is optional at the deserialization level so that a missing field
/// is reported as a validation error rather than a form rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenForm {
    #[validate(required(message = "URL is required"))]
    pub link: Option<String>,
}
