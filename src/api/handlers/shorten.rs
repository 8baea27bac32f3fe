//! Handler for the link shortening endpoint.

use axum::{
    Form,
    extract::{State, rejection::FormRejection},
};
use validator::Validate;

use crate::api::dto::shorten::ShortenForm;
use crate::error::AppError;
use crate::state::AppState;

/// Stores a URL and returns its short code as plain text.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// `application/x-www-form-urlencoded` with a single `link` field:
///
/// ```text
/// link=www.something.com
/// ```
///
/// # Response
///
/// `200 OK` with the short code as a `text/plain` body, e.g. `ec`.
///
/// # Errors
///
/// Returns 400 Bad Request if the body or `link` is missing, or if `link` is
/// empty, uses an unsupported scheme, or is not a valid absolute URL.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Form<ShortenForm>, FormRejection>,
) -> Result<String, AppError> {
    let Form(payload) = payload?;
    payload.validate()?;

    let link = payload.link.unwrap_or_default();
    let record = state.link_service.shorten(&link).await?;

    Ok(record.code())
}
