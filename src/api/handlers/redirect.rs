//! Handler for short code redirects.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its stored URL.
///
/// # Endpoint
///
/// `GET /get/{code}`
///
/// The code is decoded into a record id and the record is fetched by id.
/// A code with characters outside the codec alphabet is answered exactly
/// like a code with no record behind it.
///
/// # Errors
///
/// Returns 404 Not Found if the code is malformed or unknown.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let record = state.link_service.resolve(&code).await?;

    Ok((
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, record.real_url)],
    ))
}
