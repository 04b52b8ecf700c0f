//! Handlers for the `/shows` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use fyyur_db::models::show::{CreateShow, Show, ShowListing};
use fyyur_db::repositories::ShowRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

/// GET /api/v1/shows
///
/// Ordered by `(artist_id, start_time)`.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ShowListing>>> {
    let mut conn = state.acquire().await?;
    let shows = ShowRepo::list_all(&mut *conn).await?;
    Ok(Json(shows))
}

/// POST /api/v1/shows
///
/// A missing artist or venue fails the foreign key, which rolls the
/// transaction back and surfaces as 409.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateShow>,
) -> AppResult<(StatusCode, Json<Show>)> {
    let mut tx = state.begin().await?;
    let show = ShowRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;

    tracing::info!(
        show_id = show.id,
        artist_id = show.artist_id,
        venue_id = show.venue_id,
        "Show listed"
    );
    Ok((StatusCode::CREATED, Json(show)))
}
