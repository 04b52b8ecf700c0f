//! Handlers for the `/venues` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use fyyur_core::error::CoreError;
use fyyur_core::search::SearchResults;
use fyyur_core::types::DbId;
use fyyur_db::models::venue::{CreateVenue, UpdateVenue, Venue, VenueArea, VenueDetail, VenueSummary};
use fyyur_db::repositories::{ShowRepo, VenueRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::validated;
use crate::query::SearchRequest;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Venue", id })
}

/// GET /api/v1/venues
///
/// Venues grouped by `(state, city)`.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<VenueArea>>> {
    let mut conn = state.acquire().await?;
    let rows = VenueRepo::list_by_location(&mut *conn, Utc::now()).await?;
    Ok(Json(VenueArea::group(rows)))
}

/// POST /api/v1/venues
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateVenue>,
) -> AppResult<(StatusCode, Json<Venue>)> {
    let input = validated(input.normalized())?;

    let mut tx = state.begin().await?;
    let venue = VenueRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;

    tracing::info!(venue_id = venue.id, name = %venue.name, "Venue listed");
    Ok((StatusCode::CREATED, Json(venue)))
}

/// POST /api/v1/venues/search
///
/// Name matches first, then venues whose genres contain the exact term.
pub async fn search(
    State(state): State<AppState>,
    AppJson(request): AppJson<SearchRequest>,
) -> AppResult<Json<SearchResults<VenueSummary>>> {
    let term = request.search_term.trim();
    let now = Utc::now();

    let mut conn = state.acquire().await?;
    let by_name = VenueRepo::search_by_name(&mut *conn, term, now).await?;
    let by_genre = VenueRepo::search_by_genre(&mut *conn, term, now).await?;

    Ok(Json(SearchResults::merge(by_name, by_genre, |v| v.id)))
}

/// GET /api/v1/venues/{id}
///
/// Venue detail with its shows split into past and upcoming.
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<VenueDetail>> {
    let mut conn = state.acquire().await?;
    let venue = VenueRepo::find_by_id(&mut *conn, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let shows = ShowRepo::list_for_venue(&mut *conn, id).await?;
    Ok(Json(VenueDetail::assemble(venue, shows, Utc::now())))
}

/// GET /api/v1/venues/{id}/edit
///
/// The stored record, for pre-filling an edit form.
pub async fn get_record(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Venue>> {
    let mut conn = state.acquire().await?;
    let venue = VenueRepo::find_by_id(&mut *conn, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(venue))
}

/// PUT /api/v1/venues/{id}
///
/// Full-record replacement. Concurrent edits are last-writer-wins.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateVenue>,
) -> AppResult<Json<Venue>> {
    let input = validated(input.normalized())?;

    let mut tx = state.begin().await?;
    let venue = VenueRepo::update(&mut *tx, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tx.commit().await?;

    tracing::info!(venue_id = id, "Venue updated");
    Ok(Json(venue))
}

/// DELETE /api/v1/venues/{id}
///
/// Rejected with 409 while any show (past or upcoming) references the
/// venue. The venue row is locked first so a concurrent show insert waits
/// on this transaction.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    let mut tx = state.begin().await?;

    if !VenueRepo::lock(&mut *tx, id).await? {
        return Err(not_found(id));
    }

    let show_count = ShowRepo::count_for_venue(&mut *tx, id).await?;
    if show_count > 0 {
        tracing::debug!(venue_id = id, show_count, "Venue delete rejected");
        return Err(AppError::Core(CoreError::ConstraintViolation(format!(
            "Venue {id} is referenced by {show_count} show(s) and cannot be deleted"
        ))));
    }

    VenueRepo::delete(&mut *tx, id).await?;
    tx.commit().await?;

    tracing::info!(venue_id = id, "Venue deleted");
    Ok(StatusCode::NO_CONTENT)
}
