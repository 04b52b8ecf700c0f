//! Handlers for the `/artists` resource.
//!
//! Artists have no delete path.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use fyyur_core::error::CoreError;
use fyyur_core::search::SearchResults;
use fyyur_core::types::DbId;
use fyyur_db::models::artist::{Artist, ArtistDetail, ArtistSummary, CreateArtist, UpdateArtist};
use fyyur_db::repositories::{ArtistRepo, ShowRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::validated;
use crate::query::SearchRequest;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Artist", id })
}

/// GET /api/v1/artists
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ArtistSummary>>> {
    let mut conn = state.acquire().await?;
    let artists = ArtistRepo::list_by_name(&mut *conn, Utc::now()).await?;
    Ok(Json(artists))
}

/// POST /api/v1/artists
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateArtist>,
) -> AppResult<(StatusCode, Json<Artist>)> {
    let input = validated(input.normalized())?;

    let mut tx = state.begin().await?;
    let artist = ArtistRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;

    tracing::info!(artist_id = artist.id, name = %artist.name, "Artist listed");
    Ok((StatusCode::CREATED, Json(artist)))
}

/// POST /api/v1/artists/search
pub async fn search(
    State(state): State<AppState>,
    AppJson(request): AppJson<SearchRequest>,
) -> AppResult<Json<SearchResults<ArtistSummary>>> {
    let term = request.search_term.trim();
    let now = Utc::now();

    let mut conn = state.acquire().await?;
    let by_name = ArtistRepo::search_by_name(&mut *conn, term, now).await?;
    let by_genre = ArtistRepo::search_by_genre(&mut *conn, term, now).await?;

    Ok(Json(SearchResults::merge(by_name, by_genre, |a| a.id)))
}

/// GET /api/v1/artists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ArtistDetail>> {
    let mut conn = state.acquire().await?;
    let artist = ArtistRepo::find_by_id(&mut *conn, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let shows = ShowRepo::list_for_artist(&mut *conn, id).await?;
    Ok(Json(ArtistDetail::assemble(artist, shows, Utc::now())))
}

/// GET /api/v1/artists/{id}/edit
pub async fn get_record(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Artist>> {
    let mut conn = state.acquire().await?;
    let artist = ArtistRepo::find_by_id(&mut *conn, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(artist))
}

/// PUT /api/v1/artists/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateArtist>,
) -> AppResult<Json<Artist>> {
    let input = validated(input.normalized())?;

    let mut tx = state.begin().await?;
    let artist = ArtistRepo::update(&mut *tx, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tx.commit().await?;

    tracing::info!(artist_id = id, "Artist updated");
    Ok(Json(artist))
}
