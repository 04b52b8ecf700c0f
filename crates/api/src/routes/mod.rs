pub mod artist;
pub mod health;
pub mod show;
pub mod venue;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /venues                     list (grouped by location), create
/// /venues/search              search by name or genre (POST)
/// /venues/{id}                detail, update, delete
/// /venues/{id}/edit           stored record for edit forms
///
/// /artists                    list, create
/// /artists/search             search by name or genre (POST)
/// /artists/{id}               detail, update
/// /artists/{id}/edit          stored record for edit forms
///
/// /shows                      list, create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/venues", venue::router())
        .nest("/artists", artist::router())
        .nest("/shows", show::router())
}
