//! Repository for the `shows` table.
//!
//! Shows are insert-only. The venue/artist sides are resolved with explicit
//! joins rather than relationship back-references.

use fyyur_core::types::DbId;
use sqlx::PgConnection;

use crate::models::show::{ArtistShow, CreateShow, Show, ShowListing, VenueShow};

const COLUMNS: &str = "id, artist_id, venue_id, start_time, created_at, updated_at";

/// Provides insert and lookup queries for shows.
pub struct ShowRepo;

impl ShowRepo {
    /// Insert a new show.
    ///
    /// A nonexistent `artist_id` or `venue_id` fails with a foreign-key
    /// violation (`fk_shows_artist` / `fk_shows_venue`) and inserts nothing.
    pub async fn create(conn: &mut PgConnection, input: &CreateShow) -> Result<Show, sqlx::Error> {
        let query = format!(
            "INSERT INTO shows (artist_id, venue_id, start_time)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Show>(&query)
            .bind(input.artist_id)
            .bind(input.venue_id)
            .bind(input.start_time)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find a show by ID.
    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> Result<Option<Show>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shows WHERE id = $1");
        sqlx::query_as::<_, Show>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Every show with both sides joined, ordered by `(artist_id, start_time)`.
    pub async fn list_all(conn: &mut PgConnection) -> Result<Vec<ShowListing>, sqlx::Error> {
        sqlx::query_as::<_, ShowListing>(
            "SELECT s.id, s.venue_id, v.name AS venue_name,
                    s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
                    s.start_time
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             JOIN artists a ON a.id = s.artist_id
             ORDER BY s.artist_id, s.start_time, s.id",
        )
        .fetch_all(&mut *conn)
        .await
    }

    /// Shows at a venue with the performing artist, ordered by start time.
    pub async fn list_for_venue(
        conn: &mut PgConnection,
        venue_id: DbId,
    ) -> Result<Vec<VenueShow>, sqlx::Error> {
        sqlx::query_as::<_, VenueShow>(
            "SELECT s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
                    s.start_time
             FROM shows s
             JOIN artists a ON a.id = s.artist_id
             WHERE s.venue_id = $1
             ORDER BY s.start_time, s.id",
        )
        .bind(venue_id)
        .fetch_all(&mut *conn)
        .await
    }

    /// Shows by an artist with the hosting venue, ordered by start time.
    pub async fn list_for_artist(
        conn: &mut PgConnection,
        artist_id: DbId,
    ) -> Result<Vec<ArtistShow>, sqlx::Error> {
        sqlx::query_as::<_, ArtistShow>(
            "SELECT s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link,
                    s.start_time
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             WHERE s.artist_id = $1
             ORDER BY s.start_time, s.id",
        )
        .bind(artist_id)
        .fetch_all(&mut *conn)
        .await
    }

    /// Number of shows (past or upcoming) referencing a venue.
    pub async fn count_for_venue(conn: &mut PgConnection, venue_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM shows WHERE venue_id = $1")
            .bind(venue_id)
            .fetch_one(&mut *conn)
            .await
    }
}
