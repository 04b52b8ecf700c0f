//! Repository for the `artists` table.

use fyyur_core::search::substring_pattern;
use fyyur_core::types::{DbId, Timestamp};
use sqlx::PgConnection;

use crate::models::artist::{Artist, ArtistSummary, CreateArtist, UpdateArtist};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, phone, genres, image_link, facebook_link, \
     website_link, seeking_venues, seeking_description, created_at, updated_at";

/// Correlated count of an artist's upcoming shows relative to `$1` (now).
const UPCOMING_COUNT: &str =
    "(SELECT COUNT(*) FROM shows s WHERE s.artist_id = a.id AND s.start_time >= $1)";

/// Provides create/read/update and listing queries for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist, returning the created row.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateArtist,
    ) -> Result<Artist, sqlx::Error> {
        let query = format!(
            "INSERT INTO artists (name, city, state, phone, genres, image_link, facebook_link,
                                  website_link, seeking_venues, seeking_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website_link)
            .bind(input.seeking_venues)
            .bind(&input.seeking_description)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find an artist by ID.
    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Replace every editable column of an artist.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &UpdateArtist,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!(
            "UPDATE artists SET
                name = $2,
                city = $3,
                state = $4,
                phone = $5,
                genres = $6,
                image_link = $7,
                facebook_link = $8,
                website_link = $9,
                seeking_venues = $10,
                seeking_description = $11
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website_link)
            .bind(input.seeking_venues)
            .bind(&input.seeking_description)
            .fetch_optional(&mut *conn)
            .await
    }

    /// List every artist ordered by name.
    pub async fn list_by_name(
        conn: &mut PgConnection,
        now: Timestamp,
    ) -> Result<Vec<ArtistSummary>, sqlx::Error> {
        let query = format!(
            "SELECT a.id, a.name, {UPCOMING_COUNT} AS num_upcoming_shows
             FROM artists a
             ORDER BY a.name, a.id"
        );
        sqlx::query_as::<_, ArtistSummary>(&query)
            .bind(now)
            .fetch_all(&mut *conn)
            .await
    }

    /// Artists whose name contains `term`, case-insensitively.
    pub async fn search_by_name(
        conn: &mut PgConnection,
        term: &str,
        now: Timestamp,
    ) -> Result<Vec<ArtistSummary>, sqlx::Error> {
        let query = format!(
            "SELECT a.id, a.name, {UPCOMING_COUNT} AS num_upcoming_shows
             FROM artists a
             WHERE a.name ILIKE $2
             ORDER BY a.name, a.id"
        );
        sqlx::query_as::<_, ArtistSummary>(&query)
            .bind(now)
            .bind(substring_pattern(term))
            .fetch_all(&mut *conn)
            .await
    }

    /// Artists with a genre exactly equal to `term`.
    pub async fn search_by_genre(
        conn: &mut PgConnection,
        term: &str,
        now: Timestamp,
    ) -> Result<Vec<ArtistSummary>, sqlx::Error> {
        let query = format!(
            "SELECT a.id, a.name, {UPCOMING_COUNT} AS num_upcoming_shows
             FROM artists a
             WHERE $2 = ANY(a.genres)
             ORDER BY a.name, a.id"
        );
        sqlx::query_as::<_, ArtistSummary>(&query)
            .bind(now)
            .bind(term)
            .fetch_all(&mut *conn)
            .await
    }
}
