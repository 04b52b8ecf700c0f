//! Repository for the `venues` table.

use fyyur_core::search::substring_pattern;
use fyyur_core::types::{DbId, Timestamp};
use sqlx::PgConnection;

use crate::models::venue::{CreateVenue, UpdateVenue, Venue, VenueListingRow, VenueSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, address, phone, genres, image_link, \
     facebook_link, website_link, seeking_talent, seeking_description, created_at, updated_at";

/// Correlated count of a venue's upcoming shows relative to `$1` (now).
///
/// Same boundary as `ShowTiming::classify`: starting at `now` is upcoming.
const UPCOMING_COUNT: &str =
    "(SELECT COUNT(*) FROM shows s WHERE s.venue_id = v.id AND s.start_time >= $1)";

/// Provides create/read/update/delete and listing queries for venues.
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a new venue, returning the created row.
    pub async fn create(conn: &mut PgConnection, input: &CreateVenue) -> Result<Venue, sqlx::Error> {
        let query = format!(
            "INSERT INTO venues (name, city, state, address, phone, genres, image_link,
                                 facebook_link, website_link, seeking_talent, seeking_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website_link)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find a venue by its ID.
    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Replace every editable column of a venue.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &UpdateVenue,
    ) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!(
            "UPDATE venues SET
                name = $2,
                city = $3,
                state = $4,
                address = $5,
                phone = $6,
                genres = $7,
                image_link = $8,
                facebook_link = $9,
                website_link = $10,
                seeking_talent = $11,
                seeking_description = $12
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website_link)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Lock a venue row for the rest of the transaction. Returns `false` if
    /// the venue does not exist.
    pub async fn lock(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let row: Option<(DbId,)> = sqlx::query_as("SELECT id FROM venues WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row.is_some())
    }

    /// Permanently delete a venue. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while any show references the
    /// venue; callers check [`super::ShowRepo::count_for_venue`] first to
    /// report that case explicitly.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List every venue ordered by `(state, city)` with its upcoming-show
    /// count. Ties are broken by id so grouping is deterministic.
    pub async fn list_by_location(
        conn: &mut PgConnection,
        now: Timestamp,
    ) -> Result<Vec<VenueListingRow>, sqlx::Error> {
        let query = format!(
            "SELECT v.id, v.name, v.city, v.state, {UPCOMING_COUNT} AS num_upcoming_shows
             FROM venues v
             ORDER BY v.state, v.city, v.id"
        );
        sqlx::query_as::<_, VenueListingRow>(&query)
            .bind(now)
            .fetch_all(&mut *conn)
            .await
    }

    /// Venues whose name contains `term`, case-insensitively.
    pub async fn search_by_name(
        conn: &mut PgConnection,
        term: &str,
        now: Timestamp,
    ) -> Result<Vec<VenueSummary>, sqlx::Error> {
        let query = format!(
            "SELECT v.id, v.name, {UPCOMING_COUNT} AS num_upcoming_shows
             FROM venues v
             WHERE v.name ILIKE $2
             ORDER BY v.name, v.id"
        );
        sqlx::query_as::<_, VenueSummary>(&query)
            .bind(now)
            .bind(substring_pattern(term))
            .fetch_all(&mut *conn)
            .await
    }

    /// Venues with a genre exactly equal to `term`.
    pub async fn search_by_genre(
        conn: &mut PgConnection,
        term: &str,
        now: Timestamp,
    ) -> Result<Vec<VenueSummary>, sqlx::Error> {
        let query = format!(
            "SELECT v.id, v.name, {UPCOMING_COUNT} AS num_upcoming_shows
             FROM venues v
             WHERE $2 = ANY(v.genres)
             ORDER BY v.name, v.id"
        );
        sqlx::query_as::<_, VenueSummary>(&query)
            .bind(now)
            .bind(term)
            .fetch_all(&mut *conn)
            .await
    }
}
