//! Show association model and the show-centric view models.

use chrono::{DateTime, NaiveDateTime, Utc};
use fyyur_core::types::{DbId, Timestamp};
use serde::{de, Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// A show row from the `shows` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Show {
    pub id: DbId,
    pub artist_id: DbId,
    pub venue_id: DbId,
    pub start_time: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a show. Both referenced rows must already exist.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShow {
    pub artist_id: DbId,
    pub venue_id: DbId,
    /// RFC 3339, or a naive `YYYY-MM-DD HH:MM:SS` taken as UTC.
    #[serde(deserialize_with = "deserialize_start_time")]
    pub start_time: Timestamp,
}

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse a show start time. Values without an offset are read as UTC.
pub fn parse_start_time(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn deserialize_start_time<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_start_time(&raw).ok_or_else(|| {
        de::Error::custom(format!(
            "invalid start_time `{raw}`: expected RFC 3339 or YYYY-MM-DD HH:MM:SS"
        ))
    })
}

/// A row on the shows index, joined with both sides of the association.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShowListing {
    pub id: DbId,
    pub venue_id: DbId,
    pub venue_name: String,
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: Timestamp,
}

/// A show as listed on a venue's page (counterpart: the artist).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VenueShow {
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: Timestamp,
}

/// A show as listed on an artist's page (counterpart: the venue).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtistShow {
    pub venue_id: DbId,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: Timestamp,
}
