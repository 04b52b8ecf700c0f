//! Fixtures shared by the repository integration tests.

#![allow(dead_code)]

use chrono::{Duration, TimeZone, Utc};
use fyyur_core::types::{DbId, Timestamp};
use fyyur_db::models::artist::{Artist, CreateArtist};
use fyyur_db::models::show::{CreateShow, Show};
use fyyur_db::models::venue::{CreateVenue, Venue};
use fyyur_db::repositories::{ArtistRepo, ShowRepo, VenueRepo};
use sqlx::PgConnection;

/// Fixed reference point so past/upcoming assertions are deterministic.
pub fn fixed_now() -> Timestamp {
    Utc.with_ymd_and_hms(2026, 6, 15, 20, 0, 0).unwrap()
}

pub fn hours_from_now(hours: i64) -> Timestamp {
    fixed_now() + Duration::hours(hours)
}

pub fn new_venue(name: &str, city: &str, state: &str) -> CreateVenue {
    CreateVenue {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: Some("123-123-1234".to_string()),
        genres: vec!["Jazz".to_string(), "Reggae".to_string()],
        image_link: None,
        facebook_link: None,
        website_link: None,
        seeking_talent: false,
        seeking_description: None,
    }
}

pub fn new_artist(name: &str) -> CreateArtist {
    CreateArtist {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: None,
        genres: vec!["Rock n Roll".to_string()],
        image_link: Some("https://example.com/artist.jpg".to_string()),
        facebook_link: None,
        website_link: None,
        seeking_venues: false,
        seeking_description: None,
    }
}

pub async fn insert_venue(conn: &mut PgConnection, input: CreateVenue) -> Venue {
    VenueRepo::create(conn, &input).await.unwrap()
}

pub async fn insert_artist(conn: &mut PgConnection, name: &str) -> Artist {
    ArtistRepo::create(conn, &new_artist(name)).await.unwrap()
}

pub async fn insert_show(
    conn: &mut PgConnection,
    artist_id: DbId,
    venue_id: DbId,
    start_time: Timestamp,
) -> Show {
    ShowRepo::create(
        conn,
        &CreateShow {
            artist_id,
            venue_id,
            start_time,
        },
    )
    .await
    .unwrap()
}

pub async fn count_rows(conn: &mut PgConnection, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(conn)
        .await
        .unwrap()
}
