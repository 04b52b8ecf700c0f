//! Artist entity model, DTOs, and page view models.

use fyyur_core::genres::normalize_genres;
use fyyur_core::schedule::partition_shows;
use fyyur_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::show::ArtistShow;
use crate::models::{trim_in_place, trim_optional};

/// An artist row from the `artists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artist {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    /// NOT NULL in the database; may be empty.
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venues: bool,
    pub seeking_description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an artist. Also used for full-record updates.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateArtist {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 120, message = "city must be 1-120 characters"))]
    pub city: String,
    #[validate(length(min = 1, max = 120, message = "state must be 1-120 characters"))]
    pub state: String,
    #[validate(length(max = 120))]
    pub phone: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[validate(length(max = 500), url)]
    pub image_link: Option<String>,
    #[validate(length(max = 120), url)]
    pub facebook_link: Option<String>,
    #[validate(length(max = 120), url)]
    pub website_link: Option<String>,
    #[serde(default)]
    pub seeking_venues: bool,
    #[validate(length(max = 200))]
    pub seeking_description: Option<String>,
}

/// Updates replace every column, so they take the same shape as a create.
pub type UpdateArtist = CreateArtist;

impl CreateArtist {
    /// Trim text fields, blank optionals to `None`, and clean up genres.
    pub fn normalized(mut self) -> Self {
        trim_in_place(&mut self.name);
        trim_in_place(&mut self.city);
        trim_in_place(&mut self.state);
        self.phone = trim_optional(self.phone);
        self.genres = normalize_genres(&self.genres);
        self.image_link = trim_optional(self.image_link);
        self.facebook_link = trim_optional(self.facebook_link);
        self.website_link = trim_optional(self.website_link);
        self.seeking_description = trim_optional(self.seeking_description);
        self
    }
}

/// One artist line on the index or search page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtistSummary {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Artist detail page: the artist plus their shows split around "now".
#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl ArtistDetail {
    pub fn assemble(artist: Artist, shows: Vec<ArtistShow>, now: Timestamp) -> Self {
        let split = partition_shows(shows, now, |s| s.start_time);
        Self {
            artist,
            past_shows_count: split.past.len(),
            upcoming_shows_count: split.upcoming.len(),
            past_shows: split.past,
            upcoming_shows: split.upcoming,
        }
    }
}
