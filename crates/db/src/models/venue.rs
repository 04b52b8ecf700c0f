//! Venue entity model, DTOs, and page view models.

use fyyur_core::genres::normalize_genres;
use fyyur_core::listing::group_by_location;
use fyyur_core::schedule::partition_shows;
use fyyur_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::show::VenueShow;
use crate::models::{trim_in_place, trim_optional};

/// A venue row from the `venues` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Venue {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    /// NOT NULL in the database; may be empty.
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a venue. Also used for full-record updates.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVenue {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 120, message = "city must be 1-120 characters"))]
    pub city: String,
    #[validate(length(min = 1, max = 120, message = "state must be 1-120 characters"))]
    pub state: String,
    #[validate(length(min = 1, max = 120, message = "address must be 1-120 characters"))]
    pub address: String,
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
    pub seeking_talent: bool,
    #[validate(length(max = 200))]
    pub seeking_description: Option<String>,
}

/// Updates replace every column, so they take the same shape as a create.
pub type UpdateVenue = CreateVenue;

impl CreateVenue {
    /// Trim text fields, blank optionals to `None`, and clean up genres.
    ///
    /// Run before [`Validate::validate`] so whitespace-only input is
    /// rejected as missing.
    pub fn normalized(mut self) -> Self {
        trim_in_place(&mut self.name);
        trim_in_place(&mut self.city);
        trim_in_place(&mut self.state);
        trim_in_place(&mut self.address);
        self.phone = trim_optional(self.phone);
        self.genres = normalize_genres(&self.genres);
        self.image_link = trim_optional(self.image_link);
        self.facebook_link = trim_optional(self.facebook_link);
        self.website_link = trim_optional(self.website_link);
        self.seeking_description = trim_optional(self.seeking_description);
        self
    }
}

/// One venue line on the index or search page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VenueSummary {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Venue summary plus its location, as read for the grouped index.
#[derive(Debug, Clone, FromRow)]
pub struct VenueListingRow {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub num_upcoming_shows: i64,
}

/// All venues sharing one `(state, city)` on the index page.
#[derive(Debug, Clone, Serialize)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

impl VenueArea {
    /// Group rows already ordered by `(state, city)` into areas.
    pub fn group(rows: Vec<VenueListingRow>) -> Vec<VenueArea> {
        group_by_location(rows, |r| (r.city.as_str(), r.state.as_str()))
            .into_iter()
            .map(|group| VenueArea {
                city: group.city,
                state: group.state,
                venues: group
                    .items
                    .into_iter()
                    .map(|r| VenueSummary {
                        id: r.id,
                        name: r.name,
                        num_upcoming_shows: r.num_upcoming_shows,
                    })
                    .collect(),
            })
            .collect()
    }
}

/// Venue detail page: the venue plus its shows split around "now".
#[derive(Debug, Clone, Serialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl VenueDetail {
    pub fn assemble(venue: Venue, shows: Vec<VenueShow>, now: Timestamp) -> Self {
        let split = partition_shows(shows, now, |s| s.start_time);
        Self {
            venue,
            past_shows_count: split.past.len(),
            upcoming_shows_count: split.upcoming.len(),
            past_shows: split.past,
            upcoming_shows: split.upcoming,
        }
    }
}
