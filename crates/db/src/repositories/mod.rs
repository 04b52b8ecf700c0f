//! Repository layer: one unit struct per table.
//!
//! Every function takes an explicit `&mut PgConnection`, which may be a
//! pooled connection or an open transaction (see [`crate::session`]).

pub mod artist_repo;
pub mod show_repo;
pub mod venue_repo;

pub use artist_repo::ArtistRepo;
pub use show_repo::ShowRepo;
pub use venue_repo::VenueRepo;
