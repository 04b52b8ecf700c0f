//! Integration tests for the artist repository.

mod common;

use common::*;
use fyyur_core::search::SearchResults;
use fyyur_db::repositories::ArtistRepo;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_artist(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let created = insert_artist(&mut conn, "Guns N Petals").await;

    let found = ArtistRepo::find_by_id(&mut conn, created.id)
        .await
        .unwrap()
        .expect("artist should exist");
    assert_eq!(found.name, "Guns N Petals");
    assert_eq!(found.genres, vec!["Rock n Roll"]);
    assert!(!found.seeking_venues);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_then_get_returns_updated_fields(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let artist = insert_artist(&mut conn, "Matt Quevedo").await;

    let mut edit = new_artist("The Wild Sax Band");
    edit.genres = vec!["Jazz".to_string(), "Classical".to_string()];
    edit.seeking_venues = true;
    edit.image_link = None;

    ArtistRepo::update(&mut conn, artist.id, &edit)
        .await
        .unwrap()
        .expect("artist should exist");

    let fetched = ArtistRepo::find_by_id(&mut conn, artist.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.name, "The Wild Sax Band");
    assert_eq!(fetched.genres, vec!["Jazz", "Classical"]);
    assert!(fetched.seeking_venues);
    assert!(fetched.image_link.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_artist_returns_none(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let result = ArtistRepo::update(&mut conn, 424_242, &new_artist("Nobody"))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_orders_by_name_with_upcoming_counts(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let venue = insert_venue(&mut conn, new_venue("Hop", "San Francisco", "CA")).await;
    let wild = insert_artist(&mut conn, "The Wild Sax Band").await;
    let guns = insert_artist(&mut conn, "Guns N Petals").await;

    insert_show(&mut conn, wild.id, venue.id, hours_from_now(2)).await;
    insert_show(&mut conn, wild.id, venue.id, hours_from_now(-2)).await;

    let artists = ArtistRepo::list_by_name(&mut conn, fixed_now()).await.unwrap();
    let names: Vec<&str> = artists.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Guns N Petals", "The Wild Sax Band"]);
    assert_eq!(artists[0].id, guns.id);
    assert_eq!(artists[0].num_upcoming_shows, 0);
    assert_eq!(artists[1].num_upcoming_shows, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_by_name_and_genre(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let guns = insert_artist(&mut conn, "Guns N Petals").await;
    let sax = insert_artist(&mut conn, "The Wild Sax Band").await;

    let mut jazz = new_artist("Matt Quevedo");
    jazz.genres = vec!["Band".to_string()];
    let matt = ArtistRepo::create(&mut conn, &jazz).await.unwrap();

    let by_name = ArtistRepo::search_by_name(&mut conn, "band", fixed_now())
        .await
        .unwrap();
    let by_genre = ArtistRepo::search_by_genre(&mut conn, "band", fixed_now())
        .await
        .unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].id, sax.id);
    // Genre matching is exact, so "band" does not match "Band".
    assert!(by_genre.is_empty());

    let by_genre = ArtistRepo::search_by_genre(&mut conn, "Band", fixed_now())
        .await
        .unwrap();
    let results = SearchResults::merge(by_name, by_genre, |a| a.id);
    let ids: Vec<i64> = results.data.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![sax.id, matt.id]);
    assert!(!ids.contains(&guns.id));
}
