//! Entity store integration tests
//!
//! Tests CRUD operations for all entities to ensure:
//! - Entities can be created with all required fields
//! - Foreign key constraints and cascade deletes work correctly
//! - Updates touch only the submitted fields
//! - Missing targets surface as NotFound

use pretty_assertions::assert_eq;
use sea_orm::{ActiveValue::Set, EntityTrait, PaginatorTrait};

use showbill::db::entities::{artist, show, venue};
use showbill::db::repositories::{ArtistRepository, ShowRepository, VenueRepository};
use showbill::error::AppError;
use showbill::test_utils::*;

#[tokio::test]
async fn test_create_venue() {
    let db = setup_test_db().await;

    let venue = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA", test_now()).await;

    assert_eq!(venue.name, "The Musical Hop");
    assert_eq!(venue.city.as_deref(), Some("San Francisco"));
    assert_eq!(venue.genre_list(), vec!["Jazz", "Folk"]);
    assert!(venue.id > 0);
    assert_eq!(venue.added, test_now());
}

#[tokio::test]
async fn test_create_artist() {
    let db = setup_test_db().await;

    let artist = create_test_artist(&db, "Guns N Petals", test_now()).await;

    assert_eq!(artist.name, "Guns N Petals");
    assert_eq!(artist.genre_list(), vec!["Rock n Roll"]);
    assert!(artist.id > 0);
}

#[tokio::test]
async fn test_create_show_links_artist_and_venue() {
    let db = setup_test_db().await;

    let venue = create_test_venue(&db, "The Dueling Pianos Bar", "New York", "NY", test_now()).await;
    let artist = create_test_artist(&db, "Matt Quevedo", test_now()).await;
    let show = create_test_show(&db, artist.id, venue.id, hours_from_now(48)).await;

    assert_eq!(show.artist_id, artist.id);
    assert_eq!(show.venue_id, venue.id);
    assert_eq!(show.start_time, hours_from_now(48));
}

#[tokio::test]
async fn test_show_requires_existing_artist_and_venue() {
    let db = setup_test_db().await;

    let venue = create_test_venue(&db, "Park Square Live Music & Coffee", "SF", "CA", test_now()).await;

    let before = show::Entity::find().count(&db).await.unwrap();

    // Dangling artist id
    let result = ShowRepository::create(
        &db,
        show::ActiveModel {
            artist_id: Set(99999),
            venue_id: Set(venue.id),
            start_time: Set(hours_from_now(24)),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(result, Err(AppError::ConstraintViolation(_))));

    // Dangling venue id
    let artist = create_test_artist(&db, "The Wild Sax Band", test_now()).await;
    let result = ShowRepository::create(
        &db,
        show::ActiveModel {
            artist_id: Set(artist.id),
            venue_id: Set(99999),
            start_time: Set(hours_from_now(24)),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(result, Err(AppError::ConstraintViolation(_))));

    // Row count unchanged: the failed inserts left nothing behind
    let after = show::Entity::find().count(&db).await.unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_delete_venue_cascades_to_its_shows_only() {
    let db = setup_test_db().await;

    let keep = create_test_venue(&db, "Kept Venue", "SF", "CA", test_now()).await;
    let doomed = create_test_venue(&db, "Doomed Venue", "NY", "NY", test_now()).await;
    let artist = create_test_artist(&db, "Shared Artist", test_now()).await;

    create_test_show(&db, artist.id, doomed.id, hours_from_now(1)).await;
    create_test_show(&db, artist.id, doomed.id, hours_from_now(2)).await;
    let surviving = create_test_show(&db, artist.id, keep.id, hours_from_now(3)).await;

    VenueRepository::delete(&db, doomed.id).await.unwrap();

    assert!(venue::Entity::find_by_id(doomed.id).one(&db).await.unwrap().is_none());

    let remaining = show::Entity::find().all(&db).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, surviving.id);
    assert_eq!(remaining[0].venue_id, keep.id);
}

#[tokio::test]
async fn test_delete_artist_cascades_to_its_shows_only() {
    let db = setup_test_db().await;

    let venue = create_test_venue(&db, "Some Venue", "SF", "CA", test_now()).await;
    let doomed = create_test_artist(&db, "Doomed Artist", test_now()).await;
    let kept = create_test_artist(&db, "Kept Artist", test_now()).await;

    create_test_show(&db, doomed.id, venue.id, hours_from_now(1)).await;
    let surviving = create_test_show(&db, kept.id, venue.id, hours_from_now(2)).await;

    ArtistRepository::delete(&db, doomed.id).await.unwrap();

    assert!(artist::Entity::find_by_id(doomed.id).one(&db).await.unwrap().is_none());

    let remaining = show::Entity::find().all(&db).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, surviving.id);
}

#[tokio::test]
async fn test_update_artist_name_keeps_other_fields() {
    let db = setup_test_db().await;

    let artist = create_test_artist(&db, "Old Name", test_now()).await;
    let original = artist.clone();

    let mut active: artist::ActiveModel = artist.into();
    active.name = Set("New Name".to_string());
    let updated = ArtistRepository::update(&db, active).await.unwrap();

    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.city, original.city);
    assert_eq!(updated.phone, original.phone);
    assert_eq!(updated.genres, original.genres);
    assert_eq!(updated.image_link, original.image_link);
    assert_eq!(updated.added, original.added);
}

#[tokio::test]
async fn test_delete_missing_venue_is_not_found() {
    let db = setup_test_db().await;

    let result = VenueRepository::delete(&db, 42).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_update_missing_venue_is_not_found() {
    let db = setup_test_db().await;

    let active = venue::ActiveModel {
        id: Set(42),
        name: Set("Ghost Venue".to_string()),
        ..Default::default()
    };
    let result = VenueRepository::update(&db, active).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_find_all_orders_by_id() {
    let db = setup_test_db().await;

    create_test_venue(&db, "First", "SF", "CA", test_now()).await;
    create_test_venue(&db, "Second", "NY", "NY", test_now()).await;

    let venues = VenueRepository::find_all(&db).await.unwrap();
    assert_eq!(venues.len(), 2);
    assert!(venues[0].id < venues[1].id);
}
