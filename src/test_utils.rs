//! Test utilities for Showbill
//!
//! Provides helpers for creating isolated test environments with:
//! - In-memory SQLite databases (one per test)
//! - AppState factories
//! - Test data generators

use chrono::{TimeZone, Utc};
use migration::MigratorTrait;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};

use crate::{
    config::Config,
    db::entities::{artist, show, venue},
    state::AppState,
};

/// Setup an in-memory SQLite database with all migrations applied
///
/// Each call creates a fresh, isolated database perfect for parallel testing
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    // Run all migrations
    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create a test configuration with sensible defaults
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 3000,
    }
}

/// Create a complete test AppState with an isolated database
pub async fn setup_test_app_state() -> AppState {
    let db = setup_test_db().await;
    AppState::new(db, test_config())
}

/// Fixed reference instant for time-relative assertions
pub fn test_now() -> DateTimeWithTimeZone {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
        .unwrap()
        .fixed_offset()
}

/// Offset from `test_now` in whole hours, for past/upcoming fixtures
pub fn hours_from_now(hours: i64) -> DateTimeWithTimeZone {
    (test_now().to_utc() + chrono::Duration::hours(hours)).fixed_offset()
}

pub async fn create_test_venue(
    db: &DatabaseConnection,
    name: &str,
    city: &str,
    state: &str,
    added: DateTimeWithTimeZone,
) -> venue::Model {
    venue::ActiveModel {
        name: Set(name.to_string()),
        city: Set(Some(city.to_string())),
        state: Set(Some(state.to_string())),
        address: Set(Some("123 Main St".to_string())),
        phone: Set(Some("555-0100".to_string())),
        genres: Set(Some(serde_json::json!(["Jazz", "Folk"]))),
        image_link: Set(None),
        facebook_link: Set(None),
        website_link: Set(None),
        seeking_talent: Set(None),
        seeking_description: Set(None),
        added: Set(added),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert test venue")
}

pub async fn create_test_artist(
    db: &DatabaseConnection,
    name: &str,
    added: DateTimeWithTimeZone,
) -> artist::Model {
    artist::ActiveModel {
        name: Set(name.to_string()),
        city: Set(Some("San Francisco".to_string())),
        state: Set(Some("CA".to_string())),
        phone: Set(Some("555-0101".to_string())),
        genres: Set(Some(serde_json::json!(["Rock n Roll"]))),
        image_link: Set(Some("https://example.com/artist.jpg".to_string())),
        facebook_link: Set(None),
        website_link: Set(None),
        seeking_venue: Set(None),
        seeking_description: Set(None),
        added: Set(added),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert test artist")
}

pub async fn create_test_show(
    db: &DatabaseConnection,
    artist_id: i32,
    venue_id: i32,
    start_time: DateTimeWithTimeZone,
) -> show::Model {
    show::ActiveModel {
        artist_id: Set(artist_id),
        venue_id: Set(venue_id),
        start_time: Set(start_time),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert test show")
}
