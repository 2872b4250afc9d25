//! Handler integration tests
//!
//! Drives the real router with oneshot requests to cover the page endpoints,
//! the form submissions, and the error paths end to end.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use pretty_assertions::assert_eq;
use sea_orm::{EntityTrait, PaginatorTrait};
use tower::util::ServiceExt;

use showbill::db::entities::{artist, show, venue};
use showbill::handlers;
use showbill::state::AppState;
use showbill::test_utils::*;

fn create_test_router(state: &AppState) -> Router {
    handlers::routes().with_state(state.clone())
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_home_page_renders_empty_feed() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Recently Listed"));
}

#[tokio::test]
async fn test_health_check() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_venue_submission_persists_and_renders_home() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let body = "name=The+Musical+Hop&city=San+Francisco&state=CA&address=1015+Folsom+Street\
&phone=123-123-1234&genres=Jazz&genres=Folk&facebook_link=&image_link=&website_link=\
&seeking_talent=y&seeking_description=Looking+for+local+acts";
    let response = app
        .oneshot(form_post("/venues/create", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("The Musical Hop was successfully listed!"));

    let venues = venue::Entity::find().all(&state.db).await.unwrap();
    assert_eq!(venues.len(), 1);
    let saved = &venues[0];
    assert_eq!(saved.name, "The Musical Hop");
    assert_eq!(saved.genre_list(), vec!["Jazz", "Folk"]);
    // The "y" checkbox value is the only input that normalizes to true
    assert_eq!(saved.seeking_talent.as_deref(), Some("true"));
}

#[tokio::test]
async fn test_create_venue_keeps_raw_seeking_string() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let body = "name=Odd+Venue&city=SF&state=CA&seeking_talent=sure";
    let response = app
        .oneshot(form_post("/venues/create", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let saved = venue::Entity::find().one(&state.db).await.unwrap().unwrap();
    assert_eq!(saved.seeking_talent.as_deref(), Some("sure"));
}

#[tokio::test]
async fn test_create_artist_submission_persists() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let body = "name=Guns+N+Petals&city=San+Francisco&state=CA&phone=326-123-5000\
&genres=Rock+n+Roll&seeking_description=";
    let response = app
        .oneshot(form_post("/artists/create", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let artists = artist::Entity::find().all(&state.db).await.unwrap();
    assert_eq!(artists.len(), 1);
    assert_eq!(artists[0].name, "Guns N Petals");
    // Checkbox absent: the flag stays absent, not false
    assert_eq!(artists[0].seeking_venue, None);
}

#[tokio::test]
async fn test_venue_search_returns_matches() {
    let state = setup_test_app_state().await;
    create_test_venue(&state.db, "The Musical Hop", "SF", "CA", test_now()).await;
    create_test_venue(&state.db, "Park Square Live Music & Coffee", "SF", "CA", test_now()).await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_post("/venues/search", "search_term=hop"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("1 result(s)"));
    assert!(html.contains("The Musical Hop"));
    assert!(!html.contains("Park Square"));
}

#[tokio::test]
async fn test_venue_detail_shows_counts_and_counterparts() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "SF", "CA", test_now()).await;
    let artist = create_test_artist(&state.db, "Guns N Petals", test_now()).await;
    create_test_show(&state.db, artist.id, venue.id, hours_from_now(100_000)).await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/venues/{}", venue.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("The Musical Hop"));
    assert!(html.contains("Guns N Petals"));
}

#[tokio::test]
async fn test_missing_venue_renders_404_page() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(Request::builder().uri("/venues/42").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = body_string(response).await;
    assert!(html.contains("404"));
}

#[tokio::test]
async fn test_edit_venue_updates_and_redirects() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "Old Name", "SF", "CA", test_now()).await;
    let app = create_test_router(&state);

    let body = "name=New+Name&city=SF&state=CA&address=123+Main+St&phone=555-0100\
&genres=Jazz&genres=Folk";
    let response = app
        .oneshot(form_post(&format!("/venues/{}/edit", venue.id), body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let saved = venue::Entity::find_by_id(venue.id)
        .one(&state.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(saved.name, "New Name");
    assert_eq!(saved.city.as_deref(), Some("SF"));
    // Creation timestamp is never rewritten on update
    assert_eq!(saved.added, test_now());
}

#[tokio::test]
async fn test_delete_venue_removes_row_and_redirects() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "Doomed", "SF", "CA", test_now()).await;
    let artist = create_test_artist(&state.db, "Someone", test_now()).await;
    create_test_show(&state.db, artist.id, venue.id, hours_from_now(5)).await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(format!("/venues/{}", venue.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(venue::Entity::find_by_id(venue.id).one(&state.db).await.unwrap().is_none());
    assert_eq!(show::Entity::find().count(&state.db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_show_with_bad_start_time_inserts_nothing() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "Venue", "SF", "CA", test_now()).await;
    let artist = create_test_artist(&state.db, "Artist", test_now()).await;
    let app = create_test_router(&state);

    let body = format!(
        "artist_id={}&venue_id={}&start_time=not-a-date",
        artist.id, venue.id
    );
    let response = app.oneshot(form_post("/shows/create", &body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(show::Entity::find().count(&state.db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_show_with_dangling_reference_fails() {
    let state = setup_test_app_state().await;
    create_test_venue(&state.db, "Venue", "SF", "CA", test_now()).await;
    let app = create_test_router(&state);

    let body = "artist_id=999&venue_id=1&start_time=2024-06-15 20:00:00";
    let response = app.oneshot(form_post("/shows/create", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(show::Entity::find().count(&state.db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_show_success_rerenders_home_feed() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "Venue", "SF", "CA", test_now()).await;
    let artist = create_test_artist(&state.db, "Artist", test_now()).await;
    let app = create_test_router(&state);

    let body = format!(
        "artist_id={}&venue_id={}&start_time=2030-06-15+20%3A00%3A00",
        artist.id, venue.id
    );
    let response = app.oneshot(form_post("/shows/create", &body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Show was successfully listed!"));
    // The feed is recomputed: both existing listings render on the page
    assert!(html.contains("Venue"));
    assert!(html.contains("Artist"));

    assert_eq!(show::Entity::find().count(&state.db).await.unwrap(), 1);
}

#[tokio::test]
async fn test_shows_page_lists_joined_details() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "SF", "CA", test_now()).await;
    let artist = create_test_artist(&state.db, "Guns N Petals", test_now()).await;
    create_test_show(&state.db, artist.id, venue.id, hours_from_now(10)).await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(Request::builder().uri("/shows").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Guns N Petals"));
    assert!(html.contains("The Musical Hop"));
}

#[tokio::test]
async fn test_venues_page_groups_by_location() {
    let state = setup_test_app_state().await;
    create_test_venue(&state.db, "SF One", "SF", "CA", test_now()).await;
    create_test_venue(&state.db, "SF Two", "SF", "CA", test_now()).await;
    create_test_venue(&state.db, "NY One", "NY", "NY", test_now()).await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(Request::builder().uri("/venues").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("SF, CA"));
    assert!(html.contains("NY, NY"));
    assert!(html.contains("SF One"));
    assert!(html.contains("SF Two"));
}
