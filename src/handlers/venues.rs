use axum::{
    extract::{Path, RawForm, State},
    response::{Html, Redirect},
};
use chrono::Utc;
use sea_orm::{ActiveValue::Set, TransactionTrait};

use crate::{
    db::{
        entities::venue,
        queries::{self, ListingKind, ShowSide, TimeWindow},
        repositories::VenueRepository,
    },
    error::{AppError, Result},
    forms::{genres_to_json, FormMap, Seeking},
    state::AppState,
    templates::{home_page, search_results_page, venue_detail_page, venue_form, venues_page},
};

/// Venue directory grouped by (city, state).
pub async fn venues_index(State(state): State<AppState>) -> Result<Html<String>> {
    let now = Utc::now().fixed_offset();
    let groups = queries::venues_by_location(&state.db, now).await?;
    Ok(Html(venues_page(&groups).into_string()))
}

pub async fn search_venues(
    State(state): State<AppState>,
    RawForm(body): RawForm,
) -> Result<Html<String>> {
    let form = FormMap::parse(&body);
    let term = form.get("search_term").unwrap_or("");
    let results = queries::search_by_name(&state.db, ListingKind::Venue, term).await?;
    Ok(Html(search_results_page(ListingKind::Venue, term, &results).into_string()))
}

pub async fn show_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let venue = VenueRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("venue {id} does not exist")))?;

    let now = Utc::now().fixed_offset();
    let counts = queries::show_counts(&state.db, ShowSide::Venue, id, now).await?;
    let past = queries::shows_in_window(&state.db, ShowSide::Venue, id, now, TimeWindow::Past).await?;
    let upcoming =
        queries::shows_in_window(&state.db, ShowSide::Venue, id, now, TimeWindow::Upcoming).await?;

    let seeking = Seeking::from_column(venue.seeking_talent.as_deref());
    Ok(Html(
        venue_detail_page(&venue, &seeking, counts, &past, &upcoming).into_string(),
    ))
}

pub async fn create_venue_form() -> Html<String> {
    Html(venue_form("/venues/create", None).into_string())
}

/// Create a venue from the submitted field map, then re-render home with a
/// freshly computed feed. The whole insert runs in one transaction.
pub async fn create_venue_submission(
    State(state): State<AppState>,
    RawForm(body): RawForm,
) -> Result<Html<String>> {
    let form = FormMap::parse(&body);
    let name = form.require("name")?.to_string();

    let txn = state.db.begin().await?;
    VenueRepository::create(
        &txn,
        venue::ActiveModel {
            name: Set(name.clone()),
            city: Set(form.get("city").map(str::to_string)),
            state: Set(form.get("state").map(str::to_string)),
            address: Set(form.get("address").map(str::to_string)),
            phone: Set(form.get("phone").map(str::to_string)),
            genres: Set(Some(genres_to_json(&form.get_all("genres")))),
            image_link: Set(form.get("image_link").map(str::to_string)),
            facebook_link: Set(form.get("facebook_link").map(str::to_string)),
            website_link: Set(form.get("website_link").map(str::to_string)),
            seeking_talent: Set(Seeking::from_form(form.get("seeking_talent")).into_column()),
            seeking_description: Set(form.get("seeking_description").map(str::to_string)),
            added: Set(Utc::now().fixed_offset()),
            ..Default::default()
        },
    )
    .await?;
    txn.commit().await?;

    tracing::info!("Venue {:?} listed", name);
    let feed = queries::recent_listings(&state.db).await?;
    let notice = format!("Venue {name} was successfully listed!");
    Ok(Html(home_page(&feed, Some(&notice)).into_string()))
}

pub async fn edit_venue_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let venue = VenueRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("venue {id} does not exist")))?;
    Ok(Html(venue_form(&format!("/venues/{id}/edit"), Some(&venue)).into_string()))
}

/// Field-level update; every submitted field overwrites the stored value,
/// untouched columns are left alone. Commits or rolls back as a unit.
pub async fn edit_venue_submission(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    RawForm(body): RawForm,
) -> Result<Redirect> {
    let form = FormMap::parse(&body);

    let txn = state.db.begin().await?;
    let venue = VenueRepository::find_by_id(&txn, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("venue {id} does not exist")))?;

    let mut active: venue::ActiveModel = venue.into();
    if let Some(name) = form.get("name") {
        active.name = Set(name.to_string());
    }
    active.city = Set(form.get("city").map(str::to_string));
    active.state = Set(form.get("state").map(str::to_string));
    active.address = Set(form.get("address").map(str::to_string));
    active.phone = Set(form.get("phone").map(str::to_string));
    active.genres = Set(Some(genres_to_json(&form.get_all("genres"))));
    active.image_link = Set(form.get("image_link").map(str::to_string));
    active.facebook_link = Set(form.get("facebook_link").map(str::to_string));
    active.website_link = Set(form.get("website_link").map(str::to_string));
    active.seeking_talent = Set(Seeking::from_form(form.get("seeking_talent")).into_column());
    active.seeking_description = Set(form.get("seeking_description").map(str::to_string));

    VenueRepository::update(&txn, active).await?;
    txn.commit().await?;

    Ok(Redirect::to(&format!("/venues/{id}")))
}

/// Deletes the venue and all of its shows in one transaction; the cascade is
/// enforced by the store's foreign keys, not application fan-out.
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect> {
    let txn = state.db.begin().await?;
    VenueRepository::delete(&txn, id).await?;
    txn.commit().await?;

    tracing::info!("Venue {} deleted", id);
    Ok(Redirect::to("/venues"))
}
