use axum::{
    extract::{Path, RawForm, State},
    response::{Html, Redirect},
};
use chrono::Utc;
use sea_orm::{ActiveValue::Set, TransactionTrait};

use crate::{
    db::{
        entities::artist,
        queries::{self, ListingKind, NamedRef, ShowSide, TimeWindow},
        repositories::ArtistRepository,
    },
    error::{AppError, Result},
    forms::{genres_to_json, FormMap, Seeking},
    state::AppState,
    templates::{artist_detail_page, artist_form, artists_page, home_page, search_results_page},
};

/// Artist index: a flat id/name directory listing.
pub async fn artists_index(State(state): State<AppState>) -> Result<Html<String>> {
    let artists = ArtistRepository::find_all(&state.db).await?;
    let refs: Vec<NamedRef> = artists
        .into_iter()
        .map(|a| NamedRef {
            id: a.id,
            name: a.name,
        })
        .collect();
    Ok(Html(artists_page(&refs).into_string()))
}

pub async fn search_artists(
    State(state): State<AppState>,
    RawForm(body): RawForm,
) -> Result<Html<String>> {
    let form = FormMap::parse(&body);
    let term = form.get("search_term").unwrap_or("");
    let results = queries::search_by_name(&state.db, ListingKind::Artist, term).await?;
    Ok(Html(search_results_page(ListingKind::Artist, term, &results).into_string()))
}

pub async fn show_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let artist = ArtistRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("artist {id} does not exist")))?;

    let now = Utc::now().fixed_offset();
    let counts = queries::show_counts(&state.db, ShowSide::Artist, id, now).await?;
    let past =
        queries::shows_in_window(&state.db, ShowSide::Artist, id, now, TimeWindow::Past).await?;
    let upcoming =
        queries::shows_in_window(&state.db, ShowSide::Artist, id, now, TimeWindow::Upcoming).await?;

    let seeking = Seeking::from_column(artist.seeking_venue.as_deref());
    Ok(Html(
        artist_detail_page(&artist, &seeking, counts, &past, &upcoming).into_string(),
    ))
}

pub async fn create_artist_form() -> Html<String> {
    Html(artist_form("/artists/create", None).into_string())
}

pub async fn create_artist_submission(
    State(state): State<AppState>,
    RawForm(body): RawForm,
) -> Result<Html<String>> {
    let form = FormMap::parse(&body);
    let name = form.require("name")?.to_string();

    let txn = state.db.begin().await?;
    ArtistRepository::create(
        &txn,
        artist::ActiveModel {
            name: Set(name.clone()),
            city: Set(form.get("city").map(str::to_string)),
            state: Set(form.get("state").map(str::to_string)),
            phone: Set(form.get("phone").map(str::to_string)),
            genres: Set(Some(genres_to_json(&form.get_all("genres")))),
            image_link: Set(form.get("image_link").map(str::to_string)),
            facebook_link: Set(form.get("facebook_link").map(str::to_string)),
            website_link: Set(form.get("website_link").map(str::to_string)),
            seeking_venue: Set(Seeking::from_form(form.get("seeking_venue")).into_column()),
            seeking_description: Set(form.get("seeking_description").map(str::to_string)),
            added: Set(Utc::now().fixed_offset()),
            ..Default::default()
        },
    )
    .await?;
    txn.commit().await?;

    tracing::info!("Artist {:?} listed", name);
    let feed = queries::recent_listings(&state.db).await?;
    let notice = format!("Artist {name} was successfully listed!");
    Ok(Html(home_page(&feed, Some(&notice)).into_string()))
}

pub async fn edit_artist_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let artist = ArtistRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("artist {id} does not exist")))?;
    Ok(Html(artist_form(&format!("/artists/{id}/edit"), Some(&artist)).into_string()))
}

pub async fn edit_artist_submission(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    RawForm(body): RawForm,
) -> Result<Redirect> {
    let form = FormMap::parse(&body);

    let txn = state.db.begin().await?;
    let artist = ArtistRepository::find_by_id(&txn, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("artist {id} does not exist")))?;

    let mut active: artist::ActiveModel = artist.into();
    if let Some(name) = form.get("name") {
        active.name = Set(name.to_string());
    }
    active.city = Set(form.get("city").map(str::to_string));
    active.state = Set(form.get("state").map(str::to_string));
    active.phone = Set(form.get("phone").map(str::to_string));
    active.genres = Set(Some(genres_to_json(&form.get_all("genres"))));
    active.image_link = Set(form.get("image_link").map(str::to_string));
    active.facebook_link = Set(form.get("facebook_link").map(str::to_string));
    active.website_link = Set(form.get("website_link").map(str::to_string));
    active.seeking_venue = Set(Seeking::from_form(form.get("seeking_venue")).into_column());
    active.seeking_description = Set(form.get("seeking_description").map(str::to_string));

    ArtistRepository::update(&txn, active).await?;
    txn.commit().await?;

    Ok(Redirect::to(&format!("/artists/{id}")))
}

pub async fn delete_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect> {
    let txn = state.db.begin().await?;
    ArtistRepository::delete(&txn, id).await?;
    txn.commit().await?;

    tracing::info!("Artist {} deleted", id);
    Ok(Redirect::to("/artists"))
}
