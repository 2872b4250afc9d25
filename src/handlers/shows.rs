use axum::{
    extract::{RawForm, State},
    response::Html,
};
use sea_orm::{ActiveValue::Set, TransactionTrait};

use crate::{
    db::{entities::show, queries, repositories::ShowRepository},
    error::{AppError, Result},
    forms::{parse_start_time, FormMap},
    state::AppState,
    templates::{home_page, show_form, shows_page},
};

/// Shows overview: every show with its artist and venue, one joined query.
pub async fn shows_index(State(state): State<AppState>) -> Result<Html<String>> {
    let shows = queries::shows_overview(&state.db).await?;
    Ok(Html(shows_page(&shows).into_string()))
}

pub async fn create_show_form() -> Html<String> {
    Html(show_form().into_string())
}

/// Create a show. A malformed start_time or a dangling artist/venue id fails
/// before or inside the transaction, so no partial insert can remain. On
/// success the home page is re-rendered with a recomputed feed.
pub async fn create_show_submission(
    State(state): State<AppState>,
    RawForm(body): RawForm,
) -> Result<Html<String>> {
    let form = FormMap::parse(&body);

    let artist_id: i32 = form
        .require("artist_id")?
        .trim()
        .parse()
        .map_err(|_| AppError::Parse("artist_id must be a number".to_string()))?;
    let venue_id: i32 = form
        .require("venue_id")?
        .trim()
        .parse()
        .map_err(|_| AppError::Parse("venue_id must be a number".to_string()))?;
    let start_time = parse_start_time(form.require("start_time")?)?;

    let txn = state.db.begin().await?;
    ShowRepository::create(
        &txn,
        show::ActiveModel {
            artist_id: Set(artist_id),
            venue_id: Set(venue_id),
            start_time: Set(start_time),
            ..Default::default()
        },
    )
    .await?;
    txn.commit().await?;

    tracing::info!("Show listed: artist {} at venue {}", artist_id, venue_id);
    let feed = queries::recent_listings(&state.db).await?;
    Ok(Html(home_page(&feed, Some("Show was successfully listed!")).into_string()))
}
