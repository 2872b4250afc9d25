use axum::{extract::State, response::Html};

use crate::{db::queries, error::Result, state::AppState, templates::home_page};

/// Home page: the recently-added feed, freshly computed on every request.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let feed = queries::recent_listings(&state.db).await?;
    Ok(Html(home_page(&feed, None).into_string()))
}
