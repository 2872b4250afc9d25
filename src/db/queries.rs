//! Aggregation queries and search over the entity store.
//!
//! Everything here is a pure read: no query mutates state, and "upcoming"
//! versus "past" is always derived from a caller-supplied `now`, never
//! stored. A show starting at exactly `now` counts in neither bucket.

use std::collections::BTreeMap;

use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use sea_orm::prelude::DateTimeWithTimeZone;

use crate::db::entities::{artist, show, venue};
use crate::error::Result;

/// Which side of a show an aggregate is anchored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowSide {
    Venue,
    Artist,
}

impl ShowSide {
    fn fk_column(self) -> show::Column {
        match self {
            Self::Venue => show::Column::VenueId,
            Self::Artist => show::Column::ArtistId,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    Past,
    Upcoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShowCounts {
    pub past: u64,
    pub upcoming: u64,
}

/// Counts of an entity's shows strictly before and strictly after `now`.
pub async fn show_counts<C: ConnectionTrait>(
    conn: &C,
    side: ShowSide,
    id: i32,
    now: DateTimeWithTimeZone,
) -> Result<ShowCounts> {
    let past = show::Entity::find()
        .filter(side.fk_column().eq(id))
        .filter(show::Column::StartTime.lt(now))
        .count(conn)
        .await?;
    let upcoming = show::Entity::find()
        .filter(side.fk_column().eq(id))
        .filter(show::Column::StartTime.gt(now))
        .count(conn)
        .await?;
    Ok(ShowCounts { past, upcoming })
}

/// One row of a detail page's show list: the show joined against the entity
/// on the opposite side (artist details for a venue's shows and vice versa).
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct ShowDetail {
    pub counterpart_id: i32,
    pub counterpart_name: String,
    pub counterpart_image_link: Option<String>,
    pub start_time: DateTimeWithTimeZone,
}

/// Shows for one entity on one side of `now`, ordered by start time.
pub async fn shows_in_window<C: ConnectionTrait>(
    conn: &C,
    side: ShowSide,
    id: i32,
    now: DateTimeWithTimeZone,
    window: TimeWindow,
) -> Result<Vec<ShowDetail>> {
    let time_filter = match window {
        TimeWindow::Past => show::Column::StartTime.lt(now),
        TimeWindow::Upcoming => show::Column::StartTime.gt(now),
    };

    let select = show::Entity::find()
        .filter(side.fk_column().eq(id))
        .filter(time_filter)
        .select_only()
        .column(show::Column::StartTime)
        .order_by_asc(show::Column::StartTime);

    let select = match side {
        ShowSide::Venue => select
            .join(JoinType::InnerJoin, show::Relation::Artist.def())
            .column_as(artist::Column::Id, "counterpart_id")
            .column_as(artist::Column::Name, "counterpart_name")
            .column_as(artist::Column::ImageLink, "counterpart_image_link"),
        ShowSide::Artist => select
            .join(JoinType::InnerJoin, show::Relation::Venue.def())
            .column_as(venue::Column::Id, "counterpart_id")
            .column_as(venue::Column::Name, "counterpart_name")
            .column_as(venue::Column::ImageLink, "counterpart_image_link"),
    };

    Ok(select.into_model::<ShowDetail>().all(conn).await?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    Venue,
    Artist,
}

impl ListingKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Venue => "venue",
            Self::Artist => "artist",
        }
    }
}

/// One entry of the recently-added feed.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: i32,
    pub name: String,
    pub added: DateTimeWithTimeZone,
    pub kind: ListingKind,
}

/// Venues and artists merged into a single feed, ascending by `added`. The
/// two streams are concatenated and globally sorted, so kinds interleave by
/// creation time.
pub async fn recent_listings<C: ConnectionTrait>(conn: &C) -> Result<Vec<Listing>> {
    let venues: Vec<(i32, String, DateTimeWithTimeZone)> = venue::Entity::find()
        .select_only()
        .column(venue::Column::Id)
        .column(venue::Column::Name)
        .column(venue::Column::Added)
        .into_tuple()
        .all(conn)
        .await?;
    let artists: Vec<(i32, String, DateTimeWithTimeZone)> = artist::Entity::find()
        .select_only()
        .column(artist::Column::Id)
        .column(artist::Column::Name)
        .column(artist::Column::Added)
        .into_tuple()
        .all(conn)
        .await?;

    let mut feed: Vec<Listing> = venues
        .into_iter()
        .map(|(id, name, added)| Listing {
            id,
            name,
            added,
            kind: ListingKind::Venue,
        })
        .chain(artists.into_iter().map(|(id, name, added)| Listing {
            id,
            name,
            added,
            kind: ListingKind::Artist,
        }))
        .collect();
    feed.sort_by(|a, b| a.added.cmp(&b.added));
    Ok(feed)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
    pub upcoming_shows: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationGroup {
    pub city: Option<String>,
    pub state: Option<String>,
    pub venues: Vec<VenueSummary>,
}

/// Venues grouped by distinct (city, state), each venue annotated with its
/// upcoming-show count. The counts come from one grouped query over the
/// shows table, not a recount per venue.
pub async fn venues_by_location<C: ConnectionTrait>(
    conn: &C,
    now: DateTimeWithTimeZone,
) -> Result<Vec<LocationGroup>> {
    let upcoming: Vec<(i32, i64)> = show::Entity::find()
        .select_only()
        .column(show::Column::VenueId)
        .column_as(show::Column::Id.count(), "count")
        .filter(show::Column::StartTime.gt(now))
        .group_by(show::Column::VenueId)
        .into_tuple()
        .all(conn)
        .await?;
    let upcoming: BTreeMap<i32, i64> = upcoming.into_iter().collect();

    let venues = venue::Entity::find()
        .order_by_asc(venue::Column::Id)
        .all(conn)
        .await?;

    let mut groups: BTreeMap<(Option<String>, Option<String>), Vec<VenueSummary>> =
        BTreeMap::new();
    for v in venues {
        let count = upcoming.get(&v.id).copied().unwrap_or(0).max(0) as u64;
        groups
            .entry((v.city.clone(), v.state.clone()))
            .or_default()
            .push(VenueSummary {
                id: v.id,
                name: v.name,
                upcoming_shows: count,
            });
    }

    Ok(groups
        .into_iter()
        .map(|((city, state), venues)| LocationGroup {
            city,
            state,
            venues,
        })
        .collect())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRef {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<NamedRef>,
}

/// Case-insensitive substring match on `name`. An empty term matches every
/// entity of the requested kind; results come back in id order, unranked.
pub async fn search_by_name<C: ConnectionTrait>(
    conn: &C,
    kind: ListingKind,
    term: &str,
) -> Result<SearchResults> {
    let pattern = format!("%{}%", term.to_ascii_lowercase());

    let data: Vec<(i32, String)> = match kind {
        ListingKind::Venue => {
            venue::Entity::find()
                .filter(
                    Expr::expr(Func::lower(Expr::col((venue::Entity, venue::Column::Name))))
                        .like(&pattern),
                )
                .select_only()
                .column(venue::Column::Id)
                .column(venue::Column::Name)
                .order_by_asc(venue::Column::Id)
                .into_tuple()
                .all(conn)
                .await?
        }
        ListingKind::Artist => {
            artist::Entity::find()
                .filter(
                    Expr::expr(Func::lower(Expr::col((artist::Entity, artist::Column::Name))))
                        .like(&pattern),
                )
                .select_only()
                .column(artist::Column::Id)
                .column(artist::Column::Name)
                .order_by_asc(artist::Column::Id)
                .into_tuple()
                .all(conn)
                .await?
        }
    };

    let data: Vec<NamedRef> = data
        .into_iter()
        .map(|(id, name)| NamedRef { id, name })
        .collect();
    Ok(SearchResults {
        count: data.len(),
        data,
    })
}

/// One row of the shows overview page: every show joined to both sides.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct ShowListing {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTimeWithTimeZone,
}

/// All shows with artist and venue details, one joined query.
pub async fn shows_overview<C: ConnectionTrait>(conn: &C) -> Result<Vec<ShowListing>> {
    Ok(show::Entity::find()
        .select_only()
        .column(show::Column::StartTime)
        .join(JoinType::InnerJoin, show::Relation::Artist.def())
        .join(JoinType::InnerJoin, show::Relation::Venue.def())
        .column_as(venue::Column::Id, "venue_id")
        .column_as(venue::Column::Name, "venue_name")
        .column_as(artist::Column::Id, "artist_id")
        .column_as(artist::Column::Name, "artist_name")
        .column_as(artist::Column::ImageLink, "artist_image_link")
        .order_by_asc(show::Column::StartTime)
        .into_model::<ShowListing>()
        .all(conn)
        .await?)
}
