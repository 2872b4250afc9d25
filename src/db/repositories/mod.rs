//! Entity Store: CRUD over venues, artists, and shows.
//!
//! Every operation takes the connection explicitly so callers decide the
//! transaction scope. Write handlers open one transaction per request and
//! pass it here; an error drops the transaction and rolls everything back,
//! cascade effects included.

use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::db::entities::{artist, show, venue};
use crate::error::{AppError, Result};

fn map_update_err(err: DbErr, what: &str, id: i32) -> AppError {
    match err {
        DbErr::RecordNotUpdated => AppError::NotFound(format!("{what} {id} does not exist")),
        other => other.into(),
    }
}

pub struct VenueRepository;

impl VenueRepository {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        venue: venue::ActiveModel,
    ) -> Result<venue::Model> {
        Ok(venue.insert(conn).await?)
    }

    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<Option<venue::Model>> {
        Ok(venue::Entity::find_by_id(id).one(conn).await?)
    }

    pub async fn find_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<venue::Model>> {
        Ok(venue::Entity::find()
            .order_by_asc(venue::Column::Id)
            .all(conn)
            .await?)
    }

    /// Field-level update; untouched fields keep their stored values.
    pub async fn update<C: ConnectionTrait>(
        conn: &C,
        venue: venue::ActiveModel,
    ) -> Result<venue::Model> {
        let id = match &venue.id {
            sea_orm::ActiveValue::Set(id) | sea_orm::ActiveValue::Unchanged(id) => *id,
            sea_orm::ActiveValue::NotSet => {
                return Err(AppError::Internal("venue update without id".to_string()))
            }
        };
        venue
            .update(conn)
            .await
            .map_err(|e| map_update_err(e, "venue", id))
    }

    /// Deletes the venue and, via the FK cascade, every show it owns.
    pub async fn delete<C: ConnectionTrait>(conn: &C, id: i32) -> Result<()> {
        let res = venue::Entity::delete_by_id(id).exec(conn).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound(format!("venue {id} does not exist")));
        }
        Ok(())
    }
}

pub struct ArtistRepository;

impl ArtistRepository {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        artist: artist::ActiveModel,
    ) -> Result<artist::Model> {
        Ok(artist.insert(conn).await?)
    }

    pub async fn find_by_id<C: ConnectionTrait>(
        conn: &C,
        id: i32,
    ) -> Result<Option<artist::Model>> {
        Ok(artist::Entity::find_by_id(id).one(conn).await?)
    }

    pub async fn find_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<artist::Model>> {
        Ok(artist::Entity::find()
            .order_by_asc(artist::Column::Id)
            .all(conn)
            .await?)
    }

    pub async fn update<C: ConnectionTrait>(
        conn: &C,
        artist: artist::ActiveModel,
    ) -> Result<artist::Model> {
        let id = match &artist.id {
            sea_orm::ActiveValue::Set(id) | sea_orm::ActiveValue::Unchanged(id) => *id,
            sea_orm::ActiveValue::NotSet => {
                return Err(AppError::Internal("artist update without id".to_string()))
            }
        };
        artist
            .update(conn)
            .await
            .map_err(|e| map_update_err(e, "artist", id))
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, id: i32) -> Result<()> {
        let res = artist::Entity::delete_by_id(id).exec(conn).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound(format!("artist {id} does not exist")));
        }
        Ok(())
    }
}

pub struct ShowRepository;

impl ShowRepository {
    /// Insert fails with `ConstraintViolation` if either foreign key points
    /// at a nonexistent row, leaving the shows table unchanged.
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        show: show::ActiveModel,
    ) -> Result<show::Model> {
        Ok(show.insert(conn).await?)
    }

    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<Option<show::Model>> {
        Ok(show::Entity::find_by_id(id).one(conn).await?)
    }

    pub async fn find_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<show::Model>> {
        Ok(show::Entity::find()
            .order_by_asc(show::Column::StartTime)
            .all(conn)
            .await?)
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, id: i32) -> Result<()> {
        let res = show::Entity::delete_by_id(id).exec(conn).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound(format!("show {id} does not exist")));
        }
        Ok(())
    }
}
