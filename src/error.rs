use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::templates::{error_page, not_found_page};

#[derive(Error, Debug)]
pub enum AppError {
    /// A write violated a foreign-key or not-null constraint. The enclosing
    /// transaction is rolled back before this surfaces.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Parse(String),

    /// Any other store failure, including the connection being unavailable.
    #[error("Database error: {0}")]
    Database(DbErr),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                Self::ConstraintViolation(msg)
            }
            Some(SqlErr::UniqueConstraintViolation(msg)) => {
                Self::ConstraintViolation(msg)
            }
            _ => match err {
                DbErr::RecordNotFound(msg) => Self::NotFound(msg),
                other => Self::Database(other),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ConstraintViolation(ref msg) => {
                tracing::warn!("Constraint violation: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    Html(error_page("That change conflicts with existing records.").into_string()),
                )
                    .into_response()
            }
            Self::NotFound(ref msg) => {
                (StatusCode::NOT_FOUND, Html(not_found_page(msg).into_string())).into_response()
            }
            Self::Parse(ref msg) => (
                StatusCode::BAD_REQUEST,
                Html(error_page(msg).into_string()),
            )
                .into_response(),
            Self::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(error_page("A storage error occurred.").into_string()),
                )
                    .into_response()
            }
            Self::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(error_page("An unexpected error occurred.").into_string()),
                )
                    .into_response()
            }
            Self::Other(ref e) => {
                tracing::error!("Unexpected error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(error_page("An unexpected error occurred.").into_string()),
                )
                    .into_response()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
