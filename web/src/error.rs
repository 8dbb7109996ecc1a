use std::convert::From;

use actix_web::error::BlockingError;
use actix_web::HttpResponse;
use actix_web::ResponseError;
use log::error;
use thiserror::Error;

use db::DbError;

use crate::controllers::ErrorPayload;

/// Error type for the web application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("There was an error with the Actix async arbiter. Cause: {}", cause)]
    Blocking { cause: String },

    #[error("Comment not found")]
    CommentNotFound,

    #[error("There was a database error.")]
    Db,

    #[error("Display order {} already exists. Please use a unique number.", order)]
    DuplicateDisplayOrder { order: i32 },

    #[error("No scripture found")]
    EmptyCatalog,

    #[error("Scripture not found")]
    ScriptureNotFound,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("{}", message)]
    Validation { message: String },
}

impl ResponseError for Error {
    fn error_response(&self) -> HttpResponse {
        match self {
            Error::Blocking { .. } | Error::Db => {
                error!("Unhandled: {}", &self);
                HttpResponse::InternalServerError().json(ErrorPayload::from_error(self))
            }
            Error::CommentNotFound | Error::EmptyCatalog | Error::ScriptureNotFound => {
                HttpResponse::NotFound().json(ErrorPayload::from_error(self))
            }
            Error::DuplicateDisplayOrder { .. } | Error::Validation { .. } => {
                HttpResponse::BadRequest().json(ErrorPayload::from_error(self))
            }
            Error::Unauthorized => {
                HttpResponse::Unauthorized().json(ErrorPayload::from_error(self))
            }
        }
    }
}

impl From<DbError> for Error {
    fn from(e: DbError) -> Self {
        match e {
            DbError::EmptyCatalog => Error::EmptyCatalog,
            DbError::CommentNotFound { .. } => Error::CommentNotFound,
            DbError::ScriptureNotFound { .. } => Error::ScriptureNotFound,
            DbError::DuplicateDisplayOrder { order } => Error::DuplicateDisplayOrder { order },
            DbError::Validation { message } => Error::Validation { message },
            e => {
                // The store's message may carry SQL detail, so log it here
                // and hand the caller a generic failure.
                error!("Unhandled: {}", e);
                Error::Db
            }
        }
    }
}

impl From<BlockingError> for Error {
    fn from(e: BlockingError) -> Self {
        Error::Blocking {
            cause: e.to_string(),
        }
    }
}
