#[macro_use]
extern crate diesel;

use std::path::Path;

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2;
use diesel_migrations::{FileBasedMigrations, MigrationHarness};
use thiserror::Error;

/// Type of a pooled SQLite connection manager.
pub type SqliteConnectionManager = r2d2::ConnectionManager<SqliteConnection>;

/// Type for a SQLite connection pool.
pub type SqliteConnectionPool = r2d2::Pool<SqliteConnectionManager>;

pub type DbConnection = SqliteConnection;

#[derive(Clone, Error, Debug)]
pub enum DbError {
    #[error("No scriptures have been added yet.")]
    EmptyCatalog,

    #[error("Comment {} was not found.", id)]
    CommentNotFound { id: i32 },

    #[error("Scripture {} was not found.", id)]
    ScriptureNotFound { id: i32 },

    #[error("Display order {} already exists. Please use a unique number.", order)]
    DuplicateDisplayOrder { order: i32 },

    #[error("{}", message)]
    Validation { message: String },

    #[error("There was a database migration error. Root cause: {:?}.", cause)]
    Migration { cause: String },

    #[error("There was a database error. Root cause: {:?}.", cause)]
    Other { cause: String },
}

/// Turns on foreign key enforcement for every pooled connection.
///
/// SQLite scopes the pragma to a single connection, so it has to run on
/// acquire rather than once at startup. Comment cascade deletion depends
/// on it.
#[derive(Clone, Copy, Debug)]
struct ForeignKeys;

impl r2d2::CustomizeConnection<SqliteConnection, r2d2::Error> for ForeignKeys {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = ON;")
            .map_err(r2d2::Error::QueryError)
    }
}

/// Builds a SQLite connection pool with the given URL.
pub fn build_pool(db_url: &str) -> SqliteConnectionPool {
    r2d2::Pool::builder()
        .max_size(15)
        .connection_customizer(Box::new(ForeignKeys))
        .build(SqliteConnectionManager::new(db_url))
        .unwrap()
}

/// Establishes a non-pooled SQLite connection.
pub fn establish_connection(db_url: &str) -> SqliteConnection {
    let mut conn = SqliteConnection::establish(db_url)
        .unwrap_or_else(|_| panic!("Error connecting to {}", db_url));
    conn.batch_execute("PRAGMA foreign_keys = ON;")
        .unwrap_or_else(|_| panic!("Error enabling foreign keys for {}", db_url));
    conn
}

/// Run any pending Diesel migrations.
pub fn run_migrations(conn: &mut SqliteConnection) -> Result<(), DbError> {
    let dir = Path::new("./db/migrations");
    let source = FileBasedMigrations::find_migrations_directory_in_path(dir).map_err(|e| {
        DbError::Migration {
            cause: e.to_string(),
        }
    })?;
    conn.run_pending_migrations(source)
        .map(|_| ())
        .map_err(|e| DbError::Migration {
            cause: e.to_string(),
        })
}

mod devotion;
pub mod models;
pub mod rotation;
mod schema;
mod seed;

pub use devotion::{Devotion, Devotionable};
pub use seed::seed_catalog;
