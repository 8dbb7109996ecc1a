use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error};

use crate::models::*;
use crate::rotation;
use crate::DbError;

/// Comment length bounds enforced by the moderation gate.
const MIN_COMMENT_LEN: usize = 5;
const MAX_COMMENT_LEN: usize = 1000;

/// Minimum length for a scripture passage's text.
const MIN_SCRIPTURE_TEXT_LEN: usize = 10;

/// Trait implemented by types that can query for and return the site's
/// devotional structures.
pub trait Devotionable {
    /// Selects the scripture for the given UTC calendar day.
    ///
    /// The catalog is sorted ascending by `display_order` and the passage
    /// at `days_since_epoch mod catalog_size` is returned, so the same
    /// day always yields the same passage. The selection moves only at
    /// UTC-midnight rollover or when the catalog itself changes.
    fn scripture_for_date(
        date: NaiveDate,
        conn: &mut SqliteConnection,
    ) -> Result<Scripture, DbError>;

    /// Gets the whole catalog, sorted ascending by `display_order`.
    fn all_scriptures(conn: &mut SqliteConnection) -> Result<Vec<Scripture>, DbError>;

    /// Validates and persists a new scripture passage.
    ///
    /// The store enforces `display_order` uniqueness; a conflict surfaces
    /// as [DbError::DuplicateDisplayOrder] rather than a generic failure.
    fn add_scripture(
        new_scripture: NewScripture,
        conn: &mut SqliteConnection,
    ) -> Result<Scripture, DbError>;

    /// Gets the scriptures that have no background image yet, sorted
    /// ascending by `display_order`.
    fn scriptures_missing_image(conn: &mut SqliteConnection) -> Result<Vec<Scripture>, DbError>;

    /// Stores a background image URL for a scripture.
    fn set_background_image(
        scripture_id: i32,
        image_url: &str,
        conn: &mut SqliteConnection,
    ) -> Result<(), DbError>;

    /// Gets the approved comments for a scripture, newest first.
    fn approved_comments(
        scripture_id: i32,
        conn: &mut SqliteConnection,
    ) -> Result<Vec<Comment>, DbError>;

    /// Validates and persists a visitor comment.
    ///
    /// The comment starts unapproved and stays invisible to the public
    /// surface until an administrator approves it.
    fn submit_comment(
        new_comment: NewComment,
        conn: &mut SqliteConnection,
    ) -> Result<Comment, DbError>;

    /// Gets all pending comments across scriptures, oldest first, so
    /// moderators can work the backlog in submission order.
    fn pending_comments(conn: &mut SqliteConnection) -> Result<Vec<Comment>, DbError>;

    /// Marks a comment as approved. Approving an already-approved
    /// comment is a no-op; a missing comment is an error.
    fn approve_comment(comment_id: i32, conn: &mut SqliteConnection) -> Result<(), DbError>;

    /// Removes a comment from the store.
    fn delete_comment(comment_id: i32, conn: &mut SqliteConnection) -> Result<(), DbError>;
}

/// Main implementation for the [Devotionable](crate::devotion::Devotionable) trait.
pub struct Devotion;

impl Devotionable for Devotion {
    fn scripture_for_date(
        date: NaiveDate,
        conn: &mut SqliteConnection,
    ) -> Result<Scripture, DbError> {
        let mut catalog = Self::all_scriptures(conn)?;
        if catalog.is_empty() {
            return Err(DbError::EmptyCatalog);
        }

        let index = rotation::rotation_index(rotation::days_since_epoch(date), catalog.len());
        Ok(catalog.swap_remove(index))
    }

    fn all_scriptures(conn: &mut SqliteConnection) -> Result<Vec<Scripture>, DbError> {
        use crate::schema::scriptures;

        scriptures::table
            .order(scriptures::display_order.asc())
            .load(conn)
            .map_err(|e| DbError::Other {
                cause: e.to_string(),
            })
    }

    fn add_scripture(
        new_scripture: NewScripture,
        conn: &mut SqliteConnection,
    ) -> Result<Scripture, DbError> {
        use crate::schema::scriptures;

        validate_scripture(&new_scripture)?;

        diesel::insert_into(scriptures::table)
            .values(&new_scripture)
            .get_result(conn)
            .map_err(|e| match e {
                Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    DbError::DuplicateDisplayOrder {
                        order: new_scripture.display_order,
                    }
                }
                e => DbError::Other {
                    cause: e.to_string(),
                },
            })
    }

    fn scriptures_missing_image(conn: &mut SqliteConnection) -> Result<Vec<Scripture>, DbError> {
        use crate::schema::scriptures;

        scriptures::table
            .filter(scriptures::background_image_url.is_null())
            .order(scriptures::display_order.asc())
            .load(conn)
            .map_err(|e| DbError::Other {
                cause: e.to_string(),
            })
    }

    fn set_background_image(
        scripture_id: i32,
        image_url: &str,
        conn: &mut SqliteConnection,
    ) -> Result<(), DbError> {
        use crate::schema::scriptures;

        let updated = diesel::update(scriptures::table.find(scripture_id))
            .set((
                scriptures::background_image_url.eq(image_url),
                scriptures::updated_at.eq(diesel::dsl::now),
            ))
            .execute(conn)
            .map_err(|e| DbError::Other {
                cause: e.to_string(),
            })?;

        match updated {
            0 => Err(DbError::ScriptureNotFound { id: scripture_id }),
            _ => Ok(()),
        }
    }

    fn approved_comments(
        scripture_id: i32,
        conn: &mut SqliteConnection,
    ) -> Result<Vec<Comment>, DbError> {
        use crate::schema::comments;

        comments::table
            .filter(comments::scripture_id.eq(scripture_id))
            .filter(comments::is_approved.eq(true))
            .order((comments::created_at.desc(), comments::id.desc()))
            .load(conn)
            .map_err(|e| DbError::Other {
                cause: e.to_string(),
            })
    }

    fn submit_comment(
        mut new_comment: NewComment,
        conn: &mut SqliteConnection,
    ) -> Result<Comment, DbError> {
        use crate::schema::comments;

        validate_comment(&new_comment)?;

        // A submission enters the queue pending no matter what the
        // caller put in `is_approved`.
        new_comment.is_approved = false;

        diesel::insert_into(comments::table)
            .values(&new_comment)
            .get_result(conn)
            .map_err(|e| match e {
                Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                    DbError::ScriptureNotFound {
                        id: new_comment.scripture_id,
                    }
                }
                e => DbError::Other {
                    cause: e.to_string(),
                },
            })
    }

    fn pending_comments(conn: &mut SqliteConnection) -> Result<Vec<Comment>, DbError> {
        use crate::schema::comments;

        comments::table
            .filter(comments::is_approved.eq(false))
            .order((comments::created_at.asc(), comments::id.asc()))
            .load(conn)
            .map_err(|e| DbError::Other {
                cause: e.to_string(),
            })
    }

    fn approve_comment(comment_id: i32, conn: &mut SqliteConnection) -> Result<(), DbError> {
        use crate::schema::comments;

        let updated = diesel::update(comments::table.find(comment_id))
            .set(comments::is_approved.eq(true))
            .execute(conn)
            .map_err(|e| DbError::Other {
                cause: e.to_string(),
            })?;

        match updated {
            0 => Err(DbError::CommentNotFound { id: comment_id }),
            _ => Ok(()),
        }
    }

    fn delete_comment(comment_id: i32, conn: &mut SqliteConnection) -> Result<(), DbError> {
        use crate::schema::comments;

        let deleted = diesel::delete(comments::table.find(comment_id))
            .execute(conn)
            .map_err(|e| DbError::Other {
                cause: e.to_string(),
            })?;

        match deleted {
            0 => Err(DbError::CommentNotFound { id: comment_id }),
            _ => Ok(()),
        }
    }
}

fn validate_comment(new_comment: &NewComment) -> Result<(), DbError> {
    if new_comment.author_name.trim().is_empty()
        || new_comment.author_email.trim().is_empty()
        || new_comment.text.trim().is_empty()
    {
        return Err(DbError::Validation {
            message: "Missing required fields".to_string(),
        });
    }

    let len = new_comment.text.chars().count();
    if !(MIN_COMMENT_LEN..=MAX_COMMENT_LEN).contains(&len) {
        return Err(DbError::Validation {
            message: format!(
                "Comment must be between {} and {} characters",
                MIN_COMMENT_LEN, MAX_COMMENT_LEN
            ),
        });
    }

    Ok(())
}

fn validate_scripture(new_scripture: &NewScripture) -> Result<(), DbError> {
    if new_scripture.book.trim().is_empty()
        || new_scripture.verses.trim().is_empty()
        || new_scripture.text.trim().is_empty()
    {
        return Err(DbError::Validation {
            message: "Missing required fields: book, chapter, verses, text, display_order"
                .to_string(),
        });
    }

    if new_scripture.chapter < 1 {
        return Err(DbError::Validation {
            message: "Chapter must be a positive number".to_string(),
        });
    }

    if new_scripture.text.chars().count() < MIN_SCRIPTURE_TEXT_LEN {
        return Err(DbError::Validation {
            message: format!(
                "Scripture text must be at least {} characters",
                MIN_SCRIPTURE_TEXT_LEN
            ),
        });
    }

    Ok(())
}
