use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde_derive::Serialize;

/// Model representing a scripture passage in the rotation catalog.
///
/// `display_order` is the passage's fixed position in the rotation
/// cycle and is unique across the whole catalog.
#[derive(Clone, Debug, Queryable, Serialize)]
pub struct Scripture {
    pub id: i32,
    pub book: String,
    pub chapter: i32,
    pub verses: String,
    pub text: String,
    pub translation: String,
    pub display_order: i32,
    pub background_image_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Scripture {
    /// Human-readable reference for the passage (e.g. "Philippians 4:4-7").
    pub fn reference(&self) -> String {
        format!("{} {}:{}", self.book, self.chapter, self.verses)
    }
}

/// Model for inserting a new scripture passage.
#[derive(Clone, Debug, Insertable)]
#[diesel(table_name = crate::schema::scriptures)]
pub struct NewScripture {
    pub book: String,
    pub chapter: i32,
    pub verses: String,
    pub text: String,
    pub translation: String,
    pub display_order: i32,
}

/// Model representing a visitor comment on a scripture passage.
///
/// A comment is publicly visible only once `is_approved` is set by an
/// administrator.
#[derive(Clone, Debug, Queryable, Serialize)]
pub struct Comment {
    pub id: i32,
    pub scripture_id: i32,
    pub author_name: String,
    pub author_email: String,
    pub text: String,
    pub is_approved: bool,
    pub created_at: NaiveDateTime,
}

/// Model for inserting a new comment. Comments always start unapproved.
#[derive(Clone, Debug, Insertable)]
#[diesel(table_name = crate::schema::comments)]
pub struct NewComment {
    pub scripture_id: i32,
    pub author_name: String,
    pub author_email: String,
    pub text: String,
    pub is_approved: bool,
}
