use std::time::Duration;

use actix_web::test::{self, TestRequest};
use actix_web::{web, App};
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

use db::models::*;
use db::*;

use crate::{routes, AppConfig, ServerData};

pub const TEST_ADMIN_SECRET: &str = "test-admin-secret";
pub const TEST_CRON_SECRET: &str = "test-cron-secret";

pub fn test_config() -> AppConfig {
    AppConfig {
        admin_secret: Some(TEST_ADMIN_SECRET.to_string()),
        cron_secret: Some(TEST_CRON_SECRET.to_string()),
        replicate_api_token: None,
        backfill_delay: Duration::ZERO,
    }
}

fn timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 10)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

fn test_scripture(id: i32) -> Scripture {
    Scripture {
        id,
        book: "Philippians".to_string(),
        chapter: 4,
        verses: "4-7".to_string(),
        text: "Always be full of joy in the Lord. I say it again—rejoice!".to_string(),
        translation: "NLT".to_string(),
        display_order: id - 1,
        background_image_url: None,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

fn test_comment(id: i32, is_approved: bool) -> Comment {
    Comment {
        id,
        scripture_id: 1,
        author_name: "Ruth".to_string(),
        author_email: "ruth@example.com".to_string(),
        text: "Amen to this".to_string(),
        is_approved,
        created_at: timestamp(),
    }
}

/// Stand-in store for the handler tests.
///
/// Scripture 1 is today's selection with two approved comments and one
/// pending comment (id 20). Comment and scripture lookups treat the 404
/// ids as missing, display order 1 as taken, and scripture 2 as one the
/// backfill cannot update.
pub struct TestDevotion;

impl Devotionable for TestDevotion {
    fn scripture_for_date(_: NaiveDate, _: &mut DbConnection) -> Result<Scripture, DbError> {
        Ok(test_scripture(1))
    }

    fn all_scriptures(_: &mut DbConnection) -> Result<Vec<Scripture>, DbError> {
        Ok(vec![test_scripture(1), {
            let mut second = test_scripture(2);
            second.book = "Psalm".to_string();
            second
        }])
    }

    fn add_scripture(
        new_scripture: NewScripture,
        _: &mut DbConnection,
    ) -> Result<Scripture, DbError> {
        if new_scripture.display_order == 1 {
            return Err(DbError::DuplicateDisplayOrder { order: 1 });
        }

        Ok(Scripture {
            id: 3,
            book: new_scripture.book,
            chapter: new_scripture.chapter,
            verses: new_scripture.verses,
            text: new_scripture.text,
            translation: new_scripture.translation,
            display_order: new_scripture.display_order,
            background_image_url: None,
            created_at: timestamp(),
            updated_at: timestamp(),
        })
    }

    fn scriptures_missing_image(_: &mut DbConnection) -> Result<Vec<Scripture>, DbError> {
        Ok((1..=7).map(test_scripture).collect())
    }

    fn set_background_image(
        scripture_id: i32,
        _: &str,
        _: &mut DbConnection,
    ) -> Result<(), DbError> {
        match scripture_id {
            2 => Err(DbError::ScriptureNotFound { id: scripture_id }),
            _ => Ok(()),
        }
    }

    fn approved_comments(
        scripture_id: i32,
        _: &mut DbConnection,
    ) -> Result<Vec<Comment>, DbError> {
        match scripture_id {
            1 => Ok(vec![test_comment(11, true), test_comment(10, true)]),
            _ => Ok(vec![]),
        }
    }

    fn submit_comment(new_comment: NewComment, _: &mut DbConnection) -> Result<Comment, DbError> {
        let len = new_comment.text.chars().count();
        if !(5..=1000).contains(&len) {
            return Err(DbError::Validation {
                message: "Comment must be between 5 and 1000 characters".to_string(),
            });
        }

        Ok(Comment {
            id: 42,
            scripture_id: new_comment.scripture_id,
            author_name: new_comment.author_name,
            author_email: new_comment.author_email,
            text: new_comment.text,
            is_approved: false,
            created_at: timestamp(),
        })
    }

    fn pending_comments(_: &mut DbConnection) -> Result<Vec<Comment>, DbError> {
        Ok(vec![test_comment(20, false)])
    }

    fn approve_comment(comment_id: i32, _: &mut DbConnection) -> Result<(), DbError> {
        match comment_id {
            404 => Err(DbError::CommentNotFound { id: comment_id }),
            _ => Ok(()),
        }
    }

    fn delete_comment(comment_id: i32, _: &mut DbConnection) -> Result<(), DbError> {
        match comment_id {
            404 => Err(DbError::CommentNotFound { id: comment_id }),
            _ => Ok(()),
        }
    }
}

/// Stand-in store whose catalog already has every background image.
pub struct BackfilledDevotion;

impl Devotionable for BackfilledDevotion {
    fn scripture_for_date(date: NaiveDate, conn: &mut DbConnection) -> Result<Scripture, DbError> {
        TestDevotion::scripture_for_date(date, conn)
    }

    fn all_scriptures(conn: &mut DbConnection) -> Result<Vec<Scripture>, DbError> {
        TestDevotion::all_scriptures(conn)
    }

    fn add_scripture(
        new_scripture: NewScripture,
        conn: &mut DbConnection,
    ) -> Result<Scripture, DbError> {
        TestDevotion::add_scripture(new_scripture, conn)
    }

    fn scriptures_missing_image(_: &mut DbConnection) -> Result<Vec<Scripture>, DbError> {
        Ok(vec![])
    }

    fn set_background_image(
        scripture_id: i32,
        image_url: &str,
        conn: &mut DbConnection,
    ) -> Result<(), DbError> {
        TestDevotion::set_background_image(scripture_id, image_url, conn)
    }

    fn approved_comments(
        scripture_id: i32,
        conn: &mut DbConnection,
    ) -> Result<Vec<Comment>, DbError> {
        TestDevotion::approved_comments(scripture_id, conn)
    }

    fn submit_comment(
        new_comment: NewComment,
        conn: &mut DbConnection,
    ) -> Result<Comment, DbError> {
        TestDevotion::submit_comment(new_comment, conn)
    }

    fn pending_comments(conn: &mut DbConnection) -> Result<Vec<Comment>, DbError> {
        TestDevotion::pending_comments(conn)
    }

    fn approve_comment(comment_id: i32, conn: &mut DbConnection) -> Result<(), DbError> {
        TestDevotion::approve_comment(comment_id, conn)
    }

    fn delete_comment(comment_id: i32, conn: &mut DbConnection) -> Result<(), DbError> {
        TestDevotion::delete_comment(comment_id, conn)
    }
}

/// Stand-in store with no scriptures in the catalog at all.
pub struct EmptyDevotion;

impl Devotionable for EmptyDevotion {
    fn scripture_for_date(_: NaiveDate, _: &mut DbConnection) -> Result<Scripture, DbError> {
        Err(DbError::EmptyCatalog)
    }

    fn all_scriptures(_: &mut DbConnection) -> Result<Vec<Scripture>, DbError> {
        Ok(vec![])
    }

    fn add_scripture(
        new_scripture: NewScripture,
        conn: &mut DbConnection,
    ) -> Result<Scripture, DbError> {
        TestDevotion::add_scripture(new_scripture, conn)
    }

    fn scriptures_missing_image(_: &mut DbConnection) -> Result<Vec<Scripture>, DbError> {
        Ok(vec![])
    }

    fn set_background_image(
        scripture_id: i32,
        _: &str,
        _: &mut DbConnection,
    ) -> Result<(), DbError> {
        Err(DbError::ScriptureNotFound { id: scripture_id })
    }

    fn approved_comments(_: i32, _: &mut DbConnection) -> Result<Vec<Comment>, DbError> {
        Ok(vec![])
    }

    fn submit_comment(new_comment: NewComment, _: &mut DbConnection) -> Result<Comment, DbError> {
        Err(DbError::ScriptureNotFound {
            id: new_comment.scripture_id,
        })
    }

    fn pending_comments(_: &mut DbConnection) -> Result<Vec<Comment>, DbError> {
        Ok(vec![])
    }

    fn approve_comment(comment_id: i32, _: &mut DbConnection) -> Result<(), DbError> {
        Err(DbError::CommentNotFound { id: comment_id })
    }

    fn delete_comment(comment_id: i32, _: &mut DbConnection) -> Result<(), DbError> {
        Err(DbError::CommentNotFound { id: comment_id })
    }
}

/// Runs one request against the full route table for the given store.
pub async fn api_request_as<D>(config: AppConfig, req: TestRequest) -> (u16, Value)
where
    D: Devotionable + 'static,
{
    let srv = test::init_service(
        App::new()
            .app_data(web::Data::new(ServerData {
                db: build_pool(":memory:"),
                config,
            }))
            .configure(routes::<D>),
    )
    .await;

    let res = test::call_service(&srv, req.to_request()).await;
    let status = res.status().as_u16();
    let body = test::read_body_json(res).await;
    (status, body)
}

pub async fn api_request(req: TestRequest) -> (u16, Value) {
    api_request_as::<TestDevotion>(test_config(), req).await
}

/// Request carrying the admin bearer secret.
pub async fn admin_request(req: TestRequest) -> (u16, Value) {
    api_request(req.insert_header(("Authorization", format!("Bearer {}", TEST_ADMIN_SECRET))))
        .await
}

/// Request carrying the cron bearer secret.
pub async fn cron_request(req: TestRequest) -> (u16, Value) {
    api_request(req.insert_header(("Authorization", format!("Bearer {}", TEST_CRON_SECRET)))).await
}

/// Request against a deployment with no secrets configured at all.
pub async fn unconfigured_request(req: TestRequest) -> (u16, Value) {
    let config = AppConfig {
        admin_secret: None,
        cron_secret: None,
        replicate_api_token: None,
        backfill_delay: Duration::ZERO,
    };
    api_request_as::<TestDevotion>(config, req).await
}

/// Request against the covered-catalog store.
pub async fn backfilled_request(req: TestRequest) -> (u16, Value) {
    api_request_as::<BackfilledDevotion>(
        test_config(),
        req.insert_header(("Authorization", format!("Bearer {}", TEST_CRON_SECRET))),
    )
    .await
}

/// Request against the empty-catalog store.
pub async fn empty_catalog_request(req: TestRequest) -> (u16, Value) {
    api_request_as::<EmptyDevotion>(test_config(), req).await
}
