use actix_web::{web, HttpResponse};
use chrono::Utc;

use db::models::NewComment;
use db::{rotation, DbError, Devotionable};

use crate::controllers::{
    CommentListPayload, CommentSubmittedPayload, DailyScripturePayload, RotationPayload,
    SubmitCommentForm,
};
use crate::error::Error;
use crate::ServerData;

/// Result for the JSON API handlers.
type ApiResult = Result<HttpResponse, Error>;

/// Handles HTTP requests for today's devotional.
///
/// Returns the scripture the rotation selects for the current UTC day
/// together with its approved comments.
pub async fn today<D>(data: web::Data<ServerData>) -> ApiResult
where
    D: Devotionable,
{
    let db = data.db.to_owned();
    let today = Utc::now().date_naive();
    let (scripture, comments) = web::block(move || {
        let mut conn = db.get().unwrap();
        let scripture = D::scripture_for_date(today, &mut conn)?;
        let comments = D::approved_comments(scripture.id, &mut conn)?;
        Ok::<_, DbError>((scripture, comments))
    })
    .await??;

    Ok(HttpResponse::Ok().json(DailyScripturePayload {
        total_comments: comments.len(),
        scripture,
        comments,
    }))
}

/// Handles HTTP requests for the rotation's current position.
///
/// Reports today's scripture along with the cycle arithmetic behind the
/// choice, which the admin page uses to preview the schedule.
pub async fn rotation_status<D>(data: web::Data<ServerData>) -> ApiResult
where
    D: Devotionable,
{
    let db = data.db.to_owned();
    let mut catalog = web::block(move || D::all_scriptures(&mut db.get().unwrap())).await??;
    if catalog.is_empty() {
        return Err(Error::EmptyCatalog);
    }

    let days_since_epoch = rotation::days_since_epoch(Utc::now().date_naive());
    let index = rotation::rotation_index(days_since_epoch, catalog.len());
    let total_scriptures = catalog.len();

    Ok(HttpResponse::Ok().json(RotationPayload {
        scripture: catalog.swap_remove(index),
        total_scriptures,
        days_since_epoch,
        index,
    }))
}

/// Handles HTTP requests for a scripture's approved comments.
pub async fn comments<D>(data: web::Data<ServerData>, params: web::Path<(i32,)>) -> ApiResult
where
    D: Devotionable,
{
    let (scripture_id,) = params.into_inner();
    let db = data.db.to_owned();
    let comments =
        web::block(move || D::approved_comments(scripture_id, &mut db.get().unwrap())).await??;

    Ok(HttpResponse::Ok().json(CommentListPayload {
        total_comments: comments.len(),
        comments,
    }))
}

/// Handles HTTP requests submitting a new comment.
///
/// The comment lands in the moderation queue; nothing becomes publicly
/// visible here.
pub async fn create_comment<D>(
    data: web::Data<ServerData>,
    form: web::Json<SubmitCommentForm>,
) -> ApiResult
where
    D: Devotionable,
{
    let form = form.into_inner();
    let (scripture_id, author_name, author_email, text) =
        match (form.scripture_id, form.author_name, form.author_email, form.text) {
            (Some(id), Some(name), Some(email), Some(text)) => (id, name, email, text),
            _ => {
                return Err(Error::Validation {
                    message: "Missing required fields".to_string(),
                })
            }
        };

    let db = data.db.to_owned();
    let comment = web::block(move || {
        D::submit_comment(
            NewComment {
                scripture_id,
                author_name,
                author_email,
                text,
                is_approved: false,
            },
            &mut db.get().unwrap(),
        )
    })
    .await??;

    Ok(HttpResponse::Created().json(CommentSubmittedPayload {
        message: "Comment submitted for moderation".to_string(),
        comment,
    }))
}
