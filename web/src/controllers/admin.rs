use actix_web::{web, HttpRequest, HttpResponse};

use db::models::NewScripture;
use db::Devotionable;

use crate::auth::require_bearer;
use crate::controllers::{
    ModerationForm, PendingCommentsPayload, ScriptureAddedPayload, ScriptureForm,
    ScripturesPayload, SuccessPayload,
};
use crate::error::Error;
use crate::ServerData;

/// Result for the admin handlers.
type AdminResult = Result<HttpResponse, Error>;

/// Handles HTTP requests for the moderation backlog.
///
/// Pending comments come back oldest first so the moderator works them
/// in submission order.
pub async fn pending_comments<D>(data: web::Data<ServerData>, req: HttpRequest) -> AdminResult
where
    D: Devotionable,
{
    require_bearer(&req, data.config.admin_secret.as_deref())?;

    let db = data.db.to_owned();
    let comments = web::block(move || D::pending_comments(&mut db.get().unwrap())).await??;

    Ok(HttpResponse::Ok().json(PendingCommentsPayload { comments }))
}

/// Handles HTTP requests deciding a pending comment's fate.
///
/// `approve` publishes the comment; `delete` removes it. Anything else
/// is rejected before the store is touched.
pub async fn moderate_comment<D>(
    data: web::Data<ServerData>,
    req: HttpRequest,
    form: web::Json<ModerationForm>,
) -> AdminResult
where
    D: Devotionable,
{
    require_bearer(&req, data.config.admin_secret.as_deref())?;

    let form = form.into_inner();
    let (comment_id, action) = match (form.comment_id, form.action) {
        (Some(id), Some(action)) => (id, action),
        _ => {
            return Err(Error::Validation {
                message: "Missing required fields".to_string(),
            })
        }
    };

    let db = data.db.to_owned();
    match action.as_str() {
        "approve" => web::block(move || D::approve_comment(comment_id, &mut db.get().unwrap()))
            .await??,
        "delete" => web::block(move || D::delete_comment(comment_id, &mut db.get().unwrap()))
            .await??,
        _ => {
            return Err(Error::Validation {
                message: "Invalid action".to_string(),
            })
        }
    }

    Ok(HttpResponse::Ok().json(SuccessPayload { success: true }))
}

/// Handles HTTP requests for the whole catalog, in rotation order.
pub async fn all_scriptures<D>(data: web::Data<ServerData>, req: HttpRequest) -> AdminResult
where
    D: Devotionable,
{
    require_bearer(&req, data.config.admin_secret.as_deref())?;

    let db = data.db.to_owned();
    let scriptures = web::block(move || D::all_scriptures(&mut db.get().unwrap())).await??;

    Ok(HttpResponse::Ok().json(ScripturesPayload { scriptures }))
}

/// Handles HTTP requests adding a scripture to the catalog.
pub async fn add_scripture<D>(
    data: web::Data<ServerData>,
    req: HttpRequest,
    form: web::Json<ScriptureForm>,
) -> AdminResult
where
    D: Devotionable,
{
    require_bearer(&req, data.config.admin_secret.as_deref())?;

    let form = form.into_inner();
    let (book, chapter, verses, text, display_order) = match (
        form.book,
        form.chapter,
        form.verses,
        form.text,
        form.display_order,
    ) {
        (Some(book), Some(chapter), Some(verses), Some(text), Some(display_order)) => {
            (book, chapter, verses, text, display_order)
        }
        _ => {
            return Err(Error::Validation {
                message: "Missing required fields: book, chapter, verses, text, display_order"
                    .to_string(),
            })
        }
    };
    let translation = form.translation.unwrap_or_else(|| "NLT".to_string());

    let db = data.db.to_owned();
    let scripture = web::block(move || {
        D::add_scripture(
            NewScripture {
                book,
                chapter,
                verses,
                text,
                translation,
                display_order,
            },
            &mut db.get().unwrap(),
        )
    })
    .await??;

    Ok(HttpResponse::Created().json(ScriptureAddedPayload {
        message: "Scripture added successfully".to_string(),
        scripture,
    }))
}
