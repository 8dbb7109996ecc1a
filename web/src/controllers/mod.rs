use serde_derive::{Deserialize, Serialize};

use db::models::{Comment, Scripture};

use crate::error::Error;

/// Error payload for any JSON response.
#[derive(Clone, Serialize, Debug)]
pub struct ErrorPayload {
    pub error: String,
}

impl ErrorPayload {
    /// Creates a new error payload from a web error.
    pub fn from_error(e: &Error) -> Self {
        Self {
            error: e.to_string(),
        }
    }
}

/// Payload for the daily devotional endpoint.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyScripturePayload {
    pub scripture: Scripture,
    pub comments: Vec<Comment>,
    pub total_comments: usize,
}

/// Payload describing where today falls in the rotation cycle.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationPayload {
    pub scripture: Scripture,
    pub total_scriptures: usize,
    pub days_since_epoch: i64,
    pub index: usize,
}

/// Payload for a scripture's approved comments.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentListPayload {
    pub comments: Vec<Comment>,
    pub total_comments: usize,
}

/// Payload returned when a comment enters the moderation queue.
#[derive(Serialize)]
pub struct CommentSubmittedPayload {
    pub message: String,
    pub comment: Comment,
}

/// Payload for the moderation backlog.
#[derive(Serialize)]
pub struct PendingCommentsPayload {
    pub comments: Vec<Comment>,
}

/// Payload for a moderation decision that went through.
#[derive(Serialize)]
pub struct SuccessPayload {
    pub success: bool,
}

/// Payload listing the whole catalog.
#[derive(Serialize)]
pub struct ScripturesPayload {
    pub scriptures: Vec<Scripture>,
}

/// Payload returned when a scripture joins the catalog.
#[derive(Serialize)]
pub struct ScriptureAddedPayload {
    pub message: String,
    pub scripture: Scripture,
}

/// Outcome of one scripture in a backfill batch.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackfillOutcome {
    pub scripture_id: i32,
    pub reference: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Payload for a whole backfill run.
#[derive(Serialize)]
pub struct BackfillPayload {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<BackfillOutcome>>,
}

/// Form body for a visitor comment submission.
///
/// Every field is optional so a missing one surfaces as a validation
/// message rather than a deserialization failure.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitCommentForm {
    pub scripture_id: Option<i32>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub text: Option<String>,
}

/// Form body for a moderation decision.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationForm {
    pub comment_id: Option<i32>,
    pub action: Option<String>,
}

/// Form body for adding a scripture to the catalog.
#[derive(Deserialize)]
pub struct ScriptureForm {
    pub book: Option<String>,
    pub chapter: Option<i32>,
    pub verses: Option<String>,
    pub text: Option<String>,
    pub translation: Option<String>,
    pub display_order: Option<i32>,
}

pub mod admin;
pub mod api;
pub mod cron;
