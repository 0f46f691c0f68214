//! Editor-side comment form and the projections between the two forms

use super::model::ResponseComment;
use crate::types::CommentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment as held by the comment editor
///
/// Same entity as [`ResponseComment`] under different field names:
/// `updatedAt`/`editedAt` and `timezone`/`timeZone`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorComment {
    /// Unique comment identifier
    pub comment_id: CommentId,
    /// When the comment was created
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    /// When the comment was last edited (`updatedAt` on the response side)
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub edited_at: DateTime<Utc>,
    /// Time-zone identifier (`timezone` on the response side)
    pub time_zone: String,
    /// Display name of the comment author
    pub comment_giver: String,
    /// Comment content
    pub comment_text: String,
    /// Whether the comment came from a feedback participant
    #[serde(default)]
    pub is_from_feedback_participant: bool,
}

/// Editor-open projection. The participant flag is not part of the mapping;
/// the editor form starts out with `false`.
impl From<&ResponseComment> for EditorComment {
    fn from(comment: &ResponseComment) -> Self {
        EditorComment {
            comment_id: comment.comment_id,
            created_at: comment.created_at,
            edited_at: comment.updated_at,
            time_zone: comment.timezone.clone(),
            comment_giver: comment.comment_giver.clone(),
            comment_text: comment.comment_text.clone(),
            is_from_feedback_participant: false,
        }
    }
}

/// Save-side projection. The participant flag is reset to `false`
/// unconditionally; a prior `true` on the stored comment is lost.
impl From<&EditorComment> for ResponseComment {
    fn from(comment: &EditorComment) -> Self {
        ResponseComment {
            comment_id: comment.comment_id,
            comment_giver: comment.comment_giver.clone(),
            comment_text: comment.comment_text.clone(),
            is_from_feedback_participant: false,
            created_at: comment.created_at,
            updated_at: comment.edited_at,
            timezone: comment.time_zone.clone(),
        }
    }
}
