//! Comment data model (response-side form)

use crate::types::CommentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment attached to a feedback response
///
/// Field names and epoch-millisecond timestamps follow the collaborator's
/// wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseComment {
    /// Unique comment identifier
    pub comment_id: CommentId,
    /// Display name of the comment author
    pub comment_giver: String,
    /// Comment content
    pub comment_text: String,
    /// Whether the comment came from a feedback participant
    #[serde(default)]
    pub is_from_feedback_participant: bool,
    /// When the comment was created
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    /// When the comment was last updated
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
    /// Time-zone identifier, opaque to this crate
    pub timezone: String,
}
