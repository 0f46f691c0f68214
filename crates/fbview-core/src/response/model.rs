//! Response data model

use crate::comment::ResponseComment;
use crate::error::Result;
use crate::types::ResponseId;
use serde::{Deserialize, Serialize};

/// A single feedback answer from a giver to a recipient
///
/// Never mutated in place; operations that change a response return a new
/// value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// Unique response identifier
    pub response_id: ResponseId,
    /// Display name of the giver
    pub giver: String,
    /// Team of the giver
    #[serde(default)]
    pub giver_team: String,
    /// Section of the giver, possibly empty
    #[serde(default)]
    pub giver_section: String,
    /// Display name of the recipient
    pub recipient: String,
    /// Team of the recipient
    #[serde(default)]
    pub recipient_team: String,
    /// Section of the recipient, possibly empty
    #[serde(default)]
    pub recipient_section: String,
    /// Question-type specific answer payload, opaque to this crate
    #[serde(default)]
    pub response_details: serde_json::Value,
    /// Comments attached to this response, in display order
    #[serde(default)]
    pub all_comments: Vec<ResponseComment>,
}

impl Response {
    /// Copy of this response with the comment list replaced
    ///
    /// Every other field is carried over unchanged.
    pub fn with_comments(&self, comments: Vec<ResponseComment>) -> Response {
        Response {
            all_comments: comments,
            ..self.clone()
        }
    }

    /// Number of attached comments
    pub fn comment_count(&self) -> usize {
        self.all_comments.len()
    }

    /// Parse a response from collaborator-supplied JSON
    pub fn from_json(json: &str) -> Result<Response> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize this response to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
