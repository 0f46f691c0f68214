//! Reconciliation of edited comment lists into their owning response

use super::model::Response;
use super::set::ResponseSet;
use crate::comment::{EditorComment, ResponseComment};
use crate::error::{FbviewError, Result};
use crate::types::ResponseId;
use tracing::debug;

/// Merge an edited comment list back into its owning response
///
/// Locates `target` in `responses`, projects every editor comment into the
/// stored form and returns a new response equal to the located one except
/// for the replaced comment list. The input slice is left untouched; callers
/// that want the collection updated use [`ResponseSet::reconcile_comments`].
pub fn reconcile(
    responses: &[Response],
    target: &ResponseId,
    edited: &[EditorComment],
) -> Result<Response> {
    let response = responses
        .iter()
        .find(|response| &response.response_id == target)
        .ok_or_else(|| FbviewError::ResponseNotFound(target.to_string()))?;

    let comments: Vec<ResponseComment> = edited.iter().map(ResponseComment::from).collect();

    debug!(
        "Reconciled {} comments into response {}",
        comments.len(),
        target
    );

    Ok(response.with_comments(comments))
}

impl ResponseSet {
    /// Reconcile edited comments into the stored response with `target` id
    ///
    /// Replaces the stored response in place and returns a clone of the
    /// updated record for broadcasting to the host.
    pub fn reconcile_comments(
        &mut self,
        target: &ResponseId,
        edited: &[EditorComment],
    ) -> Result<Response> {
        let updated = reconcile(self.responses(), target, edited)?;
        self.replace(updated.clone())?;
        Ok(updated)
    }
}
