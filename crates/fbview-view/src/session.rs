//! Comment edit sessions
//!
//! Remodels the modal-and-subscription editing pattern as request/response:
//! the host opens a session for one response, lets the user edit the list,
//! then submits it and forwards the resulting event.

use crate::events::ViewEvent;
use fbview_core::comment::EditorComment;
use fbview_core::response::{reconcile, Response};
use fbview_core::types::ResponseId;
use fbview_core::Result;
use tracing::debug;

/// An in-progress edit of one response's comment list
///
/// At most one session per response is active at a time; the host serializes
/// the affordance that opens it.
#[derive(Debug, Clone)]
pub struct CommentEditSession {
    /// Id of the response whose comments are being edited
    response_id: ResponseId,
    /// The editor's current comment list
    comments: Vec<EditorComment>,
}

impl CommentEditSession {
    /// Open an edit session over a response's comments
    pub fn open(response: &Response) -> Self {
        let comments = response
            .all_comments
            .iter()
            .map(EditorComment::from)
            .collect();

        debug!(
            "Opened comment editor for response {}",
            response.response_id
        );

        Self {
            response_id: response.response_id.clone(),
            comments,
        }
    }

    /// Id of the response being edited
    pub fn response_id(&self) -> &ResponseId {
        &self.response_id
    }

    /// The editor's current comment list
    pub fn comments(&self) -> &[EditorComment] {
        &self.comments
    }

    /// Submit an edited comment list
    ///
    /// Reconciles the edits against the response collection, refreshes the
    /// session's own list and returns the event to broadcast, one event per
    /// successful submission. On error the session list is left unchanged.
    pub fn submit(
        &mut self,
        responses: &[Response],
        edited: Vec<EditorComment>,
    ) -> Result<ViewEvent> {
        let updated = reconcile(responses, &self.response_id, &edited)?;
        self.comments = edited;
        Ok(ViewEvent::CommentsChanged(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use fbview_core::comment::ResponseComment;
    use fbview_core::types::CommentId;
    use fbview_core::FbviewError;
    use pretty_assertions::assert_eq;

    fn create_stored_comment(id: i64, text: &str) -> ResponseComment {
        ResponseComment {
            comment_id: CommentId(id),
            comment_giver: "instructor".to_string(),
            comment_text: text.to_string(),
            is_from_feedback_participant: false,
            created_at: Utc.timestamp_millis_opt(1_600_000_000_000).unwrap(),
            updated_at: Utc.timestamp_millis_opt(1_600_000_000_000).unwrap(),
            timezone: "UTC".to_string(),
        }
    }

    fn create_test_response(id: &str, comments: Vec<ResponseComment>) -> Response {
        Response {
            response_id: ResponseId::from_string(id),
            giver: "Alice".to_string(),
            giver_team: String::new(),
            giver_section: "Section A".to_string(),
            recipient: "Bob".to_string(),
            recipient_team: String::new(),
            recipient_section: "Section B".to_string(),
            response_details: serde_json::Value::Null,
            all_comments: comments,
        }
    }

    #[test]
    fn test_open_projects_comments_into_editor_form() {
        let response = create_test_response("r1", vec![create_stored_comment(1, "hello")]);
        let session = CommentEditSession::open(&response);

        assert_eq!(session.response_id(), &response.response_id);
        assert_eq!(session.comments().len(), 1);
        assert_eq!(session.comments()[0].comment_text, "hello");
        assert_eq!(session.comments()[0].edited_at, response.all_comments[0].updated_at);
    }

    #[test]
    fn test_submit_returns_comments_changed_event() {
        let response = create_test_response("r1", vec![create_stored_comment(1, "hello")]);
        let responses = vec![response.clone()];
        let mut session = CommentEditSession::open(&response);

        let mut edited = session.comments().to_vec();
        edited[0].comment_text = "hello, edited".to_string();

        let event = session.submit(&responses, edited.clone()).unwrap();
        let ViewEvent::CommentsChanged(updated) = event;

        assert_eq!(updated.response_id, response.response_id);
        assert_eq!(updated.all_comments[0].comment_text, "hello, edited");

        // The editor's own list is refreshed too
        assert_eq!(session.comments(), edited.as_slice());
    }

    #[test]
    fn test_submit_against_missing_response_keeps_session_list() {
        let response = create_test_response("r1", vec![create_stored_comment(1, "hello")]);
        let mut session = CommentEditSession::open(&response);

        // Collection no longer contains the response
        let err = session.submit(&[], vec![]).unwrap_err();
        assert!(matches!(err, FbviewError::ResponseNotFound(_)));
        assert_eq!(session.comments().len(), 1);
    }
}
