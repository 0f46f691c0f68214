//! Host-driven view state

use crate::config::DisplayConfig;
use crate::events::ViewEvent;
use crate::session::CommentEditSession;
use fbview_core::response::{filter_by_section, Response, ResponseSet, SectionScope};
use fbview_core::types::ResponseId;
use fbview_core::{FbviewError, Result};
use tracing::debug;

/// View state for a per-question response list
///
/// Inputs are plain fields; the host mutates them and calls
/// [`ResponseViewState::recompute`] afterwards. This replaces the implicit
/// "on init" / "on input change" hooks of a reactive GUI framework with an
/// explicit step the host controls.
#[derive(Debug, Clone, Default)]
pub struct ResponseViewState {
    /// Question payload, opaque pass-through for the host's presentation
    pub question_details: serde_json::Value,
    /// The response collection as supplied by the host
    pub responses: ResponseSet,
    /// Section filter value; empty means no filtering
    pub section: String,
    /// Matching policy for the section filter
    pub scope: SectionScope,
    /// Display hints, not consumed by the core logic
    pub display: DisplayConfig,
    /// Session-level time-zone display hint, opaque
    pub time_zone: String,
    /// Responses visible under the current filter, in input order
    responses_to_show: Vec<Response>,
}

impl ResponseViewState {
    /// Create a view state over a response collection
    pub fn new(responses: ResponseSet) -> Self {
        Self {
            responses,
            ..Default::default()
        }
        .recompute()
    }

    /// Recompute the visible response list from the current inputs
    ///
    /// Pure: consumes the state and returns the new one.
    pub fn recompute(mut self) -> Self {
        self.responses_to_show =
            filter_by_section(self.responses.responses(), &self.section, self.scope);
        self
    }

    /// Replace the section filter and recompute
    pub fn with_section_filter(mut self, section: impl Into<String>, scope: SectionScope) -> Self {
        self.section = section.into();
        self.scope = scope;
        self.recompute()
    }

    /// Responses visible under the current filter
    pub fn responses_to_show(&self) -> &[Response] {
        &self.responses_to_show
    }

    /// Open a comment edit session for a response in the collection
    ///
    /// Guards id presence up front so a later submission cannot miss.
    pub fn open_comment_editor(&self, id: &ResponseId) -> Result<CommentEditSession> {
        let response = self
            .responses
            .get(id)
            .ok_or_else(|| FbviewError::ResponseNotFound(id.to_string()))?;
        Ok(CommentEditSession::open(response))
    }

    /// Fold a view event back into the state
    ///
    /// `CommentsChanged` replaces the carried response in the collection by
    /// id, then the visible list is recomputed.
    pub fn apply(mut self, event: ViewEvent) -> Result<Self> {
        match event {
            ViewEvent::CommentsChanged(updated) => {
                debug!(
                    "Applying comment change for response {}",
                    updated.response_id
                );
                self.responses.replace(updated)?;
            }
        }
        Ok(self.recompute())
    }
}
