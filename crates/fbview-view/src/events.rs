//! Outbound view events

use fbview_core::response::Response;

/// Events emitted by the view toward the host
#[derive(Debug, Clone)]
pub enum ViewEvent {
    /// A response's comment list was reconciled; carries the full updated
    /// response for the host to broadcast upward
    CommentsChanged(Response),
}
