//! fbview-view - Host-driven view state for fbview
//!
//! Sits on top of `fbview-core` and models what the GUI host needs: a view
//! state with an explicit recompute step, comment edit sessions, and the
//! outbound event carrying reconciled responses.

pub mod config;
pub mod events;
pub mod session;
pub mod state;

pub use config::DisplayConfig;
pub use events::ViewEvent;
pub use session::CommentEditSession;
pub use state::ResponseViewState;
