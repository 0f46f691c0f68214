//! Response model, section filtering and comment reconciliation

pub mod filter;
pub mod model;
pub mod reconcile;
pub mod set;

pub use filter::{filter_by_section, SectionScope};
pub use model::Response;
pub use reconcile::reconcile;
pub use set::ResponseSet;
