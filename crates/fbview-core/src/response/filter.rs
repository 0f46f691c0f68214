//! Section-scope filtering of responses

use super::model::Response;
use crate::error::FbviewError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Policy for matching a response against a section filter
///
/// The four scopes are exhaustive; adding a variant forces every match site
/// to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectionScope {
    /// Giver or recipient belongs to the section
    Either,
    /// The giver belongs to the section
    Giver,
    /// The recipient belongs to the section
    Evaluee,
    /// Both giver and recipient belong to the section
    Both,
}

impl SectionScope {
    /// Check whether a response is visible under this scope for a section
    pub fn matches(&self, response: &Response, section: &str) -> bool {
        match self {
            SectionScope::Either => {
                response.giver_section == section || response.recipient_section == section
            }
            SectionScope::Giver => response.giver_section == section,
            SectionScope::Evaluee => response.recipient_section == section,
            SectionScope::Both => {
                response.giver_section == section && response.recipient_section == section
            }
        }
    }
}

impl Default for SectionScope {
    fn default() -> Self {
        SectionScope::Either
    }
}

impl fmt::Display for SectionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionScope::Either => write!(f, "EITHER"),
            SectionScope::Giver => write!(f, "GIVER"),
            SectionScope::Evaluee => write!(f, "EVALUEE"),
            SectionScope::Both => write!(f, "BOTH"),
        }
    }
}

impl FromStr for SectionScope {
    type Err = FbviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EITHER" => Ok(SectionScope::Either),
            "GIVER" => Ok(SectionScope::Giver),
            "EVALUEE" => Ok(SectionScope::Evaluee),
            "BOTH" => Ok(SectionScope::Both),
            _ => Err(FbviewError::Validation(format!(
                "Unknown section scope: {}",
                s
            ))),
        }
    }
}

/// Filter responses down to those visible for a section
///
/// An empty `section` disables filtering entirely. The relative order of the
/// surviving responses is preserved and the input is left untouched.
pub fn filter_by_section(
    responses: &[Response],
    section: &str,
    scope: SectionScope,
) -> Vec<Response> {
    if section.is_empty() {
        return responses.to_vec();
    }

    let visible: Vec<Response> = responses
        .iter()
        .filter(|response| scope.matches(response, section))
        .cloned()
        .collect();

    debug!(
        "Showing {} of {} responses for section '{}' under scope {}",
        visible.len(),
        responses.len(),
        section,
        scope
    );

    visible
}
