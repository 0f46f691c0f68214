//! Ordered response collection with id lookup

use super::model::Response;
use crate::error::{FbviewError, Result};
use crate::types::ResponseId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Insertion-ordered collection of responses with unique ids
///
/// Display order is part of the contract: iteration yields responses in the
/// order they were inserted. Ids and counts never change except through
/// [`ResponseSet::push`] and [`ResponseSet::replace`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResponseSet {
    /// Responses in display order
    responses: Vec<Response>,
    /// Position lookup by response id
    #[serde(skip)]
    by_id: HashMap<ResponseId, usize>,
}

impl ResponseSet {
    /// Create a new empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from responses, rejecting duplicate ids
    pub fn from_responses(responses: Vec<Response>) -> Result<Self> {
        let mut set = Self::new();
        for response in responses {
            set.push(response)?;
        }
        Ok(set)
    }

    /// Append a response, rejecting duplicate ids
    pub fn push(&mut self, response: Response) -> Result<()> {
        if self.by_id.contains_key(&response.response_id) {
            return Err(FbviewError::Validation(format!(
                "Response with ID {} already exists",
                response.response_id
            )));
        }
        self.by_id
            .insert(response.response_id.clone(), self.responses.len());
        self.responses.push(response);
        Ok(())
    }

    /// Get a response by id
    pub fn get(&self, id: &ResponseId) -> Option<&Response> {
        self.by_id.get(id).map(|&pos| &self.responses[pos])
    }

    /// Check whether a response id is present
    pub fn contains(&self, id: &ResponseId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Replace the response carrying the same id, returning the displaced one
    pub fn replace(&mut self, response: Response) -> Result<Response> {
        let pos = *self
            .by_id
            .get(&response.response_id)
            .ok_or_else(|| FbviewError::ResponseNotFound(response.response_id.to_string()))?;
        Ok(std::mem::replace(&mut self.responses[pos], response))
    }

    /// Responses in display order
    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    /// Iterate responses in display order
    pub fn iter(&self) -> impl Iterator<Item = &Response> {
        self.responses.iter()
    }

    /// Number of responses
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

// Custom deserialization to rebuild the id index and re-check uniqueness
impl<'de> Deserialize<'de> for ResponseSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ResponseSetHelper {
            responses: Vec<Response>,
        }

        let helper = ResponseSetHelper::deserialize(deserializer)?;
        ResponseSet::from_responses(helper.responses).map_err(serde::de::Error::custom)
    }
}
