use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::media_type::MediaType;
use super::schema::Schema;
use crate::error::BuildError;

/// A response definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawResponse")]
pub struct Response {
    description: String,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub content: IndexMap<String, MediaType>,
}

#[derive(Deserialize)]
struct RawResponse {
    description: String,
    #[serde(default)]
    content: IndexMap<String, MediaType>,
}

impl TryFrom<RawResponse> for Response {
    type Error = BuildError;

    fn try_from(raw: RawResponse) -> Result<Self, Self::Error> {
        let mut response = Response::new(raw.description)?;
        response.content = raw.content;
        Ok(response)
    }
}

impl Response {
    /// Create a response. OpenAPI requires a description, so an empty one is
    /// rejected.
    pub fn new(description: impl Into<String>) -> Result<Self, BuildError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(BuildError::InvariantViolation(
                "response description must not be empty".to_string(),
            ));
        }
        Ok(Self {
            description,
            content: IndexMap::new(),
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Set the content for one media type, replacing any previous entry.
    pub fn set_content(&mut self, media_type: impl Into<String>, schema: Arc<Schema>) {
        self.content.insert(media_type.into(), MediaType::new(schema));
    }
}

/// The responses of an operation. A default response is mandatory; status
/// code responses are serialized alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Responses {
    pub default: Response,

    #[serde(flatten)]
    others: IndexMap<String, Response>,
}

impl Responses {
    pub fn new(default: Response) -> Self {
        Self {
            default,
            others: IndexMap::new(),
        }
    }

    /// Set the response for a status code such as `"200"` or `"4XX"`.
    pub fn set_status(
        &mut self,
        status: impl Into<String>,
        response: Response,
    ) -> Result<(), BuildError> {
        let status = status.into();
        if status == "default" {
            return Err(BuildError::InvariantViolation(
                "the default response is set through Responses::new".to_string(),
            ));
        }
        self.others.insert(status, response);
        Ok(())
    }

    pub fn status(&self, status: &str) -> Option<&Response> {
        self.others.get(status)
    }

    pub fn statuses(&self) -> impl Iterator<Item = (&str, &Response)> {
        self.others.iter().map(|(k, v)| (k.as_str(), v))
    }
}
