use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::media_type::MediaType;
use super::schema::Schema;

/// A request body definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub content: IndexMap<String, MediaType>,

    #[serde(default)]
    pub required: bool,
}

impl RequestBody {
    /// A body with a single media type entry.
    pub fn new(media_type: impl Into<String>, schema: Arc<Schema>) -> Self {
        let mut content = IndexMap::new();
        content.insert(media_type.into(), MediaType::new(schema));
        Self {
            description: None,
            content,
            required: false,
        }
    }
}
