use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::schema::Schema;

/// The media type most documents are built around.
pub const APPLICATION_JSON: &str = "application/json";

/// A media type object. The schema is shared, not owned: cloning a
/// `MediaType` clones the `Arc`, never the schema tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    pub schema: Arc<Schema>,
}

impl MediaType {
    pub fn new(schema: Arc<Schema>) -> Self {
        Self { schema }
    }
}
