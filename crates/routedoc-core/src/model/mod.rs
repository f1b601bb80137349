//! The OpenAPI object graph produced by the document builder.

pub mod document;
pub mod media_type;
pub mod operation;
pub mod parameter;
pub mod request_body;
pub mod response;
pub mod schema;

pub use document::{Document, Info, OPENAPI_VERSION, Paths, Tag};
pub use media_type::{APPLICATION_JSON, MediaType};
pub use operation::{Operation, PathItem, normalize_method};
pub use parameter::{Parameter, ParameterLocation};
pub use request_body::RequestBody;
pub use response::{Response, Responses};
pub use schema::{Schema, SchemaType};

/// Serialize a document to pretty-printed JSON.
pub fn to_json(document: &Document) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(document)
}

/// Serialize a document to YAML.
pub fn to_yaml(document: &Document) -> Result<String, serde_yaml_ng::Error> {
    serde_yaml_ng::to_string(document)
}
