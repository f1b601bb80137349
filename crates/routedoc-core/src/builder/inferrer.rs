use std::sync::Arc;

use crate::model::Schema;
use crate::registry::{Endpoint, EndpointParameter};

/// Supplies the schemas the builder places on request bodies, responses
/// and parameters.
pub trait SchemaInferrer {
    /// Schema for the request and response bodies of one operation. The
    /// returned `Arc` is shared by every media type of that operation.
    fn body_schema(&self, endpoint: &dyn Endpoint, method: &str) -> Arc<Schema>;

    /// Schema for one declared parameter.
    fn parameter_schema(&self, endpoint: &dyn Endpoint, parameter: &EndpointParameter) -> Schema;
}

/// Emits fixed schemas regardless of the endpoint: a sample object body,
/// and `integer`/`int32` for every parameter whatever its declared type.
#[derive(Debug, Clone)]
pub struct PlaceholderInferrer {
    body: Arc<Schema>,
}

impl PlaceholderInferrer {
    pub fn new() -> Self {
        Self {
            body: Arc::new(Self::sample_body()),
        }
    }

    /// Object with a required string `name` and an optional non-negative
    /// integer `age`.
    pub fn sample_body() -> Schema {
        Schema::object()
            .with_required_property("name", Schema::string())
            .with_property(
                "age",
                Schema::integer().with_format("int32").with_minimum(0.0),
            )
    }

    pub fn parameter() -> Schema {
        Schema::integer().with_format("int32")
    }
}

impl Default for PlaceholderInferrer {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaInferrer for PlaceholderInferrer {
    fn body_schema(&self, _endpoint: &dyn Endpoint, _method: &str) -> Arc<Schema> {
        Arc::clone(&self.body)
    }

    fn parameter_schema(&self, _endpoint: &dyn Endpoint, _parameter: &EndpointParameter) -> Schema {
        Self::parameter()
    }
}
