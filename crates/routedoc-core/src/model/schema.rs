use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// A JSON Schema type keyword value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
}

/// The subset of JSON Schema emitted into generated documents.
///
/// Schemas are immutable once built. Media types hold them behind an `Arc`
/// so one schema can back any number of request and response bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "IndexSet::is_empty")]
    pub required: IndexSet<String>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
}

impl Schema {
    pub fn new(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            format: None,
            description: None,
            required: IndexSet::new(),
            properties: IndexMap::new(),
            items: None,
            minimum: None,
        }
    }

    pub fn object() -> Self {
        Self::new(SchemaType::Object)
    }

    pub fn string() -> Self {
        Self::new(SchemaType::String)
    }

    pub fn integer() -> Self {
        Self::new(SchemaType::Integer)
    }

    /// An array whose elements match `items`.
    pub fn array(items: Schema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::new(SchemaType::Array)
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_minimum(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Add an optional property.
    pub fn with_property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    /// Add a property and list it under `required`.
    pub fn with_required_property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        let name = name.into();
        self.required.insert(name.clone());
        self.properties.insert(name, schema);
        self
    }

    pub fn is_required(&self, property: &str) -> bool {
        self.required.contains(property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_property_is_listed_once() {
        let schema = Schema::object()
            .with_required_property("name", Schema::string())
            .with_required_property("name", Schema::string())
            .with_property("age", Schema::integer());
        assert_eq!(schema.required.len(), 1);
        assert!(schema.is_required("name"));
        assert!(!schema.is_required("age"));
        assert_eq!(schema.properties.len(), 2);
    }

    #[test]
    fn test_empty_collections_are_not_serialized() {
        let json = serde_json::to_value(Schema::integer().with_format("int32")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "integer", "format": "int32" })
        );
    }

    #[test]
    fn test_array_items() {
        let json = serde_json::to_value(Schema::array(Schema::string())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "array", "items": { "type": "string" } })
        );
    }
}
