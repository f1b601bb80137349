use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Deserializer, Serialize};

use super::parameter::Parameter;
use super::request_body::RequestBody;
use super::response::Responses;
use crate::error::BuildError;

/// An API operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    #[serde(rename = "operationId", deserialize_with = "non_empty_operation_id")]
    operation_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "IndexSet::is_empty")]
    pub tags: IndexSet<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,

    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,

    pub responses: Responses,

    #[serde(default)]
    pub deprecated: bool,
}

impl Operation {
    pub fn new(operation_id: impl Into<String>, responses: Responses) -> Result<Self, BuildError> {
        let operation_id = operation_id.into();
        if operation_id.is_empty() {
            return Err(BuildError::InvariantViolation(
                "operationId must not be empty".to_string(),
            ));
        }
        Ok(Self {
            operation_id,
            summary: None,
            description: None,
            tags: IndexSet::new(),
            parameters: Vec::new(),
            request_body: None,
            responses,
            deprecated: false,
        })
    }

    pub fn operation_id(&self) -> &str {
        &self.operation_id
    }

    pub fn set_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
    }

    /// Append a parameter, keeping declaration order.
    pub fn push_parameter(&mut self, parameter: Parameter) {
        self.parameters.push(parameter);
    }
}

fn non_empty_operation_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let id = String::deserialize(deserializer)?;
    if id.is_empty() {
        return Err(serde::de::Error::custom("operationId must not be empty"));
    }
    Ok(id)
}

/// Normalize an HTTP method name the way path item keys store it.
pub fn normalize_method(method: &str) -> String {
    method.trim().to_ascii_lowercase()
}

/// A path item, containing operations keyed by lowercase HTTP method.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(
    try_from = "IndexMap<String, Operation>",
    into = "IndexMap<String, Operation>"
)]
pub struct PathItem {
    operations: IndexMap<String, Operation>,
}

impl TryFrom<IndexMap<String, Operation>> for PathItem {
    type Error = BuildError;

    fn try_from(operations: IndexMap<String, Operation>) -> Result<Self, Self::Error> {
        let mut item = PathItem::new();
        for (method, operation) in operations {
            item.set_operation(&method, operation)?;
        }
        Ok(item)
    }
}

impl From<PathItem> for IndexMap<String, Operation> {
    fn from(item: PathItem) -> Self {
        item.operations
    }
}

impl PathItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an operation under `method`, lowercased. Returns the operation
    /// it replaces, if any.
    pub fn set_operation(
        &mut self,
        method: &str,
        operation: Operation,
    ) -> Result<Option<Operation>, BuildError> {
        let key = normalize_method(method);
        if key.is_empty() {
            return Err(BuildError::InvariantViolation(
                "HTTP method must not be empty".to_string(),
            ));
        }
        Ok(self.operations.insert(key, operation))
    }

    /// Look up an operation by method, in any casing.
    pub fn operation(&self, method: &str) -> Option<&Operation> {
        self.operations.get(&normalize_method(method))
    }

    pub fn contains(&self, method: &str) -> bool {
        self.operations.contains_key(&normalize_method(method))
    }

    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.operations.keys().map(String::as_str)
    }

    pub fn operations(&self) -> impl Iterator<Item = (&str, &Operation)> {
        self.operations.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
