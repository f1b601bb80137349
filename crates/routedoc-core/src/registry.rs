//! Read-only view over the route source a document is generated from.
//!
//! The builder only ever talks to [`RouteRegistry`] and [`Endpoint`]. Any
//! router can be documented by implementing them; [`RouteTable`] is the
//! implementation used for route files on disk.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// A parameter declared on an endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointParameter {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Declared semantic type, e.g. `int` or `string`. Only consulted by
    /// schema inferrers that care about it.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,
}

impl EndpointParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            param_type: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One routable endpoint.
pub trait Endpoint {
    /// HTTP method names, in any casing.
    fn methods(&self) -> &[String];

    /// The path mask, e.g. `/users/{id}`.
    fn path_mask(&self) -> &str;

    /// Declared parameters, in declaration order.
    fn parameters(&self) -> &[EndpointParameter];

    /// Tag mapping. Some keys may be router bookkeeping rather than tags.
    fn tags(&self) -> &IndexMap<String, serde_json::Value>;
}

/// Enumerates endpoints in a stable order.
pub trait RouteRegistry {
    fn endpoints(&self) -> Vec<&dyn Endpoint>;
}

/// An endpoint held in memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEndpoint {
    pub mask: String,

    #[serde(default)]
    pub methods: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<EndpointParameter>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub tags: IndexMap<String, serde_json::Value>,
}

impl RouteEndpoint {
    pub fn new<I, S>(mask: impl Into<String>, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mask: mask.into(),
            methods: methods.into_iter().map(Into::into).collect(),
            parameters: Vec::new(),
            tags: IndexMap::new(),
        }
    }

    pub fn with_parameter(mut self, parameter: EndpointParameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_tag(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.tags.insert(name.into(), value);
        self
    }
}

impl Endpoint for RouteEndpoint {
    fn methods(&self) -> &[String] {
        &self.methods
    }

    fn path_mask(&self) -> &str {
        &self.mask
    }

    fn parameters(&self) -> &[EndpointParameter] {
        &self.parameters
    }

    fn tags(&self) -> &IndexMap<String, serde_json::Value> {
        &self.tags
    }
}

/// A route registry backed by a list of endpoints, in file order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteTable {
    #[serde(default)]
    pub endpoints: Vec<RouteEndpoint>,
}

impl RouteTable {
    pub fn new(endpoints: Vec<RouteEndpoint>) -> Self {
        Self { endpoints }
    }

    pub fn push(&mut self, endpoint: RouteEndpoint) {
        self.endpoints.push(endpoint);
    }
}

impl RouteRegistry for RouteTable {
    fn endpoints(&self) -> Vec<&dyn Endpoint> {
        self.endpoints.iter().map(|e| e as &dyn Endpoint).collect()
    }
}

/// Load a route table from YAML.
pub fn from_yaml(input: &str) -> Result<RouteTable, LoadError> {
    let table: RouteTable = serde_yaml_ng::from_str(input)?;
    validate_table(&table)?;
    Ok(table)
}

/// Load a route table from JSON.
pub fn from_json(input: &str) -> Result<RouteTable, LoadError> {
    let table: RouteTable = serde_json::from_str(input)?;
    validate_table(&table)?;
    Ok(table)
}

fn validate_table(table: &RouteTable) -> Result<(), LoadError> {
    for (i, endpoint) in table.endpoints.iter().enumerate() {
        if endpoint.mask.is_empty() {
            return Err(LoadError::MissingField(format!("endpoints[{i}].mask")));
        }
    }
    Ok(())
}
