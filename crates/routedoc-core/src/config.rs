use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::builder::TagFilter;
use crate::error::LoadError;
use crate::model::{APPLICATION_JSON, Tag};

/// Top-level configuration loaded from `.routedoc.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RoutedocConfig {
    pub info: InfoConfig,
    pub media_type: MediaTypeName,
    pub responses: ResponsesConfig,
    pub request_body: RequestBodyConfig,
    pub operations: OperationsConfig,
    pub tags: TagsConfig,
}

/// Document title and version. Not derived from the routes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InfoConfig {
    pub title: String,
    pub version: String,
}

impl Default for InfoConfig {
    fn default() -> Self {
        Self {
            title: "Api Docs".to_string(),
            version: "2.0.5-beta".to_string(),
        }
    }
}

/// Media type used for request and response content.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct MediaTypeName(pub String);

impl Default for MediaTypeName {
    fn default() -> Self {
        Self(APPLICATION_JSON.to_string())
    }
}

impl MediaTypeName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Default response settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ResponsesConfig {
    pub default_description: String,
}

impl Default for ResponsesConfig {
    fn default() -> Self {
        Self {
            default_description: "Response description".to_string(),
        }
    }
}

/// When operations get a request body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestBodyPolicy {
    #[default]
    Never,
    /// Only `post`, `put` and `patch`.
    BodyMethods,
    Always,
}

impl RequestBodyPolicy {
    /// Whether an operation for `method` (already lowercased) gets a body.
    pub fn applies_to(self, method: &str) -> bool {
        match self {
            RequestBodyPolicy::Never => false,
            RequestBodyPolicy::BodyMethods => matches!(method, "post" | "put" | "patch"),
            RequestBodyPolicy::Always => true,
        }
    }
}

/// Request body settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RequestBodyConfig {
    pub attach: RequestBodyPolicy,
    pub description: Option<String>,
    pub required: bool,
}

impl Default for RequestBodyConfig {
    fn default() -> Self {
        Self {
            attach: RequestBodyPolicy::Never,
            description: Some("Request body description".to_string()),
            required: true,
        }
    }
}

/// Text applied to every generated operation. Set a field to `~` to leave
/// it out of the document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OperationsConfig {
    pub summary: Option<String>,
    pub description: Option<String>,
}

impl Default for OperationsConfig {
    fn default() -> Self {
        Self {
            summary: Some("Short description".to_string()),
            description: Some("Long description".to_string()),
        }
    }
}

/// Tag projection and global tag declarations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TagsConfig {
    /// Endpoint tag keys that are router bookkeeping, not tags.
    pub exclude: Vec<String>,
    /// Tags declared at the document level.
    pub global: Vec<Tag>,
}

impl Default for TagsConfig {
    fn default() -> Self {
        Self {
            exclude: TagFilter::RESERVED.iter().map(|s| s.to_string()).collect(),
            global: Vec::new(),
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".routedoc.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<RoutedocConfig>, LoadError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let config: RoutedocConfig = serde_yaml_ng::from_str(&content)?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# routedoc configuration
info:
  title: Api Docs
  version: 2.0.5-beta

media_type: application/json

responses:
  default_description: Response description

request_body:
  attach: never         # never | body_methods | always
  description: Request body description
  required: true

operations:
  summary: Short description      # ~ to omit
  description: Long description

tags:
  exclude:              # endpoint tag keys that are not real tags
    - group.ids
    - group.paths
    - id
  global: []
    # - name: public
    #   description: Endpoints without authentication
"#
}
