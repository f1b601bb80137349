use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::operation::{Operation, PathItem};
use crate::error::BuildError;

/// OpenAPI version written into every generated document.
pub const OPENAPI_VERSION: &str = "3.0.2";

/// Info object describing the API. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInfo")]
pub struct Info {
    title: String,
    version: String,
}

#[derive(Deserialize)]
struct RawInfo {
    title: String,
    version: String,
}

impl TryFrom<RawInfo> for Info {
    type Error = BuildError;

    fn try_from(raw: RawInfo) -> Result<Self, Self::Error> {
        Info::new(raw.title, raw.version)
    }
}

impl Info {
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Result<Self, BuildError> {
        let title = title.into();
        let version = version.into();
        if title.trim().is_empty() {
            return Err(BuildError::InvariantViolation(
                "info.title must not be empty".to_string(),
            ));
        }
        if version.trim().is_empty() {
            return Err(BuildError::InvariantViolation(
                "info.version must not be empty".to_string(),
            ));
        }
        Ok(Self { title, version })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

/// Tag definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}

/// Path items keyed by path mask, exactly as declared.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Paths {
    items: IndexMap<String, PathItem>,
}

impl Paths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a path item under `mask`. A second item for the same mask
    /// replaces the first, which is returned. The mask keeps its original
    /// position in iteration order.
    pub fn set_path_item(&mut self, mask: impl Into<String>, item: PathItem) -> Option<PathItem> {
        self.items.insert(mask.into(), item)
    }

    pub fn get(&self, mask: &str) -> Option<&PathItem> {
        self.items.get(mask)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PathItem)> {
        self.items.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Top-level OpenAPI document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub openapi: String,

    pub info: Info,

    pub paths: Paths,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl Document {
    pub fn new(info: Info, paths: Paths) -> Self {
        Self {
            openapi: OPENAPI_VERSION.to_string(),
            info,
            paths,
            tags: Vec::new(),
        }
    }

    pub fn add_tag(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    /// Every operation in the document with its path mask and method key.
    pub fn operations(&self) -> impl Iterator<Item = (&str, &str, &Operation)> {
        self.paths
            .iter()
            .flat_map(|(mask, item)| item.operations().map(move |(m, op)| (mask, m, op)))
    }

    /// Check that no two operations share an `operationId`.
    pub fn validate(&self) -> Result<(), BuildError> {
        let mut seen: HashMap<&str, String> = HashMap::new();
        for (mask, method, op) in self.operations() {
            let location = format!("{} {}", method.to_ascii_uppercase(), mask);
            if let Some(first) = seen.get(op.operation_id()) {
                return Err(BuildError::DuplicateOperationId {
                    operation_id: op.operation_id().to_string(),
                    first: first.clone(),
                    second: location,
                });
            }
            seen.insert(op.operation_id(), location);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::response::{Response, Responses};

    fn item(method: &str, id: &str) -> PathItem {
        let mut item = PathItem::new();
        let op = Operation::new(id, Responses::new(Response::new("OK").unwrap())).unwrap();
        item.set_operation(method, op).unwrap();
        item
    }

    #[test]
    fn test_info_requires_title_and_version() {
        assert!(Info::new("Api", "1.0").is_ok());
        assert!(matches!(
            Info::new("", "1.0"),
            Err(BuildError::InvariantViolation(_))
        ));
        assert!(matches!(
            Info::new("Api", " "),
            Err(BuildError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_deserialized_info_is_checked() {
        let ok: Info = serde_json::from_str(r#"{"title": "Api", "version": "1.0"}"#).unwrap();
        assert_eq!(ok.title(), "Api");

        let err = serde_json::from_str::<Info>(r#"{"title": "", "version": "1.0"}"#).unwrap_err();
        assert!(err.to_string().contains("info.title must not be empty"));
    }

    #[test]
    fn test_paths_last_write_wins() {
        let mut paths = Paths::new();
        assert!(paths.set_path_item("/x", item("get", "1get")).is_none());
        paths.set_path_item("/y", item("get", "2get"));
        let replaced = paths.set_path_item("/x", item("post", "3post"));

        assert!(replaced.unwrap().contains("get"));
        assert_eq!(paths.len(), 2);
        let x = paths.get("/x").unwrap();
        assert!(!x.contains("get"));
        assert!(x.contains("post"));
        assert_eq!(paths.iter().map(|(k, _)| k).collect::<Vec<_>>(), vec!["/x", "/y"]);
    }

    #[test]
    fn test_masks_are_not_normalized() {
        let mut paths = Paths::new();
        paths.set_path_item("/users/", item("get", "1get"));
        paths.set_path_item("/users", item("get", "2get"));
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn test_validate_reports_duplicate_ids() {
        let mut paths = Paths::new();
        paths.set_path_item("/a", item("get", "same"));
        paths.set_path_item("/b", item("post", "same"));
        let doc = Document::new(Info::new("Api", "1.0").unwrap(), paths);

        assert_eq!(
            doc.validate(),
            Err(BuildError::DuplicateOperationId {
                operation_id: "same".to_string(),
                first: "GET /a".to_string(),
                second: "POST /b".to_string(),
            })
        );
    }

    #[test]
    fn test_document_keys() {
        let mut doc = Document::new(Info::new("Api Docs", "2.0.5-beta").unwrap(), Paths::new());
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "openapi": "3.0.2",
                "info": { "title": "Api Docs", "version": "2.0.5-beta" },
                "paths": {},
            })
        );

        doc.add_tag(Tag::new("public"));
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["tags"], serde_json::json!([{ "name": "public" }]));
    }
}
