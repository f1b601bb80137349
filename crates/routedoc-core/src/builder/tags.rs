use indexmap::{IndexMap, IndexSet};

/// Projects an endpoint's tag mapping onto the tag names an operation
/// exposes, dropping keys the router uses for its own bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFilter {
    excluded: IndexSet<String>,
}

impl TagFilter {
    /// Keys the default filter excludes.
    pub const RESERVED: [&'static str; 3] = ["group.ids", "group.paths", "id"];

    pub fn new<I, S>(excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: excluded.into_iter().map(Into::into).collect(),
        }
    }

    /// A filter that keeps every key.
    pub fn none() -> Self {
        Self {
            excluded: IndexSet::new(),
        }
    }

    pub fn is_excluded(&self, key: &str) -> bool {
        self.excluded.contains(key)
    }

    /// The remaining tag names, in source order.
    pub fn project<V>(&self, tags: &IndexMap<String, V>) -> IndexSet<String> {
        tags.keys()
            .filter(|key| !self.is_excluded(key))
            .cloned()
            .collect()
    }
}

impl Default for TagFilter {
    fn default() -> Self {
        Self::new(Self::RESERVED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn tags() -> IndexMap<String, Value> {
        let mut tags = IndexMap::new();
        tags.insert("group.ids".to_string(), json!([1, 2]));
        tags.insert("public".to_string(), json!(true));
        tags.insert("id".to_string(), json!("users.list"));
        tags.insert("group.paths".to_string(), json!(["/api"]));
        tags.insert("users".to_string(), Value::Null);
        tags
    }

    #[test]
    fn test_default_drops_reserved_keys() {
        let projected = TagFilter::default().project(&tags());
        assert_eq!(projected.into_iter().collect::<Vec<_>>(), vec!["public", "users"]);
    }

    #[test]
    fn test_custom_exclusions() {
        let projected = TagFilter::new(["public"]).project(&tags());
        assert_eq!(
            projected.into_iter().collect::<Vec<_>>(),
            vec!["group.ids", "id", "group.paths", "users"]
        );
    }

    #[test]
    fn test_none_keeps_everything() {
        assert_eq!(TagFilter::none().project(&tags()).len(), 5);
    }
}
