//! Assembles an OpenAPI [`Document`] from a [`RouteRegistry`].

pub mod inferrer;
pub mod tags;

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use log::{debug, warn};

use crate::config::RoutedocConfig;
use crate::error::BuildError;
use crate::model::{
    Document, Info, Operation, Parameter, ParameterLocation, PathItem, Paths, RequestBody,
    Response, Responses, normalize_method,
};
use crate::registry::{Endpoint, RouteRegistry};

pub use inferrer::{PlaceholderInferrer, SchemaInferrer};
pub use tags::TagFilter;

/// Build a document with the default configuration.
pub fn build_document<R: RouteRegistry + ?Sized>(registry: &R) -> Result<Document, BuildError> {
    DocumentBuilder::default().build(registry)
}

/// Builds documents from route registries.
///
/// The builder holds only configuration. Every call to [`build`] allocates a
/// fresh document, so one builder can serve any number of registries.
///
/// [`build`]: DocumentBuilder::build
pub struct DocumentBuilder {
    config: RoutedocConfig,
    tag_filter: TagFilter,
    inferrer: Box<dyn SchemaInferrer + Send + Sync>,
}

impl DocumentBuilder {
    pub fn new(config: RoutedocConfig) -> Self {
        let tag_filter = TagFilter::new(config.tags.exclude.iter().cloned());
        Self {
            config,
            tag_filter,
            inferrer: Box::new(PlaceholderInferrer::new()),
        }
    }

    /// Replace the placeholder schemas with another inferrer.
    pub fn with_inferrer(mut self, inferrer: impl SchemaInferrer + Send + Sync + 'static) -> Self {
        self.inferrer = Box::new(inferrer);
        self
    }

    /// Override the tag filter derived from `tags.exclude`.
    pub fn with_tag_filter(mut self, tag_filter: TagFilter) -> Self {
        self.tag_filter = tag_filter;
        self
    }

    pub fn config(&self) -> &RoutedocConfig {
        &self.config
    }

    /// Build a document from every endpoint of `registry`, in enumeration
    /// order. Endpoints sharing a path mask replace one another.
    pub fn build<R: RouteRegistry + ?Sized>(&self, registry: &R) -> Result<Document, BuildError> {
        let info = Info::new(&self.config.info.title, &self.config.info.version)?;
        let mut document = Document::new(info, Paths::new());
        let mut seen_ids: HashMap<String, String> = HashMap::new();

        for (index, endpoint) in registry.endpoints().into_iter().enumerate() {
            let endpoint_id = index + 1;
            let mask = endpoint.path_mask();
            debug!("endpoint {endpoint_id}: {mask}");

            let item = self.build_path_item(endpoint_id, endpoint, &mut seen_ids)?;
            if document.paths.set_path_item(mask, item).is_some() {
                warn!("path {mask} declared again by endpoint {endpoint_id}, replacing it");
            }
        }

        for tag in &self.config.tags.global {
            document.add_tag(tag.clone());
        }

        debug!(
            "built document with {} paths and {} operations",
            document.paths.len(),
            document.operations().count()
        );
        Ok(document)
    }

    fn build_path_item(
        &self,
        endpoint_id: usize,
        endpoint: &dyn Endpoint,
        seen_ids: &mut HashMap<String, String>,
    ) -> Result<PathItem, BuildError> {
        let mask = endpoint.path_mask();
        let mut item = PathItem::new();

        for raw_method in endpoint.methods() {
            let method = normalize_method(raw_method);
            if method.is_empty() {
                return Err(BuildError::InvariantViolation(format!(
                    "endpoint {mask} declares an empty HTTP method"
                )));
            }
            if item.contains(&method) {
                warn!("endpoint {mask} declares {raw_method} more than once, keeping the first");
                continue;
            }

            let operation = self.build_operation(endpoint_id, endpoint, &method)?;
            let location = format!("{raw_method} {mask}");
            match seen_ids.entry(operation.operation_id().to_string()) {
                Entry::Occupied(first) => {
                    return Err(BuildError::DuplicateOperationId {
                        operation_id: operation.operation_id().to_string(),
                        first: first.get().clone(),
                        second: location,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(location);
                }
            }

            debug!("  {} -> {}", method, operation.operation_id());
            item.set_operation(&method, operation)?;
        }

        Ok(item)
    }

    /// `method` is already normalized; it forms both the path item key and
    /// the tail of the operation id.
    fn build_operation(
        &self,
        endpoint_id: usize,
        endpoint: &dyn Endpoint,
        method: &str,
    ) -> Result<Operation, BuildError> {
        let media_type = self.config.media_type.as_str();
        let schema = self.inferrer.body_schema(endpoint, method);

        let mut default = Response::new(&self.config.responses.default_description)?;
        default.set_content(media_type, Arc::clone(&schema));

        let mut operation = Operation::new(
            operation_id(endpoint_id, method),
            Responses::new(default),
        )?;
        operation.tags = self.tag_filter.project(endpoint.tags());
        operation.summary = self.config.operations.summary.clone();
        operation.description = self.config.operations.description.clone();

        for declared in endpoint.parameters() {
            let schema = self.inferrer.parameter_schema(endpoint, declared);
            operation.push_parameter(
                Parameter::new(&declared.name, ParameterLocation::Query, schema)
                    .with_description(declared.description.clone()),
            );
        }

        let body_config = &self.config.request_body;
        if body_config.attach.applies_to(method) {
            let mut body = RequestBody::new(media_type, schema);
            body.description = body_config.description.clone();
            body.required = body_config.required;
            operation.request_body = Some(body);
        }

        Ok(operation)
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new(RoutedocConfig::default())
    }
}

/// The id of the operation for `method` on the `endpoint_id`-th endpoint.
/// Endpoint ids are never reused, so ids are unique per normalized method.
pub fn operation_id(endpoint_id: usize, method: &str) -> String {
    format!("{endpoint_id}{}", normalize_method(method))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_id_uses_normalized_method() {
        assert_eq!(operation_id(1, "GET"), "1get");
        assert_eq!(operation_id(12, " Post "), "12post");
        assert_eq!(operation_id(3, "delete"), "3delete");
    }

    #[test]
    fn test_builder_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DocumentBuilder>();
    }

    #[test]
    fn test_builder_takes_exclusions_from_config() {
        let mut config = RoutedocConfig::default();
        config.tags.exclude = vec!["internal".to_string()];
        let builder = DocumentBuilder::new(config);
        assert!(builder.tag_filter.is_excluded("internal"));
        assert!(!builder.tag_filter.is_excluded("id"));
    }
}
