pub mod builder;
pub mod config;
pub mod error;
pub mod model;
pub mod registry;

pub use builder::{DocumentBuilder, build_document};
pub use error::{BuildError, LoadError};
pub use model::Document;
