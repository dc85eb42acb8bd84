//! Resources domain - the curated link catalog
//!
//! Key pieces:
//! - `query`: builds the filtered count + page statements
//! - `catalog`: create / list / publish use cases
//! - `models`: the `Resource` row and its draft -> published lifecycle

pub mod catalog;
pub mod data;
pub mod errors;
pub mod models;
pub mod query;

pub use catalog::{CatalogPage, ResourceCatalog};
pub use data::{ListResourcesParams, PublishResourceInput};
pub use errors::CatalogError;
pub use models::{NewResource, Resource, ResourceState};
pub use query::{ResourceFilter, ResourceQuery, TopicFilter};
