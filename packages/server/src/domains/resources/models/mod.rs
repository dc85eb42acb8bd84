//! Resource domain models

pub mod resource;

pub use resource::{NewResource, Resource, ResourceState};
