//! Resource domain data types (HTTP inputs)

pub mod resource_types;

pub use resource_types::{parse_topic_list, ListResourcesParams, PublishResourceInput};
