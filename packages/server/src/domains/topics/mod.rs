//! Topics domain - the reference list resources are classified under
//!
//! Topics are managed elsewhere; this domain only exposes lookups.

pub mod models;
pub mod reference;

pub use models::Topic;
pub use reference::{PgTopicReference, TopicReference};
