//! Typed ID definitions for catalog entities.
//!
//! ```rust
//! use catalog_core::common::{ResourceId, TopicId};
//!
//! let resource_id = ResourceId::new();
//! let topic_id = TopicId::new();
//!
//! // This would be a compile error:
//! // let wrong: TopicId = resource_id;
//! ```

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for catalog resources (curated links).
pub struct Resource;

/// Marker type for topics (owned by the external topic subsystem).
pub struct Topic;

/// Marker type for editors who publish resources.
pub struct Editor;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

pub type ResourceId = Id<Resource>;

pub type TopicId = Id<Topic>;

/// Identifier of the editor recorded as a resource's publisher.
pub type EditorId = Id<Editor>;
