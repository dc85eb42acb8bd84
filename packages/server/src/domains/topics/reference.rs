//! Read-only lookup of topics, as consumed by the catalog.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::common::TopicId;
use crate::domains::topics::models::Topic;

/// Topic lookups the catalog depends on.
///
/// The catalog validates topic references through this trait and never
/// creates, renames or deletes topics.
#[async_trait]
pub trait TopicReference: Send + Sync {
    /// Whether a topic with this id exists.
    async fn exists(&self, id: TopicId) -> Result<bool, sqlx::Error>;

    /// Every topic, for rendering filter chips.
    async fn list(&self) -> Result<Vec<Topic>, sqlx::Error>;
}

/// [`TopicReference`] backed by the `topics` table.
#[derive(Clone)]
pub struct PgTopicReference {
    pool: PgPool,
}

impl PgTopicReference {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TopicReference for PgTopicReference {
    async fn exists(&self, id: TopicId) -> Result<bool, sqlx::Error> {
        Topic::exists(id, &self.pool).await
    }

    async fn list(&self) -> Result<Vec<Topic>, sqlx::Error> {
        Topic::find_all(&self.pool).await
    }
}
