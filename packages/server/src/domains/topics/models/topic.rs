use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::TopicId;

/// Topic a resource can be classified under.
///
/// Topics are owned by the topic subsystem; the catalog only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Topic {
    pub id: TopicId,
    pub name: String,
}

impl Topic {
    /// All topics, alphabetical.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT id, name FROM topics ORDER BY name ASC")
            .fetch_all(pool)
            .await
    }

    pub async fn exists(id: TopicId, pool: &PgPool) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM topics WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
