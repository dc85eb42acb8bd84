//! Test fixtures for creating test data.
//!
//! Topics are owned by another subsystem, so they are inserted with plain SQL.

use anyhow::Result;
use catalog_core::common::{EditorId, TopicId};
use catalog_core::domains::resources::{NewResource, Resource, ResourceCatalog};
use sqlx::PgPool;

pub async fn create_test_topic(pool: &PgPool, name: &str) -> Result<TopicId> {
    let id = TopicId::new();
    sqlx::query("INSERT INTO topics (id, name) VALUES ($1, $2)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await?;
    Ok(id)
}

pub fn new_resource(title: &str, topic: Option<TopicId>) -> NewResource {
    let slug = title.to_lowercase().replace(' ', "-");
    NewResource {
        title: title.to_string(),
        description: Some(format!("All about {}", title)),
        url: format!("https://example.com/{}", slug),
        source: "fixture".to_string(),
        topic,
    }
}

pub async fn create_test_draft(
    catalog: &ResourceCatalog,
    title: &str,
    topic: Option<TopicId>,
) -> Result<Resource> {
    Ok(catalog.create(new_resource(title, topic)).await?)
}

pub async fn create_test_published(
    catalog: &ResourceCatalog,
    title: &str,
    topic: Option<TopicId>,
) -> Result<Resource> {
    let draft = create_test_draft(catalog, title, topic).await?;
    Ok(catalog.publish(draft.id, EditorId::new()).await?)
}

pub async fn count_resources(pool: &PgPool) -> Result<i64> {
    Ok(sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM resources")
        .fetch_one(pool)
        .await?)
}
