//! Resource Catalog Service
//!
//! Create, list and publish use cases over the `resources` table. The pool
//! and the topic lookup are injected by the caller; the service holds no
//! other state.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::{debug, info, warn};

use crate::common::{last_page, EditorId, Pagination, ResourceId};
use crate::domains::resources::errors::CatalogError;
use crate::domains::resources::models::{NewResource, Resource, ResourceState};
use crate::domains::resources::query::{ResourceFilter, ResourceQuery};
use crate::domains::topics::TopicReference;

/// Catalog Page Envelope - one page of a listing plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    pub resources: Vec<Resource>,
    pub page: i64,
    pub per_page: i64,
    pub last_page: i64,
    pub total_count: i64,
}

impl CatalogPage {
    pub fn new(resources: Vec<Resource>, pagination: Pagination, total_count: i64) -> Self {
        Self {
            resources,
            page: pagination.page,
            per_page: pagination.per_page,
            last_page: last_page(total_count, pagination.per_page),
            total_count,
        }
    }
}

#[derive(Clone)]
pub struct ResourceCatalog {
    pool: PgPool,
    topics: Arc<dyn TopicReference>,
}

impl ResourceCatalog {
    pub fn new(pool: PgPool, topics: Arc<dyn TopicReference>) -> Self {
        Self { pool, topics }
    }

    /// Submit a new resource as a draft.
    ///
    /// A referenced topic must exist; otherwise nothing is written.
    pub async fn create(&self, input: NewResource) -> Result<Resource, CatalogError> {
        if let Some(topic) = input.topic {
            if !self.topics.exists(topic).await? {
                warn!(topic_id = %topic, "Rejected resource with unknown topic");
                return Err(CatalogError::UnknownTopic(topic));
            }
        }

        let resource = Resource::create(&input, &self.pool).await.map_err(|err| {
            let err = CatalogError::from_insert(err, input.topic);
            if err.is_domain() {
                warn!(
                    url = %input.url,
                    source = %input.source,
                    error = %err,
                    "Resource rejected"
                );
            }
            err
        })?;

        info!(resource_id = %resource.id, accession = resource.accession, "Resource created");
        Ok(resource)
    }

    /// One page of resources matching `filter`.
    ///
    /// The count and the page are read from a single repeatable-read
    /// snapshot, so `total_count` agrees with the rows returned.
    pub async fn list(
        &self,
        filter: ResourceFilter,
        pagination: Pagination,
    ) -> Result<CatalogPage, CatalogError> {
        debug!(
            draft = filter.draft,
            topics = ?filter.topics.as_ref().map(|t| t.ids()),
            page = pagination.page,
            per_page = pagination.per_page,
            "Listing resources"
        );

        let query = ResourceQuery::new(filter, pagination);

        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let mut page_query = query.page();
        let resources = page_query
            .build_query_as::<Resource>()
            .fetch_all(&mut *tx)
            .await?;

        let mut count_query = query.count();
        let total_count = count_query
            .build_query_scalar::<i64>()
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(CatalogPage::new(resources, pagination, total_count))
    }

    pub async fn find(&self, id: ResourceId) -> Result<Option<Resource>, CatalogError> {
        Ok(Resource::find_by_id_optional(id, &self.pool).await?)
    }

    /// Publish a draft.
    ///
    /// Publishing an already-published resource changes nothing and returns
    /// it as stored: publication time and publisher are written once.
    pub async fn publish(
        &self,
        id: ResourceId,
        publisher: EditorId,
    ) -> Result<Resource, CatalogError> {
        let published = Resource::publish_draft(id, publisher, Utc::now(), &self.pool).await?;
        if let Some(resource) = published {
            info!(resource_id = %id, publisher = %publisher, "Resource published");
            return Ok(resource);
        }

        match Resource::find_by_id_optional(id, &self.pool).await? {
            Some(existing) => {
                if let ResourceState::Published { at, by } = existing.state() {
                    debug!(
                        resource_id = %id,
                        published_at = %at,
                        publisher = %by,
                        "Resource already published"
                    );
                }
                Ok(existing)
            }
            None => {
                warn!(resource_id = %id, "Publish requested for missing resource");
                Err(CatalogError::MissingResource(id))
            }
        }
    }
}
