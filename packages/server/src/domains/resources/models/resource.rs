//! Resource model - a curated link in the public catalog
//!
//! A resource is submitted as a draft and becomes publicly visible once an
//! editor publishes it. Publishing is one-way: there is no path back to draft.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{EditorId, ResourceId, TopicId};

/// Columns selected for every resource read, with the topic name joined in.
///
/// Expects `resources` aliased as `r` and `topics` left-joined as `t`.
pub(crate) const RESOURCE_COLUMNS: &str = "r.id, r.accession, r.title, r.description, r.url, \
     r.source, r.topic, t.name AS topic_name, r.draft, r.publication, r.publisher";

/// Resource - one catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: ResourceId,

    /// Creation-order marker; the stable sort key for listings.
    pub accession: i64,

    // Core content
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub source: String,

    // Classification (topic_name is joined for display)
    pub topic: Option<TopicId>,
    pub topic_name: Option<String>,

    // Lifecycle
    pub draft: bool,
    pub publication: Option<DateTime<Utc>>,
    pub publisher: Option<EditorId>,
}

/// Where a resource is in its draft -> published lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceState {
    Draft,
    Published {
        at: DateTime<Utc>,
        by: EditorId,
    },
}

/// Fields accepted when a resource is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewResource {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    pub source: String,
    #[serde(default)]
    pub topic: Option<TopicId>,
}

impl Resource {
    /// Lifecycle state derived from the draft flag and publication fields.
    ///
    /// The store's check constraints keep `draft == false` in step with both
    /// `publication` and `publisher` being set.
    pub fn state(&self) -> ResourceState {
        match (self.draft, self.publication, self.publisher) {
            (false, Some(at), Some(by)) => ResourceState::Published { at, by },
            _ => ResourceState::Draft,
        }
    }

    /// Find resource by ID (optional)
    pub async fn find_by_id_optional(
        id: ResourceId,
        pool: &PgPool,
    ) -> Result<Option<Self>, sqlx::Error> {
        let sql = format!(
            "SELECT {RESOURCE_COLUMNS} FROM resources r \
             LEFT JOIN topics t ON t.id = r.topic \
             WHERE r.id = $1"
        );
        sqlx::query_as::<_, Self>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new draft.
    ///
    /// Uniqueness and topic foreign-key violations surface as raw
    /// `sqlx::Error`s; the catalog service classifies them.
    pub async fn create(input: &NewResource, pool: &PgPool) -> Result<Self, sqlx::Error> {
        let sql = format!(
            "WITH r AS ( \
                 INSERT INTO resources (id, title, description, url, source, topic) \
                 VALUES ($1, $2, $3, $4, $5, $6) \
                 RETURNING * \
             ) \
             SELECT {RESOURCE_COLUMNS} FROM r LEFT JOIN topics t ON t.id = r.topic"
        );
        sqlx::query_as::<_, Self>(&sql)
            .bind(ResourceId::new())
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.url)
            .bind(&input.source)
            .bind(input.topic)
            .fetch_one(pool)
            .await
    }

    /// Move a draft to published.
    ///
    /// Returns `None` when no draft with this id exists, either because the id
    /// is unknown or because the resource is already published.
    pub async fn publish_draft(
        id: ResourceId,
        publisher: EditorId,
        publication: DateTime<Utc>,
        pool: &PgPool,
    ) -> Result<Option<Self>, sqlx::Error> {
        let sql = format!(
            "WITH r AS ( \
                 UPDATE resources \
                 SET draft = FALSE, publication = $2, publisher = $3 \
                 WHERE id = $1 AND draft \
                 RETURNING * \
             ) \
             SELECT {RESOURCE_COLUMNS} FROM r LEFT JOIN topics t ON t.id = r.topic"
        );
        sqlx::query_as::<_, Self>(&sql)
            .bind(id)
            .bind(publication)
            .bind(publisher)
            .fetch_optional(pool)
            .await
    }
}
