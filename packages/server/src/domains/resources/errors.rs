use thiserror::Error;

use crate::common::{ResourceId, TopicId};

/// Errors raised by the resource catalog.
///
/// The first three variants are domain outcomes the caller can act on.
/// `Database` carries storage failures through unchanged.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Resource already exists")]
    DuplicateResource,

    #[error("Resource not found: {0}")]
    MissingResource(ResourceId),

    #[error("Unknown topic: {0}")]
    UnknownTopic(TopicId),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl CatalogError {
    /// True for domain outcomes, false for storage failures.
    pub fn is_domain(&self) -> bool {
        !matches!(self, CatalogError::Database(_))
    }

    /// Classify a failed resource insert.
    ///
    /// A unique violation is a duplicate submission; a foreign key violation
    /// means the topic vanished after it was validated.
    pub(crate) fn from_insert(err: sqlx::Error, topic: Option<TopicId>) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return CatalogError::DuplicateResource;
            }
            if db_err.is_foreign_key_violation() {
                if let Some(topic) = topic {
                    return CatalogError::UnknownTopic(topic);
                }
            }
        }
        CatalogError::Database(err)
    }
}
