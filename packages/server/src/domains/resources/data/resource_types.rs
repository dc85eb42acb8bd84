//! HTTP-facing input types for resources

use serde::Deserialize;

use crate::common::{EditorId, PageRequest, TopicId};
use crate::domains::resources::query::ResourceFilter;

/// Query string of `GET /api/resources`.
///
/// `topics` is a comma-separated list of topic ids; missing or empty means
/// no topic restriction. `draft` defaults to false (the public catalog).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResourcesParams {
    pub topics: Option<String>,
    pub draft: Option<bool>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl ListResourcesParams {
    pub fn filter(&self) -> Result<ResourceFilter, uuid::Error> {
        let topics = parse_topic_list(self.topics.as_deref().unwrap_or_default())?;
        let base = if self.draft.unwrap_or(false) {
            ResourceFilter::drafts()
        } else {
            ResourceFilter::published()
        };
        Ok(base.with_topics(topics))
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

/// Parse `a,b,,c` into topic ids, skipping empty segments.
pub fn parse_topic_list(raw: &str) -> Result<Vec<TopicId>, uuid::Error> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(TopicId::parse)
        .collect()
}

/// Body of `POST /api/resources/:id/publish`.
#[derive(Debug, Clone, Deserialize)]
pub struct PublishResourceInput {
    pub publisher: EditorId,
}
