//! Resource Query Builder
//!
//! Turns a [`ResourceFilter`] plus [`Pagination`] into the two statements a
//! catalog listing needs: a row count and one page of rows. Both are built
//! from the same predicate list, so they always filter identically.
//!
//! The topic filter is an `Option<TopicFilter>` and a `TopicFilter` can never
//! be empty: "no topic restriction" and "restrict to these topics" are
//! different types, and there is no way to express "match no topic".

use std::collections::HashSet;

use sqlx::{Postgres, QueryBuilder};

use crate::common::{Pagination, TopicId};
use crate::domains::resources::models::resource::RESOURCE_COLUMNS;

/// Non-empty set of topics a listing is restricted to.
///
/// Keeps first-seen order and drops duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicFilter(Vec<TopicId>);

impl TopicFilter {
    /// Returns `None` for an empty input, meaning "no topic restriction".
    pub fn new(ids: impl IntoIterator<Item = TopicId>) -> Option<Self> {
        let mut seen = HashSet::new();
        let unique: Vec<TopicId> = ids.into_iter().filter(|id| seen.insert(*id)).collect();
        (!unique.is_empty()).then_some(Self(unique))
    }

    pub fn ids(&self) -> &[TopicId] {
        &self.0
    }
}

/// Which resources a listing covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFilter {
    pub draft: bool,
    pub topics: Option<TopicFilter>,
}

impl Default for ResourceFilter {
    fn default() -> Self {
        Self::published()
    }
}

impl ResourceFilter {
    /// Published resources, any topic.
    pub fn published() -> Self {
        Self {
            draft: false,
            topics: None,
        }
    }

    /// Drafts awaiting publication, any topic.
    pub fn drafts() -> Self {
        Self {
            draft: true,
            topics: None,
        }
    }

    /// Restrict to the given topics. An empty list leaves the filter open.
    pub fn with_topics(mut self, ids: impl IntoIterator<Item = TopicId>) -> Self {
        self.topics = TopicFilter::new(ids);
        self
    }

    /// The base draft predicate followed by any optional ones.
    fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = vec![Predicate::DraftIs(self.draft)];
        if let Some(topics) = &self.topics {
            predicates.push(Predicate::TopicIn(topics.ids().to_vec()));
        }
        predicates
    }
}

/// One `WHERE` clause term over the `resources r` alias.
#[derive(Debug, Clone)]
enum Predicate {
    DraftIs(bool),
    TopicIn(Vec<TopicId>),
}

impl Predicate {
    fn push_to(self, builder: &mut QueryBuilder<'static, Postgres>) {
        match self {
            Predicate::DraftIs(draft) => {
                builder.push("r.draft = ").push_bind(draft);
            }
            Predicate::TopicIn(ids) => {
                builder.push("r.topic = ANY(").push_bind(ids).push(")");
            }
        }
    }
}

/// A filtered, paginated listing: the count and page statements share one
/// filter snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceQuery {
    filter: ResourceFilter,
    limit: i64,
    offset: i64,
}

impl ResourceQuery {
    pub fn new(filter: ResourceFilter, pagination: Pagination) -> Self {
        Self {
            filter,
            limit: pagination.limit(),
            offset: pagination.offset(),
        }
    }

    /// `SELECT COUNT(*)` over every matching row.
    pub fn count(&self) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM resources r");
        self.push_where(&mut builder);
        builder
    }

    /// One page of matching rows, newest accession first.
    pub fn page(&self) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(format!(
            "SELECT {RESOURCE_COLUMNS} FROM resources r LEFT JOIN topics t ON t.id = r.topic"
        ));
        self.push_where(&mut builder);
        builder
            .push(" ORDER BY r.accession DESC LIMIT ")
            .push_bind(self.limit)
            .push(" OFFSET ")
            .push_bind(self.offset);
        builder
    }

    fn push_where(&self, builder: &mut QueryBuilder<'static, Postgres>) {
        for (index, predicate) in self.filter.predicates().into_iter().enumerate() {
            builder.push(if index == 0 { " WHERE " } else { " AND " });
            predicate.push_to(builder);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PageRequest;

    fn first_page() -> Pagination {
        Pagination::default()
    }

    #[test]
    fn test_topic_filter_rejects_empty() {
        assert_eq!(TopicFilter::new(Vec::new()), None);
    }

    #[test]
    fn test_topic_filter_dedupes_in_order() {
        let (a, b) = (TopicId::new(), TopicId::new());
        let filter = TopicFilter::new([b, a, b]).unwrap();
        assert_eq!(filter.ids(), &[b, a]);
    }

    #[test]
    fn test_topic_filter_dedupes_long_lists() {
        let ids: Vec<TopicId> = (0..5_000).map(|_| TopicId::new()).collect();
        let repeated = ids.iter().chain(ids.iter().rev()).copied();
        let filter = TopicFilter::new(repeated).unwrap();
        assert_eq!(filter.ids(), ids.as_slice());
    }

    #[test]
    fn test_count_filters_on_draft_only_without_topics() {
        let query = ResourceQuery::new(ResourceFilter::published(), first_page());
        assert_eq!(
            query.count().sql(),
            "SELECT COUNT(*) FROM resources r WHERE r.draft = $1"
        );
    }

    #[test]
    fn test_count_adds_topic_predicate() {
        let filter = ResourceFilter::published().with_topics([TopicId::new()]);
        let query = ResourceQuery::new(filter, first_page());
        assert_eq!(
            query.count().sql(),
            "SELECT COUNT(*) FROM resources r WHERE r.draft = $1 AND r.topic = ANY($2)"
        );
    }

    #[test]
    fn test_page_orders_by_accession_and_paginates() {
        let filter = ResourceFilter::drafts().with_topics([TopicId::new(), TopicId::new()]);
        let query = ResourceQuery::new(filter, first_page());
        let sql = query.page().sql().to_string();
        assert!(sql.starts_with("SELECT r.id, r.accession,"));
        assert!(sql.ends_with(
            "FROM resources r LEFT JOIN topics t ON t.id = r.topic \
             WHERE r.draft = $1 AND r.topic = ANY($2) \
             ORDER BY r.accession DESC LIMIT $3 OFFSET $4"
        ));
    }

    #[test]
    fn test_empty_topics_match_unfiltered_query() {
        let unfiltered = ResourceQuery::new(ResourceFilter::published(), first_page());
        let empty = ResourceQuery::new(
            ResourceFilter::published().with_topics(Vec::new()),
            first_page(),
        );
        assert_eq!(unfiltered, empty);
        assert_eq!(unfiltered.count().sql(), empty.count().sql());
        assert_eq!(unfiltered.page().sql(), empty.page().sql());
    }

    #[test]
    fn test_limit_and_offset_come_from_pagination() {
        let pagination = PageRequest {
            page: Some(3),
            per_page: Some(15),
        }
        .validate()
        .unwrap();
        let query = ResourceQuery::new(ResourceFilter::published(), pagination);
        assert_eq!(query.limit, 15);
        assert_eq!(query.offset, 30);
    }
}
