//! Wire types returned by the catalog API.
//!
//! Ids stay as strings on this side; the client never interprets them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub accession: i64,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub source: String,
    pub topic: Option<String>,
    pub topic_name: Option<String>,
    pub draft: bool,
    pub publication: Option<String>,
    pub publisher: Option<String>,
}

/// One page of the catalog with its pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    pub resources: Vec<Resource>,
    pub page: i64,
    pub per_page: i64,
    pub last_page: i64,
    pub total_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_deserializes_from_api_shape() {
        let json = r#"{
            "resources": [{
                "id": "0190a0c4-0000-7000-8000-000000000001",
                "accession": 7,
                "title": "Tokio tutorial",
                "description": null,
                "url": "https://tokio.rs/tokio/tutorial",
                "source": "submitter",
                "topic": "0190a0c4-0000-7000-8000-0000000000aa",
                "topicName": "Rust",
                "draft": false,
                "publication": "2024-06-01T12:00:00Z",
                "publisher": "0190a0c4-0000-7000-8000-0000000000ee"
            }],
            "page": 1,
            "perPage": 20,
            "lastPage": 1,
            "totalCount": 1
        }"#;

        let page: CatalogPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.per_page, 20);
        assert_eq!(page.resources[0].topic_name.as_deref(), Some("Rust"));
        assert!(!page.resources[0].draft);
    }
}
