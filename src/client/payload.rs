//! Wire format of the search endpoint.
//!
//! Only the fields the client displays are decoded; everything else in a hit
//! is ignored. Hits with `null` fields (common for `url` and `title` on
//! comment-like entries) decode to empty strings or zero rather than failing
//! the whole response.

use crate::domain::Story;
use serde::Deserialize;

/// Top-level search response.
///
/// A body without a `hits` array fails to decode.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub hits: Vec<Hit>,
}

/// One search hit.
#[derive(Debug, Deserialize)]
pub struct Hit {
    #[serde(rename = "objectID")]
    pub object_id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub num_comments: Option<u32>,
    #[serde(default)]
    pub points: Option<i32>,
    #[serde(default)]
    pub created_at_i: Option<i64>,
}

impl Hit {
    fn into_story(self) -> Story {
        Story {
            id: self.object_id,
            url: self.url.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            author: self.author.unwrap_or_default(),
            comment_count: self.num_comments.unwrap_or_default(),
            points: self.points.unwrap_or_default(),
            created_at: self.created_at_i,
        }
    }
}

impl SearchResponse {
    /// Converts every hit into a [`Story`], preserving order and duplicates.
    #[must_use]
    pub fn into_stories(self) -> Vec<Story> {
        self.hits.into_iter().map(Hit::into_story).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_hits_in_order() {
        let body = r#"{
            "hits": [
                {"objectID": "1", "url": "https://react.dev", "title": "React 18",
                 "author": "dan", "num_comments": 45, "points": 120,
                 "created_at_i": 1700000000, "_tags": ["story"]},
                {"objectID": "2", "url": null, "title": "Ask HN: React?",
                 "author": "pg", "num_comments": null, "points": null}
            ],
            "nbHits": 2
        }"#;

        let stories = serde_json::from_str::<SearchResponse>(body)
            .unwrap()
            .into_stories();

        assert_eq!(
            stories[0],
            Story {
                created_at: Some(1_700_000_000),
                ..Story::new("1", "https://react.dev", "React 18", "dan", 45, 120)
            }
        );
        assert_eq!(stories[1], Story::new("2", "", "Ask HN: React?", "pg", 0, 0));
    }

    #[test]
    fn duplicate_ids_are_kept() {
        let body = r#"{"hits": [{"objectID": "1"}, {"objectID": "1"}]}"#;
        let stories = serde_json::from_str::<SearchResponse>(body)
            .unwrap()
            .into_stories();
        assert_eq!(stories.len(), 2);
    }

    #[test]
    fn missing_hits_is_an_error() {
        assert!(serde_json::from_str::<SearchResponse>(r#"{"nbHits": 0}"#).is_err());
    }

    #[test]
    fn empty_hits_is_an_empty_list() {
        let response = serde_json::from_str::<SearchResponse>(r#"{"hits": []}"#).unwrap();
        assert!(response.into_stories().is_empty());
    }
}
