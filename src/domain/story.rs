//! Story domain model.
//!
//! A story is a single search hit returned by the remote index. Stories are
//! immutable once decoded; the result list only ever replaces or drops them.

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// A single search result.
///
/// Identity is `id`. Within one result set ids are expected to be unique, but
/// the list keeps whatever the endpoint returned, duplicates included.
///
/// # Fields
///
/// - `id`: Endpoint object identifier
/// - `url`: Link target, empty for text posts
/// - `title`: Headline, the only field the client filter matches against
/// - `author`: Submitter user name
/// - `comment_count`: Number of comments
/// - `points`: Score
/// - `created_at`: Unix timestamp of submission, when the endpoint provides it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub id: String,
    pub url: String,
    pub title: String,
    pub author: String,
    pub comment_count: u32,
    pub points: i32,
    pub created_at: Option<i64>,
}

impl Story {
    /// Creates a story without a submission timestamp.
    ///
    /// # Examples
    ///
    /// ```
    /// use hn_search::domain::Story;
    ///
    /// let story = Story::new("abc123", "https://react.dev", "React 18", "dan", 12, 300);
    /// assert_eq!(story.title, "React 18");
    /// assert!(story.created_at.is_none());
    /// ```
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        url: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        comment_count: u32,
        points: i32,
    ) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            title: title.into(),
            author: author.into(),
            comment_count,
            points,
            created_at: None,
        }
    }

    /// Returns a human-readable string describing how long ago the story was submitted.
    ///
    /// The format varies based on the time elapsed:
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - 1 day or more: "Xd ago"
    ///
    /// Returns `None` when the endpoint did not report a timestamp, or reported
    /// one too far in the past to measure. Timestamps in the future read as
    /// "just now".
    ///
    /// # Examples
    ///
    /// ```
    /// use hn_search::domain::Story;
    ///
    /// let mut story = Story::new("1", "", "Ask HN", "pg", 0, 1);
    /// assert_eq!(story.time_ago(), None);
    ///
    /// story.created_at = Some(chrono::Utc::now().timestamp() - 300);
    /// assert_eq!(story.time_ago().as_deref(), Some("5m ago"));
    /// ```
    #[must_use]
    pub fn time_ago(&self) -> Option<String> {
        let created_at = self.created_at?;
        let diff = chrono::Utc::now().timestamp().checked_sub(created_at)?;

        Some(if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            format!("{}m ago", diff / SECONDS_PER_MINUTE)
        } else if diff < SECONDS_PER_DAY {
            format!("{}h ago", diff / SECONDS_PER_HOUR)
        } else {
            format!("{}d ago", diff / SECONDS_PER_DAY)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_ago_buckets() {
        let now = chrono::Utc::now().timestamp();
        let mut story = Story::new("1", "", "t", "a", 0, 0);

        story.created_at = Some(now);
        assert_eq!(story.time_ago().as_deref(), Some("just now"));

        story.created_at = Some(now - 3 * SECONDS_PER_HOUR - 10);
        assert_eq!(story.time_ago().as_deref(), Some("3h ago"));

        story.created_at = Some(now - 7 * SECONDS_PER_DAY - 10);
        assert_eq!(story.time_ago().as_deref(), Some("7d ago"));
    }

    #[test]
    fn time_ago_rejects_unmeasurable_timestamps() {
        let mut story = Story::new("1", "", "t", "a", 0, 0);
        story.created_at = Some(i64::MIN);
        assert_eq!(story.time_ago(), None);
    }

    #[test]
    fn time_ago_clamps_future_timestamps() {
        let mut story = Story::new("1", "", "t", "a", 0, 0);
        story.created_at = Some(chrono::Utc::now().timestamp() + SECONDS_PER_DAY);
        assert_eq!(story.time_ago().as_deref(), Some("just now"));

        story.created_at = Some(i64::MAX);
        assert_eq!(story.time_ago().as_deref(), Some("just now"));
    }
}
