//! Client-side title filter.
//!
//! Narrows the stored result list to stories whose title contains the live
//! search term, ignoring case. The filtered list is derived on demand and
//! never stored; the stored items are not touched.

use crate::domain::Story;

/// Returns the stories whose title contains `term`, case-insensitively, in
/// their original order.
///
/// An empty term matches every story.
///
/// # Examples
///
/// ```
/// use hn_search::app::filter::visible;
/// use hn_search::domain::Story;
///
/// let items = vec![
///     Story::new("1", "", "React 18", "dan", 0, 1),
///     Story::new("2", "", "Redux Toolkit", "mark", 0, 1),
/// ];
/// let hits = visible(&items, "react");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].id, "1");
/// assert_eq!(visible(&items, "").len(), 2);
/// ```
#[must_use]
pub fn visible<'a>(items: &'a [Story], term: &str) -> Vec<&'a Story> {
    if term.is_empty() {
        return items.iter().collect();
    }

    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|story| story.title.to_lowercase().contains(&needle))
        .collect()
}
