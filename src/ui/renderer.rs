//! Line-oriented rendering of the results view.
//!
//! The renderer writes a [`ResultsView`] as plain text to any writer. It has
//! no state of its own and makes no decisions beyond layout.
//!
//! # Layout
//!
//! ```text
//! Search: React    (submit with :submit)
//! ---
//! [abc123] React 18 is out
//!     https://react.dev | dan | 120 points | 45 comments | 3h ago
//! ---
//! 1 of 2 stories  |  :submit  :dismiss <id>  :clear  :quit
//! ```

use crate::ui::viewmodel::{ResultsView, StoryRow};
use std::io::{self, Write};

/// Indentation of the detail line under each story title.
const DETAIL_INDENT: usize = 4;

/// Command hints shown in the footer.
const FOOTER_HINTS: &str = ":submit  :dismiss <id>  :clear  :quit  (any other text edits the search term)";

/// Renders a view model to `out`.
///
/// # Errors
///
/// Returns any I/O error raised by the writer.
pub fn render<W: Write>(vm: &ResultsView, out: &mut W) -> io::Result<()> {
    render_search_bar(vm, out)?;
    writeln!(out, "---")?;

    if vm.is_error {
        writeln!(out, "Something went wrong while searching. Submit again to retry.")?;
    }

    if vm.is_loading {
        writeln!(out, "Loading ...")?;
    } else if let Some(empty) = &vm.empty_state {
        writeln!(out, "{}", empty.message)?;
        writeln!(out, "{}", empty.subtitle)?;
    }

    if !vm.is_loading {
        for row in &vm.rows {
            render_row(row, out)?;
        }
    }

    writeln!(out, "---")?;
    writeln!(
        out,
        "{} of {} stories  |  {FOOTER_HINTS}",
        vm.rows.len(),
        vm.total_items
    )?;
    out.flush()
}

fn render_search_bar<W: Write>(vm: &ResultsView, out: &mut W) -> io::Result<()> {
    let hint = if vm.search_bar.submit_enabled {
        "(submit with :submit)"
    } else {
        "(type a term to enable search)"
    };
    writeln!(out, "Search: {}    {hint}", vm.search_bar.query)
}

fn render_row<W: Write>(row: &StoryRow, out: &mut W) -> io::Result<()> {
    writeln!(out, "[{}] {}", row.id, row.title)?;

    let mut details = Vec::with_capacity(5);
    if !row.url.is_empty() {
        details.push(row.url.clone());
    }
    details.push(row.author.clone());
    details.push(format!("{} points", row.points));
    details.push(format!("{} comments", row.comment_count));
    if let Some(age) = &row.age {
        details.push(age.clone());
    }

    writeln!(out, "{:indent$}{}", "", details.join(" | "), indent = DETAIL_INDENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::SearchBarInfo;

    fn view(is_loading: bool, is_error: bool, rows: Vec<StoryRow>) -> ResultsView {
        ResultsView {
            search_bar: SearchBarInfo {
                query: "React".into(),
                submit_enabled: true,
            },
            is_loading,
            is_error,
            total_items: rows.len(),
            rows,
            empty_state: None,
        }
    }

    fn row() -> StoryRow {
        StoryRow {
            id: "abc123".into(),
            title: "React 18".into(),
            url: "https://react.dev".into(),
            author: "dan".into(),
            comment_count: 4,
            points: 99,
            age: None,
        }
    }

    fn rendered(vm: &ResultsView) -> String {
        let mut out = Vec::new();
        render(vm, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn rows_are_rendered_with_details() {
        let text = rendered(&view(false, false, vec![row()]));
        assert!(text.contains("[abc123] React 18"));
        assert!(text.contains("\n    https://react.dev | dan | 99 points | 4 comments\n"));
        assert!(text.starts_with("Search: React    (submit with :submit)\n"));
        assert!(text.contains("1 of 1 stories"));
    }

    #[test]
    fn loading_hides_rows() {
        let text = rendered(&view(true, false, vec![row()]));
        assert!(text.contains("Loading ..."));
        assert!(!text.contains("[abc123]"));
    }

    #[test]
    fn error_keeps_previous_rows_visible() {
        let text = rendered(&view(false, true, vec![row()]));
        assert!(text.contains("Something went wrong"));
        assert!(text.contains("[abc123]"));
    }
}
