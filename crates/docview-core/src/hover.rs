//! Hover fetching and normalization.
//!
//! Providers may answer with any mix of markdown, plain text, and code
//! snippets. Everything is flattened into a single markdown document before
//! it reaches the renderer.

use std::borrow::Cow;
use tower_lsp_server::ls_types::Uri;

use crate::error::Result;
use crate::host::HoverProvider;
use crate::types::{CursorPosition, HoverEntry, HoverFragment};

/// Separator between fragments of one entry.
const FRAGMENT_SEPARATOR: &str = "\n";

/// Separator between entries from different providers.
const ENTRY_SEPARATOR: &str = "\n\n";

/// Queries the provider and flattens the answer into markdown.
///
/// Returns `Ok(None)` when no provider returned anything, which the renderer
/// turns into an empty body.
pub async fn fetch_markdown(
    provider: &dyn HoverProvider,
    document: &Uri,
    position: CursorPosition,
) -> Result<Option<String>> {
    let entries = provider.provide_hovers(document, position).await?;
    tracing::debug!(
        "received {} hover entries for {:?} at {}",
        entries.len(),
        document,
        position
    );
    Ok(entries_to_markdown(&entries))
}

/// Joins entries with a blank line between them.
///
/// # Examples
///
/// ```
/// use docview_core::{HoverEntry, hover::entries_to_markdown};
///
/// let entries = vec![HoverEntry::markdown("**bold**"), HoverEntry::markdown("plain")];
/// assert_eq!(entries_to_markdown(&entries).as_deref(), Some("**bold**\n\nplain"));
/// assert_eq!(entries_to_markdown(&[]), None);
/// ```
pub fn entries_to_markdown(entries: &[HoverEntry]) -> Option<String> {
    if entries.is_empty() {
        return None;
    }

    let joined = entries
        .iter()
        .map(entry_to_markdown)
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR);
    Some(joined)
}

/// Joins the fragments of a single entry line by line.
pub fn entry_to_markdown(entry: &HoverEntry) -> String {
    entry
        .contents
        .iter()
        .map(fragment_to_markdown)
        .collect::<Vec<_>>()
        .join(FRAGMENT_SEPARATOR)
}

/// Converts one fragment to markdown. Text fragments are borrowed untouched.
pub fn fragment_to_markdown(fragment: &HoverFragment) -> Cow<'_, str> {
    match fragment {
        HoverFragment::Markdown(text) | HoverFragment::Plain(text) => Cow::Borrowed(text),
        HoverFragment::Code { language, value } => Cow::Owned(fence(language, value)),
    }
}

/// Wraps code in a fence long enough not to be closed by backticks in the code.
///
/// Only the first word of the language is kept, minus backticks, since
/// either would break the fence's info string.
fn fence(language: &str, value: &str) -> String {
    let language: String = language
        .split_whitespace()
        .next()
        .unwrap_or("")
        .chars()
        .filter(|&c| c != '`')
        .collect();
    let longest_run = value
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let ticks = "`".repeat(longest_run.max(2) + 1);
    format!("{ticks}{language}\n{value}\n{ticks}")
}
