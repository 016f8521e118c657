//! Offline rendering of saved hover responses.
//!
//! Used by `docview render` to produce the same page the panel would show,
//! from hover JSON captured from a language server.

use docview_core::{HoverEntry, PageAssets, Result, entries_to_markdown, render_page};
use serde::Deserialize;
use tower_lsp_server::ls_types::Hover;

/// A `textDocument/hover` result, or several of them (one per provider).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HoverInput {
    Many(Vec<Hover>),
    One(Hover),
}

/// Parses hover JSON into entries, preserving provider order.
///
/// # Examples
///
/// ```
/// use docview::preview::parse_hovers;
///
/// let json = r#"{ "contents": { "kind": "markdown", "value": "**hi**" } }"#;
/// let entries = parse_hovers(json).unwrap();
/// assert_eq!(entries.len(), 1);
/// ```
pub fn parse_hovers(json: &str) -> Result<Vec<HoverEntry>> {
    let entries = match serde_json::from_str::<HoverInput>(json)? {
        HoverInput::Many(hovers) => hovers.into_iter().map(HoverEntry::from).collect(),
        HoverInput::One(hover) => vec![HoverEntry::from(hover)],
    };
    Ok(entries)
}

/// Renders hover JSON to the complete preview page.
pub fn render_hover_json(json: &str, assets: &PageAssets) -> Result<String> {
    let entries = parse_hovers(json)?;
    tracing::debug!("rendering {} hover entries", entries.len());
    let markdown = entries_to_markdown(&entries);
    Ok(render_page(markdown.as_deref(), assets))
}
