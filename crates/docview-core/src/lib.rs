//! Core abstractions for docview.
//!
//! docview shows the hover documentation at the editor's cursor as a rendered
//! HTML page in a side panel. This crate holds the parts that do not depend on
//! timing or panel lifecycle:
//!
//! - **Types**: `CursorPosition`, `HoverFragment`, `HoverEntry`
//! - **Host traits**: `HoverProvider`, `EditorHost`, `PanelHost`, `Panel`
//! - **Hover normalization**: flattening provider output into one markdown string
//! - **Rendering**: markdown to sanitized HTML, and the standalone page around it
//! - **Error types**: `DocViewError` shared by every docview crate
//!
//! # Examples
//!
//! ```
//! use docview_core::{HoverEntry, HoverFragment, PageAssets, entries_to_markdown, render_page};
//!
//! let entries = vec![
//!     HoverEntry::new(vec![HoverFragment::code("python", "print(1)")]),
//!     HoverEntry::markdown("Writes to *stdout*."),
//! ];
//!
//! let markdown = entries_to_markdown(&entries);
//! let page = render_page(markdown.as_deref(), &PageAssets::default());
//!
//! assert!(page.contains("class=\"language-python\""));
//! assert!(page.contains("<em>stdout</em>"));
//! ```

pub mod error;
pub mod host;
pub mod hover;
pub mod page;
pub mod render;
pub mod types;

// Re-export commonly used types
pub use error::{DocViewError, Result};
pub use host::{
    ActiveEditor, DisposeHook, EditorHost, HoverProvider, Panel, PanelHost, PanelOptions,
    SelectionChange, ViewColumn,
};
pub use hover::{entries_to_markdown, fetch_markdown};
pub use page::{PageAssets, build_page, render_page};
pub use render::render_markdown;
pub use types::{CursorPosition, HoverEntry, HoverFragment};
