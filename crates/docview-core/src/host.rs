//! Seams to the editor hosting the preview.
//!
//! docview never talks to an editor directly. The host supplies three
//! capabilities, each behind a trait so that the pipeline can be driven by a
//! real editor integration or by test doubles:
//!
//! - [`HoverProvider`]: the aggregation point for documentation providers
//! - [`EditorHost`]: which document is active and where its cursor is
//! - [`PanelHost`]: creation of the HTML panel the preview is written into

use async_trait::async_trait;
use std::sync::Arc;
use tower_lsp_server::ls_types::Uri;

use crate::error::Result;
use crate::types::{CursorPosition, HoverEntry};

/// Queries every registered documentation provider for a location.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use docview_core::{CursorPosition, HoverEntry, HoverProvider};
/// use tower_lsp_server::ls_types::Uri;
///
/// struct Fixed;
///
/// #[async_trait]
/// impl HoverProvider for Fixed {
///     async fn provide_hovers(
///         &self,
///         _document: &Uri,
///         _position: CursorPosition,
///     ) -> docview_core::Result<Vec<HoverEntry>> {
///         Ok(vec![HoverEntry::markdown("**docs**")])
///     }
/// }
/// ```
#[async_trait]
pub trait HoverProvider: Send + Sync {
    /// Returns hover entries in provider order. An empty vector means no
    /// provider had anything to say; it is not an error.
    async fn provide_hovers(
        &self,
        document: &Uri,
        position: CursorPosition,
    ) -> Result<Vec<HoverEntry>>;
}

/// The focused text editor at the moment of the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveEditor {
    pub document: Uri,
    pub position: CursorPosition,
}

/// Selection-change notification from any open document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    pub document: Uri,
    pub position: CursorPosition,
}

/// Read access to the editor's current focus.
pub trait EditorHost: Send + Sync {
    /// `None` when no text editor has focus.
    fn active_editor(&self) -> Option<ActiveEditor>;
}

/// Where a panel is placed relative to the active editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewColumn {
    Active,
    Beside,
}

/// Options a panel is created with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelOptions {
    pub title: String,
    pub column: ViewColumn,
    /// The preview page runs the highlighter script, so this is always set
    /// by docview.
    pub enable_scripts: bool,
    /// Keep the rendered page alive while the panel is hidden.
    pub retain_context_when_hidden: bool,
}

/// Invoked by the host exactly once, when the user closes the panel.
pub type DisposeHook = Box<dyn FnOnce() + Send + 'static>;

/// A live panel surface.
pub trait Panel: Send + Sync {
    /// Brings the panel to the front in the given column.
    fn reveal(&self, column: ViewColumn);

    /// Replaces the panel's whole HTML document.
    fn set_html(&self, html: String);
}

/// Factory for panels.
pub trait PanelHost: Send + Sync {
    /// Creates and shows a new panel. `on_dispose` must be called when the
    /// panel is closed by the user.
    fn create_panel(&self, options: PanelOptions, on_dispose: DisposeHook) -> Arc<dyn Panel>;
}
