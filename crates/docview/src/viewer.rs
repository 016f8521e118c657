//! The running documentation viewer.

use docview_core::{
    EditorHost, HoverProvider, PageAssets, PanelHost, Result, SelectionChange, fetch_markdown,
    render_page,
};
use std::sync::Arc;

use crate::commands::Command;
use crate::config::DocViewConfig;
use crate::coordinator::UpdateCoordinator;
use crate::panel::{OpenOutcome, PanelManager};

struct ViewerInner {
    hover_provider: Arc<dyn HoverProvider>,
    editor: Arc<dyn EditorHost>,
    panels: PanelManager,
    coordinator: UpdateCoordinator,
    assets: PageAssets,
}

/// Follows the editor cursor and keeps the documentation panel up to date.
///
/// One `DocViewer` corresponds to one activation of the integration; it owns
/// the singleton panel and the debounce state. Host callbacks map onto its
/// methods:
///
/// - command `docview.open` → [`open`](Self::open) (or [`execute_command`](Self::execute_command))
/// - selection change → [`on_selection_changed`](Self::on_selection_changed)
/// - deactivation → [`shutdown`](Self::shutdown)
///
/// Cloning is cheap and yields a handle to the same viewer.
#[derive(Clone)]
pub struct DocViewer {
    inner: Arc<ViewerInner>,
}

impl DocViewer {
    pub fn new(
        config: DocViewConfig,
        hover_provider: Arc<dyn HoverProvider>,
        editor: Arc<dyn EditorHost>,
        panel_host: Arc<dyn PanelHost>,
    ) -> Self {
        let coordinator = UpdateCoordinator::new(config.debounce());
        let DocViewConfig {
            panel, highlighter, ..
        } = config;

        Self {
            inner: Arc::new(ViewerInner {
                hover_provider,
                editor,
                panels: PanelManager::new(panel_host, panel.title),
                coordinator,
                assets: highlighter,
            }),
        }
    }

    /// Opens the panel, or brings it to front, then shows the documentation
    /// for the active editor's cursor.
    ///
    /// A failed hover query is returned to the caller; the panel stays open.
    pub async fn open(&self) -> Result<()> {
        let inner = &self.inner;

        if inner.panels.open_or_reveal() == OpenOutcome::Created {
            tracing::debug!("documentation panel opened");
        }

        let Some(active) = inner.editor.active_editor() else {
            tracing::debug!("no active editor, panel left as is");
            return Ok(());
        };

        // This refresh supersedes whatever the timer would have done.
        inner.coordinator.cancel();
        inner.coordinator.record_position(active.position);
        let generation = inner.coordinator.next_generation();
        refresh(inner, generation).await
    }

    /// Runs a command by identifier.
    pub async fn execute_command(&self, id: &str) -> Result<()> {
        match Command::from_id(id)? {
            Command::OpenViewer => self.open().await,
        }
    }

    /// Handles a selection change in any open document.
    ///
    /// Must be called from within a tokio runtime. Only the active editor's
    /// cursor is followed; while the panel is closed this does nothing.
    pub fn on_selection_changed(&self, change: &SelectionChange) {
        let inner = &self.inner;
        if !inner.panels.is_open() {
            return;
        }

        let Some(active) = inner.editor.active_editor() else {
            return;
        };
        if active.document != change.document {
            tracing::trace!("selection change outside the active editor ignored");
            return;
        }

        if !inner.coordinator.record_position(active.position) {
            tracing::trace!(position = %active.position, "cursor did not move");
            return;
        }

        let viewer = Arc::clone(inner);
        inner.coordinator.schedule(move |generation| async move {
            if !viewer.panels.is_open() {
                tracing::debug!("panel closed before the timer fired");
                return;
            }
            if let Err(e) = refresh(&viewer, generation).await {
                tracing::error!("failed to refresh documentation: {}", e);
            }
        });
    }

    /// Cancels pending work and forgets the panel.
    pub fn shutdown(&self) {
        self.inner.coordinator.cancel();
        self.inner.panels.release();
    }

    pub fn is_open(&self) -> bool {
        self.inner.panels.is_open()
    }
}

/// One fetch-and-render cycle for the editor's current cursor.
async fn refresh(inner: &ViewerInner, generation: u64) -> Result<()> {
    let Some(active) = inner.editor.active_editor() else {
        return Ok(());
    };

    let markdown = fetch_markdown(
        inner.hover_provider.as_ref(),
        &active.document,
        active.position,
    )
    .await?;
    let page = render_page(markdown.as_deref(), &inner.assets);

    let Some(panel) = inner.panels.current() else {
        tracing::debug!("panel closed during hover query, discarding result");
        return Ok(());
    };
    if !inner.coordinator.is_current(generation) {
        tracing::debug!(generation, "newer refresh scheduled, discarding result");
        return Ok(());
    }

    panel.set_html(page);
    Ok(())
}
