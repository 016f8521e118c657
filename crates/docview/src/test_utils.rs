//! Test doubles for the editor host.

#[cfg(test)]
pub(crate) mod test_helpers {
    use async_trait::async_trait;
    use docview_core::{
        ActiveEditor, CursorPosition, DisposeHook, DocViewError, EditorHost, HoverEntry,
        HoverProvider, Panel, PanelHost, PanelOptions, ViewColumn,
    };
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tower_lsp_server::ls_types::Uri;

    pub fn test_uri(path: &str) -> Uri {
        Uri::from_file_path(path).unwrap()
    }

    /// Hover provider that answers from a script and records every query.
    #[derive(Default)]
    pub struct MockHoverProvider {
        entries: Mutex<Vec<HoverEntry>>,
        delays: Mutex<VecDeque<Duration>>,
        fail: Mutex<bool>,
        calls: Mutex<Vec<(Uri, CursorPosition)>>,
        completed: AtomicUsize,
    }

    impl MockHoverProvider {
        pub fn with_entries(entries: Vec<HoverEntry>) -> Self {
            let provider = Self::default();
            provider.set_entries(entries);
            provider
        }

        pub fn set_entries(&self, entries: Vec<HoverEntry>) {
            *self.entries.lock().unwrap() = entries;
        }

        /// Delays the next query by `delay`; queued delays apply in order.
        pub fn push_delay(&self, delay: Duration) {
            self.delays.lock().unwrap().push_back(delay);
        }

        pub fn set_failing(&self, fail: bool) {
            *self.fail.lock().unwrap() = fail;
        }

        pub fn calls(&self) -> Vec<(Uri, CursorPosition)> {
            self.calls.lock().unwrap().clone()
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        /// Queries that ran past their delay.
        pub fn completed_count(&self) -> usize {
            self.completed.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl HoverProvider for MockHoverProvider {
        async fn provide_hovers(
            &self,
            document: &Uri,
            position: CursorPosition,
        ) -> docview_core::Result<Vec<HoverEntry>> {
            self.calls
                .lock()
                .unwrap()
                .push((document.clone(), position));

            let delay = self.delays.lock().unwrap().pop_front();
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            self.completed.fetch_add(1, Ordering::SeqCst);

            if *self.fail.lock().unwrap() {
                return Err(DocViewError::HoverQuery {
                    document: document.as_str().to_string(),
                    source: "mock provider failure".into(),
                });
            }

            // Echo the position so tests can tell which query produced a page.
            let mut entries = self.entries.lock().unwrap().clone();
            if entries.is_empty() {
                return Ok(entries);
            }
            entries.push(HoverEntry::markdown(format!("at {position}")));
            Ok(entries)
        }
    }

    /// Editor whose focus is set by the test.
    #[derive(Default)]
    pub struct MockEditor {
        active: Mutex<Option<ActiveEditor>>,
    }

    impl MockEditor {
        pub fn focused(document: Uri, position: CursorPosition) -> Self {
            let editor = Self::default();
            editor.focus(document, position);
            editor
        }

        pub fn focus(&self, document: Uri, position: CursorPosition) {
            *self.active.lock().unwrap() = Some(ActiveEditor { document, position });
        }

        pub fn move_to(&self, position: CursorPosition) {
            if let Some(active) = self.active.lock().unwrap().as_mut() {
                active.position = position;
            }
        }

        pub fn blur(&self) {
            *self.active.lock().unwrap() = None;
        }
    }

    impl EditorHost for MockEditor {
        fn active_editor(&self) -> Option<ActiveEditor> {
            self.active.lock().unwrap().clone()
        }
    }

    /// Panel that records what was written to it.
    #[derive(Default)]
    pub struct MockPanel {
        html: Mutex<Vec<String>>,
        reveals: Mutex<Vec<ViewColumn>>,
    }

    impl MockPanel {
        pub fn html_writes(&self) -> Vec<String> {
            self.html.lock().unwrap().clone()
        }

        pub fn last_html(&self) -> Option<String> {
            self.html.lock().unwrap().last().cloned()
        }

        pub fn reveals(&self) -> Vec<ViewColumn> {
            self.reveals.lock().unwrap().clone()
        }
    }

    impl Panel for MockPanel {
        fn reveal(&self, column: ViewColumn) {
            self.reveals.lock().unwrap().push(column);
        }

        fn set_html(&self, html: String) {
            self.html.lock().unwrap().push(html);
        }
    }

    struct CreatedPanel {
        options: PanelOptions,
        panel: Arc<MockPanel>,
        on_dispose: Option<DisposeHook>,
    }

    /// Panel host that keeps every panel it created.
    #[derive(Default)]
    pub struct MockPanelHost {
        created: Mutex<Vec<CreatedPanel>>,
    }

    impl MockPanelHost {
        pub fn created_count(&self) -> usize {
            self.created.lock().unwrap().len()
        }

        pub fn options(&self, index: usize) -> PanelOptions {
            self.created.lock().unwrap()[index].options.clone()
        }

        pub fn panel(&self, index: usize) -> Arc<MockPanel> {
            Arc::clone(&self.created.lock().unwrap()[index].panel)
        }

        /// Simulates the user closing panel `index`.
        pub fn dispose(&self, index: usize) {
            let hook = self.created.lock().unwrap()[index].on_dispose.take();
            if let Some(hook) = hook {
                hook();
            }
        }
    }

    impl PanelHost for MockPanelHost {
        fn create_panel(&self, options: PanelOptions, on_dispose: DisposeHook) -> Arc<dyn Panel> {
            let panel = Arc::new(MockPanel::default());
            self.created.lock().unwrap().push(CreatedPanel {
                options,
                panel: Arc::clone(&panel),
                on_dispose: Some(on_dispose),
            });
            panel
        }
    }
}
