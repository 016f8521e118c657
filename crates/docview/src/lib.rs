pub mod commands;
pub mod config;
pub mod coordinator;
pub mod panel;
pub mod preview;
pub mod viewer;

mod test_utils;

// Re-export commonly used types
pub use config::DocViewConfig;
pub use docview_core::{DocViewError, Result};
pub use viewer::DocViewer;
