use thiserror::Error;

/// Error types for docview.
///
/// "No hover information" is deliberately absent: an empty hover result is a
/// normal outcome and renders as an empty panel. Errors here are failures of
/// the host or of the surrounding tooling.
///
/// # Examples
///
/// ```
/// use docview_core::error::{DocViewError, Result};
///
/// fn query(available: bool) -> Result<()> {
///     if !available {
///         return Err(DocViewError::HoverQuery {
///             document: "file:///src/main.rs".into(),
///             source: Box::new(std::io::Error::new(
///                 std::io::ErrorKind::BrokenPipe,
///                 "language server went away",
///             )),
///         });
///     }
///     Ok(())
/// }
///
/// assert!(query(false).is_err());
/// ```
#[derive(Error, Debug)]
pub enum DocViewError {
    #[error("hover query failed for {document}: {source}")]
    HoverQuery {
        document: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for `Result<T, DocViewError>`.
pub type Result<T> = std::result::Result<T, DocViewError>;
