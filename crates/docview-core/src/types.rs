//! Data carried through the preview pipeline.

use std::fmt;
use tower_lsp_server::ls_types::{Hover, HoverContents, MarkedString, MarkupKind, Position};

/// Zero-based cursor location inside a document.
///
/// Two positions are the same location when both line and column match; the
/// update coordinator relies on this to drop repeated selection events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CursorPosition {
    pub line: u32,
    pub column: u32,
}

impl CursorPosition {
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for CursorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl From<Position> for CursorPosition {
    fn from(position: Position) -> Self {
        Self::new(position.line, position.character)
    }
}

impl From<CursorPosition> for Position {
    fn from(position: CursorPosition) -> Self {
        Self::new(position.line, position.column)
    }
}

/// One piece of hover content as supplied by a documentation provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverFragment {
    /// Markdown text, rendered as-is.
    Markdown(String),
    /// Plain text. Passed through to the renderer verbatim.
    Plain(String),
    /// A code snippet tagged with the language it is written in.
    Code { language: String, value: String },
}

impl HoverFragment {
    pub fn markdown(text: impl Into<String>) -> Self {
        Self::Markdown(text.into())
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    pub fn code(language: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Code {
            language: language.into(),
            value: value.into(),
        }
    }
}

impl From<MarkedString> for HoverFragment {
    fn from(marked: MarkedString) -> Self {
        match marked {
            MarkedString::String(text) => Self::Markdown(text),
            MarkedString::LanguageString(code) => Self::Code {
                language: code.language,
                value: code.value,
            },
        }
    }
}

/// All fragments contributed by a single provider for one position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HoverEntry {
    pub contents: Vec<HoverFragment>,
}

impl HoverEntry {
    pub fn new(contents: Vec<HoverFragment>) -> Self {
        Self { contents }
    }

    /// Entry consisting of a single markdown fragment.
    pub fn markdown(text: impl Into<String>) -> Self {
        Self::new(vec![HoverFragment::markdown(text)])
    }
}

impl From<HoverContents> for HoverEntry {
    fn from(contents: HoverContents) -> Self {
        let fragments = match contents {
            HoverContents::Scalar(marked) => vec![marked.into()],
            HoverContents::Array(items) => items.into_iter().map(HoverFragment::from).collect(),
            HoverContents::Markup(markup) => match markup.kind {
                MarkupKind::PlainText => vec![HoverFragment::Plain(markup.value)],
                MarkupKind::Markdown => vec![HoverFragment::Markdown(markup.value)],
            },
        };
        Self::new(fragments)
    }
}

impl From<Hover> for HoverEntry {
    fn from(hover: Hover) -> Self {
        hover.contents.into()
    }
}
