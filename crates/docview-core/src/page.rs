//! Standalone HTML page wrapping the rendered documentation.

use serde::Deserialize;

use crate::render::{escape_html, render_markdown};

/// Remote highlighter resources referenced by the page.
///
/// The page loads these at display time; nothing is bundled.
///
/// # Examples
///
/// ```
/// use docview_core::page::PageAssets;
///
/// let json = r#"{ "stylesheet": "https://example.com/prism-okaidia.css" }"#;
/// let assets: PageAssets = serde_json::from_str(json).unwrap();
///
/// assert_eq!(assets.stylesheet, "https://example.com/prism-okaidia.css");
/// assert!(assets.core_script.ends_with("prism-core.min.js"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageAssets {
    #[serde(default = "default_core_script")]
    pub core_script: String,
    #[serde(default = "default_autoloader_script")]
    pub autoloader_script: String,
    #[serde(default = "default_stylesheet")]
    pub stylesheet: String,
}

impl Default for PageAssets {
    fn default() -> Self {
        Self {
            core_script: default_core_script(),
            autoloader_script: default_autoloader_script(),
            stylesheet: default_stylesheet(),
        }
    }
}

const PRISM_BASE: &str = "https://cdn.jsdelivr.net/npm/prismjs@1.29.0";

fn default_core_script() -> String {
    format!("{PRISM_BASE}/components/prism-core.min.js")
}

fn default_autoloader_script() -> String {
    format!("{PRISM_BASE}/plugins/autoloader/prism-autoloader.min.js")
}

fn default_stylesheet() -> String {
    format!("{PRISM_BASE}/themes/prism.min.css")
}

/// Styles bound to the editor's theme variables.
const THEME_STYLE: &str = "\
body {
    font-family: var(--vscode-editor-font-family);
    font-size: var(--vscode-editor-font-size);
    color: var(--vscode-editor-foreground);
    background-color: var(--vscode-editor-background);
    line-height: 1.5;
    padding: 0 16px;
}
pre, code {
    font-family: var(--vscode-editor-font-family);
}
pre {
    padding: 8px;
    overflow-x: auto;
}";

/// Wraps an HTML fragment in the full preview page.
///
/// Pure: the same body and assets always yield the same page.
///
/// # Examples
///
/// ```
/// use docview_core::page::{PageAssets, build_page};
///
/// let page = build_page("<p>hi</p>", &PageAssets::default());
/// assert!(page.starts_with("<!DOCTYPE html>"));
/// assert!(page.contains("<body>\n<p>hi</p>\n"));
/// assert!(page.contains("Prism.highlightAll()"));
/// ```
pub fn build_page(body: &str, assets: &PageAssets) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Documentation</title>
<link rel="stylesheet" href="{stylesheet}">
<style>
{style}
</style>
</head>
<body>
{body}
<script src="{core}"></script>
<script src="{autoloader}"></script>
<script>
window.addEventListener('load', function () {{ Prism.highlightAll(); }});
</script>
</body>
</html>
"#,
        stylesheet = escape_html(&assets.stylesheet),
        style = THEME_STYLE,
        body = body,
        core = escape_html(&assets.core_script),
        autoloader = escape_html(&assets.autoloader_script),
    )
}

/// Renders markdown and wraps it in the page in one step.
pub fn render_page(markdown: Option<&str>, assets: &PageAssets) -> String {
    build_page(&render_markdown(markdown), assets)
}
