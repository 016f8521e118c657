use docview_core::PageAssets;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Root configuration for docview.
///
/// The host passes this as JSON when the viewer is created (the same way a
/// language client forwards initialization options); the CLI reads it from
/// `--config`. All fields use sensible defaults if not specified.
///
/// # Examples
///
/// ```
/// use docview::config::DocViewConfig;
///
/// let json = r#"{
///     "debounce_ms": 250,
///     "panel": { "title": "Docs" }
/// }"#;
///
/// let config: DocViewConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.debounce_ms, 250);
/// assert_eq!(config.panel.title, "Docs");
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct DocViewConfig {
    /// Quiet period after the last cursor move before the panel refreshes.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default)]
    pub panel: PanelConfig,
    /// Highlighter resources loaded by the rendered page.
    #[serde(default)]
    pub highlighter: PageAssets,
}

impl Default for DocViewConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            panel: PanelConfig::default(),
            highlighter: PageAssets::default(),
        }
    }
}

impl DocViewConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Parses configuration from a JSON document.
    pub fn from_json_str(json: &str) -> docview_core::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads configuration from a JSON file.
    pub fn from_file(path: &Path) -> docview_core::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

/// Configuration for the preview panel.
///
/// # Defaults
///
/// - `title`: `"Documentation"`
#[derive(Debug, Clone, Deserialize)]
pub struct PanelConfig {
    /// Panel tab title. Maximum length: 100 characters (truncated with warning
    /// if exceeded).
    #[serde(default = "default_title", deserialize_with = "deserialize_title")]
    pub title: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

const fn default_debounce_ms() -> u64 {
    100
}

fn default_title() -> String {
    "Documentation".to_string()
}

/// Maximum length for the panel title
const MAX_TITLE_LENGTH: usize = 100;

fn validate_title(title: String) -> String {
    if title.chars().count() > MAX_TITLE_LENGTH {
        tracing::warn!(
            "panel title exceeded max length of {} chars, truncating",
            MAX_TITLE_LENGTH
        );
        title.chars().take(MAX_TITLE_LENGTH).collect()
    } else {
        title
    }
}

fn deserialize_title<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let title = String::deserialize(deserializer)?;
    Ok(validate_title(title))
}
