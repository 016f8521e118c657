//! User-invocable commands and where the editor shows them.

use docview_core::{DocViewError, Result};
use serde::Serialize;

/// Command identifier for opening (or focusing) the documentation panel.
pub const OPEN_VIEWER: &str = "docview.open";

/// Context key the editor sets while a text editor has keyboard focus.
const EDITOR_TEXT_FOCUS: &str = "editorTextFocus";

/// Commands understood by [`DocViewer::execute_command`](crate::DocViewer::execute_command).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    OpenViewer,
}

impl Command {
    pub fn from_id(id: &str) -> Result<Self> {
        match id {
            OPEN_VIEWER => Ok(Self::OpenViewer),
            other => Err(DocViewError::UnknownCommand(other.to_string())),
        }
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::OpenViewer => OPEN_VIEWER,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::OpenViewer => "Open Documentation Viewer",
        }
    }
}

/// Editor manifest fragment registering docview's commands.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Contributions {
    pub commands: Vec<CommandContribution>,
    pub menus: Menus,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CommandContribution {
    pub command: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Menus {
    #[serde(rename = "editor/context")]
    pub editor_context: Vec<MenuItem>,
    #[serde(rename = "commandPalette")]
    pub command_palette: Vec<MenuItem>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MenuItem {
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// The contribution block for every docview command.
pub fn contributions() -> Contributions {
    let open = Command::OpenViewer;
    Contributions {
        commands: vec![CommandContribution {
            command: open.id().to_string(),
            title: open.title().to_string(),
        }],
        menus: Menus {
            editor_context: vec![MenuItem {
                command: open.id().to_string(),
                when: Some(EDITOR_TEXT_FOCUS.to_string()),
                group: Some("navigation".to_string()),
            }],
            command_palette: vec![MenuItem {
                command: open.id().to_string(),
                when: None,
                group: None,
            }],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_command_from_id() {
        assert_eq!(Command::from_id("docview.open").unwrap(), Command::OpenViewer);
    }

    #[test]
    fn test_unknown_command() {
        let err = Command::from_id("docview.refresh").unwrap_err();
        assert_eq!(err.to_string(), "unknown command: docview.refresh");
    }

    #[test]
    fn test_contributions_json() {
        let value = serde_json::to_value(contributions()).unwrap();
        assert_eq!(
            value,
            json!({
                "commands": [
                    { "command": "docview.open", "title": "Open Documentation Viewer" }
                ],
                "menus": {
                    "editor/context": [
                        { "command": "docview.open", "when": "editorTextFocus", "group": "navigation" }
                    ],
                    "commandPalette": [
                        { "command": "docview.open" }
                    ]
                }
            })
        );
    }
}
