//! Command output rendering (text or JSON).

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }

    /// Render `value` as pretty JSON, or fall back to the `text` closure.
    pub fn render<T, F>(self, value: &T, text: F) -> anyhow::Result<String>
    where
        T: Serialize,
        F: FnOnce(&T) -> String,
    {
        match self {
            Self::Text => Ok(text(value)),
            Self::Json => {
                let mut out = serde_json::to_string_pretty(value)?;
                out.push('\n');
                Ok(out)
            }
        }
    }
}
