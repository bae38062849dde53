//! Request payload sent by the host.

use serde::{Deserialize, Serialize};

/// The only protocol version this plugin speaks.
pub const PROTOCOL_VERSION: u32 = 1;

fn default_version() -> u32 {
    PROTOCOL_VERSION
}

/// Processing phase the host is running plugins for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Raw markdown, before parsing. The phase that expands `{% kbd %}`.
    #[default]
    PreParse,
    Block,
    Inline,
    PostRender,
    /// A phase added by a newer host.
    #[serde(other)]
    Unknown,
}

/// A single plugin invocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginRequest {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub plugin_id: String,
    #[serde(default)]
    pub phase: Phase,
    /// Document text. Absent is treated as empty.
    #[serde(default)]
    pub text: Option<String>,
}

impl PluginRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            version: PROTOCOL_VERSION,
            plugin_id: String::new(),
            phase: Phase::PreParse,
            text: Some(text.into()),
        }
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Whether kbd spans should be expanded for this request.
    pub fn wants_transform(&self) -> bool {
        self.phase == Phase::PreParse
    }
}
