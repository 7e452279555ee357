//! Segment data structure
//!
//! A segment pairs a label with the content panel it reveals:
//! - Label text (fixed at creation)
//! - Panel handle (owned by the caller)
//! - Selection flag and the panel's last written offset/visibility

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque handle to a caller-owned content panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PanelId(pub u64);

impl std::fmt::Display for PanelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "panel-{}", self.0)
    }
}

/// Unique identifier assigned to each segment at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SegmentId(String);

impl SegmentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SegmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SegmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentItem {
    /// Unique identifier
    id: SegmentId,
    /// Label text
    text: String,
    /// Panel shown while this segment is selected
    content: PanelId,
    /// Whether this is the selected segment
    is_selected: bool,
    /// Horizontal translation last written to the panel
    offset: f64,
    /// Visibility last written to the panel
    visible: bool,
}

impl SegmentItem {
    pub fn new(text: impl Into<String>, content: PanelId) -> Self {
        Self {
            id: SegmentId::new(),
            text: text.into(),
            content,
            is_selected: false,
            offset: 0.0,
            visible: false,
        }
    }

    pub fn id(&self) -> &SegmentId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn content(&self) -> PanelId {
        self.content
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Selection is owned by the registry; nothing outside it flips the flag.
    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.is_selected = selected;
    }

    /// Record the panel offset the host was told about.
    pub fn set_offset(&mut self, offset: f64) {
        self.offset = offset;
    }

    /// Record the panel visibility the host was told about.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
