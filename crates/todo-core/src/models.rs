//! Todo Models
//!
//! The single persisted entity. Field names on the wire follow the
//! `localStorage` layout (`isComplete`, `isEditing`).

use serde::{Deserialize, Serialize};

/// One todo entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, millisecond-timestamp shaped
    pub id: u64,
    /// Trimmed, never empty
    pub text: String,
    #[serde(rename = "isComplete", default)]
    pub is_complete: bool,
    /// Whether the row is showing its edit field (UI only)
    #[serde(rename = "isEditing", default)]
    pub is_editing: bool,
}

impl Item {
    /// Create a new, incomplete item in view mode
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            is_complete: false,
            is_editing: false,
        }
    }
}
