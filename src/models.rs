//! Frontend Models
//!
//! Data structures for the packing list.

use serde::{Deserialize, Serialize};

/// Largest quantity the form offers; AddItem rejects anything above it
pub const MAX_QUANTITY: u8 = 20;

/// A single packing-list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub description: String,
    pub quantity: u8,
    pub packed: bool,
}

impl Item {
    /// Create a new unpacked item
    pub fn new(id: u32, description: String, quantity: u8) -> Self {
        Self {
            id,
            description,
            quantity,
            packed: false,
        }
    }
}

/// Field used to order the displayed list (stored order is never changed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Insertion order
    #[default]
    Input,
    /// Lexicographic by description
    Description,
    /// Unpacked before packed
    Packed,
    /// Ascending quantity
    Quantity,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Input => "input",
            SortKey::Description => "description",
            SortKey::Packed => "packed",
            SortKey::Quantity => "quantity",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "description" => SortKey::Description,
            "packed" => SortKey::Packed,
            "quantity" => SortKey::Quantity,
            _ => SortKey::Input,
        }
    }
}

/// Derived summary over the current list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackingStats {
    /// No items yet, nothing to report
    Empty,
    Progress {
        total: usize,
        packed: usize,
        /// Rounded up, so any packed item registers as progress
        percent: u32,
    },
}
