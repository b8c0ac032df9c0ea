//! Selection state for node frames
//!
//! Combines pointer interaction (hover, selected) with validation state
//! (warning, error). Hover and selected pick the fill colors; warning and
//! error only ever affect the outline.

use serde::{Deserialize, Serialize};

/// Interaction and validation state of a node, passed by value at draw time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionMode {
    /// Pointer is over the node body
    #[serde(default)]
    pub hover: bool,
    /// Node is part of the current selection
    #[serde(default)]
    pub selected: bool,
    /// Node has a validation warning
    #[serde(default)]
    pub warning: bool,
    /// Node has a validation error
    #[serde(default)]
    pub error: bool,
}

/// Outline drawn around a node body, in priority order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutlineKind {
    Error,
    Warning,
    Selected,
    /// Any other non-empty state, in practice hover only
    Highlight,
}

// Bit values used by hosts that still pass the state as a flag word
const HOVER_BIT: u32 = 0x1;
const SELECTED_BIT: u32 = 0x2;
const WARNING_BIT: u32 = 0x4;
const ERROR_BIT: u32 = 0x8;

impl SelectionMode {
    /// Idle node: base fills, no outline
    pub const NONE: Self = Self {
        hover: false,
        selected: false,
        warning: false,
        error: false,
    };

    pub fn with_hover(mut self, hover: bool) -> Self {
        self.hover = hover;
        self
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn with_warning(mut self, warning: bool) -> Self {
        self.warning = warning;
        self
    }

    pub fn with_error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    /// True when no state is set
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Index into the fill tables: 0 idle, 1 hover, 2 selected, 3 both
    pub fn brush_index(&self) -> usize {
        usize::from(self.hover) + 2 * usize::from(self.selected)
    }

    /// The single outline to draw, if any
    ///
    /// Priority is fixed: error, then warning, then selected, then the
    /// plain highlight for whatever non-empty state is left.
    pub fn outline(&self) -> Option<OutlineKind> {
        if self.is_none() {
            return None;
        }

        if self.error {
            return Some(OutlineKind::Error);
        }

        if self.warning {
            return Some(OutlineKind::Warning);
        }

        if self.selected {
            return Some(OutlineKind::Selected);
        }

        Some(OutlineKind::Highlight)
    }

    /// Build from a flag word (hover 0x1, selected 0x2, warning 0x4, error 0x8)
    ///
    /// Unknown bits are ignored.
    pub fn from_bits(bits: u32) -> Self {
        Self {
            hover: bits & HOVER_BIT != 0,
            selected: bits & SELECTED_BIT != 0,
            warning: bits & WARNING_BIT != 0,
            error: bits & ERROR_BIT != 0,
        }
    }

    /// Flag word for this state
    pub fn bits(&self) -> u32 {
        let mut bits = 0;
        if self.hover {
            bits |= HOVER_BIT;
        }
        if self.selected {
            bits |= SELECTED_BIT;
        }
        if self.warning {
            bits |= WARNING_BIT;
        }
        if self.error {
            bits |= ERROR_BIT;
        }
        bits
    }

    /// Merge another state into this one (any flag set in either stays set)
    pub fn merge(&self, other: SelectionMode) -> Self {
        Self {
            hover: self.hover || other.hover,
            selected: self.selected || other.selected,
            warning: self.warning || other.warning,
            error: self.error || other.error,
        }
    }
}
