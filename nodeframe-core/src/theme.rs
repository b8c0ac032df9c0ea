//! Theme for node frames and pins
//!
//! One `FrameTheme` is built (or loaded from config) up front and shared
//! read-only by every frame, usually behind an `Arc`. Nothing mutates it
//! during a paint pass.

use crate::selection::OutlineKind;
use crate::style::{OutlineStyle, ShapeColor};
use serde::{Deserialize, Serialize};

/// Corner radius of node title bars and bodies
pub const DEFAULT_CORNER_RADIUS: f64 = 10.0;

/// Fill and outline styles for node frames
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameTheme {
    /// Corner radius used when building frame outlines
    pub corner_radius: f64,
    /// Title fills indexed by hover/selected (idle, hover, selected, both)
    pub title_fills: Vec<ShapeColor>,
    /// Body fills, same indexing as `title_fills`
    pub body_fills: Vec<ShapeColor>,
    pub error_outline: OutlineStyle,
    pub warning_outline: OutlineStyle,
    pub selected_outline: OutlineStyle,
    /// Outline for any other non-idle state
    pub highlight_outline: OutlineStyle,
    pub pin: PinTheme,
}

impl Default for FrameTheme {
    fn default() -> Self {
        Self {
            corner_radius: DEFAULT_CORNER_RADIUS,
            title_fills: vec![
                ShapeColor::rgb(85, 110, 115),
                ShapeColor::rgb(105, 130, 135),
                ShapeColor::rgb(125, 150, 115),
                ShapeColor::rgb(145, 170, 135),
            ],
            body_fills: vec![
                ShapeColor::rgb(115, 125, 125),
                ShapeColor::rgb(135, 145, 145),
                ShapeColor::rgb(115, 125, 125),
                ShapeColor::rgb(135, 145, 145),
            ],
            error_outline: OutlineStyle::new(ShapeColor::rgb(255, 0, 0), 5.0),
            warning_outline: OutlineStyle::new(ShapeColor::rgb(255, 255, 0), 4.0),
            selected_outline: OutlineStyle::new(ShapeColor::rgb(218, 165, 32), 2.0),
            highlight_outline: OutlineStyle::new(ShapeColor::rgb(245, 245, 245), 1.5),
            pin: PinTheme::default(),
        }
    }
}

impl FrameTheme {
    /// Clamp a brush index to the shorter of the two fill tables
    ///
    /// Returns `None` when either table is empty.
    pub fn clamp_brush_index(&self, index: usize) -> Option<usize> {
        let len = self.title_fills.len().min(self.body_fills.len());
        if len == 0 {
            return None;
        }
        Some(index.min(len - 1))
    }

    /// Pen for an outline kind
    pub fn outline(&self, kind: OutlineKind) -> &OutlineStyle {
        match kind {
            OutlineKind::Error => &self.error_outline,
            OutlineKind::Warning => &self.warning_outline,
            OutlineKind::Selected => &self.selected_outline,
            OutlineKind::Highlight => &self.highlight_outline,
        }
    }

    /// Log problems that would make frames render with fewer states
    ///
    /// Returns true when both fill tables cover all four states.
    pub fn check(&self) -> bool {
        if self.title_fills.is_empty() || self.body_fills.is_empty() {
            log::warn!(
                "Frame theme has an empty fill table (title: {}, body: {}); fills will be skipped",
                self.title_fills.len(),
                self.body_fills.len()
            );
        } else if self.title_fills.len() < 4 || self.body_fills.len() < 4 {
            log::warn!(
                "Frame theme has short fill tables (title: {}, body: {}); hover/selected fills will be clamped",
                self.title_fills.len(),
                self.body_fills.len()
            );
        } else {
            return true;
        }
        false
    }
}

/// Presentation values for pin sockets and labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinTheme {
    /// Label color when the socket is idle
    pub label_color: ShapeColor,
    /// Label color while the pointer is over the socket
    pub label_hover_color: ShapeColor,
    /// Growth of the socket on every side while hovered
    pub hover_inflate: f64,
    /// Gap between an input socket and its label
    pub label_gap: f64,
    /// Width reserved for a label
    pub label_span: f64,
}

impl Default for PinTheme {
    fn default() -> Self {
        Self {
            label_color: ShapeColor::rgb(0, 0, 0),
            label_hover_color: ShapeColor::rgb(0, 0, 255),
            hover_inflate: 4.0,
            label_gap: 2.0,
            label_span: 1000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables_have_four_entries() {
        let theme = FrameTheme::default();
        assert_eq!(theme.title_fills.len(), 4);
        assert_eq!(theme.body_fills.len(), 4);
        for index in 0..4 {
            assert_eq!(theme.clamp_brush_index(index), Some(index));
        }
    }

    #[test]
    fn test_clamp_to_shorter_table() {
        let mut theme = FrameTheme::default();
        theme.body_fills.truncate(2);
        assert_eq!(theme.clamp_brush_index(3), Some(1));
        assert_eq!(theme.clamp_brush_index(0), Some(0));
    }

    #[test]
    fn test_clamp_empty_table() {
        let mut theme = FrameTheme::default();
        theme.title_fills.clear();
        assert_eq!(theme.clamp_brush_index(0), None);
    }

    #[test]
    fn test_check_flags_incomplete_tables() {
        assert!(FrameTheme::default().check());

        let mut short = FrameTheme::default();
        short.title_fills.truncate(3);
        assert!(!short.check());

        let mut empty = FrameTheme::default();
        empty.body_fills.clear();
        assert!(!empty.check());
    }

    #[test]
    fn test_outline_widths() {
        let theme = FrameTheme::default();
        assert_eq!(theme.outline(OutlineKind::Error).width, 5.0);
        assert_eq!(theme.outline(OutlineKind::Warning).width, 4.0);
        assert_eq!(theme.outline(OutlineKind::Selected).width, 2.0);
        assert_eq!(theme.outline(OutlineKind::Highlight).width, 1.5);
    }
}
