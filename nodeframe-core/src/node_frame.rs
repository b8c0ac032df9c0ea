//! Node frames
//!
//! A `NodeFrame` is the visual block of one node: a title bar drawn over a
//! body, both with rounded corners. Geometry is fixed at construction; a
//! node that changes size gets a new frame.

use crate::geometry::{build_rounded_rect, round_to_pixels, RoundedSide};
use crate::selection::SelectionMode;
use crate::surface::Surface;
use crate::theme::FrameTheme;
use kurbo::{BezPath, Point, Rect};
use std::sync::Arc;

/// Title bar and body outlines for a single node
#[derive(Clone, Debug)]
pub struct NodeFrame {
    /// Text shown in the title bar
    pub title: String,

    title_path: BezPath,
    body_path: BezPath,

    /// Unrounded body rectangle, used for hover testing
    hover_rect: Rect,

    theme: Arc<FrameTheme>,
}

impl NodeFrame {
    /// Create a frame with the default theme
    ///
    /// `body_rect` may or may not include the title area.
    pub fn new(title_rect: Rect, body_rect: Rect) -> Self {
        Self::with_theme(title_rect, body_rect, Arc::new(FrameTheme::default()))
    }

    /// Create a frame sharing an existing theme
    ///
    /// Both rectangles are snapped to whole pixels before the outlines are
    /// built. The title rounds its top corners only; the body rounds all four.
    pub fn with_theme(title_rect: Rect, body_rect: Rect, theme: Arc<FrameTheme>) -> Self {
        theme.check();

        let radius = theme.corner_radius;
        let body_side = RoundedSide::TOP.union(RoundedSide::BOTTOM);
        let title_path = build_rounded_rect(round_to_pixels(title_rect), radius, RoundedSide::TOP);
        let body_path = build_rounded_rect(round_to_pixels(body_rect), radius, body_side);

        log::debug!(
            "Built node frame: title {:?}, body {:?}, radius {}",
            title_rect,
            body_rect,
            radius
        );

        Self {
            title: String::new(),
            title_path,
            body_path,
            hover_rect: body_rect,
            theme,
        }
    }

    /// Set the title text
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// True if the point lies inside the body rectangle given at construction
    ///
    /// Corner rounding is ignored. The left and top edges are inside, the
    /// right and bottom edges are not.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.hover_rect.contains(Point::new(x, y))
    }

    /// Paint the frame
    ///
    /// The body is filled first and the title on top of it, both with the
    /// fill chosen by hover/selected. Any non-idle state then adds exactly
    /// one outline around the body.
    pub fn draw(&self, surface: &mut dyn Surface, mode: SelectionMode) {
        if let Some(index) = self.theme.clamp_brush_index(mode.brush_index()) {
            surface.fill_path(&self.body_path, self.theme.body_fills[index]);
            surface.fill_path(&self.title_path, self.theme.title_fills[index]);
        }

        let Some(kind) = mode.outline() else {
            return;
        };

        log::trace!("Outlining node frame {:?} with {:?}", self.title, kind);
        surface.stroke_path(&self.body_path, self.theme.outline(kind));
    }

    pub fn title_path(&self) -> &BezPath {
        &self.title_path
    }

    pub fn body_path(&self) -> &BezPath {
        &self.body_path
    }

    /// Body rectangle as passed to the constructor
    pub fn hover_rect(&self) -> Rect {
        self.hover_rect
    }

    pub fn theme(&self) -> &Arc<FrameTheme> {
        &self.theme
    }
}

impl AsRef<NodeFrame> for NodeFrame {
    fn as_ref(&self) -> &NodeFrame {
        self
    }
}
