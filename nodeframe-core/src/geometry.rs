//! Frame outline geometry
//!
//! Builds the closed outlines used for node title bars and bodies. Corners
//! are rounded per horizontal edge, so a title bar can round only its top
//! while the body rounds both top and bottom.
//!
//! Coordinates are screen space (y grows downward), so arcs with a positive
//! sweep run clockwise on screen.

use kurbo::{Arc, BezPath, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

/// Flattening tolerance for corner arcs
const ARC_TOLERANCE: f64 = 0.1;

/// Which horizontal edges of a rectangle get arc corners
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundedSide {
    /// Round the top-left and top-right corners
    pub top: bool,
    /// Round the bottom-right and bottom-left corners
    pub bottom: bool,
}

impl RoundedSide {
    /// Square corners everywhere
    pub const NONE: Self = Self { top: false, bottom: false };
    /// Rounded top edge only
    pub const TOP: Self = Self { top: true, bottom: false };
    /// Rounded bottom edge only
    pub const BOTTOM: Self = Self { top: false, bottom: true };
    /// Both edges rounded
    pub const ALL: Self = Self { top: true, bottom: true };

    /// Combine two side selections
    pub const fn union(self, other: Self) -> Self {
        Self {
            top: self.top || other.top,
            bottom: self.bottom || other.bottom,
        }
    }

    /// True when no edge is rounded
    pub const fn is_none(&self) -> bool {
        !self.top && !self.bottom
    }
}

/// Build a closed outline for `bounds` with the given corner radius
///
/// With `radius == 0` or `RoundedSide::NONE` the result is the plain
/// rectangle: top-left, top-right, bottom-right, bottom-left.
///
/// Otherwise the outline is traced clockwise starting on the left side of
/// the top edge. Rounded edges get quarter arcs of `radius`; square edges
/// get straight segments that meet at the literal rectangle corner.
///
/// The radius is not validated. A radius larger than half the width or
/// height produces overlapping arcs, and a negative radius produces
/// inverted ones.
pub fn build_rounded_rect(bounds: Rect, radius: f64, side: RoundedSide) -> BezPath {
    let mut path = BezPath::new();

    if radius == 0.0 || side.is_none() {
        path.move_to((bounds.x0, bounds.y0));
        path.line_to((bounds.x1, bounds.y0));
        path.line_to((bounds.x1, bounds.y1));
        path.line_to((bounds.x0, bounds.y1));
        path.close_path();
        return path;
    }

    let Rect { x0, y0, x1, y1 } = bounds;

    if side.top {
        // top left, from the left side to the top side
        path.move_to((x0, y0 + radius));
        append_corner_arc(&mut path, Point::new(x0 + radius, y0 + radius), radius, PI);

        // top right, from the top side to the right side
        path.line_to((x1 - radius, y0));
        append_corner_arc(&mut path, Point::new(x1 - radius, y0 + radius), radius, 1.5 * PI);
    } else {
        path.move_to((x0, y0 + radius));
        path.line_to((x0, y0));
        path.line_to((x0 + radius, y0));

        path.line_to((x1 - radius, y0));
        path.line_to((x1, y0));
        path.line_to((x1, y0 + radius));
    }

    if side.bottom {
        // bottom right, from the right side to the bottom side
        path.line_to((x1, y1 - radius));
        append_corner_arc(&mut path, Point::new(x1 - radius, y1 - radius), radius, 0.0);

        // bottom left, from the bottom side to the left side
        path.line_to((x0 + radius, y1));
        append_corner_arc(&mut path, Point::new(x0 + radius, y1 - radius), radius, FRAC_PI_2);
    } else {
        path.line_to((x1, y1 - radius));
        path.line_to((x1, y1));
        path.line_to((x1 - radius, y1));

        path.line_to((x0 + radius, y1));
        path.line_to((x0, y1));
        path.line_to((x0, y1 - radius));
    }

    path.close_path();
    path
}

/// Append a clockwise quarter arc; the path must already sit at its start
fn append_corner_arc(path: &mut BezPath, center: Point, radius: f64, start_angle: f64) {
    let arc = Arc {
        center,
        radii: Vec2::new(radius, radius),
        start_angle,
        sweep_angle: FRAC_PI_2,
        x_rotation: 0.0,
    };
    path.extend(arc.append_iter(ARC_TOLERANCE));
}

/// Snap a rectangle to whole pixels
///
/// Origin and size are rounded independently (ties to even), so the width
/// of the result is the rounded width of the input rather than the distance
/// between two rounded edges.
pub fn round_to_pixels(rect: Rect) -> Rect {
    Rect::from_origin_size(
        (rect.x0.round_ties_even(), rect.y0.round_ties_even()),
        (rect.width().round_ties_even(), rect.height().round_ties_even()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{ParamCurve, PathEl, Shape};

    const EPSILON: f64 = 1e-9;

    fn assert_rect_close(a: Rect, b: Rect) {
        assert!((a.x0 - b.x0).abs() < EPSILON, "{:?} vs {:?}", a, b);
        assert!((a.y0 - b.y0).abs() < EPSILON, "{:?} vs {:?}", a, b);
        assert!((a.x1 - b.x1).abs() < EPSILON, "{:?} vs {:?}", a, b);
        assert!((a.y1 - b.y1).abs() < EPSILON, "{:?} vs {:?}", a, b);
    }

    fn plain_rect_elements(r: Rect) -> Vec<PathEl> {
        vec![
            PathEl::MoveTo(Point::new(r.x0, r.y0)),
            PathEl::LineTo(Point::new(r.x1, r.y0)),
            PathEl::LineTo(Point::new(r.x1, r.y1)),
            PathEl::LineTo(Point::new(r.x0, r.y1)),
            PathEl::ClosePath,
        ]
    }

    #[test]
    fn test_zero_radius_is_plain_rectangle() {
        let r = Rect::new(10.0, 20.0, 110.0, 70.0);
        for side in [RoundedSide::NONE, RoundedSide::TOP, RoundedSide::BOTTOM, RoundedSide::ALL] {
            let path = build_rounded_rect(r, 0.0, side);
            assert_eq!(path.elements(), plain_rect_elements(r).as_slice());
        }
    }

    #[test]
    fn test_no_side_is_plain_rectangle() {
        let r = Rect::new(0.0, 0.0, 100.0, 30.0);
        let path = build_rounded_rect(r, 10.0, RoundedSide::NONE);
        assert_eq!(path.elements(), plain_rect_elements(r).as_slice());
    }

    #[test]
    fn test_rounded_outline_keeps_bounds() {
        let r = Rect::new(5.0, 5.0, 105.0, 125.0);
        for side in [RoundedSide::TOP, RoundedSide::BOTTOM, RoundedSide::ALL] {
            let path = build_rounded_rect(r, 10.0, side);
            assert_rect_close(path.bounding_box(), r);
        }
    }

    #[test]
    fn test_rounded_outline_is_single_closed_contour() {
        let r = Rect::new(0.0, 0.0, 100.0, 120.0);
        let path = build_rounded_rect(r, 10.0, RoundedSide::ALL);
        let elements = path.elements();

        let move_count = elements.iter().filter(|el| matches!(el, PathEl::MoveTo(_))).count();
        assert_eq!(move_count, 1);
        assert_eq!(elements.last(), Some(&PathEl::ClosePath));

        // The closing segment returns to the start point
        let segments: Vec<_> = path.segments().collect();
        let first = segments.first().expect("outline has segments");
        let last = segments.last().expect("outline has segments");
        assert_eq!(first.start(), last.end());
    }

    #[test]
    fn test_top_only_has_square_bottom_corners() {
        let r = Rect::new(0.0, 0.0, 100.0, 30.0);
        let path = build_rounded_rect(r, 10.0, RoundedSide::TOP);
        let elements = path.elements();

        assert_eq!(elements[0], PathEl::MoveTo(Point::new(0.0, 10.0)));
        assert!(elements.contains(&PathEl::LineTo(Point::new(100.0, 30.0))));
        assert!(elements.contains(&PathEl::LineTo(Point::new(0.0, 30.0))));
        assert!(!elements.contains(&PathEl::LineTo(Point::new(0.0, 0.0))));
    }

    #[test]
    fn test_bottom_only_has_square_top_corners() {
        let r = Rect::new(0.0, 0.0, 100.0, 30.0);
        let path = build_rounded_rect(r, 10.0, RoundedSide::BOTTOM);
        let elements = path.elements();

        assert_eq!(elements[0], PathEl::MoveTo(Point::new(0.0, 10.0)));
        assert_eq!(elements[1], PathEl::LineTo(Point::new(0.0, 0.0)));
        assert!(elements.contains(&PathEl::LineTo(Point::new(100.0, 0.0))));
        assert!(!elements.contains(&PathEl::LineTo(Point::new(100.0, 30.0))));
    }

    #[test]
    fn test_rounded_sides_contain_arcs() {
        let r = Rect::new(0.0, 0.0, 100.0, 120.0);
        let curves = |side| {
            build_rounded_rect(r, 10.0, side)
                .elements()
                .iter()
                .filter(|el| matches!(el, PathEl::CurveTo(..)))
                .count()
        };

        assert_eq!(curves(RoundedSide::NONE), 0);
        assert!(curves(RoundedSide::TOP) > 0);
        assert_eq!(curves(RoundedSide::TOP), curves(RoundedSide::BOTTOM));
        assert_eq!(curves(RoundedSide::ALL), 2 * curves(RoundedSide::TOP));
    }

    #[test]
    fn test_oversized_radius_is_not_clamped() {
        let r = Rect::new(0.0, 0.0, 20.0, 20.0);
        let path = build_rounded_rect(r, 30.0, RoundedSide::ALL);

        // Arcs overshoot the rectangle instead of being corrected
        assert!(path.bounding_box().width() > r.width());
    }

    #[test]
    fn test_union() {
        assert_eq!(RoundedSide::TOP.union(RoundedSide::BOTTOM), RoundedSide::ALL);
        assert_eq!(RoundedSide::NONE.union(RoundedSide::NONE), RoundedSide::NONE);
        assert!(RoundedSide::default().is_none());
    }

    #[test]
    fn test_round_to_pixels() {
        let r = Rect::from_origin_size((10.4, 19.6), (99.6, 30.3));
        assert_eq!(round_to_pixels(r), Rect::new(10.0, 20.0, 110.0, 50.0));

        // Ties go to the even neighbor
        let tie = Rect::from_origin_size((2.5, 3.5), (10.0, 10.0));
        assert_eq!(round_to_pixels(tie), Rect::new(2.0, 4.0, 12.0, 14.0));
    }
}
