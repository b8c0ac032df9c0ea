//! Per-redraw rendering of node frames
//!
//! Paints a list of frames back to front. Hover is derived from the pointer
//! here so only the top-most frame under it lights up, then merged with each
//! node's own selection and validation state.

use crate::hit_test::hit_test_frames;
use crate::node_frame::NodeFrame;
use crate::selection::SelectionMode;
use crate::surface::{SceneSurface, Surface};
use kurbo::{Affine, Point};
use vello::Scene;

/// A frame together with the state owned by the graph layer
#[derive(Clone, Copy, Debug)]
pub struct FrameState<'a> {
    pub frame: &'a NodeFrame,
    /// Selection and validation state; hover is filled in by the renderer
    pub mode: SelectionMode,
}

impl AsRef<NodeFrame> for FrameState<'_> {
    fn as_ref(&self) -> &NodeFrame {
        self.frame
    }
}

/// Draw frames in order onto a surface
///
/// # Arguments
///
/// * `frames` - Frames and their state, back to front
/// * `pointer` - Pointer position in frame space, if the pointer is over the canvas
/// * `surface` - Target surface
///
/// # Returns
///
/// The index of the hovered frame, if any
pub fn render_frames(
    frames: &[FrameState<'_>],
    pointer: Option<Point>,
    surface: &mut dyn Surface,
) -> Option<usize> {
    let hovered = pointer.and_then(|point| hit_test_frames(frames, point));

    for (index, state) in frames.iter().enumerate() {
        let mode = state
            .mode
            .merge(SelectionMode::NONE.with_hover(hovered == Some(index)));
        state.frame.draw(surface, mode);
    }

    hovered
}

/// Draw frames into a Vello scene with a base transform (camera pan/zoom)
///
/// The pointer is given in screen space and mapped back through the
/// transform before hit testing.
pub fn render_frames_to_scene(
    frames: &[FrameState<'_>],
    pointer: Option<Point>,
    scene: &mut Scene,
    base_transform: Affine,
) -> Option<usize> {
    let local_pointer = pointer.map(|point| base_transform.inverse() * point);
    let mut surface = SceneSurface::new(scene, base_transform);
    render_frames(frames, local_pointer, &mut surface)
}
