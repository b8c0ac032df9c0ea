//! Drawing surfaces
//!
//! Frames paint through the `Surface` trait so the same draw code can target
//! a Vello scene on screen or a recorder in tests.

use crate::style::{OutlineStyle, ShapeColor};
use kurbo::{Affine, BezPath};
use vello::peniko::Fill;
use vello::Scene;

/// Something that can fill and outline closed paths with solid colors
pub trait Surface {
    /// Fill a closed path (non-zero winding)
    fn fill_path(&mut self, path: &BezPath, color: ShapeColor);

    /// Outline a path with a solid pen
    fn stroke_path(&mut self, path: &BezPath, pen: &OutlineStyle);
}

impl Surface for Scene {
    fn fill_path(&mut self, path: &BezPath, color: ShapeColor) {
        self.fill(Fill::NonZero, Affine::IDENTITY, color.to_peniko(), None, path);
    }

    fn stroke_path(&mut self, path: &BezPath, pen: &OutlineStyle) {
        self.stroke(&pen.to_stroke(), Affine::IDENTITY, pen.color.to_peniko(), None, path);
    }
}

/// A Vello scene with a base transform (camera pan/zoom)
pub struct SceneSurface<'a> {
    scene: &'a mut Scene,
    transform: Affine,
}

impl<'a> SceneSurface<'a> {
    pub fn new(scene: &'a mut Scene, transform: Affine) -> Self {
        Self { scene, transform }
    }

    /// Base transform applied to every path
    pub fn transform(&self) -> Affine {
        self.transform
    }
}

impl Surface for SceneSurface<'_> {
    fn fill_path(&mut self, path: &BezPath, color: ShapeColor) {
        self.scene
            .fill(Fill::NonZero, self.transform, color.to_peniko(), None, path);
    }

    fn stroke_path(&mut self, path: &BezPath, pen: &OutlineStyle) {
        self.scene.stroke(
            &pen.to_stroke(),
            self.transform,
            pen.color.to_peniko(),
            None,
            path,
        );
    }
}

/// A single recorded paint operation
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Fill { path: BezPath, color: ShapeColor },
    Stroke { path: BezPath, pen: OutlineStyle },
}

/// Surface that records paint operations in order instead of drawing them
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands, oldest first
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Recorded fills, oldest first
    pub fn fills(&self) -> impl Iterator<Item = (&BezPath, ShapeColor)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Fill { path, color } => Some((path, *color)),
            DrawCommand::Stroke { .. } => None,
        })
    }

    /// Recorded outlines, oldest first
    pub fn strokes(&self) -> impl Iterator<Item = (&BezPath, &OutlineStyle)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Stroke { path, pen } => Some((path, pen)),
            DrawCommand::Fill { .. } => None,
        })
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn fill_path(&mut self, path: &BezPath, color: ShapeColor) {
        self.commands.push(DrawCommand::Fill {
            path: path.clone(),
            color,
        });
    }

    fn stroke_path(&mut self, path: &BezPath, pen: &OutlineStyle) {
        self.commands.push(DrawCommand::Stroke {
            path: path.clone(),
            pen: *pen,
        });
    }
}
