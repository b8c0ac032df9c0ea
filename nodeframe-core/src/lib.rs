// Nodeframe Core Library
// Node frame and pin presentation for node-graph editors

pub mod geometry;
pub mod selection;
pub mod style;
pub mod theme;
pub mod surface;
pub mod node_frame;
pub mod renderer;
pub mod pin;
pub mod config;
pub mod error;

pub use geometry::{build_rounded_rect, RoundedSide};
pub use node_frame::NodeFrame;
pub use pin::{PinDescriptor, PinDirection, PinKind};
pub use selection::SelectionMode;
pub use surface::Surface;
pub use theme::FrameTheme;
