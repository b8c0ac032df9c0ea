//! Pin descriptors
//!
//! A pin is a connector socket on a node. Its position and size come from
//! the graph layout; this module only holds the record and works out where
//! the socket icon and label go. Icons and text are drawn by the host.

use crate::style::ShapeColor;
use crate::theme::PinTheme;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Default socket height
pub const SOCKET_HEIGHT: f64 = 16.0;

/// Type name that marks a control-flow pin
pub const EXECUTION_TYPE_NAME: &str = "ExecutionPath";

/// Marker some hosts add to by-reference type names
const REFERENCE_MARKER: char = '&';

/// What flows through a pin
///
/// Both variants keep the type name exactly as declared.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PinKind {
    /// Control-flow ordering, no value
    Execution { type_name: String },
    /// A value of the named type
    Data { type_name: String },
}

impl PinKind {
    /// Classify a declared type name
    ///
    /// Reference markers are ignored wherever they appear, so
    /// `ExecutionPath&` and `&ExecutionPath` are both execution pins.
    pub fn from_type_name(type_name: &str) -> Self {
        let type_name = type_name.to_string();
        if type_name.replace(REFERENCE_MARKER, "") == EXECUTION_TYPE_NAME {
            PinKind::Execution { type_name }
        } else {
            PinKind::Data { type_name }
        }
    }

    pub fn is_execution(&self) -> bool {
        matches!(self, PinKind::Execution { .. })
    }

    /// Type name as declared, reference markers included
    pub fn type_name(&self) -> &str {
        match self {
            PinKind::Execution { type_name } | PinKind::Data { type_name } => type_name,
        }
    }
}

/// Whether a pin consumes or produces a value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PinDirection {
    Input,
    Output,
}

/// Layout record for one connector socket
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PinDescriptor {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Display name
    pub name: String,
    pub kind: PinKind,
    pub direction: PinDirection,
    /// Current value; opaque to this crate
    #[serde(default)]
    pub value: Option<serde_json::Value>,
    /// Entry point of the graph's main execution flow
    #[serde(default)]
    pub is_main_execution: bool,
}

impl PinDescriptor {
    /// Create a pin at the origin with a square socket of `SOCKET_HEIGHT`
    pub fn new(name: impl Into<String>, type_name: &str, direction: PinDirection) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: SOCKET_HEIGHT,
            height: SOCKET_HEIGHT,
            name: name.into(),
            kind: PinKind::from_type_name(type_name),
            direction,
            value: None,
            is_main_execution: false,
        }
    }

    /// Set position
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set size
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set value
    pub fn with_value(mut self, value: serde_json::Value) -> Self {
        self.value = Some(value);
        self
    }

    /// Mark as the main execution entry point
    pub fn with_main_execution(mut self, is_main_execution: bool) -> Self {
        self.is_main_execution = is_main_execution;
        self
    }

    /// Socket rectangle
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size((self.x, self.y), (self.width, self.height))
    }

    pub fn is_execution(&self) -> bool {
        self.kind.is_execution()
    }

    pub fn is_input(&self) -> bool {
        self.direction == PinDirection::Input
    }

    /// Work out where the socket icon and label go for this redraw
    ///
    /// Input labels sit right of the socket, left aligned; output labels sit
    /// left of it, right aligned. A hovered socket grows on every side and
    /// its label switches color.
    pub fn layout(&self, pointer: Option<Point>, theme: &PinTheme) -> PinLayout {
        let bounds = self.bounds();
        let hovered = pointer.is_some_and(|point| bounds.contains(point));

        let socket = if hovered {
            bounds.inflate(theme.hover_inflate, theme.hover_inflate)
        } else {
            bounds
        };

        let icon = if self.is_execution() {
            SocketIcon::Execution
        } else {
            SocketIcon::Data
        };

        let (rect, align) = match self.direction {
            PinDirection::Input => (
                Rect::from_origin_size(
                    (self.x + self.width + theme.label_gap, self.y),
                    (theme.label_span, self.height),
                ),
                LabelAlign::Start,
            ),
            PinDirection::Output => (
                Rect::from_origin_size(
                    (self.x - theme.label_span, self.y),
                    (theme.label_span, self.height),
                ),
                LabelAlign::End,
            ),
        };

        let color = if hovered {
            theme.label_hover_color
        } else {
            theme.label_color
        };

        PinLayout {
            hovered,
            socket,
            icon,
            label: LabelLayout { rect, align, color },
        }
    }
}

/// Which socket image the host should draw
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SocketIcon {
    Execution,
    Data,
}

/// Horizontal label alignment; labels are always vertically centered
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelAlign {
    Start,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelLayout {
    /// Box the label is laid out in
    pub rect: Rect,
    pub align: LabelAlign,
    pub color: ShapeColor,
}

/// Placement of a pin's socket icon and label
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinLayout {
    pub hovered: bool,
    /// Where to draw the socket icon
    pub socket: Rect,
    pub icon: SocketIcon,
    pub label: LabelLayout,
}
