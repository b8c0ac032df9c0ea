//! Integration tests for pin layout on a node
//!
//! Lays out one input column and one output column the way a node body
//! does, then checks what the host would be asked to draw.

use kurbo::{Point, Rect};
use nodeframe_core::pin::{LabelAlign, PinDescriptor, PinDirection, PinKind, SocketIcon, SOCKET_HEIGHT};
use nodeframe_core::theme::PinTheme;

fn setup_node_pins(body: Rect) -> Vec<PinDescriptor> {
    let row = |i: usize| body.y0 + 40.0 + i as f64 * (SOCKET_HEIGHT + 4.0);
    vec![
        PinDescriptor::new("In", "ExecutionPath&", PinDirection::Input)
            .with_position(body.x0 + 4.0, row(0))
            .with_main_execution(true),
        PinDescriptor::new("A", "Single", PinDirection::Input).with_position(body.x0 + 4.0, row(1)),
        PinDescriptor::new("Out", "ExecutionPath", PinDirection::Output)
            .with_position(body.x1 - 4.0 - SOCKET_HEIGHT, row(0)),
        PinDescriptor::new("Result", "Single&", PinDirection::Output)
            .with_position(body.x1 - 4.0 - SOCKET_HEIGHT, row(1)),
    ]
}

#[test]
fn test_execution_pins_use_execution_icon() {
    let pins = setup_node_pins(Rect::new(0.0, 0.0, 200.0, 120.0));
    let theme = PinTheme::default();

    let icons: Vec<_> = pins.iter().map(|pin| pin.layout(None, &theme).icon).collect();
    assert_eq!(
        icons,
        vec![SocketIcon::Execution, SocketIcon::Data, SocketIcon::Execution, SocketIcon::Data]
    );
}

#[test]
fn test_only_pin_under_pointer_is_hovered() {
    let pins = setup_node_pins(Rect::new(0.0, 0.0, 200.0, 120.0));
    let theme = PinTheme::default();
    let pointer = Some(Point::new(10.0, 65.0));

    let hovered: Vec<_> = pins.iter().map(|pin| pin.layout(pointer, &theme).hovered).collect();
    assert_eq!(hovered, vec![false, true, false, false]);
}

#[test]
fn test_labels_face_into_the_node() {
    let body = Rect::new(0.0, 0.0, 200.0, 120.0);
    let pins = setup_node_pins(body);
    let theme = PinTheme::default();

    for pin in &pins {
        let label = pin.layout(None, &theme).label;
        if pin.is_input() {
            assert_eq!(label.align, LabelAlign::Start);
            assert!(label.rect.x0 > pin.bounds().x1);
        } else {
            assert_eq!(label.align, LabelAlign::End);
            assert_eq!(label.rect.x1, pin.bounds().x0);
        }
        assert_eq!(label.rect.height(), pin.height);
    }
}

#[test]
fn test_pin_from_json() {
    let json = r#"{
        "x": 4.0, "y": 40.0, "width": 16.0, "height": 16.0,
        "name": "Then",
        "kind": { "kind": "execution", "type_name": "ExecutionPath" },
        "direction": "Output"
    }"#;
    let pin: PinDescriptor = serde_json::from_str(json).unwrap();

    assert_eq!(
        pin.kind,
        PinKind::Execution {
            type_name: "ExecutionPath".to_string()
        }
    );
    assert!(pin.is_execution());
    assert!(pin.value.is_none());
    assert!(!pin.is_main_execution);
    assert_eq!(pin.bounds(), Rect::new(4.0, 40.0, 20.0, 56.0));
}
