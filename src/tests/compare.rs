//! Comparison slider tests: drag state machine and projection.

use crate::core::compare::{CompareSlider, PointerEvent};

const WIDTH: f64 = 600.0;

#[test]
fn starts_centered_and_idle() {
    let slider = CompareSlider::new();

    assert_eq!(slider.position(), CompareSlider::DEFAULT_POSITION);
    assert!(!slider.is_dragging());
}

#[test]
fn press_begins_a_drag_without_moving_the_boundary() {
    let mut slider = CompareSlider::new();

    let position = slider.handle(PointerEvent::Down { x: 10.0 }, WIDTH);

    assert!(slider.is_dragging());
    assert_eq!(position, CompareSlider::DEFAULT_POSITION);
}

#[test]
fn moves_without_a_press_are_ignored() {
    let mut slider = CompareSlider::new();

    let position = slider.handle(PointerEvent::Move { x: 10.0 }, WIDTH);

    assert_eq!(position, CompareSlider::DEFAULT_POSITION);
}

#[test]
fn drag_projects_the_pointer_to_a_percentage() {
    let mut slider = CompareSlider::new();
    slider.handle(PointerEvent::Down { x: 0.0 }, WIDTH);

    assert_eq!(slider.handle(PointerEvent::Move { x: 150.0 }, WIDTH), 25.0);
    assert_eq!(slider.handle(PointerEvent::Move { x: 300.0 }, WIDTH), 50.0);
    assert_eq!(slider.handle(PointerEvent::Move { x: 450.0 }, WIDTH), 75.0);
}

#[test]
fn position_clamps_to_the_container_bounds() {
    let mut slider = CompareSlider::new();
    slider.handle(PointerEvent::Down { x: 0.0 }, WIDTH);

    assert_eq!(slider.handle(PointerEvent::Move { x: -50.0 }, WIDTH), 0.0);
    assert_eq!(slider.handle(PointerEvent::Move { x: 900.0 }, WIDTH), 100.0);
}

#[test]
fn release_ends_the_drag() {
    let mut slider = CompareSlider::new();
    slider.handle(PointerEvent::Down { x: 0.0 }, WIDTH);
    slider.handle(PointerEvent::Move { x: 150.0 }, WIDTH);

    slider.handle(PointerEvent::Up, WIDTH);
    let position = slider.handle(PointerEvent::Move { x: 500.0 }, WIDTH);

    assert!(!slider.is_dragging());
    assert_eq!(position, 25.0);
}

#[test]
fn zero_width_leaves_the_position_unchanged() {
    let mut slider = CompareSlider::new();
    slider.handle(PointerEvent::Down { x: 0.0 }, 0.0);

    let position = slider.handle(PointerEvent::Move { x: 10.0 }, 0.0);

    assert_eq!(position, CompareSlider::DEFAULT_POSITION);
    assert!(!position.is_nan());
}

#[test]
fn negative_width_is_treated_like_zero() {
    let mut slider = CompareSlider::new();
    slider.handle(PointerEvent::Down { x: 0.0 }, -1.0);

    assert_eq!(
        slider.handle(PointerEvent::Move { x: 10.0 }, -1.0),
        CompareSlider::DEFAULT_POSITION
    );
}

#[test]
fn reset_restores_the_default() {
    let mut slider = CompareSlider::new();
    slider.handle(PointerEvent::Down { x: 0.0 }, WIDTH);
    slider.handle(PointerEvent::Move { x: 150.0 }, WIDTH);

    slider.reset();

    assert_eq!(slider.position(), CompareSlider::DEFAULT_POSITION);
    assert!(!slider.is_dragging());
}

#[test]
fn pointer_events_deserialize_from_the_webview_payload() {
    let down: PointerEvent = serde_json::from_str(r#"{"kind":"down","x":12.5}"#).unwrap();
    let up: PointerEvent = serde_json::from_str(r#"{"kind":"up"}"#).unwrap();

    assert_eq!(down, PointerEvent::Down { x: 12.5 });
    assert_eq!(up, PointerEvent::Up);
}
