//! Before/after comparison slider core.
//!
//! The webview renders two full-bleed image layers with the "after" layer
//! clipped to `position`% of the container width; this module owns the
//! drag state machine and the pointer-to-position projection. Mouse and
//! touch input feed the same events.

use serde::Deserialize;

/// Pointer input, already reduced to the horizontal axis.
///
/// `x` is the pointer offset from the container's left edge in pixels.
/// Releasing the pointer anywhere, including outside the window, maps to
/// [`PointerEvent::Up`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PointerEvent {
    Down { x: f64 },
    Move { x: f64 },
    Up,
}

/// Whether a drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragState {
    Idle,
    Dragging,
}

/// Reveal boundary between the original and the processed image.
///
/// `position` is the percentage width of the "after" layer, always within
/// `[0, 100]`. State is ephemeral; a fresh mount starts back at the
/// default.
#[derive(Debug)]
pub struct CompareSlider {
    position: f64,
    drag: DragState,
}

impl CompareSlider {
    /// Initial reveal position, centered.
    pub const DEFAULT_POSITION: f64 = 50.0;

    pub fn new() -> Self {
        Self {
            position: Self::DEFAULT_POSITION,
            drag: DragState::Idle,
        }
    }

    /// Current reveal position in `[0, 100]`.
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.drag == DragState::Dragging
    }

    /// Resets to the default position, as on a fresh mount.
    pub fn reset(&mut self) {
        self.position = Self::DEFAULT_POSITION;
        self.drag = DragState::Idle;
    }

    /// Feeds one pointer event; `width` is the container width in pixels
    /// at event time. Returns the (possibly updated) position.
    ///
    /// Presses begin a drag without moving the boundary; moves project the
    /// pointer while dragging; a zero-width container leaves the position
    /// untouched rather than dividing by zero.
    pub fn handle(&mut self, event: PointerEvent, width: f64) -> f64 {
        match event {
            PointerEvent::Down { .. } => {
                self.drag = DragState::Dragging;
            }
            PointerEvent::Move { x } => {
                if self.drag == DragState::Dragging {
                    if let Some(position) = project(x, width) {
                        self.position = position;
                    }
                }
            }
            PointerEvent::Up => {
                self.drag = DragState::Idle;
            }
        }
        self.position
    }
}

impl Default for CompareSlider {
    fn default() -> Self {
        Self::new()
    }
}

/// Projects a pointer offset to a clamped percentage of `width`.
///
/// Returns `None` for non-positive widths so callers keep the previous
/// position instead of producing NaN.
fn project(x: f64, width: f64) -> Option<f64> {
    if width <= 0.0 {
        return None;
    }
    Some((x / width * 100.0).clamp(0.0, 100.0))
}
