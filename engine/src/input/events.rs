use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::PhysicalKey;

use super::LiveInput;

/// Smooth-scroll pixels that make up one scroll unit.
const PIXELS_PER_UNIT: f64 = 16.0;

/// Records `event` in `live`. `scale` maps physical window pixels to canvas
/// pixels on each axis. Returns false for events that carry no input.
pub(crate) fn record(event: &WindowEvent, live: &mut LiveInput, scale: (f64, f64)) -> bool {
    match event {
        WindowEvent::KeyboardInput { event, .. } => {
            // keys without a layout independent code can't be queried anyway
            let PhysicalKey::Code(code) = event.physical_key else {
                return true;
            };
            match event.state {
                ElementState::Pressed => live.press_key(code),
                ElementState::Released => live.release_key(code),
            }
        }
        WindowEvent::MouseInput { state, button, .. } => match state {
            ElementState::Pressed => live.press_button(*button),
            ElementState::Released => live.release_button(*button),
        },
        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = to_canvas((position.x, position.y), scale);
            live.move_cursor(x, y);
        }
        WindowEvent::MouseWheel { delta, .. } => live.scroll(scroll_units(delta)),
        // releases that happen while unfocused are never delivered
        WindowEvent::Focused(false) => live.release_all(),
        _ => return false,
    }
    true
}

pub(crate) fn to_canvas(physical: (f64, f64), scale: (f64, f64)) -> (i32, i32) {
    (
        (physical.0 * scale.0).floor() as i32,
        (physical.1 * scale.1).floor() as i32,
    )
}

/// Wheel delta in scroll units, positive when scrolling down.
pub(crate) fn scroll_units(delta: &MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -(*y as f64),
        MouseScrollDelta::PixelDelta(position) => -position.y / PIXELS_PER_UNIT,
    }
}

#[cfg(test)]
mod test {
    use winit::dpi::PhysicalPosition;

    use super::*;
    use crate::input::{InputSnapshot, KeyCode};

    #[test]
    fn losing_focus_releases_held_keys() {
        let mut live = LiveInput::new();
        let mut snap = InputSnapshot::new();
        live.press_key(KeyCode::ArrowRight);
        snap.advance(&mut live);
        assert!(snap.is_key_pressed(KeyCode::ArrowRight));

        assert!(record(&WindowEvent::Focused(false), &mut live, (1.0, 1.0)));
        snap.advance(&mut live);
        assert!(!snap.is_key_pressed(KeyCode::ArrowRight));
        assert!(!record(&WindowEvent::Focused(true), &mut live, (1.0, 1.0)));
    }

    #[test]
    fn wheel_up_is_negative() {
        assert_eq!(scroll_units(&MouseScrollDelta::LineDelta(0.0, 1.0)), -1.0);
        assert_eq!(scroll_units(&MouseScrollDelta::LineDelta(0.0, -3.0)), 3.0);
    }

    #[test]
    fn pixel_deltas_are_converted() {
        let delta = MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -32.0));
        assert_eq!(scroll_units(&delta), 2.0);
    }

    #[test]
    fn cursor_is_scaled_to_canvas() {
        assert_eq!(to_canvas((100.0, 50.0), (1.0, 1.0)), (100, 50));
        assert_eq!(to_canvas((101.0, 51.0), (0.5, 0.5)), (50, 25));
        assert_eq!(to_canvas((-3.0, 2.0), (1.0, 1.0)), (-3, 2));
    }
}
