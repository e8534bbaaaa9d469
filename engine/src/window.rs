use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use crate::config::Settings;

/// Top-left corner that puts a window of `window` size in the middle of a
/// monitor at `monitor_position` with `monitor_size`.
pub fn centered_position(
    monitor_position: PhysicalPosition<i32>,
    monitor_size: PhysicalSize<u32>,
    window: PhysicalSize<u32>,
) -> PhysicalPosition<i32> {
    let offset = |monitor: u32, window: u32| (monitor as i64 - window as i64) / 2;
    PhysicalPosition::new(
        monitor_position.x + offset(monitor_size.width, window.width) as i32,
        monitor_position.y + offset(monitor_size.height, window.height) as i32,
    )
}

/// A fixed-size window centered on the primary monitor.
pub(crate) fn attributes(settings: &Settings, event_loop: &ActiveEventLoop) -> WindowAttributes {
    let size = LogicalSize::new(settings.width, settings.height);
    let mut attributes = Window::default_attributes()
        .with_title(settings.title.clone())
        .with_inner_size(size)
        .with_resizable(false);

    let monitor = event_loop
        .primary_monitor()
        .or_else(|| event_loop.available_monitors().next());
    match monitor {
        Some(monitor) => {
            let physical = size.to_physical::<u32>(monitor.scale_factor());
            attributes = attributes.with_position(centered_position(
                monitor.position(),
                monitor.size(),
                physical,
            ));
        }
        None => log::debug!("no monitor found, leaving window placement to the system"),
    }
    attributes
}
