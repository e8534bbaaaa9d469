use crate::audio::Audio;
use crate::graphics::{Canvas, Image};
use crate::input::{InputSnapshot, KeyCode, MouseButton};
use crate::resources::Resources;
use crate::tick::{EngineEvent, Shared, WindowSink};

/// Everything a game can reach during a tick.
///
/// Input queries answer from the snapshot taken at the start of the tick, so
/// they give the same answer for the whole of `tick` and `render`.
pub struct Context<'a> {
    /// The canvas shown in the window.
    pub graphics: &'a mut Canvas,
    pub(crate) input: &'a InputSnapshot,
    pub(crate) audio: &'a Audio,
    pub(crate) resources: &'a Resources,
    pub(crate) shared: &'a Shared,
    pub(crate) sink: &'a dyn WindowSink,
    pub(crate) tick_count: u64,
}

impl<'a> Context<'a> {
    pub fn input(&self) -> &InputSnapshot {
        self.input
    }

    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.input.is_key_pressed(key)
    }

    pub fn is_key_just_pressed(&self, key: KeyCode) -> bool {
        self.input.is_key_just_pressed(key)
    }

    pub fn is_key_just_released(&self, key: KeyCode) -> bool {
        self.input.is_key_just_released(key)
    }

    pub fn mouse_x(&self) -> i32 {
        self.input.mouse_x()
    }

    pub fn mouse_y(&self) -> i32 {
        self.input.mouse_y()
    }

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.input.is_button_pressed(button)
    }

    pub fn is_button_clicked(&self, button: MouseButton) -> bool {
        self.input.is_button_clicked(button)
    }

    pub fn left_mouse_pressed(&self) -> bool {
        self.input.left_mouse_pressed()
    }

    pub fn middle_mouse_pressed(&self) -> bool {
        self.input.middle_mouse_pressed()
    }

    pub fn right_mouse_pressed(&self) -> bool {
        self.input.right_mouse_pressed()
    }

    pub fn left_mouse_clicked(&self) -> bool {
        self.input.left_mouse_clicked()
    }

    pub fn middle_mouse_clicked(&self) -> bool {
        self.input.middle_mouse_clicked()
    }

    pub fn right_mouse_clicked(&self) -> bool {
        self.input.right_mouse_clicked()
    }

    pub fn mouse_scroll(&self) -> i32 {
        self.input.mouse_scroll()
    }

    pub fn audio(&self) -> &Audio {
        self.audio
    }

    pub fn resources(&self) -> &Resources {
        self.resources
    }

    pub fn set_title(&self, title: impl Into<String>) {
        self.sink.send(EngineEvent::SetTitle(title.into()));
    }

    pub fn set_icon(&self, icon: &Image) {
        self.sink.send(EngineEvent::SetIcon {
            rgba: icon.as_rgba().as_raw().clone(),
            width: icon.width(),
            height: icon.height(),
        });
    }

    /// Changes the number of ticks per second, starting with the next tick.
    /// A rate of 0 is treated as 1.
    pub fn set_update_rate(&self, rate: u32) {
        self.shared.rate.set(rate);
    }

    pub fn update_rate(&self) -> u32 {
        self.shared.rate.get()
    }

    /// Number of ticks run before this one.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Closes the window once the current tick is done.
    pub fn exit(&self) {
        self.shared.stop();
        self.sink.send(EngineEvent::Exit);
    }
}
