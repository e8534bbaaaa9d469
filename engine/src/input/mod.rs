//! Keyboard and mouse state.
//!
//! Window events land in a [`LiveInput`] as they arrive. Once per tick the
//! engine folds the live state into an [`InputSnapshot`], which stays fixed for
//! the whole tick so game code sees one consistent picture of the input.
//! Edge-triggered queries ("just pressed", "clicked") compare the snapshot with
//! the one from the previous tick.

pub(crate) mod events;

use std::collections::HashSet;
use std::mem;

pub use winit::event::MouseButton;
pub use winit::keyboard::KeyCode;

/// Input state as last reported by the window, written from the event loop.
#[derive(Debug, Default, Clone)]
pub struct LiveInput {
    keys: HashSet<KeyCode>,
    buttons: HashSet<MouseButton>,
    cursor: (i32, i32),
    scroll: f64,
}

impl LiveInput {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn press_key(&mut self, key: KeyCode) {
        self.keys.insert(key);
    }

    pub fn release_key(&mut self, key: KeyCode) {
        self.keys.remove(&key);
    }

    pub fn press_button(&mut self, button: MouseButton) {
        self.buttons.insert(button);
    }

    pub fn release_button(&mut self, button: MouseButton) {
        self.buttons.remove(&button);
    }

    /// Lets go of every key and button, e.g. when the window loses focus and
    /// their release events will never arrive.
    pub fn release_all(&mut self) {
        self.keys.clear();
        self.buttons.clear();
    }

    /// Cursor position in canvas coordinates.
    pub fn move_cursor(&mut self, x: i32, y: i32) {
        self.cursor = (x, y);
    }

    /// Adds scroll units; positive values scroll down, towards the user.
    pub fn scroll(&mut self, units: f64) {
        self.scroll += units;
    }
}

/// The frame-stable view of the input for the current tick.
#[derive(Debug, Default, Clone)]
pub struct InputSnapshot {
    pressed: HashSet<KeyCode>,
    just_pressed: HashSet<KeyCode>,
    just_released: HashSet<KeyCode>,
    buttons: HashSet<MouseButton>,
    clicked: HashSet<MouseButton>,
    mouse: (i32, i32),
    scroll: i32,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Default::default()
    }

    /// Moves to the next tick: copies the live state and derives the edge
    /// triggered sets from the difference with the previous snapshot.
    ///
    /// Whole scroll units are taken out of `live`; a fractional remainder
    /// from smooth scrolling carries over to the next tick.
    pub fn advance(&mut self, live: &mut LiveInput) {
        let previous = mem::replace(&mut self.pressed, live.keys.clone());
        self.just_pressed = self.pressed.difference(&previous).copied().collect();
        self.just_released = previous.difference(&self.pressed).copied().collect();

        let previous = mem::replace(&mut self.buttons, live.buttons.clone());
        self.clicked = self.buttons.difference(&previous).copied().collect();

        self.mouse = live.cursor;

        let whole = live.scroll.trunc();
        live.scroll -= whole;
        self.scroll = whole as i32;
    }

    /// Whether `key` is held down.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Whether `key` went down since the previous tick.
    pub fn is_key_just_pressed(&self, key: KeyCode) -> bool {
        self.just_pressed.contains(&key)
    }

    /// Whether `key` went up since the previous tick.
    pub fn is_key_just_released(&self, key: KeyCode) -> bool {
        self.just_released.contains(&key)
    }

    pub fn pressed_keys(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.pressed.iter().copied()
    }

    pub fn mouse_x(&self) -> i32 {
        self.mouse.0
    }

    pub fn mouse_y(&self) -> i32 {
        self.mouse.1
    }

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button)
    }

    /// Whether `button` went down since the previous tick.
    pub fn is_button_clicked(&self, button: MouseButton) -> bool {
        self.clicked.contains(&button)
    }

    pub fn left_mouse_pressed(&self) -> bool {
        self.is_button_pressed(MouseButton::Left)
    }

    pub fn middle_mouse_pressed(&self) -> bool {
        self.is_button_pressed(MouseButton::Middle)
    }

    pub fn right_mouse_pressed(&self) -> bool {
        self.is_button_pressed(MouseButton::Right)
    }

    pub fn left_mouse_clicked(&self) -> bool {
        self.is_button_clicked(MouseButton::Left)
    }

    pub fn middle_mouse_clicked(&self) -> bool {
        self.is_button_clicked(MouseButton::Middle)
    }

    pub fn right_mouse_clicked(&self) -> bool {
        self.is_button_clicked(MouseButton::Right)
    }

    /// Units scrolled between the previous tick and this one, positive is down.
    pub fn mouse_scroll(&self) -> i32 {
        self.scroll
    }
}
