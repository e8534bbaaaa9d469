//! A small 2D game engine: one window, a canvas to draw on, polled keyboard
//! and mouse input and sound playback, driven by a fixed-rate tick loop.

pub mod audio;
pub mod config;
pub mod context;
pub mod error;
pub mod graphics;
pub mod input;
pub mod logging;
pub mod resources;
pub mod runner;
pub mod tick;
pub mod window;

pub use crate::config::{ContextBuilder, Engine, Settings};
pub use crate::context::Context;
pub use crate::error::{Error, Result};

/// A game driven by the tick loop.
pub trait Runnable {
    /// Called once per tick to update the game.
    fn tick(&mut self, ctx: &mut Context);

    /// Called right after [`Runnable::tick`] to draw on `ctx.graphics`.
    fn render(&self, _ctx: &mut Context) {}
}

/// Runs a closure every tick.
pub struct TickFn<F> {
    f: F,
}

impl<F: FnMut(&mut Context)> TickFn<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F: FnMut(&mut Context)> Runnable for TickFn<F> {
    fn tick(&mut self, ctx: &mut Context) {
        (self.f)(ctx)
    }
}
