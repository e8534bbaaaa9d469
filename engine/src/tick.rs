//! The fixed-rate update thread.
//!
//! Each tick snapshots the input, runs the game's `tick` and `render` against
//! the shared canvas and then asks the event loop to present the result.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use winit::event_loop::EventLoopProxy;

use crate::audio::Audio;
use crate::context::Context;
use crate::error::{Error, Result};
use crate::graphics::Canvas;
use crate::input::{InputSnapshot, LiveInput};
use crate::resources::Resources;
use crate::Runnable;

pub const DEFAULT_UPDATE_RATE: u32 = 60;

/// Requests from the tick thread to the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Redraw,
    SetTitle(String),
    SetIcon {
        rgba: Vec<u8>,
        width: u32,
        height: u32,
    },
    Exit,
}

/// Where the tick thread sends its [`EngineEvent`]s.
pub trait WindowSink: Send {
    /// Returns false once nobody is listening anymore.
    fn send(&self, event: EngineEvent) -> bool;
}

impl WindowSink for EventLoopProxy<EngineEvent> {
    fn send(&self, event: EngineEvent) -> bool {
        self.send_event(event).is_ok()
    }
}

/// Update rate in ticks per second, shared between threads.
#[derive(Debug)]
pub struct TickRate(AtomicU32);

impl TickRate {
    pub fn new(rate: u32) -> Self {
        Self(AtomicU32::new(Self::clamp(rate)))
    }

    fn clamp(rate: u32) -> u32 {
        if rate == 0 {
            log::warn!("update rate of 0 requested, using 1 tick per second");
            1
        } else {
            rate
        }
    }

    pub fn get(&self) -> u32 {
        self.0.load(Ordering::Relaxed)
    }

    pub fn set(&self, rate: u32) {
        self.0.store(Self::clamp(rate), Ordering::Relaxed);
    }

    pub fn period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.get() as f64)
    }
}

impl Default for TickRate {
    fn default() -> Self {
        Self::new(DEFAULT_UPDATE_RATE)
    }
}

/// Keeps tick starts one period apart. A tick that overruns pushes the
/// schedule back instead of making later ticks catch up.
#[derive(Debug, Default)]
pub struct Pacer {
    last: Option<Instant>,
}

impl Pacer {
    pub fn new() -> Self {
        Default::default()
    }

    /// Blocks until the next tick is due or `running` turns false.
    /// Unparking the thread cuts the wait short.
    pub fn wait(&mut self, period: Duration, running: &AtomicBool) {
        let now = Instant::now();
        let start = match self.last {
            Some(last) => next_start(last, now, period),
            None => now,
        };
        loop {
            let now = Instant::now();
            if now >= start || !running.load(Ordering::Acquire) {
                break;
            }
            thread::park_timeout(start - now);
        }
        self.last = Some(start);
    }
}

/// When the tick after one that started at `last` should start.
pub fn next_start(last: Instant, now: Instant, period: Duration) -> Instant {
    let due = last + period;
    if due > now {
        due
    } else {
        now
    }
}

/// State shared by the event loop and the tick thread.
pub(crate) struct Shared {
    pub live: Mutex<LiveInput>,
    pub canvas: Mutex<Canvas>,
    pub rate: TickRate,
    pub running: AtomicBool,
}

impl Shared {
    pub fn new(canvas: Canvas, rate: u32) -> Self {
        Self {
            live: Mutex::new(LiveInput::new()),
            canvas: Mutex::new(canvas),
            rate: TickRate::new(rate),
            running: AtomicBool::new(true),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    pub fn stop(&self) {
        self.running.store(false, Ordering::Release);
    }
}

/// A panic on one thread must not take the other down with it.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Starts a named thread, reporting a failed spawn as [`Error::Thread`].
pub(crate) fn spawn<F, T>(name: &str, f: F) -> Result<JoinHandle<T>>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    thread::Builder::new()
        .name(name.into())
        .spawn(f)
        .map_err(Error::Thread)
}

pub(crate) struct TickLoop<G, S> {
    game: G,
    input: InputSnapshot,
    shared: Arc<Shared>,
    sink: S,
    audio: Audio,
    resources: Resources,
    tick_count: u64,
}

impl<G: Runnable, S: WindowSink> TickLoop<G, S> {
    pub fn new(game: G, shared: Arc<Shared>, sink: S, audio: Audio, resources: Resources) -> Self {
        Self {
            game,
            input: InputSnapshot::new(),
            shared,
            sink,
            audio,
            resources,
            tick_count: 0,
        }
    }

    /// Runs one tick. Returns false when the loop should stop.
    pub fn tick(&mut self) -> bool {
        self.input.advance(&mut lock(&self.shared.live));

        {
            let mut canvas = lock(&self.shared.canvas);
            let mut ctx = Context {
                graphics: &mut canvas,
                input: &self.input,
                audio: &self.audio,
                resources: &self.resources,
                shared: &self.shared,
                sink: &self.sink,
                tick_count: self.tick_count,
            };
            self.game.tick(&mut ctx);
            self.game.render(&mut ctx);
        }
        self.tick_count += 1;

        if !self.shared.is_running() {
            return false;
        }
        if !self.sink.send(EngineEvent::Redraw) {
            log::debug!("event loop is gone, stopping");
            self.shared.stop();
            return false;
        }
        true
    }

    pub fn run(mut self) {
        log::debug!("tick loop started at {} ticks per second", self.shared.rate.get());
        let mut pacer = Pacer::new();
        while self.shared.is_running() {
            pacer.wait(self.shared.rate.period(), &self.shared.running);
            if !self.shared.is_running() || !self.tick() {
                break;
            }
        }
        log::debug!("tick loop stopped after {} ticks", self.tick_count);
    }
}
