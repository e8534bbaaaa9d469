use std::path::PathBuf;
use std::sync::Arc;

use winit::event_loop::EventLoop;

use crate::error::Result;
use crate::graphics::Canvas;
use crate::resources::Resources;
use crate::tick::{EngineEvent, Shared, DEFAULT_UPDATE_RATE};
use crate::Runnable;

pub const DEFAULT_TITLE: &str = "quickgame";
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub title: String,
    /// Canvas width, also the window's logical width.
    pub width: u32,
    pub height: u32,
    /// Ticks per second.
    pub update_rate: u32,
    /// Where bundled resources live, see [`Resources::locate`] for the default.
    pub resource_root: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            update_rate: DEFAULT_UPDATE_RATE,
            resource_root: None,
        }
    }
}

/// Configures the window and the tick loop.
///
/// ```no_run
/// use quickgame::{Context, ContextBuilder, TickFn};
///
/// ContextBuilder::new()
///     .with_title("Bouncing")
///     .with_size(640, 480)
///     .run(TickFn::new(|_ctx: &mut Context| {}))
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContextBuilder {
    settings: Settings,
}

impl ContextBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.settings.title = title.into();
        self
    }

    /// Sizes of 0 are bumped to 1.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.settings.width = width.max(1);
        self.settings.height = height.max(1);
        self
    }

    /// Ticks per second; 0 is treated as 1.
    pub fn with_update_rate(mut self, rate: u32) -> Self {
        self.settings.update_rate = rate;
        self
    }

    pub fn with_resource_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.settings.resource_root = Some(root.into());
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Creates the event loop. Only one may exist per process.
    pub fn build(self) -> Result<(EventLoop<EngineEvent>, Engine)> {
        let event_loop = EventLoop::<EngineEvent>::with_user_event().build()?;
        let engine = Engine::new(self.settings)?;
        Ok((event_loop, engine))
    }

    /// Builds and runs `game` until the window closes.
    pub fn run<G: Runnable + Send + 'static>(self, game: G) -> Result<()> {
        let (event_loop, engine) = self.build()?;
        crate::runner::run(event_loop, engine, game)
    }
}

/// Engine state created by [`ContextBuilder::build`], consumed by
/// [`runner::run`](crate::runner::run).
pub struct Engine {
    pub(crate) settings: Settings,
    pub(crate) shared: Arc<Shared>,
    pub(crate) resources: Resources,
}

impl Engine {
    fn new(settings: Settings) -> Result<Self> {
        let resources = match &settings.resource_root {
            Some(root) => Resources::new(root),
            None => Resources::locate(),
        };
        log::debug!("resources are read from {}", resources.root().display());
        let canvas = Canvas::new(settings.width, settings.height)?;
        let shared = Arc::new(Shared::new(canvas, settings.update_rate));
        Ok(Self {
            settings,
            shared,
            resources,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn resources(&self) -> &Resources {
        &self.resources
    }
}
