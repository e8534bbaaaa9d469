//! The window event loop on the main thread.

use std::sync::Arc;
use std::thread::JoinHandle;

use futures::executor::block_on;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop, EventLoopProxy};
use winit::window::{Icon, Window, WindowId};

use crate::audio::Audio;
use crate::config::Engine;
use crate::error::{Error, Result};
use crate::graphics::backend::State;
use crate::input::events;
use crate::tick::{self, lock, EngineEvent, TickLoop};
use crate::{window, Runnable};

/// Opens the window and runs `game` until the window is closed or the game
/// exits. Blocks the calling thread, which must be the main thread.
pub fn run<G: Runnable + Send + 'static>(
    event_loop: EventLoop<EngineEvent>,
    engine: Engine,
    game: G,
) -> Result<()> {
    let mut app = App {
        proxy: event_loop.create_proxy(),
        engine,
        game: Some(game),
        window: None,
        state: None,
        tick_thread: None,
        error: None,
    };
    event_loop.run_app(&mut app)?;
    app.stop_ticking();
    match app.error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

struct App<G> {
    proxy: EventLoopProxy<EngineEvent>,
    engine: Engine,
    game: Option<G>,
    window: Option<Arc<Window>>,
    state: Option<State>,
    tick_thread: Option<JoinHandle<()>>,
    error: Option<Error>,
}

impl<G: Runnable + Send + 'static> App<G> {
    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let Some(game) = self.game.take() else {
            return Ok(());
        };
        let settings = &self.engine.settings;

        let window = Arc::new(event_loop.create_window(window::attributes(settings, event_loop))?);
        log::info!("opened {}x{} window", settings.width, settings.height);

        let state = block_on(State::new(window.clone(), settings.width, settings.height))?;

        let audio = Audio::open().unwrap_or_else(|e| {
            log::warn!("audio disabled: {e}");
            Audio::disabled()
        });

        let tick_loop = TickLoop::new(
            game,
            self.engine.shared.clone(),
            self.proxy.clone(),
            audio,
            self.engine.resources.clone(),
        );
        let handle = tick::spawn("tick", move || tick_loop.run())?;

        self.window = Some(window);
        self.state = Some(state);
        self.tick_thread = Some(handle);
        Ok(())
    }

    /// Tells the tick thread to finish and waits for it.
    fn stop_ticking(&mut self) {
        self.engine.shared.stop();
        if let Some(handle) = self.tick_thread.take() {
            handle.thread().unpark();
            if handle.join().is_err() {
                log::error!("tick thread panicked");
            }
        }
    }

    fn quit(&mut self, event_loop: &ActiveEventLoop) {
        self.stop_ticking();
        event_loop.exit();
    }

    /// Canvas pixels per physical window pixel.
    fn cursor_scale(&self) -> (f64, f64) {
        let Some(window) = &self.window else {
            return (1.0, 1.0);
        };
        let size = window.inner_size();
        let settings = &self.engine.settings;
        (
            settings.width as f64 / size.width.max(1) as f64,
            settings.height as f64 / size.height.max(1) as f64,
        )
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(state) = &mut self.state else {
            return;
        };
        state.upload(&lock(&self.engine.shared.canvas));
        let out_of_memory = match state.render() {
            Ok(()) => false,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                state.reconfigure();
                false
            }
            Err(wgpu::SurfaceError::OutOfMemory) => true,
            Err(e) => {
                log::warn!("frame dropped: {e}");
                false
            }
        };
        if out_of_memory {
            log::error!("out of GPU memory, quitting");
            self.quit(event_loop);
        }
    }
}

impl<G: Runnable + Send + 'static> ApplicationHandler<EngineEvent> for App<G> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.start(event_loop) {
            log::error!("failed to start: {e}");
            self.error = Some(e);
            self.quit(event_loop);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("window closed");
                self.quit(event_loop);
            }
            WindowEvent::Resized(size) => {
                if let Some(state) = &mut self.state {
                    state.resize(size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            event => {
                let scale = self.cursor_scale();
                events::record(&event, &mut lock(&self.engine.shared.live), scale);
            }
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: EngineEvent) {
        match event {
            EngineEvent::Exit => {
                log::info!("game exited");
                self.quit(event_loop);
            }
            event => {
                let Some(window) = &self.window else {
                    return;
                };
                match event {
                    EngineEvent::Redraw => window.request_redraw(),
                    EngineEvent::SetTitle(title) => window.set_title(&title),
                    EngineEvent::SetIcon {
                        rgba,
                        width,
                        height,
                    } => match Icon::from_rgba(rgba, width, height) {
                        Ok(icon) => window.set_window_icon(Some(icon)),
                        Err(e) => log::warn!("ignoring window icon: {}", Error::from(e)),
                    },
                    EngineEvent::Exit => {}
                }
            }
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.stop_ticking();
    }
}
