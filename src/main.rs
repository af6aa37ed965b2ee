//! The Axe entry point
//!
//! Opens the window and runs the fixed-timestep game loop.

use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use the_axe::Settings;
use the_axe::consts::MAX_SUBSTEPS;
use the_axe::platform::InputState;
use the_axe::renderer::{RenderState, scene};
use the_axe::sim::{GameState, tick};

/// Game instance holding all state
struct Game {
    settings: Settings,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    /// Always `Some` between ticks; taken while `tick` consumes it
    state: Option<GameState>,
    input: InputState,
    accumulator: f32,
    last_time: Instant,
    /// First error that stopped the loop
    error: Option<anyhow::Error>,
}

impl Game {
    fn new(settings: Settings, seed: u64) -> Self {
        log::info!("Starting run with seed {}", seed);
        Self {
            state: Some(GameState::new(settings.game, seed)),
            settings,
            window: None,
            render_state: None,
            input: InputState::new(),
            accumulator: 0.0,
            last_time: Instant::now(),
            error: None,
        }
    }

    fn game_size(&self) -> Vec2 {
        Vec2::new(
            self.settings.game.window_width as f32,
            self.settings.game.window_height as f32,
        )
    }

    /// Run simulation ticks
    fn update(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_time).as_secs_f32().min(0.1);
        self.last_time = now;
        self.accumulator += dt;

        let sim_dt = self.settings.game.sim_dt();
        let mut substeps = 0;
        while self.accumulator >= sim_dt && substeps < MAX_SUBSTEPS {
            let input = self.input.tick_input();
            self.state = self.state.take().map(|state| tick(state, &input));
            self.accumulator -= sim_dt;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.consume_one_shots();
        }
        if substeps == MAX_SUBSTEPS {
            // Drop the backlog rather than fast-forwarding
            self.accumulator = 0.0;
        }
    }

    fn render(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(render_state), Some(state)) = (self.render_state.as_mut(), self.state.as_ref())
        else {
            return;
        };

        let vertices = scene::build(state);
        match render_state.render(&vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_state.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("Skipping frame: {:?}", e),
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let game = self.game_size();
        let attributes = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(LogicalSize::new(game.x as f64, game.y as f64))
            .with_resizable(false);
        let window = event_loop
            .create_window(attributes)
            .context("Failed to create window")?;
        let window = Arc::new(window);

        let render_state = pollster::block_on(RenderState::new(
            window.clone(),
            game,
            self.settings.vsync,
        ))?;

        self.window = Some(window);
        self.render_state = Some(render_state);
        self.last_time = Instant::now();
        Ok(())
    }
}

impl ApplicationHandler for Game {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(render_state) = self.render_state.as_mut() {
                    render_state.resize(size.width, size.height);
                }
            }
            WindowEvent::Focused(false) => self.input.clear(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    if code == KeyCode::Escape && event.state.is_pressed() {
                        event_loop.exit();
                    } else {
                        self.input.key(code, event.state);
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let surface = self
                    .render_state
                    .as_ref()
                    .map(|r| r.size)
                    .unwrap_or_default();
                let game = self.game_size();
                self.input.cursor_moved(position.x, position.y, surface, game);
            }
            WindowEvent::CursorLeft { .. } => self.input.cursor_left(),
            WindowEvent::MouseInput { state, button, .. } => {
                self.input.mouse_button(button, state);
            }
            WindowEvent::RedrawRequested => {
                self.update();
                self.render(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }
}

/// Seed from settings, or from the clock
fn run_seed(settings: &Settings) -> u64 {
    settings.game.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("The Axe starting...");

    let settings = Settings::load();
    let seed = run_seed(&settings);

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut game = Game::new(settings, seed);
    event_loop.run_app(&mut game).context("Event loop failed")?;

    if let Some(e) = game.error.take() {
        return Err(e);
    }

    log::info!("Done");
    Ok(())
}
