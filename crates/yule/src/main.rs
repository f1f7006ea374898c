use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{DefaultTerminal, Frame, style::Color};
use yule_config::Config;
use yule_core::AnimationSpeed;
use yule_scene::{OrbitCamera, Scene, SceneRenderer};

mod overlay;

/// How long the loading screen is shown before the scene appears.
const LOADING_DURATION: Duration = Duration::from_millis(1500);

/// Event poll timeout, ~30 fps.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Azimuth step per arrow key press, radians.
const ORBIT_STEP: f32 = 0.15;

/// Tilt step per page key press, radians.
const TILT_STEP: f32 = 0.08;

/// Zoom step per arrow key press, world units.
const ZOOM_STEP: f32 = 1.0;

/// Auto-rotation rate, radians per second.
const AUTO_ROTATE_RATE: f32 = 0.15;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Is the animation paused?
    paused: bool,
    /// Slowly orbit the camera on its own?
    auto_rotate: bool,
    speed: AnimationSpeed,
    greeting: String,
    accent: Color,
    scene: Scene,
    renderer: SceneRenderer,
    camera: OrbitCamera,
    /// Wall-clock start, drives the loading screen.
    started: Instant,
    /// Last tick, for delta timing.
    last_tick: Instant,
    /// Accumulated animation time in seconds; stops while paused.
    elapsed: f32,
}

impl App {
    /// Construct a new instance of [`App`] from the loaded configuration.
    pub fn new(config: Config) -> Self {
        let seed = config.seed.unwrap_or_else(entropy_seed);
        let now = Instant::now();
        Self {
            running: false,
            paused: false,
            auto_rotate: true,
            speed: config.speed,
            accent: config.accent.color(),
            scene: Scene::new(seed, config.snow_count, config.density),
            renderer: SceneRenderer::new(),
            camera: OrbitCamera::default(),
            started: now,
            last_tick: now,
            elapsed: 0.0,
            greeting: config.greeting,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            self.tick();
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Advance animation time and scene state by the wall-clock delta.
    fn tick(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;

        if self.paused {
            return;
        }

        let dt = dt * self.speed.time_scale();
        self.elapsed += dt;
        self.scene.advance(dt);
        if self.auto_rotate {
            self.camera.orbit(AUTO_ROTATE_RATE * dt);
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let booted = self.started.elapsed();
        if booted < LOADING_DURATION {
            overlay::render_loading(frame, booted);
            return;
        }

        self.renderer
            .render(frame, &self.scene, &self.camera, self.elapsed);
        overlay::render_overlay(frame, &self.greeting, self.accent, self.speed, self.paused);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with timeout so the scene keeps animating.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(FRAME_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Left) => self.camera.orbit(-ORBIT_STEP),
            (_, KeyCode::Right) => self.camera.orbit(ORBIT_STEP),
            (_, KeyCode::Up) => self.camera.zoom(-ZOOM_STEP),
            (_, KeyCode::Down) => self.camera.zoom(ZOOM_STEP),
            (_, KeyCode::PageUp) => self.camera.tilt(-TILT_STEP),
            (_, KeyCode::PageDown) => self.camera.tilt(TILT_STEP),
            (_, KeyCode::Char(' ')) => self.paused = !self.paused,
            (_, KeyCode::Char('a')) => self.auto_rotate = !self.auto_rotate,
            (_, KeyCode::Char('s')) => self.speed = self.speed.next(),
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Seed from the system clock when none is configured.
fn entropy_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
