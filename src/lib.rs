// ============================================================================
// CRATE CONFIGURATION & IMPORTS
// ============================================================================

pub mod compose;
pub mod config;
pub mod display;
pub mod error;
pub mod glyph;
pub mod guard;
pub mod pen;
pub mod placement;
pub mod scenario;

// External crate imports
use bon::Builder;
use pixels::{Pixels, SurfaceTexture};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rusttype::Font;
use tracing::{debug, info, warn};

// Standard library imports
use std::path::{Path, PathBuf};
use std::sync::Arc;

// Window management imports
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

pub use compose::draw_scenario;
pub use config::{Color, Palette, ScenarioConfig, ScopeConfig};
pub use display::{Canvas, DisplayList, DrawCommand};
pub use error::{DrillError, Result};
pub use guard::{ClickBinding, InteractionGuard, RedrawState};
pub use pen::{Align, Pen, PenState, Point, Surface};
pub use placement::{Parity, Placement};
pub use scenario::{Aircraft, Scenario};

/// Monospace fonts tried, in order, when no font path is configured.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/System/Library/Fonts/Menlo.ttc",
    "/Library/Fonts/Courier New.ttf",
    "C:\\Windows\\Fonts\\consola.ttf",
    "C:\\Windows\\Fonts\\cour.ttf",
];

// ============================================================================
// PUBLIC API - MAIN INTERFACE
// ============================================================================

#[derive(Debug, Clone, Builder)]
pub struct TrainerConfig {
    #[builder(default = "PPS Drill".to_string())]
    pub title: String,

    // Window configuration
    #[builder(default = 700)]
    pub window_width: usize,
    #[builder(default = 700)]
    pub window_height: usize,

    #[builder(default)]
    pub scope: ScopeConfig,
    #[builder(default)]
    pub scenario: ScenarioConfig,
    #[builder(default)]
    pub palette: Palette,

    // Text
    #[builder(default = 14.0)]
    pub tag_font_size: f32,
    pub font_path: Option<PathBuf>,

    /// fixed seed for a reproducible sequence of scenarios
    pub seed: Option<u64>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// The training scope: owns the pen, the display list it draws into, and the
/// click trigger that starts each redraw.
pub struct Trainer<S: Surface = DisplayList> {
    config: TrainerConfig,
    pen: Pen<S>,
    rng: StdRng,
    binding: ClickBinding,
}

impl Trainer<DisplayList> {
    pub fn new(config: TrainerConfig) -> Self {
        Self::with_surface(config, DisplayList::new())
    }

    pub fn display(&self) -> &DisplayList {
        self.pen.surface()
    }

    /// Opens the window, draws the first scenario and redraws on every left
    /// click until the window is closed.
    pub fn show(mut self) -> Result<()> {
        let font = load_font(self.config.font_path.as_deref())?;

        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(
                self.config.window_width as f64,
                self.config.window_height as f64,
            ))
            .with_resizable(false)
            .build(&event_loop)?;

        let window = Arc::new(window);
        let window_clone = window.clone();
        let size = window.inner_size();
        let mut fb_width = size.width as usize;
        let mut fb_height = size.height as usize;
        let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
        let mut pixels = Pixels::new(size.width, size.height, surface_texture)?;

        if let Err(e) = self.redraw() {
            warn!("initial redraw failed: {}", e);
        }

        event_loop.run(move |event, window_target| {
            window_target.set_control_flow(ControlFlow::Wait);
            if let Event::WindowEvent { event, .. } = event {
                match event {
                    WindowEvent::CloseRequested => {
                        window_target.exit();
                    }
                    WindowEvent::Resized(new_size) => {
                        match pixels.resize_buffer(new_size.width, new_size.height) {
                            Ok(()) => {
                                fb_width = new_size.width as usize;
                                fb_height = new_size.height as usize;
                            }
                            Err(e) => warn!("frame buffer resize failed: {}", e),
                        }
                        if let Err(e) = pixels.resize_surface(new_size.width, new_size.height) {
                            warn!("surface resize failed: {}", e);
                        }
                        window_clone.request_redraw();
                    }
                    WindowEvent::MouseInput {
                        state: ElementState::Pressed,
                        button: MouseButton::Left,
                        ..
                    } => {
                        if let Err(e) = self.redraw() {
                            warn!("redraw failed, keeping partial drawing: {}", e);
                        }
                        window_clone.request_redraw();
                    }
                    WindowEvent::RedrawRequested => {
                        let scale = window_clone.scale_factor();
                        let mut canvas = Canvas::new(pixels.frame_mut(), fb_width, fb_height, scale);
                        self.display().render(
                            &mut canvas,
                            &self.config.palette,
                            font.as_ref(),
                            self.config.tag_font_size,
                        );
                        if let Err(e) = pixels.render() {
                            warn!("frame presentation failed: {}", e);
                        }
                    }
                    _ => {}
                }
            }
        })?;

        Ok(())
    }
}

impl<S: Surface> Trainer<S> {
    pub fn with_surface(config: TrainerConfig, surface: S) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            config,
            pen: Pen::new(surface),
            rng,
            binding: ClickBinding::new(),
        }
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    pub fn pen(&self) -> &Pen<S> {
        &self.pen
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.pen.surface_mut()
    }

    /// handle onto the click trigger, shared with whoever delivers clicks
    pub fn binding(&self) -> ClickBinding {
        self.binding.clone()
    }

    pub fn state(&self) -> RedrawState {
        self.binding.state()
    }

    /// Draws a fresh scenario unless a redraw is already running, in which case
    /// nothing happens and `Ok(None)` is returned. The trigger is reattached on
    /// every exit path.
    pub fn redraw(&mut self) -> Result<Option<Scenario>> {
        let Some(_guard) = self.binding.try_acquire() else {
            debug!("redraw already in progress, click ignored");
            return Ok(None);
        };

        let scenario = draw_scenario(
            &mut self.pen,
            &mut self.rng,
            &self.config.scope,
            &self.config.scenario,
        )?;
        info!(%scenario, "scenario drawn");
        Ok(Some(scenario))
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Loads the configured font, or the first system font that parses. `None`
/// means tags and labels will not be rasterised.
pub fn load_font(path: Option<&Path>) -> Result<Option<Font<'static>>> {
    if let Some(path) = path {
        let data = std::fs::read(path)?;
        let font = Font::try_from_vec(data)
            .ok_or_else(|| DrillError::Font(format!("cannot parse {}", path.display())))?;
        return Ok(Some(font));
    }

    for candidate in FONT_CANDIDATES {
        if let Ok(data) = std::fs::read(candidate) {
            if let Some(font) = Font::try_from_vec(data) {
                debug!("using font {}", candidate);
                return Ok(Some(font));
            }
        }
    }

    warn!("no usable font found, text will not be drawn");
    Ok(None)
}
