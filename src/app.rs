//! The event loop tying the window, the animation clock and the scene together.

use crate::animation::AnimationState;
use crate::config::Config;
use crate::error::Result;
use crate::projection::Projection;
use crate::render::SoftwareContext;
use crate::scene::SceneLayout;
use crate::window::{TickClock, Window, WindowEvent};

pub struct App {
    window: Window,
    ctx: SoftwareContext,
    scene: SceneLayout,
    animation: AnimationState,
    clock: TickClock,
    needs_redraw: bool,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let window = Window::new(&config.window)?;
        let (width, height) = (window.width(), window.height());
        let projection = Projection::from_config(&config.projection, width, height);

        Ok(Self {
            ctx: SoftwareContext::new(width, height, projection, config.window.clear_color),
            window,
            scene: config.scene,
            animation: AnimationState::new(&config.animation),
            clock: TickClock::new(config.animation.tick_interval),
            needs_redraw: true,
        })
    }

    /// Runs until the window is closed.
    pub fn run(&mut self) -> Result<()> {
        log::info!(
            "rendering {} satellites at {}x{}",
            self.scene.satellite_colors.len(),
            self.window.width(),
            self.window.height()
        );

        loop {
            match self.window.poll_events() {
                WindowEvent::Quit => break,
                WindowEvent::Resize(width, height) => self.reshape(width, height)?,
                WindowEvent::None => {}
            }

            if self.clock.poll(self.window.ticks()) {
                self.animation.advance();
                self.needs_redraw = true;
            }

            if self.needs_redraw {
                self.redraw()?;
            } else {
                std::thread::sleep(self.clock.until_next(self.window.ticks()));
            }
        }

        log::info!("window closed at angle {:.1}", self.animation.angle());
        Ok(())
    }

    fn reshape(&mut self, width: u32, height: u32) -> Result<()> {
        log::debug!("reshape to {}x{}", width, height);
        self.window.resize(width, height)?;
        self.ctx.set_viewport(width, height);
        self.needs_redraw = true;
        Ok(())
    }

    fn redraw(&mut self) -> Result<()> {
        self.scene.draw_frame(&mut self.ctx, &self.animation);
        self.window.present(self.ctx.framebuffer().as_bytes())?;
        self.needs_redraw = false;
        Ok(())
    }
}
