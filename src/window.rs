//! SDL2 window that displays the software-rendered frame buffer.
//!
//! The window owns a streaming ARGB8888 texture the size of the drawable
//! area; [`Window::present`] uploads a finished frame into it and flips the
//! canvas. Nothing is drawn through SDL itself.

use std::time::Duration;

use sdl2::event::{Event, WindowEvent as SdlWindowEvent};
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::WindowContext;

use crate::config::WindowConfig;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    Quit,
    Resize(u32, u32),
}

/// Fixed-cadence timer driven by polling, so ticks run on the loop thread.
///
/// The first poll is always due; afterwards a tick is due once `interval` has
/// elapsed since the previous one.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval_ms: u64,
    last_tick: Option<u64>,
}

impl TickClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval_ms: interval.as_millis() as u64,
            last_tick: None,
        }
    }

    /// Returns true, and starts the next interval, when a tick is due at `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let due = match self.last_tick {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.interval_ms,
        };
        if due {
            self.last_tick = Some(now_ms);
        }
        due
    }

    /// Time left until the next tick is due.
    pub fn until_next(&self, now_ms: u64) -> Duration {
        let remaining = match self.last_tick {
            None => 0,
            Some(last) => self
                .interval_ms
                .saturating_sub(now_ms.saturating_sub(last)),
        };
        Duration::from_millis(remaining)
    }
}

pub struct Window {
    // Declared before `texture_creator` so it is dropped first.
    texture: Texture<'static>,
    texture_creator: Box<TextureCreator<WindowContext>>,
    canvas: Canvas<sdl2::video::Window>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(config: &WindowConfig) -> Result<Self> {
        let sdl_context = sdl2::init().map_err(Error::Init)?;
        let video_subsystem = sdl_context.video().map_err(Error::Init)?;
        let timer_subsystem = sdl_context.timer().map_err(Error::Init)?;

        let window = video_subsystem
            .window(&config.title, config.width, config.height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| Error::Window(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| Error::Window(e.to_string()))?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump().map_err(Error::Init)?;

        let texture = Self::create_texture(&texture_creator, config.width, config.height)?;

        log::info!(
            "opened window \"{}\" at {}x{}",
            config.title,
            config.width,
            config.height
        );

        Ok(Self {
            texture,
            texture_creator,
            canvas,
            event_pump,
            timer_subsystem,
            width: config.width,
            height: config.height,
        })
    }

    fn create_texture(
        creator: &TextureCreator<WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<Texture<'static>> {
        // SAFETY: the creator is boxed and owned by the same Window as the
        // texture, and the texture field is dropped before the creator.
        let creator: &'static TextureCreator<WindowContext> =
            unsafe { &*(creator as *const TextureCreator<WindowContext>) };
        creator
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width.max(1), height.max(1))
            .map_err(|e| Error::Texture(e.to_string()))
    }

    /// Drains pending events. Quit wins over everything; of several resizes
    /// the last one is reported.
    pub fn poll_events(&mut self) -> WindowEvent {
        let mut result = WindowEvent::None;
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => return WindowEvent::Quit,
                Event::Window {
                    win_event: SdlWindowEvent::Resized(w, h),
                    ..
                } => result = WindowEvent::Resize(w.max(0) as u32, h.max(0) as u32),
                _ => {}
            }
        }
        result
    }

    /// Uploads an ARGB8888 frame of the window's size and shows it.
    pub fn present(&mut self, buffer: &[u8]) -> Result<()> {
        self.texture
            .update(None, buffer, (self.width.max(1) * 4) as usize)
            .map_err(|e| Error::Present(e.to_string()))?;

        self.canvas.clear();
        self.canvas
            .copy(
                &self.texture,
                None,
                Some(Rect::new(0, 0, self.width.max(1), self.height.max(1))),
            )
            .map_err(Error::Present)?;
        self.canvas.present();
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.texture = Self::create_texture(&self.texture_creator, width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Milliseconds since SDL was initialized.
    pub fn ticks(&self) -> u64 {
        self.timer_subsystem.ticks64()
    }
}
