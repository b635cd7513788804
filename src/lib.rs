//! An animated Vesak lantern assembly rendered on the CPU.
//!
//! A large translucent octahedral lantern hangs from a line, with six smaller
//! lanterns on spokes revolving beneath it. Scene code draws through the
//! immediate-mode [`render::DrawContext`] trait; SDL2 is only used to open the
//! window and show the finished frame buffer.
//!
//! # Quick Start
//!
//! ```ignore
//! use vesak_lantern::prelude::*;
//!
//! let mut app = App::new(Config::default())?;
//! app.run()?;
//! ```

pub mod animation;
pub mod app;
pub mod camera;
pub mod color;
pub mod config;
pub mod error;
pub mod math;
pub mod projection;
pub mod render;
pub mod scene;
pub mod transform;
pub mod window;

pub use error::{Error, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    // Application
    pub use crate::app::App;
    pub use crate::config::{AnimationConfig, Config, ProjectionConfig, WindowConfig};
    pub use crate::error::{Error, Result};

    // Scene
    pub use crate::animation::AnimationState;
    pub use crate::scene::{Lantern, SceneLayout};

    // Rendering
    pub use crate::color::{Color, Rgba};
    pub use crate::projection::Projection;
    pub use crate::render::{DrawContext, RecordingContext, SoftwareContext};
    pub use crate::transform::Transform;

    // Math
    pub use crate::math::{Mat4, Vec3, Vec4};

    // Window
    pub use crate::window::{TickClock, Window, WindowEvent};
}
