//! Fatal failures of the window/toolkit layer.
//!
//! Scene drawing itself cannot fail; only bringing up or presenting to the
//! SDL2 surface can.

/// Error type for window setup and frame presentation.
///
/// SDL2 reports failures as strings, which are carried through unchanged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// SDL2 or one of its subsystems failed to initialize.
    #[error("failed to initialize SDL: {0}")]
    Init(String),

    /// The window or its canvas could not be created.
    #[error("failed to create window: {0}")]
    Window(String),

    /// The streaming texture the frame is uploaded to could not be created.
    #[error("failed to create frame texture: {0}")]
    Texture(String),

    /// Uploading or presenting a frame failed.
    #[error("failed to present frame: {0}")]
    Present(String),
}

pub type Result<T> = std::result::Result<T, Error>;
