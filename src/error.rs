//! Startup errors
//!
//! Only acquiring the window, display surface and audio device can fail
//! fatally. Once the game is running, backend hiccups are logged and skipped.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create display surface: {0}")]
    Surface(#[from] softbuffer::SoftBufferError),

    #[error("failed to open audio output: {0}")]
    Audio(#[from] rodio::StreamError),
}
