//! Render errors.

use thiserror::Error;

/// Errors that can occur while rendering or writing the image.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid render config: {0}")]
    InvalidConfig(String),

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Frame buffer is {actual_width}x{actual_height}, expected {width}x{height}")]
    BufferSize {
        width: u32,
        height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    #[error("Failed to write image: {0}")]
    Image(#[from] image::ImageError),
}
