//! Errors raised while assembling a scene.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building a scene or loading its assets.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Failed to load model {}: {source}", path.display())]
    Model {
        path: PathBuf,
        #[source]
        source: tobj::LoadError,
    },

    #[error("Model {} contains no triangles", .0.display())]
    EmptyModel(PathBuf),

    #[error("Failed to load environment map {}: {source}", path.display())]
    Texture {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Environment map is {width}x{height} but has {len} texels")]
    TextureSize { width: u32, height: u32, len: usize },

    #[error("Unknown scene id: {0}")]
    UnknownScene(u32),
}

pub type SceneResult<T> = Result<T, SceneError>;
