//! Error types for EchoRay

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EchoRayError {
    #[error("Invalid octree depth {depth}: maximum supported depth is {max}")]
    InvalidDepth { depth: u32, max: u32 },

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, EchoRayError>;
