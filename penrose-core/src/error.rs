//! Error types for tiling construction and generation.

use thiserror::Error;

/// Invalid construction parameters, rejected before any geometry is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("fan degree {0} must be between 1 and 360")]
    FanDegree(u32),
    #[error("edge length must be finite and positive, got {0}")]
    EdgeLength(f32),
    #[error("origin must have finite coordinates")]
    NonFiniteOrigin,
    #[error("seed kind {0:?} is not part of the deflation grammar")]
    SeedKind(crate::kind::TriangleKind),
}

/// Errors raised while generating or emitting a tiling.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TilingError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("triangle {index} is degenerate and has no face normal")]
    DegenerateTriangle { index: usize },
    #[error("tiling has already been extruded")]
    AlreadyExtruded,
    #[error("raw triangle kind {0} is outside the grammar")]
    UnknownKind(i32),
}

pub type Result<T> = std::result::Result<T, TilingError>;
