//! Penrose Core - golden-ratio tiling generation
//!
//! Builds a Penrose tiling by repeated deflation of Robinson triangles, lifts
//! the flat tiling into a faceted surface, and serializes the result into
//! interleaved vertex buffers. Rendering lives elsewhere; this crate only
//! produces geometry.
//!
//! ```no_run
//! use penrose_core::{LitVertex, Penrose, TilingConfig};
//!
//! # fn main() -> penrose_core::Result<()> {
//! let mut tiling = Penrose::new(TilingConfig::default())?;
//! tiling.subdivide()?;
//! tiling.extrude()?;
//!
//! let vertices = tiling.emit::<LitVertex>()?;
//! let indices = tiling.indices();
//! assert_eq!(vertices.vertex_count(), indices.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod kind;
pub mod tiling;
pub mod transform;
pub mod vertex;

// Re-export commonly used types
pub use config::TilingConfig;
pub use error::{ConfigError, Result, TilingError};
pub use geometry::{Triangle, PHI};
pub use kind::{TriangleKind, MAX_EXTRUDED_DEPTH};
pub use tiling::{KindCensus, Penrose, Stage};
pub use transform::{rotate_about, rotate_about_axis, RotationAxis};
pub use vertex::{
    ColorVertex, LayeredVertex, LitVertex, PositionVertex, TexCoordVertex, TileVertex,
    VertexBuffer, VertexLayout,
};
