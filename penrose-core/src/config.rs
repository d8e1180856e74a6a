//! Construction parameters for a [`Penrose`](crate::tiling::Penrose) tiling.
use nalgebra::Point3;

use crate::error::ConfigError;
use crate::kind::TriangleKind;

/// Parameters of the initial fan and the number of deflation passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilingConfig {
    /// Deflation passes run by `subdivide`. Growth is geometric; 8 and above
    /// is impractical.
    pub loops: u32,
    /// Center of the fan.
    pub origin: Point3<f32>,
    /// Angular step between fan spokes, in degrees, in `1..=360`. Steps that
    /// do not divide 360 leave the fan open.
    pub fan_degree: u32,
    /// Length of every fan spoke.
    pub edge_length: f32,
    /// Kind given to the fan triangles.
    pub seed_kind: TriangleKind,
}

impl TilingConfig {
    pub fn new(loops: u32, origin: Point3<f32>, fan_degree: u32, edge_length: f32) -> Self {
        Self {
            loops,
            origin,
            fan_degree,
            edge_length,
            seed_kind: TriangleKind::TypeA,
        }
    }

    pub fn with_loops(mut self, loops: u32) -> Self {
        self.loops = loops;
        self
    }

    pub fn with_origin(mut self, origin: Point3<f32>) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_fan_degree(mut self, fan_degree: u32) -> Self {
        self.fan_degree = fan_degree;
        self
    }

    pub fn with_edge_length(mut self, edge_length: f32) -> Self {
        self.edge_length = edge_length;
        self
    }

    pub fn with_seed_kind(mut self, seed_kind: TriangleKind) -> Self {
        self.seed_kind = seed_kind;
        self
    }

    /// Number of triangles in the initial fan, `360 / fan_degree` rounded down.
    pub fn fan_size(&self) -> usize {
        match self.fan_degree {
            0 => 0,
            degree => (360 / degree) as usize,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=360).contains(&self.fan_degree) {
            return Err(ConfigError::FanDegree(self.fan_degree));
        }
        if !self.edge_length.is_finite() || self.edge_length <= 0.0 {
            return Err(ConfigError::EdgeLength(self.edge_length));
        }
        if !self.origin.iter().all(|v| v.is_finite()) {
            return Err(ConfigError::NonFiniteOrigin);
        }
        if let TriangleKind::Extruded(_) = self.seed_kind {
            return Err(ConfigError::SeedKind(self.seed_kind));
        }
        Ok(())
    }
}

impl Default for TilingConfig {
    fn default() -> Self {
        Self::new(3, Point3::origin(), 9, 1.0)
    }
}
