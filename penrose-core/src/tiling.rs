//! The subdivision engine.
//!
//! A [`Penrose`] owns one generation of triangles. It starts as a fan around
//! the configured origin, is replaced by each deflation pass, and finally
//! grows by one extrusion pass that appends the lifted faces after the flat
//! tiles.
use tracing::{debug, info, warn};

use crate::config::TilingConfig;
use crate::error::{Result, TilingError};
use crate::geometry::Triangle;
use crate::kind::TriangleKind;
use crate::transform::rotate_about;

/// Loop counts at or above this blow up the triangle count.
pub const MAX_RECOMMENDED_LOOPS: u32 = 8;

/// Per-kind triangle counts of a generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindCensus {
    pub half: usize,
    pub type_a: usize,
    pub type_b: usize,
    pub extruded: usize,
}

impl KindCensus {
    pub fn from_triangles(triangles: &[Triangle]) -> Self {
        let mut census = Self::default();
        for triangle in triangles {
            match triangle.kind() {
                TriangleKind::Half => census.half += 1,
                TriangleKind::TypeA => census.type_a += 1,
                TriangleKind::TypeB => census.type_b += 1,
                TriangleKind::Extruded(_) => census.extruded += 1,
            }
        }
        census
    }

    pub fn total(&self) -> usize {
        self.half + self.type_a + self.type_b + self.extruded
    }

    /// Counts after one deflation pass: `A' = A + B`, `B' = A + 2B`, terminal
    /// kinds are dropped.
    pub fn after_deflation(&self) -> Self {
        Self {
            half: 0,
            type_a: self.type_a + self.type_b,
            type_b: self.type_a + 2 * self.type_b,
            extruded: 0,
        }
    }

    /// Counts after `passes` deflation passes.
    pub fn after_passes(&self, passes: u32) -> Self {
        (0..passes).fold(*self, |census, _| census.after_deflation())
    }

    /// Counts after the extrusion pass: the flat tiles stay and every tile
    /// adds three faces of the lowered kind.
    pub fn after_extrusion(&self) -> Self {
        Self {
            half: self.half + 3 * self.type_a,
            type_a: self.type_a + 3 * self.type_b,
            type_b: self.type_b,
            extruded: self.extruded + 3 * (self.half + self.extruded),
        }
    }
}

/// Where the engine is in its construct, subdivide, extrude lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Flat,
    Extruded,
}

/// Penrose tiling generator.
#[derive(Debug, Clone)]
pub struct Penrose {
    loops: u32,
    triangles: Vec<Triangle>,
    stage: Stage,
}

impl Penrose {
    /// Validate `config` and build the initial fan.
    ///
    /// The fan has `360 / fan_degree` triangles sharing the origin. Even
    /// spokes are wound origin, previous, next and odd spokes origin, next,
    /// previous.
    pub fn new(config: TilingConfig) -> Result<Self> {
        config.validate()?;

        if config.loops >= MAX_RECOMMENDED_LOOPS {
            warn!(
                loops = config.loops,
                "loop count at or above {}, triangle count will explode",
                MAX_RECOMMENDED_LOOPS
            );
        }

        let origin = config.origin;
        let fan_size = config.fan_size();
        let mut triangles = Vec::with_capacity(fan_size);

        let mut previous = origin + nalgebra::Vector3::new(config.edge_length, 0.0, 0.0);
        for i in 0..fan_size {
            let next = rotate_about(&origin, config.fan_degree as f32, &previous);
            let triangle = if i % 2 == 0 {
                Triangle::new(origin, previous, next, config.seed_kind)
            } else {
                Triangle::new(origin, next, previous, config.seed_kind)
            };
            triangles.push(triangle);
            previous = next;
        }

        info!(
            triangles = triangles.len(),
            fan_degree = config.fan_degree,
            loops = config.loops,
            "built initial fan"
        );

        Ok(Self {
            loops: config.loops,
            triangles,
            stage: Stage::Flat,
        })
    }

    /// Seed the engine with an arbitrary flat generation.
    pub fn from_triangles(loops: u32, triangles: Vec<Triangle>) -> Self {
        Self {
            loops,
            triangles,
            stage: Stage::Flat,
        }
    }

    pub fn loops(&self) -> u32 {
        self.loops
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn census(&self) -> KindCensus {
        KindCensus::from_triangles(&self.triangles)
    }

    /// The generation after one deflation pass, in input order.
    pub fn deflate(&self) -> Vec<Triangle> {
        let census = self.census();
        let mut next = Vec::with_capacity(2 * census.type_a + 3 * census.type_b);
        for triangle in &self.triangles {
            triangle.deflate_into(&mut next);
        }
        next
    }

    /// Replace the generation with its deflation.
    pub fn deflate_once(&mut self) -> Result<()> {
        if self.stage == Stage::Extruded {
            return Err(TilingError::AlreadyExtruded);
        }

        let before = self.triangles.len();
        self.triangles = self.deflate();
        debug!(
            before,
            after = self.triangles.len(),
            census = ?self.census(),
            "deflation pass"
        );
        Ok(())
    }

    /// Run the configured number of deflation passes.
    pub fn subdivide(&mut self) -> Result<()> {
        for _ in 0..self.loops {
            self.deflate_once()?;
        }

        info!(
            loops = self.loops,
            triangles = self.triangles.len(),
            "subdivision finished"
        );
        Ok(())
    }

    /// Lifted faces for every triangle of the generation, without modifying it.
    pub fn lifted(&self) -> Result<Vec<Triangle>> {
        let mut faces = Vec::with_capacity(3 * self.triangles.len());
        for (index, triangle) in self.triangles.iter().enumerate() {
            let lifted = triangle
                .lift()
                .ok_or(TilingError::DegenerateTriangle { index })?;
            faces.extend_from_slice(&lifted);
        }
        Ok(faces)
    }

    /// Append the lifted faces to the generation. Allowed once.
    ///
    /// The flat tiles stay in place ahead of the faces, so the final set holds
    /// both the base tiling and the facets raised over it.
    pub fn extrude(&mut self) -> Result<()> {
        if self.stage == Stage::Extruded {
            return Err(TilingError::AlreadyExtruded);
        }

        let faces = self.lifted()?;
        debug!(
            flat = self.triangles.len(),
            lifted = faces.len(),
            "extruding tiling"
        );
        self.triangles.extend(faces);
        self.stage = Stage::Extruded;
        Ok(())
    }

    /// Sequential index buffer, one index per emitted vertex.
    pub fn indices(&self) -> Vec<u32> {
        (0..(3 * self.triangles.len()) as u32).collect()
    }
}
