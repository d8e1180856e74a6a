//! Interleaved vertex attributes for rendering a tiling.
//!
//! Every triangle emits three vertices in `a, b, c` order with no sharing, so
//! a buffer holds `3 * triangle_count` vertices and pairs with the sequential
//! index buffer from [`Penrose::indices`]. Five layouts exist, each wider than
//! the last:
//!
//! | layout | per vertex | per triangle |
//! |---|---|---|
//! | [`PositionVertex`] | position | 9 |
//! | [`ColorVertex`] | position, color | 18 |
//! | [`TexCoordVertex`] | position, uvw | 18 |
//! | [`LayeredVertex`] | position, color, uv, layer | 27 |
//! | [`LitVertex`] | position, color, uv, layer, normal | 36 |
use bytemuck::{Pod, Zeroable};
use nalgebra::Point3;
use tracing::trace;

use crate::error::{Result, TilingError};
use crate::geometry::Triangle;
use crate::tiling::Penrose;

/// Flat color for triangles with a non-zero kind.
pub const TILE_COLOR: [f32; 3] = [0.204, 0.275, 0.722];
/// Flat color for `Half` triangles.
pub const HALF_COLOR: [f32; 3] = [0.804, 0.141, 0.557];
/// Base color of the textured layouts; the texture supplies the rest.
pub const BASE_GRAY: [f32; 3] = [0.7, 0.7, 0.7];

/// Texture coordinates of vertices `a`, `b`, `c`.
const TEX_COORDS: [[f32; 2]; 3] = [[0.0, 0.0], [1.0, 0.0], [0.5, 1.0]];

/// Runtime tag for the five attribute layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexLayout {
    Position,
    PositionColor,
    PositionTexCoord,
    PositionColorTexLayer,
    PositionColorTexLayerNormal,
}

impl VertexLayout {
    pub const ALL: [VertexLayout; 5] = [
        VertexLayout::Position,
        VertexLayout::PositionColor,
        VertexLayout::PositionTexCoord,
        VertexLayout::PositionColorTexLayer,
        VertexLayout::PositionColorTexLayerNormal,
    ];

    pub fn floats_per_vertex(self) -> usize {
        match self {
            VertexLayout::Position => 3,
            VertexLayout::PositionColor | VertexLayout::PositionTexCoord => 6,
            VertexLayout::PositionColorTexLayer => 9,
            VertexLayout::PositionColorTexLayerNormal => 12,
        }
    }

    pub fn floats_per_triangle(self) -> usize {
        3 * self.floats_per_vertex()
    }

    pub fn stride_bytes(self) -> usize {
        self.floats_per_vertex() * std::mem::size_of::<f32>()
    }
}

/// A vertex type that can be built from a kind-tagged triangle.
pub trait TileVertex: Pod {
    const LAYOUT: VertexLayout;

    /// The three vertices of `triangle`, or `None` if the layout needs a face
    /// normal and the triangle is degenerate.
    fn from_triangle(triangle: &Triangle) -> Option<[Self; 3]>;
}

fn position(p: &Point3<f32>) -> [f32; 3] {
    [p.x, p.y, p.z]
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PositionVertex {
    pub position: [f32; 3],
}

impl TileVertex for PositionVertex {
    const LAYOUT: VertexLayout = VertexLayout::Position;

    fn from_triangle(triangle: &Triangle) -> Option<[Self; 3]> {
        Some(triangle.vertices().map(|p| Self {
            position: position(&p),
        }))
    }
}

/// Position plus a flat color split two ways on the kind.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl TileVertex for ColorVertex {
    const LAYOUT: VertexLayout = VertexLayout::PositionColor;

    fn from_triangle(triangle: &Triangle) -> Option<[Self; 3]> {
        let color = if triangle.kind().is_truthy() {
            TILE_COLOR
        } else {
            HALF_COLOR
        };
        Some(triangle.vertices().map(|p| Self {
            position: position(&p),
            color,
        }))
    }
}

/// Position plus a uv coordinate whose third component selects one of two
/// texture layers: 0 for non-zero kinds, 1 for `Half`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct TexCoordVertex {
    pub position: [f32; 3],
    pub tex_coord: [f32; 3],
}

impl TileVertex for TexCoordVertex {
    const LAYOUT: VertexLayout = VertexLayout::PositionTexCoord;

    fn from_triangle(triangle: &Triangle) -> Option<[Self; 3]> {
        let layer = if triangle.kind().is_truthy() { 0.0 } else { 1.0 };
        let vertices = triangle.vertices();
        Some(std::array::from_fn(|i| Self {
            position: position(&vertices[i]),
            tex_coord: [TEX_COORDS[i][0], TEX_COORDS[i][1], layer],
        }))
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LayeredVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub tex_coord: [f32; 2],
    pub layer: f32,
}

impl TileVertex for LayeredVertex {
    const LAYOUT: VertexLayout = VertexLayout::PositionColorTexLayer;

    fn from_triangle(triangle: &Triangle) -> Option<[Self; 3]> {
        let layer = triangle.kind().texture_layer();
        let vertices = triangle.vertices();
        Some(std::array::from_fn(|i| Self {
            position: position(&vertices[i]),
            color: BASE_GRAY,
            tex_coord: TEX_COORDS[i],
            layer,
        }))
    }
}

/// The layout consumed by the lit renderer. The face normal is computed once
/// and repeated on all three vertices.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LitVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub tex_coord: [f32; 2],
    pub layer: f32,
    pub normal: [f32; 3],
}

impl TileVertex for LitVertex {
    const LAYOUT: VertexLayout = VertexLayout::PositionColorTexLayerNormal;

    fn from_triangle(triangle: &Triangle) -> Option<[Self; 3]> {
        let n = triangle.face_normal()?;
        let layer = triangle.kind().texture_layer();
        let vertices = triangle.vertices();
        Some(std::array::from_fn(|i| Self {
            position: position(&vertices[i]),
            color: BASE_GRAY,
            tex_coord: TEX_COORDS[i],
            layer,
            normal: [n.x, n.y, n.z],
        }))
    }
}

/// Owned vertex data for one tiling, handed to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexBuffer<V> {
    vertices: Vec<V>,
}

impl<V: TileVertex> VertexBuffer<V> {
    pub fn from_triangles(triangles: &[Triangle]) -> Result<Self> {
        let mut vertices = Vec::with_capacity(3 * triangles.len());
        for (index, triangle) in triangles.iter().enumerate() {
            let emitted =
                V::from_triangle(triangle).ok_or(TilingError::DegenerateTriangle { index })?;
            vertices.extend_from_slice(&emitted);
        }
        Ok(Self { vertices })
    }

    pub fn layout(&self) -> VertexLayout {
        V::LAYOUT
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn into_vertices(self) -> Vec<V> {
        self.vertices
    }

    pub fn into_floats(self) -> Vec<f32> {
        self.as_floats().to_vec()
    }
}

impl Penrose {
    /// Emit the current generation in layout `V`.
    pub fn emit<V: TileVertex>(&self) -> Result<VertexBuffer<V>> {
        let buffer = VertexBuffer::from_triangles(self.triangles())?;
        trace!(
            layout = ?V::LAYOUT,
            vertices = buffer.vertex_count(),
            floats = buffer.as_floats().len(),
            "emitted vertex buffer"
        );
        Ok(buffer)
    }

    /// Emit the current generation as a flat float array in `layout`.
    pub fn emit_floats(&self, layout: VertexLayout) -> Result<Vec<f32>> {
        match layout {
            VertexLayout::Position => self.emit::<PositionVertex>().map(VertexBuffer::into_floats),
            VertexLayout::PositionColor => {
                self.emit::<ColorVertex>().map(VertexBuffer::into_floats)
            }
            VertexLayout::PositionTexCoord => {
                self.emit::<TexCoordVertex>().map(VertexBuffer::into_floats)
            }
            VertexLayout::PositionColorTexLayer => {
                self.emit::<LayeredVertex>().map(VertexBuffer::into_floats)
            }
            VertexLayout::PositionColorTexLayerNormal => {
                self.emit::<LitVertex>().map(VertexBuffer::into_floats)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::TriangleKind;

    fn triangle(kind: TriangleKind) -> Triangle {
        Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            kind,
        )
    }

    fn all_kinds() -> Vec<Triangle> {
        [
            TriangleKind::Half,
            TriangleKind::TypeA,
            TriangleKind::TypeB,
            TriangleKind::Extruded(1),
        ]
        .into_iter()
        .map(triangle)
        .collect()
    }

    #[test]
    fn test_layout_sizes_match_structs() {
        assert_eq!(
            std::mem::size_of::<PositionVertex>(),
            VertexLayout::Position.stride_bytes()
        );
        assert_eq!(
            std::mem::size_of::<ColorVertex>(),
            VertexLayout::PositionColor.stride_bytes()
        );
        assert_eq!(
            std::mem::size_of::<TexCoordVertex>(),
            VertexLayout::PositionTexCoord.stride_bytes()
        );
        assert_eq!(
            std::mem::size_of::<LayeredVertex>(),
            VertexLayout::PositionColorTexLayer.stride_bytes()
        );
        assert_eq!(
            std::mem::size_of::<LitVertex>(),
            VertexLayout::PositionColorTexLayerNormal.stride_bytes()
        );
    }

    #[test]
    fn test_float_counts_per_layout() {
        let tiling = Penrose::from_triangles(0, all_kinds());
        let expected = [9, 18, 18, 27, 36];
        for (layout, per_triangle) in VertexLayout::ALL.into_iter().zip(expected) {
            assert_eq!(layout.floats_per_triangle(), per_triangle);
            let floats = tiling.emit_floats(layout).unwrap();
            assert_eq!(floats.len(), per_triangle * tiling.triangle_count());
        }
    }

    #[test]
    fn test_position_layout_is_vertex_major() {
        let triangles = [triangle(TriangleKind::TypeA)];
        let buffer = VertexBuffer::<PositionVertex>::from_triangles(&triangles).unwrap();
        let expected: [f32; 9] = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        assert_eq!(buffer.as_floats(), &expected);
        assert_eq!(buffer.as_bytes().len(), 36);
    }

    #[test]
    fn test_flat_color_is_a_binary_split() {
        let buffer = VertexBuffer::<ColorVertex>::from_triangles(&all_kinds()).unwrap();
        let colors: Vec<_> = buffer.vertices().chunks(3).map(|v| v[0].color).collect();
        assert_eq!(colors, vec![HALF_COLOR, TILE_COLOR, TILE_COLOR, TILE_COLOR]);
    }

    #[test]
    fn test_tex_coord_layer_split() {
        let buffer = VertexBuffer::<TexCoordVertex>::from_triangles(&all_kinds()).unwrap();
        let half = &buffer.vertices()[0..3];
        let tile = &buffer.vertices()[3..6];

        assert_eq!(half[0].tex_coord, [0.0, 0.0, 1.0]);
        assert_eq!(half[1].tex_coord, [1.0, 0.0, 1.0]);
        assert_eq!(half[2].tex_coord, [0.5, 1.0, 1.0]);
        assert_eq!(tile[2].tex_coord, [0.5, 1.0, 0.0]);
    }

    #[test]
    fn test_layer_index_is_three_way() {
        let buffer = VertexBuffer::<LayeredVertex>::from_triangles(&all_kinds()).unwrap();
        let layers: Vec<_> = buffer.vertices().chunks(3).map(|v| v[0].layer).collect();
        assert_eq!(layers, vec![0.0, 1.0, 2.0, 0.0]);
        assert!(buffer.vertices().iter().all(|v| v.color == BASE_GRAY));
    }

    #[test]
    fn test_lit_layout_repeats_normal() {
        let mut flipped = triangle(TriangleKind::TypeB).vertices();
        flipped.swap(1, 2);
        let flipped = Triangle::new(flipped[0], flipped[1], flipped[2], TriangleKind::TypeB);

        let buffer = VertexBuffer::<LitVertex>::from_triangles(&[
            triangle(TriangleKind::TypeA),
            flipped,
        ])
        .unwrap();
        let floats = buffer.as_floats();
        assert_eq!(floats.len(), 72);

        for (i, vertex) in floats.chunks(12).enumerate() {
            let expected_z: f32 = if i < 3 { 1.0 } else { -1.0 };
            let normal: [f32; 3] = [0.0, 0.0, expected_z];
            assert_eq!(&vertex[9..12], &normal);
            assert_eq!(vertex[8], if i < 3 { 1.0 } else { 2.0 });
        }
    }

    #[test]
    fn test_lit_layout_rejects_degenerate() {
        let degenerate = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
            TriangleKind::TypeA,
        );
        let tiling = Penrose::from_triangles(0, vec![triangle(TriangleKind::TypeA), degenerate]);

        assert_eq!(
            tiling.emit::<LitVertex>(),
            Err(TilingError::DegenerateTriangle { index: 1 })
        );
        // Layouts without normals do not care.
        assert_eq!(tiling.emit::<PositionVertex>().unwrap().triangle_count(), 2);
    }
}
