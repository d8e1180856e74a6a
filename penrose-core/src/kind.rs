//! Triangle kinds of the deflation grammar.
//!
//! Raw values follow the historical integer encoding: `Half = 0`, `TypeA = 1`,
//! `TypeB = 2`, and extrusion-lifted faces below `Half` go negative.

use crate::error::TilingError;

/// Tag selecting the deflation, extrusion and coloring rules of a triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriangleKind {
    /// Terminal marker. Never subdivided.
    Half,
    /// Thin Robinson triangle (36 degree apex).
    TypeA,
    /// Thick Robinson triangle (108 degree apex).
    TypeB,
    /// Rendering-only kind produced by lowering `Half`; depth 1 is raw -1.
    /// Depths saturate at [`MAX_EXTRUDED_DEPTH`].
    Extruded(u32),
}

/// Deepest extruded kind that still has a raw encoding.
pub const MAX_EXTRUDED_DEPTH: u32 = i32::MAX as u32;

impl TriangleKind {
    /// Integer encoding used for texture layers and color splits.
    pub fn raw(self) -> i32 {
        match self {
            TriangleKind::Half => 0,
            TriangleKind::TypeA => 1,
            TriangleKind::TypeB => 2,
            TriangleKind::Extruded(depth) => -(depth.min(MAX_EXTRUDED_DEPTH) as i32),
        }
    }

    /// Decode a raw value. Anything above 2 is outside the grammar.
    pub fn from_raw(raw: i32) -> Result<Self, TilingError> {
        match raw {
            0 => Ok(TriangleKind::Half),
            1 => Ok(TriangleKind::TypeA),
            2 => Ok(TriangleKind::TypeB),
            r if r < 0 => Ok(TriangleKind::Extruded(
                r.unsigned_abs().min(MAX_EXTRUDED_DEPTH),
            )),
            r => Err(TilingError::UnknownKind(r)),
        }
    }

    /// The kind one integer step below this one, used for extruded faces.
    pub fn lowered(self) -> Self {
        match self {
            TriangleKind::TypeB => TriangleKind::TypeA,
            TriangleKind::TypeA => TriangleKind::Half,
            TriangleKind::Half => TriangleKind::Extruded(1),
            TriangleKind::Extruded(depth) => {
                TriangleKind::Extruded(depth.saturating_add(1).min(MAX_EXTRUDED_DEPTH))
            }
        }
    }

    /// Whether deflation produces children for this kind.
    pub fn is_deflatable(self) -> bool {
        matches!(self, TriangleKind::TypeA | TriangleKind::TypeB)
    }

    /// Binary split used by the flat-color and uv-triple layouts.
    pub fn is_truthy(self) -> bool {
        self.raw() != 0
    }

    /// Texture array layer. Only the three grammar kinds get their own layer.
    pub fn texture_layer(self) -> f32 {
        match self {
            TriangleKind::TypeB => 2.0,
            TriangleKind::TypeA => 1.0,
            TriangleKind::Half | TriangleKind::Extruded(_) => 0.0,
        }
    }
}

impl TryFrom<i32> for TriangleKind {
    type Error = TilingError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

impl From<TriangleKind> for i32 {
    fn from(kind: TriangleKind) -> Self {
        kind.raw()
    }
}
