//! Geometry primitives for the tiling: points, golden-section interpolation
//! and kind-tagged triangles.
use nalgebra::{Point3, Vector3};

use crate::kind::TriangleKind;

/// The golden ratio, (1 + sqrt 5) / 2.
pub const PHI: f32 = 1.618_034;

/// Cross products at or below this length are treated as collinear input.
const DEGENERATE_NORM: f32 = 1e-12;

/// The point `from + (to - from) / PHI`, one golden section along the edge.
pub fn golden_section(from: &Point3<f32>, to: &Point3<f32>) -> Point3<f32> {
    from + (to - from) / PHI
}

/// Euclidean distance between two points.
pub fn distance(a: &Point3<f32>, b: &Point3<f32>) -> f32 {
    nalgebra::distance(a, b)
}

/// Unit normal of the plane through `a`, `b`, `c`, wound by vertex order.
///
/// Returns `None` for collinear or coincident points.
pub fn face_normal(a: &Point3<f32>, b: &Point3<f32>, c: &Point3<f32>) -> Option<Vector3<f32>> {
    let u = b - a;
    let v = c - a;
    u.cross(&v).try_normalize(DEGENERATE_NORM)
}

/// A triangle of the tiling. Vertex order fixes the reference edges used by
/// deflation and the sign of the face normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    a: Point3<f32>,
    b: Point3<f32>,
    c: Point3<f32>,
    kind: TriangleKind,
}

impl Triangle {
    pub fn new(a: Point3<f32>, b: Point3<f32>, c: Point3<f32>, kind: TriangleKind) -> Self {
        Self { a, b, c, kind }
    }

    /// Isosceles triangle with its apex at `apex`, opening along +y.
    ///
    /// `degree` is the apex angle and `height` the distance from the apex to
    /// the base. 36 degrees gives a `TypeA`, 108 degrees a `TypeB`, anything
    /// else a `Half`.
    pub fn iso(apex: Point3<f32>, degree: u32, height: f32) -> Self {
        let half_angle = (degree as f32).to_radians() / 2.0;
        let dx = half_angle.tan() * height;
        let b = Point3::new(apex.x - dx, apex.y + height, 0.0);
        let c = Point3::new(apex.x + dx, apex.y + height, 0.0);

        let kind = match degree {
            36 => TriangleKind::TypeA,
            108 => TriangleKind::TypeB,
            _ => TriangleKind::Half,
        };

        Self::new(apex, b, c, kind)
    }

    pub fn a(&self) -> &Point3<f32> {
        &self.a
    }

    pub fn b(&self) -> &Point3<f32> {
        &self.b
    }

    pub fn c(&self) -> &Point3<f32> {
        &self.c
    }

    pub fn kind(&self) -> TriangleKind {
        self.kind
    }

    pub fn vertices(&self) -> [Point3<f32>; 3] {
        [self.a, self.b, self.c]
    }

    /// Normalized cross product of (b - a) and (c - a).
    pub fn face_normal(&self) -> Option<Vector3<f32>> {
        face_normal(&self.a, &self.b, &self.c)
    }

    pub fn centroid(&self) -> Point3<f32> {
        Point3::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }

    pub fn area(&self) -> f32 {
        (self.b - self.a).cross(&(self.c - self.a)).norm() * 0.5
    }

    /// Append this triangle's deflation children to `out`.
    ///
    /// `TypeB` yields three children and `TypeA` two; other kinds yield none.
    pub fn deflate_into(&self, out: &mut Vec<Triangle>) {
        let (a, b, c) = (self.a, self.b, self.c);

        match self.kind {
            TriangleKind::TypeB => {
                let q = golden_section(&b, &a);
                let r = golden_section(&b, &c);

                out.push(Triangle::new(r, c, a, TriangleKind::TypeB));
                out.push(Triangle::new(q, r, b, TriangleKind::TypeB));
                out.push(Triangle::new(r, q, a, TriangleKind::TypeA));
            }
            TriangleKind::TypeA => {
                let p = golden_section(&a, &b);

                out.push(Triangle::new(c, p, b, TriangleKind::TypeA));
                out.push(Triangle::new(p, c, a, TriangleKind::TypeB));
            }
            TriangleKind::Half | TriangleKind::Extruded(_) => {}
        }
    }

    /// Lift this triangle into three faces meeting at `a + normal`.
    ///
    /// Faces are emitted as (apex, b, a), (apex, a, c), (apex, c, b) and carry
    /// the lowered kind. Returns `None` when the triangle is degenerate.
    pub fn lift(&self) -> Option<[Triangle; 3]> {
        let apex = self.a + self.face_normal()?;
        let kind = self.kind.lowered();

        Some([
            Triangle::new(apex, self.b, self.a, kind),
            Triangle::new(apex, self.a, self.c, kind),
            Triangle::new(apex, self.c, self.b, kind),
        ])
    }
}
