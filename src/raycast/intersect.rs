//! Single-sided ray-triangle intersection.

use crate::geometry::Triangle;
use crate::math::{Ray, Vec2};
use crate::raycast::hit::RayHit;

const EPSILON: f32 = 1e-7;

/// Möller–Trumbore test, front faces only.
///
/// A determinant below `EPSILON` rejects the triangle: back-facing
/// triangles (wound away from the ray) and degenerate or ray-parallel
/// triangles all read as ordinary misses. On a hit, returns the distance
/// along the ray (in units of the direction's length) and the
/// barycentric (u, v) of the hit.
///
/// Every intermediate value is local to the call, which is what makes
/// concurrent queries over a shared index safe.
pub(crate) fn intersect_triangle(triangle: &Triangle, ray: &Ray) -> Option<(f32, Vec2)> {
    let [p0, p1, p2] = *triangle.positions();
    let edge1 = p1 - p0;
    let edge2 = p2 - p0;

    let pvec = ray.direction.cross(edge2);
    let det = edge1.dot(pvec);
    if det < EPSILON {
        return None;
    }

    let tvec = ray.origin - p0;
    let u = tvec.dot(pvec);
    if u < 0.0 || u > det {
        return None;
    }

    let qvec = tvec.cross(edge1);
    let v = ray.direction.dot(qvec);
    if v < 0.0 || u + v > det {
        return None;
    }

    let inv_det = 1.0 / det;
    let distance = edge2.dot(qvec) * inv_det;
    Some((distance, Vec2::new(u * inv_det, v * inv_det)))
}

/// Builds the full hit record for a successful intersection.
///
/// Point and texture coordinate use the edge-vector interpolation form
/// (`p0 + (p1 - p0) * u + (p2 - p0) * v`). Inside the triangle it agrees
/// with weighting the vertices by (1 - u - v, u, v), but the two forms
/// round differently, and downstream comparisons rely on this one.
pub(crate) fn build_hit(triangle: &Triangle, distance: f32, barycentric: Vec2) -> RayHit {
    let [p0, p1, p2] = *triangle.positions();
    let [uv0, uv1, uv2] = *triangle.uvs();

    RayHit {
        distance,
        object: triangle.object().clone(),
        barycentric,
        tex_coord: uv0 + (uv1 - uv0) * barycentric.x + (uv2 - uv0) * barycentric.y,
        point: p0 + (p1 - p0) * barycentric.x + (p2 - p0) * barycentric.y,
    }
}
