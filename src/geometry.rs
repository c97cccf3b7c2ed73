//! Procedural mesh generators for primitive shapes.
//!
//! All generators produce meshes wound counter-clockwise as seen from the
//! outside, matching the rasterizer's front-face convention, with unit
//! normals and UVs filled in. Parameter preconditions are enforced with
//! asserts; a violated precondition is a caller bug, not a recoverable
//! error.

use std::f32::consts::PI;

use glam::{Vec2, Vec3};

use crate::mesh::{Mesh, Vertex};

/// Accumulates smooth vertex normals from face normals.
///
/// Expects the vertices' normals to start at zero. Every face adds its unit
/// normal to its three corners; a final pass renormalizes. Zero-area faces
/// contribute nothing.
fn accumulate_smooth_normals(vertices: &mut [Vertex], indices: &[u32]) {
    for tri in indices.chunks_exact(3) {
        let [i0, i1, i2] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let edge1 = vertices[i1].position - vertices[i0].position;
        let edge2 = vertices[i2].position - vertices[i0].position;
        let normal = edge1.cross(edge2).normalize_or_zero();

        vertices[i0].normal += normal;
        vertices[i1].normal += normal;
        vertices[i2].normal += normal;
    }

    for vertex in vertices {
        vertex.normal = vertex.normal.normalize_or_zero();
    }
}

/// A 2x2x2 cube centered at the origin, with per-face normals and a
/// cross-shaped UV atlas.
pub fn cube() -> Mesh {
    // UV MAP        Y
    //      ____     + X
    //     | TT |
    //     |    |
    //     | BB |
    // ____|    |____
    //| LL   BT   RR |
    //|____      ____|
    //     | FF |
    //     |____|
    #[rustfmt::skip]
    let faces: [(Vec3, [(Vec3, Vec2); 4]); 6] = [
        // Front face (-Z)
        (Vec3::NEG_Z, [
            (Vec3::new(-1.0, -1.0, -1.0), Vec2::new(1.0 / 3.0, 0.25)),
            (Vec3::new( 1.0, -1.0, -1.0), Vec2::new(2.0 / 3.0, 0.25)),
            (Vec3::new( 1.0,  1.0, -1.0), Vec2::new(2.0 / 3.0, 0.0)),
            (Vec3::new(-1.0,  1.0, -1.0), Vec2::new(1.0 / 3.0, 0.0)),
        ]),
        // Back face (+Z)
        (Vec3::Z, [
            (Vec3::new( 1.0, -1.0,  1.0), Vec2::new(2.0 / 3.0, 0.5)),
            (Vec3::new(-1.0, -1.0,  1.0), Vec2::new(1.0 / 3.0, 0.5)),
            (Vec3::new(-1.0,  1.0,  1.0), Vec2::new(1.0 / 3.0, 0.75)),
            (Vec3::new( 1.0,  1.0,  1.0), Vec2::new(2.0 / 3.0, 0.75)),
        ]),
        // Left face (-X)
        (Vec3::NEG_X, [
            (Vec3::new(-1.0, -1.0,  1.0), Vec2::new(1.0 / 3.0, 0.5)),
            (Vec3::new(-1.0, -1.0, -1.0), Vec2::new(1.0 / 3.0, 0.25)),
            (Vec3::new(-1.0,  1.0, -1.0), Vec2::new(0.0, 0.25)),
            (Vec3::new(-1.0,  1.0,  1.0), Vec2::new(0.0, 0.5)),
        ]),
        // Right face (+X)
        (Vec3::X, [
            (Vec3::new( 1.0, -1.0, -1.0), Vec2::new(2.0 / 3.0, 0.25)),
            (Vec3::new( 1.0, -1.0,  1.0), Vec2::new(2.0 / 3.0, 0.5)),
            (Vec3::new( 1.0,  1.0,  1.0), Vec2::new(1.0, 0.5)),
            (Vec3::new( 1.0,  1.0, -1.0), Vec2::new(1.0, 0.25)),
        ]),
        // Top face (+Y)
        (Vec3::Y, [
            (Vec3::new(-1.0,  1.0, -1.0), Vec2::new(1.0 / 3.0, 1.0)),
            (Vec3::new( 1.0,  1.0, -1.0), Vec2::new(2.0 / 3.0, 1.0)),
            (Vec3::new( 1.0,  1.0,  1.0), Vec2::new(2.0 / 3.0, 0.75)),
            (Vec3::new(-1.0,  1.0,  1.0), Vec2::new(1.0 / 3.0, 0.75)),
        ]),
        // Bottom face (-Y)
        (Vec3::NEG_Y, [
            (Vec3::new(-1.0, -1.0,  1.0), Vec2::new(1.0 / 3.0, 0.5)),
            (Vec3::new( 1.0, -1.0,  1.0), Vec2::new(2.0 / 3.0, 0.5)),
            (Vec3::new( 1.0, -1.0, -1.0), Vec2::new(2.0 / 3.0, 0.25)),
            (Vec3::new(-1.0, -1.0, -1.0), Vec2::new(1.0 / 3.0, 0.25)),
        ]),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (face, (normal, corners)) in faces.iter().enumerate() {
        let base = (face * 4) as u32;
        for &(position, uv) in corners {
            vertices.push(Vertex::new(position, *normal).with_uv(uv));
        }
        indices.extend_from_slice(&[base, base + 2, base + 1, base + 2, base, base + 3]);
    }

    Mesh::new(vertices, indices).expect("generated cube is a valid mesh")
}

/// A UV sphere centered at the origin.
///
/// `rings` latitudinal bands, `segments` longitudinal slices; both must be
/// at least 2. Normals are exact (radial).
pub fn uv_sphere(radius: f32, rings: u32, segments: u32) -> Mesh {
    assert!(radius > 0.0 && rings > 1 && segments > 1);

    let mut vertices = Vec::with_capacity(((rings + 1) * (segments + 1)) as usize);
    let mut indices = Vec::with_capacity((rings * segments * 6) as usize);

    for s in 0..=rings {
        let phi = PI * s as f32 / rings as f32 - PI / 2.0;
        let y = radius * phi.sin();
        let ring_radius = radius * phi.cos();
        let v = 1.0 - s as f32 / rings as f32;

        for t in 0..=segments {
            let theta = 2.0 * PI * t as f32 / segments as f32;
            let position = Vec3::new(ring_radius * theta.cos(), y, ring_radius * theta.sin());
            let u = t as f32 / segments as f32;
            vertices
                .push(Vertex::new(position, position.normalize()).with_uv(Vec2::new(u, v)));
        }
    }

    for r in 0..rings {
        let ring_start = r * (segments + 1);
        let next_ring_start = (r + 1) * (segments + 1);
        for s in 0..segments {
            let current = ring_start + s;
            let next = current + 1;
            let next_ring_current = next_ring_start + s;
            let next_ring_next = next_ring_current + 1;

            indices.extend_from_slice(&[next_ring_current, next, current]);
            indices.extend_from_slice(&[next_ring_current, next_ring_next, next]);
        }
    }

    Mesh::new(vertices, indices).expect("generated sphere is a valid mesh")
}

/// A closed cylinder with its base on the XZ plane, extending to `height`.
pub fn cylinder(radius: f32, height: f32, segments: u32) -> Mesh {
    assert!(radius > 0.0 && segments > 1);

    let mut vertices = Vec::with_capacity((segments * 2 + 2) as usize);
    let mut indices = Vec::with_capacity((segments * 12) as usize);

    // Cap centers first, then the top and bottom rims.
    vertices.push(
        Vertex::new(Vec3::new(0.0, height, 0.0), Vec3::ZERO).with_uv(Vec2::new(0.5, 0.5)),
    );
    vertices.push(Vertex::new(Vec3::ZERO, Vec3::ZERO).with_uv(Vec2::new(0.5, 0.5)));

    for rim_height in [height, 0.0] {
        for i in 0..segments {
            let angle = 2.0 * PI * i as f32 / segments as f32;
            let position = Vec3::new(radius * angle.cos(), rim_height, radius * angle.sin());
            let uv = Vec2::new(0.5 + 0.5 * angle.cos(), 0.5 + 0.5 * angle.sin());
            vertices.push(Vertex::new(position, Vec3::ZERO).with_uv(uv));
        }
    }

    let top = |i: u32| 2 + i % segments;
    let bottom = |i: u32| 2 + segments + i % segments;

    for i in 0..segments {
        // Top cap
        indices.extend_from_slice(&[0, top(i + 1), top(i)]);
        // Bottom cap
        indices.extend_from_slice(&[1, bottom(i), bottom(i + 1)]);
        // Side quad
        indices.extend_from_slice(&[top(i), bottom(i + 1), bottom(i)]);
        indices.extend_from_slice(&[top(i), top(i + 1), bottom(i + 1)]);
    }

    let mut mesh_vertices = vertices;
    accumulate_smooth_normals(&mut mesh_vertices, &indices);
    Mesh::new(mesh_vertices, indices).expect("generated cylinder is a valid mesh")
}

/// A cone with its base on the XZ plane and its tip at `height`.
pub fn cone(radius: f32, height: f32, segments: u32) -> Mesh {
    assert!(radius > 0.0 && segments > 1);

    let mut vertices = Vec::with_capacity((segments + 2) as usize);
    let mut indices = Vec::with_capacity((segments * 6) as usize);

    // Tip, base center, then the base rim.
    vertices.push(
        Vertex::new(Vec3::new(0.0, height, 0.0), Vec3::ZERO).with_uv(Vec2::new(0.5, 1.0)),
    );
    vertices.push(Vertex::new(Vec3::ZERO, Vec3::ZERO).with_uv(Vec2::new(0.5, 0.0)));

    for i in 0..segments {
        let angle = 2.0 * PI * i as f32 / segments as f32;
        let position = Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin());
        let uv = Vec2::new(0.5 + 0.5 * angle.cos(), 0.5 + 0.5 * angle.sin());
        vertices.push(Vertex::new(position, Vec3::ZERO).with_uv(uv));
    }

    let rim = |i: u32| 2 + i % segments;

    for i in 0..segments {
        // Side
        indices.extend_from_slice(&[0, rim(i + 1), rim(i)]);
        // Base
        indices.extend_from_slice(&[rim(i), rim(i + 1), 1]);
    }

    let mut mesh_vertices = vertices;
    accumulate_smooth_normals(&mut mesh_vertices, &indices);
    Mesh::new(mesh_vertices, indices).expect("generated cone is a valid mesh")
}

/// A torus around the Y axis. `major_radius` is the distance from the
/// center to the tube center, `minor_radius` the tube radius.
pub fn torus(
    major_radius: f32,
    minor_radius: f32,
    major_segments: u32,
    minor_segments: u32,
) -> Mesh {
    assert!(
        minor_radius > 0.0
            && minor_radius <= major_radius
            && major_segments > 2
            && minor_segments > 1
    );

    let mut vertices = Vec::with_capacity((major_segments * minor_segments) as usize);
    let mut indices = Vec::with_capacity((major_segments * minor_segments * 6) as usize);

    for i in 0..major_segments {
        let phi = 2.0 * PI * i as f32 / major_segments as f32;
        let center = Vec3::new(major_radius * phi.cos(), 0.0, major_radius * phi.sin());
        let u = i as f32 / major_segments as f32;

        for j in 0..minor_segments {
            let theta = 2.0 * PI * j as f32 / minor_segments as f32;
            // Radial direction of the tube ring; doubles as the exact normal.
            let direction = Vec3::new(
                theta.cos() * phi.cos(),
                theta.sin(),
                theta.cos() * phi.sin(),
            );
            let position = center + minor_radius * direction;
            let v = j as f32 / minor_segments as f32;
            vertices.push(Vertex::new(position, direction).with_uv(Vec2::new(u, v)));
        }
    }

    for i in 0..major_segments {
        let ring = i * minor_segments;
        let next_ring = (i + 1) % major_segments * minor_segments;
        for j in 0..minor_segments {
            let next_j = (j + 1) % minor_segments;

            let v1 = ring + j;
            let v2 = next_ring + j;
            let v3 = next_ring + next_j;
            let v4 = ring + next_j;

            indices.extend_from_slice(&[v1, v4, v2]);
            indices.extend_from_slice(&[v2, v4, v3]);
        }
    }

    Mesh::new(vertices, indices).expect("generated torus is a valid mesh")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_unit_normals(mesh: &Mesh) {
        for vertex in mesh.vertices() {
            assert_relative_eq!(vertex.normal.length(), 1.0, epsilon = 1e-4);
        }
    }

    /// Non-degenerate triangles must wind counter-clockwise as seen from
    /// outside: the face normal points away from the origin.
    fn assert_ccw_outward(mesh: &Mesh) {
        for triangle in mesh.triangles() {
            let [a, b, c] = triangle.map(|v| v.position);
            let face_normal = (b - a).cross(c - a);
            if face_normal.length_squared() < 1e-8 {
                continue;
            }
            let centroid = (a + b + c) / 3.0;
            assert!(
                face_normal.dot(centroid) > 0.0,
                "clockwise triangle at centroid {centroid:?}"
            );
        }
    }

    #[test]
    fn cube_has_24_vertices_and_12_triangles() {
        let mesh = cube();
        assert_eq!(mesh.vertices().len(), 24);
        assert_eq!(mesh.triangle_count(), 12);
        assert_unit_normals(&mesh);
        assert_ccw_outward(&mesh);
    }

    #[test]
    fn sphere_normals_are_radial() {
        let mesh = uv_sphere(2.0, 8, 16);
        assert_unit_normals(&mesh);
        assert_ccw_outward(&mesh);
        for vertex in mesh.vertices() {
            assert_relative_eq!(vertex.position.length(), 2.0, epsilon = 1e-4);
            let radial = vertex.position.normalize();
            assert_relative_eq!(vertex.normal.dot(radial), 1.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn cylinder_is_valid_and_smooth() {
        let mesh = cylinder(1.0, 2.0, 12);
        assert_eq!(mesh.vertices().len(), 26);
        assert_unit_normals(&mesh);
    }

    #[test]
    fn cone_is_valid_and_smooth() {
        let mesh = cone(1.0, 2.0, 12);
        assert_eq!(mesh.vertices().len(), 14);
        assert_unit_normals(&mesh);
    }

    #[test]
    fn torus_winds_outward_from_tube_center() {
        let mesh = torus(2.0, 0.5, 12, 8);
        assert_eq!(mesh.vertices().len(), 96);
        assert_unit_normals(&mesh);
        // Normal at each vertex points away from the tube's center circle.
        for vertex in mesh.vertices() {
            let on_axis_plane =
                Vec3::new(vertex.position.x, 0.0, vertex.position.z).normalize() * 2.0;
            let outward = (vertex.position - on_axis_plane).normalize();
            assert_relative_eq!(vertex.normal.dot(outward), 1.0, epsilon = 1e-4);
        }
    }

    #[test]
    #[should_panic]
    fn sphere_rejects_too_few_rings() {
        let _ = uv_sphere(1.0, 1, 8);
    }
}
