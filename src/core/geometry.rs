use glam::Vec3;
use std::f32::consts::PI;

/// Indexed triangle mesh with per-vertex normals.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u16>,
}

/// Axis-aligned box centered on the origin, four vertices per face.
pub fn box_mesh(width: f32, height: f32, depth: f32) -> MeshData {
    let half = Vec3::new(width, height, depth) * 0.5;
    // (normal, u, v) with u x v = normal so each face winds counter-clockwise
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    let mut mesh = MeshData::default();
    for (n, u, v) in faces {
        let base = mesh.positions.len() as u16;
        let c = n * half;
        let u = u * half;
        let v = v * half;
        for corner in [c - u - v, c + u - v, c + u + v, c - u + v] {
            mesh.positions.push(corner);
            mesh.normals.push(n);
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

/// Latitude/longitude sphere. Pole rows emit a single triangle per segment.
pub fn uv_sphere_mesh(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut mesh = MeshData::default();
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let p = Vec3::new(
                -radius * (u * 2.0 * PI).cos() * (v * PI).sin(),
                radius * (v * PI).cos(),
                radius * (u * 2.0 * PI).sin() * (v * PI).sin(),
            );
            mesh.positions.push(p);
            mesh.normals.push(p.normalize_or_zero());
        }
    }
    let row = ws + 1;
    for iy in 0..hs {
        for ix in 0..ws {
            let a = (iy * row + ix + 1) as u16;
            let b = (iy * row + ix) as u16;
            let c = ((iy + 1) * row + ix) as u16;
            let d = ((iy + 1) * row + ix + 1) as u16;
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

fn icosahedron_vertices() -> [Vec3; 12] {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
}

/// Non-indexed geodesic sphere: each icosahedron face is split into
/// `(detail + 1)^2` triangles and every vertex is pushed out to `radius`.
///
/// Vertices are listed three per triangle, so shared corners are duplicated.
/// Returns `20 * (detail + 1)^2 * 3` positions.
pub fn icosphere_positions(radius: f32, detail: u32) -> Vec<Vec3> {
    let base = icosahedron_vertices();
    let cols = (detail + 1) as usize;
    let mut out = Vec::with_capacity(20 * cols * cols * 3);
    let mut grid: Vec<Vec<Vec3>> = Vec::with_capacity(cols + 1);
    for face in ICOSAHEDRON_FACES.iter() {
        let (a, b, c) = (base[face[0]], base[face[1]], base[face[2]]);
        grid.clear();
        for i in 0..=cols {
            let f = i as f32 / cols as f32;
            let aj = a.lerp(c, f);
            let bj = b.lerp(c, f);
            let rows = cols - i;
            let mut row = Vec::with_capacity(rows + 1);
            for j in 0..=rows {
                if j == 0 && i == cols {
                    row.push(aj);
                } else {
                    row.push(aj.lerp(bj, j as f32 / rows as f32));
                }
            }
            grid.push(row);
        }
        for i in 0..cols {
            for j in 0..(2 * (cols - i) - 1) {
                let k = j / 2;
                if j % 2 == 0 {
                    out.push(grid[i][k + 1]);
                    out.push(grid[i + 1][k]);
                    out.push(grid[i][k]);
                } else {
                    out.push(grid[i][k + 1]);
                    out.push(grid[i + 1][k + 1]);
                    out.push(grid[i + 1][k]);
                }
            }
        }
    }
    for p in out.iter_mut() {
        *p = p.normalize() * radius;
    }
    out
}

/// Flat per-triangle normals for a non-indexed triangle list.
///
/// `normals` must be the same length as `positions`; a trailing partial
/// triangle is left untouched.
pub fn recompute_flat_normals(positions: &[Vec3], normals: &mut [Vec3]) {
    for (tri, out) in positions.chunks_exact(3).zip(normals.chunks_exact_mut(3)) {
        let cb = tri[2] - tri[1];
        let ab = tri[0] - tri[1];
        let n = cb.cross(ab).normalize_or_zero();
        out[0] = n;
        out[1] = n;
        out[2] = n;
    }
}

/// Line-list indices drawing the three edges of every triangle in a
/// non-indexed list of `vertex_count` vertices.
pub fn triangle_edge_indices(vertex_count: usize) -> Vec<u32> {
    let mut out = Vec::with_capacity(vertex_count * 2);
    for t in (0..vertex_count / 3).map(|t| (t * 3) as u32) {
        out.extend_from_slice(&[t, t + 1, t + 1, t + 2, t + 2, t]);
    }
    out
}
