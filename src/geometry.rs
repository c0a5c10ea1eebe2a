use glam::Vec3;

/// Wireframe topology: 12 index pairs into [`vertices`], connecting corners
/// that differ in exactly one axis. The pairing depends on the enumeration
/// order of `vertices` and must stay in sync with it.
pub const EDGES: [[usize; 2]; 12] = [
    [0, 1],
    [0, 2],
    [0, 4],
    [1, 3],
    [1, 5],
    [2, 3],
    [2, 6],
    [3, 7],
    [4, 5],
    [4, 6],
    [5, 7],
    [6, 7],
];

/// The 8 corners of an axis-aligned cube with edge length `size`, centered
/// at the origin. Enumerated x-outer, y-middle, z-inner, negative half
/// first on each axis, so index bit 2 is x, bit 1 is y, bit 0 is z.
pub fn vertices(size: f32) -> [Vec3; 8] {
    let half = size / 2.0;
    let mut corners = [Vec3::ZERO; 8];
    let mut i = 0;

    for sx in [-1.0f32, 1.0] {
        for sy in [-1.0f32, 1.0] {
            for sz in [-1.0f32, 1.0] {
                corners[i] = Vec3::new(sx * half, sy * half, sz * half);
                i += 1;
            }
        }
    }

    corners
}
