//! Tessellated plane grids for the fold shaders. The fold creases happen
//! in the vertex stage, so the planes need enough segments to bend
//! smoothly.

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Build a `width x height` plane centered at the origin in the XY plane,
/// facing +Z, with `segs_x * segs_y` quads and CCW triangle winding.
/// UVs run 0..1 left-to-right and bottom-to-top.
pub fn plane_grid(
    width: f32,
    height: f32,
    segs_x: u32,
    segs_y: u32,
) -> (Vec<MeshVertex>, Vec<u32>) {
    let nx = segs_x.max(1);
    let ny = segs_y.max(1);
    let mut vertices = Vec::with_capacity(((nx + 1) * (ny + 1)) as usize);
    for iy in 0..=ny {
        let v = iy as f32 / ny as f32;
        let y = (v - 0.5) * height;
        for ix in 0..=nx {
            let u = ix as f32 / nx as f32;
            let x = (u - 0.5) * width;
            vertices.push(MeshVertex {
                position: [x, y, 0.0],
                uv: [u, v],
            });
        }
    }
    let stride = nx + 1;
    let mut indices = Vec::with_capacity((nx * ny * 6) as usize);
    for iy in 0..ny {
        for ix in 0..nx {
            let a = iy * stride + ix;
            let b = a + 1;
            let c = a + stride;
            let d = c + 1;
            indices.extend_from_slice(&[a, b, d, a, d, c]);
        }
    }
    (vertices, indices)
}
