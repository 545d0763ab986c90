use glam::Vec3;

use crate::sampler::TrailSampler;

/// Floats per ribbon segment in the position buffer: 6 vertices x 3.
const POS_FLOATS_PER_SEGMENT: usize = 18;
/// Floats per ribbon segment in the UV buffer: 6 vertices x 2.
const UV_FLOATS_PER_SEGMENT: usize = 12;

/// Fixed-capacity tapering ribbon mesh following the trail samples.
///
/// The vertex buffer is allocated once and mutated in place every rebuild;
/// `segments` is the valid-range cursor the renderer must respect — vertices
/// past `draw_vertex_count()` hold stale data and must not be drawn. UVs are
/// precomputed over the full capacity and never change, which keeps the
/// fade/scroll appearance stable regardless of the live trail length.
pub struct RibbonBuffer {
    positions: Vec<f32>,
    uvs: Vec<f32>,
    capacity: usize,
    segments: usize,
    base_width: f32,
    world_up: Vec3,
    last_perp: Vec3,
}

impl RibbonBuffer {
    pub fn new(capacity: usize, base_width: f32) -> Self {
        assert!(capacity > 0, "ribbon capacity must be at least 1");
        let mut uvs = vec![0.0; capacity * UV_FLOATS_PER_SEGMENT];
        for i in 0..capacity {
            let v0 = i as f32 / capacity as f32;
            let v1 = (i + 1) as f32 / capacity as f32;
            let uv = &mut uvs[i * UV_FLOATS_PER_SEGMENT..(i + 1) * UV_FLOATS_PER_SEGMENT];
            // Two triangles: (l_curr, r_curr, l_next) and (r_curr, r_next, l_next).
            uv.copy_from_slice(&[
                0.0, v0, 1.0, v0, 0.0, v1, //
                1.0, v0, 1.0, v1, 0.0, v1,
            ]);
        }
        Self {
            positions: vec![0.0; capacity * POS_FLOATS_PER_SEGMENT],
            uvs,
            capacity,
            segments: 0,
            base_width,
            world_up: Vec3::Y,
            last_perp: Vec3::X,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of valid segments after the last rebuild.
    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Number of vertices the renderer should draw.
    pub fn draw_vertex_count(&self) -> usize {
        self.segments * 6
    }

    /// Full position buffer, including the stale tail past the draw range.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn uvs(&self) -> &[f32] {
        &self.uvs
    }

    /// Position buffer as bytes for upload to a geometry buffer.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }

    /// Regenerate the valid buffer range from the current sample sequence.
    ///
    /// Iterates from the newest sample toward the tail, emitting one quad
    /// per segment with a linearly tapering half-width. With fewer than two
    /// samples this is a no-op leaving the draw range at zero.
    pub fn rebuild(&mut self, sampler: &TrailSampler) {
        let samples = sampler.samples();
        let n = samples.len();
        if n < 2 {
            self.segments = 0;
            return;
        }
        let segments = (n - 1).min(self.capacity);

        for i in 0..segments {
            let curr = samples[n - 1 - i].position;
            let next = samples[n - 2 - i].position;
            let perp = self.segment_perpendicular(next - curr);
            let width = self.base_width * (1.0 - i as f32 / segments as f32);

            let l_curr = curr + perp * width;
            let r_curr = curr - perp * width;
            let l_next = next + perp * width;
            let r_next = next - perp * width;

            let out = &mut self.positions
                [i * POS_FLOATS_PER_SEGMENT..(i + 1) * POS_FLOATS_PER_SEGMENT];
            out[0..3].copy_from_slice(&l_curr.to_array());
            out[3..6].copy_from_slice(&r_curr.to_array());
            out[6..9].copy_from_slice(&l_next.to_array());
            out[9..12].copy_from_slice(&r_curr.to_array());
            out[12..15].copy_from_slice(&r_next.to_array());
            out[15..18].copy_from_slice(&l_next.to_array());
        }
        self.segments = segments;
    }

    /// Unit vector across the ribbon for a segment delta. Falls back to the
    /// last valid perpendicular when the delta is degenerate (coincident
    /// points, or motion parallel to world up) so the buffer never sees a
    /// NaN.
    fn segment_perpendicular(&mut self, delta: Vec3) -> Vec3 {
        const MIN_LEN_SQ: f32 = 1e-12;
        if delta.length_squared() > MIN_LEN_SQ {
            let perp = delta.normalize().cross(self.world_up);
            if perp.length_squared() > MIN_LEN_SQ {
                self.last_perp = perp.normalize();
            }
        }
        self.last_perp
    }
}
