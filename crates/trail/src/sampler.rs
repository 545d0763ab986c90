use std::collections::VecDeque;

use gallery_common::GalleryConfig;
use glam::Vec3;

/// A timestamped anchor position recorded into trail history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub position: Vec3,
    pub timestamp_ms: f64,
}

/// Records anchor-point samples over time, oldest first.
///
/// Sampling is adaptive: a slow gate (`position_update_interval_ms`) keeps a
/// stationary anchor refreshing, a distance gate (`near_threshold`) samples
/// densely under motion, and segments longer than `fast_threshold` are
/// backfilled with jittered synthetic points so the ribbon never shows long
/// straight runs.
pub struct TrailSampler {
    samples: VecDeque<Sample>,
    capacity: usize,
    min_interval_ms: f64,
    near_threshold: f32,
    fast_threshold: f32,
    interp_step: f32,
    jitter: f32,
    last_add_ms: f64,
    rng_state: u64,
}

impl TrailSampler {
    pub fn new(config: &GalleryConfig, seed: u64) -> Self {
        Self {
            samples: VecDeque::with_capacity(config.max_trail_length + 1),
            capacity: config.max_trail_length,
            min_interval_ms: config.position_update_interval_ms,
            near_threshold: config.near_threshold,
            fast_threshold: config.fast_threshold,
            interp_step: config.interp_step,
            jitter: config.jitter,
            last_add_ms: f64::NEG_INFINITY,
            rng_state: seed,
        }
    }

    /// Trail capacity in segments.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample history, oldest first.
    pub fn samples(&self) -> &VecDeque<Sample> {
        &self.samples
    }

    /// Feed the current anchor position into the history.
    ///
    /// Returns true if the sample sequence changed, i.e. the ribbon needs a
    /// rebuild. Synthetic interpolation runs before capacity eviction: a
    /// very fast jump may evict older real samples in favor of synthetic
    /// ones, but the newest endpoint is always retained and the length
    /// invariant (`len <= capacity + 1`) holds unconditionally.
    pub fn ingest(&mut self, position: Vec3, now_ms: f64) -> bool {
        let appended = self.try_append(position, now_ms);
        let refined = if appended { self.refine_fast_motion() } else { 0 };

        while self.samples.len() > self.capacity + 1 {
            self.samples.pop_front();
        }

        if appended {
            tracing::trace!(
                len = self.samples.len(),
                refined,
                "trail sample appended"
            );
        }
        appended
    }

    fn try_append(&mut self, position: Vec3, now_ms: f64) -> bool {
        let due = now_ms - self.last_add_ms > self.min_interval_ms;
        let moved = self
            .samples
            .back()
            .is_some_and(|last| position.distance(last.position) > self.near_threshold);

        if !(due || moved) {
            return false;
        }
        self.samples.push_back(Sample {
            position,
            timestamp_ms: now_ms,
        });
        self.last_add_ms = now_ms;
        true
    }

    /// Backfill jittered intermediate samples between the two newest points
    /// when the latest segment exceeds the fast-motion threshold. Returns
    /// the number of synthetic samples inserted.
    fn refine_fast_motion(&mut self) -> usize {
        let n = self.samples.len();
        if n < 2 {
            return 0;
        }
        let newest = self.samples[n - 1];
        let prev = self.samples[n - 2];
        let distance = newest.position.distance(prev.position);
        if distance <= self.fast_threshold {
            return 0;
        }

        let points = (distance / self.interp_step).ceil() as usize;
        for k in 1..points {
            let t = k as f32 / points as f32;
            let position = prev.position.lerp(newest.position, t) + self.jitter_offset();
            let timestamp_ms =
                prev.timestamp_ms + (newest.timestamp_ms - prev.timestamp_ms) * t as f64;
            // Insert just before the newest endpoint, preserving order.
            let at = self.samples.len() - 1;
            self.samples.insert(
                at,
                Sample {
                    position,
                    timestamp_ms,
                },
            );
        }
        tracing::debug!(distance, inserted = points - 1, "fast motion refinement");
        points - 1
    }

    /// Small bounded random offset, independent per axis, so synthetic
    /// segments are not perfectly straight.
    fn jitter_offset(&mut self) -> Vec3 {
        Vec3::new(self.next_unit(), self.next_unit(), self.next_unit()) * self.jitter
    }

    /// Deterministic value in [-0.5, 0.5).
    fn next_unit(&mut self) -> f32 {
        self.rng_state = splitmix64(self.rng_state);
        ((self.rng_state >> 40) as f32 / (1u64 << 24) as f32) - 0.5
    }
}

/// Splitmix64 step function: fast, deterministic, good enough for visual
/// jitter without pulling in an RNG dependency.
fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
