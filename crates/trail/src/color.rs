use glam::Vec3;

/// Immutable ordered list of trail colors in linear RGB.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Vec3>,
}

impl Palette {
    /// Create a palette. At least two colors are required so there is always
    /// a pair to interpolate between.
    pub fn new(colors: Vec<Vec3>) -> Self {
        assert!(colors.len() >= 2, "palette needs at least 2 colors");
        Self { colors }
    }

    pub fn from_rgb(rgb: &[[f32; 3]]) -> Self {
        Self::new(rgb.iter().map(|c| Vec3::from_array(*c)).collect())
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn color(&self, index: usize) -> Vec3 {
        self.colors[index % self.colors.len()]
    }
}

/// Cycles a phase scalar through [0, 1) and maps it onto a palette.
///
/// Pure given phase and palette; the only mutable state is the phase value.
#[derive(Debug, Clone, Copy)]
pub struct ColorCycler {
    phase: f32,
    step: f32,
}

impl ColorCycler {
    pub fn new(step: f32) -> Self {
        Self { phase: 0.0, step }
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Advance the phase by the configured step, wrapping modulo 1.
    pub fn advance(&mut self) {
        self.advance_by(self.step);
    }

    /// Advance the phase by an explicit amount, wrapping modulo 1.
    pub fn advance_by(&mut self, step: f32) {
        self.phase = (self.phase + step).rem_euclid(1.0);
    }

    /// Interpolated palette color at the current phase.
    ///
    /// At phase 0 this is exactly `palette[0]`.
    pub fn current(&self, palette: &Palette) -> Vec3 {
        let k = palette.len();
        let scaled = self.phase * k as f32;
        let i = (scaled.floor() as usize) % k;
        let frac = scaled - scaled.floor();
        palette.color(i).lerp(palette.color(i + 1), frac)
    }
}
