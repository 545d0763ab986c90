use serde::{Deserialize, Serialize};

/// Errors from configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("palette needs at least 2 colors, got {0}")]
    PaletteTooSmall(usize),
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("max_trail_length must be at least 1")]
    ZeroTrailLength,
    #[error("min_height {min} must not exceed max_height {max}")]
    HeightRangeInverted { min: f32, max: f32 },
    #[error("wall_margin {margin} must be smaller than room_half_size {half_size}")]
    MarginTooLarge { margin: f32, half_size: f32 },
}

/// Tuning constants for the gallery core.
///
/// All values are overridable but have working defaults; nothing is
/// negotiated at runtime. Serializable so a deployment can ship a JSON
/// config alongside the binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Trail capacity in ribbon segments.
    pub max_trail_length: usize,
    /// Minimum wall-clock gap between time-based trail samples.
    pub position_update_interval_ms: f64,
    /// Distance that forces a sample even inside the time gate.
    pub near_threshold: f32,
    /// Segment length above which intermediate samples are synthesized.
    pub fast_threshold: f32,
    /// Target spacing of synthesized samples.
    pub interp_step: f32,
    /// Full per-axis range of the random offset on synthesized samples.
    pub jitter: f32,
    /// Ribbon half-width at the head of the trail.
    pub trail_width: f32,
    /// Phase advance of the color cycle per tick.
    pub color_cycle_step: f32,
    /// Trail/orb palette in linear RGB.
    pub palette: Vec<[f32; 3]>,
    /// Base walk speed in world units per reference frame.
    pub base_move_speed: f32,
    /// Per-tick fraction by which look rotation approaches its target.
    pub rotation_smoothing: f32,
    /// Distance from room center to each wall.
    pub room_half_size: f32,
    /// Keep-out distance from the walls.
    pub wall_margin: f32,
    /// Camera floor.
    pub min_height: f32,
    /// Camera ceiling.
    pub max_height: f32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            max_trail_length: 50,
            position_update_interval_ms: 60.0,
            near_threshold: 0.25,
            fast_threshold: 0.5,
            interp_step: 0.2,
            jitter: 0.02,
            trail_width: 0.1,
            color_cycle_step: 0.005,
            palette: vec![
                [0.0, 1.0, 1.0], // cyan
                [1.0, 0.0, 1.0], // magenta
                [1.0, 1.0, 0.0], // yellow
                [1.0, 0.533, 0.0], // orange
                [0.0, 1.0, 0.533], // teal
            ],
            base_move_speed: 0.15,
            rotation_smoothing: 0.1,
            room_half_size: 25.0,
            wall_margin: 0.5,
            min_height: 0.5,
            max_height: 9.5,
        }
    }
}

impl GalleryConfig {
    /// Check the config for values the core cannot operate on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.len() < 2 {
            return Err(ConfigError::PaletteTooSmall(self.palette.len()));
        }
        if self.max_trail_length == 0 {
            return Err(ConfigError::ZeroTrailLength);
        }
        for (name, value) in [
            ("interp_step", self.interp_step),
            ("trail_width", self.trail_width),
            ("base_move_speed", self.base_move_speed),
            ("room_half_size", self.room_half_size),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.min_height > self.max_height {
            return Err(ConfigError::HeightRangeInverted {
                min: self.min_height,
                max: self.max_height,
            });
        }
        if self.wall_margin >= self.room_half_size {
            return Err(ConfigError::MarginTooLarge {
                margin: self.wall_margin,
                half_size: self.room_half_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(GalleryConfig::default().validate().is_ok());
    }

    #[test]
    fn single_color_palette_rejected() {
        let config = GalleryConfig {
            palette: vec![[1.0, 1.0, 1.0]],
            ..GalleryConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaletteTooSmall(1))
        ));
    }

    #[test]
    fn inverted_height_range_rejected() {
        let config = GalleryConfig {
            min_height: 5.0,
            max_height: 1.0,
            ..GalleryConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::HeightRangeInverted { .. })
        ));
    }

    #[test]
    fn margin_wider_than_room_rejected() {
        let config = GalleryConfig {
            wall_margin: 30.0,
            ..GalleryConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MarginTooLarge { .. })
        ));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = GalleryConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: GalleryConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.max_trail_length, config.max_trail_length);
        assert_eq!(back.palette.len(), config.palette.len());
    }
}
