use gallery_common::ExhibitId;

use crate::walkthrough::Walkthrough;

/// Read-only queries against the runtime for debugging and display UI.
pub struct WalkInspector;

impl WalkInspector {
    /// One-line live position string for the debug panel.
    pub fn position_display(walk: &Walkthrough) -> String {
        let p = walk.camera().position;
        format!("Position: {:.2}, {:.2}, {:.2}", p.x, p.y, p.z)
    }

    /// Snapshot of the per-tick state.
    pub fn summary(walk: &Walkthrough) -> FrameSummary {
        FrameSummary {
            tick: walk.tick_count(),
            position: walk.camera().position.to_array(),
            trail_samples: walk.sampler().len(),
            trail_segments: walk.ribbon().segments(),
            color: walk.current_color().to_array(),
            selection: walk.selection(),
        }
    }
}

/// Summary of one tick of runtime state.
#[derive(Debug, Clone)]
pub struct FrameSummary {
    pub tick: u64,
    pub position: [f32; 3],
    pub trail_samples: usize,
    pub trail_segments: usize,
    pub color: [f32; 3],
    pub selection: Option<ExhibitId>,
}

impl std::fmt::Display for FrameSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "tick={} pos=({:.2}, {:.2}, {:.2}) trail={}/{} color=({:.2}, {:.2}, {:.2}) selected={}",
            self.tick,
            self.position[0],
            self.position[1],
            self.position[2],
            self.trail_segments,
            self.trail_samples,
            self.color[0],
            self.color[1],
            self.color[2],
            self.selection
                .map(|id| id.0.to_string()[..8].to_string())
                .unwrap_or_else(|| "-".into()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_common::GalleryConfig;

    #[test]
    fn position_display_format() {
        let walk = Walkthrough::new(GalleryConfig::default(), 0).unwrap();
        let s = WalkInspector::position_display(&walk);
        assert_eq!(s, "Position: 0.00, 1.60, 5.00");
    }

    #[test]
    fn summary_tracks_tick_state() {
        let mut walk = Walkthrough::new(GalleryConfig::default(), 0).unwrap();
        walk.tick(1.0 / 60.0, 0.0);
        let summary = WalkInspector::summary(&walk);
        assert_eq!(summary.tick, 1);
        assert_eq!(summary.trail_samples, 1);
        assert_eq!(summary.selection, None);
        let line = summary.to_string();
        assert!(line.contains("tick=1"));
        assert!(line.contains("selected=-"));
    }
}
