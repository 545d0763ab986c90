//! Renderer-agnostic view interface.
//!
//! The gallery core never rasterizes; a view reads runtime state (vertex
//! buffers, draw ranges, colors, selection) and produces output. The debug
//! text backend here is the reference consumer, useful for CLI output,
//! logging, and testing the interface.

use gallery_runtime::{WalkInspector, Walkthrough};

/// View interface. All render backends implement this.
///
/// A view reads runtime state and produces output. It never mutates the
/// runtime — core state is runtime-owned.
pub trait GalleryView {
    /// The output type produced by this view.
    type Output;

    /// Render one frame from the current runtime state.
    fn render(&self, walk: &Walkthrough) -> Self::Output;
}

/// Debug text view — stand-in for a real scene-graph backend.
///
/// Produces a human-readable description of the frame: camera, trail draw
/// range, current color, and selection.
#[derive(Debug, Default)]
pub struct DebugTextView;

impl DebugTextView {
    pub fn new() -> Self {
        Self
    }
}

impl GalleryView for DebugTextView {
    type Output = String;

    fn render(&self, walk: &Walkthrough) -> String {
        let mut out = String::new();
        out.push_str(&format!("=== Gallery (tick={}) ===\n", walk.tick_count()));
        out.push_str(&WalkInspector::position_display(walk));
        out.push('\n');

        let ribbon = walk.ribbon();
        let c = walk.current_color();
        out.push_str(&format!(
            "Trail: {} segments, {} vertices drawn of {} capacity\n",
            ribbon.segments(),
            ribbon.draw_vertex_count(),
            ribbon.capacity() * 6,
        ));
        out.push_str(&format!(
            "Color: ({:.3}, {:.3}, {:.3})\n",
            c.x, c.y, c.z
        ));

        match walk.selection().and_then(|id| walk.registry().exhibit(id)) {
            Some(exhibit) => {
                out.push_str(&format!(
                    "Selected: {} — {}\n",
                    exhibit.title, exhibit.metadata
                ));
            }
            None => out.push_str("Selected: none\n"),
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_common::{ExhibitId, GalleryConfig};
    use gallery_pick::{Aabb, Exhibit, HighlightSink};
    use glam::{Vec2, Vec3};

    struct NullSink;

    impl HighlightSink for NullSink {
        fn set_highlight(&mut self, _id: ExhibitId, _on: bool) {}
    }

    #[test]
    fn debug_view_fresh_runtime() {
        let walk = Walkthrough::new(GalleryConfig::default(), 0).unwrap();
        let out = DebugTextView::new().render(&walk);
        assert!(out.contains("tick=0"));
        assert!(out.contains("Position: 0.00, 1.60, 5.00"));
        assert!(out.contains("0 segments"));
        assert!(out.contains("Selected: none"));
    }

    #[test]
    fn debug_view_shows_selection_title() {
        let mut walk = Walkthrough::new(GalleryConfig::default(), 0).unwrap();
        walk.register_exhibit(
            Exhibit {
                id: ExhibitId::new(),
                title: "Urban Night".into(),
                description: "City lights after rain.".into(),
                metadata: "f/2.8 | 1/15s | ISO 800".into(),
            },
            [Aabb::from_center_half_extents(
                Vec3::new(0.0, 1.6, 0.0),
                Vec3::new(1.0, 1.0, 0.5),
            )],
        );
        walk.pick_at(Vec2::ZERO, &mut NullSink);
        let out = DebugTextView::new().render(&walk);
        assert!(out.contains("Selected: Urban Night"));
        assert!(out.contains("ISO 800"));
    }

    #[test]
    fn debug_view_reports_trail_growth() {
        let mut walk = Walkthrough::new(GalleryConfig::default(), 0).unwrap();
        for i in 0..30 {
            walk.tick(1.0 / 60.0, i as f64 * 1000.0 / 60.0);
        }
        let out = DebugTextView::new().render(&walk);
        assert!(out.contains("tick=30"));
        let segments = walk.ribbon().segments();
        assert!(segments > 0);
        assert!(out.contains(&format!("{segments} segments")));
    }
}
