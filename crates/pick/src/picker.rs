use gallery_common::{Camera, ExhibitId};
use glam::Vec2;

use crate::registry::ExhibitRegistry;

/// Collaborator seam for highlight transitions. The scene-graph side (frame
/// emissive glow in the real renderer) implements this; tests use a
/// recording sink.
pub trait HighlightSink {
    fn set_highlight(&mut self, id: ExhibitId, on: bool);
}

/// Tracks which exhibit the pointer is over and drives highlight
/// transitions.
///
/// The selection is an id only; the picker never owns exhibit data. Each
/// `update` produces at most one unhighlight and one highlight call, and
/// repeated hits on the same exhibit produce none.
#[derive(Debug, Default)]
pub struct InteractionPicker {
    selection: Option<ExhibitId>,
}

impl InteractionPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently hovered exhibit, if any.
    pub fn selection(&self) -> Option<ExhibitId> {
        self.selection
    }

    /// Hit-test the pointer and reconcile the highlight state.
    ///
    /// Safe to call on every pointer move and/or once per tick; it has no
    /// ordering dependency on the motion or trail state.
    pub fn update(
        &mut self,
        pointer_ndc: Vec2,
        camera: &Camera,
        registry: &ExhibitRegistry,
        sink: &mut dyn HighlightSink,
    ) -> Option<ExhibitId> {
        let ray = camera.ray_through_ndc(pointer_ndc);
        let hit = registry.raycast(&ray).map(|(id, _)| id);

        match (self.selection, hit) {
            (prev, Some(id)) if prev != Some(id) => {
                if let Some(prev) = prev {
                    sink.set_highlight(prev, false);
                }
                sink.set_highlight(id, true);
                self.selection = Some(id);
                tracing::debug!(?id, "exhibit hovered");
            }
            (Some(prev), None) => {
                sink.set_highlight(prev, false);
                self.selection = None;
                tracing::debug!(id = ?prev, "exhibit hover cleared");
            }
            _ => {}
        }
        self.selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proxy::Aabb;
    use crate::registry::Exhibit;
    use glam::Vec3;

    #[derive(Default)]
    struct RecordingSink {
        calls: Vec<(ExhibitId, bool)>,
    }

    impl HighlightSink for RecordingSink {
        fn set_highlight(&mut self, id: ExhibitId, on: bool) {
            self.calls.push((id, on));
        }
    }

    /// Two exhibits: one straight ahead, one to the right of the camera's
    /// view, each with a frame proxy and an oversized collider.
    fn registry() -> (ExhibitRegistry, ExhibitId, ExhibitId) {
        let mut registry = ExhibitRegistry::new();
        let ahead = Exhibit {
            id: ExhibitId::new(),
            title: "Ahead".into(),
            description: String::new(),
            metadata: String::new(),
        };
        let right = Exhibit {
            id: ExhibitId::new(),
            title: "Right".into(),
            description: String::new(),
            metadata: String::new(),
        };
        let (ahead_id, right_id) = (ahead.id, right.id);
        registry.register(
            ahead,
            [
                Aabb::from_center_half_extents(Vec3::new(0.0, 1.6, 0.0), Vec3::new(1.0, 0.75, 0.1)),
                Aabb::from_center_half_extents(Vec3::new(0.0, 1.6, 0.0), Vec3::new(1.25, 1.0, 0.5)),
            ],
        );
        registry.register(
            right,
            [Aabb::from_center_half_extents(
                Vec3::new(6.0, 1.6, 0.0),
                Vec3::new(1.0, 1.0, 1.0),
            )],
        );
        (registry, ahead_id, right_id)
    }

    fn camera() -> Camera {
        // Default camera at (0, 1.6, 5) looking down -Z: the "Ahead" exhibit
        // sits centered in view.
        Camera::default()
    }

    #[test]
    fn hover_highlights_once() {
        let (registry, ahead, _) = registry();
        let mut picker = InteractionPicker::new();
        let mut sink = RecordingSink::default();

        let hit = picker.update(Vec2::ZERO, &camera(), &registry, &mut sink);
        assert_eq!(hit, Some(ahead));
        assert_eq!(sink.calls, vec![(ahead, true)]);
    }

    #[test]
    fn repeated_hits_emit_nothing() {
        let (registry, _, _) = registry();
        let mut picker = InteractionPicker::new();
        let mut sink = RecordingSink::default();

        picker.update(Vec2::ZERO, &camera(), &registry, &mut sink);
        let before = sink.calls.len();
        for _ in 0..10 {
            picker.update(Vec2::ZERO, &camera(), &registry, &mut sink);
        }
        assert_eq!(sink.calls.len(), before);
    }

    #[test]
    fn switching_exhibits_swaps_highlight_in_one_call_pair() {
        let (registry, ahead, right) = registry();
        let mut picker = InteractionPicker::new();
        let mut sink = RecordingSink::default();
        let mut cam = camera();

        picker.update(Vec2::ZERO, &cam, &registry, &mut sink);
        // Step sideways so the second exhibit sits straight ahead.
        cam.position = Vec3::new(6.0, 1.6, 5.0);
        sink.calls.clear();

        let hit = picker.update(Vec2::ZERO, &cam, &registry, &mut sink);
        assert_eq!(hit, Some(right));
        assert_eq!(sink.calls, vec![(ahead, false), (right, true)]);
    }

    #[test]
    fn miss_clears_selection_once() {
        let (registry, ahead, _) = registry();
        let mut picker = InteractionPicker::new();
        let mut sink = RecordingSink::default();

        picker.update(Vec2::ZERO, &camera(), &registry, &mut sink);
        sink.calls.clear();

        // Pointer at the top of the screen: ray passes over everything.
        let miss = Vec2::new(0.0, 0.95);
        let hit = picker.update(miss, &camera(), &registry, &mut sink);
        assert_eq!(hit, None);
        assert_eq!(sink.calls, vec![(ahead, false)]);

        // A second miss stays silent.
        picker.update(miss, &camera(), &registry, &mut sink);
        assert_eq!(sink.calls.len(), 1);
    }

    #[test]
    fn moving_between_proxies_of_one_exhibit_is_a_noop() {
        let (registry, ahead, _) = registry();
        let mut picker = InteractionPicker::new();
        let mut sink = RecordingSink::default();
        let cam = camera();

        // Center of the frame, then the collider fringe just outside it.
        picker.update(Vec2::ZERO, &cam, &registry, &mut sink);
        picker.update(Vec2::new(0.12, 0.0), &cam, &registry, &mut sink);
        assert_eq!(picker.selection(), Some(ahead));
        assert_eq!(sink.calls, vec![(ahead, true)]);
    }

    #[test]
    fn empty_registry_never_selects() {
        let registry = ExhibitRegistry::new();
        let mut picker = InteractionPicker::new();
        let mut sink = RecordingSink::default();
        assert_eq!(
            picker.update(Vec2::ZERO, &camera(), &registry, &mut sink),
            None
        );
        assert!(sink.calls.is_empty());
    }
}
