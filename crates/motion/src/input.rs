use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Navigation mode. Selected explicitly; each variant is a complete motion
/// policy rather than a patched update loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NavMode {
    /// Camera motion is delegated to the external orbit-control collaborator.
    #[default]
    Orbit,
    /// Keyboard walk + pointer-drag look.
    FirstPerson,
    /// Fixed world-axis steps ignoring camera orientation, for debugging.
    DirectDebug,
}

/// A directional or modifier key the gallery understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKey {
    Forward,
    Backward,
    Left,
    Right,
    Boost,
    Slow,
}

/// A discrete event from the input collaborator, already mapped from raw
/// key/pointer events by the embedding layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Press(MoveKey),
    Release(MoveKey),
    PointerDown,
    PointerUp,
    /// Pointer moved by `delta` (screen-space units) while at `ndc`.
    PointerMove { ndc: Vec2, delta: Vec2 },
    ToggleMode,
}

/// Single-writer record of the current input flags.
///
/// Mutated asynchronously by input events, read once per tick by the motion
/// controller. Pointer-drag deltas are accumulated here and drained by the
/// controller so look input survives multiple events per tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub boost: bool,
    pub slow: bool,
    pub mode: NavMode,
    pub pointer_down: bool,
    pub pointer_ndc: Vec2,
    drag_accum: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any directional flag is held.
    pub fn any_directional(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Whether pointer-drag look is engaged.
    pub fn drag_engaged(&self) -> bool {
        self.pointer_down && self.mode == NavMode::FirstPerson
    }

    /// Apply a discrete input event. Only flags and accumulators change.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Press(key) => self.set_key(key, true),
            InputEvent::Release(key) => self.set_key(key, false),
            InputEvent::PointerDown => self.pointer_down = true,
            InputEvent::PointerUp => self.pointer_down = false,
            InputEvent::PointerMove { ndc, delta } => {
                self.pointer_ndc = ndc;
                if self.drag_engaged() {
                    self.drag_accum += delta;
                }
            }
            InputEvent::ToggleMode => {
                self.mode = match self.mode {
                    NavMode::Orbit => NavMode::FirstPerson,
                    NavMode::FirstPerson => NavMode::Orbit,
                    NavMode::DirectDebug => NavMode::DirectDebug,
                };
                tracing::debug!(mode = ?self.mode, "view mode toggled");
            }
        }
    }

    fn set_key(&mut self, key: MoveKey, held: bool) {
        match key {
            MoveKey::Forward => self.forward = held,
            MoveKey::Backward => self.backward = held,
            MoveKey::Left => self.left = held,
            MoveKey::Right => self.right = held,
            MoveKey::Boost => self.boost = held,
            MoveKey::Slow => self.slow = held,
        }
    }

    /// Take the pointer-drag delta accumulated since the last tick.
    pub fn take_drag(&mut self) -> Vec2 {
        std::mem::take(&mut self.drag_accum)
    }
}
