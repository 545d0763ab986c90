//! Per-tick orchestration of the gallery core.
//!
//! One logical tick per display-refresh callback, in a fixed order: input
//! flags are read by the motion controller, the clamped camera position
//! feeds the trail sampler, the ribbon is rebuilt when the sample sequence
//! changed, and the color cycle advances. Picking runs outside this order,
//! on pointer moves or once per tick, because the selection has no ordering
//! dependency on motion or trail state.

pub mod diagnostics;
pub mod walkthrough;

pub use diagnostics::{FrameSummary, WalkInspector};
pub use walkthrough::Walkthrough;
