//! Pointer-ray hit testing against registered exhibits and the
//! single-selection highlight state machine.
//!
//! # Invariants
//! - The proxy→exhibit mapping is fixed after registration.
//! - At most one exhibit is selected; at most one highlight and one
//!   unhighlight call fire per picker update.
//! - The selection holds an id only; exhibit data stays in the registry.

pub mod picker;
pub mod proxy;
pub mod registry;

pub use picker::{HighlightSink, InteractionPicker};
pub use proxy::{Aabb, ProxyId};
pub use registry::{Exhibit, ExhibitRegistry};
