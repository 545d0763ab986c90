//! Motion core: discrete input state, the room boundary clamp, and the
//! per-tick motion controller.
//!
//! # Invariants
//! - Input handlers only set flags on `InputState`; they never touch camera
//!   or render state. The controller reads the state once per tick.
//! - Every output position passes through the boundary clamp.
//! - Navigation mode is an explicit enum, selected once per toggle, never a
//!   swapped-out update routine.

pub mod bounds;
pub mod controller;
pub mod input;

pub use bounds::RoomBounds;
pub use controller::MotionController;
pub use input::{InputEvent, InputState, MoveKey, NavMode};
