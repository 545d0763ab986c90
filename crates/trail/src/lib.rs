//! Light-trail core: adaptive anchor sampling, a fixed-capacity tapering
//! ribbon mesh, and palette color cycling.
//!
//! # Invariants
//! - The sample history never exceeds capacity + 1 entries.
//! - The ribbon buffer is allocated once and mutated in place; only the
//!   first `segments * 6` vertices are meaningful on a given tick.
//! - No non-finite value is ever written into the vertex buffer.

pub mod color;
pub mod ribbon;
pub mod sampler;

pub use color::{ColorCycler, Palette};
pub use ribbon::RibbonBuffer;
pub use sampler::{Sample, TrailSampler};
