//! Shared types for the gallery core: exhibit identity, the walk camera,
//! and the configuration record.
//!
//! # Invariants
//! - All core operations are total over their constrained domains; fallible
//!   validation lives only at configuration time.
//! - Colors are linear-RGB `Vec3`.

pub mod camera;
pub mod config;
pub mod types;

pub use camera::{Camera, Ray};
pub use config::{ConfigError, GalleryConfig};
pub use types::ExhibitId;
