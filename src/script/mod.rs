//! Script outline and pacing.
//!
//! Pipeline for one request:
//! 1. [`goal::classify`] picks a goal category
//! 2. [`key_points::generate`] writes the body points for that category
//! 3. [`OutlineBuilder`] merges them with persona templates and overrides
//! 4. [`pacing::allocate`] and [`render::render`] consume the outline
//!
//! Everything here is pure and synchronous.

pub mod generator;
pub mod goal;
pub mod key_points;
pub mod outline;
pub mod pacing;
pub mod render;
pub mod sanitize;

pub use generator::{
    generate_script, ScriptRequest, ScriptResponse, MAX_DURATION_SECS, MIN_DURATION_SECS,
};
pub use goal::{classify, GoalCategory};
pub use outline::{OutlineBuilder, ScriptOutline};
pub use pacing::{allocate, total_seconds, PacingBeat, DEFAULT_DURATION_SECS};
pub use render::render;
pub use sanitize::sanitize;
