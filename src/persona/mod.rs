//! Persona system: bundled content voices for script generation.
//!
//! Each script is written in one persona's voice (fitness coach, beauty
//! bestie, tech operator, lifestyle habit coach, or the default creator
//! guide). The persona supplies hook, problem, promise, proof and recap
//! templates plus CTA options, b-roll ideas and delivery notes.

pub mod registry;
pub mod types;

pub use registry::{PersonaCatalog, PersonaListing};
pub use types::{apply_placeholders, PersonaConfig, PersonaKey, TemplateFn};
