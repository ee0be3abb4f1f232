//! UGC Scripter
//!
//! Deterministic short-form video scripting: persona templates, goal
//! classification, outline building, beat pacing and hook drafting.
//!
//! ```
//! use ugc_scripter::script::{generate_script, ScriptRequest};
//!
//! let request = ScriptRequest::new("fitness", "fat loss", "help clients lose weight");
//! let response = generate_script(&request);
//! assert_eq!(response.pacing_beats.first().map(|b| b.section.as_str()), Some("Hook"));
//! ```

pub mod config;
pub mod error;
pub mod hooks;
pub mod logging;
pub mod persona;
pub mod script;
pub mod timecode;
pub mod version;

pub use error::{Error, ErrorCode, Result};
