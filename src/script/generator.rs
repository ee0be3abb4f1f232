//! Request-level entry point: outline, script text, pacing and assets in
//! one call.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::persona::PersonaCatalog;

use super::outline::{OutlineBuilder, ScriptOutline};
use super::pacing::{self, PacingBeat, DEFAULT_DURATION_SECS};
use super::render::render;
use super::sanitize::sanitize;

/// Inclusive runtime bounds callers are expected to enforce.
pub const MIN_DURATION_SECS: u32 = 15;
pub const MAX_DURATION_SECS: u32 = 90;

/// A script generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScriptRequest {
    /// Persona slug; unknown values use the default persona.
    pub persona: String,
    pub niche: String,
    pub goal: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
}

impl ScriptRequest {
    pub fn new(persona: impl Into<String>, niche: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            persona: persona.into(),
            niche: niche.into(),
            goal: goal.into(),
            ..Default::default()
        }
    }

    pub fn with_hook(mut self, hook: impl Into<String>) -> Self {
        self.hook = Some(hook.into());
        self
    }

    pub fn with_cta(mut self, cta: impl Into<String>) -> Self {
        self.cta = Some(cta.into());
        self
    }

    pub fn with_duration(mut self, seconds: u32) -> Self {
        self.duration_seconds = Some(seconds);
        self
    }

    /// Runtime to allocate, defaulting to 45 seconds.
    pub fn duration(&self) -> u32 {
        self.duration_seconds.unwrap_or(DEFAULT_DURATION_SECS)
    }

    /// Caller-side validation: niche and goal must be non-blank and the
    /// runtime must fall inside `[min_secs, max_secs]`.
    ///
    /// [`generate_script`] does not call this; it accepts anything.
    pub fn validate(&self, min_secs: u32, max_secs: u32) -> Result<()> {
        if self.niche.trim().is_empty() {
            return Err(Error::empty_field("niche"));
        }
        if self.goal.trim().is_empty() {
            return Err(Error::empty_field("goal"));
        }
        let seconds = self.duration();
        if !(min_secs..=max_secs).contains(&seconds) {
            return Err(Error::DurationOutOfRange {
                seconds,
                min: min_secs,
                max: max_secs,
            });
        }
        Ok(())
    }
}

/// Everything a renderer or voiceover step needs for one script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptResponse {
    pub script: String,
    pub outline: ScriptOutline,
    pub pacing_beats: Vec<PacingBeat>,
    pub supporting_shots: Vec<String>,
    pub cta: String,
    pub delivery_notes: Vec<String>,
    /// Sum of beat durations; may differ from the requested runtime.
    pub total_seconds: u32,
}

/// Generate the outline, flat script, pacing beats and supporting assets
/// for a request. Total over its input: never fails, never panics.
pub fn generate_script(request: &ScriptRequest) -> ScriptResponse {
    let persona = PersonaCatalog::new().lookup(&request.persona);
    let duration = request.duration();

    let outline = OutlineBuilder::new().build_for(
        persona,
        &request.niche,
        &request.goal,
        request.hook.as_deref(),
        request.cta.as_deref(),
    );

    let script = render(&outline);
    let pacing_beats = pacing::allocate(&outline, duration);
    let total_seconds = pacing::total_seconds(&pacing_beats);
    let supporting_shots = persona
        .supporting_shots_for(&request.niche, &request.goal)
        .iter()
        .map(|shot| sanitize(shot))
        .collect();

    if total_seconds != duration {
        debug!(requested = duration, allocated = total_seconds, "Pacing drift from clamping");
    }
    info!(
        persona = persona.key.slug(),
        duration,
        beats = pacing_beats.len(),
        "Script generated"
    );

    ScriptResponse {
        script,
        cta: outline.cta.clone(),
        outline,
        pacing_beats,
        supporting_shots,
        delivery_notes: persona.delivery_notes.iter().map(|s| s.to_string()).collect(),
        total_seconds,
    }
}
