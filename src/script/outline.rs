//! Script outline assembly.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::persona::{PersonaCatalog, PersonaConfig};

use super::goal::classify;
use super::key_points;
use super::sanitize::sanitize;

/// Structured, not-yet-timed content of a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptOutline {
    pub hook: String,
    pub setup: String,
    pub promise: String,
    pub key_points: Vec<String>,
    pub proof: String,
    pub recap: String,
    pub cta: String,
}

/// Composes persona templates, key points and caller overrides into a
/// [`ScriptOutline`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineBuilder {
    catalog: PersonaCatalog,
}

impl OutlineBuilder {
    pub fn new() -> Self {
        Self {
            catalog: PersonaCatalog::new(),
        }
    }

    /// Build an outline for the persona identified by `persona_slug`.
    ///
    /// Unknown slugs use the default persona. Never fails: empty niche or
    /// goal simply interpolate empty strings.
    pub fn build(
        &self,
        persona_slug: &str,
        niche: &str,
        goal: &str,
        hook: Option<&str>,
        cta_override: Option<&str>,
    ) -> ScriptOutline {
        self.build_for(self.catalog.lookup(persona_slug), niche, goal, hook, cta_override)
    }

    /// Build an outline for an already resolved persona.
    pub fn build_for(
        &self,
        persona: &PersonaConfig,
        niche: &str,
        goal: &str,
        hook: Option<&str>,
        cta_override: Option<&str>,
    ) -> ScriptOutline {
        let hook = match hook.map(sanitize).filter(|h| !h.is_empty()) {
            Some(supplied) => supplied,
            None => sanitize(&(persona.hook)(niche, goal)),
        };
        let cta = sanitize(cta_override.unwrap_or_else(|| persona.default_cta()));

        let category = classify(goal);
        debug!(persona = persona.key.slug(), %category, "Classified goal");

        let key_points = key_points::generate(category, niche, goal)
            .iter()
            .map(|point| sanitize(point))
            .collect();

        ScriptOutline {
            hook,
            setup: sanitize(&(persona.pain_point)(niche, goal)),
            promise: sanitize(&(persona.promise)(niche, goal)),
            key_points,
            proof: sanitize(&(persona.proof)(niche, goal)),
            recap: sanitize(&(persona.recap)(niche, goal)),
            cta,
        }
    }
}
