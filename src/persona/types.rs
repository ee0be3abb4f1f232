//! Core types for the persona system.
//!
//! A persona is a content voice (fitness coach, beauty bestie, ...) that
//! supplies the tone-specific template lines every script is built from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Template line generator taking `(niche, goal)`.
pub type TemplateFn = fn(&str, &str) -> String;

// ─────────────────────────────────────────────────────────────────
// Persona Key
// ─────────────────────────────────────────────────────────────────

/// The content personas the catalog knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersonaKey {
    /// High-energy fitness coach.
    Fitness,
    /// Beauty expert bestie.
    Beauty,
    /// Operator with receipts (automation / SaaS).
    Tech,
    /// Relatable habit coach.
    Lifestyle,
    /// Strategic creator guide, used for anything unrecognised.
    Default,
}

impl PersonaKey {
    /// Slug used in CLI args, config files and JSON.
    pub fn slug(&self) -> &'static str {
        match self {
            PersonaKey::Fitness => "fitness",
            PersonaKey::Beauty => "beauty",
            PersonaKey::Tech => "tech",
            PersonaKey::Lifestyle => "lifestyle",
            PersonaKey::Default => "default",
        }
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            PersonaKey::Fitness => "Fitness",
            PersonaKey::Beauty => "Beauty",
            PersonaKey::Tech => "Tech",
            PersonaKey::Lifestyle => "Lifestyle",
            PersonaKey::Default => "Default",
        }
    }

    /// All persona keys, content personas first.
    pub fn all() -> &'static [PersonaKey] {
        &[
            PersonaKey::Fitness,
            PersonaKey::Beauty,
            PersonaKey::Tech,
            PersonaKey::Lifestyle,
            PersonaKey::Default,
        ]
    }

    /// Exact, case-sensitive slug match; anything else maps to `Default`.
    ///
    /// Used by catalog lookups. User input goes through [`FromStr`], which
    /// trims and ignores case.
    pub fn from_slug_or_default(s: &str) -> Self {
        PersonaKey::all()
            .iter()
            .find(|key| key.slug() == s)
            .copied()
            .unwrap_or(PersonaKey::Default)
    }
}

impl fmt::Display for PersonaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PersonaKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fitness" => Ok(PersonaKey::Fitness),
            "beauty" => Ok(PersonaKey::Beauty),
            "tech" => Ok(PersonaKey::Tech),
            "lifestyle" => Ok(PersonaKey::Lifestyle),
            "default" => Ok(PersonaKey::Default),
            _ => Err(format!(
                "Unknown persona '{}'. Valid: fitness, beauty, tech, lifestyle, default",
                s
            )),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Persona Config
// ─────────────────────────────────────────────────────────────────

/// Full template set for one persona. Lives in static storage and is never
/// mutated.
pub struct PersonaConfig {
    /// Which persona this config defines.
    pub key: PersonaKey,

    /// Short descriptor of the on-camera voice.
    pub voice: &'static str,

    /// Default hook used when the caller supplies none.
    pub hook: TemplateFn,

    /// Problem / setup line.
    pub pain_point: TemplateFn,

    /// Promise line.
    pub promise: TemplateFn,

    /// Social proof line.
    pub proof: TemplateFn,

    /// Recap line. Only the goal is referenced by the built-in personas.
    pub recap: TemplateFn,

    /// Call-to-action options, first one is the default.
    pub cta: &'static [&'static str],

    /// B-roll suggestions; may contain `{niche}` / `{goal}` placeholders.
    pub supporting_shots: &'static [&'static str],

    /// Delivery notes for the creator, passed through unmodified.
    pub delivery_notes: &'static [&'static str],

    /// Prefix stamped on every generated hook line.
    pub hook_prefix: &'static str,

    /// Persona-specific hook lines offered ahead of the generic ones.
    pub hook_lines: &'static [TemplateFn],

    /// Opening visual pattern interrupts.
    pub pattern_interrupts: &'static [&'static str],
}

impl PersonaConfig {
    /// Default call to action (the first entry).
    pub fn default_cta(&self) -> &'static str {
        self.cta.first().copied().unwrap_or_default()
    }

    /// Supporting shots with `{niche}` and `{goal}` substituted.
    pub fn supporting_shots_for(&self, niche: &str, goal: &str) -> Vec<String> {
        self.supporting_shots
            .iter()
            .map(|shot| apply_placeholders(shot, niche, goal))
            .collect()
    }
}

impl fmt::Debug for PersonaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersonaConfig")
            .field("key", &self.key)
            .field("voice", &self.voice)
            .field("cta", &self.cta)
            .field("supporting_shots", &self.supporting_shots)
            .field("delivery_notes", &self.delivery_notes)
            .finish_non_exhaustive()
    }
}

/// Substitute `{niche}` and `{goal}` placeholders.
pub fn apply_placeholders(template: &str, niche: &str, goal: &str) -> String {
    template.replace("{niche}", niche).replace("{goal}", goal)
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
