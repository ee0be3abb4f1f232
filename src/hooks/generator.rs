//! Hook line generation with pattern interrupts, delivery angles and an A/B
//! testing plan.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::persona::{PersonaCatalog, PersonaKey};

use super::vibe::{Platform, Vibe};

/// A hook generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HookRequest {
    /// Persona slug; unknown values use the default persona.
    pub persona: String,
    pub niche: String,
    pub goal: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vibe: Option<Vibe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
}

impl HookRequest {
    pub fn new(persona: impl Into<String>, niche: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            persona: persona.into(),
            niche: niche.into(),
            goal: goal.into(),
            ..Default::default()
        }
    }

    pub fn with_vibe(mut self, vibe: Vibe) -> Self {
        self.vibe = Some(vibe);
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Caller-side validation: niche and goal must be non-blank.
    ///
    /// [`generate_hooks`] does not call this; it accepts anything.
    pub fn validate(&self) -> Result<()> {
        if self.niche.trim().is_empty() {
            return Err(Error::empty_field("niche"));
        }
        if self.goal.trim().is_empty() {
            return Err(Error::empty_field("goal"));
        }
        Ok(())
    }
}

/// How to validate hooks before committing to a full edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestingPlan {
    pub experiments: Vec<String>,
    pub metrics: Vec<String>,
    pub iteration_tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookResponse {
    pub hooks: Vec<String>,
    pub pattern_interrupts: Vec<String>,
    pub delivery_angles: Vec<String>,
    pub testing_plan: TestingPlan,
}

/// Generate hooks, interrupts, delivery angles and a testing plan.
pub fn generate_hooks(request: &HookRequest) -> HookResponse {
    let persona = PersonaCatalog::new().lookup(&request.persona);
    let hooks = hook_lines(request);
    debug!(persona = persona.key.slug(), count = hooks.len(), "Generated hook lines");

    HookResponse {
        testing_plan: testing_plan(&hooks, request.platform),
        hooks,
        pattern_interrupts: persona.pattern_interrupts.iter().map(|s| s.to_string()).collect(),
        delivery_angles: delivery_angles(persona.key, request.vibe, request.platform),
    }
}

/// Persona lines first, then the generic set; each prefixed, vibed,
/// trimmed, and de-duplicated keeping the first occurrence.
pub fn hook_lines(request: &HookRequest) -> Vec<String> {
    let persona = PersonaCatalog::new().lookup(&request.persona);
    let niche = request.niche.as_str();
    let goal = request.goal.as_str();

    let base = [
        format!("Stop scrolling if you're trying to {goal} with {niche}!"),
        format!("You're wasting time on {niche} if you still do this..."),
        format!("POV: You finally {goal} without the usual {niche} stress"),
        format!("No one in {niche} is talking about this {goal} shortcut..."),
        format!("I bet you haven't tried this {niche} play to {goal}."),
        format!("If you care about {goal}, you need to hear this {niche} myth buster."),
        format!("{} in {niche} just got way easier—here's how.", capitalize(goal)),
    ];

    let lines = persona
        .hook_lines
        .iter()
        .map(|line| line(niche, goal))
        .chain(base)
        .map(|line| {
            let prefixed = format!("{}{}", persona.hook_prefix, line);
            let vibed = match request.vibe {
                Some(vibe) => vibe.apply(&prefixed),
                None => prefixed,
            };
            vibed.trim().to_string()
        });

    dedup_preserving_order(lines)
}

/// Production tips for landing the hook on camera.
pub fn delivery_angles(
    persona: PersonaKey,
    vibe: Option<Vibe>,
    platform: Option<Platform>,
) -> Vec<String> {
    let mut angles = vec![
        "Keep the first shot under 1.2 seconds to maximize retention.",
        "Punch keywords with on-beat captions or text overlays.",
        "Plan the hook to be understood without sound—assume auto-captioning.",
    ];

    if matches!(platform, Some(Platform::Tiktok | Platform::Reels)) {
        angles.push("Front-load trending sounds at low volume under the hook.");
    }
    if platform == Some(Platform::Linkedin) {
        angles.push("Anchor the hook in a relatable professional scenario.");
    }
    if vibe == Some(Vibe::Bold) {
        angles.push("Use tight framing and direct eye contact for authority.");
    }
    if vibe == Some(Vibe::Story) {
        angles.push("Layer B-roll that teases the payoff while you narrate.");
    }
    if persona == PersonaKey::Tech {
        angles.push("Pop up UI callouts that highlight the automation or workflow shift.");
    }

    dedup_preserving_order(angles.into_iter().map(str::to_string))
}

/// A/B experiments, metrics and iteration tips for a set of hooks.
/// Empty when there are no hooks to test.
pub fn testing_plan(hooks: &[String], platform: Option<Platform>) -> TestingPlan {
    let (first, second) = match hooks {
        [] => return TestingPlan::default(),
        [first] => (first, None),
        [first, second, ..] => (first, Some(second)),
    };

    let platform_suffix = platform
        .map(|p| format!(" on {}", p))
        .unwrap_or_default();

    let mut experiments = Vec::new();
    if let Some(second) = second {
        experiments.push(format!(
            "A/B test \"{}\" vs \"{}\"{} using identical footage to isolate the hook.",
            first, second, platform_suffix
        ));
    }
    experiments.push(format!(
        "Create a text-post or static carousel version of \"{}\" to validate copy resonance before filming variations.",
        first
    ));
    experiments.push(
        "Swap in a new hook weekly while keeping the body identical to identify fatigue quickly."
            .to_string(),
    );

    TestingPlan {
        experiments,
        metrics: ["3-second hold rate", "First comment sentiment", "Saves vs. views"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        iteration_tips: [
            "Turn the strongest hook into a question to invite duets or stitches.",
            "Test a numbered list variation of the top-performing hook.",
            "Speed up the hook delivery by 10% to see if retention improves.",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn dedup_preserving_order(items: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
