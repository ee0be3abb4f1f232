//! Bundled persona catalog: static template sets for each persona key.

use serde::Serialize;

use super::types::{PersonaConfig, PersonaKey};

/// Read-only catalog of the bundled personas.
///
/// Every entry lives in static storage, so lookups are free and the catalog
/// can be shared across threads without coordination.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonaCatalog;

impl PersonaCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Get the template set for a persona key.
    pub fn get(&self, key: PersonaKey) -> &'static PersonaConfig {
        match key {
            PersonaKey::Fitness => &FITNESS,
            PersonaKey::Beauty => &BEAUTY,
            PersonaKey::Tech => &TECH,
            PersonaKey::Lifestyle => &LIFESTYLE,
            PersonaKey::Default => &DEFAULT,
        }
    }

    /// Look up a persona by its exact slug. Unknown, empty or differently
    /// cased slugs resolve to the `default` persona.
    pub fn lookup(&self, slug: &str) -> &'static PersonaConfig {
        self.get(PersonaKey::from_slug_or_default(slug))
    }

    /// List all bundled personas with their voice descriptors.
    pub fn list_available(&self) -> Vec<PersonaListing> {
        PersonaKey::all()
            .iter()
            .map(|key| PersonaListing {
                key: *key,
                voice: self.get(*key).voice,
            })
            .collect()
    }
}

/// Summary of an available persona.
#[derive(Debug, Clone, Serialize)]
pub struct PersonaListing {
    pub key: PersonaKey,
    pub voice: &'static str,
}

// ─────────────────────────────────────────────────────────────────
// Bundled personas
// ─────────────────────────────────────────────────────────────────

static FITNESS: PersonaConfig = PersonaConfig {
    key: PersonaKey::Fitness,
    voice: "high-energy coach",
    hook: |niche, goal| format!("You can {goal} without living in the gym—try this {niche} tweak."),
    pain_point: |niche, goal| {
        format!("You're grinding through {niche}, but {goal} still feels stuck because there's no structure.")
    },
    promise: |niche, goal| {
        format!("Here's the three-part {niche} stack my clients use to {goal} and stay consistent.")
    },
    proof: |_niche, goal| {
        format!("We run this play with busy clients and they hit {goal} in under four weeks.")
    },
    recap: |_niche, goal| {
        format!("Structure, simple execution, quick feedback—that's how you lock {goal}.")
    },
    cta: &["Follow for more bite-size coaching—comment \"TRAIN\" and I'll send you the template."],
    supporting_shots: &[
        "Dynamic warm-up footage while calling out the framework.",
        "Close-up of a timer or rep counter overlaying each step.",
        "Over-the-shoulder shot updating progress inside a training app.",
    ],
    delivery_notes: &[
        "Start mid-movement so the hook lands over action.",
        "Keep energy high with crisp transitions between each step.",
        "Layer subtle whoosh SFX to emphasize the new point.",
    ],
    hook_prefix: "Coach tip: ",
    hook_lines: &[
        |niche, goal| format!("I used this {niche} tweak to help clients {goal} in 21 days."),
        |niche, goal| format!("{goal} isn't about harder workouts—it's the {niche} switch you skip."),
        |niche, goal| format!("You're burning out chasing {goal}; try this {niche} reset instead."),
    ],
    pattern_interrupts: &[
        "Start mid-rep, drop the weight, and lean into the camera for the hook.",
        "Show a dramatic before/after split while the hook lands.",
        "Snap to a whiteboard or timer just as you deliver the core line.",
    ],
};

static BEAUTY: PersonaConfig = PersonaConfig {
    key: PersonaKey::Beauty,
    voice: "beauty expert bestie",
    hook: |niche, goal| format!("This {niche} swap finally gave me {goal}—here's why."),
    pain_point: |niche, goal| {
        format!("Your {niche} routine is overflowing with steps, so {goal} never shows up.")
    },
    promise: |_niche, goal| {
        format!("Let me show you the simplified routine that keeps {goal} consistent.")
    },
    proof: |_niche, goal| {
        format!("I tested this across skin types and it's the only routine that delivered {goal}.")
    },
    recap: |_niche, goal| format!("Prep, active treatment, lock it in—that's how {goal} stays."),
    cta: &["Follow for more beauty lab notes—comment \"GLOW\" for the product list."],
    supporting_shots: &[
        "Macro shot of product texture under the hook.",
        "Split-screen showing before/after results while describing the shift.",
        "Application close-up synced to the three-step breakdown.",
    ],
    delivery_notes: &[
        "Stay conversational with a smile or soft expression.",
        "Use gentle zooms or pans to keep the visuals premium.",
        "Punch key claims with on-screen ingredient callouts.",
    ],
    hook_prefix: "Beauty pro here: ",
    hook_lines: &[
        |niche, goal| format!("This {niche} routine made my {goal} results explode."),
        |niche, goal| format!("I tested every {niche} trend—this is the only one that {goal}."),
        |niche, goal| format!("Your {niche} shelf is missing the one step that unlocks {goal}."),
    ],
    pattern_interrupts: &[
        "Begin with a bare face, snap to glam as you hit the first sentence.",
        "Hold up the product blurred, then focus it right on the claim.",
        "Use a macro shot of texture while delivering the controversy.",
    ],
};

static TECH: PersonaConfig = PersonaConfig {
    key: PersonaKey::Tech,
    voice: "operator with receipts",
    hook: |niche, goal| {
        format!("You're wasting hours—this {niche} automation gets you {goal} in half the time.")
    },
    pain_point: |niche, goal| {
        format!("Manually doing {niche} buries you in busywork so {goal} never scales.")
    },
    promise: |_niche, goal| {
        format!("I'll map the automation I built that unlocked {goal} for our team.")
    },
    proof: |_niche, goal| format!("We shipped it last sprint and {goal} jumped 40% overnight."),
    recap: |_niche, goal| {
        format!("Trigger, automate, review the metric—that's the loop for {goal}.")
    },
    cta: &["Smash follow for no-code playbooks—DM \"FLOW\" for the SOP."],
    supporting_shots: &[
        "Screen recording of the automation firing with cursor highlights.",
        "Workflow diagram overlay while listing the sequence.",
        "Analytics dashboard showing the lift in {goal}.",
    ],
    delivery_notes: &[
        "Use callouts to highlight UI elements the moment you mention them.",
        "Keep pacing punchy with jump cuts on each new step.",
        "Zoom on the metric spike to anchor the payoff visually.",
    ],
    hook_prefix: "Tech hot take: ",
    hook_lines: &[
        |niche, goal| format!("{goal} without code? This {niche} automation is the cheat code."),
        |niche, goal| format!("I shipped {goal} in a weekend using this {niche} workflow."),
        |niche, goal| format!("If you're still doing {niche} manually, you're losing {goal}."),
    ],
    pattern_interrupts: &[
        "Start with your screen glitching, then reveal the streamlined workflow.",
        "Flash rapid cuts of the old process before you announce the new one.",
        "Overlay big bold text while you cold-open with the hot take.",
    ],
};

static LIFESTYLE: PersonaConfig = PersonaConfig {
    key: PersonaKey::Lifestyle,
    voice: "relatable habit coach",
    hook: |niche, goal| format!("If you're trying to {goal}, this {niche} tweak changes everything."),
    pain_point: |niche, goal| {
        format!("Your {niche} routine swings between all-in or nothing, so {goal} keeps slipping.")
    },
    promise: |_niche, goal| format!("Here's my three-beat rhythm that keeps {goal} effortless."),
    proof: |_niche, goal| {
        format!("I teach this to busy creatives and it keeps them aligned with {goal}.")
    },
    recap: |_niche, goal| {
        format!("Anchor it, simplify it, celebrate it—that's how {goal} sticks.")
    },
    cta: &["Follow for more habit stacking—comment \"FLOW\" for the checklist."],
    supporting_shots: &[
        "Morning routine snippet with natural light under the hook.",
        "Close-up of planner or checklist when the framework is explained.",
        "Evening wind-down shot to reinforce the payoff.",
    ],
    delivery_notes: &[
        "Keep tone warm and slightly playful for relatability.",
        "Use gentle handheld movement for authenticity.",
        "Layer soft background music around -18 LUFS to support but not distract.",
    ],
    hook_prefix: "Real talk: ",
    hook_lines: &[
        |niche, goal| format!("{goal} finally clicked when I shifted this one {niche} habit."),
        |niche, goal| {
            format!("Here's the five-minute {niche} reset that keeps me on track for {goal}.")
        },
        |niche, goal| {
            format!("This is your sign to stop overcomplicating {niche} and start {goal}.")
        },
    ],
    pattern_interrupts: &[
        "Cold open with the mistake in action, then freeze-frame for the hook.",
        "Hard cut from chaos to calm as you explain the framework.",
        "Open a journal or checklist right as you share the first tip.",
    ],
};

static DEFAULT: PersonaConfig = PersonaConfig {
    key: PersonaKey::Default,
    voice: "strategic creator guide",
    hook: |niche, goal| format!("Trying to {goal}? This {niche} play is the shortcut."),
    pain_point: |niche, goal| {
        format!("You're juggling a dozen moving parts in {niche}, so {goal} keeps slipping.")
    },
    promise: |_niche, goal| {
        format!("Let me give you the simple blueprint that makes {goal} predictable.")
    },
    proof: |_niche, goal| {
        format!("We've run this with dozens of creators and it consistently drives {goal}.")
    },
    recap: |_niche, goal| {
        format!("Clarify, deliver, prove it—that's the loop to secure {goal}.")
    },
    cta: &["Follow for more viral workflow breakdowns—drop \"PLAY\" for the cheatsheet."],
    supporting_shots: &[
        "Fast zoom onto a sticky note or bold text as the hook lands.",
        "Screen recording or slides while outlining the framework.",
        "Direct-to-camera close for the closing promise and CTA.",
    ],
    delivery_notes: &[
        "Punch key phrases with gestures or text pops.",
        "Trim pauses longer than half a second for pace.",
        "Keep captions tight—no more than six words per line.",
    ],
    hook_prefix: "",
    hook_lines: &[
        |niche, goal| format!("{goal} is easier than you think—start with this {niche} move."),
        |niche, goal| format!("The fastest way to {goal}? Rethink your {niche} in 30 seconds."),
        |niche, goal| format!("Everyone misses this basic {niche} fix that unlocks {goal}."),
    ],
    pattern_interrupts: &[
        "Interrupt the scroll with a quick zoom and snap when you deliver the first line.",
        "Cut to an over-the-shoulder angle exactly on the key phrase.",
        "Use on-screen captions that reveal each word as you speak it.",
    ],
};
