//! Key-point templates for the body of a script, one set per goal category.

use super::goal::GoalCategory;

/// Number of key points every category produces.
pub const KEY_POINT_COUNT: usize = 3;

/// Generate the three actionable statements for a goal category.
///
/// `niche` and `goal` are interpolated verbatim.
pub fn generate(category: GoalCategory, niche: &str, goal: &str) -> Vec<String> {
    match category {
        GoalCategory::Conversion => vec![
            format!("Audit your {niche} flow and circle the moment prospects drop before {goal}."),
            "Swap that friction point with a micro-commitment that takes under 30 seconds."
                .to_string(),
            format!("Layer social proof so the path to {goal} feels trusted and safe."),
        ],
        GoalCategory::Engagement => vec![
            format!("Lead with a quick-win {niche} tip the viewer can do in under a minute."),
            "Show your personal proof or story in one sentence to earn attention.".to_string(),
            "Issue a challenge or question so the viewer comments when they try it.".to_string(),
        ],
        GoalCategory::Habit => vec![
            format!("Anchor the {niche} action to something you already do every day."),
            format!("Set a two-minute version so {goal} never feels overwhelming."),
            "Track the win visually so your brain gets a reward each time.".to_string(),
        ],
        GoalCategory::Generic => vec![
            format!("Identify the single lever in {niche} that actually shifts {goal}."),
            "Turn it into a three-step micro action the viewer can follow immediately."
                .to_string(),
            format!(
                "Reveal how to validate progress fast so they stay motivated toward {goal}."
            ),
        ],
    }
}
