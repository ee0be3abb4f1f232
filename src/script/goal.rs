//! Goal classification by fixed keyword sets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse intent behind a script's goal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalCategory {
    /// Sales, clients, revenue.
    Conversion,
    /// Views, followers, audience growth.
    Engagement,
    /// Routines, consistency, productivity.
    Habit,
    /// Anything else.
    Generic,
}

const CONVERSION_KEYWORDS: &[&str] = &["sale", "client", "revenue"];
const ENGAGEMENT_KEYWORDS: &[&str] = &["engagement", "view", "follower", "audience"];
const HABIT_KEYWORDS: &[&str] = &["habit", "routine", "productivity", "consisten"];

/// Classify free-form goal text.
///
/// Matching is a case-insensitive substring test. Categories are checked in
/// the order Conversion, Engagement, Habit and the first hit wins, so
/// "boost sales and engagement" is a conversion goal.
pub fn classify(goal: &str) -> GoalCategory {
    let normalized = goal.to_lowercase();
    let matches = |keywords: &[&str]| keywords.iter().any(|k| normalized.contains(k));

    if matches(CONVERSION_KEYWORDS) {
        GoalCategory::Conversion
    } else if matches(ENGAGEMENT_KEYWORDS) {
        GoalCategory::Engagement
    } else if matches(HABIT_KEYWORDS) {
        GoalCategory::Habit
    } else {
        GoalCategory::Generic
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalCategory::Conversion => write!(f, "conversion"),
            GoalCategory::Engagement => write!(f, "engagement"),
            GoalCategory::Habit => write!(f, "habit"),
            GoalCategory::Generic => write!(f, "generic"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_keywords() {
        assert_eq!(classify("increase client revenue"), GoalCategory::Conversion);
        assert_eq!(classify("More SALES this quarter"), GoalCategory::Conversion);
        assert_eq!(classify("help clients lose weight"), GoalCategory::Conversion);
    }

    #[test]
    fn test_engagement_keywords() {
        assert_eq!(classify("grow my audience"), GoalCategory::Engagement);
        assert_eq!(classify("get more views"), GoalCategory::Engagement);
        assert_eq!(classify("10k Followers"), GoalCategory::Engagement);
        assert_eq!(classify("boost engagement"), GoalCategory::Engagement);
    }

    #[test]
    fn test_habit_keywords() {
        assert_eq!(classify("build a morning routine"), GoalCategory::Habit);
        assert_eq!(classify("stay consistent"), GoalCategory::Habit);
        assert_eq!(classify("Consistency wins"), GoalCategory::Habit);
        assert_eq!(classify("deep work productivity"), GoalCategory::Habit);
        assert_eq!(classify("kick a bad habit"), GoalCategory::Habit);
    }

    #[test]
    fn test_check_order() {
        assert_eq!(classify("boost sales and engagement"), GoalCategory::Conversion);
        assert_eq!(classify("increase sales engagement"), GoalCategory::Conversion);
        assert_eq!(classify("audience habit"), GoalCategory::Engagement);
    }

    #[test]
    fn test_generic_fallback() {
        assert_eq!(classify("feel better"), GoalCategory::Generic);
        assert_eq!(classify(""), GoalCategory::Generic);
    }

    #[test]
    fn test_substring_not_word_match() {
        // "preview" contains "view"
        assert_eq!(classify("ship a preview build"), GoalCategory::Engagement);
    }
}
