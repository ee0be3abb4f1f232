//! Tonal vibes and target platforms for hook lines.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static STOP_SCROLLING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)stop scrolling").expect("valid regex"));

/// Tonal direction applied on top of a hook line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vibe {
    Bold,
    Friendly,
    Urgent,
    Story,
    Curious,
}

impl Vibe {
    pub fn slug(&self) -> &'static str {
        match self {
            Vibe::Bold => "bold",
            Vibe::Friendly => "friendly",
            Vibe::Urgent => "urgent",
            Vibe::Story => "story",
            Vibe::Curious => "curious",
        }
    }

    pub fn all() -> &'static [Vibe] {
        &[Vibe::Bold, Vibe::Friendly, Vibe::Urgent, Vibe::Story, Vibe::Curious]
    }

    /// Rewrite a hook line in this vibe.
    ///
    /// Rewrites that target a specific phrase or trailing punctuation leave
    /// lines without it untouched.
    pub fn apply(&self, hook: &str) -> String {
        match self {
            Vibe::Bold => format!("🔥 {}", hook),
            Vibe::Friendly => STOP_SCROLLING_RE
                .replace(hook, "Hey friend, quick thing")
                .into_owned(),
            Vibe::Urgent => match hook.strip_suffix('!') {
                Some(stem) => format!("{} — do this now!", stem),
                None => hook.to_string(),
            },
            Vibe::Story => format!("Story time: {}", hook),
            Vibe::Curious => match hook.strip_suffix('.') {
                Some(stem) => format!("{}? Guess why.", stem),
                None => hook.to_string(),
            },
        }
    }
}

impl fmt::Display for Vibe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for Vibe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Vibe::all()
            .iter()
            .find(|v| v.slug().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("Unknown vibe '{}'. Valid: bold, friendly, urgent, story, curious", s))
    }
}

/// Platform a hook is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Tiktok,
    Reels,
    Shorts,
    Linkedin,
    Youtube,
}

impl Platform {
    pub fn slug(&self) -> &'static str {
        match self {
            Platform::Tiktok => "tiktok",
            Platform::Reels => "reels",
            Platform::Shorts => "shorts",
            Platform::Linkedin => "linkedin",
            Platform::Youtube => "youtube",
        }
    }

    pub fn all() -> &'static [Platform] {
        &[
            Platform::Tiktok,
            Platform::Reels,
            Platform::Shorts,
            Platform::Linkedin,
            Platform::Youtube,
        ]
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::all()
            .iter()
            .find(|p| p.slug().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| {
                format!("Unknown platform '{}'. Valid: tiktok, reels, shorts, linkedin, youtube", s)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_and_story_prefix() {
        assert_eq!(Vibe::Bold.apply("Try this."), "🔥 Try this.");
        assert_eq!(Vibe::Story.apply("Try this."), "Story time: Try this.");
    }

    #[test]
    fn test_friendly_replaces_first_match_case_insensitive() {
        assert_eq!(
            Vibe::Friendly.apply("Coach tip: STOP SCROLLING if you lift!"),
            "Coach tip: Hey friend, quick thing if you lift!"
        );
        assert_eq!(
            Vibe::Friendly.apply("stop scrolling, stop scrolling"),
            "Hey friend, quick thing, stop scrolling"
        );
        assert_eq!(Vibe::Friendly.apply("No match here"), "No match here");
    }

    #[test]
    fn test_urgent_only_rewrites_trailing_bang() {
        assert_eq!(Vibe::Urgent.apply("Move now!"), "Move now — do this now!");
        assert_eq!(Vibe::Urgent.apply("Wow! calm"), "Wow! calm");
    }

    #[test]
    fn test_curious_only_rewrites_trailing_period() {
        assert_eq!(Vibe::Curious.apply("It works."), "It works? Guess why.");
        assert_eq!(Vibe::Curious.apply("It works..."), "It works..? Guess why.");
        assert_eq!(Vibe::Curious.apply("It works"), "It works");
    }

    #[test]
    fn test_parse() {
        assert_eq!("Bold".parse::<Vibe>().unwrap(), Vibe::Bold);
        assert!("loud".parse::<Vibe>().is_err());
        assert_eq!("LinkedIn".parse::<Platform>().unwrap(), Platform::Linkedin);
        assert!("myspace".parse::<Platform>().is_err());
    }
}
