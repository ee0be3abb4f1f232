//! Pacing allocation: splits a runtime into timed beats.
//!
//! Each fixed beat gets a fixed share of the runtime clamped into its own
//! window, key points share what is left evenly, and the CTA absorbs the
//! remainder within its window. The clamps mean the beat total can drift
//! away from the requested runtime (short runtimes with many points
//! overshoot, long runtimes undershoot). That drift is kept as-is; callers
//! can read it off [`total_seconds`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::outline::ScriptOutline;

/// One named, timed segment of a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacingBeat {
    pub section: String,
    pub seconds: u32,
    pub notes: String,
}

impl PacingBeat {
    fn new(section: impl Into<String>, seconds: u32, notes: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            seconds,
            notes: notes.into(),
        }
    }
}

/// Inclusive `[min, max]` window for a beat, plus its share of the runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeatWindow {
    pub share: f64,
    pub min: u32,
    pub max: u32,
}

impl BeatWindow {
    const fn new(share: f64, min: u32, max: u32) -> Self {
        Self { share, min, max }
    }

    fn seed(&self, duration: u32) -> u32 {
        let raw = (f64::from(duration) * self.share).round() as i64;
        clamp_seconds(raw, self.min, self.max)
    }
}

pub const HOOK_WINDOW: BeatWindow = BeatWindow::new(0.16, 3, 6);
pub const PROBLEM_WINDOW: BeatWindow = BeatWindow::new(0.12, 3, 6);
pub const PROMISE_WINDOW: BeatWindow = BeatWindow::new(0.10, 3, 5);
pub const PROOF_WINDOW: BeatWindow = BeatWindow::new(0.12, 3, 6);
pub const RECAP_WINDOW: BeatWindow = BeatWindow::new(0.08, 2, 4);

/// Per-key-point window.
pub const POINT_MIN_SECS: u32 = 3;
pub const POINT_MAX_SECS: u32 = 8;

/// Floor for the time pool shared by key points.
pub const POINT_POOL_FLOOR_SECS: i64 = 6;

/// Seconds held back for the CTA when sizing the key-point pool.
pub const CTA_RESERVE_SECS: i64 = 3;

pub const CTA_MIN_SECS: u32 = 2;
pub const CTA_MAX_SECS: u32 = 6;

/// Runtime used when the caller does not specify one.
pub const DEFAULT_DURATION_SECS: u32 = 45;

const HOOK_NOTES: &str = "Cold open—no intro bumper, land the hook before any title card.";

/// Allocate beats for an outline over `duration` seconds.
///
/// Produces `6 + key_points.len()` beats: Hook, Problem, Promise,
/// `Point 1..N`, Proof, Recap, CTA.
pub fn allocate(outline: &ScriptOutline, duration: u32) -> Vec<PacingBeat> {
    let hook_secs = HOOK_WINDOW.seed(duration);
    let problem_secs = PROBLEM_WINDOW.seed(duration);
    let promise_secs = PROMISE_WINDOW.seed(duration);
    let proof_secs = PROOF_WINDOW.seed(duration);
    let recap_secs = RECAP_WINDOW.seed(duration);

    let fixed = i64::from(hook_secs + problem_secs + promise_secs + proof_secs + recap_secs);
    let point_pool = (i64::from(duration) - fixed - CTA_RESERVE_SECS).max(POINT_POOL_FLOOR_SECS);
    let point_count = outline.key_points.len().max(1) as i64;
    let per_point = clamp_seconds(point_pool / point_count, POINT_MIN_SECS, POINT_MAX_SECS);

    let mut beats = Vec::with_capacity(outline.key_points.len() + 6);
    beats.push(PacingBeat::new("Hook", hook_secs, HOOK_NOTES));
    beats.push(PacingBeat::new("Problem", problem_secs, outline.setup.as_str()));
    beats.push(PacingBeat::new("Promise", promise_secs, outline.promise.as_str()));
    for (index, point) in outline.key_points.iter().enumerate() {
        beats.push(PacingBeat::new(format!("Point {}", index + 1), per_point, point.as_str()));
    }
    beats.push(PacingBeat::new("Proof", proof_secs, outline.proof.as_str()));
    beats.push(PacingBeat::new("Recap", recap_secs, outline.recap.as_str()));

    let before_cta = i64::from(total_seconds(&beats));
    let cta_secs = clamp_seconds(i64::from(duration) - before_cta, CTA_MIN_SECS, CTA_MAX_SECS);
    beats.push(PacingBeat::new("CTA", cta_secs, outline.cta.as_str()));

    debug!(
        duration,
        per_point,
        points = outline.key_points.len(),
        total = total_seconds(&beats),
        "Allocated pacing beats"
    );

    beats
}

/// Sum of all beat durations.
pub fn total_seconds(beats: &[PacingBeat]) -> u32 {
    beats.iter().map(|beat| beat.seconds).sum()
}

fn clamp_seconds(value: i64, min: u32, max: u32) -> u32 {
    value.clamp(i64::from(min), i64::from(max)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outline_with_points(n: usize) -> ScriptOutline {
        ScriptOutline {
            hook: "hook".into(),
            setup: "setup".into(),
            promise: "promise".into(),
            key_points: (1..=n).map(|i| format!("point {}", i)).collect(),
            proof: "proof".into(),
            recap: "recap".into(),
            cta: "cta".into(),
        }
    }

    fn seconds_of(beats: &[PacingBeat], section: &str) -> u32 {
        beats
            .iter()
            .find(|b| b.section == section)
            .map(|b| b.seconds)
            .unwrap()
    }

    #[test]
    fn test_default_runtime_three_points() {
        let beats = allocate(&outline_with_points(3), 45);
        let sections: Vec<&str> = beats.iter().map(|b| b.section.as_str()).collect();
        assert_eq!(
            sections,
            ["Hook", "Problem", "Promise", "Point 1", "Point 2", "Point 3", "Proof", "Recap", "CTA"]
        );
        let seconds: Vec<u32> = beats.iter().map(|b| b.seconds).collect();
        assert_eq!(seconds, [6, 5, 5, 5, 5, 5, 5, 4, 5]);
        assert_eq!(total_seconds(&beats), 45);
    }

    #[test]
    fn test_minimum_runtime_floors_point_pool() {
        // seeds: 3 + 3 + 3 + 3 + 2 = 14, pool = max(6, 15 - 14 - 3) = 6
        let beats = allocate(&outline_with_points(3), 15);
        assert_eq!(seconds_of(&beats, "Hook"), 3);
        assert_eq!(seconds_of(&beats, "Recap"), 2);
        assert_eq!(seconds_of(&beats, "Point 1"), 3);
        assert_eq!(seconds_of(&beats, "CTA"), 2);
        // drift from clamp saturation is preserved, not rebalanced
        assert_eq!(total_seconds(&beats), 25);
    }

    #[test]
    fn test_long_runtime_undershoots() {
        let beats = allocate(&outline_with_points(3), 90);
        assert_eq!(seconds_of(&beats, "Hook"), 6);
        assert_eq!(seconds_of(&beats, "Promise"), 5);
        assert_eq!(seconds_of(&beats, "Point 2"), 8);
        assert_eq!(seconds_of(&beats, "CTA"), 6);
        assert!(total_seconds(&beats) < 90);
    }

    #[test]
    fn test_shape_and_windows_over_valid_range() {
        for duration in 15..=90 {
            for n in 1..=6 {
                let outline = outline_with_points(n);
                let beats = allocate(&outline, duration);
                assert_eq!(beats.len(), 6 + n);
                assert_eq!(beats.first().unwrap().section, "Hook");
                assert_eq!(beats.last().unwrap().section, "CTA");

                let check = |section: &str, min: u32, max: u32| {
                    let s = seconds_of(&beats, section);
                    assert!(
                        (min..=max).contains(&s),
                        "{} = {} outside [{}, {}] at d={} n={}",
                        section, s, min, max, duration, n
                    );
                };
                check("Hook", 3, 6);
                check("Problem", 3, 6);
                check("Promise", 3, 5);
                check("Proof", 3, 6);
                check("Recap", 2, 4);
                check("CTA", 2, 6);
                for i in 1..=n {
                    check(&format!("Point {}", i), 3, 8);
                }
            }
        }
    }

    #[test]
    fn test_points_share_equal_time() {
        let beats = allocate(&outline_with_points(5), 60);
        let points: Vec<u32> = beats
            .iter()
            .filter(|b| b.section.starts_with("Point"))
            .map(|b| b.seconds)
            .collect();
        assert_eq!(points.len(), 5);
        assert!(points.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_notes_carry_outline_text() {
        let outline = outline_with_points(2);
        let beats = allocate(&outline, 30);
        assert_eq!(beats[0].notes, HOOK_NOTES);
        assert_eq!(beats[1].notes, "setup");
        assert_eq!(beats[2].notes, "promise");
        assert_eq!(beats[3].notes, "point 1");
        assert_eq!(beats[4].notes, "point 2");
        assert_eq!(beats[5].notes, "proof");
        assert_eq!(beats[6].notes, "recap");
        assert_eq!(beats[7].notes, "cta");
    }

    #[test]
    fn test_zero_points_and_zero_duration() {
        let beats = allocate(&outline_with_points(0), 45);
        assert_eq!(beats.len(), 6);
        assert_eq!(beats.last().unwrap().section, "CTA");

        let beats = allocate(&outline_with_points(3), 0);
        assert_eq!(beats.len(), 9);
        assert_eq!(seconds_of(&beats, "CTA"), 2);
        assert_eq!(seconds_of(&beats, "Point 1"), 3);
    }

    #[test]
    fn test_out_of_range_duration_does_not_panic() {
        let beats = allocate(&outline_with_points(4), u32::MAX);
        assert_eq!(beats.len(), 10);
        assert_eq!(seconds_of(&beats, "Point 1"), 8);
        assert_eq!(seconds_of(&beats, "CTA"), 6);
    }
}
