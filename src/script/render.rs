//! Flat script text rendering.

use super::outline::ScriptOutline;
use super::sanitize::sanitize;

/// Join outline fields into the final script text.
///
/// Layout: hook, blank line, setup, promise, numbered key points, blank
/// line, proof, recap, cta. No trailing newline.
pub fn render(outline: &ScriptOutline) -> String {
    let key_points = outline
        .key_points
        .iter()
        .enumerate()
        .map(|(index, point)| format!("{}. {}", index + 1, sanitize(point)))
        .collect::<Vec<_>>()
        .join("\n");

    [
        sanitize(&outline.hook),
        String::new(),
        sanitize(&outline.setup),
        sanitize(&outline.promise),
        key_points,
        String::new(),
        sanitize(&outline.proof),
        sanitize(&outline.recap),
        sanitize(&outline.cta),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outline() -> ScriptOutline {
        ScriptOutline {
            hook: "Hook  line".into(),
            setup: "Setup\nline".into(),
            promise: "Promise".into(),
            key_points: vec!["First".into(), " Second ".into()],
            proof: "Proof".into(),
            recap: "Recap".into(),
            cta: "CTA".into(),
        }
    }

    #[test]
    fn test_layout() {
        assert_eq!(
            render(&outline()),
            "Hook line\n\nSetup line\nPromise\n1. First\n2. Second\n\nProof\nRecap\nCTA"
        );
    }

    #[test]
    fn test_no_trailing_newline() {
        assert!(!render(&outline()).ends_with('\n'));
    }

    #[test]
    fn test_empty_key_points_leave_empty_line() {
        let mut o = outline();
        o.key_points.clear();
        assert_eq!(
            render(&o),
            "Hook line\n\nSetup line\nPromise\n\n\nProof\nRecap\nCTA"
        );
    }
}
