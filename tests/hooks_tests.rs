//! Hook generation tests

use std::collections::HashSet;

use ugc_scripter::hooks::{generate_hooks, HookRequest, Platform, Vibe};
use ugc_scripter::persona::PersonaKey;

#[test]
fn test_ten_unique_hooks_per_persona() {
    for key in PersonaKey::all() {
        let response = generate_hooks(&HookRequest::new(key.slug(), "meal prep", "eat better"));
        let unique: HashSet<&String> = response.hooks.iter().collect();
        assert_eq!(response.hooks.len(), 10, "persona {}", key);
        assert_eq!(unique.len(), response.hooks.len());
        assert!(response.hooks.iter().all(|h| h == h.trim()));
    }
}

#[test]
fn test_hooks_interpolate_brief() {
    let response = generate_hooks(&HookRequest::new("beauty", "skincare", "clear skin"));
    assert!(response.hooks.iter().any(|h| h.contains("skincare")));
    assert!(response.hooks.iter().any(|h| h.contains("clear skin")));
}

#[test]
fn test_every_vibe_parses_and_applies() {
    for vibe in Vibe::all() {
        assert_eq!(vibe.slug().parse::<Vibe>().unwrap(), *vibe);
        let response = generate_hooks(
            &HookRequest::new("tech", "crm", "close deals").with_vibe(*vibe),
        );
        assert_eq!(response.hooks.len(), 10);
    }
    assert!("loud".parse::<Vibe>().is_err());
}

#[test]
fn test_urgent_vibe_rewrites_exclamations() {
    let response = generate_hooks(
        &HookRequest::new("default", "budgeting", "save more").with_vibe(Vibe::Urgent),
    );
    assert!(response
        .hooks
        .contains(&"Stop scrolling if you're trying to save more with budgeting — do this now!".to_string()));
}

#[test]
fn test_platform_shapes_plan_and_angles() {
    let request = HookRequest::new("lifestyle", "journaling", "feel calm").with_platform(Platform::Linkedin);
    let response = generate_hooks(&request);

    assert!(response.testing_plan.experiments[0].contains(" on linkedin "));
    assert!(response
        .delivery_angles
        .iter()
        .any(|a| a.contains("professional scenario")));
    assert_eq!(response.testing_plan.metrics.len(), 3);
    assert_eq!(response.testing_plan.iteration_tips.len(), 3);
}

#[test]
fn test_pattern_interrupts_from_persona() {
    let response = generate_hooks(&HookRequest::new("fitness", "kettlebells", "build strength"));
    assert!(!response.pattern_interrupts.is_empty());
}

#[test]
fn test_response_serializes_camel_case() {
    let response = generate_hooks(&HookRequest::new("tech", "crm", "close deals"));
    let json = serde_json::to_value(&response).unwrap();
    assert!(json.get("patternInterrupts").is_some());
    assert!(json.get("deliveryAngles").is_some());
    assert!(json["testingPlan"].get("iterationTips").is_some());
}
