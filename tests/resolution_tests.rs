//! End-to-end resolution tests against the embedded catalog.
//!
//! These exercise the public API the way the CLI and the web handler do:
//! a raw JSON request goes in, a bill of materials plus diagnostics comes
//! out. The embedded catalog is the fixture.

use shaft_solver::{
    CatalogIndex, NoticeCode, RawRequest, Resolution, ResolutionEngine, ShaftKind, ValveKind,
};

fn embedded() -> CatalogIndex {
    CatalogIndex::load_embedded().expect("embedded catalog must parse")
}

fn resolve(json: &str) -> Resolution {
    let catalog = embedded();
    let request: RawRequest = serde_json::from_str(json).expect("request must parse");
    ResolutionEngine::new(&catalog).resolve(&request)
}

fn articles(resolution: &Resolution) -> Vec<&str> {
    resolution.items.iter().map(|i| i.article.as_str()).collect()
}

/// A fully specified rotary exhaust configuration resolves through the
/// direct key table.
#[test]
fn test_rotary_exhaust_resolves_by_exact_key() {
    let resolution = resolve(
        r#"{"shaft": "vbv", "diameter": 710, "valve": "pov",
            "valve_position": "niz", "motor": "6e"}"#,
    );
    assert_eq!(articles(&resolution), vec!["VBV-710-P1N"]);
}

/// A gravity valve configuration keys on the variant token instead of the
/// mounting position.
#[test]
fn test_gravity_exhaust_resolves_by_variant() {
    let resolution = resolve(
        r#"{"shaft": "vbv", "diameter": 710, "valve": "grav",
            "gravity_variant": "vnut", "motor": "6e"}"#,
    );
    assert_eq!(articles(&resolution), vec!["VBV-710-G1I"]);
}

/// An 800 mm shaft pairs with a 750 W motor; a conflicting request is
/// overridden with a correction notice, and the corrected value drives the
/// key lookup.
#[test]
fn test_conflicting_power_is_corrected_before_lookup() {
    let resolution = resolve(
        r#"{"shaft": "vbv", "diameter": 800, "valve": "pov",
            "valve_position": "niz", "motor": "6e", "power": 370}"#,
    );
    assert_eq!(articles(&resolution), vec!["VBV-800-P1N"]);
    assert!(resolution
        .notices
        .iter()
        .any(|n| n.code == NoticeCode::CorrectedParameter));
}

/// Passive supply shafts only exist with rotary valves; a gravity request
/// is coerced and the rotary key is used.
#[test]
fn test_supply_passive_coerces_gravity_to_rotary() {
    let resolution = resolve(
        r#"{"shaft": "vbp", "diameter": 710, "valve": "grav",
            "gravity_variant": "vnut", "motor": "6e"}"#,
    );
    assert!(articles(&resolution).contains(&"VBP-710-P1N"));
    assert!(resolution
        .notices
        .iter()
        .any(|n| n.code == NoticeCode::CorrectedParameter));
}

/// Active supply shafts carry no motor, so the request omits it and the
/// wildcard tier matches the table row regardless of its power and phase
/// tokens.
#[test]
fn test_supply_active_matches_without_motor() {
    let resolution = resolve(r#"{"shaft": "vba", "diameter": 710, "valve": "pov"}"#);
    assert!(articles(&resolution).contains(&"VBA-710-N"));
    assert!(!resolution
        .notices
        .iter()
        .any(|n| n.code.is_hard()));
}

/// Double-flap items are keyed without power and phase, so the base
/// resolves even though no motor was given.
#[test]
fn test_double_flap_resolves_without_motor() {
    let resolution = resolve(r#"{"shaft": "vbv", "diameter": 710, "valve": "dvustv"}"#);
    assert_eq!(articles(&resolution), vec!["VB-710-1M"]);
}

/// Breaker sizing from the fixed target-current table: a single-phase
/// 370 W motor needs 3 A, which falls inside the 2.5-4.0 A range entry.
#[test]
fn test_breaker_range_containment() {
    let resolution = resolve(
        r#"{"shaft": "vbv", "diameter": 710, "valve": "pov",
            "valve_position": "niz", "motor": "6e", "breaker": true}"#,
    );
    assert!(articles(&resolution).contains(&"M611-2540"));
}

/// A three-phase 370 W motor needs 1.3 A, contained in the 1.0-1.6 A
/// range.
#[test]
fn test_breaker_three_phase_target() {
    let resolution = resolve(
        r#"{"shaft": "vbv", "diameter": 710, "valve": "pov",
            "valve_position": "niz", "motor": "6d", "breaker": true}"#,
    );
    assert!(articles(&resolution).contains(&"M611-1016"));
}

/// A single-phase 750 W motor needs 5 A; no range contains it, so the
/// smallest rating at or above the target wins.
#[test]
fn test_breaker_nearest_above_when_no_range_contains() {
    let resolution = resolve(
        r#"{"shaft": "vbv", "diameter": 800, "valve": "pov",
            "valve_position": "niz", "motor": "6e", "breaker": true}"#,
    );
    assert!(articles(&resolution).contains(&"M611-5"));
}

/// An admixing supply shaft pulls in the distribution cone and the default
/// canopy on top of every explicitly requested accessory.
#[test]
fn test_admixing_full_accessory_set() {
    let resolution = resolve(
        r#"{"shaft": "vbr", "diameter": 710, "valve": "pov", "motor": "6e",
            "membrane": true, "tape": true, "breaker": true, "mounting_kit": true}"#,
    );
    let got = articles(&resolution);
    for expected in [
        "VBR-710-P1N",
        "ZONT-KIT",
        "MEM-710",
        "LENTA-10",
        "M611-2540",
        "KONUS-1",
        "MK-POV",
    ] {
        assert!(got.contains(&expected), "missing {expected} in {got:?}");
    }
}

/// A spigot top piece replaces the default canopy and matches by diameter.
#[test]
fn test_spigot_top_piece_by_diameter() {
    let resolution = resolve(
        r#"{"shaft": "vbv", "diameter": 710, "valve": "dvustv", "top_piece": "rastrub"}"#,
    );
    let got = articles(&resolution);
    assert!(got.contains(&"VB-710-1M"));
    assert!(got.contains(&"RST-710"));
    assert!(!got.contains(&"ZONT-KIT"));
}

/// A drip catcher on a passive supply shaft is ignored with a correction
/// notice instead of being selected.
#[test]
fn test_drip_catcher_ignored_on_ineligible_shaft() {
    let resolution = resolve(
        r#"{"shaft": "vbp", "diameter": 710, "valve": "pov", "motor": "6e",
            "drip_catcher": true}"#,
    );
    assert!(!articles(&resolution).contains(&"KAPLE-1"));
    assert!(resolution
        .notices
        .iter()
        .any(|n| n.code == NoticeCode::CorrectedParameter));
}

/// Extension sections merge into an existing line for the same article
/// instead of duplicating it.
#[test]
fn test_extension_quantities_sum_per_article() {
    let resolution = resolve(
        r#"{"shaft": "vbv", "diameter": 710, "valve": "dvustv", "extension_m": 4}"#,
    );
    assert_eq!(resolution.items.len(), 1);
    assert_eq!(resolution.items[0].article, "VB-710-1M");
    assert_eq!(resolution.items[0].quantity, 5);
}

/// Hard validation failures fold into the normal result shape: empty
/// items, exactly one coded notice.
#[test]
fn test_missing_fields_fold_into_result() {
    let resolution = resolve("{}");
    assert!(resolution.items.is_empty());
    assert_eq!(resolution.notices.len(), 1);
    assert_eq!(resolution.notices[0].code, NoticeCode::MissingRequiredField);

    let resolution = resolve(r#"{"shaft": "vbv", "diameter": 710, "valve": "pov"}"#);
    assert!(resolution.items.is_empty());
    assert_eq!(resolution.notices[0].code, NoticeCode::MissingMotorType);
}

/// The serialized result is stable across repeated resolutions of the
/// same request.
#[test]
fn test_serialized_result_is_stable() {
    let catalog = embedded();
    let engine = ResolutionEngine::new(&catalog);
    let request = RawRequest {
        shaft: Some(ShaftKind::SupplyMix),
        diameter: Some(710),
        valve: Some(ValveKind::Rotary),
        motor: Some(shaft_solver::MotorKind::SinglePhase),
        membrane: true,
        breaker: true,
        extension_m: 2,
        ..RawRequest::default()
    };

    let first = serde_json::to_string(&engine.resolve(&request)).unwrap();
    for _ in 0..3 {
        assert_eq!(serde_json::to_string(&engine.resolve(&request)).unwrap(), first);
    }
}
