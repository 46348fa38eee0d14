use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::store::CatalogIndex;
use crate::core::bom::LineItem;
use crate::core::item::CatalogItem;
use crate::core::params::CanonicalParams;
use crate::core::types::{MotorKind, Notice, NoticeCode, PowerRating};

use super::accessory::Resolved;

/// Comparison tolerance for parsed ampere values
const EPSILON: f64 = 1e-9;

/// Inclusive range: catalog names write it with a hyphen, en dash, or em
/// dash, decimals with a dot or comma, and the ampere unit in either the
/// Latin or the Cyrillic letter
static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:[.,]\d+)?)\s*[-–—]\s*(\d+(?:[.,]\d+)?)\s*[aа]").expect("valid regex")
});

/// Single rating; the unit letter is mandatory so that article-like digit
/// runs in the name are not mistaken for a rating
static SINGLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:[.,]\d+)?)\s*[aа]").expect("valid regex")
});

/// Current rating parsed from a catalog name
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rating {
    /// Inclusive range, e.g. "1.0-1.6A"
    Range(f64, f64),
    /// Single value, e.g. "3A"
    Single(f64),
}

impl Rating {
    /// The value used for nearest-above selection: a range counts as its
    /// upper bound
    fn selection_value(self) -> f64 {
        match self {
            Self::Range(_, hi) => hi,
            Self::Single(v) => v,
        }
    }

    fn contains(self, target: f64) -> bool {
        match self {
            Self::Range(lo, hi) => target >= lo - EPSILON && target <= hi + EPSILON,
            Self::Single(_) => false,
        }
    }
}

/// Parse the current rating out of a breaker name. The range form is tried
/// first; a name yields a range or a single value, never both.
pub fn parse_rating(name: &str) -> Option<Rating> {
    if let Some(caps) = RANGE_RE.captures(name) {
        let lo = parse_amperes(&caps[1])?;
        let hi = parse_amperes(&caps[2])?;
        // An inverted "range" is a hyphenated model code ("M611-25A"),
        // not a rating span; fall through to the single-value form
        if lo <= hi {
            return Some(Rating::Range(lo, hi));
        }
    }
    let caps = SINGLE_RE.captures(name)?;
    Some(Rating::Single(parse_amperes(&caps[1])?))
}

fn parse_amperes(token: &str) -> Option<f64> {
    token.replace(',', ".").parse().ok()
}

/// Target current table: motor kind crossed with power rating
pub fn target_current(motor: MotorKind, power: PowerRating) -> f64 {
    match (motor, power) {
        (MotorKind::SinglePhase, PowerRating::W370) => 3.0,
        (MotorKind::SinglePhase, PowerRating::W750) => 5.0,
        (MotorKind::ThreePhase, PowerRating::W370) => 1.3,
        (MotorKind::ThreePhase, PowerRating::W750) => 2.0,
    }
}

/// Select a circuit breaker for the configured motor.
///
/// Every breaker-tagged catalog entry is parsed for a rating. A range that
/// contains the target wins immediately (first such entry in catalog
/// order); otherwise the smallest rating at or above the target is taken,
/// ties broken by catalog order.
pub fn resolve_breaker(catalog: &CatalogIndex, params: &CanonicalParams) -> Resolved {
    if !params.breaker {
        return (None, None);
    }

    let (Some(motor), Some(power)) = (params.motor, params.power) else {
        return (
            None,
            Some(Notice::new(
                NoticeCode::UnresolvedAccessory,
                "A circuit breaker cannot be sized without motor type and power",
            )),
        );
    };
    let target = target_current(motor, power);

    match pick_breaker(catalog, target) {
        Some(item) => (Some(LineItem::new(&item.article, &item.name, 1)), None),
        None => (
            None,
            Some(Notice::new(
                NoticeCode::NoBreakerFound,
                format!("No circuit breaker rated at or above {target} A in the catalog"),
            )),
        ),
    }
}

fn pick_breaker(catalog: &CatalogIndex, target: f64) -> Option<&CatalogItem> {
    let breakers = catalog.find_all(|i| i.has_category("breaker") || i.name_contains("breaker"));

    let mut nearest_above: Option<(f64, &CatalogItem)> = None;
    for item in breakers {
        let Some(rating) = parse_rating(&item.name) else {
            continue;
        };

        // Exact containment always wins over nearest-above
        if rating.contains(target) {
            return Some(item);
        }

        let value = rating.selection_value();
        if value + EPSILON >= target {
            // Strict less-than keeps the earlier entry on a tie
            let better = nearest_above.map_or(true, |(best, _)| value < best - EPSILON);
            if better {
                nearest_above = Some((value, item));
            }
        }
    }

    nearest_above.map(|(_, item)| item)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breaker_catalog(names: &[&str]) -> CatalogIndex {
        let mut catalog = CatalogIndex::new();
        for (i, name) in names.iter().enumerate() {
            catalog.add_item(CatalogItem::new(format!("BR-{i}"), *name).with_category("breaker"));
        }
        catalog
    }

    #[test]
    fn test_parse_range_with_every_dash_glyph() {
        for name in [
            "Circuit breaker M611 1.0-1.6A",
            "Circuit breaker M611 1.0–1.6A",
            "Circuit breaker M611 1.0—1.6A",
        ] {
            assert_eq!(parse_rating(name), Some(Rating::Range(1.0, 1.6)), "{name}");
        }
    }

    #[test]
    fn test_parse_comma_decimals_and_cyrillic_unit() {
        assert_eq!(
            parse_rating("Circuit breaker M611 2,5-4,0А"),
            Some(Rating::Range(2.5, 4.0))
        );
        assert_eq!(
            parse_rating("Circuit breaker M611 2,4A"),
            Some(Rating::Single(2.4))
        );
    }

    #[test]
    fn test_parse_single_requires_unit() {
        assert_eq!(parse_rating("Circuit breaker M611 3A"), Some(Rating::Single(3.0)));
        assert_eq!(parse_rating("Circuit breaker M611"), None);
    }

    #[test]
    fn test_hyphenated_model_code_is_not_a_range() {
        // "M611-25A" must read as a single 25 A rating, not Range(611, 25)
        assert_eq!(
            parse_rating("Circuit breaker M611-25A"),
            Some(Rating::Single(25.0))
        );
        // A genuine span alongside a model code still parses as a range
        assert_eq!(
            parse_rating("Circuit breaker M611-25 1.6-2.5A"),
            Some(Rating::Range(1.6, 2.5))
        );
    }

    #[test]
    fn test_containment_wins() {
        // Target 1.3 against a catalog containing only the 1.0-1.6 range
        let catalog = breaker_catalog(&["Circuit breaker M611 1.0-1.6A"]);
        let item = pick_breaker(&catalog, 1.3).unwrap();
        assert_eq!(item.article, "BR-0");
    }

    #[test]
    fn test_containment_beats_closer_single_value() {
        let catalog = breaker_catalog(&[
            "Circuit breaker M611 3A",
            "Circuit breaker M611 2.5-4.0A",
        ]);
        // 3.0 is contained in the later range; containment still wins
        let item = pick_breaker(&catalog, 3.0).unwrap();
        assert_eq!(item.article, "BR-1");
    }

    #[test]
    fn test_nearest_above_selection() {
        // Target 2.0 against a single 3A entry
        let catalog = breaker_catalog(&["Circuit breaker M611 3A"]);
        assert_eq!(pick_breaker(&catalog, 2.0).unwrap().article, "BR-0");

        // Smallest value at or above wins among several
        let catalog = breaker_catalog(&[
            "Circuit breaker M611 5A",
            "Circuit breaker M611 3A",
            "Circuit breaker M611 1.6A",
        ]);
        assert_eq!(pick_breaker(&catalog, 2.0).unwrap().article, "BR-1");
    }

    #[test]
    fn test_tie_broken_by_catalog_order() {
        let catalog = breaker_catalog(&[
            "Circuit breaker M611 3A (DIN rail)",
            "Circuit breaker M611 3A (screw mount)",
        ]);
        assert_eq!(pick_breaker(&catalog, 2.0).unwrap().article, "BR-0");
    }

    #[test]
    fn test_no_breaker_at_or_above_target() {
        let catalog = breaker_catalog(&["Circuit breaker M611 5A"]);
        assert!(pick_breaker(&catalog, 10.0).is_none());
    }

    #[test]
    fn test_exact_boundary_within_tolerance() {
        let catalog = breaker_catalog(&["Circuit breaker M611 1.0-1.6A"]);
        assert!(pick_breaker(&catalog, 1.6).is_some());
        assert!(pick_breaker(&catalog, 1.6 + 1e-12).is_some());
    }

    #[test]
    fn test_resolver_reports_no_breaker_found() {
        use crate::core::params::CanonicalParams;
        use crate::core::types::{Diameter, ShaftKind, ValveKind, ValvePosition};

        let params = CanonicalParams {
            shaft: ShaftKind::Exhaust,
            diameter: Diameter::D800,
            valve: ValveKind::Rotary,
            valve_position: Some(ValvePosition::Bottom),
            gravity_variant: None,
            motor: Some(MotorKind::SinglePhase),
            power: Some(PowerRating::W750),
            top_piece: None,
            membrane: false,
            tape: false,
            breaker: true,
            drip_catcher: false,
            cone: false,
            mounting_kit: false,
            extension_m: 0,
        };
        // Max rating 4.0 < target 5.0
        let catalog = breaker_catalog(&["Circuit breaker M611 2,5-4,0A"]);
        let (item, notice) = resolve_breaker(&catalog, &params);
        assert!(item.is_none());
        assert_eq!(notice.unwrap().code, NoticeCode::NoBreakerFound);
    }
}
