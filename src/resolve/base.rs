use crate::catalog::store::CatalogIndex;
use crate::core::bom::LineItem;
use crate::core::item::CatalogItem;
use crate::core::params::CanonicalParams;
use crate::core::types::{Diameter, Notice, NoticeCode, ShaftKind};

use super::key::build_key;

/// Markers expected in base-assembly names by the heuristic scan tier
const ROTARY_MARKER: &str = "rotary";
const BOTTOM_MARKER: &str = "bottom";

/// Emergency diameter -> article table, last resort for active supply
/// shafts when every search tier comes up empty
const EMERGENCY_SUPPLY_ACTIVE: [(Diameter, &str); 3] = [
    (Diameter::D560, "VBA-560-N"),
    (Diameter::D710, "VBA-710-N"),
    (Diameter::D800, "VBA-800-N"),
];

/// Select the primary catalog item for a configuration.
///
/// Tiers are tried in order, first success wins:
///
/// 1. exact key lookup in the direct table
/// 2. (active supply only) wildcard key match ignoring power/phase
/// 3. heuristic catalog name scan
/// 4. fixed emergency table
///
/// A total miss is soft: the base stays empty and an
/// [`NoticeCode::UnresolvedBaseAssembly`] diagnostic names the triple.
pub fn resolve_base(
    catalog: &CatalogIndex,
    params: &CanonicalParams,
) -> (Option<LineItem>, Option<Notice>) {
    let found = exact_key_tier(catalog, params)
        .or_else(|| wildcard_key_tier(catalog, params))
        .or_else(|| name_scan_tier(catalog, params))
        .or_else(|| emergency_tier(catalog, params));

    match found {
        Some(item) => (Some(LineItem::new(&item.article, &item.name, 1)), None),
        None => (
            None,
            Some(Notice::new(
                NoticeCode::UnresolvedBaseAssembly,
                format!(
                    "No base assembly found for {} / {} / {} valve",
                    params.shaft, params.diameter, params.valve
                ),
            )),
        ),
    }
}

/// Tier 1: exact key in the direct lookup table
fn exact_key_tier<'a>(
    catalog: &'a CatalogIndex,
    params: &CanonicalParams,
) -> Option<&'a CatalogItem> {
    let key = build_key(params)?;
    catalog.lookup_key(&key)
}

/// Tier 2: active supply shafts are not differentiated by motor, so any
/// table row sharing shaft, diameter, rotary valve, and bottom position
/// matches regardless of its power and phase tokens
fn wildcard_key_tier<'a>(
    catalog: &'a CatalogIndex,
    params: &CanonicalParams,
) -> Option<&'a CatalogItem> {
    if params.shaft != ShaftKind::SupplyActive {
        return None;
    }
    let shaft_tag = params.shaft.tag();
    let dia = params.diameter.millimeters().to_string();

    catalog
        .key_entries()
        .iter()
        .find(|entry| {
            let tokens: Vec<&str> = entry.key.split('_').collect();
            tokens.len() == 6
                && tokens[0] == shaft_tag
                && tokens[1] == dia
                && tokens[4] == "pov"
                && tokens[5] == "niz"
        })
        .and_then(|entry| catalog.lookup_by_article(&entry.article))
}

/// Tier 3: first item whose name contains the shaft tag, the diameter, a
/// rotary marker, and a bottom marker (case-insensitive, catalog order)
fn name_scan_tier<'a>(
    catalog: &'a CatalogIndex,
    params: &CanonicalParams,
) -> Option<&'a CatalogItem> {
    let shaft_tag = params.shaft.tag();
    let dia = params.diameter.millimeters().to_string();

    catalog.find_first(|item| {
        item.name_contains(shaft_tag)
            && item.name_contains(&dia)
            && item.name_contains(ROTARY_MARKER)
            && item.name_contains(BOTTOM_MARKER)
    })
}

/// Tier 4: fixed emergency table, active supply only
fn emergency_tier<'a>(
    catalog: &'a CatalogIndex,
    params: &CanonicalParams,
) -> Option<&'a CatalogItem> {
    if params.shaft != ShaftKind::SupplyActive {
        return None;
    }
    EMERGENCY_SUPPLY_ACTIVE
        .iter()
        .find(|(d, _)| *d == params.diameter)
        .and_then(|(_, article)| catalog.lookup_by_article(article))
}
