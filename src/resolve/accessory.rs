use crate::catalog::store::CatalogIndex;
use crate::core::bom::LineItem;
use crate::core::item::CatalogItem;
use crate::core::params::CanonicalParams;
use crate::core::types::{Notice, NoticeCode, TopPieceKind, ValveKind};

/// Zero-or-one selected item plus zero-or-one diagnostic; every accessory
/// resolver is independent of the others
pub type Resolved = (Option<LineItem>, Option<Notice>);

/// The canopy kit has one well-known article that fits every shaft
const CANOPY_ARTICLE: &str = "ZONT-KIT";

/// Well-known mounting kit articles, keyed by valve kind
const MOUNTING_KIT_ROTARY: &str = "MK-POV";
const MOUNTING_KIT_GRAVITY: &str = "MK-GRAV";

/// Drive articles always worth listing when present in the catalog
const DRIVE_WHITELIST: [&str; 3] = ["BELT-A1250", "DRIVE-370-6E", "DRIVE-750-6D"];

fn select(item: &CatalogItem, quantity: u32) -> Option<LineItem> {
    Some(LineItem::new(&item.article, &item.name, quantity))
}

/// Top piece: canopy (well-known article, then category, then name) or
/// spigot (category + diameter, then name + diameter). Only a spigot miss
/// produces a diagnostic; the canopy kit is diameter-independent and its
/// absence from a catalog is not worth a warning.
pub fn resolve_top_piece(catalog: &CatalogIndex, params: &CanonicalParams) -> Resolved {
    let Some(kind) = params.top_piece else {
        return (None, None);
    };

    match kind {
        TopPieceKind::Canopy => {
            let found = catalog
                .lookup_by_article(CANOPY_ARTICLE)
                .or_else(|| catalog.find_first(|i| i.has_category("canopy")))
                .or_else(|| catalog.find_first(|i| i.name_contains("canopy")));
            (found.and_then(|i| select(i, 1)), None)
        }
        TopPieceKind::Spigot => {
            let dia = params.diameter.millimeters();
            let dia_str = dia.to_string();
            let found = catalog
                .find_first(|i| i.has_category("spigot") && i.has_diameter(dia))
                .or_else(|| {
                    catalog.find_first(|i| i.name_contains("spigot") && i.name_contains(&dia_str))
                });
            match found {
                Some(item) => (select(item, 1), None),
                None => (
                    None,
                    Some(Notice::new(
                        NoticeCode::UnresolvedAccessory,
                        format!("No spigot for diameter {dia} in the catalog"),
                    )),
                ),
            }
        }
    }
}

/// Sealing membrane: category + diameter match, then membrane-by-name with
/// the diameter in it
pub fn resolve_membrane(catalog: &CatalogIndex, params: &CanonicalParams) -> Resolved {
    if !params.membrane {
        return (None, None);
    }
    let dia = params.diameter.millimeters();
    let dia_str = dia.to_string();
    let found = catalog
        .find_first(|i| i.has_category("membrane") && i.has_diameter(dia))
        .or_else(|| catalog.find_first(|i| i.name_contains("membrane") && i.name_contains(&dia_str)));

    match found {
        Some(item) => (select(item, 1), None),
        None => (
            None,
            Some(Notice::new(
                NoticeCode::UnresolvedAccessory,
                format!("No sealing membrane for diameter {dia} in the catalog"),
            )),
        ),
    }
}

/// Sealing tape: plain name scan, one size fits all diameters
pub fn resolve_tape(catalog: &CatalogIndex, params: &CanonicalParams) -> Resolved {
    if !params.tape {
        return (None, None);
    }
    match catalog.find_first(|i| i.name_contains("tape")) {
        Some(item) => (select(item, 1), None),
        None => (
            None,
            Some(Notice::new(
                NoticeCode::UnresolvedAccessory,
                "No sealing tape in the catalog",
            )),
        ),
    }
}

/// Drip catcher: only exhaust and admixing shafts move air that can
/// condense, so a request on other shafts is ignored with a notice
pub fn resolve_drip_catcher(catalog: &CatalogIndex, params: &CanonicalParams) -> Resolved {
    if !params.drip_catcher {
        return (None, None);
    }
    if !params.drip_catcher_eligible() {
        return (
            None,
            Some(Notice::new(
                NoticeCode::CorrectedParameter,
                format!(
                    "Drip catcher only applies to exhaust and admixing shafts; ignored for {}",
                    params.shaft
                ),
            )),
        );
    }
    match catalog.find_first(|i| i.name_contains("drip catch")) {
        Some(item) => (select(item, 1), None),
        None => (
            None,
            Some(Notice::new(
                NoticeCode::UnresolvedAccessory,
                "No drip catcher in the catalog",
            )),
        ),
    }
}

/// Distribution cone: requested explicitly or implied by an admixing
/// shaft. A double-flap valve leaves no mounting point for the cone, so
/// the request is skipped silently there.
pub fn resolve_cone(catalog: &CatalogIndex, params: &CanonicalParams) -> Resolved {
    if !params.wants_cone() {
        return (None, None);
    }
    if params.valve == ValveKind::DoubleFlap {
        return (None, None);
    }
    match catalog.find_first(|i| i.name_contains("cone")) {
        Some(item) => (select(item, 1), None),
        None => (
            None,
            Some(Notice::new(
                NoticeCode::UnresolvedAccessory,
                "No distribution cone in the catalog",
            )),
        ),
    }
}

/// Mounting kit: well-known article per valve kind first, then the
/// category/name heuristic
pub fn resolve_mounting_kit(catalog: &CatalogIndex, params: &CanonicalParams) -> Resolved {
    if !params.mounting_kit {
        return (None, None);
    }
    let fixed = match params.valve {
        ValveKind::Rotary => Some(MOUNTING_KIT_ROTARY),
        ValveKind::Gravity => Some(MOUNTING_KIT_GRAVITY),
        ValveKind::DoubleFlap => None,
    };
    let found = fixed
        .and_then(|article| catalog.lookup_by_article(article))
        .or_else(|| catalog.find_first(|i| i.has_category("mounting")))
        .or_else(|| catalog.find_first(|i| i.name_contains("mounting kit")));

    match found {
        Some(item) => (select(item, 1), None),
        None => (
            None,
            Some(Notice::new(
                NoticeCode::UnresolvedAccessory,
                "No mounting kit in the catalog",
            )),
        ),
    }
}

/// Extension sections: one plain base section per requested meter
pub fn resolve_extensions(catalog: &CatalogIndex, params: &CanonicalParams) -> Resolved {
    if params.extension_m == 0 {
        return (None, None);
    }
    let dia = params.diameter.millimeters();
    let dia_str = dia.to_string();
    let found = catalog
        .find_first(|i| i.has_category("section") && i.has_kind("base") && i.has_diameter(dia))
        .or_else(|| catalog.find_first(|i| i.name_contains("section") && i.name_contains(&dia_str)));

    (found.and_then(|i| select(i, params.extension_m)), None)
}

/// Drive advisory: not a selection. Rotary and double-flap valves are
/// serviced with spare drives, so the listing of known drive articles is
/// always attached as an informational notice for those valve kinds.
pub fn drive_advisory(catalog: &CatalogIndex, params: &CanonicalParams) -> Option<Notice> {
    if !matches!(params.valve, ValveKind::Rotary | ValveKind::DoubleFlap) {
        return None;
    }

    let mut listed: Vec<&CatalogItem> = DRIVE_WHITELIST
        .iter()
        .filter_map(|article| catalog.lookup_by_article(article))
        .collect();

    // Keyword scan after the whitelist; sections and valves mention drives
    // in passing and must not be listed
    for item in catalog.find_all(|i| {
        i.name_contains("drive") && !i.name_contains("section") && !i.name_contains("valve")
    }) {
        if !listed.iter().any(|l| l.article == item.article) {
            listed.push(item);
        }
    }

    let message = if listed.is_empty() {
        "No drive articles known for this configuration".to_string()
    } else {
        let entries: Vec<String> = listed
            .iter()
            .map(|i| format!("{} — {}", i.article, i.name))
            .collect();
        format!("Available drives: {}", entries.join("; "))
    };

    Some(Notice::new(NoticeCode::Advisory, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{
        Diameter, MotorKind, PowerRating, ShaftKind, ValvePosition,
    };

    fn params() -> CanonicalParams {
        CanonicalParams {
            shaft: ShaftKind::Exhaust,
            diameter: Diameter::D710,
            valve: ValveKind::Rotary,
            valve_position: Some(ValvePosition::Bottom),
            gravity_variant: None,
            motor: Some(MotorKind::SinglePhase),
            power: Some(PowerRating::W370),
            top_piece: None,
            membrane: false,
            tape: false,
            breaker: false,
            drip_catcher: false,
            cone: false,
            mounting_kit: false,
            extension_m: 0,
        }
    }

    fn catalog_with(items: Vec<CatalogItem>) -> CatalogIndex {
        let mut catalog = CatalogIndex::new();
        for item in items {
            catalog.add_item(item);
        }
        catalog
    }

    #[test]
    fn test_canopy_prefers_well_known_article() {
        let catalog = catalog_with(vec![
            CatalogItem::new("OTHER", "Shaft canopy, old model").with_category("canopy"),
            CatalogItem::new(CANOPY_ARTICLE, "Ventilation shaft canopy kit"),
        ]);
        let mut p = params();
        p.top_piece = Some(TopPieceKind::Canopy);

        let (item, notice) = resolve_top_piece(&catalog, &p);
        assert_eq!(item.unwrap().article, CANOPY_ARTICLE);
        assert!(notice.is_none());
    }

    #[test]
    fn test_canopy_miss_is_silent() {
        let catalog = CatalogIndex::new();
        let mut p = params();
        p.top_piece = Some(TopPieceKind::Canopy);

        let (item, notice) = resolve_top_piece(&catalog, &p);
        assert!(item.is_none());
        assert!(notice.is_none());
    }

    #[test]
    fn test_spigot_matches_by_category_and_diameter() {
        let catalog = catalog_with(vec![
            CatalogItem::new("RST-560", "Spigot VB-560")
                .with_category("spigot")
                .with_diameter("560"),
            CatalogItem::new("RST-710", "Spigot VB-710")
                .with_category("spigot")
                .with_diameter("710"),
        ]);
        let mut p = params();
        p.top_piece = Some(TopPieceKind::Spigot);

        let (item, _) = resolve_top_piece(&catalog, &p);
        assert_eq!(item.unwrap().article, "RST-710");
    }

    #[test]
    fn test_spigot_miss_reports() {
        let catalog = CatalogIndex::new();
        let mut p = params();
        p.top_piece = Some(TopPieceKind::Spigot);

        let (item, notice) = resolve_top_piece(&catalog, &p);
        assert!(item.is_none());
        assert_eq!(notice.unwrap().code, NoticeCode::UnresolvedAccessory);
    }

    #[test]
    fn test_membrane_falls_back_to_name() {
        let catalog = catalog_with(vec![CatalogItem::new(
            "MEM-710",
            "Rubberized shaft membrane (1.5x1.5 m) VB-710",
        )]);
        let mut p = params();
        p.membrane = true;

        let (item, notice) = resolve_membrane(&catalog, &p);
        assert_eq!(item.unwrap().article, "MEM-710");
        assert!(notice.is_none());
    }

    #[test]
    fn test_membrane_wrong_diameter_misses() {
        let catalog = catalog_with(vec![CatalogItem::new(
            "MEM-560",
            "Rubberized shaft membrane (1.5x1.5 m) VB-560",
        )]);
        let mut p = params();
        p.membrane = true;

        let (item, notice) = resolve_membrane(&catalog, &p);
        assert!(item.is_none());
        assert_eq!(notice.unwrap().code, NoticeCode::UnresolvedAccessory);
    }

    #[test]
    fn test_drip_catcher_ineligible_shaft_is_ignored_with_notice() {
        let catalog = catalog_with(vec![CatalogItem::new("KAPLE-1100", "Drip catcher 1100")]);
        let mut p = params();
        p.shaft = ShaftKind::SupplyPassive;
        p.drip_catcher = true;

        let (item, notice) = resolve_drip_catcher(&catalog, &p);
        assert!(item.is_none());
        assert_eq!(notice.unwrap().code, NoticeCode::CorrectedParameter);
    }

    #[test]
    fn test_cone_automatic_for_admixing_shaft() {
        let catalog = catalog_with(vec![CatalogItem::new("KONUS-1", "Air distribution cone")]);
        let mut p = params();
        p.shaft = ShaftKind::SupplyMix;

        let (item, _) = resolve_cone(&catalog, &p);
        assert_eq!(item.unwrap().article, "KONUS-1");
    }

    #[test]
    fn test_cone_silent_for_double_flap() {
        let catalog = CatalogIndex::new();
        let mut p = params();
        p.cone = true;
        p.valve = ValveKind::DoubleFlap;

        let (item, notice) = resolve_cone(&catalog, &p);
        assert!(item.is_none());
        assert!(notice.is_none());
    }

    #[test]
    fn test_mounting_kit_keyed_by_valve_kind() {
        let catalog = catalog_with(vec![
            CatalogItem::new(MOUNTING_KIT_ROTARY, "Mounting kit for rotary valve shafts"),
            CatalogItem::new(MOUNTING_KIT_GRAVITY, "Mounting kit for gravity valve shafts"),
        ]);
        let mut p = params();
        p.mounting_kit = true;
        p.valve = ValveKind::Gravity;

        let (item, _) = resolve_mounting_kit(&catalog, &p);
        assert_eq!(item.unwrap().article, MOUNTING_KIT_GRAVITY);
    }

    #[test]
    fn test_extension_quantity_equals_meters() {
        let catalog = catalog_with(vec![CatalogItem::new("VB-710-1M", "Section VB-710 (1m)")
            .with_category("section")
            .with_kind("base")
            .with_diameter("710")]);
        let mut p = params();
        p.extension_m = 3;

        let (item, notice) = resolve_extensions(&catalog, &p);
        let item = item.unwrap();
        assert_eq!(item.article, "VB-710-1M");
        assert_eq!(item.quantity, 3);
        assert!(notice.is_none());
    }

    #[test]
    fn test_drive_advisory_excludes_false_positives() {
        let catalog = catalog_with(vec![
            CatalogItem::new("BELT-A1250", "Drive belt A-1250"),
            CatalogItem::new("DRV-99", "Spare drive wheel"),
            CatalogItem::new("SEC-D", "Section VB-710 with drive coupling"),
            CatalogItem::new("VLV-D", "Rotary valve with drive lever"),
        ]);
        let notice = drive_advisory(&catalog, &params()).unwrap();
        assert_eq!(notice.code, NoticeCode::Advisory);
        assert!(notice.message.contains("BELT-A1250"));
        assert!(notice.message.contains("DRV-99"));
        assert!(!notice.message.contains("SEC-D"));
        assert!(!notice.message.contains("VLV-D"));
    }

    #[test]
    fn test_drive_advisory_only_for_rotary_and_double_flap() {
        let catalog = CatalogIndex::new();
        let mut p = params();
        p.valve = ValveKind::Gravity;
        assert!(drive_advisory(&catalog, &p).is_none());
        p.valve = ValveKind::DoubleFlap;
        assert!(drive_advisory(&catalog, &p).is_some());
    }
}
