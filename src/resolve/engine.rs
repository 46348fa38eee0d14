use serde::Serialize;

use crate::catalog::store::CatalogIndex;
use crate::core::bom::{Bom, LineItem};
use crate::core::request::RawRequest;
use crate::core::types::Notice;

use super::accessory::{
    drive_advisory, resolve_cone, resolve_drip_catcher, resolve_extensions, resolve_membrane,
    resolve_mounting_kit, resolve_tape, resolve_top_piece, Resolved,
};
use super::base::resolve_base;
use super::breaker::resolve_breaker;
use super::normalize::normalize;

/// Result of resolving one request: the deduplicated bill of materials and
/// every diagnostic in generation order
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    pub items: Vec<LineItem>,
    pub notices: Vec<Notice>,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The resolution engine: a pure function of (catalog snapshot, raw input).
///
/// Hard validation failures are folded into the result as an empty BOM
/// with a single coded notice, so `resolve` is total; soft failures only
/// append diagnostics and never abort the rest of the pipeline.
pub struct ResolutionEngine<'a> {
    catalog: &'a CatalogIndex,
}

impl<'a> ResolutionEngine<'a> {
    pub fn new(catalog: &'a CatalogIndex) -> Self {
        Self { catalog }
    }

    pub fn resolve(&self, raw: &RawRequest) -> Resolution {
        let (params, mut notices) = match normalize(raw) {
            Ok(normalized) => normalized,
            Err(err) => {
                tracing::debug!("normalization failed: {err}");
                return Resolution {
                    items: Vec::new(),
                    notices: vec![Notice::new(err.code(), err.to_string())],
                };
            }
        };
        tracing::debug!(?params, "resolving configuration");

        let mut bom = Bom::new();
        let mut collect = |(item, notice): Resolved| {
            if let Some(item) = item {
                bom.add(item);
            }
            if let Some(notice) = notice {
                notices.push(notice);
            }
        };

        collect(resolve_base(self.catalog, &params));
        collect(resolve_top_piece(self.catalog, &params));
        collect(resolve_membrane(self.catalog, &params));
        collect(resolve_tape(self.catalog, &params));
        collect(resolve_breaker(self.catalog, &params));
        collect(resolve_drip_catcher(self.catalog, &params));
        collect(resolve_cone(self.catalog, &params));
        collect(resolve_mounting_kit(self.catalog, &params));
        collect(resolve_extensions(self.catalog, &params));

        if let Some(advisory) = drive_advisory(self.catalog, &params) {
            notices.push(advisory);
        }

        Resolution {
            items: bom.into_lines(),
            notices,
        }
    }
}
