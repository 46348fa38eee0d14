//! The configuration resolution engine.
//!
//! Turns a raw, partial equipment specification into a bill of materials
//! in five stages:
//!
//! 1. [`normalize`]: validate required fields, apply the shaft-kind
//!    coercions and the diameter -> power table
//! 2. [`key`]: build the deterministic lookup-table key, if possible
//! 3. [`base`]: four-tier fallback search for the primary catalog item
//! 4. [`accessory`] / [`breaker`]: independent zero-or-one matchers for
//!    each requested accessory
//! 5. [`engine`]: orchestration, BOM assembly, diagnostic aggregation
//!
//! Every stage is a pure function of the catalog snapshot and its inputs;
//! identical requests always produce identical resolutions.
//!
//! ## Example
//!
//! ```rust,no_run
//! use shaft_solver::{CatalogIndex, RawRequest, ResolutionEngine};
//!
//! let catalog = CatalogIndex::load_embedded().unwrap();
//! let request: RawRequest =
//!     serde_json::from_str(r#"{"shaft": "vbv", "diameter": 710, "valve": "dvustv"}"#).unwrap();
//!
//! let engine = ResolutionEngine::new(&catalog);
//! let resolution = engine.resolve(&request);
//!
//! for line in &resolution.items {
//!     println!("{} x{}  {}", line.article, line.quantity, line.name);
//! }
//! ```

pub mod accessory;
pub mod base;
pub mod breaker;
pub mod engine;
pub mod key;
pub mod normalize;

pub use engine::{Resolution, ResolutionEngine};
pub use normalize::{normalize, NormalizeError};
