//! # shaft-solver
//!
//! A library for resolving partial ventilation-shaft specifications into a
//! concrete bill of materials.
//!
//! Customers describe a shaft with a handful of parameters (series,
//! diameter, valve, motor, accessories). The parts catalog, however, lists
//! thousands of loosely-named positions; which section, membrane, or
//! circuit breaker actually fits a configuration is encoded in a direct
//! lookup table where one exists and in catalog naming conventions where
//! it does not.
//!
//! `shaft-solver` solves this by normalizing the request against the
//! catalog's compatibility rules and then running a layered fallback
//! search per position: deterministic key lookup first, heuristic name
//! scans after, with every correction and miss reported as a coded
//! diagnostic.
//!
//! ## Features
//!
//! - **Parameter normalization**: coerces impossible valve/position/power
//!   combinations instead of rejecting them
//! - **Deterministic key lookup**: exact table hits win over heuristics
//! - **Layered fallbacks**: wildcard keys, name scans, and an emergency
//!   table keep partial requests resolvable
//! - **Rated breaker matching**: parses ampere ranges out of catalog names
//!   and picks the nearest rating at or above the motor's draw
//! - **Partial results**: accessory misses become diagnostics, never
//!   failures
//!
//! ## Example
//!
//! ```rust,no_run
//! use shaft_solver::{CatalogIndex, RawRequest, ResolutionEngine};
//!
//! // Load the embedded parts catalog
//! let catalog = CatalogIndex::load_embedded().unwrap();
//!
//! // Decode a request
//! let request: RawRequest = serde_json::from_str(
//!     r#"{"shaft": "vbv", "diameter": 710, "valve": "pov",
//!         "valve_position": "niz", "motor": "6e", "membrane": true}"#,
//! )
//! .unwrap();
//!
//! // Resolve it
//! let engine = ResolutionEngine::new(&catalog);
//! let resolution = engine.resolve(&request);
//!
//! for line in &resolution.items {
//!     println!("{} x{}  {}", line.article, line.quantity, line.name);
//! }
//! for notice in &resolution.notices {
//!     println!("note: {notice}");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: parts catalog storage and indexing
//! - [`core`]: core data types for items, requests, parameters, and the BOM
//! - [`resolve`]: the resolution engine and its resolvers
//! - [`cli`]: command-line interface implementation
//! - [`web`]: web server for browser-based configuration

pub mod catalog;
pub mod cli;
pub mod core;
pub mod resolve;
pub mod web;

// Re-export commonly used types for convenience
pub use crate::catalog::store::CatalogIndex;
pub use crate::core::bom::{Bom, LineItem};
pub use crate::core::item::CatalogItem;
pub use crate::core::params::CanonicalParams;
pub use crate::core::request::RawRequest;
pub use crate::core::types::*;
pub use crate::resolve::{Resolution, ResolutionEngine};
