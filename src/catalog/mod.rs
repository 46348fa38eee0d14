//! Parts catalog storage and indexing.
//!
//! The catalog holds every purchasable item together with an optional direct
//! lookup table mapping configuration keys to articles. A default catalog is
//! compiled into the binary; custom catalogs can be loaded from JSON files.
//!
//! ## Example
//!
//! ```rust,no_run
//! use shaft_solver::CatalogIndex;
//!
//! let catalog = CatalogIndex::load_embedded().unwrap();
//! for item in catalog.items() {
//!     println!("{}  {}", item.article, item.name);
//! }
//! ```

pub mod store;
