//! Web server for browser-based shaft configuration.
//!
//! Serves a single embedded form page and two JSON endpoints:
//!
//! - `POST /api/select` — resolve a request into `{results, message?}`
//! - `GET /api/options` — enumerate selectable shaft kinds, diameters,
//!   and the valve kinds admissible for a shaft kind
//!
//! The catalog is loaded once into shared state; resolution itself is a
//! pure read, so requests need no coordination.

pub mod server;
