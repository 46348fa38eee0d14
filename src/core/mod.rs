//! Core data types for requests, parameters, catalog items, and the BOM.
//!
//! The types here are deliberately dumb: all validation and coercion lives
//! in [`crate::resolve::normalize`], all searching in [`crate::resolve`].

pub mod bom;
pub mod item;
pub mod params;
pub mod request;
pub mod types;
