//! # vitrine-domain
//!
//! Pure domain model for the vitrine page behaviors.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, validation
//! - Define the **Theme** preference and how a stored value resolves
//! - Define portfolio **Categories** and **Filter selections**
//! - Define the **Settings** that describe the markup contract (ids, classes,
//!   data attributes, visual markers) and the transition timings
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod filter;
pub mod settings;
pub mod theme;
