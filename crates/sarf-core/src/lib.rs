//! Shared types for Arabic root-and-pattern morphology.
//!
//! - [`character`] -- Arabic letter constants and classification
//! - [`root`] -- the validated triliteral [`Root`](root::Root)
//! - [`enums`] -- [`VerbCategory`](enums::VerbCategory) and [`PatternClass`](enums::PatternClass)
//! - [`pattern`] -- pattern records and shape-based class inference
//! - [`derivation`] -- derivation history records

pub mod character;
pub mod derivation;
pub mod enums;
pub mod pattern;
pub mod root;
