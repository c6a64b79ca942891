//! Rule-based derivation and validation of Arabic triliteral verb forms.
//!
//! The engine is a pipeline of pure functions:
//!
//! - [`classifier`] -- assigns a root its structural [`VerbCategory`](sarf_core::enums::VerbCategory)
//! - [`stem`] -- substitutes the radicals into a pattern template
//! - [`transform`] -- rewrites the substituted stem for weak, glottal and doubled roots
//! - [`normalizer`] -- folds words to a comparison form
//! - [`validator`] -- checks a word by regenerating it under every pattern
//!
//! With the `store` feature, [`store`] adds the root index and pattern table
//! the engine reads from; `handle` adds the [`Morphology`] facade that owns
//! both.

pub mod classifier;
pub mod normalizer;
pub mod stem;
pub mod transform;
pub mod validator;

#[cfg(feature = "store")]
pub mod store;

#[cfg(feature = "handle")]
pub mod handle;

pub use classifier::classify;
pub use normalizer::{normalize, strip_diacritics};
pub use stem::substitute;
pub use transform::{generate, transform};
pub use validator::{Validation, validate};

#[cfg(feature = "handle")]
pub use handle::{Morphology, MorphologyError};
