//! `swn-random` — degree-matched random null models.
//!
//! Builds a disposable random directed graph whose expected in/out-degree
//! distribution matches an observed graph's mean degrees, via independent
//! Poisson draws per vertex.  Used strictly for the small-world comparison:
//! observed clustering ≫ random clustering while observed path length ≈
//! random path length is the signature the analysis looks for.
//!
//! # Usage
//!
//! ```rust,ignore
//! use swn_random::{generate, NullModelConfig, RandomGraphSpec};
//!
//! let spec = RandomGraphSpec::from_graph(&observed);
//! let random = generate(&spec, &NullModelConfig::default())?;
//! ```

pub mod error;
pub mod generator;
pub mod spec;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RandomError, RandomResult};
pub use generator::{generate, NullModelConfig};
pub use spec::RandomGraphSpec;
