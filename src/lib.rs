#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of workspace crates.
#[doc(inline)]
pub use ripl_support as support;

#[cfg(feature = "levels")]
#[cfg_attr(docsrs, doc(cfg(feature = "levels")))]
#[doc(inline)]
pub use ripl_levels as levels;

#[cfg(feature = "mass")]
#[cfg_attr(docsrs, doc(cfg(feature = "mass")))]
#[doc(inline)]
pub use ripl_mass as mass;
