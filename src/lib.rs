//! `nreact` is a modular toolkit for enumerating nuclear reaction outcomes and
//! estimating alpha decay kinetics
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use nreact_format as format;

#[doc(inline)]
pub use nreact_units as units;

#[cfg(feature = "nubase")]
#[cfg_attr(docsrs, doc(cfg(feature = "nubase")))]
#[doc(inline)]
pub use nreact_nubase as nubase;

#[cfg(feature = "reactions")]
#[cfg_attr(docsrs, doc(cfg(feature = "reactions")))]
#[doc(inline)]
pub use nreact_reactions as reactions;

#[cfg(feature = "decay")]
#[cfg_attr(docsrs, doc(cfg(feature = "decay")))]
#[doc(inline)]
pub use nreact_decay as decay;
