//! Nuclide data from the NUBASE evaluation
//!
//! Parses the fixed-width NUBASE table into immutable [Nuclide] records and
//! serves lookups through a read-only [Nuclides] store.
//!
//! A curated subset of NUBASE2012 is bundled with the crate and parsed once on
//! first use with [Nuclides::db()]. Other tables can be loaded explicitly.
//!
//! ```rust
//! # use nreact_nubase::Nuclides;
//! let nuclides = Nuclides::db();
//!
//! let alpha = nuclides.get("4He", "0").unwrap();
//! assert_eq!(alpha.numbers(), (4, 2));
//! assert!(alpha.is_stable);
//! ```
//!
//! ## Records
//!
//! Every row gives a label, the (A, Z) numbers, mass excess, half-life,
//! spin-parity, natural abundance and decay modes. Some labels are replaced by
//! their common names (`1H` is `p`, `2H` is `d`, `3H` is `t`, `1 n` is `n`).
//!
//! Isomers are keyed by the NUBASE isomer index, so the first isomer of
//! Os-191 is found with the signature `("191Os", "1")`.
//!
//! ```rust
//! # use nreact_nubase::Nuclides;
//! let os = Nuclides::db().get("191Os", "1").unwrap();
//! assert_eq!(os.full_label, "191Os (1)");
//! assert!(os.is_excited);
//! ```
//!
//! The decay modes are also kept as arrow notation for reaction notes, e.g.
//! `A=100` is `→α` and `EC=100` is `→ε`.
//!
//! ## Reaction specs
//!
//! Reactants are given as `+` separated labels or element symbols, and
//! [parse_spec()] expands them into every combination of nuclides.

// Modules
pub mod elements;
mod error;
mod nuclide;
mod nuclides;
mod parsers;
mod spec;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use nuclide::{light_label, Nuclide, Signature};

#[doc(inline)]
pub use nuclides::Nuclides;

#[doc(inline)]
pub use spec::parse_spec;
