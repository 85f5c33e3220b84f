//! Alpha decay rates and kinetics for isotopes and elements
//!
//! Two-body decays found by a reaction model are run through a simple barrier
//! penetration model to estimate decay constants, which then drive the
//! exponential decay of a quantity of material.
//!
//! - [CoulombBarrier], [AlphaCandidate], and [Metric] for quick estimates
//! - [IsotopicAlphaDecay] for the full barrier penetration detail
//! - [IsotopicDecay] for atoms, activity, and power over time
//! - [System] and [AlphaDecayScenario] for whole elements
//!
//! For example, a mole of natural platinum with a large electron screening
//! offset:
//!
//! ```rust
//! # use nreact_nubase::Nuclides;
//! # use nreact_reactions::Model;
//! # use nreact_decay::{AlphaDecayScenario, DecayConfig};
//! let config = DecayConfig::default().with_screening(11.0);
//! let scenario =
//!     AlphaDecayScenario::load("Pt", Model::InducedDecay, Nuclides::db(), &config).unwrap();
//!
//! // one row for each stable isotope
//! assert_eq!(scenario.rows().count(), 6);
//!
//! let activity = scenario.activity();
//! assert!((activity - 115955233.71509394).abs() / 115955233.71509394 < 1e-6);
//! ```
//!
//! Scenario options can also be read from a JSON file with [read_config()].
//! Options that are left out take their default values.

// Modules
mod calculations;
mod config;
mod error;
mod kinetics;
mod system;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use calculations::{AlphaCandidate, CoulombBarrier, IsotopicAlphaDecay, Metric};

#[doc(inline)]
pub use config::{read_config, DecayConfig};

#[doc(inline)]
pub use kinetics::IsotopicDecay;

#[doc(inline)]
pub use system::{AlphaDecayScenario, DecayRow, System};
