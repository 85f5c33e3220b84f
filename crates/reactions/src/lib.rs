//! Enumerate the outcomes of nuclear reactions
//!
//! Reactions are built up in stages:
//!
//! 1. [partitions()] splits conserved totals into ordered parts
//! 2. [regular_combinations()] pairs mass and charge partitions into
//!    distinct sets of (A, Z) fragments
//! 3. A [ReactionModel] restricts the fragments to a physical hypothesis
//! 4. [realize()] finds the real nuclides for each fragment
//! 5. A [Reaction] binds reactants to daughters for Q-values and notes
//!
//! For example, everything that a proton and lithium-7 could become:
//!
//! ```rust
//! # use nreact_nubase::Nuclides;
//! # use nreact_reactions::{Model, Reaction};
//! let nuclides = Nuclides::db();
//! let reactants = [
//!     (1, nuclides.get("p", "0").unwrap()),
//!     (1, nuclides.get("7Li", "0").unwrap()),
//! ];
//!
//! let reactions = Reaction::enumerate(&reactants, &Model::Regular, nuclides);
//!
//! // Alpha pair production is one of the exothermic channels
//! let alphas = reactions
//!     .iter()
//!     .find(|r| r.to_string().starts_with("p + 7Li → 2·4He"))
//!     .unwrap();
//!
//! assert!(alphas.q_value().mev() > 17.0);
//! assert!(alphas.notes().contains("α"));
//! ```
//!
//! ## Models
//!
//! | Model                       | Outcomes                                       |
//! | --------------------------- | ---------------------------------------------- |
//! | [RegularModel]              | Any split into up to three fragments          |
//! | [PionExchangeAndDecayModel] | Two exchange nucleons and a residual core     |
//! | [StrictPionExchangeModel]   | As above, both reactants need a proton         |
//! | [InducedDecayModel]         | Alpha emission from a single parent            |
//!
//! The [Model] enum selects between them by name.

// Modules
mod error;
mod model;
mod outcomes;
mod partition;
mod reaction;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use partition::{partitions, partitions3};

#[doc(inline)]
pub use outcomes::{
    combined_numbers, expand, fusion_products, group, realize, regular_combinations,
    regular_outcomes, Fragment, Outcome,
};

#[doc(inline)]
pub use model::{
    InducedDecayModel, Model, PionExchangeAndDecayModel, ReactionModel, RegularModel,
    StrictPionExchangeModel,
};

#[doc(inline)]
pub use reaction::Reaction;
