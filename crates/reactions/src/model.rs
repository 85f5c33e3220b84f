//! Reaction models restricting which outcomes are considered
//!
//! Each model takes a set of reactants and gives the outcomes it allows as
//! bare (mass, charge) fragments. Models are pure functions of the reactants,
//! so the same instance can be shared freely between threads.

// internal modules
use crate::error::{Error, Result};
use crate::outcomes::{combined_numbers, expand, regular_outcomes, Fragment, Outcome};

// nreact crates
use nreact_nubase::Nuclide;

/// Common interface for every reaction model
pub trait ReactionModel {
    /// All outcomes the model allows for a set of reactants
    fn outcomes(&self, reactants: &[(u32, &Nuclide)]) -> Vec<Outcome>;
}

/// No restriction beyond conservation of mass and charge numbers
///
/// Every split of the combined reactants into up to three fragments.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegularModel;

impl ReactionModel for RegularModel {
    fn outcomes(&self, reactants: &[(u32, &Nuclide)]) -> Vec<Outcome> {
        regular_outcomes(reactants)
    }
}

/// Two nuclei exchanging a pion and immediately breaking up
///
/// Only defined for exactly two reactants, each of which must carry at least
/// one neutron. The channel is two exchange nucleons, `(1, 1)` each, and the
/// residual core `(A-1, Z-1)` of the combined system.
///
/// ```rust
/// # use nreact_nubase::Nuclides;
/// # use nreact_reactions::{PionExchangeAndDecayModel, ReactionModel};
/// let d = Nuclides::db().get("d", "0").unwrap();
/// let outcomes = PionExchangeAndDecayModel.outcomes(&[(1, d), (1, d)]);
/// assert_eq!(outcomes, vec![vec![(1, 1), (1, 1), (3, 1)]]);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct PionExchangeAndDecayModel;

impl ReactionModel for PionExchangeAndDecayModel {
    fn outcomes(&self, reactants: &[(u32, &Nuclide)]) -> Vec<Outcome> {
        pion_exchange(reactants, |n| neutrons(n) >= 1)
    }
}

/// Pion exchange where each reactant can both give and take a charge
///
/// As [PionExchangeAndDecayModel], but every reactant must also carry at least
/// one proton. A neutron can take part in the looser model, but not this one.
#[derive(Debug, Default, Clone, Copy)]
pub struct StrictPionExchangeModel;

impl ReactionModel for StrictPionExchangeModel {
    fn outcomes(&self, reactants: &[(u32, &Nuclide)]) -> Vec<Outcome> {
        pion_exchange(reactants, |n| neutrons(n) >= 1 && n.atomic_number >= 1)
    }
}

/// Alpha emission from a single parent nucleus
///
/// The only outcome is `(4, 2)` and the residual `(A-4, Z-2)`, provided there
/// is something left over.
#[derive(Debug, Default, Clone, Copy)]
pub struct InducedDecayModel;

impl ReactionModel for InducedDecayModel {
    fn outcomes(&self, reactants: &[(u32, &Nuclide)]) -> Vec<Outcome> {
        if expand(reactants).len() != 1 {
            return Vec::new();
        }

        let (a, z) = combined_numbers(reactants);
        match residual((a, z), (4, 2)) {
            Some(daughter) => vec![vec![(4, 2), daughter]],
            None => Vec::new(),
        }
    }
}

/// Selector for the available reaction models
///
/// Parsed from the model name:
///
/// | Name                   | Model                       |
/// | ---------------------- | --------------------------- |
/// | `regular`              | [RegularModel]              |
/// | `pion-exchange`        | [PionExchangeAndDecayModel] |
/// | `strict-pion-exchange` | [StrictPionExchangeModel]   |
/// | `induced-decay`        | [InducedDecayModel]         |
///
/// ```rust
/// # use nreact_reactions::Model;
/// let model: Model = "induced-decay".parse().unwrap();
/// assert_eq!(model, Model::InducedDecay);
/// assert!("pions".parse::<Model>().is_err());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Model {
    #[default]
    Regular,
    PionExchange,
    StrictPionExchange,
    InducedDecay,
}

impl Model {
    /// Names accepted when parsing a [Model]
    pub const NAMES: &'static [&'static str] = &[
        "regular",
        "pion-exchange",
        "strict-pion-exchange",
        "induced-decay",
    ];

    /// Name of the model
    pub fn name(&self) -> &'static str {
        match self {
            Model::Regular => Self::NAMES[0],
            Model::PionExchange => Self::NAMES[1],
            Model::StrictPionExchange => Self::NAMES[2],
            Model::InducedDecay => Self::NAMES[3],
        }
    }
}

impl ReactionModel for Model {
    fn outcomes(&self, reactants: &[(u32, &Nuclide)]) -> Vec<Outcome> {
        match self {
            Model::Regular => RegularModel.outcomes(reactants),
            Model::PionExchange => PionExchangeAndDecayModel.outcomes(reactants),
            Model::StrictPionExchange => StrictPionExchangeModel.outcomes(reactants),
            Model::InducedDecay => InducedDecayModel.outcomes(reactants),
        }
    }
}

impl std::str::FromStr for Model {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "regular" => Ok(Model::Regular),
            "pion-exchange" => Ok(Model::PionExchange),
            "strict-pion-exchange" => Ok(Model::StrictPionExchange),
            "induced-decay" => Ok(Model::InducedDecay),
            _ => Err(Error::UnknownModel {
                name: s.to_string(),
                expected: Self::NAMES,
            }),
        }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Shared pion exchange channel for two qualifying reactants
fn pion_exchange<F>(reactants: &[(u32, &Nuclide)], qualifies: F) -> Vec<Outcome>
where
    F: Fn(&Nuclide) -> bool,
{
    let nuclei = expand(reactants);
    if nuclei.len() != 2 || !nuclei.iter().all(|n| qualifies(*n)) {
        return Vec::new();
    }

    match residual(combined_numbers(reactants), (1, 1)) {
        Some(core) => {
            let mut outcome = vec![(1, 1), (1, 1), core];
            outcome.sort();
            vec![outcome]
        }
        None => Vec::new(),
    }
}

/// Whatever is left after removing a fragment, if it is a valid nucleus
fn residual((a, z): Fragment, (da, dz): Fragment) -> Option<Fragment> {
    let a = a.checked_sub(da).filter(|a| *a > 0)?;
    let z = z - dz;
    (z >= 0 && z as u32 <= a).then_some((a, z))
}

fn neutrons(nuclide: &Nuclide) -> i64 {
    nuclide.mass_number as i64 - nuclide.atomic_number as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use nreact_nubase::Nuclides;

    fn reactants<'a>(labels: &[&str], nuclides: &'a Nuclides) -> Vec<(u32, &'a Nuclide)> {
        labels
            .iter()
            .map(|l| (1, nuclides.get(l, "0").unwrap()))
            .collect()
    }

    #[test]
    fn strict_model_rejects_free_neutrons() {
        let nuclides = Nuclides::db();
        let n_d = reactants(&["n", "d"], nuclides);

        assert_eq!(
            PionExchangeAndDecayModel.outcomes(&n_d),
            vec![vec![(1, 1), (1, 1), (2, 0)]]
        );
        assert!(StrictPionExchangeModel.outcomes(&n_d).is_empty());
    }

    #[test]
    fn pion_exchange_needs_two_reactants() {
        let nuclides = Nuclides::db();
        let d_d_d = reactants(&["d", "d", "d"], nuclides);
        assert!(PionExchangeAndDecayModel.outcomes(&d_d_d).is_empty());

        let d = nuclides.get("d", "0").unwrap();
        assert_eq!(
            PionExchangeAndDecayModel.outcomes(&[(2, d)]),
            vec![vec![(1, 1), (1, 1), (3, 1)]]
        );
    }

    #[test]
    fn induced_decay_channel() {
        let nuclides = Nuclides::db();
        let pt = reactants(&["190Pt"], nuclides);
        assert_eq!(InducedDecayModel.outcomes(&pt), vec![vec![(4, 2), (186, 76)]]);

        // nothing left over
        let he = reactants(&["4He"], nuclides);
        assert!(InducedDecayModel.outcomes(&he).is_empty());

        let two = reactants(&["190Pt", "p"], nuclides);
        assert!(InducedDecayModel.outcomes(&two).is_empty());
    }

    #[test]
    fn model_names_round_trip() {
        for name in Model::NAMES {
            let model: Model = name.parse().unwrap();
            assert_eq!(model.to_string(), *name);
        }
    }
}
