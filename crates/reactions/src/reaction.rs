// internal modules
use crate::error::Result;
use crate::model::ReactionModel;
use crate::outcomes::{combined_numbers, expand, group, realize, Fragment};

// nreact crates
use nreact_format::f;
use nreact_nubase::{light_label, parse_spec, Nuclide, Nuclides, Signature};
use nreact_units::Energy;

// external crates
use itertools::Itertools;
use log::debug;
use std::collections::BTreeSet;

/// A set of reactants and the daughters they become
///
/// Nothing checks that the mass and charge numbers balance. Any pair of
/// nuclide sets can be held here, which is useful for comparing candidates,
/// and [is_balanced()](Reaction::is_balanced) is available if it matters.
///
/// ```rust
/// # use nreact_nubase::{Nuclides, Signature};
/// # use nreact_reactions::Reaction;
/// let reaction = Reaction::load(
///     &[(1, Signature::ground("p")), (1, Signature::ground("7Li"))],
///     &[(2, Signature::ground("4He"))],
///     Nuclides::db(),
/// )
/// .unwrap();
///
/// assert!((reaction.q_value().kev() - 17346.2443).abs() < 1e-9);
/// assert_eq!(reaction.to_string(), "p + 7Li → 2·4He (17346.2443 keV)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Reaction<'a> {
    reactants: Vec<(u32, &'a Nuclide)>,
    daughters: Vec<(u32, &'a Nuclide)>,
}

impl<'a> Reaction<'a> {
    /// Bind a set of reactants to a set of daughters
    pub fn new(reactants: Vec<(u32, &'a Nuclide)>, daughters: Vec<(u32, &'a Nuclide)>) -> Self {
        Self {
            reactants,
            daughters,
        }
    }

    /// Resolve (multiplicity, signature) pairs against a nuclide store
    ///
    /// Returns `None` if any signature is not in the store.
    pub fn load(
        reactants: &[(u32, Signature)],
        daughters: &[(u32, Signature)],
        nuclides: &'a Nuclides,
    ) -> Option<Self> {
        let resolve = |pairs: &[(u32, Signature)]| {
            pairs
                .iter()
                .map(|(count, s)| nuclides.signature(s).map(|n| (*count, n)))
                .collect::<Option<Vec<_>>>()
        };

        Some(Self::new(resolve(reactants)?, resolve(daughters)?))
    }

    /// Every reaction between two reaction specs
    ///
    /// Both sides are parsed with [parse_spec()], e.g. `"p+Li"` and
    /// `"4He+4He"`, and every combination is paired up. Identical nuclides on
    /// either side are grouped, so `4He+4He` becomes `2·4He`.
    pub fn from_spec(reactants: &str, daughters: &str, nuclides: &'a Nuclides) -> Result<Vec<Self>> {
        let reactants = parse_spec(reactants, nuclides, true)?;
        let daughters = parse_spec(daughters, nuclides, true)?;

        Ok(reactants
            .iter()
            .cartesian_product(daughters.iter())
            .map(|(r, d)| Self::new(group(expand(r)), group(expand(d))))
            .collect())
    }

    /// Every reaction a model allows for a set of reactants
    ///
    /// Model outcomes are realised against the store, so each outcome can
    /// give several reactions when isomers are involved, or none at all.
    pub fn enumerate<M: ReactionModel>(
        reactants: &[(u32, &'a Nuclide)],
        model: &M,
        nuclides: &'a Nuclides,
    ) -> Vec<Self> {
        let reactions = model
            .outcomes(reactants)
            .iter()
            .flat_map(|outcome| Self::from_outcome(reactants, outcome, nuclides))
            .collect::<Vec<Self>>();

        debug!(
            "{} reactions for {}",
            reactions.len(),
            describe(reactants)
        );
        reactions
    }

    /// Every reaction from the reactants to real nuclides matching an outcome
    pub fn from_outcome(
        reactants: &[(u32, &'a Nuclide)],
        outcome: &[Fragment],
        nuclides: &'a Nuclides,
    ) -> Vec<Self> {
        realize(outcome, nuclides)
            .into_iter()
            .map(|daughters| Self::new(reactants.to_vec(), daughters))
            .collect()
    }

    /// Reactants as (multiplicity, nuclide) pairs
    pub fn reactants(&self) -> &[(u32, &'a Nuclide)] {
        &self.reactants
    }

    /// Daughters as (multiplicity, nuclide) pairs
    pub fn daughters(&self) -> &[(u32, &'a Nuclide)] {
        &self.daughters
    }

    /// Energy released by the reaction
    ///
    /// The difference in total mass excess between reactants and daughters.
    /// Negative for endothermic reactions, which is not an error.
    pub fn q_value(&self) -> Energy {
        Energy::from_kev(mass_excess(&self.reactants) - mass_excess(&self.daughters))
    }

    /// True if mass and charge numbers are conserved
    pub fn is_balanced(&self) -> bool {
        combined_numbers(&self.reactants) == combined_numbers(&self.daughters)
    }

    /// Notable features of the daughters
    ///
    /// - Decay arrows of every daughter, e.g. `→α`, `→β-`
    /// - Light fragment labels, `n`, `p`, `d`, `t`, `3He`, `α`
    /// - `e-` and `νe` for leptons
    /// - `stable` if every daughter is stable and not excited
    /// - `n-transfer` if a single neutron moves between two nuclei
    pub fn notes(&self) -> BTreeSet<String> {
        let daughters = expand(&self.daughters);

        let mut notes = daughters
            .iter()
            .flat_map(|n| n.notes.iter().cloned().chain(light_label(n).map(String::from)))
            .collect::<BTreeSet<String>>();

        if !daughters.is_empty() && daughters.iter().all(|n| n.is_stable && !n.is_excited) {
            notes.insert("stable".to_string());
        }

        if is_neutron_transfer(&expand(&self.reactants), &daughters) {
            notes.insert("n-transfer".to_string());
        }

        notes
    }
}

impl std::fmt::Display for Reaction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} → {} ({})",
            describe(&self.reactants),
            describe(&self.daughters),
            self.q_value()
        )
    }
}

/// Total mass excess in keV, weighted by multiplicity
fn mass_excess(nuclides: &[(u32, &Nuclide)]) -> f64 {
    nuclides
        .iter()
        .fold(0.0, |total, (count, n)| total + *count as f64 * n.mass_excess)
}

/// Text such as `p + 2·4He`
fn describe(nuclides: &[(u32, &Nuclide)]) -> String {
    nuclides
        .iter()
        .map(|(count, n)| match count {
            1 => n.full_label.clone(),
            _ => f!("{count}·{}", n.full_label),
        })
        .join(" + ")
}

/// Two nuclei in, two out, one gaining and one losing a single nucleon of
/// the same element
fn is_neutron_transfer(reactants: &[&Nuclide], daughters: &[&Nuclide]) -> bool {
    if reactants.len() != 2 || daughters.len() != 2 {
        return false;
    }

    let sorted = |nuclides: &[&Nuclide]| {
        nuclides
            .iter()
            .map(|n| (n.atomic_number, n.mass_number as i64))
            .sorted()
            .collect::<Vec<(i32, i64)>>()
    };

    let before = sorted(reactants);
    let after = sorted(daughters);

    if before.iter().map(|(z, _)| z).ne(after.iter().map(|(z, _)| z)) {
        return false;
    }

    let shifts = before
        .iter()
        .zip(after.iter())
        .map(|((_, a0), (_, a1))| a1 - a0)
        .sorted()
        .collect::<Vec<i64>>();

    shifts == [-1, 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reaction<'a>(reactants: &str, daughters: &str, nuclides: &'a Nuclides) -> Reaction<'a> {
        Reaction::from_spec(reactants, daughters, nuclides)
            .unwrap()
            .remove(0)
    }

    #[test]
    fn q_value_is_antisymmetric() {
        let nuclides = Nuclides::db();
        let forward = reaction("p+7Li", "4He+4He", nuclides);
        let reverse = reaction("4He+4He", "p+7Li", nuclides);
        assert_eq!(forward.q_value().kev(), -reverse.q_value().kev());
    }

    #[test]
    fn endothermic_reactions_are_valid() {
        let nuclides = Nuclides::db();
        let r = reaction("4He+4He", "p+7Li", nuclides);
        assert!(r.q_value().kev() < 0.0);
        assert!(r.is_balanced());
    }

    #[test]
    fn unbalanced_reactions_can_be_held() {
        let nuclides = Nuclides::db();
        let r = reaction("7Li+60Ni", "t+t", nuclides);
        assert!(!r.is_balanced());
    }

    #[test]
    fn grouped_display() {
        let nuclides = Nuclides::db();
        let r = reaction("6Li+6Li", "4He+4He+4He", nuclides);
        assert_eq!(r.daughters().len(), 1);
        assert_eq!(r.daughters()[0].0, 3);
        assert!(r.to_string().starts_with("2·6Li → 3·4He"));
    }

    #[test]
    fn missing_signature_is_absent() {
        let nuclides = Nuclides::db();
        let r = Reaction::load(
            &[(1, Signature::ground("p"))],
            &[(1, Signature::new("4He", "3"))],
            nuclides,
        );
        assert!(r.is_none());
    }

    #[test]
    fn same_element_neutron_transfer() {
        let nuclides = Nuclides::db();
        let r = reaction("6Li+6Li", "5Li+7Li", nuclides);
        assert!(r.notes().contains("n-transfer"));
    }
}
