//! Reaction spec mini-language
//!
//! A reaction spec is a `+` separated list of reactant slots. Each slot is
//! one of
//!
//! - a nuclide label, e.g. `p`, `7Li`, `190Pt`
//! - an element symbol, expanded into its isotopes, e.g. `Pt`
//! - the literal `all`, expanded into every nuclide in the store
//!
//! so `p+Li` is every combination of a proton with a lithium isotope.

// internal modules
use crate::elements::atomic_number_of;
use crate::error::{Error, Result};
use crate::{Nuclide, Nuclides};

// nreact crates
use nreact_format::capitalise;

// external crates
use itertools::Itertools;
use log::debug;

/// Parse a reaction spec into every combination of reactants
///
/// Each combination is a list of (multiplicity, nuclide) pairs, one per slot,
/// with a multiplicity of 1. When `unstable` is false, element symbols and
/// `all` only expand to naturally occurring ground states. Labels are always
/// taken as given.
///
/// ```rust
/// # use nreact_nubase::{parse_spec, Nuclides};
/// let combinations = parse_spec("p+Li", Nuclides::db(), false).unwrap();
///
/// // 6Li and 7Li are the only stable lithium isotopes
/// assert_eq!(combinations.len(), 2);
/// assert_eq!(combinations[0][1].1.label, "6Li");
/// ```
pub fn parse_spec<'a>(
    spec: &str,
    nuclides: &'a Nuclides,
    unstable: bool,
) -> Result<Vec<Vec<(u32, &'a Nuclide)>>> {
    let slots = spec
        .split('+')
        .map(|token| parse_slot(token.trim(), nuclides, unstable))
        .collect::<Result<Vec<Vec<&Nuclide>>>>()?;

    let combinations = slots
        .into_iter()
        .multi_cartesian_product()
        .map(|reactants| reactants.into_iter().map(|n| (1, n)).collect())
        .collect::<Vec<Vec<(u32, &Nuclide)>>>();

    debug!("\"{spec}\" expanded to {} combinations", combinations.len());
    Ok(combinations)
}

/// All the nuclides a single slot can stand for
fn parse_slot<'a>(token: &str, nuclides: &'a Nuclides, unstable: bool) -> Result<Vec<&'a Nuclide>> {
    if let Some(nuclide) = nuclides.get(token, "0") {
        return Ok(vec![nuclide]);
    }

    let include = |n: &&Nuclide| unstable || (n.is_stable && !n.is_excited);

    if token == "all" {
        return Ok(nuclides
            .iter()
            .filter(|n| !n.is_lepton())
            .filter(include)
            .collect());
    }

    let symbol = capitalise(token);
    match atomic_number_of(&symbol) {
        Some(z) => Ok(nuclides
            .atomic_number(z)
            .into_iter()
            .filter(include)
            .collect()),
        None => Err(Error::UnknownElement { symbol }),
    }
}
