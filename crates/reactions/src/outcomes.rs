//! Enumeration of candidate reaction outcomes
//!
//! Outcomes are first enumerated as bare (mass, charge) fragments, then
//! realised against a [Nuclides] store to find the real nuclides each
//! fragment could be.

// internal modules
use crate::partition::partitions3;

// nreact crates
use nreact_nubase::{Nuclide, Nuclides};

// external crates
use itertools::Itertools;
use log::trace;

/// A (mass number, charge number) pair
pub type Fragment = (u32, i32);

/// A multiset of fragments, sorted ascending
pub type Outcome = Vec<Fragment>;

/// Every distinct split of (A, Z) into up to three fragments
///
/// Mass and charge are partitioned independently and paired off. Empty
/// fragments are dropped, and any split with more charge than mass in a
/// fragment is rejected. Permutations of the same multiset are only listed
/// once, in order of first appearance.
///
/// ```rust
/// # use nreact_reactions::regular_combinations;
/// assert_eq!(
///     regular_combinations(2, 1),
///     vec![vec![(2, 1)], vec![(1, 0), (1, 1)]]
/// );
/// ```
pub fn regular_combinations(mass_number: u32, atomic_number: i32) -> Vec<Outcome> {
    let Ok(charge) = u32::try_from(atomic_number) else {
        return Vec::new();
    };

    let masses = partitions3(mass_number);
    let charges = partitions3(charge);

    masses
        .iter()
        .cartesian_product(charges.iter())
        .filter_map(|(m, z)| {
            let mut fragments = m
                .iter()
                .zip(z.iter())
                .filter(|(m, z)| **m > 0 || **z > 0)
                .map(|(m, z)| (*m, *z as i32))
                .collect::<Outcome>();

            if fragments.is_empty() || fragments.iter().any(|(m, z)| *z as u32 > *m) {
                return None;
            }

            fragments.sort();
            Some(fragments)
        })
        .unique()
        .collect()
}

/// Every distinct split of the combined reactants
///
/// Reactant numbers are weighted by multiplicity and combined before being
/// split with [regular_combinations()]. Nothing is checked against real
/// nuclides, see [realize()] for that.
///
/// ```rust
/// # use nreact_nubase::Nuclides;
/// # use nreact_reactions::regular_outcomes;
/// let nuclides = Nuclides::db();
/// let reactants = [
///     (1, nuclides.get("p", "0").unwrap()),
///     (1, nuclides.get("7Li", "0").unwrap()),
/// ];
///
/// let outcomes = regular_outcomes(&reactants);
/// assert_eq!(outcomes.len(), 42);
/// assert_eq!(outcomes[0], vec![(8, 4)]);
/// ```
pub fn regular_outcomes(reactants: &[(u32, &Nuclide)]) -> Vec<Outcome> {
    let (mass_number, atomic_number) = combined_numbers(reactants);
    regular_combinations(mass_number, atomic_number)
}

/// Total (A, Z) of a set of nuclides weighted by multiplicity
pub fn combined_numbers(nuclides: &[(u32, &Nuclide)]) -> Fragment {
    nuclides.iter().fold((0, 0), |(a, z), (count, n)| {
        (a + count * n.mass_number, z + *count as i32 * n.atomic_number)
    })
}

/// Every combination of real nuclides matching an outcome
///
/// Each fragment can be any nuclide with the same (A, Z), isomers included.
/// If any fragment has no match the outcome is not realisable and the result
/// is empty.
///
/// Identical nuclides are grouped into (multiplicity, nuclide) pairs, ordered
/// by mass number, and duplicate combinations are removed.
pub fn realize<'a>(outcome: &[Fragment], nuclides: &'a Nuclides) -> Vec<Vec<(u32, &'a Nuclide)>> {
    let candidates = outcome
        .iter()
        .map(|(a, z)| nuclides.isomers(*a, *z))
        .collect::<Vec<Vec<&Nuclide>>>();

    if candidates.iter().any(|c| c.is_empty()) {
        trace!("No nuclides for {outcome:?}");
        return Vec::new();
    }

    candidates
        .into_iter()
        .multi_cartesian_product()
        .map(group)
        .unique_by(|combination| {
            combination
                .iter()
                .map(|(count, n)| (*count, n.signature.clone()))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Collapse a list of nuclides into (multiplicity, nuclide) pairs
pub fn group(mut nuclides: Vec<&Nuclide>) -> Vec<(u32, &Nuclide)> {
    nuclides.sort_by(|a, b| {
        (a.mass_number, a.atomic_number, &a.signature).cmp(&(
            b.mass_number,
            b.atomic_number,
            &b.signature,
        ))
    });

    nuclides
        .into_iter()
        .dedup_by_with_count(|a, b| a.signature == b.signature)
        .map(|(count, n)| (count as u32, n))
        .collect()
}

/// Repeat each nuclide by its multiplicity
pub fn expand<'a>(nuclides: &[(u32, &'a Nuclide)]) -> Vec<&'a Nuclide> {
    nuclides
        .iter()
        .flat_map(|(count, n)| std::iter::repeat(*n).take(*count as usize))
        .collect()
}

/// Every nuclide that two reactants could fuse into
///
/// Only defined for exactly two reactant nuclides, counting multiplicity.
/// Returns the combined (A, Z) along with the matching nuclides, which may be
/// empty if nothing in the store has those numbers.
///
/// ```rust
/// # use nreact_nubase::Nuclides;
/// # use nreact_reactions::fusion_products;
/// let nuclides = Nuclides::db();
/// let reactants = [
///     (1, nuclides.get("p", "0").unwrap()),
///     (1, nuclides.get("7Li", "0").unwrap()),
/// ];
///
/// let (numbers, products) = fusion_products(&reactants, nuclides).unwrap();
/// assert_eq!(numbers, (8, 4));
/// assert_eq!(products[0].label, "8Be");
/// ```
pub fn fusion_products<'a>(
    reactants: &[(u32, &Nuclide)],
    nuclides: &'a Nuclides,
) -> Option<(Fragment, Vec<&'a Nuclide>)> {
    if expand(reactants).len() != 2 {
        return None;
    }

    let (a, z) = combined_numbers(reactants);
    Some(((a, z), nuclides.isomers(a, z)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_combinations() {
        assert_eq!(regular_combinations(1, 1), vec![vec![(1, 1)]]);
        assert_eq!(regular_combinations(0, 0), Vec::<Outcome>::new());
        assert!(regular_combinations(3, -1).is_empty());
    }

    #[test]
    fn combination_counts() {
        assert_eq!(regular_combinations(6, 3).len(), 19);
        assert_eq!(regular_combinations(8, 4).len(), 42);
    }

    #[test]
    fn combinations_conserve_numbers() {
        for outcome in regular_combinations(8, 4) {
            assert_eq!(outcome.iter().map(|(a, _)| a).sum::<u32>(), 8);
            assert_eq!(outcome.iter().map(|(_, z)| z).sum::<i32>(), 4);
            assert!(outcome.iter().all(|(a, z)| *z as u32 <= *a));
            assert!(outcome.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn combinations_are_unique() {
        let outcomes = regular_combinations(8, 4);
        let unique = outcomes.iter().unique().count();
        assert_eq!(unique, outcomes.len());
    }

    #[test]
    fn realize_groups_identical_nuclides() {
        let nuclides = Nuclides::db();
        let realised = realize(&[(4, 2), (4, 2)], nuclides);
        assert_eq!(realised.len(), 1);
        assert_eq!(realised[0].len(), 1);
        assert_eq!(realised[0][0].0, 2);
        assert_eq!(realised[0][0].1.label, "4He");
    }

    #[test]
    fn realize_includes_isomers() {
        let nuclides = Nuclides::db();
        let realised = realize(&[(4, 2), (191, 76)], nuclides);
        let labels = realised
            .iter()
            .map(|c| c[1].1.full_label.clone())
            .collect::<Vec<String>>();
        assert_eq!(labels, vec!["191Os", "191Os (1)"]);
    }

    #[test]
    fn realize_prunes_unknown_fragments() {
        let nuclides = Nuclides::db();
        assert!(realize(&[(4, 2), (2, 2)], nuclides).is_empty());
    }

    #[test]
    fn fusion_requires_two_reactants() {
        let nuclides = Nuclides::db();
        let d = nuclides.get("d", "0").unwrap();
        assert!(fusion_products(&[(1, d)], nuclides).is_none());
        assert!(fusion_products(&[(3, d)], nuclides).is_none());

        let (numbers, products) = fusion_products(&[(2, d)], nuclides).unwrap();
        assert_eq!(numbers, (4, 2));
        assert_eq!(products.len(), 1);
    }
}
