//! Barrier penetration calculations for two-body decays
//!
//! Every calculation works from an [AlphaCandidate], a parent nucleus that
//! splits into a smaller and a larger daughter with some Q-value. The smaller
//! daughter is usually, but not necessarily, an alpha particle.
//!
//! Unphysical inputs such as a negative Q-value never fail. They give
//! `f64::NAN` so that they can be filtered out later.

// internal modules
use crate::kinetics::IsotopicDecay;

// nreact crates
use nreact_nubase::Nuclide;
use nreact_reactions::{expand, Reaction};
use nreact_units::constants::{COULOMB_MEV_FM, HBARC_MEV_FM, HBAR_MEV_PS, LN2, SPEED_OF_LIGHT};
use nreact_units::{Distance, Energy, HalfLife};

// external crates
use serde::{Deserialize, Serialize};

/// Coulomb barrier between two nuclei
///
/// ```rust
/// # use nreact_nubase::Nuclides;
/// # use nreact_decay::CoulombBarrier;
/// # use nreact_units::{Distance, Energy};
/// let nuclides = Nuclides::db();
/// let barrier = CoulombBarrier::new(
///     nuclides.get("4He", "0").unwrap(),
///     nuclides.get("208Pb", "0").unwrap(),
/// );
///
/// let height = barrier.height(Distance::from_fermis(1.0));
/// assert!((height.kev() - 236156.064).abs() < 1e-6);
///
/// let width = barrier.width(Energy::from_mev(6.0));
/// assert!((width.fermis() - 39.359344).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoulombBarrier {
    base: f64,
}

impl CoulombBarrier {
    /// Barrier between any two nuclides
    pub fn new(n0: &Nuclide, n1: &Nuclide) -> Self {
        Self {
            base: COULOMB_MEV_FM * n0.atomic_number as f64 * n1.atomic_number as f64,
        }
    }

    /// Barrier height at a separation `radius`
    pub fn height(&self, radius: Distance) -> Energy {
        Energy::from_mev(self.base / radius.fermis())
    }

    /// Classical turning point for an energy `q_value`
    pub fn width(&self, q_value: Energy) -> Distance {
        Distance::from_fermis(self.base / q_value.mev())
    }
}

/// A parent splitting into two daughters
///
/// The daughters are ordered by mass number, so `smaller` is the alpha
/// particle for alpha decay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaCandidate<'a> {
    pub parent: &'a Nuclide,
    pub smaller: &'a Nuclide,
    pub larger: &'a Nuclide,
    pub q_value: Energy,
}

impl<'a> AlphaCandidate<'a> {
    /// Candidate from explicit nuclides, daughters in any order
    pub fn new(parent: &'a Nuclide, daughters: (&'a Nuclide, &'a Nuclide), q_value: Energy) -> Self {
        let (smaller, larger) = ordered(daughters.0, daughters.1);
        Self {
            parent,
            smaller,
            larger,
            q_value,
        }
    }

    /// Candidate for a reaction with one reactant and two daughters
    ///
    /// Any other reaction is not a two-body decay, and gives `None`.
    pub fn from_reaction(reaction: &Reaction<'a>) -> Option<Self> {
        let parents = expand(reaction.reactants());
        let daughters = expand(reaction.daughters());

        match (parents.as_slice(), daughters.as_slice()) {
            ([parent], [d0, d1]) => Some(Self::new(parent, (d0, d1), reaction.q_value())),
            _ => None,
        }
    }

    /// Shorthand for [Metric::GeigerNuttall]
    pub fn geiger_nuttall(&self) -> f64 {
        Metric::GeigerNuttall.value(self)
    }

    /// Shorthand for [Metric::Gamow2]
    pub fn gamow2(&self) -> f64 {
        Metric::Gamow2.value(self)
    }

    /// Shorthand for [Metric::GamowSuppression]
    pub fn gamow_suppression(&self) -> f64 {
        Metric::GamowSuppression.value(self)
    }
}

/// Decay rate metrics for an [AlphaCandidate]
///
/// | Metric             | Description                                    |
/// | ------------------ | ---------------------------------------------- |
/// | `GeigerNuttall`    | Empirical log half-life correlation            |
/// | `Gamow2`           | WKB tunneling integral through the barrier     |
/// | `GamowSuppression` | Gamow suppression in log10 units               |
///
/// ```rust
/// # use nreact_nubase::{Nuclides, Signature};
/// # use nreact_reactions::Reaction;
/// # use nreact_decay::{AlphaCandidate, Metric};
/// let reaction = Reaction::load(
///     &[(1, Signature::ground("185Re"))],
///     &[(1, Signature::ground("4He")), (1, Signature::ground("181Ta"))],
///     Nuclides::db(),
/// )
/// .unwrap();
///
/// let candidate = AlphaCandidate::from_reaction(&reaction).unwrap();
/// assert_eq!(Metric::GeigerNuttall.value(&candidate) as i32, 24);
/// assert_eq!(Metric::GamowSuppression.value(&candidate) as i32, 52);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    GeigerNuttall,
    Gamow2,
    GamowSuppression,
}

impl Metric {
    /// Evaluate the metric for a candidate
    pub fn value(&self, candidate: &AlphaCandidate) -> f64 {
        match self {
            Metric::GeigerNuttall => geiger_nuttall(candidate),
            Metric::Gamow2 => gamow2(candidate),
            Metric::GamowSuppression => gamow_suppression(candidate),
        }
    }
}

fn geiger_nuttall(c: &AlphaCandidate) -> f64 {
    -46.83 + 1.454 * c.larger.atomic_number as f64 / c.q_value.mev().sqrt()
}

fn gamow2(c: &AlphaCandidate) -> f64 {
    let q = c.q_value.mev();
    if q <= 0.0 {
        return f64::NAN;
    }

    let width = CoulombBarrier::new(c.smaller, c.larger).width(c.q_value);
    let x = q / width.fermis();
    let t0 = (2.0 * c.smaller.mass().mev() / (HBAR_MEV_PS.powi(2) * q)).sqrt();
    let t1 = (c.smaller.atomic_number * c.larger.atomic_number) as f64 * COULOMB_MEV_FM;
    t0 * t1 * wkb(x)
}

fn gamow_suppression(c: &AlphaCandidate) -> f64 {
    let q = c.q_value.mev();
    if q < 0.0 {
        return f64::NAN;
    }

    let (a, z) = (c.larger.mass_number as f64, c.larger.atomic_number as f64);
    let (a4, z4) = (c.smaller.mass_number as f64, c.smaller.atomic_number as f64);

    // touching spheres, and the classical turning point, in fm
    let rs = 1.1 * (a.powf(0.333333) + a4.powf(0.333333));
    let rc = z * z4 * 1.43998 / q;
    let r = rs / rc;

    let g = match r >= 1.0 {
        true => 0.0,
        false => wkb(r),
    };

    let m = a * a4 / (a + a4);
    0.2708122 * z * z4 * g * (m / q).sqrt()
}

/// The `acos(√x) − √(x(1−x))` part of the WKB integral
///
/// Only defined for `0 ≤ x ≤ 1`.
fn wkb(x: f64) -> f64 {
    if !(0.0..=1.0).contains(&x) {
        return f64::NAN;
    }
    x.sqrt().acos() - (x * (1.0 - x)).sqrt()
}

/// Daughters ordered by mass number, then charge
fn ordered<'a>(d0: &'a Nuclide, d1: &'a Nuclide) -> (&'a Nuclide, &'a Nuclide) {
    match (d0.mass_number, d0.atomic_number) <= (d1.mass_number, d1.atomic_number) {
        true => (d0, d1),
        false => (d1, d0),
    }
}

/// Alpha decay rate from barrier penetration
///
/// A simple one-body model: the alpha particle rattles around inside the
/// nucleus, hitting the barrier at the assault frequency, and tunnels through
/// with a WKB probability. The charge of the larger daughter may be reduced by
/// an electron screening offset.
///
/// Everything is calculated once on construction.
///
/// ```rust
/// # use nreact_nubase::{Nuclides, Signature};
/// # use nreact_reactions::Reaction;
/// # use nreact_decay::{AlphaCandidate, IsotopicAlphaDecay};
/// let reaction = Reaction::load(
///     &[(1, Signature::ground("212Po"))],
///     &[(1, Signature::ground("4He")), (1, Signature::ground("208Pb"))],
///     Nuclides::db(),
/// )
/// .unwrap();
///
/// let candidate = AlphaCandidate::from_reaction(&reaction).unwrap();
/// let decay = IsotopicAlphaDecay::new(&candidate, 0.0);
///
/// assert!((decay.nuclear_separation.fermis() - 9.014871826539528).abs() < 1e-9);
/// assert!((decay.barrier_height.mev() - 26.1967118938676).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IsotopicAlphaDecay {
    /// Parent charge number
    pub parent_z: i32,
    /// Parent natural abundance (%)
    pub parent_abundance: f64,
    /// Energy released per decay
    pub q_value: Energy,
    /// Charge of the larger daughter after screening
    pub screened_z: f64,
    /// Mass of the smaller daughter (MeV)
    pub alpha_mass: f64,
    /// Mass of the larger daughter (MeV)
    pub daughter_mass: f64,
    /// Share of the Q-value carried by the smaller daughter
    pub alpha_energy: Energy,
    /// Distance between the daughter surfaces
    pub nuclear_separation: Distance,
    /// Coulomb barrier at the nuclear separation
    pub barrier_height: Energy,
    /// Non-relativistic velocity of the smaller daughter (m/s)
    pub alpha_velocity: f64,
    /// Rate of collisions with the barrier (s⁻¹)
    pub assault_frequency: f64,
    /// Exponent of the WKB tunneling probability
    pub gamow_factor: f64,
    /// Probability of tunneling per collision
    pub tunneling_probability: f64,
    /// Decay constant λ (s⁻¹)
    pub decay_constant: f64,
}

impl IsotopicAlphaDecay {
    /// Run the calculation for a candidate and electron screening offset
    pub fn new(candidate: &AlphaCandidate, screening: f64) -> Self {
        let AlphaCandidate {
            parent,
            smaller,
            larger,
            q_value,
        } = *candidate;

        let alpha_mass = smaller.mass().mev();
        let daughter_mass = larger.mass().mev();
        let screened_z = larger.atomic_number as f64 - screening;

        // Ea = Q / (1 + m/M)
        let ea = q_value.mev() / (1.0 + alpha_mass / daughter_mass);

        let separation = 1.2
            * ((smaller.mass_number as f64).powf(1.0 / 3.0)
                + (larger.mass_number as f64).powf(1.0 / 3.0));

        let barrier_height = 2.0 * screened_z * 1.44 / separation;
        let alpha_velocity = (2.0 * ea / alpha_mass).sqrt() * SPEED_OF_LIGHT;
        let assault_frequency = alpha_velocity * 1e15 / (2.0 * separation);

        let x = ea / barrier_height;
        let ph = (2.0 * alpha_mass / (HBARC_MEV_FM.powi(2) * ea)).sqrt();
        let gamow_factor = ph * 2.0 * screened_z * 1.44 * wkb(x);

        let tunneling_probability = (-2.0 * gamow_factor).exp();

        Self {
            parent_z: parent.atomic_number,
            parent_abundance: parent.isotopic_abundance,
            q_value,
            screened_z,
            alpha_mass,
            daughter_mass,
            alpha_energy: Energy::from_mev(ea),
            nuclear_separation: Distance::from_fermis(separation),
            barrier_height: Energy::from_mev(barrier_height),
            alpha_velocity,
            assault_frequency,
            gamow_factor,
            tunneling_probability,
            decay_constant: tunneling_probability * assault_frequency,
        }
    }

    /// Half-life in seconds, `0.693 / λ`
    pub fn half_life(&self) -> HalfLife {
        HalfLife::from_seconds(LN2 / self.decay_constant)
    }

    /// Alpha velocity as a fraction of the speed of light
    pub fn v_over_c(&self) -> f64 {
        self.alpha_velocity / SPEED_OF_LIGHT
    }

    /// Separation at which the barrier height equals the alpha energy
    pub fn radius_for_alpha_energy(&self) -> Distance {
        Distance::from_fermis(2.0 * self.screened_z * 1.44 / self.alpha_energy.mev())
    }

    /// Distance the alpha has to tunnel through
    pub fn barrier_width(&self) -> Distance {
        Distance::from_fermis(
            self.radius_for_alpha_energy().fermis() - self.nuclear_separation.fermis(),
        )
    }

    /// Decay kinetics for a quantity of the parent
    pub fn decay(&self, moles: f64) -> IsotopicDecay {
        IsotopicDecay::new(
            self.decay_constant,
            self.q_value,
            self.parent_z,
            self.parent_abundance,
            moles,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nreact_nubase::{Nuclides, Signature};

    fn candidate<'a>(parent: &str, daughter: &str, nuclides: &'a Nuclides) -> AlphaCandidate<'a> {
        let reaction = Reaction::load(
            &[(1, Signature::ground(parent))],
            &[(1, Signature::ground(daughter)), (1, Signature::ground("4He"))],
            nuclides,
        )
        .unwrap();
        AlphaCandidate::from_reaction(&reaction).unwrap()
    }

    #[test]
    fn daughters_are_ordered() {
        let c = candidate("190Pt", "186Os", Nuclides::db());
        assert_eq!(c.smaller.label, "4He");
        assert_eq!(c.larger.label, "186Os");
        assert_eq!(c.parent.label, "190Pt");
    }

    #[test]
    fn only_two_body_decays() {
        let nuclides = Nuclides::db();
        let reaction = Reaction::load(
            &[(1, Signature::ground("p")), (1, Signature::ground("7Li"))],
            &[(2, Signature::ground("4He"))],
            nuclides,
        )
        .unwrap();
        assert!(AlphaCandidate::from_reaction(&reaction).is_none());
    }

    #[test]
    fn wkb_domain() {
        assert_eq!(wkb(1.0), 0.0);
        assert!((wkb(0.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
        assert!(wkb(-0.1).is_nan());
        assert!(wkb(1.1).is_nan());
    }

    #[test]
    fn gamow2_requires_positive_q() {
        let c = candidate("58Fe", "54Cr", Nuclides::db());
        assert!(c.q_value.kev() < 0.0);
        assert!(c.gamow2().is_nan());
    }

    #[test]
    fn suppression_vanishes_without_barrier() {
        let nuclides = Nuclides::db();
        let mut c = candidate("212Po", "208Pb", nuclides);
        c.q_value = Energy::from_mev(1000.0);
        assert_eq!(c.gamow_suppression(), 0.0);
    }

    #[test]
    fn polonium_barrier_detail() {
        let c = candidate("212Po", "208Pb", Nuclides::db());
        let decay = IsotopicAlphaDecay::new(&c, 0.0);

        assert!((decay.alpha_energy.mev() - 8.78).abs() / 8.78 < 1e-3);
        assert!((decay.radius_for_alpha_energy().fermis() - 26.89749430523918).abs() < 0.03);
        assert!((decay.barrier_width().fermis() - 17.882622478699652).abs() < 0.02);
        assert!((decay.v_over_c() - 0.068648).abs() / 0.068648 < 1e-5);
        assert!((decay.assault_frequency - 1.142126641655716e21).abs() / 1.142126641655716e21 < 1e-3);
    }

    #[test]
    fn screening_lowers_the_barrier() {
        let c = candidate("190Pt", "186Os", Nuclides::db());
        let bare = IsotopicAlphaDecay::new(&c, 0.0);
        let screened = IsotopicAlphaDecay::new(&c, 11.0);

        assert_eq!(screened.screened_z, 65.0);
        assert!(screened.barrier_height.mev() < bare.barrier_height.mev());
        assert!(screened.decay_constant > bare.decay_constant);
    }
}
