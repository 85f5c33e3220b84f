//! Exponential decay of a quantity of nuclei

// nreact crates
use nreact_units::constants::AVOGADRO;
use nreact_units::{Energy, Power};

// external crates
use serde::{Deserialize, Serialize};

/// Decay kinetics for a quantity of a single isotope
///
/// All quantities are pure functions of the elapsed time, so calling them
/// repeatedly for the same time gives identical results.
///
/// ```rust
/// # use nreact_decay::IsotopicDecay;
/// # use nreact_units::Energy;
/// let decay = IsotopicDecay::new(1e-3, Energy::from_mev(5.0), 95, 0.0, 1.0);
///
/// assert_eq!(decay.remaining(0.0), decay.initial_atoms());
/// assert_eq!(decay.activity(10.0), 1e-3 * decay.remaining(10.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IsotopicDecay {
    /// Decay constant λ (s⁻¹)
    pub decay_constant: f64,
    /// Energy deposited per decay
    pub deposited_energy: Energy,
    /// Parent charge number
    pub atomic_number: i32,
    /// Parent natural abundance (%)
    pub isotopic_abundance: f64,
    initial_atoms: f64,
}

impl IsotopicDecay {
    /// Kinetics for `moles` of the parent
    pub fn new(
        decay_constant: f64,
        deposited_energy: Energy,
        atomic_number: i32,
        isotopic_abundance: f64,
        moles: f64,
    ) -> Self {
        Self {
            decay_constant,
            deposited_energy,
            atomic_number,
            isotopic_abundance,
            initial_atoms: moles * AVOGADRO,
        }
    }

    /// Number of parent atoms at `t = 0`
    pub fn initial_atoms(&self) -> f64 {
        self.initial_atoms
    }

    /// Parent atoms remaining after `seconds`, `N0·e^(−λt)`
    pub fn remaining(&self, seconds: f64) -> f64 {
        self.initial_atoms * (-self.decay_constant * seconds).exp()
    }

    /// Decays per second after `seconds`, `λ·N(t)`
    pub fn activity(&self, seconds: f64) -> f64 {
        self.decay_constant * self.remaining(seconds)
    }

    /// Power released after `seconds`
    pub fn power(&self, seconds: f64) -> Power {
        Power::from_watts(self.activity(seconds) * self.deposited_energy.joules())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn americium() -> IsotopicDecay {
        IsotopicDecay::new(5.8745267058e-11, Energy::from_mev(5.6377844), 95, 0.0, 1.0)
    }

    #[test]
    fn initial_atoms_from_moles() {
        assert_eq!(americium().initial_atoms(), 6.02214129e23);
        assert_eq!(americium().remaining(0.0), 6.02214129e23);
    }

    #[test]
    fn remaining_never_increases() {
        let decay = americium();
        let times = [0.0, 1.0, 100.0, 3.154e7, 1e10, 1e12, 1e20];
        for t in times.windows(2) {
            assert!(decay.remaining(t[1]) <= decay.remaining(t[0]));
        }
        assert_eq!(decay.remaining(1e20), 0.0);
    }

    #[test]
    fn activity_is_proportional_to_remaining() {
        let decay = americium();
        for t in [0.0, 1.0, 3.154e7, 1e12] {
            assert_eq!(decay.activity(t), decay.decay_constant * decay.remaining(t));
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let decay = americium();
        assert_eq!(decay.power(1.0), decay.power(1.0));
        assert_eq!(decay.activity(3.154e7), decay.activity(3.154e7));
    }

    #[test]
    fn americium_power() {
        let decay = americium();
        let expected = 31.955283773279884;
        assert!((decay.power(1.0).watts() - expected).abs() / expected < 1e-6);
    }
}
