//! Physical unit wrappers for nuclear reaction calculations
//!
//! Thin wrappers around `f64` that only exist to make the unit of a value
//! explicit at API boundaries. There is no dimensional analysis here, just
//! conversions.
//!
//! - [Energy] stored in keV, with MeV and Joule accessors
//! - [Distance] in fermis
//! - [Power] in watts
//! - [HalfLife] as recorded in a nuclear data table, value and unit
//!
//! The [constants] module collects every physical constant used by the
//! reaction and decay calculations so that they are defined exactly once.
//!
//! ```rust
//! # use nreact_units::Energy;
//! let q_value = Energy::from_mev(6.0);
//! assert_eq!(q_value.kev(), 6000.0);
//! ```

pub mod constants;
mod error;

#[doc(inline)]
pub use error::{Error, Result};

use nreact_format::{f, NumFormat};
use serde::{Deserialize, Serialize};

use constants::JOULES_PER_MEV;

/// Energy, stored internally in keV
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Energy {
    kev: f64,
}

impl Energy {
    /// Energy from a value in keV
    pub fn from_kev(kev: f64) -> Self {
        Self { kev }
    }

    /// Energy from a value in MeV
    pub fn from_mev(mev: f64) -> Self {
        Self { kev: mev * 1e3 }
    }

    /// Energy in keV
    pub fn kev(&self) -> f64 {
        self.kev
    }

    /// Energy in MeV
    pub fn mev(&self) -> f64 {
        self.kev / 1e3
    }

    /// Energy in Joules
    pub fn joules(&self) -> f64 {
        self.mev() * JOULES_PER_MEV
    }

    /// True for a negative or undefined energy
    ///
    /// Endothermic reactions have a negative Q-value, which is perfectly valid
    /// but means there is nothing to drive a decay.
    pub fn is_unphysical(&self) -> bool {
        self.kev.is_nan() || self.kev < 0.0
    }
}

impl std::fmt::Display for Energy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:.4} keV", self.kev)
    }
}

/// Distance in fermis (fm)
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Distance {
    fermis: f64,
}

impl Distance {
    /// Distance from a value in fermis
    pub fn from_fermis(fermis: f64) -> Self {
        Self { fermis }
    }

    /// Distance in fermis
    pub fn fermis(&self) -> f64 {
        self.fermis
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:.6} fm", self.fermis)
    }
}

/// Power in watts
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Power {
    watts: f64,
}

impl Power {
    /// Power from a value in watts
    pub fn from_watts(watts: f64) -> Self {
        Self { watts }
    }

    /// Power in watts
    pub fn watts(&self) -> f64 {
        self.watts
    }
}

impl std::ops::Add for Power {
    type Output = Power;

    fn add(self, rhs: Self) -> Self::Output {
        Power::from_watts(self.watts + rhs.watts)
    }
}

impl std::iter::Sum for Power {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Power::default(), |acc, p| acc + p)
    }
}

impl std::fmt::Display for Power {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} W", self.watts.sci(5, 2))
    }
}

/// Half-life as a value and unit pair
///
/// Nuclear data tables record half-lives in whatever unit is convenient, from
/// attoseconds to petayears, along with markers such as `stbl` for stable
/// nuclides. The raw text is kept as-is.
///
/// Only values recorded in seconds can be converted with
/// [seconds()](HalfLife::seconds). Anything else is a configuration error
/// rather than a physical edge case, so it is never silently coerced.
///
/// ```rust
/// # use nreact_units::HalfLife;
/// assert_eq!(HalfLife::new("613.9", "s").seconds().unwrap(), 613.9);
/// assert!(HalfLife::new("53.22", "d").seconds().is_err());
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct HalfLife {
    /// Value as recorded, e.g. `613.9`, `stbl`, `p-unst`
    pub value: String,
    /// Unit as recorded, e.g. `s`, `ms`, `y`, or empty
    pub unit: String,
}

impl HalfLife {
    /// Half-life from any displayable value and a unit
    pub fn new(value: impl ToString, unit: impl ToString) -> Self {
        Self {
            value: value.to_string(),
            unit: unit.to_string(),
        }
    }

    /// Half-life computed in seconds
    pub fn from_seconds(seconds: f64) -> Self {
        Self::new(seconds, "s")
    }

    /// Value in seconds, only for half-lives recorded in seconds
    pub fn seconds(&self) -> Result<f64> {
        if self.unit != "s" {
            return Err(Error::UnsupportedUnit {
                unit: self.unit.clone(),
            });
        }

        self.value
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::InvalidValue {
                value: self.value.clone(),
            })
    }
}

impl std::fmt::Display for HalfLife {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self.unit.is_empty() {
            true => self.value.clone(),
            false => f!("{} {}", self.value, self.unit),
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn energy_conversions() {
        let e = Energy::from_kev(17346.2443);
        assert!((e.mev() - 17.3462443).abs() < 1e-12);
        assert!((Energy::from_mev(1.0).joules() - 1.602176565e-13).abs() < 1e-25);
    }

    #[test]
    fn negative_energy_is_unphysical_not_an_error() {
        assert!(Energy::from_kev(-7645.8).is_unphysical());
        assert!(Energy::from_kev(f64::NAN).is_unphysical());
        assert!(!Energy::from_kev(0.0).is_unphysical());
    }

    #[test]
    fn power_sums() {
        let total: Power = [1.0, 2.5, 0.5].into_iter().map(Power::from_watts).sum();
        assert_eq!(total.watts(), 4.0);
    }

    #[test]
    fn half_life_units() {
        assert_eq!(HalfLife::from_seconds(0.5).seconds(), Ok(0.5));
        assert_eq!(
            HalfLife::new("stbl", "").seconds(),
            Err(Error::UnsupportedUnit {
                unit: "".to_string()
            })
        );
        assert_eq!(
            HalfLife::new("p-unst", "s").seconds(),
            Err(Error::InvalidValue {
                value: "p-unst".to_string()
            })
        );
        assert_eq!(HalfLife::new("12.32", "y").to_string(), "12.32 y");
        assert_eq!(HalfLife::new("stbl", "").to_string(), "stbl");
    }
}
