//! Scenario options for decay calculations

// internal modules
use crate::error::Result;

// external crates
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Options for an alpha decay scenario
///
/// Anything left out of a config file takes the default value.
///
/// | Option              | Default | Description                                |
/// | ------------------- | ------- | ------------------------------------------ |
/// | `screening`         | 0       | Electron screening charge offset           |
/// | `moles`             | 1       | Quantity of the parent element or isotope  |
/// | `seconds`           | 1       | Elapsed time for time-dependent queries    |
/// | `isotopic_fraction` | none    | Override for the natural abundance         |
/// | `active_fraction`   | 1       | Fraction of the material taking part       |
/// | `unstable`          | false   | Expand elements to unstable isotopes too   |
///
/// ```rust
/// # use nreact_decay::DecayConfig;
/// let config = DecayConfig::default()
///     .with_screening(11.0)
///     .with_isotopic_fraction(1.0);
///
/// assert_eq!(config.moles, 1.0);
/// assert_eq!(config.isotopic_fraction, Some(1.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    pub screening: f64,
    pub moles: f64,
    pub seconds: f64,
    pub isotopic_fraction: Option<f64>,
    pub active_fraction: f64,
    pub unstable: bool,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            screening: 0.0,
            moles: 1.0,
            seconds: 1.0,
            isotopic_fraction: None,
            active_fraction: 1.0,
            unstable: false,
        }
    }
}

impl DecayConfig {
    pub fn with_screening(mut self, screening: f64) -> Self {
        self.screening = screening;
        self
    }

    pub fn with_moles(mut self, moles: f64) -> Self {
        self.moles = moles;
        self
    }

    pub fn with_seconds(mut self, seconds: f64) -> Self {
        self.seconds = seconds;
        self
    }

    pub fn with_isotopic_fraction(mut self, fraction: f64) -> Self {
        self.isotopic_fraction = Some(fraction);
        self
    }

    pub fn with_active_fraction(mut self, fraction: f64) -> Self {
        self.active_fraction = fraction;
        self
    }

    pub fn with_unstable(mut self, unstable: bool) -> Self {
        self.unstable = unstable;
        self
    }
}

/// Read scenario options from a JSON file
///
/// ```rust, no_run
/// # use nreact_decay::read_config;
/// let config = read_config("path/to/scenario.json").unwrap();
/// ```
pub fn read_config<P: AsRef<Path>>(path: P) -> Result<DecayConfig> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    Ok(serde_json::from_reader(reader)?)
}
