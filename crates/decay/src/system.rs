//! Alpha decay of isotopic mixtures

// internal modules
use crate::calculations::{AlphaCandidate, IsotopicAlphaDecay};
use crate::config::DecayConfig;
use crate::error::Result;
use crate::kinetics::IsotopicDecay;

// nreact crates
use nreact_format::{f, NumFormat};
use nreact_nubase::{parse_spec, Nuclides};
use nreact_reactions::{Model, Reaction};
use nreact_units::constants::LN2;
use nreact_units::{HalfLife, Power};

// external crates
use log::{debug, warn};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Every reaction a model allows for an element or isotope
///
/// ```rust
/// # use nreact_nubase::Nuclides;
/// # use nreact_reactions::Model;
/// # use nreact_decay::System;
/// let system = System::load("Pt", Model::InducedDecay, Nuclides::db(), false).unwrap();
///
/// // one alpha decay per stable isotope, 195Pt can also reach 191Os (1)
/// assert_eq!(system.reactions().len(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct System<'a> {
    spec: String,
    model: Model,
    reactions: Vec<Reaction<'a>>,
}

impl<'a> System<'a> {
    /// Enumerate the reactions for a reaction spec
    ///
    /// Element symbols expand into their stable isotopes, or every isotope
    /// when `unstable` is set. Reactant combinations are evaluated in
    /// parallel, and reactions keep the order of the parents.
    pub fn load(spec: &str, model: Model, nuclides: &'a Nuclides, unstable: bool) -> Result<Self> {
        let parents = parse_spec(spec, nuclides, unstable)?;

        let reactions = parents
            .par_iter()
            .flat_map_iter(|reactants| Reaction::enumerate(reactants, &model, nuclides))
            .collect::<Vec<Reaction>>();

        debug!("{} reactions for \"{spec}\" ({model})", reactions.len());
        Ok(Self {
            spec: spec.to_string(),
            model,
            reactions,
        })
    }

    /// The reaction spec the system was loaded from
    pub fn spec(&self) -> &str {
        &self.spec
    }

    /// The reaction model used
    pub fn model(&self) -> Model {
        self.model
    }

    /// All enumerated reactions
    pub fn reactions(&self) -> &[Reaction<'a>] {
        &self.reactions
    }

    /// Alpha decay scenario for every two-body reaction in the system
    ///
    /// Reactions that are not a single parent splitting into two ground state
    /// daughters are skipped.
    pub fn alpha_decay(&self, config: &DecayConfig) -> AlphaDecayScenario {
        let rows = self
            .reactions
            .par_iter()
            .filter_map(|reaction| DecayRow::new(reaction, config))
            .collect::<Vec<DecayRow>>();

        let mut decays: BTreeMap<i32, Vec<DecayRow>> = BTreeMap::new();
        for row in rows {
            decays.entry(row.parent_z).or_default().push(row);
        }

        AlphaDecayScenario {
            config: config.clone(),
            decays,
        }
    }
}

/// Decay results for every parent isotope in a system
///
/// Rows are grouped by parent charge number, in ascending order, and keep
/// the order of the reactions within each group.
///
/// Rows with an undefined (`NaN`) value, such as decays with a negative
/// Q-value, are left out of every total but are still available as rows.
///
/// ```rust
/// # use nreact_nubase::Nuclides;
/// # use nreact_reactions::Model;
/// # use nreact_decay::{AlphaDecayScenario, DecayConfig};
/// let config = DecayConfig::default().with_isotopic_fraction(1.0);
/// let scenario =
///     AlphaDecayScenario::load("190Pt", Model::InducedDecay, Nuclides::db(), &config).unwrap();
///
/// let atoms = scenario.remaining_active_atoms();
/// assert!((atoms - 6.02214129e23).abs() / 6.02214129e23 < 1e-9);
///
/// let atoms = scenario.remaining_active_atoms_at(1e20);
/// assert!((atoms - 1.378216190464504e23).abs() / 1.378216190464504e23 < 1e-6);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct AlphaDecayScenario {
    config: DecayConfig,
    decays: BTreeMap<i32, Vec<DecayRow>>,
}

impl AlphaDecayScenario {
    /// Load a system and run the alpha decay scenario in one go
    pub fn load(spec: &str, model: Model, nuclides: &Nuclides, config: &DecayConfig) -> Result<Self> {
        Ok(System::load(spec, model, nuclides, config.unstable)?.alpha_decay(config))
    }

    /// Scenario options
    pub fn config(&self) -> &DecayConfig {
        &self.config
    }

    /// Rows grouped by parent charge number
    pub fn decays(&self) -> &BTreeMap<i32, Vec<DecayRow>> {
        &self.decays
    }

    /// Iterate over all rows
    pub fn rows(&self) -> impl Iterator<Item = &DecayRow> {
        self.decays.values().flatten()
    }

    /// Find the row for a parent isotope label
    pub fn row(&self, isotope: &str) -> Option<&DecayRow> {
        self.rows().find(|row| row.isotope == isotope)
    }

    /// Total active parent atoms remaining at the scenario time
    pub fn remaining_active_atoms(&self) -> f64 {
        self.remaining_active_atoms_at(self.config.seconds)
    }

    /// Total active parent atoms remaining after `seconds`
    pub fn remaining_active_atoms_at(&self, seconds: f64) -> f64 {
        self.total("remaining atoms", |row| row.kinetics.remaining(seconds))
    }

    /// Total activity (Bq) at the scenario time
    pub fn activity(&self) -> f64 {
        self.activity_at(self.config.seconds)
    }

    /// Total activity (Bq) after `seconds`
    pub fn activity_at(&self, seconds: f64) -> f64 {
        self.total("activity", |row| row.kinetics.activity(seconds))
    }

    /// Total power at the scenario time
    pub fn power(&self) -> Power {
        self.power_at(self.config.seconds)
    }

    /// Total power after `seconds`
    pub fn power_at(&self, seconds: f64) -> Power {
        Power::from_watts(self.total("power", |row| row.kinetics.power(seconds).watts()))
    }

    /// Serialise every row to a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn total<F>(&self, quantity: &str, value: F) -> f64
    where
        F: Fn(&DecayRow) -> f64,
    {
        self.rows()
            .filter_map(|row| {
                let v = value(row);
                if v.is_nan() {
                    warn!("Dropped {} from the total {quantity}, value is NaN", row.isotope);
                    return None;
                }
                Some(v)
            })
            .sum()
    }
}

/// Detailed decay results for one parent isotope
///
/// Time-dependent values are given at the scenario time.
#[derive(Debug, Clone, Serialize)]
pub struct DecayRow {
    pub isotope: String,
    pub parent_z: i32,
    pub lighter_daughter_a: u32,
    pub lighter_daughter_z: i32,
    pub heavier_daughter_a: u32,
    pub heavier_daughter_z: i32,
    pub screened_heavier_daughter_z: f64,
    pub q_value_mev: f64,
    pub barrier_height_mev: f64,
    pub alpha_mass_mev: f64,
    pub heavier_daughter_mass_mev: f64,
    pub alpha_ke_mev: f64,
    pub alpha_velocity_m_per_s: f64,
    pub alpha_v_over_c: f64,
    pub nuclear_separation_fm: f64,
    pub radius_for_alpha_ke_fm: f64,
    pub barrier_width_fm: f64,
    pub barrier_assault_frequency: f64,
    pub gamow_factor: f64,
    pub tunneling_probability: f64,
    pub decay_constant: f64,
    pub half_life: f64,
    pub isotopic_abundance: f64,
    pub isotopic_fraction: f64,
    pub starting_moles: f64,
    pub active_fraction: f64,
    pub starting_active_moles: f64,
    pub starting_active_atoms: f64,
    pub remaining_active_atoms: f64,
    pub activity: f64,
    pub watts: f64,
    #[serde(skip)]
    daughters: String,
    #[serde(skip)]
    kinetics: IsotopicDecay,
}

impl DecayRow {
    /// Row for a reaction, if it is a two-body decay to ground states
    pub fn new(reaction: &Reaction, config: &DecayConfig) -> Option<Self> {
        let candidate = AlphaCandidate::from_reaction(reaction)?;
        if candidate.smaller.is_excited || candidate.larger.is_excited {
            return None;
        }

        let decay = IsotopicAlphaDecay::new(&candidate, config.screening);
        let parent = candidate.parent;

        let isotopic_fraction = config
            .isotopic_fraction
            .unwrap_or(parent.isotopic_abundance / 100.0);
        let starting_moles = config.moles * isotopic_fraction;
        let starting_active_moles = starting_moles * config.active_fraction;
        let kinetics = decay.decay(starting_active_moles);
        let seconds = config.seconds;

        Some(Self {
            isotope: parent.full_label.clone(),
            parent_z: parent.atomic_number,
            lighter_daughter_a: candidate.smaller.mass_number,
            lighter_daughter_z: candidate.smaller.atomic_number,
            heavier_daughter_a: candidate.larger.mass_number,
            heavier_daughter_z: candidate.larger.atomic_number,
            screened_heavier_daughter_z: decay.screened_z,
            q_value_mev: decay.q_value.mev(),
            barrier_height_mev: decay.barrier_height.mev(),
            alpha_mass_mev: decay.alpha_mass,
            heavier_daughter_mass_mev: decay.daughter_mass,
            alpha_ke_mev: decay.alpha_energy.mev(),
            alpha_velocity_m_per_s: decay.alpha_velocity,
            alpha_v_over_c: decay.v_over_c(),
            nuclear_separation_fm: decay.nuclear_separation.fermis(),
            radius_for_alpha_ke_fm: decay.radius_for_alpha_energy().fermis(),
            barrier_width_fm: decay.barrier_width().fermis(),
            barrier_assault_frequency: decay.assault_frequency,
            gamow_factor: decay.gamow_factor,
            tunneling_probability: decay.tunneling_probability,
            decay_constant: decay.decay_constant,
            half_life: LN2 / decay.decay_constant,
            isotopic_abundance: parent.isotopic_abundance,
            isotopic_fraction,
            starting_moles,
            active_fraction: config.active_fraction,
            starting_active_moles,
            starting_active_atoms: kinetics.initial_atoms(),
            remaining_active_atoms: kinetics.remaining(seconds),
            activity: kinetics.activity(seconds),
            watts: kinetics.power(seconds).watts(),
            daughters: f!(
                "{} + {}",
                candidate.smaller.full_label,
                candidate.larger.full_label
            ),
            kinetics,
        })
    }

    /// Decay kinetics of the active parent atoms
    pub fn kinetics(&self) -> &IsotopicDecay {
        &self.kinetics
    }

    /// Half-life of the parent
    pub fn half_life(&self) -> HalfLife {
        HalfLife::from_seconds(self.half_life)
    }
}

impl std::fmt::Display for DecayRow {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} → {}: λ {} /s, T½ {} s, {} Bq, {} W",
            self.isotope,
            self.daughters,
            self.decay_constant.sci(4, 2),
            self.half_life.sci(4, 2),
            self.activity.sci(4, 2),
            self.watts.sci(4, 2),
        )
    }
}
