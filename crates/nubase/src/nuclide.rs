// internal modules
use crate::error::{Error, Result};
use crate::parsers::{decay_tokens, first_decimal, first_unsigned, isotopic_abundance};

// nreact crates
use nreact_units::constants::ATOMIC_MASS_UNIT_MEV;
use nreact_units::{Energy, HalfLife};

// external crates
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Labels in the table that are better known by another name
const ALTERNATE_LABELS: [(&str, &str); 10] = [
    ("1 n", "n"),
    ("1H", "p"),
    ("2H", "d"),
    ("3H", "t"),
    ("12Cx", "12C"),
    ("8Bx", "8B"),
    ("10Bx", "10B"),
    ("28Px", "28P"),
    ("30Px", "30P"),
    ("45Vx", "45V"),
];

/// Suffixes marking an isomer in the table label, e.g. `191Osm`
const ISOMER_SUFFIXES: &str = "ijmnpqrx";

/// Decay mode codes and the arrow notation used for reaction notes
const DECAY_NOTES: [(&str, &str); 21] = [
    ("A", "→α"),
    ("B-", "→β-"),
    ("B+", "→β+"),
    ("B+p", "→β+p"),
    ("B+A", "→β+α"),
    ("B-n", "→β-n"),
    ("B-2n", "→β-2n"),
    ("B-3n", "→β-3n"),
    ("B+SF", "→β+SF"),
    ("B-SF", "→β-SF"),
    ("B-A", "→β-α"),
    ("B-d", "→β-d"),
    ("n", "→n"),
    ("2n", "→2n"),
    ("p", "→p"),
    ("2p", "→2p"),
    ("EC", "→ε"),
    ("IT", "→IT"),
    ("SF", "→SF"),
    ("2B-", "→2β-"),
    ("2B+", "→2β+"),
];

/// Unique key for a nuclide in a [Nuclides](crate::Nuclides) store
///
/// The label is the common name, e.g. `190Pt` or `p`, and the level is the
/// isomer index as text, `"0"` for the ground state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Signature {
    pub label: String,
    pub level: String,
}

impl Signature {
    /// Signature for any label and excitation level
    pub fn new(label: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            level: level.into(),
        }
    }

    /// Signature of a ground state nuclide
    ///
    /// ```rust
    /// # use nreact_nubase::Signature;
    /// assert_eq!(Signature::ground("190Pt"), Signature::new("190Pt", "0"));
    /// ```
    pub fn ground(label: impl Into<String>) -> Self {
        Self::new(label, "0")
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.level.as_str() {
            "0" => write!(f, "{}", self.label),
            level => write!(f, "{} ({})", self.label, level),
        }
    }
}

/// A single nuclide record
///
/// Built from one row of a NUBASE table, or one of the two lepton records that
/// every store carries so that weak-interaction channels can be written down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nuclide {
    /// Common label, e.g. `190Pt`, `p`, `e-`
    pub label: String,
    /// Label including the excitation level for isomers, e.g. `191Os (1)`
    pub full_label: String,
    /// Unique (label, level) key
    pub signature: Signature,
    /// Number of nucleons (A)
    pub mass_number: u32,
    /// Charge number (Z), `-1` for the electron
    pub atomic_number: i32,
    /// Isomer index from the table, `0` for ground states
    pub isomer_index: u32,
    /// Mass excess in keV
    pub mass_excess: f64,
    /// Natural isotopic abundance (%), `0.0` when not naturally occurring
    pub isotopic_abundance: f64,
    /// Naturally occurring
    pub is_stable: bool,
    /// Excited state that does not occur in nature
    pub is_excited: bool,
    /// Half-life as recorded
    pub half_life: HalfLife,
    /// Spin and parity, e.g. `0+`
    pub spin_and_parity: Option<String>,
    /// Raw decay mode text, e.g. `IS=0.012 1;A=100`
    pub decay_modes: String,
    /// Decay arrows and light-particle tags
    pub notes: BTreeSet<String>,
}

impl Nuclide {
    /// Parse a single fixed-width row of a NUBASE table
    ///
    /// Rows without an atomic mass number or mass excess are not nuclides
    /// (headers, comments) and are an error.
    pub fn from_row(row: &str) -> Result<Self> {
        let mass_number = first_unsigned(column(row, 0, 4))
            .map(|(_, a)| a)
            .map_err(|e| Error::ParseError(e.to_string()))?;

        let mass_excess = first_decimal(column(row, 18, 39))
            .map(|(_, me)| me)
            .map_err(|_| Error::MissingMassExcess {
                row: row.to_string(),
            })?;

        let atomic_number = first_unsigned(column(row, 4, 7))
            .map(|(_, z)| z as i32)
            .map_err(|e| Error::ParseError(e.to_string()))?;

        let isomer_index = column(row, 7, 8)
            .chars()
            .next()
            .and_then(|c| c.to_digit(10))
            .unwrap_or(0);

        let decay_modes = column(row, 110, row.len()).trim().to_string();
        let abundance = isotopic_abundance(&decay_modes).map(|(_, a)| a).ok();
        let isotopic_abundance = abundance.unwrap_or(0.0);
        let is_excited = isomer_index > 0 && isotopic_abundance == 0.0;

        let raw_label = column(row, 9, 18).trim();
        let label = table_label(raw_label, isomer_index);
        let level = isomer_index.to_string();
        let signature = Signature::new(&label, &level);

        let spin = column(row, 79, 93).split_whitespace().collect::<Vec<_>>();

        let notes = decay_tokens(&decay_modes)
            .filter_map(decay_note)
            .map(str::to_string)
            .collect();

        Ok(Self {
            full_label: signature.to_string(),
            label,
            signature,
            mass_number,
            atomic_number,
            isomer_index,
            mass_excess,
            isotopic_abundance,
            is_stable: abundance.is_some(),
            is_excited,
            half_life: HalfLife::new(
                column(row, 61, 69).trim(),
                column(row, 69, 71).trim(),
            ),
            spin_and_parity: (!spin.is_empty()).then(|| spin.join(" ")),
            decay_modes,
            notes,
        })
    }

    /// The electron, for weak-interaction channels
    pub fn electron() -> Self {
        Self::lepton("e-", -1, 0.0, true)
    }

    /// The electron neutrino, for weak-interaction channels
    pub fn electron_neutrino() -> Self {
        Self::lepton("νe", 0, 0.00023, false)
    }

    fn lepton(label: &str, charge: i32, mass_excess: f64, is_stable: bool) -> Self {
        Self {
            label: label.to_string(),
            full_label: label.to_string(),
            signature: Signature::ground(label),
            mass_number: 0,
            atomic_number: charge,
            isomer_index: 0,
            mass_excess,
            isotopic_abundance: 0.0,
            is_stable,
            is_excited: false,
            half_life: HalfLife::new("stbl", ""),
            spin_and_parity: Some("1/2+".to_string()),
            decay_modes: String::new(),
            notes: BTreeSet::from([label.to_string()]),
        }
    }

    /// The (A, Z) pair
    pub fn numbers(&self) -> (u32, i32) {
        (self.mass_number, self.atomic_number)
    }

    /// True for the electron and neutrino records
    pub fn is_lepton(&self) -> bool {
        self.mass_number == 0
    }

    /// Total mass-energy, `A·u + mass excess`
    pub fn mass(&self) -> Energy {
        Energy::from_mev(self.mass_number as f64 * ATOMIC_MASS_UNIT_MEV + self.mass_excess / 1e3)
    }

    /// Serialise the key properties to a JSON object
    ///
    /// The half-life is given in seconds, or `null` for anything not recorded
    /// in seconds.
    ///
    /// ```rust
    /// # use nreact_nubase::Nuclides;
    /// let n = Nuclides::db().get("n", "0").unwrap();
    /// assert_eq!(
    ///     n.to_json().unwrap(),
    ///     r#"{"halfLife":613.9,"atomicNumber":0,"massNumber":1}"#
    /// );
    ///
    /// let pt = Nuclides::db().get("190Pt", "0").unwrap();
    /// assert_eq!(
    ///     pt.to_json().unwrap(),
    ///     r#"{"halfLife":null,"atomicNumber":78,"massNumber":190}"#
    /// );
    /// ```
    pub fn to_json(&self) -> Result<String> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Summary {
            half_life: Option<f64>,
            atomic_number: i32,
            mass_number: u32,
        }

        Ok(serde_json::to_string(&Summary {
            half_life: self.half_life.seconds().ok(),
            atomic_number: self.atomic_number,
            mass_number: self.mass_number,
        })?)
    }
}

impl std::fmt::Display for Nuclide {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.full_label)
    }
}

/// Safe slice of a fixed-width column, empty if out of range
fn column(row: &str, start: usize, end: usize) -> &str {
    let end = end.min(row.len());
    if start >= end {
        return "";
    }
    row.get(start..end).unwrap_or("")
}

/// Common label for a raw table label
fn table_label(raw: &str, isomer_index: u32) -> String {
    if let Some((_, alt)) = ALTERNATE_LABELS.iter().find(|(l, _)| *l == raw) {
        return alt.to_string();
    }

    match raw.chars().last() {
        Some(c) if isomer_index > 0 && ISOMER_SUFFIXES.contains(c) => {
            raw[..raw.len() - c.len_utf8()].to_string()
        }
        _ => raw.to_string(),
    }
}

/// Arrow notation for a single decay mode code
fn decay_note(code: &str) -> Option<&'static str> {
    DECAY_NOTES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, note)| *note)
}

/// Light-particle tag for reaction notes, e.g. `α` for helium-4
pub fn light_label(nuclide: &Nuclide) -> Option<&'static str> {
    match (nuclide.mass_number, nuclide.atomic_number) {
        (1, 0) => Some("n"),
        (1, 1) => Some("p"),
        (2, 1) => Some("d"),
        (3, 1) => Some("t"),
        (3, 2) => Some("3He"),
        (4, 2) => Some("α"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PT190: &str = "190 0780   190Pt     -37325.0      0.7                           650 Ga        0+            12          1950 IS=0.012 1;A=100";
    const OS191M: &str = "191 0761   191Osm    -36322.5      1.5      74.382     0.01    13.10 h         3/2-          12          1950 IT=100";
    const NEUTRON: &str = "001 0000   1 n      8071.3171   0.0005                         613.9 s         1/2+          12          1950 B-=100";

    #[test]
    fn parse_natural_row() {
        let pt = Nuclide::from_row(PT190).unwrap();
        assert_eq!(pt.label, "190Pt");
        assert_eq!(pt.signature, Signature::ground("190Pt"));
        assert_eq!(pt.numbers(), (190, 78));
        assert_eq!(pt.mass_excess, -37325.0);
        assert_eq!(pt.isotopic_abundance, 0.012);
        assert!(pt.is_stable);
        assert!(!pt.is_excited);
        assert_eq!(pt.half_life, HalfLife::new("650", "Ga"));
        assert_eq!(pt.spin_and_parity, Some("0+".to_string()));
        assert_eq!(pt.notes, BTreeSet::from(["→α".to_string()]));
    }

    #[test]
    fn parse_isomer_row() {
        let os = Nuclide::from_row(OS191M).unwrap();
        assert_eq!(os.label, "191Os");
        assert_eq!(os.full_label, "191Os (1)");
        assert_eq!(os.signature, Signature::new("191Os", "1"));
        assert!(os.is_excited);
        assert!(!os.is_stable);
        assert_eq!(os.notes, BTreeSet::from(["→IT".to_string()]));
    }

    #[test]
    fn parse_alternate_label() {
        let n = Nuclide::from_row(NEUTRON).unwrap();
        assert_eq!(n.label, "n");
        assert_eq!(n.numbers(), (1, 0));
        assert_eq!(n.half_life.seconds().unwrap(), 613.9);
        assert_eq!(light_label(&n), Some("n"));
    }

    #[test]
    fn reject_header_rows() {
        let header = "% NUBASE2012 subset: AAA ZZZi  A El  mass excess (keV)";
        assert!(Nuclide::from_row(header).is_err());
        assert!(Nuclide::from_row("").is_err());
    }

    #[test]
    fn total_mass() {
        let pt = Nuclide::from_row(PT190).unwrap();
        let expected = 190.0 * 931.494061 - 37.325;
        assert!((pt.mass().mev() - expected).abs() < 1e-9);
    }

    #[test]
    fn lepton_records() {
        let e = Nuclide::electron();
        assert_eq!(e.numbers(), (0, -1));
        assert!(e.is_stable);
        assert!(e.is_lepton());
        assert_eq!(e.notes, BTreeSet::from(["e-".to_string()]));

        let nu = Nuclide::electron_neutrino();
        assert_eq!(nu.numbers(), (0, 0));
        assert_eq!(nu.mass_excess, 0.00023);
        assert!(!nu.is_stable);
    }
}
