// internal modules
use crate::error::Result;
use crate::nuclide::{Nuclide, Signature};

// external crates
use log::{debug, trace};
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::sync::OnceLock;

/// Nuclide records with lookup indexes
///
/// Built once from a NUBASE table and then only ever read. Records keep table
/// order, which is the order every index returns them in.
///
/// ```rust
/// # use nreact_nubase::Nuclides;
/// let nuclides = Nuclides::db();
///
/// // Lookup by common label and excitation level
/// let pt = nuclides.get("190Pt", "0").unwrap();
/// assert_eq!(pt.numbers(), (190, 78));
///
/// // All ground states and isomers for an (A, Z) pair
/// assert_eq!(nuclides.isomers(191, 76).len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Nuclides {
    nuclides: Vec<Nuclide>,
    by_label: HashMap<String, usize>,
    by_signature: HashMap<Signature, usize>,
    by_atomic_number: BTreeMap<i32, Vec<usize>>,
    isomers: HashMap<(u32, i32), Vec<usize>>,
}

// Only ever parse the bundled table once on first use
static NUBASE: OnceLock<Nuclides> = OnceLock::new();

impl Nuclides {
    /// Build the lookup indexes for a set of records
    pub fn new(nuclides: Vec<Nuclide>) -> Self {
        let mut store = Self {
            nuclides,
            ..Default::default()
        };

        for (idx, nuclide) in store.nuclides.iter().enumerate() {
            store.by_label.entry(nuclide.label.clone()).or_insert(idx);
            store.by_signature.insert(nuclide.signature.clone(), idx);

            if nuclide.is_lepton() {
                continue;
            }

            store
                .by_atomic_number
                .entry(nuclide.atomic_number)
                .or_default()
                .push(idx);
            store
                .isomers
                .entry(nuclide.numbers())
                .or_default()
                .push(idx);
        }

        debug!("Indexed {} nuclide records", store.len());
        store
    }

    /// Parse the text of a NUBASE table
    ///
    /// Rows that are not nuclides are skipped. The electron and electron
    /// neutrino records are always appended.
    pub fn from_table(text: &str) -> Self {
        let mut nuclides = text
            .lines()
            .filter_map(|row| match Nuclide::from_row(row) {
                Ok(nuclide) => Some(nuclide),
                Err(e) => {
                    trace!("Skipped row: {e}");
                    None
                }
            })
            .collect::<Vec<Nuclide>>();

        nuclides.push(Nuclide::electron());
        nuclides.push(Nuclide::electron_neutrino());
        Self::new(nuclides)
    }

    /// Read and parse a NUBASE table file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        debug!("Loading nuclides from {}", path.as_ref().display());
        Ok(Self::from_table(&text))
    }

    /// Records from the bundled NUBASE2012 table
    pub fn db() -> &'static Nuclides {
        NUBASE.get_or_init(|| Self::from_table(include_str!("../data/nubase_subset.asc")))
    }

    /// Write all records to a binary file for fast reloading
    pub fn write_binary<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let f = BufWriter::new(File::create(path)?);
        bincode::serialize_into(f, &self.nuclides)?;
        Ok(())
    }

    /// Read records back from a file written by [write_binary()](Self::write_binary)
    pub fn read_binary<P: AsRef<Path>>(path: P) -> Result<Self> {
        let f = BufReader::new(File::open(path)?);
        let nuclides: Vec<Nuclide> = bincode::deserialize_from(f)?;
        Ok(Self::new(nuclides))
    }

    /// Find a nuclide by label and excitation level
    pub fn get(&self, label: &str, level: &str) -> Option<&Nuclide> {
        self.signature(&Signature::new(label, level))
    }

    /// Find a nuclide by its signature
    pub fn signature(&self, signature: &Signature) -> Option<&Nuclide> {
        self.by_signature
            .get(signature)
            .map(|idx| &self.nuclides[*idx])
    }

    /// Find the first nuclide with a common label, at any excitation level
    pub fn label(&self, label: &str) -> Option<&Nuclide> {
        self.by_label.get(label).map(|idx| &self.nuclides[*idx])
    }

    /// Every isotope and isomer of an element
    ///
    /// Leptons are not isotopes of anything, so never appear here.
    pub fn atomic_number(&self, atomic_number: i32) -> Vec<&Nuclide> {
        self.collect(self.by_atomic_number.get(&atomic_number))
    }

    /// Ground state and any isomers with the given (A, Z)
    pub fn isomers(&self, mass_number: u32, atomic_number: i32) -> Vec<&Nuclide> {
        self.collect(self.isomers.get(&(mass_number, atomic_number)))
    }

    /// Iterate over all records in table order
    pub fn iter(&self) -> impl Iterator<Item = &Nuclide> {
        self.nuclides.iter()
    }

    /// Number of records, including leptons
    pub fn len(&self) -> usize {
        self.nuclides.len()
    }

    /// True if there are no records
    pub fn is_empty(&self) -> bool {
        self.nuclides.is_empty()
    }

    fn collect(&self, indexes: Option<&Vec<usize>>) -> Vec<&Nuclide> {
        indexes
            .map(|idx| idx.iter().map(|i| &self.nuclides[*i]).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_table_indexes() {
        let nuclides = Nuclides::db();
        // 50 table rows plus the two leptons
        assert_eq!(nuclides.len(), 52);
        assert!(nuclides.get("p", "0").is_some());
        assert!(nuclides.get("e-", "0").is_some());
        assert!(nuclides.get("νe", "0").is_some());
        assert!(nuclides.get("191Os", "1").is_some());
        assert!(nuclides.get("1H", "0").is_none());
    }

    #[test]
    fn element_isotopes_in_table_order() {
        let labels = Nuclides::db()
            .atomic_number(78)
            .iter()
            .map(|n| n.full_label.clone())
            .collect::<Vec<String>>();

        assert_eq!(
            labels,
            vec![
                "190Pt",
                "191Pt",
                "192Pt",
                "193Pt",
                "194Pt",
                "195Pt",
                "195Pt (1)",
                "196Pt",
                "198Pt"
            ]
        );
    }

    #[test]
    fn leptons_are_not_isotopes() {
        let nuclides = Nuclides::db();
        assert!(nuclides.atomic_number(-1).is_empty());
        assert_eq!(nuclides.atomic_number(0).len(), 1);
        assert_eq!(nuclides.isomers(0, 0).len(), 0);
    }

    #[test]
    fn unknown_lookups_are_absent() {
        let nuclides = Nuclides::db();
        assert!(nuclides.get("999Xx", "0").is_none());
        assert!(nuclides.isomers(300, 120).is_empty());
        assert!(nuclides.atomic_number(118).is_empty());
    }
}
