//! Instrument descriptors.

/// Immutable description of a stringed instrument.
///
/// The tuning runs from the lowest-pitched string to the highest and its
/// length is the string count used everywhere else in the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instrument {
    pub name: &'static str,
    pub strings: usize,
    pub tuning: &'static [&'static str],
    pub max_fret: u32,
}

/// Reference instrument: the 4-string cavaquinho in DGBD tuning.
pub const CAVAQUINHO: Instrument = Instrument {
    name: "cavaquinho",
    strings: 4,
    tuning: &["D", "G", "B", "D"],
    max_fret: 15,
};

impl Instrument {
    /// Tuning as owned strings, the form the library loader works with.
    pub fn tuning_vec(&self) -> Vec<String> {
        self.tuning.iter().map(|s| (*s).to_string()).collect()
    }
}
