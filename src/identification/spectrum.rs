use std::fmt;

use serde::{Deserialize, Serialize};

use super::peptide::Peptide;
use super::scoring::PtmScores;
use super::spectrum_key;

/// Mass of a proton in Da
pub const PROTON_MASS: f64 = 1.007_276_466_812;

/// Mass difference between 13C and 12C in Da
pub const C13_MASS_DIFFERENCE: f64 = 1.003_354_837_8;

/// Signed charge state, displayed as `2+` / `1-`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Charge(pub i32);

impl Charge {
    /// Signed charge value
    pub fn value(self) -> i32 {
        self.0
    }

    /// Absolute charge as a float, never below 1
    fn magnitude(self) -> f64 {
        f64::from(self.0.unsigned_abs().max(1))
    }
}

impl fmt::Display for Charge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "{}-", self.0.unsigned_abs())
        } else {
            write!(f, "{}+", self.0)
        }
    }
}

/// Precursor ion of a spectrum
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Precursor {
    /// Measured m/z
    pub mz: f64,
    /// Retention time in seconds
    #[serde(default)]
    pub rt: f64,
    /// Charge states annotated on the spectrum
    #[serde(default)]
    pub possible_charges: Vec<Charge>,
}

impl Precursor {
    /// Charge states joined as `2+, 3+`
    pub fn possible_charges_string(&self) -> String {
        self.possible_charges
            .iter()
            .map(Charge::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// The best peptide explanation of a spectrum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeptideAssumption {
    /// The identified peptide
    pub peptide: Peptide,
    /// Charge used for the identification
    pub charge: Charge,
    /// Whether the peptide comes from a decoy sequence
    #[serde(default)]
    pub decoy: bool,
}

impl PeptideAssumption {
    /// Neutral mass implied by a measured precursor m/z at the identification charge
    fn measured_mass(&self, precursor_mz: f64) -> f64 {
        let z = self.charge.magnitude();
        precursor_mz * z - z * PROTON_MASS
    }

    /// Number of 13C isotopes between the monoisotopic peptide mass and the measured mass
    pub fn isotope_number(&self, precursor_mz: f64) -> i32 {
        let difference = self.measured_mass(precursor_mz) - self.peptide.mass;
        (difference / C13_MASS_DIFFERENCE).round() as i32
    }

    /// Precursor m/z error in ppm, corrected for the isotope number
    pub fn mz_error_ppm(&self, precursor_mz: f64) -> f64 {
        let z = self.charge.magnitude();
        let isotope = f64::from(self.isotope_number(precursor_mz));
        let theoretical_mz =
            (self.peptide.mass + isotope * C13_MASS_DIFFERENCE + z * PROTON_MASS) / z;
        (precursor_mz - theoretical_mz) / theoretical_mz * 1e6
    }
}

/// A spectrum and its best identification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumMatch {
    /// Record key, `<file>_cus_<title>`
    pub key: String,
    /// Best peptide assumption
    pub best_assumption: PeptideAssumption,
    /// Precursor of the spectrum
    #[serde(default)]
    pub precursor: Precursor,
    /// Native scan number, empty when the file does not provide one
    #[serde(default)]
    pub scan_number: String,
    /// PTM localization scores, when they were computed
    #[serde(default)]
    pub ptm_scores: Option<PtmScores>,
}

impl SpectrumMatch {
    /// Create a spectrum match
    pub fn new(key: impl Into<String>, best_assumption: PeptideAssumption) -> Self {
        Self {
            key: key.into(),
            best_assumption,
            precursor: Precursor::default(),
            scan_number: String::new(),
            ptm_scores: None,
        }
    }

    /// Spectrum file the spectrum was read from
    pub fn spectrum_file(&self) -> &str {
        spectrum_key::file(&self.key)
    }

    /// Title of the spectrum within its file
    pub fn spectrum_title(&self) -> &str {
        spectrum_key::title(&self.key)
    }
}
