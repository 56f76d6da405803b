use super::{ExportFeature, RecordType};

/// Columns of the PSM table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PsmFeature {
    /// Variable modification summary
    Ptms,
    /// Best A-score site combination per modification
    AScore,
    /// Best delta-score site combination per modification
    DScore,
    /// Parent protein accessions
    Accessions,
    /// PSM confidence
    Confidence,
    /// Decoy flag
    Decoy,
    /// Hidden flag
    Hidden,
    /// Charge of the identification
    IdentificationCharge,
    /// Precursor isotope number
    Isotope,
    /// Site confidence of each variable modification
    LocalizationConfidence,
    /// Precursor m/z
    Mz,
    /// Precursor m/z error in ppm
    MzError,
    /// Retention time
    Rt,
    /// PSM score
    Score,
    /// Amino acid sequence
    Sequence,
    /// Charge states annotated on the spectrum
    SpectrumCharge,
    /// Spectrum file name
    SpectrumFile,
    /// Native scan number
    SpectrumNumber,
    /// Spectrum title
    SpectrumTitle,
    /// Starred flag
    Starred,
    /// Theoretical peptide mass
    TheoreticalMass,
    /// Validation flag
    Validated,
}

impl PsmFeature {
    fn describe(self) -> (&'static str, &'static str) {
        match self {
            Self::Ptms => ("ptms", "Variable Modifications"),
            Self::AScore => ("a_score", "A-score"),
            Self::DScore => ("d_score", "D-score"),
            Self::Accessions => ("accessions", "Accession"),
            Self::Confidence => ("confidence", "Confidence"),
            Self::Decoy => ("decoy", "Decoy"),
            Self::Hidden => ("hidden", "Hidden"),
            Self::IdentificationCharge => ("identification_charge", "Identification Charge"),
            Self::Isotope => ("isotope", "Isotope Number"),
            Self::LocalizationConfidence => ("localization_confidence", "Localization Confidence"),
            Self::Mz => ("mz", "Precursor m/z"),
            Self::MzError => ("mz_error", "Precursor m/z Error (ppm)"),
            Self::Rt => ("rt", "RT"),
            Self::Score => ("score", "Score"),
            Self::Sequence => ("sequence", "Sequence"),
            Self::SpectrumCharge => ("spectrum_charge", "Spectrum Charge"),
            Self::SpectrumFile => ("spectrum_file", "Spectrum File"),
            Self::SpectrumNumber => ("spectrum_number", "Spectrum Scan Number"),
            Self::SpectrumTitle => ("spectrum_title", "Spectrum Title"),
            Self::Starred => ("starred", "Starred"),
            Self::TheoreticalMass => ("theoretical_mass", "Theoretical Mass"),
            Self::Validated => ("validated", "Validated"),
        }
    }
}

impl ExportFeature for PsmFeature {
    const RECORD_TYPE: RecordType = RecordType::Psm;

    const ALL: &'static [Self] = &[
        Self::Ptms,
        Self::AScore,
        Self::DScore,
        Self::Accessions,
        Self::Confidence,
        Self::Decoy,
        Self::Hidden,
        Self::IdentificationCharge,
        Self::Isotope,
        Self::LocalizationConfidence,
        Self::Mz,
        Self::MzError,
        Self::Rt,
        Self::Score,
        Self::Sequence,
        Self::SpectrumCharge,
        Self::SpectrumFile,
        Self::SpectrumNumber,
        Self::SpectrumTitle,
        Self::Starred,
        Self::TheoreticalMass,
        Self::Validated,
    ];

    fn id(self) -> &'static str {
        self.describe().0
    }

    fn title(self) -> &'static str {
        self.describe().1
    }
}
