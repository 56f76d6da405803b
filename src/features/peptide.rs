use super::{ExportFeature, RecordType};

/// Columns of the peptide table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeptideFeature {
    /// Parent protein accessions
    Accessions,
    /// Peptide confidence
    Confidence,
    /// Decoy flag
    Decoy,
    /// Hidden flag
    Hidden,
    /// Site confidence of each variable modification
    LocalizationConfidence,
    /// Protein inference class
    ProteinInference,
    /// Start positions in the parent proteins
    Position,
    /// Number of spectrum matches
    Psms,
    /// Variable modification summary
    Ptms,
    /// Peptide score
    Score,
    /// Amino acid sequence
    Sequence,
    /// Starred flag
    Starred,
    /// Residues before each occurrence
    AaBefore,
    /// Residues after each occurrence
    AaAfter,
    /// Whether the peptide is unique to its protein
    Unique,
    /// Validation flag
    Validated,
    /// Number of validated spectrum matches
    ValidatedPsms,
}

impl PeptideFeature {
    fn describe(self) -> (&'static str, &'static str) {
        match self {
            Self::Accessions => ("accessions", "Accession"),
            Self::Confidence => ("confidence", "Confidence"),
            Self::Decoy => ("decoy", "Decoy"),
            Self::Hidden => ("hidden", "Hidden"),
            Self::LocalizationConfidence => ("localization_confidence", "Localization Confidence"),
            Self::ProteinInference => ("protein_inference", "Protein Inference"),
            Self::Position => ("position", "Position"),
            Self::Psms => ("psms", "#PSMs"),
            Self::Ptms => ("ptms", "Variable Modifications"),
            Self::Score => ("score", "Score"),
            Self::Sequence => ("sequence", "Sequence"),
            Self::Starred => ("starred", "Starred"),
            Self::AaBefore => ("aa_before", "AAs Before"),
            Self::AaAfter => ("aa_after", "AAs After"),
            Self::Unique => ("unique", "Unique"),
            Self::Validated => ("validated", "Validated"),
            Self::ValidatedPsms => ("validated_psms", "#Validated PSMs"),
        }
    }
}

impl ExportFeature for PeptideFeature {
    const RECORD_TYPE: RecordType = RecordType::Peptide;

    const ALL: &'static [Self] = &[
        Self::Accessions,
        Self::Confidence,
        Self::Decoy,
        Self::Hidden,
        Self::LocalizationConfidence,
        Self::ProteinInference,
        Self::Position,
        Self::Psms,
        Self::Ptms,
        Self::Score,
        Self::Sequence,
        Self::Starred,
        Self::AaBefore,
        Self::AaAfter,
        Self::Unique,
        Self::Validated,
        Self::ValidatedPsms,
    ];

    fn id(self) -> &'static str {
        self.describe().0
    }

    fn title(self) -> &'static str {
        self.describe().1
    }

    fn requires_sequences(self) -> bool {
        matches!(self, Self::Position | Self::AaBefore | Self::AaAfter)
    }
}
