use std::collections::BTreeMap;

use super::peptide::ModificationMatch;

/// Variable modification sites grouped by modification name
///
/// Names iterate in lexicographic order, sites in occurrence order.
/// Fixed modifications are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModificationSiteMap {
    sites: BTreeMap<String, Vec<usize>>,
}

impl ModificationSiteMap {
    /// Build the map from a peptide's modification occurrences
    pub fn from_modifications(modifications: &[ModificationMatch]) -> Self {
        let mut sites: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for modification in modifications.iter().filter(|m| m.variable) {
            sites
                .entry(modification.name.clone())
                .or_default()
                .push(modification.site);
        }
        Self { sites }
    }

    /// Modification names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sites.keys().map(String::as_str)
    }

    /// Modification names with their sites, sorted by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.sites.iter().map(|(name, sites)| (name.as_str(), sites.as_slice()))
    }

    /// Sites of one modification
    pub fn sites(&self, name: &str) -> Option<&[usize]> {
        self.sites.get(name).map(Vec::as_slice)
    }

    /// Number of distinct modifications
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Whether the peptide carries no variable modification
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}
