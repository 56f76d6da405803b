//! Spectrum-match keys: `<spectrum file>_cus_<spectrum title>`

/// Separator between spectrum file and title
pub const SEPARATOR: &str = "_cus_";

/// Build the key of a spectrum
pub fn build(file: &str, title: &str) -> String {
    format!("{file}{SEPARATOR}{title}")
}

/// Spectrum file encoded in a key
///
/// Keys without a separator are treated as file-less; the whole key is the title.
pub fn file(key: &str) -> &str {
    key.split_once(SEPARATOR).map_or("", |(file, _)| file)
}

/// Spectrum title encoded in a key
pub fn title(key: &str) -> &str {
    key.split_once(SEPARATOR).map_or(key, |(_, title)| title)
}
