use std::ffi::OsStr;

/// First-volume markers of a RAR set
const RAR_EXTENSIONS: &[&str] = &[".rar", ".r01"];

const ZIP_EXTENSIONS: &[&str] = &[".zip"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    Rar,
    Zip,
}

/// Recognized archive suffixes in match priority order
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<(&'static str, ArchiveKind)>,
}

impl Registry {
    /// RAR group first, then ZIP
    pub fn new() -> Self {
        let mut entries = Vec::new();
        entries.extend(RAR_EXTENSIONS.iter().map(|ext| (*ext, ArchiveKind::Rar)));
        entries.extend(ZIP_EXTENSIONS.iter().map(|ext| (*ext, ArchiveKind::Zip)));
        Registry { entries }
    }

    pub fn suffixes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(ext, _)| *ext)
    }

    /// Kind of the first registered suffix that `filename` ends with
    ///
    /// Compares raw bytes so names that are not valid UTF-8 still match.
    pub fn classify(&self, filename: &OsStr) -> Option<ArchiveKind> {
        self.entries
            .iter()
            .find(|(ext, _)| has_suffix(filename, ext))
            .map(|(_, kind)| *kind)
    }
}

pub fn has_suffix(filename: &OsStr, suffix: &str) -> bool {
    filename.as_encoded_bytes().ends_with(suffix.as_bytes())
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order() {
        let registry = Registry::new();
        let suffixes: Vec<_> = registry.suffixes().collect();
        assert_eq!(suffixes, vec![".rar", ".r01", ".zip"]);
    }

    fn classify(name: &str) -> Option<ArchiveKind> {
        Registry::new().classify(OsStr::new(name))
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("film.rar"), Some(ArchiveKind::Rar));
        assert_eq!(classify("film.r01"), Some(ArchiveKind::Rar));
        assert_eq!(classify("photos.zip"), Some(ArchiveKind::Zip));
        assert_eq!(classify("film.r02"), None);
        assert_eq!(classify("film.nfo"), None);
        // Matching is case-sensitive
        assert_eq!(classify("FILM.RAR"), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_classify_non_utf8_name() {
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"film\xff.rar");
        assert_eq!(Registry::new().classify(name), Some(ArchiveKind::Rar));
    }
}
