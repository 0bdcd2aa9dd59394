pub mod path {
    use crate::contents::path::EntryPath;
    use std::convert::TryFrom;

    /// **NB**: Use with caution!
    ///
    /// Calls `try_from` on the input and expects it to not fail.
    ///
    /// Used for testing and playground purposes.
    pub fn new(path: &str) -> EntryPath {
        EntryPath::try_from(path).expect("unsound::path: Failed to parse path")
    }
}

/// **NB**: Use with caution!
///
/// Each constructor builds the entry and expects it to not fail.
///
/// Used for testing and playground purposes.
pub mod entry {
    use crate::contents::entry::{DirEntry, Entry, FileEntry, OtherEntry, SymEntry};

    pub fn dir(location: &str) -> Entry {
        DirEntry::new(location)
            .expect("unsound::entry: Failed to build dir")
            .into()
    }

    pub fn file(location: &str) -> Entry {
        FileEntry::new(location)
            .expect("unsound::entry: Failed to build file")
            .into()
    }

    pub fn sym(location: &str, target: &str) -> Entry {
        SymEntry::new(location, target)
            .expect("unsound::entry: Failed to build sym")
            .into()
    }

    pub fn other(location: &str) -> Entry {
        OtherEntry::new(location)
            .expect("unsound::entry: Failed to build other")
            .into()
    }
}
