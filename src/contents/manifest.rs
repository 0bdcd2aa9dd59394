// This file is part of radicle-contents
// <https://github.com/radicle-dev/radicle-contents>
//
// Copyright (C) 2019-2020 The Radicle Team <dev@radicle.xyz>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License version 3 or
// later as published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use crate::contents::entry::{DirEntry, Entry, FileEntry, OtherEntry, SymEntry};
use std::iter::FromIterator;
use std::slice;
use std::vec;

/// `ContentsBuilder` collects entries while a package's files are being
/// recorded, usually in the order a filesystem walk finds them.
///
/// Entries are appended as they are; duplicates are kept and nothing is
/// reordered. Once the walk is done, [`ContentsBuilder::freeze`] turns the
/// builder into a read-only [`Contents`].
///
/// # Examples
///
/// ```
/// use radicle_contents::contents::{ContentsBuilder, DirEntry, FileEntry};
///
/// let mut builder = ContentsBuilder::new();
/// builder.add(DirEntry::new("/usr/bin").unwrap());
/// builder.add(FileEntry::new("/usr/bin/foo").unwrap());
///
/// let contents = builder.freeze();
/// assert_eq!(contents.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContentsBuilder {
    entries: Vec<Entry>,
}

impl ContentsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with room for `capacity` entries, for producers
    /// that know roughly how large the package is.
    pub fn with_capacity(capacity: usize) -> Self {
        ContentsBuilder {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append `entry` after every entry added so far.
    pub fn add(&mut self, entry: impl Into<Entry>) {
        self.entries.push(entry.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finish recording and hand back the read-only [`Contents`].
    pub fn freeze(mut self) -> Contents {
        self.entries.shrink_to_fit();
        log::debug!("froze contents with {} entries", self.entries.len());
        Contents {
            entries: self.entries,
        }
    }
}

impl Extend<Entry> for ContentsBuilder {
    fn extend<I: IntoIterator<Item = Entry>>(&mut self, iter: I) {
        self.entries.extend(iter)
    }
}

/// `Contents` is the frozen, ordered record of everything a package
/// installed.
///
/// It can only be read: iterating yields the entries in the order they
/// were added, and every call to [`Contents::iter`] starts again from the
/// first entry. Since there is no way to change a `Contents`, it can be
/// shared between any number of readers.
///
/// There is no lookup by location here; see
/// [`crate::index::LocationIndex`] for that.
///
/// # Examples
///
/// ```
/// use radicle_contents::contents::{Contents, HasLocation};
/// use radicle_contents::contents::unsound;
///
/// let contents: Contents = vec![
///     unsound::entry::sym("/foo", "/blah"),
///     unsound::entry::file("/foo"),
///     unsound::entry::other("/dev/foo"),
///     unsound::entry::dir("/bar"),
/// ]
/// .into_iter()
/// .collect();
///
/// let locations: Vec<&str> = contents.iter().map(|e| e.location().as_str()).collect();
/// assert_eq!(locations, vec!["/foo", "/foo", "/dev/foo", "/bar"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Contents {
    entries: Vec<Entry>,
}

impl Contents {
    /// An empty `Contents`, for packages that installed nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry added at position `index`, counting from zero.
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirEntry> {
        self.iter().filter_map(Entry::as_dir)
    }

    pub fn files(&self) -> impl Iterator<Item = &FileEntry> {
        self.iter().filter_map(Entry::as_file)
    }

    pub fn symlinks(&self) -> impl Iterator<Item = &SymEntry> {
        self.iter().filter_map(Entry::as_sym)
    }

    pub fn others(&self) -> impl Iterator<Item = &OtherEntry> {
        self.iter().filter_map(Entry::as_other)
    }
}

impl<'a> IntoIterator for &'a Contents {
    type Item = &'a Entry;
    type IntoIter = slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Contents {
    type Item = Entry;
    type IntoIter = vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<Entry> for Contents {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut builder = ContentsBuilder::new();
        builder.extend(iter);
        builder.freeze()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contents::{unsound, HasLocation};
    use pretty_assertions::assert_eq;
    use proptest::collection;
    use proptest::prelude::*;

    fn sample() -> Vec<Entry> {
        vec![
            unsound::entry::sym("/foo", "/blah"),
            unsound::entry::file("/foo"),
            unsound::entry::other("/dev/foo"),
            unsound::entry::dir("/bar"),
        ]
    }

    #[test]
    fn test_iterates_in_insertion_order() {
        let entries = sample();

        let mut builder = ContentsBuilder::new();
        for entry in entries.iter().cloned() {
            builder.add(entry);
        }
        let contents = builder.freeze();

        let mut seen = 0;
        for (i, entry) in contents.iter().enumerate() {
            assert!(i < 4, "too many entries");
            assert_eq!(entry.location_key().value(), entries[i].location_key().value());
            assert_eq!(entry.kind(), entries[i].kind());
            if i == 0 {
                assert_eq!(
                    entry.target_key().unwrap().value(),
                    entries[i].target_key().unwrap().value()
                );
                assert_eq!(entry.target_key().unwrap().value().as_str(), "/blah");
            }
            seen += 1;
        }
        assert_eq!(seen, 4);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut builder = ContentsBuilder::new();
        builder.add(FileEntry::new("/foo").unwrap());
        builder.add(FileEntry::new("/foo").unwrap());
        assert_eq!(builder.len(), 2);

        let contents = builder.freeze();
        assert_eq!(contents.get(0), contents.get(1));
        assert_eq!(contents.get(2), None);
    }

    #[test]
    fn test_empty_contents() {
        let contents = Contents::new();
        assert!(contents.is_empty());
        assert_eq!(contents.iter().next(), None);
        assert_eq!(ContentsBuilder::with_capacity(16).freeze(), contents);
    }

    #[test]
    fn test_typed_views() {
        let contents: Contents = sample().into_iter().collect();

        let dirs: Vec<&str> = contents.directories().map(|d| d.location().as_str()).collect();
        let files: Vec<&str> = contents.files().map(|f| f.location().as_str()).collect();
        let syms: Vec<&str> = contents
            .symlinks()
            .map(|s| s.target_key().value().as_str())
            .collect();
        let others: Vec<&str> = contents.others().map(|o| o.location().as_str()).collect();

        assert_eq!(dirs, vec!["/bar"]);
        assert_eq!(files, vec!["/foo"]);
        assert_eq!(syms, vec!["/blah"]);
        assert_eq!(others, vec!["/dev/foo"]);
    }

    #[test]
    fn test_frozen_contents_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Contents>();

        let contents: Contents = sample().into_iter().collect();
        let contents = std::sync::Arc::new(contents);

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let contents = contents.clone();
                std::thread::spawn(move || contents.iter().count())
            })
            .collect();

        for reader in readers {
            assert_eq!(reader.join().unwrap(), 4);
        }
    }

    fn entry_strategy() -> impl Strategy<Value = Entry> {
        let location = "/[a-z0-9_./-]{0,24}";
        prop_oneof![
            location.prop_map(|l| unsound::entry::dir(&l)),
            location.prop_map(|l| unsound::entry::file(&l)),
            location.prop_map(|l| unsound::entry::other(&l)),
            (location, "[a-z0-9_./-]{1,24}").prop_map(|(l, t)| unsound::entry::sym(&l, &t)),
        ]
    }

    proptest! {
        #[test]
        fn prop_order_is_preserved_and_restartable(
            entries in collection::vec(entry_strategy(), 0..64)
        ) {
            let mut builder = ContentsBuilder::new();
            for entry in entries.iter().cloned() {
                builder.add(entry);
            }
            let contents = builder.freeze();

            prop_assert_eq!(contents.len(), entries.len());

            let first: Vec<&Entry> = contents.iter().collect();
            let second: Vec<&Entry> = (&contents).into_iter().collect();
            let expected: Vec<&Entry> = entries.iter().collect();

            prop_assert_eq!(&first, &expected);
            prop_assert_eq!(&second, &expected);
        }
    }
}
