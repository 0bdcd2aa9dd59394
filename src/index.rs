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

//! Lookup of entries by location, built on top of a frozen
//! [`Contents`](crate::contents::Contents).

use crate::contents::{Contents, Entry, HasLocation};
use nonempty::NonEmpty;
use std::collections::HashMap;

/// `LocationIndex` maps each recorded location to the entries recorded
/// there.
///
/// Locations are compared exactly as they were recorded, so `/foo` and
/// `/foo/` are different locations. A [`Contents`] never rejects two
/// entries at the same location; the index keeps all of them and reports
/// them through [`LocationIndex::collisions`].
///
/// # Examples
///
/// ```
/// use radicle_contents::contents::{unsound, Contents, EntryKind};
/// use radicle_contents::index::LocationIndex;
///
/// let contents: Contents = vec![
///     unsound::entry::sym("/foo", "/blah"),
///     unsound::entry::file("/foo"),
///     unsound::entry::dir("/bar"),
/// ]
/// .into_iter()
/// .collect();
///
/// let index = LocationIndex::new(&contents);
///
/// assert_eq!(index.get("/foo").map(|e| e.kind()), Some(EntryKind::File));
/// assert_eq!(index.collisions().collect::<Vec<_>>(), vec!["/foo"]);
/// assert!(index.get("/baz").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct LocationIndex<'a> {
    entries: HashMap<&'a str, NonEmpty<&'a Entry>>,
    order: Vec<&'a str>,
}

impl<'a> LocationIndex<'a> {
    pub fn new(contents: &'a Contents) -> Self {
        let mut entries: HashMap<&'a str, NonEmpty<&'a Entry>> = HashMap::new();
        let mut order = Vec::new();

        for entry in contents {
            let location = entry.location().as_str();
            match entries.get_mut(location) {
                Some(recorded) => recorded.push(entry),
                None => {
                    entries.insert(location, NonEmpty::new(entry));
                    order.push(location);
                },
            }
        }

        LocationIndex { entries, order }
    }

    /// The last entry recorded at `location`.
    ///
    /// Later entries shadow earlier ones, the same way a later merge step
    /// replaces what an earlier one put on disk.
    pub fn get(&self, location: &str) -> Option<&'a Entry> {
        self.entries.get(location).map(|recorded| *recorded.last())
    }

    /// Every entry recorded at `location`, in the order they were added.
    pub fn all(&self, location: &str) -> Option<&NonEmpty<&'a Entry>> {
        self.entries.get(location)
    }

    pub fn contains(&self, location: &str) -> bool {
        self.entries.contains_key(location)
    }

    /// The number of distinct locations.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Locations with more than one entry, in the order each was first seen.
    pub fn collisions(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.order
            .iter()
            .copied()
            .filter(move |location| self.entries.get(location).map_or(false, |e| e.len() > 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contents::{unsound, EntryKind};
    use pretty_assertions::assert_eq;

    fn contents() -> Contents {
        vec![
            unsound::entry::dir("/usr"),
            unsound::entry::file("/usr/foo"),
            unsound::entry::sym("/usr/foo", "bar"),
            unsound::entry::dir("/usr/"),
            unsound::entry::dir("/usr"),
            unsound::entry::other("/dev/foo"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_last_entry_wins() {
        let contents = contents();
        let index = LocationIndex::new(&contents);

        assert_eq!(index.get("/usr/foo").map(Entry::kind), Some(EntryKind::Sym));
        assert_eq!(index.get("/dev/foo").map(Entry::kind), Some(EntryKind::Other));
        assert!(index.contains("/usr"));
        assert!(!index.contains("/dev"));
    }

    #[test]
    fn test_all_keeps_insertion_order() {
        let contents = contents();
        let index = LocationIndex::new(&contents);

        let kinds: Vec<EntryKind> = index
            .all("/usr/foo")
            .map(|recorded| recorded.iter().map(|e| e.kind()).collect())
            .unwrap_or_default();
        assert_eq!(kinds, vec![EntryKind::File, EntryKind::Sym]);
    }

    #[test]
    fn test_locations_are_not_normalised() {
        let contents = contents();
        let index = LocationIndex::new(&contents);

        assert_eq!(index.len(), 4);
        assert_eq!(
            index.collisions().collect::<Vec<_>>(),
            vec!["/usr", "/usr/foo"]
        );
        assert_eq!(index.all("/usr/").map(|e| e.len()), Some(1));
    }

    #[test]
    fn test_empty_index() {
        let contents = Contents::new();
        let index = LocationIndex::new(&contents);

        assert!(index.is_empty());
        assert_eq!(index.collisions().count(), 0);
    }
}
