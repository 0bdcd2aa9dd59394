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

use crate::contents::path::EntryPath;
use std::fmt;
use std::marker::PhantomData;

/// The compile-time name of a [`Key`].
///
/// Names live on zero-sized marker types (see [`names`]) rather than in
/// each key, so a key takes exactly as much room as its value.
pub trait KeyName {
    const RAW_NAME: &'static str;
    const HUMAN_NAME: &'static str;
}

/// A named, typed and read-only attribute of an entry.
///
/// Every `Key` has a `raw_name`, which is stable and suitable for
/// machine consumption (e.g. `"location"`), and a `human_name` for
/// display (e.g. `"Location"`). Both come from the marker type `N`. The
/// value is fixed when the owning entry is constructed.
///
/// # Examples
///
/// ```
/// use radicle_contents::contents::{unsound, HasLocation};
///
/// let dir = unsound::entry::dir("/usr/share/doc");
/// let key = dir.location_key();
///
/// assert_eq!(key.raw_name(), "location");
/// assert_eq!(key.human_name(), "Location");
/// assert_eq!(key.value().as_str(), "/usr/share/doc");
/// assert_eq!(key.to_string(), "Location: /usr/share/doc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key<T, N> {
    value: T,
    name: PhantomData<N>,
}

impl<T, N: KeyName> Key<T, N> {
    pub(crate) fn new(value: T) -> Self {
        Key {
            value,
            name: PhantomData,
        }
    }

    pub fn raw_name(&self) -> &'static str {
        N::RAW_NAME
    }

    pub fn human_name(&self) -> &'static str {
        N::HUMAN_NAME
    }

    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Display, N: KeyName> fmt::Display for Key<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", N::HUMAN_NAME, self.value)
    }
}

pub type LocationKey = Key<EntryPath, names::Location>;
pub type TargetKey = Key<EntryPath, names::Target>;
pub type ChecksumKey = Key<String, names::Checksum>;
pub type MtimeKey = Key<u64, names::Mtime>;

/// Marker types naming the keys an entry can carry.
pub mod names {
    use super::KeyName;

    macro_rules! key_names {
        ($($(#[$doc:meta])* $name:ident => ($raw:expr, $human:expr)),* $(,)?) => {
            $(
                $(#[$doc])*
                #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
                pub struct $name;

                impl KeyName for $name {
                    const RAW_NAME: &'static str = $raw;
                    const HUMAN_NAME: &'static str = $human;
                }
            )*
        };
    }

    key_names! {
        /// Where the entry was installed.
        Location => ("location", "Location"),
        /// Where a symlink points.
        Target => ("target", "Target"),
        Checksum => ("checksum", "Checksum"),
        /// Seconds since the epoch.
        Mtime => ("mtime", "Modification time"),
    }
}
