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

use crate::contents::error::{self, Construction};
use std::convert::TryFrom;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// `EntryPath` is the path string recorded for an entry, either its
/// location or, for symlinks, its target.
///
/// The string is kept exactly as it was recorded: it may be relative or
/// absolute, and it is never normalised, trimmed or resolved. The only
/// requirement is that it is not empty.
///
/// # Examples
///
/// ```
/// use radicle_contents::contents::EntryPath;
/// use std::convert::TryFrom;
///
/// let path = EntryPath::try_from("../lib/libfoo.so.1").unwrap();
/// assert_eq!(path.as_str(), "../lib/libfoo.so.1");
///
/// assert!(EntryPath::try_from("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize), serde(transparent))]
pub struct EntryPath(String);

impl EntryPath {
    /// Build a path for the attribute called `key`, failing with
    /// [`Construction::MissingArgument`] naming that attribute if the path
    /// is empty.
    pub(crate) fn for_key(path: String, key: &'static str) -> Result<Self, error::Error> {
        if path.is_empty() {
            Err(Construction::MissingArgument(key).into())
        } else {
            Ok(EntryPath(path))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the recorded path starts at the filesystem root.
    ///
    /// ```
    /// use radicle_contents::contents::unsound;
    ///
    /// assert!(unsound::path::new("/usr/bin").is_absolute());
    /// assert!(!unsound::path::new("bin/foo").is_absolute());
    /// ```
    pub fn is_absolute(&self) -> bool {
        self.0.starts_with('/')
    }
}

impl Deref for EntryPath {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for EntryPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for EntryPath {
    type Error = error::Error;

    fn try_from(item: &str) -> Result<Self, Self::Error> {
        EntryPath::try_from(String::from(item))
    }
}

impl TryFrom<String> for EntryPath {
    type Error = error::Error;

    fn try_from(item: String) -> Result<Self, Self::Error> {
        if item.is_empty() {
            Err(error::EMPTY_PATH)
        } else {
            Ok(EntryPath(item))
        }
    }
}

impl FromStr for EntryPath {
    type Err = error::Error;

    fn from_str(item: &str) -> Result<Self, Self::Err> {
        EntryPath::try_from(item)
    }
}

impl From<EntryPath> for String {
    fn from(path: EntryPath) -> Self {
        path.0
    }
}

impl PartialEq<str> for EntryPath {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EntryPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
