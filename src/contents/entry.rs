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

use crate::contents::error::{self, Access, Construction, Error};
use crate::contents::key::{
    names, ChecksumKey, Key, KeyName, LocationKey, MtimeKey, TargetKey,
};
use crate::contents::path::EntryPath;
use std::fmt;
use std::str::FromStr;

/// `EntryKind` is the tag of an [`Entry`], without any of its attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum EntryKind {
    Dir,
    File,
    Sym,
    Other,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Dir => "dir",
            EntryKind::File => "file",
            EntryKind::Sym => "sym",
            EntryKind::Other => "other",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = Error;

    fn from_str(item: &str) -> Result<Self, Self::Err> {
        match item {
            "dir" => Ok(EntryKind::Dir),
            "file" => Ok(EntryKind::File),
            "sym" => Ok(EntryKind::Sym),
            "other" => Ok(EntryKind::Other),
            _ => Err(error::INSTANTIATION),
        }
    }
}

/// Anything that records a filesystem location.
///
/// Every entry variant implements this, as does [`Entry`] itself, so
/// consumers that only care about paths do not need to know which kind of
/// node they are looking at.
pub trait HasLocation {
    fn location_key(&self) -> &LocationKey;

    /// Shorthand for `self.location_key().value()`.
    fn location(&self) -> &EntryPath {
        self.location_key().value()
    }
}

fn location_key(location: String) -> Result<LocationKey, Error> {
    EntryPath::for_key(location, names::Location::RAW_NAME).map(Key::new)
}

/// An installed directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirEntry {
    location: LocationKey,
}

impl DirEntry {
    pub fn new(location: impl Into<String>) -> Result<Self, Error> {
        Ok(DirEntry {
            location: location_key(location.into())?,
        })
    }
}

// Most files carry no checksum or mtime, so these stay out of line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
struct FileExtras {
    checksum: Option<ChecksumKey>,
    mtime: Option<MtimeKey>,
}

/// An installed regular file.
///
/// Besides its location a file may record a checksum and a modification
/// time. Neither is computed here; they are whatever the producer saw when
/// the file was merged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileEntry {
    location: LocationKey,
    extras: Option<Box<FileExtras>>,
}

impl FileEntry {
    pub fn new(location: impl Into<String>) -> Result<Self, Error> {
        Ok(FileEntry {
            location: location_key(location.into())?,
            extras: None,
        })
    }

    fn extras_mut(&mut self) -> &mut FileExtras {
        self.extras.get_or_insert_with(Box::default)
    }

    /// Attach the checksum recorded for this file.
    ///
    /// ```
    /// use radicle_contents::contents::FileEntry;
    ///
    /// let file = FileEntry::new("/usr/bin/foo")
    ///     .unwrap()
    ///     .with_checksum("d41d8cd98f00b204e9800998ecf8427e");
    ///
    /// let checksum = file.checksum_key().map(|key| key.value().as_str());
    /// assert_eq!(checksum, Some("d41d8cd98f00b204e9800998ecf8427e"));
    /// ```
    pub fn with_checksum(mut self, checksum: impl Into<String>) -> Self {
        self.extras_mut().checksum = Some(Key::new(checksum.into()));
        self
    }

    /// Attach the modification time, in seconds since the epoch.
    pub fn with_mtime(mut self, mtime: u64) -> Self {
        self.extras_mut().mtime = Some(Key::new(mtime));
        self
    }

    pub fn checksum_key(&self) -> Option<&ChecksumKey> {
        self.extras.as_ref().and_then(|extras| extras.checksum.as_ref())
    }

    pub fn mtime_key(&self) -> Option<&MtimeKey> {
        self.extras.as_ref().and_then(|extras| extras.mtime.as_ref())
    }
}

/// An installed symbolic link.
///
/// The target is the link's destination exactly as it was recorded. It is
/// never resolved, so it may be relative to the link's parent directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymEntry {
    location: LocationKey,
    target: TargetKey,
    mtime: Option<Box<MtimeKey>>,
}

impl SymEntry {
    pub fn new(location: impl Into<String>, target: impl Into<String>) -> Result<Self, Error> {
        let location = location_key(location.into())?;
        let target = EntryPath::for_key(target.into(), names::Target::RAW_NAME)?;
        Ok(SymEntry {
            location,
            target: Key::new(target),
            mtime: None,
        })
    }

    /// Attach the modification time of the link, in seconds since the epoch.
    pub fn with_mtime(mut self, mtime: u64) -> Self {
        self.mtime = Some(Box::new(Key::new(mtime)));
        self
    }

    pub fn target_key(&self) -> &TargetKey {
        &self.target
    }

    pub fn mtime_key(&self) -> Option<&MtimeKey> {
        self.mtime.as_deref()
    }
}

/// Any installed node that is not a directory, a regular file or a
/// symlink, e.g. a device node, a fifo or a socket.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OtherEntry {
    location: LocationKey,
}

impl OtherEntry {
    pub fn new(location: impl Into<String>) -> Result<Self, Error> {
        Ok(OtherEntry {
            location: location_key(location.into())?,
        })
    }
}

macro_rules! has_location {
    ($($entry:ty),*) => {
        $(
            impl HasLocation for $entry {
                fn location_key(&self) -> &LocationKey {
                    &self.location
                }
            }
        )*
    };
}

has_location!(DirEntry, FileEntry, SymEntry, OtherEntry);

/// A single node that installing a package put on disk.
///
/// The set of variants is closed: consumers are expected to `match` on it
/// and handle every kind, since directories, links and everything else are
/// removed and merged differently.
///
/// Two entries are equal when they are the same variant and all of their
/// keys hold equal values.
///
/// # Examples
///
/// ```
/// use radicle_contents::contents::{Entry, EntryKind, HasLocation, SymEntry};
///
/// let entry: Entry = SymEntry::new("/usr/lib/libfoo.so", "libfoo.so.1").unwrap().into();
///
/// assert_eq!(entry.kind(), EntryKind::Sym);
/// assert_eq!(entry.location_key().value().as_str(), "/usr/lib/libfoo.so");
/// assert_eq!(entry.target_key().unwrap().value().as_str(), "libfoo.so.1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "crate::contents::raw::RawEntry",
        into = "crate::contents::raw::RawEntry"
    )
)]
pub enum Entry {
    Dir(DirEntry),
    File(FileEntry),
    Sym(SymEntry),
    Other(OtherEntry),
}

impl Entry {
    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Dir(_) => EntryKind::Dir,
            Entry::File(_) => EntryKind::File,
            Entry::Sym(_) => EntryKind::Sym,
            Entry::Other(_) => EntryKind::Other,
        }
    }

    /// The key holding the symlink destination.
    ///
    /// Only symlinks have a target, so asking any other kind of entry for
    /// one is an [`Access::TypeMismatch`] error rather than an empty value.
    ///
    /// ```
    /// use radicle_contents::contents::{Entry, FileEntry};
    /// use radicle_contents::contents::error::{Access, Error};
    /// use radicle_contents::contents::EntryKind;
    ///
    /// let entry: Entry = FileEntry::new("/foo").unwrap().into();
    /// assert_eq!(
    ///     entry.target_key(),
    ///     Err(Error::Access(Access::TypeMismatch { kind: EntryKind::File, key: "target" }))
    /// );
    /// ```
    pub fn target_key(&self) -> Result<&TargetKey, Error> {
        match self {
            Entry::Sym(sym) => Ok(sym.target_key()),
            _ => Err(Access::TypeMismatch {
                kind: self.kind(),
                key: names::Target::RAW_NAME,
            }
            .into()),
        }
    }

    pub fn as_dir(&self) -> Option<&DirEntry> {
        match self {
            Entry::Dir(dir) => Some(dir),
            _ => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileEntry> {
        match self {
            Entry::File(file) => Some(file),
            _ => None,
        }
    }

    pub fn as_sym(&self) -> Option<&SymEntry> {
        match self {
            Entry::Sym(sym) => Some(sym),
            _ => None,
        }
    }

    pub fn as_other(&self) -> Option<&OtherEntry> {
        match self {
            Entry::Other(other) => Some(other),
            _ => None,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind() == EntryKind::Dir
    }

    pub fn is_file(&self) -> bool {
        self.kind() == EntryKind::File
    }

    pub fn is_sym(&self) -> bool {
        self.kind() == EntryKind::Sym
    }

    pub fn is_other(&self) -> bool {
        self.kind() == EntryKind::Other
    }
}

impl HasLocation for Entry {
    fn location_key(&self) -> &LocationKey {
        match self {
            Entry::Dir(dir) => dir.location_key(),
            Entry::File(file) => file.location_key(),
            Entry::Sym(sym) => sym.location_key(),
            Entry::Other(other) => other.location_key(),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Sym(sym) => write!(f, "sym {} -> {}", sym.location(), sym.target_key().value()),
            _ => write!(f, "{} {}", self.kind(), self.location()),
        }
    }
}

impl From<DirEntry> for Entry {
    fn from(dir: DirEntry) -> Self {
        Entry::Dir(dir)
    }
}

impl From<FileEntry> for Entry {
    fn from(file: FileEntry) -> Self {
        Entry::File(file)
    }
}

impl From<SymEntry> for Entry {
    fn from(sym: SymEntry) -> Self {
        Entry::Sym(sym)
    }
}

impl From<OtherEntry> for Entry {
    fn from(other: OtherEntry) -> Self {
        Entry::Other(other)
    }
}

/// Build an [`Entry`] whose kind is only known at runtime, e.g. when
/// reading a repository's records or crossing a language boundary.
///
/// All attributes are checked when [`EntryBuilder::build`] is called.
///
/// # Examples
///
/// ```
/// use radicle_contents::contents::{EntryBuilder, EntryKind};
/// use radicle_contents::contents::error::{Construction, Error};
///
/// let missing_target = EntryBuilder::new()
///     .kind(EntryKind::Sym)
///     .location("/foo")
///     .build();
/// assert_eq!(missing_target, Err(Error::Construction(Construction::MissingArgument("target"))));
///
/// let abstract_entry = EntryBuilder::new().location("/foo").build();
/// assert_eq!(abstract_entry, Err(Error::Construction(Construction::Instantiation)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryBuilder {
    kind: Option<EntryKind>,
    location: Option<String>,
    target: Option<String>,
    checksum: Option<String>,
    mtime: Option<u64>,
}

impl EntryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: EntryKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn checksum(mut self, checksum: impl Into<String>) -> Self {
        self.checksum = Some(checksum.into());
        self
    }

    pub fn mtime(mut self, mtime: u64) -> Self {
        self.mtime = Some(mtime);
        self
    }

    pub fn build(self) -> Result<Entry, Error> {
        self.try_build().map_err(|err| {
            log::trace!("rejected contents entry: {}", err);
            err
        })
    }

    fn try_build(self) -> Result<Entry, Error> {
        let kind = self.kind.ok_or(error::INSTANTIATION)?;
        let location = self.location.ok_or(error::MISSING_LOCATION)?;

        let unexpected = |key: &'static str| -> Error {
            Construction::UnexpectedArgument { kind, key }.into()
        };

        if self.target.is_some() && kind != EntryKind::Sym {
            return Err(unexpected(names::Target::RAW_NAME));
        }
        if self.checksum.is_some() && kind != EntryKind::File {
            return Err(unexpected(names::Checksum::RAW_NAME));
        }
        if self.mtime.is_some() && !(kind == EntryKind::File || kind == EntryKind::Sym) {
            return Err(unexpected(names::Mtime::RAW_NAME));
        }

        let entry = match kind {
            EntryKind::Dir => DirEntry::new(location)?.into(),
            EntryKind::Other => OtherEntry::new(location)?.into(),
            EntryKind::File => {
                let mut file = FileEntry::new(location)?;
                if let Some(checksum) = self.checksum {
                    file = file.with_checksum(checksum);
                }
                if let Some(mtime) = self.mtime {
                    file = file.with_mtime(mtime);
                }
                file.into()
            },
            EntryKind::Sym => {
                let target = self.target.ok_or(error::MISSING_TARGET)?;
                let mut sym = SymEntry::new(location, target)?;
                if let Some(mtime) = self.mtime {
                    sym = sym.with_mtime(mtime);
                }
                sym.into()
            },
        };

        Ok(entry)
    }
}
