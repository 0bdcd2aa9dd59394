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

//! The entries a package installs and the [`Contents`] that holds them.

pub mod error;
pub mod unsound;

mod entry;
mod key;
mod manifest;
mod path;
#[cfg(feature = "serialize")]
mod raw;

pub use entry::{
    DirEntry, Entry, EntryBuilder, EntryKind, FileEntry, HasLocation, OtherEntry, SymEntry,
};
pub use key::{names, ChecksumKey, Key, KeyName, LocationKey, MtimeKey, TargetKey};
pub use manifest::{Contents, ContentsBuilder};
pub use path::EntryPath;
