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

//! Errors that can occur when constructing or querying contents entries.
//!
//! Construction errors come from the [`crate::contents::EntryPath`] and
//! entry constructors, as well as [`crate::contents::EntryBuilder::build`].
//! Access errors come from asking an [`crate::contents::Entry`] for a key
//! its variant does not have.

use crate::contents::entry::EntryKind;
use thiserror::Error;

pub(crate) const EMPTY_PATH: Error = Error::Construction(Construction::EmptyPath);
pub(crate) const INSTANTIATION: Error = Error::Construction(Construction::Instantiation);
pub(crate) const MISSING_LOCATION: Error =
    Error::Construction(Construction::MissingArgument("location"));
pub(crate) const MISSING_TARGET: Error =
    Error::Construction(Construction::MissingArgument("target"));

/// Error type for all contents errors that can occur.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An entry could not be constructed.
    #[error("Construction error: {0}")]
    Construction(#[from] Construction),
    /// A key was requested from an entry that does not carry it.
    #[error("Access error: {0}")]
    Access(#[from] Access),
}

/// Errors for when an entry cannot be built from the attributes given.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Construction {
    /// No concrete entry kind was chosen, i.e. an attempt to build the
    /// abstract entry itself.
    #[error("an entry must be one of dir, file, sym or other")]
    Instantiation,
    /// A path was parsed from an empty string.
    #[error("path is empty")]
    EmptyPath,
    /// A mandatory attribute was absent or empty.
    #[error("missing required attribute `{0}`")]
    MissingArgument(&'static str),
    /// An attribute was given to a kind of entry that does not carry it.
    #[error("a `{kind}` entry has no `{key}` attribute")]
    UnexpectedArgument {
        kind: EntryKind,
        key: &'static str,
    },
}

/// Errors for when a key is requested from the wrong kind of entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Access {
    /// The entry's variant does not possess the requested key.
    #[error("a `{kind}` entry has no `{key}` key")]
    TypeMismatch {
        kind: EntryKind,
        key: &'static str,
    },
}
