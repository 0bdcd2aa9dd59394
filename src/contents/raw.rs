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

//! The flat form entries take when they are serialized.
//!
//! Deserializing goes back through [`EntryBuilder`], so a serialized entry
//! is held to the same rules as one built in code.

use crate::contents::entry::{Entry, EntryBuilder, EntryKind, HasLocation};
use crate::contents::error::Error;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct RawEntry {
    #[serde(default)]
    kind: Option<EntryKind>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    checksum: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mtime: Option<u64>,
}

impl From<Entry> for RawEntry {
    fn from(entry: Entry) -> Self {
        let mut raw = RawEntry {
            kind: Some(entry.kind()),
            location: Some(entry.location().to_string()),
            target: None,
            checksum: None,
            mtime: None,
        };

        match &entry {
            Entry::Dir(_) | Entry::Other(_) => {},
            Entry::File(file) => {
                raw.checksum = file.checksum_key().map(|key| key.value().clone());
                raw.mtime = file.mtime_key().map(|key| *key.value());
            },
            Entry::Sym(sym) => {
                raw.target = Some(sym.target_key().value().to_string());
                raw.mtime = sym.mtime_key().map(|key| *key.value());
            },
        }

        raw
    }
}

impl TryFrom<RawEntry> for Entry {
    type Error = Error;

    fn try_from(raw: RawEntry) -> Result<Self, Self::Error> {
        let mut builder = EntryBuilder::new();
        if let Some(kind) = raw.kind {
            builder = builder.kind(kind);
        }
        if let Some(location) = raw.location {
            builder = builder.location(location);
        }
        if let Some(target) = raw.target {
            builder = builder.target(target);
        }
        if let Some(checksum) = raw.checksum {
            builder = builder.checksum(checksum);
        }
        if let Some(mtime) = raw.mtime {
            builder = builder.mtime(mtime);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use crate::contents::{unsound, Contents, Entry, FileEntry, SymEntry};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_entry_shape() {
        let sym = unsound::entry::sym("/foo", "/blah");
        assert_eq!(
            serde_json::to_value(&sym).unwrap(),
            json!({ "kind": "sym", "location": "/foo", "target": "/blah" })
        );

        let dir = unsound::entry::dir("/bar");
        assert_eq!(
            serde_json::to_value(&dir).unwrap(),
            json!({ "kind": "dir", "location": "/bar" })
        );
    }

    #[test]
    fn test_contents_round_trip() {
        let contents: Contents = vec![
            SymEntry::new("/foo", "/blah").unwrap().with_mtime(7).into(),
            FileEntry::new("/foo")
                .unwrap()
                .with_checksum("abc")
                .with_mtime(8)
                .into(),
            unsound::entry::other("/dev/foo"),
            unsound::entry::dir("/bar"),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&contents).unwrap();
        let back: Contents = serde_json::from_str(&json).unwrap();
        assert_eq!(back, contents);
    }

    #[test]
    fn test_invalid_entries_are_rejected() {
        let cases = vec![
            json!({ "location": "/foo" }),
            json!({ "kind": "sym", "location": "/foo" }),
            json!({ "kind": "file", "location": "" }),
            json!({ "kind": "dir", "location": "/foo", "target": "/blah" }),
            json!({ "kind": "entry", "location": "/foo" }),
        ];

        for case in cases {
            assert!(
                serde_json::from_value::<Entry>(case.clone()).is_err(),
                "accepted {}",
                case
            );
        }
    }
}
