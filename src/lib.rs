#![deny(unused_import_braces, unused_qualifications, warnings)]

//! Welcome to `radicle-contents`!
//!
//! `radicle-contents` records what an installed package put on disk: its
//! directories, regular files, symlinks and other nodes such as devices and
//! fifos. It is a record of what *was* installed, not a view of the live
//! filesystem, so nothing here ever touches the disk.
//!
//! Whoever installs the package walks its files and adds one
//! [`contents::Entry`] per node to a [`contents::ContentsBuilder`]. The
//! builder is then frozen into a [`contents::Contents`] that uninstall,
//! merge and query code can read as often as they like:
//!
//! ```
//! use radicle_contents::contents::{
//!     ContentsBuilder, DirEntry, Entry, FileEntry, HasLocation, OtherEntry, SymEntry,
//! };
//!
//! let mut builder = ContentsBuilder::new();
//! builder.add(SymEntry::new("/foo", "/blah").expect("Failed to build sym"));
//! builder.add(FileEntry::new("/foo").expect("Failed to build file"));
//! builder.add(OtherEntry::new("/dev/foo").expect("Failed to build other"));
//! builder.add(DirEntry::new("/bar").expect("Failed to build dir"));
//!
//! let contents = builder.freeze();
//!
//! for entry in &contents {
//!     match entry {
//!         Entry::Dir(dir) => println!("dir {}", dir.location()),
//!         Entry::File(file) => println!("obj {}", file.location()),
//!         Entry::Sym(sym) => println!("sym {} -> {}", sym.location(), sym.target_key().value()),
//!         Entry::Other(other) => println!("other {}", other.location()),
//!     }
//! }
//!
//! let first = contents.get(0).expect("Missing first entry");
//! assert_eq!(first.target_key().expect("Not a sym").value().as_str(), "/blah");
//! assert_eq!(contents.iter().count(), 4);
//! ```
pub mod contents;
pub mod index;
