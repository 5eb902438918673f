// Copyright (c) 2024 genzip contributors
// MIT License (https://opensource.org/licenses/MIT)

//! # genzip
//!
//! A synchronous, in-memory ZIP archive generation crate.
//!
//! ## Features
//! - Builds a complete ZIP archive in memory from a sequence of named byte buffers.
//! - Unusable entries (absent content, or an absent/blank filename) are silently
//!   filtered rather than failing the whole archive.
//! - Entries are compressed with Deflate at the fastest level via the `zip` backend.

pub mod entry;
pub mod error;
pub mod write;

pub use crate::entry::builder::ZipFileEntryBuilder;
pub use crate::entry::ZipFileEntry;
pub use crate::write::create_zip_archive;
