// Copyright (c) 2024 genzip contributors
// MIT License (https://opensource.org/licenses/MIT)

//! A module which supports writing ZIP archives into an in-memory buffer.
//!
//! # Example
//! ```
//! # use genzip::{create_zip_archive, ZipFileEntry};
//! # use genzip::error::ZipError;
//! #
//! # fn run() -> Result<(), ZipError> {
//! let entries = vec![
//!     ZipFileEntry::new(String::from("foo.txt"), b"This is an example file.".to_vec()),
//!     ZipFileEntry::new(String::from("bar.txt"), b"This is another example file.".to_vec()),
//! ];
//!
//! let bytes = create_zip_archive(Some(entries))?;
//! #   Ok(())
//! # }
//! ```

use std::io::{Cursor, Write};

use tracing::trace;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::entry::ZipFileEntry;
use crate::error::{Result, ZipError};

/// The Deflate level handed to the backend; prioritises speed over ratio.
const FASTEST_DEFLATE_LEVEL: i64 = 1;

/// Builds a ZIP archive in memory from a sequence of entries.
///
/// Entries are written in iteration order, each under its exact filename.
/// An entry which is not [usable](ZipFileEntry::is_usable) is skipped without
/// error, so a single malformed entry never aborts the archive for the others.
/// Duplicate filenames are written as duplicate archive entries.
///
/// The sequence is consumed in a single pass and may be lazily produced. The
/// returned buffer is a complete, standalone archive readable by any
/// conformant ZIP reader.
///
/// # Errors
/// Returns [`ZipError::MissingEntries`] when `entries` is `None`. An empty
/// sequence is not an error and produces a valid archive with no entries.
#[tracing::instrument(skip(entries))]
pub fn create_zip_archive<I>(entries: Option<I>) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = ZipFileEntry>,
{
    let entries = entries.ok_or(ZipError::MissingEntries)?;

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(FASTEST_DEFLATE_LEVEL));

    for entry in entries {
        let Some((filename, content)) = entry.parts() else {
            trace!(filename = ?entry.filename(), "skipping unusable entry");
            continue;
        };

        writer.start_file(filename, options)?;
        writer.write_all(content)?;
    }

    Ok(writer.finish()?.into_inner())
}
