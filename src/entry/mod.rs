// Copyright (c) 2024 genzip contributors
// MIT License (https://opensource.org/licenses/MIT)

pub mod builder;

use crate::entry::builder::ZipFileEntryBuilder;

/// Stores the name and raw content of one file to be placed in a ZIP archive.
///
/// Both fields are optional: an absent filename or absent content is ordinary
/// data rather than an error, and [`create_zip_archive`] skips any entry which
/// is not [usable](ZipFileEntry::is_usable). A zero-length content buffer is
/// present, not absent, and produces an empty file in the archive.
///
/// # Builder pattern
/// An entry with both fields set can be constructed directly via
/// [`ZipFileEntry::new`]; to set the fields selectively, the
/// [`ZipFileEntryBuilder`] builder must be used.
///
/// Non-allocating conversions between these two structures can be achieved via
/// the [`From`] implementations.
///
/// [`create_zip_archive`]: crate::write::create_zip_archive
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZipFileEntry {
    pub(crate) filename: Option<String>,
    pub(crate) content: Option<Vec<u8>>,
}

impl From<ZipFileEntryBuilder> for ZipFileEntry {
    fn from(builder: ZipFileEntryBuilder) -> Self {
        builder.0
    }
}

impl From<(String, Vec<u8>)> for ZipFileEntry {
    fn from((filename, content): (String, Vec<u8>)) -> Self {
        Self::new(filename, content)
    }
}

impl ZipFileEntry {
    /// Constructs a new entry from a filename and its full content.
    pub fn new(filename: String, content: Vec<u8>) -> Self {
        Self { filename: Some(filename), content: Some(content) }
    }

    /// Returns the entry's filename, if one was set.
    ///
    /// # Note
    /// The filename is stored verbatim and used verbatim as the archive path
    /// during ZIP creation. No sanitisation or collision detection takes place,
    /// so duplicate filenames produce duplicate archive entries.
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Returns the entry's content, if any was set.
    pub fn content(&self) -> Option<&[u8]> {
        self.content.as_deref()
    }

    /// Returns whether this entry can be written into an archive.
    ///
    /// An entry is usable when its content is present and its filename is
    /// present with at least one non-whitespace character.
    pub fn is_usable(&self) -> bool {
        self.parts().is_some()
    }

    /// Borrows the filename and content of a usable entry in one step.
    pub(crate) fn parts(&self) -> Option<(&str, &[u8])> {
        let filename = self.filename.as_deref().filter(|name| !name.trim().is_empty())?;
        let content = self.content.as_deref()?;
        Some((filename, content))
    }
}
