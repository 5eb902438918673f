// Copyright (c) 2024 genzip contributors
// MIT License (https://opensource.org/licenses/MIT)

use crate::entry::ZipFileEntry;

/// A builder for [`ZipFileEntry`].
#[derive(Debug, Clone, Default)]
pub struct ZipFileEntryBuilder(pub(crate) ZipFileEntry);

impl From<ZipFileEntry> for ZipFileEntryBuilder {
    fn from(entry: ZipFileEntry) -> Self {
        Self(entry)
    }
}

impl ZipFileEntryBuilder {
    /// Constructs a new builder with neither a filename nor content set.
    ///
    /// No field is validated at construction time; an entry left incomplete is
    /// simply skipped during archive creation.
    pub fn new() -> Self {
        Self(ZipFileEntry::default())
    }

    /// Sets the entry's filename.
    pub fn filename(mut self, filename: String) -> Self {
        self.0.filename = Some(filename);
        self
    }

    /// Sets the entry's content.
    pub fn content(mut self, content: Vec<u8>) -> Self {
        self.0.content = Some(content);
        self
    }

    /// Consumes this builder and returns a final [`ZipFileEntry`].
    ///
    /// This is equivalent to:
    /// ```
    /// # use genzip::{ZipFileEntry, ZipFileEntryBuilder};
    /// #
    /// # let builder = ZipFileEntryBuilder::new().filename(String::from("foo.bar"));
    /// let entry: ZipFileEntry = builder.into();
    /// ```
    pub fn build(self) -> ZipFileEntry {
        self.into()
    }
}
