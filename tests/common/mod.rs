// Copyright (c) 2024 genzip contributors
// MIT License (https://opensource.org/licenses/MIT)

use std::io::{Cursor, Read};

use genzip::ZipFileEntry;

/// Constructs a usable entry from borrowed test data.
pub fn entry(filename: &str, content: &[u8]) -> ZipFileEntry {
    ZipFileEntry::new(filename.to_string(), content.to_vec())
}

/// Reads an archive back and returns its entries as (filename, content) pairs
/// in central directory order.
pub fn read_back(bytes: Vec<u8>) -> Vec<(String, Vec<u8>)> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("expect a parseable ZIP archive");

    let mut entries = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let mut file = archive.by_index(index).expect("expect a readable entry");
        let mut content = Vec::new();
        file.read_to_end(&mut content).expect("expect readable entry content");
        entries.push((file.name().to_string(), content));
    }

    entries
}
