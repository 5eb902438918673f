// Copyright (c) 2024 genzip contributors
// MIT License (https://opensource.org/licenses/MIT)

//! A module which holds relevant error reporting structures/types.

use thiserror::Error;

/// A Result type alias over ZipError to minimise repetition.
pub type Result<V> = std::result::Result<V, ZipError>;

/// An enum of possible errors and their descriptions.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ZipError {
    #[error("no entry sequence was provided")]
    MissingEntries,

    #[error("an upstream writer returned an error: {0}")]
    UpstreamWriteError(#[from] std::io::Error),
    #[error("the ZIP backend returned an error: {0}")]
    ArchiveWriteError(#[from] zip::result::ZipError),
}
