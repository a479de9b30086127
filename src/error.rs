use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    /// The parsed key fell outside 1..=26.
    #[error("The key must be a number between 1 and 26")]
    InvalidKey(u64),

    #[error("Cannot read the file {}", .path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot create the file {}", .path.display())]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Decode input ended before the key byte.
    #[error("The file {} is empty, no key byte to read", .path.display())]
    MissingKeyByte { path: PathBuf },

    #[error(transparent)]
    Io(#[from] io::Error),
}
