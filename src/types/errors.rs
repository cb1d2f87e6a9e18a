use std::io;
use thiserror::Error;

/// Errors produced while rewriting the `<time>` values of a `.gpx` file.
#[derive(Debug, Error)]
pub enum GpxRewriteError {
    #[error("Not a valid .gpx file: {path}")]
    InvalidExtension { path: String },
    #[error("Failed to open '{path}': {source}")]
    OpenFile {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed while reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Unrecognized time value '{raw}'")]
    UnrecognizedTime { raw: String },
    #[error("Failed while writing '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}
