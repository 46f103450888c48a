use thiserror::Error;

use crate::translation::SOURCE_SUFFIX;

#[derive(Error, Debug)]
pub enum QrcError {
    /// A translation source on the command line is not a `.ts` file.
    #[error("translation source \"{filename}\" does not end with \"{suffix}\"", suffix = SOURCE_SUFFIX)]
    MissingSuffix { filename: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
