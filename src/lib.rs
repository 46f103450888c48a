//! Qt resource collection generator for compiled translations.
//!
//! Maps `.ts` translation sources to their `.qm` counterparts and emits a
//! `.qrc` document that embeds them under the `/i18n` resource prefix.
//!
//! The binary `qrcgen` prints the document for the files named on its
//! command line.

pub mod error;
pub mod generator;
pub mod model;
pub mod translation;

pub use error::QrcError;
pub use generator::qrc_xml::{generate_qrc_xml, write_qrc_xml};
pub use model::{ResourceCollection, ResourceFile, ResourceGroup};
