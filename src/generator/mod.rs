//! QRC document generator.
//!
//! - [`qrc_xml`] – Serialize a [`ResourceCollection`](crate::model::ResourceCollection) to XML text.

pub mod qrc_xml;
