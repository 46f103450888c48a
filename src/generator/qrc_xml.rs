//! Generate QRC XML text from a [`ResourceCollection`].
//!
//! The output is compact: no XML declaration, no indentation and no trailing
//! newline, e.g.
//!
//! ```text
//! <RCC><qresource prefix="/i18n"><file>app_de.qm</file></qresource></RCC>
//! ```
//!
//! `rcc` accepts this form as-is.

use crate::error::QrcError;
use crate::model::*;
use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

/// Generate the QRC document for `rcc` as a string.
pub fn generate_qrc_xml(rcc: &ResourceCollection) -> Result<String, QrcError> {
    let mut buf = Vec::with_capacity(64 + 32 * rcc.len());
    write_qrc_xml(rcc, &mut buf)?;
    // Markup is ASCII and all text comes from `&str`, so the buffer is UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write the QRC document for `rcc` to `out`.
pub fn write_qrc_xml<W: Write>(rcc: &ResourceCollection, out: W) -> Result<(), QrcError> {
    let mut writer = Writer::new(out);
    writer.write_event(Event::Start(BytesStart::new("RCC")))?;
    write_group(&mut writer, &rcc.group)?;
    writer.write_event(Event::End(BytesEnd::new("RCC")))?;
    Ok(())
}

fn write_group<W: Write>(writer: &mut Writer<W>, group: &ResourceGroup) -> Result<(), QrcError> {
    let start = BytesStart::new("qresource").with_attributes([("prefix", group.prefix.as_str())]);
    writer.write_event(Event::Start(start))?;
    for file in &group.files {
        write_file(writer, file)?;
    }
    writer.write_event(Event::End(BytesEnd::new("qresource")))?;
    Ok(())
}

fn write_file<W: Write>(writer: &mut Writer<W>, file: &ResourceFile) -> Result<(), QrcError> {
    writer.write_event(Event::Start(BytesStart::new("file")))?;
    // Quotes are legal in text content; only escape markup characters.
    let text = BytesText::from_escaped(partial_escape(file.path.as_str()));
    writer.write_event(Event::Text(text))?;
    writer.write_event(Event::End(BytesEnd::new("file")))?;
    Ok(())
}
