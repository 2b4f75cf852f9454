//! JSON rendering of lookup results.

use std::io;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::Result;
use crate::whois::WhoisRecord;

/// Pretty-printing JSON formatter using 4-space indentation.
///
/// Every canonical field is always present in the output: empty strings
/// stay empty strings and a record with no statuses serializes an empty
/// array, never null.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Serializes a record to an indented JSON string.
    pub fn format(&self, record: &WhoisRecord) -> Result<String> {
        let mut buf = Vec::with_capacity(256);
        self.write(record, &mut buf)?;
        // serde_json only emits valid UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Serializes a record directly into a writer.
    pub fn write<W: io::Write>(&self, record: &WhoisRecord, writer: W) -> Result<()> {
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
        record.serialize(&mut ser)?;
        Ok(())
    }
}
