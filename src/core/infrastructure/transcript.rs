//! Console transcript of a probe run.
//!
//! The wording and markers are the probe's user-facing contract, so tests
//! match on them literally.

use crate::{LoginOutcome, ProbeResult};
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};
use std::io::{self, Write};

pub const HEADER: &str = "🔍 Testing Login...";
pub const SUCCESS_MARKER: &str = "✅ Login Successful!";
pub const FAILURE_MARKER: &str = "❌ Failed:";

/// Writes the probe transcript to any sink (stdout in the binary, a buffer in tests).
pub struct Transcript<W: Write> {
    out: W,
}

impl<W: Write> Transcript<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn header(&mut self) -> ProbeResult<()> {
        writeln!(self.out, "{}", HEADER)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn status(&mut self, status: u16) -> ProbeResult<()> {
        writeln!(self.out, "Status: {}", status)?;
        self.out.flush()?;
        Ok(())
    }

    /// Success prints the marker then the JSON with two-space indentation;
    /// failure prints the marker and the raw body on one line.
    pub fn outcome(&mut self, outcome: &LoginOutcome) -> ProbeResult<()> {
        match outcome {
            LoginOutcome::Success(value) => {
                writeln!(self.out, "{}", SUCCESS_MARKER)?;
                let formatter = AsciiPrettyFormatter::new();
                let mut serializer = Serializer::with_formatter(&mut self.out, formatter);
                value.serialize(&mut serializer).map_err(io::Error::from)?;
                writeln!(self.out)?;
            }
            LoginOutcome::Failure(body) => {
                writeln!(self.out, "{} {}", FAILURE_MARKER, body)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Two-space pretty printing with every non-ASCII character written as a
/// lowercase `\uXXXX` escape (UTF-16 surrogate pairs above U+FFFF), the
/// shape `json.dumps(value, indent=2)` produces.
struct AsciiPrettyFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl AsciiPrettyFormatter<'_> {
    fn new() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(b"  "),
        }
    }
}

impl Formatter for AsciiPrettyFormatter<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..index].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}
