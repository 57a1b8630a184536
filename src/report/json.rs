use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

/// Single-line JSON layout with `", "` between members and `": "` after keys.
///
/// Non-ASCII characters are written as `\uXXXX` escapes (surrogate pairs outside the BMP),
/// keeping the output line pure ASCII.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }

        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Serialize `value` as one line of JSON.
pub fn to_json_line<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::with_capacity(128);
    let mut ser = Serializer::with_formatter(&mut buf, SpacedAsciiFormatter);
    value.serialize(&mut ser)?;
    // The formatter only emits ASCII.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
