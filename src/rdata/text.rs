//! Text and mailbox-information record types (TXT, HINFO, MINFO).

use crate::error::{Error, Result};
use crate::name::{Name, NameParser};
use crate::wire::WireReader;
use bytes::BytesMut;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// TXT record - text strings (RFC 1035).
///
/// A TXT record carries one or more counted strings, each up to 255
/// bytes. Common uses include SPF, DKIM, and domain verification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TXT {
    /// The text strings (each up to 255 bytes).
    strings: SmallVec<[Vec<u8>; 2]>,
}

impl TXT {
    /// Creates a new TXT record with the given strings.
    ///
    /// Strings longer than 255 bytes are split into chunks on encode.
    pub fn new(strings: impl IntoIterator<Item = impl Into<Vec<u8>>>) -> Self {
        Self {
            strings: strings.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a TXT record from a single string.
    pub fn from_string(s: impl Into<Vec<u8>>) -> Self {
        Self {
            strings: smallvec::smallvec![s.into()],
        }
    }

    /// Returns the text strings.
    pub fn strings(&self) -> &[Vec<u8>] {
        &self.strings
    }

    /// Returns all strings concatenated.
    ///
    /// This is the semantic value for protocols like SPF that span
    /// multiple character-strings.
    pub fn data(&self) -> Vec<u8> {
        self.strings
            .iter()
            .flat_map(|s| s.iter().copied())
            .collect()
    }

    /// Returns the concatenated data as a UTF-8 string if valid.
    pub fn text(&self) -> Option<String> {
        String::from_utf8(self.data()).ok()
    }

    /// Parses a TXT record from its rdata.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut strings = SmallVec::new();
        let mut reader = WireReader::new(data);

        while !reader.is_empty() {
            strings.push(reader.read_character_string()?.to_vec());
        }

        Ok(Self { strings })
    }

    /// Returns the wire format length.
    pub fn wire_len(&self) -> usize {
        self.strings
            .iter()
            .map(|s| {
                if s.is_empty() {
                    1
                } else {
                    s.chunks(255).map(|c| 1 + c.len()).sum()
                }
            })
            .sum()
    }

    /// Writes the TXT record to wire format.
    pub fn write_to(&self, buf: &mut BytesMut) {
        for s in &self.strings {
            if s.is_empty() {
                buf.extend_from_slice(&[0]);
                continue;
            }
            // Split over-long strings into 255-byte chunks.
            for chunk in s.chunks(255) {
                buf.extend_from_slice(&[chunk.len() as u8]);
                buf.extend_from_slice(chunk);
            }
        }
    }
}

impl fmt::Display for TXT {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for s in &self.strings {
            if !first {
                write!(f, " ")?;
            }
            first = false;

            write!(f, "\"")?;
            for &byte in s {
                if byte == b'"' || byte == b'\\' {
                    write!(f, "\\{}", byte as char)?;
                } else if byte.is_ascii_graphic() || byte == b' ' {
                    write!(f, "{}", byte as char)?;
                } else {
                    write!(f, "\\{byte:03}")?;
                }
            }
            write!(f, "\"")?;
        }
        Ok(())
    }
}

/// HINFO record - host information (RFC 1035).
///
/// Two counted strings describing CPU and operating system. Rarely
/// used today; also returned for ANY queries per RFC 8482.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HINFO {
    /// CPU type.
    cpu: Vec<u8>,
    /// Operating system.
    os: Vec<u8>,
}

impl HINFO {
    /// Creates a new HINFO record.
    pub fn new(cpu: impl Into<Vec<u8>>, os: impl Into<Vec<u8>>) -> Self {
        Self {
            cpu: cpu.into(),
            os: os.into(),
        }
    }

    /// Returns the CPU type.
    pub fn cpu(&self) -> &[u8] {
        &self.cpu
    }

    /// Returns the operating system.
    pub fn os(&self) -> &[u8] {
        &self.os
    }

    /// Parses an HINFO record from its rdata.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut reader = WireReader::new(data);
        let cpu = reader.read_character_string()?.to_vec();
        let os = reader.read_character_string()?.to_vec();

        if !reader.is_empty() {
            return Err(Error::invalid_rdata("HINFO", "trailing bytes after strings"));
        }

        Ok(Self { cpu, os })
    }

    /// Returns the wire format length.
    pub fn wire_len(&self) -> usize {
        2 + self.cpu.len().min(255) + self.os.len().min(255)
    }

    /// Writes the HINFO record to wire format.
    ///
    /// Strings are truncated to 255 bytes rather than emitting a
    /// corrupt length byte.
    pub fn write_to(&self, buf: &mut BytesMut) {
        for s in [&self.cpu, &self.os] {
            let s = &s[..s.len().min(255)];
            buf.extend_from_slice(&[s.len() as u8]);
            buf.extend_from_slice(s);
        }
    }
}

impl fmt::Display for HINFO {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" \"{}\"",
            String::from_utf8_lossy(&self.cpu),
            String::from_utf8_lossy(&self.os)
        )
    }
}

/// MINFO record - mailbox or mail list information (RFC 1035).
///
/// Two domain names: the responsible mailbox and the error mailbox.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MINFO {
    /// Mailbox responsible for the mailing list or mailbox.
    rmailbx: Name,
    /// Mailbox to receive error messages.
    emailbx: Name,
}

impl MINFO {
    /// Creates a new MINFO record.
    pub fn new(rmailbx: Name, emailbx: Name) -> Self {
        Self { rmailbx, emailbx }
    }

    /// Returns the responsible mailbox name.
    pub fn rmailbx(&self) -> &Name {
        &self.rmailbx
    }

    /// Returns the error mailbox name.
    pub fn emailbx(&self) -> &Name {
        &self.emailbx
    }

    /// Parses an MINFO record from wire format.
    ///
    /// Returns the record and the number of bytes consumed.
    pub fn parse(message: &[u8], offset: usize) -> Result<(Self, usize)> {
        let parser = NameParser::new(message);
        let (rmailbx, rlen) = parser.parse_name(offset)?;
        let (emailbx, elen) = parser.parse_name(offset + rlen)?;

        Ok((Self { rmailbx, emailbx }, rlen + elen))
    }

    /// Returns the wire format length.
    pub fn wire_len(&self) -> usize {
        self.rmailbx.wire_len() + self.emailbx.wire_len()
    }

    /// Writes the MINFO record to wire format.
    pub fn write_to(&self, buf: &mut BytesMut) {
        self.rmailbx.write_wire(buf);
        self.emailbx.write_wire(buf);
    }
}

impl fmt::Display for MINFO {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.rmailbx, self.emailbx)
    }
}
