//! EDNS(0) OPT pseudo-RR payload (RFC 6891).
//!
//! The OPT record rides in the additional section and carries a
//! sequence of `{code, length, data}` options. Only the option list is
//! modelled here; the OPT record's reinterpreted header fields (UDP
//! payload size in the class, extended rcode and flags in the TTL) stay
//! in the surrounding [`crate::record::ResourceRecord`].

use crate::error::Result;
use crate::wire::WireReader;
use bytes::BytesMut;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Well-known EDNS option codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum EdnsOptionCode {
    /// Name Server Identifier (RFC 5001)
    Nsid = 3,
    /// Client Subnet (RFC 7871)
    ClientSubnet = 8,
    /// EDNS Expire (RFC 7314)
    Expire = 9,
    /// DNS Cookie (RFC 7873)
    Cookie = 10,
    /// TCP Keepalive (RFC 7828)
    TcpKeepalive = 11,
    /// Padding (RFC 7830)
    Padding = 12,
    /// Extended DNS Error (RFC 8914)
    ExtendedDnsError = 15,
}

impl EdnsOptionCode {
    /// Creates from the wire value.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            3 => Some(Self::Nsid),
            8 => Some(Self::ClientSubnet),
            9 => Some(Self::Expire),
            10 => Some(Self::Cookie),
            11 => Some(Self::TcpKeepalive),
            12 => Some(Self::Padding),
            15 => Some(Self::ExtendedDnsError),
            _ => None,
        }
    }

    /// Returns the human-readable name of the option code.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nsid => "NSID",
            Self::ClientSubnet => "CLIENT-SUBNET",
            Self::Expire => "EXPIRE",
            Self::Cookie => "COOKIE",
            Self::TcpKeepalive => "TCP-KEEPALIVE",
            Self::Padding => "PADDING",
            Self::ExtendedDnsError => "EDE",
        }
    }
}

/// A single EDNS option: `{code, length, data}` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdnsOption {
    /// Option code.
    pub code: u16,
    /// Option payload.
    pub data: Vec<u8>,
}

impl EdnsOption {
    /// Creates a new option.
    pub fn new(code: u16, data: impl Into<Vec<u8>>) -> Self {
        Self {
            code,
            data: data.into(),
        }
    }

    /// Returns the known option code, if any.
    pub fn known_code(&self) -> Option<EdnsOptionCode> {
        EdnsOptionCode::from_u16(self.code)
    }

    /// Returns the wire format length (4 fixed bytes plus the payload).
    pub fn wire_len(&self) -> usize {
        4 + self.data.len()
    }
}

impl fmt::Display for EdnsOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.known_code() {
            Some(code) => write!(f, "{}: {} bytes", code.name(), self.data.len()),
            None => write!(f, "OPTION{}: {} bytes", self.code, self.data.len()),
        }
    }
}

/// OPT pseudo-RR payload: the EDNS option list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Opt {
    /// The options, in wire order.
    options: SmallVec<[EdnsOption; 2]>,
}

impl Opt {
    /// Creates an empty OPT payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an OPT payload from options.
    pub fn from_options(options: impl IntoIterator<Item = EdnsOption>) -> Self {
        Self {
            options: options.into_iter().collect(),
        }
    }

    /// Returns the options.
    pub fn options(&self) -> &[EdnsOption] {
        &self.options
    }

    /// Appends an option.
    pub fn push(&mut self, option: EdnsOption) {
        self.options.push(option);
    }

    /// Returns the first option with the given code.
    pub fn option(&self, code: EdnsOptionCode) -> Option<&EdnsOption> {
        self.options.iter().find(|o| o.code == code as u16)
    }

    /// Parses an OPT payload from its rdata, consuming every option.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut options = SmallVec::new();
        let mut reader = WireReader::new(data);

        while !reader.is_empty() {
            let code = reader.read_u16()?;
            let length = reader.read_u16()? as usize;
            let payload = reader.read_bytes(length)?;
            options.push(EdnsOption::new(code, payload));
        }

        Ok(Self { options })
    }

    /// Returns the wire format length.
    pub fn wire_len(&self) -> usize {
        self.options.iter().map(EdnsOption::wire_len).sum()
    }

    /// Writes the option list to wire format, each option emitted
    /// sequentially.
    pub fn write_to(&self, buf: &mut BytesMut) {
        for option in &self.options {
            buf.extend_from_slice(&option.code.to_be_bytes());
            buf.extend_from_slice(&(option.data.len() as u16).to_be_bytes());
            buf.extend_from_slice(&option.data);
        }
    }
}

impl fmt::Display for Opt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.options.is_empty() {
            return write!(f, "(no options)");
        }

        let mut first = true;
        for option in &self.options {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{option}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_opt() {
        let opt = Opt::new();
        assert_eq!(opt.wire_len(), 0);

        let parsed = Opt::parse(&[]).unwrap();
        assert_eq!(opt, parsed);
    }

    #[test]
    fn test_single_option_roundtrip() {
        let mut opt = Opt::new();
        opt.push(EdnsOption::new(10, vec![1, 2, 3, 4, 5, 6, 7, 8]));

        let mut buf = BytesMut::new();
        opt.write_to(&mut buf);
        assert_eq!(buf.len(), opt.wire_len());
        assert_eq!(&buf[..4], &[0, 10, 0, 8]);

        let parsed = Opt::parse(&buf).unwrap();
        assert_eq!(opt, parsed);
    }

    #[test]
    fn test_multiple_options_all_parsed() {
        let opt = Opt::from_options([
            EdnsOption::new(3, b"ns1".to_vec()),
            EdnsOption::new(12, vec![0; 16]),
            EdnsOption::new(65001, vec![0xFF]),
        ]);

        let mut buf = BytesMut::new();
        opt.write_to(&mut buf);

        let parsed = Opt::parse(&buf).unwrap();
        assert_eq!(parsed.options().len(), 3);
        assert_eq!(parsed, opt);
        assert_eq!(parsed.option(EdnsOptionCode::Nsid).unwrap().data, b"ns1");
    }

    #[test]
    fn test_truncated_option() {
        // Declared length 8 with only 3 payload bytes.
        let data = [0, 10, 0, 8, 1, 2, 3];
        assert!(Opt::parse(&data).is_err());

        // Option header cut short.
        assert!(Opt::parse(&[0, 10, 0]).is_err());
    }

    #[test]
    fn test_option_display() {
        let option = EdnsOption::new(3, b"x".to_vec());
        assert_eq!(option.to_string(), "NSID: 1 bytes");

        let option = EdnsOption::new(65001, vec![]);
        assert_eq!(option.to_string(), "OPTION65001: 0 bytes");
    }
}
