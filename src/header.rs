//! DNS message header.
//!
//! The header is a fixed 12-byte structure at the start of every DNS
//! message, carrying the message ID, the packed flag word, and the four
//! section counts.

use crate::error::{Error, Result};
use crate::opcode::OpCode;
use crate::rcode::ResponseCode;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Size of the DNS header in bytes.
pub const HEADER_SIZE: usize = 12;

bitflags! {
    /// DNS header flag bits.
    ///
    /// The flag word also carries the opcode (bits 11-14) and rcode
    /// (bits 0-3), which are kept in separate [`Header`] fields.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HeaderFlags: u16 {
        /// Query/Response flag: 0 = query, 1 = response
        const QR = 0x8000;

        /// Authoritative Answer: server is authoritative for the domain
        const AA = 0x0400;

        /// Truncation: message was truncated
        const TC = 0x0200;

        /// Recursion Desired: client wants recursive resolution
        const RD = 0x0100;

        /// Recursion Available: server supports recursion
        const RA = 0x0080;

        /// Reserved for future use (must be zero)
        const Z = 0x0040;

        /// Authentic Data: response data is authenticated (DNSSEC)
        const AD = 0x0020;

        /// Checking Disabled: disable DNSSEC validation
        const CD = 0x0010;
    }
}

impl Default for HeaderFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl Serialize for HeaderFlags {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u16(self.bits())
    }
}

impl<'de> Deserialize<'de> for HeaderFlags {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(Self::from_bits_truncate(u16::deserialize(deserializer)?))
    }
}

/// DNS message header.
///
/// # Wire Format
///
/// ```text
///                                 1  1  1  1  1  1
///   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                      ID                       |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |QR|   Opcode  |AA|TC|RD|RA| Z|AD|CD|   RCODE   |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                    QDCOUNT                    |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                    ANCOUNT                    |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                    NSCOUNT                    |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                    ARCOUNT                    |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// ```
///
/// All multi-byte fields are network byte order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Message identifier for matching requests to responses.
    pub id: u16,

    /// Flag bits (QR, AA, TC, RD, RA, Z, AD, CD).
    pub flags: HeaderFlags,

    /// Operation code.
    pub opcode: OpCode,

    /// Response code (4-bit header field).
    pub rcode: ResponseCode,

    /// Number of questions.
    pub qd_count: u16,

    /// Number of answer records.
    pub an_count: u16,

    /// Number of authority records.
    pub ns_count: u16,

    /// Number of additional records.
    pub ar_count: u16,
}

impl Header {
    /// Creates a new header with the given message ID.
    #[inline]
    pub const fn new(id: u16) -> Self {
        Self {
            id,
            flags: HeaderFlags::empty(),
            opcode: OpCode::Query,
            rcode: ResponseCode::NoError,
            qd_count: 0,
            an_count: 0,
            ns_count: 0,
            ar_count: 0,
        }
    }

    /// Creates a query header with a random ID and recursion desired.
    pub fn query() -> Self {
        Self {
            id: rand::random(),
            flags: HeaderFlags::RD,
            opcode: OpCode::Query,
            rcode: ResponseCode::NoError,
            qd_count: 1,
            an_count: 0,
            ns_count: 0,
            ar_count: 0,
        }
    }

    /// Creates a response header from a query header.
    pub fn response_from(query: &Header) -> Self {
        Self {
            id: query.id,
            flags: HeaderFlags::QR | (query.flags & HeaderFlags::RD),
            opcode: query.opcode,
            rcode: ResponseCode::NoError,
            qd_count: query.qd_count,
            an_count: 0,
            ns_count: 0,
            ar_count: 0,
        }
    }

    /// Returns true if this is a query.
    #[inline]
    pub fn is_query(&self) -> bool {
        !self.flags.contains(HeaderFlags::QR)
    }

    /// Returns true if this is a response.
    #[inline]
    pub fn is_response(&self) -> bool {
        self.flags.contains(HeaderFlags::QR)
    }

    /// Returns true if the response is from an authoritative server.
    #[inline]
    pub fn is_authoritative(&self) -> bool {
        self.flags.contains(HeaderFlags::AA)
    }

    /// Returns true if the message was truncated.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.flags.contains(HeaderFlags::TC)
    }

    /// Returns true if recursion was requested.
    #[inline]
    pub fn recursion_desired(&self) -> bool {
        self.flags.contains(HeaderFlags::RD)
    }

    /// Returns true if recursion is available.
    #[inline]
    pub fn recursion_available(&self) -> bool {
        self.flags.contains(HeaderFlags::RA)
    }

    /// Returns true if the response data is authenticated (DNSSEC).
    #[inline]
    pub fn is_authentic_data(&self) -> bool {
        self.flags.contains(HeaderFlags::AD)
    }

    /// Returns true if DNSSEC checking is disabled.
    #[inline]
    pub fn checking_disabled(&self) -> bool {
        self.flags.contains(HeaderFlags::CD)
    }

    /// Sets or clears the QR flag.
    #[inline]
    pub fn set_response(&mut self, response: bool) {
        self.flags.set(HeaderFlags::QR, response);
    }

    /// Sets or clears the AA flag.
    #[inline]
    pub fn set_authoritative(&mut self, aa: bool) {
        self.flags.set(HeaderFlags::AA, aa);
    }

    /// Sets or clears the TC flag.
    #[inline]
    pub fn set_truncated(&mut self, tc: bool) {
        self.flags.set(HeaderFlags::TC, tc);
    }

    /// Sets or clears the RD flag.
    #[inline]
    pub fn set_recursion_desired(&mut self, rd: bool) {
        self.flags.set(HeaderFlags::RD, rd);
    }

    /// Sets or clears the RA flag.
    #[inline]
    pub fn set_recursion_available(&mut self, ra: bool) {
        self.flags.set(HeaderFlags::RA, ra);
    }

    /// Sets or clears the AD flag.
    #[inline]
    pub fn set_authentic_data(&mut self, ad: bool) {
        self.flags.set(HeaderFlags::AD, ad);
    }

    /// Sets or clears the CD flag.
    #[inline]
    pub fn set_checking_disabled(&mut self, cd: bool) {
        self.flags.set(HeaderFlags::CD, cd);
    }

    /// Parses a header from the first 12 bytes of `data`.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE {
            return Err(Error::buffer_too_short(HEADER_SIZE, data.len()));
        }

        let id = u16::from_be_bytes([data[0], data[1]]);
        let flags_raw = u16::from_be_bytes([data[2], data[3]]);

        // Opcode occupies bits 11-14.
        let opcode_value = ((flags_raw >> 11) & 0x0F) as u8;
        let opcode =
            OpCode::from_u8(opcode_value).ok_or(Error::InvalidOpCode {
                value: opcode_value,
            })?;

        // Rcode occupies bits 0-3.
        let rcode_value = (flags_raw & 0x0F) as u8;
        let rcode = ResponseCode::from_u8(rcode_value).ok_or(Error::InvalidResponseCode {
            value: u16::from(rcode_value),
        })?;

        let flags = HeaderFlags::from_bits_truncate(flags_raw);

        let qd_count = u16::from_be_bytes([data[4], data[5]]);
        let an_count = u16::from_be_bytes([data[6], data[7]]);
        let ns_count = u16::from_be_bytes([data[8], data[9]]);
        let ar_count = u16::from_be_bytes([data[10], data[11]]);

        Ok(Self {
            id,
            flags,
            opcode,
            rcode,
            qd_count,
            an_count,
            ns_count,
            ar_count,
        })
    }

    /// Serializes the header to its 12-byte wire format.
    pub fn to_wire(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];

        buf[0..2].copy_from_slice(&self.id.to_be_bytes());

        let mut flags_raw = self.flags.bits();
        flags_raw |= u16::from(self.opcode.to_u8()) << 11;
        flags_raw |= u16::from(self.rcode.to_u8());

        buf[2..4].copy_from_slice(&flags_raw.to_be_bytes());
        buf[4..6].copy_from_slice(&self.qd_count.to_be_bytes());
        buf[6..8].copy_from_slice(&self.an_count.to_be_bytes());
        buf[8..10].copy_from_slice(&self.ns_count.to_be_bytes());
        buf[10..12].copy_from_slice(&self.ar_count.to_be_bytes());

        buf
    }

    /// Appends the header wire format to a buffer.
    pub fn write_to(&self, buf: &mut bytes::BytesMut) {
        buf.extend_from_slice(&self.to_wire());
    }

    /// Returns the lowercase flag mnemonics that are set, in header
    /// bit order.
    pub(crate) fn flag_names(&self) -> Vec<&'static str> {
        [
            (HeaderFlags::QR, "qr"),
            (HeaderFlags::AA, "aa"),
            (HeaderFlags::TC, "tc"),
            (HeaderFlags::RD, "rd"),
            (HeaderFlags::RA, "ra"),
            (HeaderFlags::Z, "z"),
            (HeaderFlags::AD, "ad"),
            (HeaderFlags::CD, "cd"),
        ]
        .iter()
        .filter(|(flag, _)| self.flags.contains(*flag))
        .map(|&(_, name)| name)
        .collect()
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new(0)
    }
}

impl fmt::Display for Header {
    /// Renders the dig-style header summary:
    ///
    /// ```text
    /// ;; ->>HEADER<<- opcode: QUERY, status: NOERROR, id: 48404
    /// ;; flags: qr aa rd ra;
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            ";; ->>HEADER<<- opcode: {}, status: {}, id: {}",
            self.opcode, self.rcode, self.id
        )?;
        write!(f, ";; flags: {};", self.flag_names().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_roundtrip() {
        let mut header = Header::query();
        header.id = 0x1234;
        header.set_recursion_desired(true);
        header.qd_count = 1;

        let wire = header.to_wire();
        let parsed = Header::parse(&wire).unwrap();

        assert_eq!(header, parsed);
    }

    #[test]
    fn test_flag_word_layout() {
        let mut header = Header::new(0);
        header.set_response(true);
        header.set_recursion_desired(true);
        header.opcode = OpCode::Status;
        header.rcode = ResponseCode::Refused;

        let wire = header.to_wire();
        let flags = u16::from_be_bytes([wire[2], wire[3]]);

        // QR | opcode=2 | RD | rcode=5
        assert_eq!(flags, 0x8000 | (2 << 11) | 0x0100 | 5);
        // Big-endian placement of the flag word.
        assert_eq!(wire[2], (flags >> 8) as u8);
        assert_eq!(wire[3], (flags & 0xFF) as u8);
    }

    #[test]
    fn test_header_flags() {
        let mut header = Header::new(0);

        header.set_response(true);
        assert!(header.is_response());
        assert!(!header.is_query());

        header.set_authoritative(true);
        assert!(header.is_authoritative());

        header.set_truncated(true);
        assert!(header.is_truncated());

        header.set_authentic_data(true);
        assert!(header.is_authentic_data());

        header.set_checking_disabled(true);
        assert!(header.checking_disabled());
    }

    #[test]
    fn test_header_parse_too_short() {
        let result = Header::parse(&[0; 10]);
        assert!(matches!(result, Err(Error::BufferTooShort { .. })));
    }

    #[test]
    fn test_header_parse_bad_opcode() {
        let mut wire = Header::new(1).to_wire();
        wire[2] = 3 << 3; // opcode 3 is unassigned
        assert!(matches!(
            Header::parse(&wire),
            Err(Error::InvalidOpCode { value: 3 })
        ));
    }

    #[test]
    fn test_response_from_query() {
        let query = Header::query();
        let response = Header::response_from(&query);

        assert_eq!(query.id, response.id);
        assert!(query.is_query());
        assert!(response.is_response());
        assert_eq!(query.recursion_desired(), response.recursion_desired());
    }

    #[test]
    fn test_header_display() {
        let mut header = Header::query();
        header.id = 48404;
        header.set_response(true);
        header.set_authoritative(true);
        header.set_recursion_available(true);

        let display = header.to_string();
        assert_eq!(
            display,
            ";; ->>HEADER<<- opcode: QUERY, status: NOERROR, id: 48404\n\
             ;; flags: qr aa rd ra;"
        );
    }
}
