//! DNS resource records.
//!
//! A resource record is an owner name plus a fixed header (type, class,
//! TTL, rdlength) and a typed payload. Decoding is bounded to exactly
//! the declared rdlength; a payload that consumes a different number of
//! bytes is rejected rather than silently skipped.

use crate::class::{Class, RecordClass};
use crate::error::{Error, Result};
use crate::name::{Name, NameParser};
use crate::rdata::RData;
use crate::rtype::{RecordType, Type};
use bytes::BytesMut;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of the fixed RR header fields after the owner name:
/// type (2) + class (2) + TTL (4) + rdlength (2).
const FIXED_HEADER_LEN: usize = 10;

/// A DNS resource record.
///
/// # Wire Format
///
/// ```text
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// /                      NAME                     /
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                      TYPE                     |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                     CLASS                     |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                      TTL                      |
/// |                                               |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                   RDLENGTH                    |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// /                     RDATA                     /
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceRecord {
    /// The domain name this record is for.
    name: Name,
    /// The record type.
    rtype: Type,
    /// The record class.
    rclass: Class,
    /// Time to live in seconds.
    ttl: u32,
    /// The record data.
    rdata: RData,
}

impl ResourceRecord {
    /// Creates a new resource record.
    pub fn new(name: Name, rtype: Type, rclass: Class, ttl: u32, rdata: RData) -> Self {
        Self {
            name,
            rtype,
            rclass,
            ttl,
            rdata,
        }
    }

    /// Creates a new resource record with known type and class.
    pub fn new_known(
        name: Name,
        rtype: RecordType,
        rclass: RecordClass,
        ttl: u32,
        rdata: RData,
    ) -> Self {
        Self::new(name, Type::Known(rtype), Class::Known(rclass), ttl, rdata)
    }

    /// Creates an A record.
    pub fn a(name: Name, ttl: u32, addr: std::net::Ipv4Addr) -> Self {
        Self::new_known(
            name,
            RecordType::A,
            RecordClass::IN,
            ttl,
            RData::A(crate::rdata::A::new(addr)),
        )
    }

    /// Creates an AAAA record.
    pub fn aaaa(name: Name, ttl: u32, addr: std::net::Ipv6Addr) -> Self {
        Self::new_known(
            name,
            RecordType::AAAA,
            RecordClass::IN,
            ttl,
            RData::AAAA(crate::rdata::AAAA::new(addr)),
        )
    }

    /// Creates a CNAME record.
    pub fn cname(name: Name, ttl: u32, target: Name) -> Self {
        Self::new_known(
            name,
            RecordType::CNAME,
            RecordClass::IN,
            ttl,
            RData::CNAME(crate::rdata::CNAME::new(target)),
        )
    }

    /// Creates an MX record.
    pub fn mx(name: Name, ttl: u32, preference: u16, exchange: Name) -> Self {
        Self::new_known(
            name,
            RecordType::MX,
            RecordClass::IN,
            ttl,
            RData::MX(crate::rdata::MX::new(preference, exchange)),
        )
    }

    /// Creates a TXT record from a single string.
    pub fn txt(name: Name, ttl: u32, text: impl Into<Vec<u8>>) -> Self {
        Self::new_known(
            name,
            RecordType::TXT,
            RecordClass::IN,
            ttl,
            RData::TXT(crate::rdata::TXT::from_string(text)),
        )
    }

    /// Returns the owner name.
    #[inline]
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the record type.
    #[inline]
    pub fn rtype(&self) -> Type {
        self.rtype
    }

    /// Returns the record type if known.
    #[inline]
    pub fn record_type(&self) -> Option<RecordType> {
        self.rtype.as_known()
    }

    /// Returns the record class.
    #[inline]
    pub fn rclass(&self) -> Class {
        self.rclass
    }

    /// Returns the TTL in seconds.
    #[inline]
    pub const fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Returns the record data.
    #[inline]
    pub fn rdata(&self) -> &RData {
        &self.rdata
    }

    /// Parses a resource record from wire format.
    ///
    /// Returns the record and the number of bytes consumed. The payload
    /// decode is bounded to the declared rdlength: consuming more or
    /// fewer bytes is an [`Error::RDataLengthMismatch`].
    pub fn parse(data: &[u8], offset: usize) -> Result<(Self, usize)> {
        let parser = NameParser::new(data);
        let (name, name_len) = parser.parse_name(offset)?;

        let fixed_start = offset + name_len;
        if fixed_start + FIXED_HEADER_LEN > data.len() {
            return Err(Error::buffer_too_short(
                fixed_start + FIXED_HEADER_LEN,
                data.len(),
            ));
        }

        let rtype_value = u16::from_be_bytes([data[fixed_start], data[fixed_start + 1]]);
        let rclass_value = u16::from_be_bytes([data[fixed_start + 2], data[fixed_start + 3]]);
        let ttl = u32::from_be_bytes(data[fixed_start + 4..fixed_start + 8].try_into().unwrap());
        let rdlength = u16::from_be_bytes([data[fixed_start + 8], data[fixed_start + 9]]);

        let rdata_start = fixed_start + FIXED_HEADER_LEN;
        let rdata_end = rdata_start + rdlength as usize;
        if rdata_end > data.len() {
            return Err(Error::buffer_too_short(rdata_end, data.len()));
        }

        let rtype = Type::from_u16(rtype_value);
        let rclass = Class::from_u16(rclass_value);

        let (rdata, consumed) = RData::parse(rtype, data, rdata_start, rdlength)?;
        if consumed != rdlength as usize {
            return Err(Error::rdata_length_mismatch(
                rtype.to_string(),
                rdlength as usize,
                consumed,
            ));
        }

        Ok((
            Self {
                name,
                rtype,
                rclass,
                ttl,
                rdata,
            },
            name_len + FIXED_HEADER_LEN + rdlength as usize,
        ))
    }

    /// Returns the wire format length.
    ///
    /// Exact because encoding never emits compression pointers.
    pub fn wire_len(&self) -> usize {
        self.name.wire_len() + FIXED_HEADER_LEN + self.rdata.wire_len()
    }

    /// Writes the resource record to wire format.
    ///
    /// The payload length is computable up front, so rdlength is
    /// written in a single pass before the payload.
    pub fn write_to(&self, buf: &mut BytesMut) {
        self.name.write_wire(buf);
        buf.extend_from_slice(&self.rtype.to_u16().to_be_bytes());
        buf.extend_from_slice(&self.rclass.to_u16().to_be_bytes());
        buf.extend_from_slice(&self.ttl.to_be_bytes());

        let rdlength = self.rdata.wire_len() as u16;
        buf.extend_from_slice(&rdlength.to_be_bytes());
        self.rdata.write_to(buf);
    }

    /// Converts the record to wire format bytes.
    pub fn to_wire(&self) -> Vec<u8> {
        let mut buf = BytesMut::with_capacity(self.wire_len());
        self.write_to(&mut buf);
        buf.to_vec()
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.name, self.ttl, self.rclass, self.rtype, self.rdata
        )
    }
}

/// Parser for resource record sections.
#[derive(Debug)]
pub struct RecordParser<'a> {
    /// The message data.
    data: &'a [u8],
    /// Current offset in the message.
    offset: usize,
    /// Number of records remaining.
    remaining: u16,
}

impl<'a> RecordParser<'a> {
    /// Creates a new record parser.
    #[inline]
    pub const fn new(data: &'a [u8], offset: usize, count: u16) -> Self {
        Self {
            data,
            offset,
            remaining: count,
        }
    }

    /// Returns the current offset.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Parses the next record, or returns `None` when the declared
    /// count is exhausted.
    pub fn next(&mut self) -> Result<Option<ResourceRecord>> {
        if self.remaining == 0 {
            return Ok(None);
        }

        let (record, consumed) = ResourceRecord::parse(self.data, self.offset)?;
        self.offset += consumed;
        self.remaining -= 1;

        Ok(Some(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;
    use std::str::FromStr;

    #[test]
    fn test_resource_record_a() {
        let name = Name::from_str("example.com").unwrap();
        let rr = ResourceRecord::a(name.clone(), 300, Ipv4Addr::new(192, 0, 2, 1));

        assert_eq!(rr.name(), &name);
        assert_eq!(rr.record_type(), Some(RecordType::A));
        assert_eq!(rr.ttl(), 300);
        assert_eq!(rr.rdata().as_a(), Some(Ipv4Addr::new(192, 0, 2, 1)));
    }

    #[test]
    fn test_resource_record_roundtrip() {
        let name = Name::from_str("www.example.com").unwrap();
        let original = ResourceRecord::a(name, 3600, Ipv4Addr::new(10, 0, 0, 1));

        let wire = original.to_wire();
        let (parsed, consumed) = ResourceRecord::parse(&wire, 0).unwrap();

        assert_eq!(consumed, wire.len());
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_rdlength_too_short_for_a() {
        // An A record that declares rdlength=3 must not read 4 bytes.
        let mut wire = ResourceRecord::a(
            Name::from_str("a").unwrap(),
            60,
            Ipv4Addr::new(192, 0, 2, 1),
        )
        .to_wire();
        let rdlen_pos = wire.len() - 6;
        wire[rdlen_pos] = 0;
        wire[rdlen_pos + 1] = 3;
        wire.truncate(wire.len() - 1);

        let result = ResourceRecord::parse(&wire, 0);
        assert!(result.is_err());
    }

    #[test]
    fn test_rdlength_mismatch_rejected() {
        // Declare one byte more than the A payload occupies.
        let mut wire = ResourceRecord::a(
            Name::from_str("a").unwrap(),
            60,
            Ipv4Addr::new(192, 0, 2, 1),
        )
        .to_wire();
        let rdlen_pos = wire.len() - 6;
        wire[rdlen_pos + 1] = 5;
        wire.push(0xAA);

        let result = ResourceRecord::parse(&wire, 0);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_type_preserved() {
        // TYPE65280 with a 3-byte opaque payload.
        let name_wire = [1u8, b'x', 0];
        let mut wire = Vec::new();
        wire.extend_from_slice(&name_wire);
        wire.extend_from_slice(&0xFF00u16.to_be_bytes()); // type
        wire.extend_from_slice(&1u16.to_be_bytes()); // class IN
        wire.extend_from_slice(&60u32.to_be_bytes()); // ttl
        wire.extend_from_slice(&3u16.to_be_bytes()); // rdlength
        wire.extend_from_slice(&[0xDE, 0xAD, 0xBF]);

        let (record, consumed) = ResourceRecord::parse(&wire, 0).unwrap();
        assert_eq!(consumed, wire.len());
        assert_eq!(record.rtype(), Type::Unknown(0xFF00));

        // Round-trips byte for byte.
        assert_eq!(record.to_wire(), wire);
    }

    #[test]
    fn test_record_display() {
        let name = Name::from_str("example.com").unwrap();
        let rr = ResourceRecord::a(name, 300, Ipv4Addr::new(192, 0, 2, 1));

        assert_eq!(rr.to_string(), "example.com.\t300\tIN\tA\t192.0.2.1");
    }

    #[test]
    fn test_record_parser_counts() {
        let rr = ResourceRecord::a(
            Name::from_str("example.com").unwrap(),
            300,
            Ipv4Addr::new(192, 0, 2, 1),
        );
        let mut wire = rr.to_wire();
        wire.extend_from_slice(&rr.to_wire());

        let mut parser = RecordParser::new(&wire, 0, 2);
        assert!(parser.next().unwrap().is_some());
        assert!(parser.next().unwrap().is_some());
        assert!(parser.next().unwrap().is_none());
        assert_eq!(parser.offset(), wire.len());
    }
}
