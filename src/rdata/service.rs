//! Service-location record types (SRV, NAPTR).

use crate::error::{Error, Result};
use crate::name::{Name, NameParser};
use crate::wire::WireReader;
use bytes::BytesMut;
use serde::{Deserialize, Serialize};
use std::fmt;

/// SRV record - service locator (RFC 2782).
///
/// Used by protocols like SIP, XMPP, and LDAP to find service
/// endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SRV {
    /// Priority (lower is more preferred).
    priority: u16,
    /// Weight for load balancing among equal priority.
    weight: u16,
    /// TCP/UDP port number.
    port: u16,
    /// Target host name.
    target: Name,
}

impl SRV {
    /// Creates a new SRV record.
    pub fn new(priority: u16, weight: u16, port: u16, target: Name) -> Self {
        Self {
            priority,
            weight,
            port,
            target,
        }
    }

    /// Returns the priority (lower = more preferred).
    #[inline]
    pub const fn priority(&self) -> u16 {
        self.priority
    }

    /// Returns the weight for load balancing.
    #[inline]
    pub const fn weight(&self) -> u16 {
        self.weight
    }

    /// Returns the port number.
    #[inline]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the target host name.
    #[inline]
    pub fn target(&self) -> &Name {
        &self.target
    }

    /// Returns true if the service is declared unavailable.
    ///
    /// Per RFC 2782, a target of "." means the service does not exist.
    pub fn is_unavailable(&self) -> bool {
        self.target.is_root()
    }

    /// Parses an SRV record from wire format.
    ///
    /// Returns the record and the number of bytes consumed.
    pub fn parse(message: &[u8], offset: usize) -> Result<(Self, usize)> {
        if offset + 6 > message.len() {
            return Err(Error::buffer_too_short(offset + 6, message.len()));
        }

        let priority = u16::from_be_bytes([message[offset], message[offset + 1]]);
        let weight = u16::from_be_bytes([message[offset + 2], message[offset + 3]]);
        let port = u16::from_be_bytes([message[offset + 4], message[offset + 5]]);

        let parser = NameParser::new(message);
        let (target, name_len) = parser.parse_name(offset + 6)?;

        Ok((
            Self {
                priority,
                weight,
                port,
                target,
            },
            6 + name_len,
        ))
    }

    /// Returns the wire format length.
    pub fn wire_len(&self) -> usize {
        6 + self.target.wire_len()
    }

    /// Writes the SRV record to wire format.
    pub fn write_to(&self, buf: &mut BytesMut) {
        buf.extend_from_slice(&self.priority.to_be_bytes());
        buf.extend_from_slice(&self.weight.to_be_bytes());
        buf.extend_from_slice(&self.port.to_be_bytes());
        self.target.write_wire(buf);
    }
}

impl fmt::Display for SRV {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.priority, self.weight, self.port, self.target
        )
    }
}

/// NAPTR record - naming authority pointer (RFC 3403).
///
/// Used for URI scheme routing and other DDDS applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NAPTR {
    /// Order (lower = processed first).
    order: u16,
    /// Preference among equal order values.
    preference: u16,
    /// Flags controlling interpretation.
    flags: Vec<u8>,
    /// Service field.
    service: Vec<u8>,
    /// Regular expression for rewriting.
    regexp: Vec<u8>,
    /// Replacement domain name.
    replacement: Name,
}

impl NAPTR {
    /// Creates a new NAPTR record.
    pub fn new(
        order: u16,
        preference: u16,
        flags: impl Into<Vec<u8>>,
        service: impl Into<Vec<u8>>,
        regexp: impl Into<Vec<u8>>,
        replacement: Name,
    ) -> Self {
        Self {
            order,
            preference,
            flags: flags.into(),
            service: service.into(),
            regexp: regexp.into(),
            replacement,
        }
    }

    /// Returns the order value.
    #[inline]
    pub const fn order(&self) -> u16 {
        self.order
    }

    /// Returns the preference value.
    #[inline]
    pub const fn preference(&self) -> u16 {
        self.preference
    }

    /// Returns the flags field.
    pub fn flags(&self) -> &[u8] {
        &self.flags
    }

    /// Returns the service field.
    pub fn service(&self) -> &[u8] {
        &self.service
    }

    /// Returns the regexp field.
    pub fn regexp(&self) -> &[u8] {
        &self.regexp
    }

    /// Returns the replacement domain.
    pub fn replacement(&self) -> &Name {
        &self.replacement
    }

    /// Parses a NAPTR record from wire format.
    ///
    /// Returns the record and the number of bytes consumed.
    pub fn parse(message: &[u8], offset: usize) -> Result<(Self, usize)> {
        let mut reader = WireReader::new_at(message, offset);

        let order = reader.read_u16()?;
        let preference = reader.read_u16()?;
        let flags = reader.read_character_string()?.to_vec();
        let service = reader.read_character_string()?.to_vec();
        let regexp = reader.read_character_string()?.to_vec();

        let parser = NameParser::new(message);
        let (replacement, name_len) = parser.parse_name(reader.position())?;
        let consumed = reader.position() - offset + name_len;

        Ok((
            Self {
                order,
                preference,
                flags,
                service,
                regexp,
                replacement,
            },
            consumed,
        ))
    }

    /// Returns the wire format length.
    pub fn wire_len(&self) -> usize {
        4 + 1
            + self.flags.len().min(255)
            + 1
            + self.service.len().min(255)
            + 1
            + self.regexp.len().min(255)
            + self.replacement.wire_len()
    }

    /// Writes the NAPTR record to wire format.
    ///
    /// Character strings are truncated to 255 bytes.
    pub fn write_to(&self, buf: &mut BytesMut) {
        buf.extend_from_slice(&self.order.to_be_bytes());
        buf.extend_from_slice(&self.preference.to_be_bytes());
        for s in [&self.flags, &self.service, &self.regexp] {
            let s = &s[..s.len().min(255)];
            buf.extend_from_slice(&[s.len() as u8]);
            buf.extend_from_slice(s);
        }
        self.replacement.write_wire(buf);
    }
}

impl fmt::Display for NAPTR {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} \"{}\" \"{}\" \"{}\" {}",
            self.order,
            self.preference,
            String::from_utf8_lossy(&self.flags),
            String::from_utf8_lossy(&self.service),
            String::from_utf8_lossy(&self.regexp),
            self.replacement
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_srv_record() {
        let srv = SRV::new(10, 60, 5060, Name::from_str("sip.example.com").unwrap());
        assert_eq!(srv.priority(), 10);
        assert_eq!(srv.weight(), 60);
        assert_eq!(srv.port(), 5060);
        assert!(!srv.is_unavailable());
        assert_eq!(srv.to_string(), "10 60 5060 sip.example.com.");
    }

    #[test]
    fn test_srv_unavailable() {
        let srv = SRV::new(0, 0, 0, Name::root());
        assert!(srv.is_unavailable());
    }

    #[test]
    fn test_srv_roundtrip() {
        let srv = SRV::new(5, 100, 443, Name::from_str("web.example.com").unwrap());
        let mut buf = BytesMut::new();
        srv.write_to(&mut buf);
        assert_eq!(buf.len(), srv.wire_len());

        let (parsed, consumed) = SRV::parse(&buf, 0).unwrap();
        assert_eq!(consumed, buf.len());
        assert_eq!(srv, parsed);
    }

    #[test]
    fn test_srv_truncated() {
        let srv = SRV::new(5, 100, 443, Name::from_str("web.example.com").unwrap());
        let mut buf = BytesMut::new();
        srv.write_to(&mut buf);
        assert!(SRV::parse(&buf[..5], 0).is_err());
    }

    #[test]
    fn test_naptr_roundtrip() {
        let naptr = NAPTR::new(
            100,
            10,
            "u",
            "E2U+sip",
            "!^.*$!sip:info@example.com!",
            Name::root(),
        );
        let mut buf = BytesMut::new();
        naptr.write_to(&mut buf);
        assert_eq!(buf.len(), naptr.wire_len());

        let (parsed, consumed) = NAPTR::parse(&buf, 0).unwrap();
        assert_eq!(consumed, buf.len());
        assert_eq!(naptr, parsed);
    }

    #[test]
    fn test_naptr_display() {
        let naptr = NAPTR::new(
            100,
            10,
            "s",
            "SIP+D2U",
            "",
            Name::from_str("_sip._udp.example.com").unwrap(),
        );
        assert_eq!(
            naptr.to_string(),
            "100 10 \"s\" \"SIP+D2U\" \"\" _sip._udp.example.com."
        );
    }

    #[test]
    fn test_naptr_truncated_string() {
        // Flags string claims 5 bytes with only 2 available.
        let data = [0, 100, 0, 10, 5, b'a', b'b'];
        assert!(NAPTR::parse(&data, 0).is_err());
    }
}
