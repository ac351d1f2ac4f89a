//! DNS record types.
//!
//! The type registry covers the RFC 1035 record types plus AAAA, LOC,
//! SRV, NAPTR, the EDNS OPT pseudo-type, and the DNSSEC types from
//! RFC 4034 / RFC 5155.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;

/// DNS record type.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    IntoPrimitive,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u16)]
pub enum RecordType {
    /// IPv4 address - RFC 1035
    A = 1,

    /// Authoritative name server - RFC 1035
    NS = 2,

    /// Canonical name (alias) - RFC 1035
    CNAME = 5,

    /// Start of authority - RFC 1035
    SOA = 6,

    /// Mailbox domain name - RFC 1035
    MB = 7,

    /// Mail group member - RFC 1035
    MG = 8,

    /// Mail rename domain name - RFC 1035
    MR = 9,

    /// Domain name pointer - RFC 1035
    PTR = 12,

    /// Host information - RFC 1035
    HINFO = 13,

    /// Mailbox or mail list information - RFC 1035
    MINFO = 14,

    /// Mail exchange - RFC 1035
    MX = 15,

    /// Text strings - RFC 1035
    TXT = 16,

    /// IPv6 address - RFC 3596
    AAAA = 28,

    /// Location - RFC 1876
    LOC = 29,

    /// Server selection - RFC 2782
    SRV = 33,

    /// Naming authority pointer - RFC 3403
    NAPTR = 35,

    /// EDNS(0) option pseudo-record - RFC 6891
    OPT = 41,

    /// Delegation signer - RFC 4034
    DS = 43,

    /// DNSSEC signature - RFC 4034
    RRSIG = 46,

    /// Next secure - RFC 4034
    NSEC = 47,

    /// DNS public key - RFC 4034
    DNSKEY = 48,

    /// Next secure v3 - RFC 5155
    NSEC3 = 50,

    /// NSEC3 parameters - RFC 5155
    NSEC3PARAM = 51,

    /// Incremental zone transfer - RFC 1995 (query type, not a real RR)
    IXFR = 251,

    /// Full zone transfer - RFC 5936 (query type, not a real RR)
    AXFR = 252,

    /// Any record type - RFC 1035 (query type, not a real RR)
    ANY = 255,
}

impl RecordType {
    /// Returns the numeric value of the record type.
    #[inline]
    pub const fn to_u16(self) -> u16 {
        self as u16
    }

    /// Creates a record type from its numeric value.
    #[inline]
    pub fn from_u16(value: u16) -> Option<Self> {
        Self::try_from(value).ok()
    }

    /// Returns true if this is a DNSSEC-related record type.
    #[inline]
    pub const fn is_dnssec(self) -> bool {
        matches!(
            self,
            Self::DS | Self::RRSIG | Self::NSEC | Self::DNSKEY | Self::NSEC3 | Self::NSEC3PARAM
        )
    }

    /// Returns true if this is a query-only type (QTYPE).
    #[inline]
    pub const fn is_query_type(self) -> bool {
        matches!(self, Self::IXFR | Self::AXFR | Self::ANY)
    }

    /// Returns true if this is a pseudo-record type.
    #[inline]
    pub const fn is_pseudo_record(self) -> bool {
        matches!(self, Self::OPT)
    }

    /// Returns true if this type's payload contains a domain name.
    #[inline]
    pub const fn has_embedded_name(self) -> bool {
        matches!(
            self,
            Self::NS
                | Self::CNAME
                | Self::SOA
                | Self::MB
                | Self::MG
                | Self::MR
                | Self::PTR
                | Self::MINFO
                | Self::MX
                | Self::SRV
                | Self::NAPTR
                | Self::RRSIG
                | Self::NSEC
        )
    }

    /// Returns the human-readable name of the record type.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::NS => "NS",
            Self::CNAME => "CNAME",
            Self::SOA => "SOA",
            Self::MB => "MB",
            Self::MG => "MG",
            Self::MR => "MR",
            Self::PTR => "PTR",
            Self::HINFO => "HINFO",
            Self::MINFO => "MINFO",
            Self::MX => "MX",
            Self::TXT => "TXT",
            Self::AAAA => "AAAA",
            Self::LOC => "LOC",
            Self::SRV => "SRV",
            Self::NAPTR => "NAPTR",
            Self::OPT => "OPT",
            Self::DS => "DS",
            Self::RRSIG => "RRSIG",
            Self::NSEC => "NSEC",
            Self::DNSKEY => "DNSKEY",
            Self::NSEC3 => "NSEC3",
            Self::NSEC3PARAM => "NSEC3PARAM",
            Self::IXFR => "IXFR",
            Self::AXFR => "AXFR",
            Self::ANY => "ANY",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Default for RecordType {
    fn default() -> Self {
        Self::A
    }
}

/// A type value that can represent both standard types and unknown
/// values (rendered `TYPE####` per RFC 3597), preserving them across a
/// decode/encode round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
    /// A known, standard record type.
    Known(RecordType),
    /// An unknown type value.
    Unknown(u16),
}

impl Type {
    /// Creates a type from a u16 value.
    #[inline]
    pub fn from_u16(value: u16) -> Self {
        RecordType::from_u16(value)
            .map(Self::Known)
            .unwrap_or(Self::Unknown(value))
    }

    /// Returns the numeric value.
    #[inline]
    pub const fn to_u16(self) -> u16 {
        match self {
            Self::Known(t) => t.to_u16(),
            Self::Unknown(v) => v,
        }
    }

    /// Returns the standard type if known.
    #[inline]
    pub const fn as_known(self) -> Option<RecordType> {
        match self {
            Self::Known(t) => Some(t),
            Self::Unknown(_) => None,
        }
    }
}

impl From<RecordType> for Type {
    fn from(t: RecordType) -> Self {
        Self::Known(t)
    }
}

impl From<u16> for Type {
    fn from(value: u16) -> Self {
        Self::from_u16(value)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(t) => write!(f, "{t}"),
            Self::Unknown(v) => write!(f, "TYPE{v}"),
        }
    }
}

impl Default for Type {
    fn default() -> Self {
        Self::Known(RecordType::A)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rtype_values() {
        assert_eq!(RecordType::A.to_u16(), 1);
        assert_eq!(RecordType::MINFO.to_u16(), 14);
        assert_eq!(RecordType::AAAA.to_u16(), 28);
        assert_eq!(RecordType::LOC.to_u16(), 29);
        assert_eq!(RecordType::OPT.to_u16(), 41);
        assert_eq!(RecordType::NSEC3PARAM.to_u16(), 51);
        assert_eq!(RecordType::ANY.to_u16(), 255);
    }

    #[test]
    fn test_rtype_from_u16() {
        assert_eq!(RecordType::from_u16(1), Some(RecordType::A));
        assert_eq!(RecordType::from_u16(46), Some(RecordType::RRSIG));
        assert_eq!(RecordType::from_u16(65535), None);
    }

    #[test]
    fn test_rtype_predicates() {
        assert!(RecordType::DNSKEY.is_dnssec());
        assert!(RecordType::RRSIG.is_dnssec());
        assert!(!RecordType::A.is_dnssec());

        assert!(RecordType::AXFR.is_query_type());
        assert!(RecordType::ANY.is_query_type());
        assert!(!RecordType::A.is_query_type());

        assert!(RecordType::OPT.is_pseudo_record());
        assert!(!RecordType::A.is_pseudo_record());

        assert!(RecordType::MX.has_embedded_name());
        assert!(!RecordType::TXT.has_embedded_name());
    }

    #[test]
    fn test_generic_type() {
        let t = Type::from_u16(1);
        assert_eq!(t.as_known(), Some(RecordType::A));

        let t = Type::from_u16(65534);
        assert_eq!(t.as_known(), None);
        assert_eq!(t.to_u16(), 65534);
        assert_eq!(t.to_string(), "TYPE65534");
    }
}
