//! DNS record data (RDATA) types.
//!
//! One codec per record type, organized by category:
//!
//! - **Address records**: A, AAAA
//! - **Name records**: NS, CNAME, PTR, MB, MG, MR, MX
//! - **Authority records**: SOA
//! - **Text records**: TXT, HINFO, MINFO
//! - **Service records**: SRV, NAPTR
//! - **Location records**: LOC
//! - **DNSSEC records**: DS, DNSKEY, RRSIG, NSEC, NSEC3, NSEC3PARAM
//! - **EDNS**: OPT
//!
//! [`RData::parse`] is the registry mapping a type code to its payload
//! codec; unknown type codes preserve their payload as opaque bytes.

pub mod address;
pub mod authority;
pub mod dnssec;
pub mod location;
pub mod name;
pub mod service;
pub mod text;
pub mod unknown;

pub use address::{A, AAAA};
pub use authority::SOA;
pub use dnssec::{DNSKEY, DS, NSEC, NSEC3, NSEC3PARAM, RRSIG};
pub use location::LOC;
pub use name::{CNAME, MB, MG, MR, MX, NS, PTR};
pub use service::{NAPTR, SRV};
pub use text::{HINFO, MINFO, TXT};
pub use unknown::Unknown;

use crate::edns::Opt;
use crate::error::{Error, Result};
use crate::name::Name;
use crate::rtype::{RecordType, Type};
use bytes::BytesMut;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// DNS record data.
///
/// A tagged union over all supported record payloads. Unknown record
/// types are preserved as opaque byte sequences so they survive a
/// decode/encode round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum RData {
    /// IPv4 address (A record)
    A(A),
    /// IPv6 address (AAAA record)
    AAAA(AAAA),
    /// Name server (NS record)
    NS(NS),
    /// Canonical name (CNAME record)
    CNAME(CNAME),
    /// Domain name pointer (PTR record)
    PTR(PTR),
    /// Mailbox domain name (MB record)
    MB(MB),
    /// Mail group member (MG record)
    MG(MG),
    /// Mail rename domain name (MR record)
    MR(MR),
    /// Mail exchange (MX record)
    MX(MX),
    /// Start of authority (SOA record)
    SOA(SOA),
    /// Text (TXT record)
    TXT(TXT),
    /// Host information (HINFO record)
    HINFO(HINFO),
    /// Mailbox information (MINFO record)
    MINFO(MINFO),
    /// Service location (SRV record)
    SRV(SRV),
    /// Naming authority pointer (NAPTR record)
    NAPTR(NAPTR),
    /// Geographical location (LOC record)
    LOC(LOC),
    /// EDNS option list (OPT pseudo-record)
    Opt(Opt),
    /// Delegation signer (DS record)
    DS(DS),
    /// DNS public key (DNSKEY record)
    DNSKEY(DNSKEY),
    /// DNSSEC signature (RRSIG record)
    RRSIG(RRSIG),
    /// Next secure (NSEC record)
    NSEC(NSEC),
    /// Next secure v3 (NSEC3 record)
    NSEC3(NSEC3),
    /// NSEC3 parameters (NSEC3PARAM record)
    NSEC3PARAM(NSEC3PARAM),
    /// Unknown record type, preserved as raw bytes
    Unknown(Unknown),
}

impl RData {
    /// Parses RDATA from wire format.
    ///
    /// This is the type-code registry: the record type selects the
    /// payload codec. Types whose payload may contain compressed names
    /// parse against the whole message; fixed payloads parse against
    /// the rdlength-bounded slice.
    ///
    /// Returns the payload and the number of bytes consumed, which the
    /// caller checks against the declared rdlength.
    ///
    /// # Arguments
    ///
    /// * `rtype` - The record type
    /// * `message` - The complete message (for name decompression)
    /// * `offset` - Offset of the first rdata byte
    /// * `rdlength` - Declared rdata length
    pub fn parse(rtype: Type, message: &[u8], offset: usize, rdlength: u16) -> Result<(Self, usize)> {
        let end = offset + rdlength as usize;
        let rdata_slice = message
            .get(offset..end)
            .ok_or_else(|| Error::buffer_too_short(end, message.len()))?;
        let whole = rdlength as usize;

        let known = match rtype {
            Type::Known(t) => t,
            Type::Unknown(value) => {
                return Ok((RData::Unknown(Unknown::new(value, rdata_slice)), whole));
            }
        };

        match known {
            RecordType::A => Ok((RData::A(A::parse(rdata_slice)?), whole)),
            RecordType::AAAA => Ok((RData::AAAA(AAAA::parse(rdata_slice)?), whole)),
            RecordType::NS => {
                let (rd, consumed) = NS::parse(message, offset)?;
                Ok((RData::NS(rd), consumed))
            }
            RecordType::CNAME => {
                let (rd, consumed) = CNAME::parse(message, offset)?;
                Ok((RData::CNAME(rd), consumed))
            }
            RecordType::PTR => {
                let (rd, consumed) = PTR::parse(message, offset)?;
                Ok((RData::PTR(rd), consumed))
            }
            RecordType::MB => {
                let (rd, consumed) = MB::parse(message, offset)?;
                Ok((RData::MB(rd), consumed))
            }
            RecordType::MG => {
                let (rd, consumed) = MG::parse(message, offset)?;
                Ok((RData::MG(rd), consumed))
            }
            RecordType::MR => {
                let (rd, consumed) = MR::parse(message, offset)?;
                Ok((RData::MR(rd), consumed))
            }
            RecordType::MX => {
                let (rd, consumed) = MX::parse(message, offset)?;
                Ok((RData::MX(rd), consumed))
            }
            RecordType::SOA => {
                let (rd, consumed) = SOA::parse(message, offset)?;
                Ok((RData::SOA(rd), consumed))
            }
            RecordType::TXT => Ok((RData::TXT(TXT::parse(rdata_slice)?), whole)),
            RecordType::HINFO => Ok((RData::HINFO(HINFO::parse(rdata_slice)?), whole)),
            RecordType::MINFO => {
                let (rd, consumed) = MINFO::parse(message, offset)?;
                Ok((RData::MINFO(rd), consumed))
            }
            RecordType::SRV => {
                let (rd, consumed) = SRV::parse(message, offset)?;
                Ok((RData::SRV(rd), consumed))
            }
            RecordType::NAPTR => {
                let (rd, consumed) = NAPTR::parse(message, offset)?;
                Ok((RData::NAPTR(rd), consumed))
            }
            RecordType::LOC => Ok((RData::LOC(LOC::parse(rdata_slice)?), whole)),
            RecordType::OPT => Ok((RData::Opt(Opt::parse(rdata_slice)?), whole)),
            RecordType::DS => Ok((RData::DS(DS::parse(rdata_slice)?), whole)),
            RecordType::DNSKEY => Ok((RData::DNSKEY(DNSKEY::parse(rdata_slice)?), whole)),
            RecordType::RRSIG => {
                let (rd, consumed) = RRSIG::parse(message, offset, rdlength)?;
                Ok((RData::RRSIG(rd), consumed))
            }
            RecordType::NSEC => {
                let (rd, consumed) = NSEC::parse(message, offset, rdlength)?;
                Ok((RData::NSEC(rd), consumed))
            }
            RecordType::NSEC3 => Ok((RData::NSEC3(NSEC3::parse(rdata_slice)?), whole)),
            RecordType::NSEC3PARAM => {
                Ok((RData::NSEC3PARAM(NSEC3PARAM::parse(rdata_slice)?), whole))
            }
            // Query-only types carry no payload shape of their own.
            RecordType::IXFR | RecordType::AXFR | RecordType::ANY => Ok((
                RData::Unknown(Unknown::new(known.to_u16(), rdata_slice)),
                whole,
            )),
        }
    }

    /// Returns the record type corresponding to this payload.
    pub fn record_type(&self) -> Type {
        match self {
            RData::A(_) => Type::Known(RecordType::A),
            RData::AAAA(_) => Type::Known(RecordType::AAAA),
            RData::NS(_) => Type::Known(RecordType::NS),
            RData::CNAME(_) => Type::Known(RecordType::CNAME),
            RData::PTR(_) => Type::Known(RecordType::PTR),
            RData::MB(_) => Type::Known(RecordType::MB),
            RData::MG(_) => Type::Known(RecordType::MG),
            RData::MR(_) => Type::Known(RecordType::MR),
            RData::MX(_) => Type::Known(RecordType::MX),
            RData::SOA(_) => Type::Known(RecordType::SOA),
            RData::TXT(_) => Type::Known(RecordType::TXT),
            RData::HINFO(_) => Type::Known(RecordType::HINFO),
            RData::MINFO(_) => Type::Known(RecordType::MINFO),
            RData::SRV(_) => Type::Known(RecordType::SRV),
            RData::NAPTR(_) => Type::Known(RecordType::NAPTR),
            RData::LOC(_) => Type::Known(RecordType::LOC),
            RData::Opt(_) => Type::Known(RecordType::OPT),
            RData::DS(_) => Type::Known(RecordType::DS),
            RData::DNSKEY(_) => Type::Known(RecordType::DNSKEY),
            RData::RRSIG(_) => Type::Known(RecordType::RRSIG),
            RData::NSEC(_) => Type::Known(RecordType::NSEC),
            RData::NSEC3(_) => Type::Known(RecordType::NSEC3),
            RData::NSEC3PARAM(_) => Type::Known(RecordType::NSEC3PARAM),
            RData::Unknown(u) => Type::from_u16(u.type_code()),
        }
    }

    /// Returns the wire format length of this payload.
    pub fn wire_len(&self) -> usize {
        match self {
            RData::A(r) => r.wire_len(),
            RData::AAAA(r) => r.wire_len(),
            RData::NS(r) => r.wire_len(),
            RData::CNAME(r) => r.wire_len(),
            RData::PTR(r) => r.wire_len(),
            RData::MB(r) => r.wire_len(),
            RData::MG(r) => r.wire_len(),
            RData::MR(r) => r.wire_len(),
            RData::MX(r) => r.wire_len(),
            RData::SOA(r) => r.wire_len(),
            RData::TXT(r) => r.wire_len(),
            RData::HINFO(r) => r.wire_len(),
            RData::MINFO(r) => r.wire_len(),
            RData::SRV(r) => r.wire_len(),
            RData::NAPTR(r) => r.wire_len(),
            RData::LOC(r) => r.wire_len(),
            RData::Opt(r) => r.wire_len(),
            RData::DS(r) => r.wire_len(),
            RData::DNSKEY(r) => r.wire_len(),
            RData::RRSIG(r) => r.wire_len(),
            RData::NSEC(r) => r.wire_len(),
            RData::NSEC3(r) => r.wire_len(),
            RData::NSEC3PARAM(r) => r.wire_len(),
            RData::Unknown(r) => r.wire_len(),
        }
    }

    /// Writes this payload to wire format.
    pub fn write_to(&self, buf: &mut BytesMut) {
        match self {
            RData::A(r) => r.write_to(buf),
            RData::AAAA(r) => r.write_to(buf),
            RData::NS(r) => r.write_to(buf),
            RData::CNAME(r) => r.write_to(buf),
            RData::PTR(r) => r.write_to(buf),
            RData::MB(r) => r.write_to(buf),
            RData::MG(r) => r.write_to(buf),
            RData::MR(r) => r.write_to(buf),
            RData::MX(r) => r.write_to(buf),
            RData::SOA(r) => r.write_to(buf),
            RData::TXT(r) => r.write_to(buf),
            RData::HINFO(r) => r.write_to(buf),
            RData::MINFO(r) => r.write_to(buf),
            RData::SRV(r) => r.write_to(buf),
            RData::NAPTR(r) => r.write_to(buf),
            RData::LOC(r) => r.write_to(buf),
            RData::Opt(r) => r.write_to(buf),
            RData::DS(r) => r.write_to(buf),
            RData::DNSKEY(r) => r.write_to(buf),
            RData::RRSIG(r) => r.write_to(buf),
            RData::NSEC(r) => r.write_to(buf),
            RData::NSEC3(r) => r.write_to(buf),
            RData::NSEC3PARAM(r) => r.write_to(buf),
            RData::Unknown(r) => r.write_to(buf),
        }
    }

    /// Returns the IPv4 address if this is an A record.
    pub fn as_a(&self) -> Option<Ipv4Addr> {
        match self {
            RData::A(a) => Some(a.address()),
            _ => None,
        }
    }

    /// Returns the IPv6 address if this is an AAAA record.
    pub fn as_aaaa(&self) -> Option<Ipv6Addr> {
        match self {
            RData::AAAA(aaaa) => Some(aaaa.address()),
            _ => None,
        }
    }

    /// Returns the target name if this is a CNAME record.
    pub fn as_cname(&self) -> Option<&Name> {
        match self {
            RData::CNAME(cname) => Some(cname.target()),
            _ => None,
        }
    }
}

impl fmt::Display for RData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RData::A(r) => write!(f, "{r}"),
            RData::AAAA(r) => write!(f, "{r}"),
            RData::NS(r) => write!(f, "{r}"),
            RData::CNAME(r) => write!(f, "{r}"),
            RData::PTR(r) => write!(f, "{r}"),
            RData::MB(r) => write!(f, "{r}"),
            RData::MG(r) => write!(f, "{r}"),
            RData::MR(r) => write!(f, "{r}"),
            RData::MX(r) => write!(f, "{r}"),
            RData::SOA(r) => write!(f, "{r}"),
            RData::TXT(r) => write!(f, "{r}"),
            RData::HINFO(r) => write!(f, "{r}"),
            RData::MINFO(r) => write!(f, "{r}"),
            RData::SRV(r) => write!(f, "{r}"),
            RData::NAPTR(r) => write!(f, "{r}"),
            RData::LOC(r) => write!(f, "{r}"),
            RData::Opt(r) => write!(f, "{r}"),
            RData::DS(r) => write!(f, "{r}"),
            RData::DNSKEY(r) => write!(f, "{r}"),
            RData::RRSIG(r) => write!(f, "{r}"),
            RData::NSEC(r) => write!(f, "{r}"),
            RData::NSEC3(r) => write!(f, "{r}"),
            RData::NSEC3PARAM(r) => write!(f, "{r}"),
            RData::Unknown(r) => write!(f, "{r}"),
        }
    }
}
