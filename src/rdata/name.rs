//! Record types whose payload is a single domain name
//! (NS, CNAME, PTR, MB, MG, MR).

use crate::error::Result;
use crate::name::{Name, NameParser};
use bytes::BytesMut;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! single_name_rdata {
    ($(#[$doc:meta])* $name:ident, $field:ident, $getter:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name {
            $field: Name,
        }

        impl $name {
            /// Creates a new record.
            #[inline]
            pub fn new($field: Name) -> Self {
                Self { $field }
            }

            /// Returns the domain name carried by the record.
            #[inline]
            pub fn $getter(&self) -> &Name {
                &self.$field
            }

            /// Parses the record from wire format, resolving any
            /// compression pointers against the full message.
            ///
            /// Returns the record and the number of bytes consumed.
            pub fn parse(message: &[u8], offset: usize) -> Result<(Self, usize)> {
                let parser = NameParser::new(message);
                let ($field, consumed) = parser.parse_name(offset)?;
                Ok((Self { $field }, consumed))
            }

            /// Returns the wire format length.
            #[inline]
            pub fn wire_len(&self) -> usize {
                self.$field.wire_len()
            }

            /// Writes the record to wire format.
            pub fn write_to(&self, buf: &mut BytesMut) {
                self.$field.write_wire(buf);
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.$field)
            }
        }
    };
}

single_name_rdata!(
    /// NS record - authoritative name server (RFC 1035).
    NS,
    nsdname,
    nsdname
);

single_name_rdata!(
    /// CNAME record - canonical name alias (RFC 1035).
    CNAME,
    cname,
    target
);

single_name_rdata!(
    /// PTR record - domain name pointer, used for reverse DNS (RFC 1035).
    PTR,
    ptrdname,
    ptrdname
);

single_name_rdata!(
    /// MB record - mailbox domain name (RFC 1035, experimental).
    MB,
    madname,
    madname
);

single_name_rdata!(
    /// MG record - mail group member (RFC 1035, experimental).
    MG,
    mgmname,
    mgmname
);

single_name_rdata!(
    /// MR record - mail rename domain name (RFC 1035, experimental).
    MR,
    newname,
    newname
);

/// MX record - mail exchange (RFC 1035).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MX {
    /// The preference (lower is more preferred).
    preference: u16,
    /// The mail exchange domain name.
    exchange: Name,
}

impl MX {
    /// Creates a new MX record.
    #[inline]
    pub fn new(preference: u16, exchange: Name) -> Self {
        Self {
            preference,
            exchange,
        }
    }

    /// Returns the preference value.
    #[inline]
    pub const fn preference(&self) -> u16 {
        self.preference
    }

    /// Returns the mail exchange domain name.
    #[inline]
    pub fn exchange(&self) -> &Name {
        &self.exchange
    }

    /// Parses an MX record from wire format.
    ///
    /// Returns the record and the number of bytes consumed.
    pub fn parse(message: &[u8], offset: usize) -> Result<(Self, usize)> {
        if offset + 2 > message.len() {
            return Err(crate::error::Error::buffer_too_short(
                offset + 2,
                message.len(),
            ));
        }

        let preference = u16::from_be_bytes([message[offset], message[offset + 1]]);

        let parser = NameParser::new(message);
        let (exchange, name_len) = parser.parse_name(offset + 2)?;

        Ok((
            Self {
                preference,
                exchange,
            },
            2 + name_len,
        ))
    }

    /// Returns the wire format length.
    #[inline]
    pub fn wire_len(&self) -> usize {
        2 + self.exchange.wire_len()
    }

    /// Writes the MX record to wire format.
    pub fn write_to(&self, buf: &mut BytesMut) {
        buf.extend_from_slice(&self.preference.to_be_bytes());
        self.exchange.write_wire(buf);
    }
}

impl fmt::Display for MX {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.preference, self.exchange)
    }
}

impl PartialOrd for MX {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MX {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Lower preference = higher priority.
        self.preference.cmp(&other.preference)
    }
}
