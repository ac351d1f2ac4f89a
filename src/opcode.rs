//! DNS operation codes.
//!
//! The OpCode field in the header specifies the kind of query.
//! See RFC 1035 Section 4.1.1 and RFC 6895 for the registry.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

/// DNS operation code.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    IntoPrimitive,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
pub enum OpCode {
    /// Standard query (QUERY) - RFC 1035
    Query = 0,

    /// Inverse query (IQUERY) - RFC 1035, obsoleted by RFC 3425
    IQuery = 1,

    /// Server status request (STATUS) - RFC 1035
    Status = 2,

    /// Notify - RFC 1996
    Notify = 4,

    /// Dynamic update - RFC 2136
    Update = 5,
}

impl OpCode {
    /// Returns the numeric value of the opcode.
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Creates an opcode from its numeric value.
    ///
    /// Returns `None` for reserved or unassigned values.
    #[inline]
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::try_from(value).ok()
    }

    /// Returns the human-readable name of the opcode.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Query => "QUERY",
            Self::IQuery => "IQUERY",
            Self::Status => "STATUS",
            Self::Notify => "NOTIFY",
            Self::Update => "UPDATE",
        }
    }
}

impl std::fmt::Display for OpCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Default for OpCode {
    fn default() -> Self {
        Self::Query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_values() {
        assert_eq!(OpCode::Query.to_u8(), 0);
        assert_eq!(OpCode::IQuery.to_u8(), 1);
        assert_eq!(OpCode::Status.to_u8(), 2);
        assert_eq!(OpCode::Notify.to_u8(), 4);
        assert_eq!(OpCode::Update.to_u8(), 5);
    }

    #[test]
    fn test_opcode_from_u8() {
        assert_eq!(OpCode::from_u8(0), Some(OpCode::Query));
        assert_eq!(OpCode::from_u8(4), Some(OpCode::Notify));
        assert_eq!(OpCode::from_u8(3), None); // reserved
        assert_eq!(OpCode::from_u8(15), None);
    }

    #[test]
    fn test_opcode_display() {
        assert_eq!(OpCode::Query.to_string(), "QUERY");
        assert_eq!(OpCode::Update.to_string(), "UPDATE");
    }
}
