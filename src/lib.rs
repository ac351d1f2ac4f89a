//! # Filum DNS wire-format codec
//!
//! This crate translates between in-memory DNS message structures and the
//! on-wire byte representation defined by RFC 1035, including the later
//! extensions for EDNS0 (RFC 6891), the DNSSEC record types (RFC 4034,
//! RFC 5155), and SRV/NAPTR/LOC.
//!
//! The codec operates purely on byte buffers: it performs no I/O, owns no
//! state beyond the current offset, and never panics on malformed input.
//! Decoding handles name-compression pointers (with loop protection);
//! encoding never emits them.
//!
//! ## Example
//!
//! ```rust
//! use filum_dns::{Message, Name, Question, RecordClass, RecordType};
//! use std::str::FromStr;
//!
//! // Build a query and serialize it.
//! let question = Question::new(
//!     Name::from_str("example.com.").unwrap(),
//!     RecordType::A,
//!     RecordClass::IN,
//! );
//! let query = Message::query(question);
//! let wire = query.to_wire();
//!
//! // Parse it back.
//! let parsed = Message::parse(&wire).unwrap();
//! assert_eq!(parsed.id(), query.id());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod class;
pub mod edns;
pub mod error;
pub mod header;
pub mod message;
pub mod name;
pub mod opcode;
pub mod question;
pub mod rcode;
pub mod rdata;
pub mod record;
pub mod rtype;
pub mod wire;

// Re-exports for convenience
pub use class::{Class, RecordClass};
pub use edns::{EdnsOption, Opt};
pub use error::{Error, Result};
pub use header::{Header, HeaderFlags};
pub use message::Message;
pub use name::Name;
pub use opcode::OpCode;
pub use question::Question;
pub use rcode::ResponseCode;
pub use rdata::RData;
pub use record::ResourceRecord;
pub use rtype::{RecordType, Type};

/// Maximum length of a DNS label (63 bytes per RFC 1035).
pub const MAX_LABEL_LENGTH: usize = 63;

/// Maximum length of a domain name in wire format (255 bytes per RFC 1035).
pub const MAX_NAME_LENGTH: usize = 255;

/// Maximum size of a UDP DNS message without EDNS0 (512 bytes per RFC 1035).
pub const MAX_UDP_MESSAGE_SIZE: usize = 512;

/// Default buffer size for encoding a message (4096 bytes).
pub const DEFAULT_MESSAGE_SIZE: usize = 4096;
