//! Codec error types.
//!
//! Every decode or encode failure maps to one variant of [`Error`];
//! the codec never panics on malformed input and callers may not resume
//! a partially consumed buffer.

use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// DNS wire-format codec errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // =========================================================================
    // Truncation
    // =========================================================================
    /// Buffer is too short to contain the expected data.
    #[error("buffer too short: expected at least {expected} bytes, got {actual}")]
    BufferTooShort {
        /// Expected minimum size.
        expected: usize,
        /// Actual buffer size.
        actual: usize,
    },

    /// Unexpected end of data while parsing.
    #[error("unexpected end of data at offset {offset}")]
    UnexpectedEof {
        /// Byte offset where EOF was encountered.
        offset: usize,
    },

    /// Invalid data encountered during parsing.
    #[error("invalid data at offset {offset}: {message}")]
    InvalidData {
        /// Byte offset of the invalid data.
        offset: usize,
        /// Description of the error.
        message: String,
    },

    // =========================================================================
    // Domain names
    // =========================================================================
    /// Label exceeds the maximum length of 63 bytes.
    #[error("label too long: {length} bytes exceeds maximum of 63")]
    LabelTooLong {
        /// Actual label length.
        length: usize,
    },

    /// Domain name exceeds the maximum wire length of 255 bytes.
    #[error("name too long: {length} bytes exceeds maximum of 255")]
    NameTooLong {
        /// Actual name length in wire format.
        length: usize,
    },

    /// Invalid label character.
    #[error("invalid character '{character}' in label at position {position}")]
    InvalidLabelChar {
        /// The invalid character.
        character: char,
        /// Position in the label.
        position: usize,
    },

    /// Reserved label type: a length byte with top bits `01` or `10`.
    #[error("reserved label type 0x{byte:02X} at offset {offset}")]
    ReservedLabelType {
        /// Offset of the offending length byte.
        offset: usize,
        /// The offending byte.
        byte: u8,
    },

    /// Invalid compression pointer target.
    #[error("invalid compression pointer at offset {offset}: points to {target}")]
    InvalidCompressionPointer {
        /// Offset of the pointer.
        offset: usize,
        /// Target offset the pointer references.
        target: usize,
    },

    /// Too many compression pointer dereferences (loop defense).
    #[error("too many compression pointer jumps (>{max_jumps})")]
    TooManyCompressionJumps {
        /// Maximum allowed jumps.
        max_jumps: usize,
    },

    // =========================================================================
    // Header
    // =========================================================================
    /// Unassigned opcode value.
    #[error("invalid opcode: {value}")]
    InvalidOpCode {
        /// The invalid opcode value.
        value: u8,
    },

    /// Unassigned response code value.
    #[error("invalid response code: {value}")]
    InvalidResponseCode {
        /// The invalid rcode value.
        value: u16,
    },

    // =========================================================================
    // Resource records
    // =========================================================================
    /// Payload decode consumed a number of bytes different from rdlength.
    #[error("RDATA length mismatch for {rtype}: expected {expected}, got {actual}")]
    RDataLengthMismatch {
        /// Record type.
        rtype: String,
        /// Declared rdlength.
        expected: usize,
        /// Bytes actually consumed.
        actual: usize,
    },

    /// Invalid RDATA content.
    #[error("invalid RDATA for {rtype}: {message}")]
    InvalidRData {
        /// Record type.
        rtype: String,
        /// Error description.
        message: String,
    },

    /// Character string exceeds the 255-byte limit on encode.
    #[error("character string too long: {length} bytes exceeds maximum of 255")]
    CharacterStringTooLong {
        /// Actual string length.
        length: usize,
    },

    // =========================================================================
    // Messages
    // =========================================================================
    /// Message exceeds the maximum encoded size.
    #[error("message too large: {size} bytes exceeds maximum of {max_size}")]
    MessageTooLarge {
        /// Actual message size.
        size: usize,
        /// Maximum allowed size.
        max_size: usize,
    },
}

impl Error {
    /// Creates a new `BufferTooShort` error.
    #[inline]
    pub fn buffer_too_short(expected: usize, actual: usize) -> Self {
        Self::BufferTooShort { expected, actual }
    }

    /// Creates a new `UnexpectedEof` error.
    #[inline]
    pub fn unexpected_eof(offset: usize) -> Self {
        Self::UnexpectedEof { offset }
    }

    /// Creates a new `InvalidData` error.
    #[inline]
    pub fn invalid_data(offset: usize, message: impl Into<String>) -> Self {
        Self::InvalidData {
            offset,
            message: message.into(),
        }
    }

    /// Creates a new `InvalidRData` error.
    #[inline]
    pub fn invalid_rdata(rtype: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRData {
            rtype: rtype.into(),
            message: message.into(),
        }
    }

    /// Creates a new `RDataLengthMismatch` error.
    #[inline]
    pub fn rdata_length_mismatch(rtype: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::RDataLengthMismatch {
            rtype: rtype.into(),
            expected,
            actual,
        }
    }

    /// Returns true if this error indicates a malformed message that should
    /// be dropped rather than answered.
    #[inline]
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::BufferTooShort { .. }
                | Self::UnexpectedEof { .. }
                | Self::InvalidData { .. }
                | Self::ReservedLabelType { .. }
                | Self::InvalidCompressionPointer { .. }
                | Self::TooManyCompressionJumps { .. }
                | Self::RDataLengthMismatch { .. }
        )
    }

    /// Returns true if this error corresponds to a format error (FORMERR).
    #[inline]
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::LabelTooLong { .. }
                | Self::NameTooLong { .. }
                | Self::InvalidLabelChar { .. }
                | Self::InvalidOpCode { .. }
                | Self::InvalidResponseCode { .. }
                | Self::InvalidRData { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::buffer_too_short(12, 8);
        assert_eq!(
            err.to_string(),
            "buffer too short: expected at least 12 bytes, got 8"
        );

        let err = Error::LabelTooLong { length: 64 };
        assert_eq!(
            err.to_string(),
            "label too long: 64 bytes exceeds maximum of 63"
        );

        let err = Error::TooManyCompressionJumps { max_jumps: 10 };
        assert_eq!(err.to_string(), "too many compression pointer jumps (>10)");
    }

    #[test]
    fn test_error_classification() {
        assert!(Error::buffer_too_short(10, 5).is_malformed());
        assert!(Error::TooManyCompressionJumps { max_jumps: 10 }.is_malformed());
        assert!(Error::rdata_length_mismatch("A", 4, 3).is_malformed());
        assert!(Error::LabelTooLong { length: 64 }.is_format_error());
        assert!(Error::InvalidOpCode { value: 3 }.is_format_error());
    }
}
