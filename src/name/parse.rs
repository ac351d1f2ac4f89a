//! Domain name decoding from wire format, with compression support.
//!
//! Compressed names (RFC 1035 Section 4.1.4) embed 14-bit pointers to
//! earlier occurrences of a suffix. The parser follows pointers anywhere
//! in the message and relies on a dereference cap to defeat cycles; the
//! number of bytes consumed at the original position is fixed the moment
//! the first pointer is met, which is where the caller resumes parsing.

use super::{Name, NameStorage};
use crate::MAX_NAME_LENGTH;
use crate::error::{Error, Result};
use smallvec::SmallVec;

/// Maximum number of compression pointer dereferences per name.
const MAX_COMPRESSION_JUMPS: usize = 10;

/// Parser for reading domain names from DNS wire format.
///
/// Holds the complete message buffer so that compression pointers,
/// which are absolute offsets from the start of the message, can be
/// resolved.
#[derive(Debug, Clone)]
pub struct NameParser<'a> {
    /// The complete message buffer.
    message: &'a [u8],
}

impl<'a> NameParser<'a> {
    /// Creates a new name parser over the given message buffer.
    #[inline]
    pub const fn new(message: &'a [u8]) -> Self {
        Self { message }
    }

    /// Parses a domain name starting at the given offset.
    ///
    /// Returns the parsed name and the number of bytes consumed at the
    /// starting position. When a pointer is followed, the consumed count
    /// is the distance to just past the first pointer's two bytes;
    /// callers resume parsing there.
    pub fn parse_name(&self, offset: usize) -> Result<(Name, usize)> {
        let mut wire = SmallVec::<[u8; 64]>::new();
        let mut consumed = 0;
        let mut pos = offset;
        let mut jumps = 0;
        let mut label_count = 0u8;

        loop {
            if pos >= self.message.len() {
                return Err(Error::UnexpectedEof { offset: pos });
            }

            let len_byte = self.message[pos];

            match len_byte & 0xC0 {
                // Compression pointer: low 6 bits of this byte and all of
                // the next form a 14-bit offset from the message start.
                0xC0 => {
                    if pos + 1 >= self.message.len() {
                        return Err(Error::UnexpectedEof { offset: pos + 1 });
                    }

                    let target =
                        u16::from_be_bytes([len_byte & 0x3F, self.message[pos + 1]]) as usize;
                    if target >= self.message.len() {
                        return Err(Error::InvalidCompressionPointer {
                            offset: pos,
                            target,
                        });
                    }

                    if jumps == 0 {
                        consumed = pos - offset + 2;
                    }

                    jumps += 1;
                    if jumps > MAX_COMPRESSION_JUMPS {
                        return Err(Error::TooManyCompressionJumps {
                            max_jumps: MAX_COMPRESSION_JUMPS,
                        });
                    }

                    pos = target;
                }

                // 0x40 and 0x80 are reserved label types.
                0x40 | 0x80 => {
                    return Err(Error::ReservedLabelType {
                        offset: pos,
                        byte: len_byte,
                    });
                }

                _ => {
                    let len = len_byte as usize;

                    if len == 0 {
                        // Root label ends the name.
                        wire.push(0);
                        label_count += 1;
                        if jumps == 0 {
                            consumed = pos - offset + 1;
                        }
                        break;
                    }

                    if pos + 1 + len > self.message.len() {
                        return Err(Error::UnexpectedEof {
                            offset: pos + 1 + len,
                        });
                    }

                    if wire.len() + 1 + len + 1 > MAX_NAME_LENGTH {
                        return Err(Error::NameTooLong {
                            length: wire.len() + 1 + len + 1,
                        });
                    }

                    wire.push(len_byte);
                    wire.extend_from_slice(&self.message[pos + 1..pos + 1 + len]);
                    label_count += 1;

                    pos += 1 + len;
                }
            }
        }

        Ok((
            Name {
                wire: NameStorage::Inline(wire),
                label_count,
            },
            consumed,
        ))
    }

    /// Parses a name, discarding the consumed byte count.
    #[inline]
    pub fn parse(&self, offset: usize) -> Result<Name> {
        self.parse_name(offset).map(|(name, _)| name)
    }

    /// Skips over a name, returning the number of bytes consumed at the
    /// starting position without building the name.
    pub fn skip_name(&self, offset: usize) -> Result<usize> {
        let mut pos = offset;

        loop {
            if pos >= self.message.len() {
                return Err(Error::UnexpectedEof { offset: pos });
            }

            let len_byte = self.message[pos];

            match len_byte & 0xC0 {
                // A pointer is always two bytes and terminates the name.
                0xC0 => {
                    if pos + 1 >= self.message.len() {
                        return Err(Error::UnexpectedEof { offset: pos + 1 });
                    }
                    return Ok(pos - offset + 2);
                }
                0x40 | 0x80 => {
                    return Err(Error::ReservedLabelType {
                        offset: pos,
                        byte: len_byte,
                    });
                }
                _ => {
                    let len = len_byte as usize;
                    if len == 0 {
                        return Ok(pos - offset + 1);
                    }
                    pos += 1 + len;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_name() {
        // www.example.com in wire format.
        let wire = [
            3, b'w', b'w', b'w', 7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o', b'm',
            0,
        ];

        let parser = NameParser::new(&wire);
        let (name, consumed) = parser.parse_name(0).unwrap();

        assert_eq!(name.to_string(), "www.example.com.");
        assert_eq!(consumed, wire.len());
    }

    #[test]
    fn test_parse_root() {
        let wire = [0u8];
        let parser = NameParser::new(&wire);
        let (name, consumed) = parser.parse_name(0).unwrap();

        assert!(name.is_root());
        assert_eq!(consumed, 1);
    }

    #[test]
    fn test_parse_compressed_name() {
        // At offset 0: example.com.  At offset 13: www.<pointer to 0>.
        let wire = [
            7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o', b'm', 0, // example.com.
            3, b'w', b'w', b'w', 0xC0, 0x00, // www.<ptr to 0>
        ];

        let parser = NameParser::new(&wire);

        let (name1, consumed1) = parser.parse_name(0).unwrap();
        assert_eq!(name1.to_string(), "example.com.");
        assert_eq!(consumed1, 13);

        let (name2, consumed2) = parser.parse_name(13).unwrap();
        assert_eq!(name2.to_string(), "www.example.com.");
        assert_eq!(consumed2, 6); // "www" label + 2-byte pointer
    }

    #[test]
    fn test_pointer_suffix_decode() {
        // foo.bar. at offset 0, then a bare pointer back to it at offset 9.
        let wire = [
            3, b'f', b'o', b'o', 3, b'b', b'a', b'r', 0, // foo.bar.
            0xC0, 0x00, // ptr to 0
        ];

        let parser = NameParser::new(&wire);
        let (name, consumed) = parser.parse_name(9).unwrap();
        assert_eq!(name.to_string(), "foo.bar.");
        assert_eq!(consumed, 2);
    }

    #[test]
    fn test_pointer_loop_rejected() {
        // Two pointers referencing each other.
        let wire = [0xC0, 0x02, 0xC0, 0x00];

        let parser = NameParser::new(&wire);
        let result = parser.parse_name(0);

        assert!(matches!(
            result,
            Err(Error::TooManyCompressionJumps { max_jumps: 10 })
        ));
    }

    #[test]
    fn test_pointer_out_of_range() {
        let wire = [0xC0, 0x20]; // points past the end of the message

        let parser = NameParser::new(&wire);
        assert!(matches!(
            parser.parse_name(0),
            Err(Error::InvalidCompressionPointer { target: 0x20, .. })
        ));
    }

    #[test]
    fn test_reserved_label_types() {
        for byte in [0x40u8, 0x80] {
            let wire = [byte, 0x00];
            let parser = NameParser::new(&wire);
            assert!(matches!(
                parser.parse_name(0),
                Err(Error::ReservedLabelType { offset: 0, .. })
            ));
        }
    }

    #[test]
    fn test_truncated_name() {
        // Label claims 5 bytes, only 2 present.
        let wire = [5, b'a', b'b'];
        let parser = NameParser::new(&wire);
        assert!(matches!(
            parser.parse_name(0),
            Err(Error::UnexpectedEof { .. })
        ));

        // Missing terminator.
        let wire = [1, b'a'];
        let parser = NameParser::new(&wire);
        assert!(matches!(
            parser.parse_name(0),
            Err(Error::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_truncated_pointer() {
        let wire = [0xC0];
        let parser = NameParser::new(&wire);
        assert!(matches!(
            parser.parse_name(0),
            Err(Error::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_name_growth_bounded() {
        // A pointer chain that re-reads the same label cannot grow the
        // name past the 255-byte cap or the jump cap, whichever first.
        let mut wire = vec![63u8];
        wire.extend_from_slice(&[b'a'; 63]);
        wire.extend_from_slice(&[0xC0, 0x00]);

        let parser = NameParser::new(&wire);
        let result = parser.parse_name(0);
        assert!(matches!(
            result,
            Err(Error::NameTooLong { .. }) | Err(Error::TooManyCompressionJumps { .. })
        ));
    }

    #[test]
    fn test_skip_name() {
        let wire = [
            3, b'w', b'w', b'w', 7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o', b'm',
            0,
        ];

        let parser = NameParser::new(&wire);
        assert_eq!(parser.skip_name(0).unwrap(), wire.len());
    }

    #[test]
    fn test_skip_compressed_name() {
        let wire = [3, b'w', b'w', b'w', 0xC0, 0x00];

        let parser = NameParser::new(&wire);
        assert_eq!(parser.skip_name(0).unwrap(), 6);
    }
}
