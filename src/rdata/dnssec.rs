//! DNSSEC record types (DS, DNSKEY, RRSIG, NSEC, NSEC3, NSEC3PARAM).
//!
//! Codec only: cryptographic validation of signatures and digests is
//! out of scope.

use crate::error::{Error, Result};
use crate::name::{Name, NameParser};
use crate::rtype::Type;
use crate::wire::WireReader;
use bytes::BytesMut;
use data_encoding::{BASE32_NOPAD, BASE64, HEXLOWER};
use serde::{Deserialize, Serialize};
use std::fmt;

/// DNSSEC algorithm numbers (RFC 8624).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DnsSecAlgorithm {
    /// RSA/SHA-1
    RsaSha1 = 5,
    /// RSA/SHA-256
    RsaSha256 = 8,
    /// RSA/SHA-512
    RsaSha512 = 10,
    /// ECDSA Curve P-256 with SHA-256
    EcdsaP256Sha256 = 13,
    /// ECDSA Curve P-384 with SHA-384
    EcdsaP384Sha384 = 14,
    /// Ed25519
    Ed25519 = 15,
    /// Ed448
    Ed448 = 16,
}

impl DnsSecAlgorithm {
    /// Creates from the wire value.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            5 => Some(Self::RsaSha1),
            8 => Some(Self::RsaSha256),
            10 => Some(Self::RsaSha512),
            13 => Some(Self::EcdsaP256Sha256),
            14 => Some(Self::EcdsaP384Sha384),
            15 => Some(Self::Ed25519),
            16 => Some(Self::Ed448),
            _ => None,
        }
    }
}

/// DNSSEC digest types for DS records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DigestType {
    /// SHA-1 (deprecated)
    Sha1 = 1,
    /// SHA-256
    Sha256 = 2,
    /// SHA-384
    Sha384 = 4,
}

impl DigestType {
    /// Creates from the wire value.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Sha1),
            2 => Some(Self::Sha256),
            4 => Some(Self::Sha384),
            _ => None,
        }
    }

    /// Returns the expected digest length in bytes.
    pub const fn digest_len(&self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
        }
    }
}

// =============================================================================
// Type bitmaps (RFC 4034 Section 4.1.2)
// =============================================================================

/// Decodes an NSEC/NSEC3 type bitmap into the record types it covers.
///
/// The bitmap is a sequence of (window, length, bitmap) blocks; bit N of
/// window W, counted from the high bit, marks type `W * 256 + N`.
pub fn types_from_bitmap(bitmap: &[u8]) -> Vec<u16> {
    let mut types = Vec::new();
    let mut pos = 0;

    while pos + 2 <= bitmap.len() {
        let window = u16::from(bitmap[pos]);
        let len = bitmap[pos + 1] as usize;
        pos += 2;

        if len == 0 || pos + len > bitmap.len() {
            break;
        }

        for (byte_idx, &byte) in bitmap[pos..pos + len].iter().enumerate() {
            for bit in 0..8u16 {
                if byte & (0x80 >> bit) != 0 {
                    types.push(window * 256 + byte_idx as u16 * 8 + bit);
                }
            }
        }

        pos += len;
    }

    types
}

/// Encodes a set of record types into an NSEC/NSEC3 type bitmap.
///
/// Types are sorted and deduplicated; each 256-type window with any bit
/// set produces one block with a minimal bitmap length.
pub fn bitmap_from_types(types: &[u16]) -> Vec<u8> {
    let mut sorted: Vec<u16> = types.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut out = Vec::new();
    let mut i = 0;

    while i < sorted.len() {
        let window = sorted[i] >> 8;
        let mut bits = [0u8; 32];
        let mut max_byte = 0;

        while i < sorted.len() && sorted[i] >> 8 == window {
            let low = (sorted[i] & 0xFF) as usize;
            bits[low / 8] |= 0x80 >> (low % 8);
            max_byte = low / 8;
            i += 1;
        }

        out.push(window as u8);
        out.push(max_byte as u8 + 1);
        out.extend_from_slice(&bits[..=max_byte]);
    }

    out
}

fn fmt_type_list(f: &mut fmt::Formatter<'_>, bitmap: &[u8]) -> fmt::Result {
    for type_num in types_from_bitmap(bitmap) {
        write!(f, " {}", Type::from_u16(type_num))?;
    }
    Ok(())
}

// =============================================================================
// DS
// =============================================================================

/// DS record - delegation signer (RFC 4034).
///
/// Links a child zone to its parent through a digest of the child's
/// key-signing DNSKEY.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DS {
    /// Key tag of the referenced DNSKEY.
    key_tag: u16,
    /// Algorithm number.
    algorithm: u8,
    /// Digest type.
    digest_type: u8,
    /// Digest data (the rest of the rdata).
    digest: Vec<u8>,
}

impl DS {
    /// Creates a new DS record.
    pub fn new(key_tag: u16, algorithm: u8, digest_type: u8, digest: impl Into<Vec<u8>>) -> Self {
        Self {
            key_tag,
            algorithm,
            digest_type,
            digest: digest.into(),
        }
    }

    /// Returns the key tag.
    #[inline]
    pub const fn key_tag(&self) -> u16 {
        self.key_tag
    }

    /// Returns the algorithm number.
    #[inline]
    pub const fn algorithm(&self) -> u8 {
        self.algorithm
    }

    /// Returns the digest type.
    #[inline]
    pub const fn digest_type(&self) -> u8 {
        self.digest_type
    }

    /// Returns the digest type as an enum if known.
    pub fn digest_type_enum(&self) -> Option<DigestType> {
        DigestType::from_u8(self.digest_type)
    }

    /// Returns the digest data.
    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    /// Returns the digest as a lowercase hex string.
    pub fn digest_hex(&self) -> String {
        HEXLOWER.encode(&self.digest)
    }

    /// Parses a DS record from its rdata.
    ///
    /// The digest spans the rdata remaining after the three fixed
    /// fields (4 bytes).
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut reader = WireReader::new(data);
        let key_tag = reader.read_u16()?;
        let algorithm = reader.read_u8()?;
        let digest_type = reader.read_u8()?;
        let digest = reader.read_bytes(reader.remaining())?.to_vec();

        Ok(Self {
            key_tag,
            algorithm,
            digest_type,
            digest,
        })
    }

    /// Returns the wire format length.
    pub fn wire_len(&self) -> usize {
        4 + self.digest.len()
    }

    /// Writes the DS record to wire format.
    pub fn write_to(&self, buf: &mut BytesMut) {
        buf.extend_from_slice(&self.key_tag.to_be_bytes());
        buf.extend_from_slice(&[self.algorithm, self.digest_type]);
        buf.extend_from_slice(&self.digest);
    }
}

impl fmt::Display for DS {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.key_tag,
            self.algorithm,
            self.digest_type,
            self.digest_hex()
        )
    }
}

// =============================================================================
// DNSKEY
// =============================================================================

/// DNSKEY record - DNS public key (RFC 4034).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DNSKEY {
    /// Flags (zone key, SEP).
    flags: u16,
    /// Protocol (must be 3).
    protocol: u8,
    /// Algorithm number.
    algorithm: u8,
    /// Public key data (the rest of the rdata).
    public_key: Vec<u8>,
}

impl DNSKEY {
    /// Zone Key flag bit.
    pub const FLAG_ZONE_KEY: u16 = 0x0100;
    /// Secure Entry Point flag bit.
    pub const FLAG_SEP: u16 = 0x0001;

    /// Creates a new DNSKEY record.
    pub fn new(flags: u16, protocol: u8, algorithm: u8, public_key: impl Into<Vec<u8>>) -> Self {
        Self {
            flags,
            protocol,
            algorithm,
            public_key: public_key.into(),
        }
    }

    /// Returns the flags.
    #[inline]
    pub const fn flags(&self) -> u16 {
        self.flags
    }

    /// Returns true if this is a zone key.
    #[inline]
    pub const fn is_zone_key(&self) -> bool {
        (self.flags & Self::FLAG_ZONE_KEY) != 0
    }

    /// Returns true if this is a secure entry point (KSK).
    #[inline]
    pub const fn is_sep(&self) -> bool {
        (self.flags & Self::FLAG_SEP) != 0
    }

    /// Returns the protocol field.
    #[inline]
    pub const fn protocol(&self) -> u8 {
        self.protocol
    }

    /// Returns the algorithm number.
    #[inline]
    pub const fn algorithm(&self) -> u8 {
        self.algorithm
    }

    /// Returns the algorithm as an enum if known.
    pub fn algorithm_enum(&self) -> Option<DnsSecAlgorithm> {
        DnsSecAlgorithm::from_u8(self.algorithm)
    }

    /// Returns the public key data.
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    /// Returns the public key as base64.
    pub fn public_key_base64(&self) -> String {
        BASE64.encode(&self.public_key)
    }

    /// Calculates the key tag (RFC 4034 Appendix B).
    pub fn key_tag(&self) -> u16 {
        let mut buf = BytesMut::new();
        self.write_to(&mut buf);

        let mut ac: u32 = 0;
        for (i, &byte) in buf.iter().enumerate() {
            if i & 1 == 0 {
                ac += u32::from(byte) << 8;
            } else {
                ac += u32::from(byte);
            }
        }
        ac += ac >> 16;
        (ac & 0xFFFF) as u16
    }

    /// Parses a DNSKEY record from its rdata.
    ///
    /// The key spans the rdata remaining after the three fixed fields
    /// (4 bytes).
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut reader = WireReader::new(data);
        let flags = reader.read_u16()?;
        let protocol = reader.read_u8()?;
        let algorithm = reader.read_u8()?;
        let public_key = reader.read_bytes(reader.remaining())?.to_vec();

        Ok(Self {
            flags,
            protocol,
            algorithm,
            public_key,
        })
    }

    /// Returns the wire format length.
    pub fn wire_len(&self) -> usize {
        4 + self.public_key.len()
    }

    /// Writes the DNSKEY record to wire format.
    pub fn write_to(&self, buf: &mut BytesMut) {
        buf.extend_from_slice(&self.flags.to_be_bytes());
        buf.extend_from_slice(&[self.protocol, self.algorithm]);
        buf.extend_from_slice(&self.public_key);
    }
}

impl fmt::Display for DNSKEY {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.flags,
            self.protocol,
            self.algorithm,
            self.public_key_base64()
        )
    }
}

// =============================================================================
// RRSIG
// =============================================================================

/// RRSIG record - DNSSEC signature over an RRset (RFC 4034).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RRSIG {
    /// Type covered by this signature.
    type_covered: u16,
    /// Algorithm number.
    algorithm: u8,
    /// Number of labels in the original owner name.
    labels: u8,
    /// Original TTL.
    original_ttl: u32,
    /// Signature expiration time (seconds since the epoch).
    expiration: u32,
    /// Signature inception time (seconds since the epoch).
    inception: u32,
    /// Key tag of the signing key.
    key_tag: u16,
    /// Signer's name.
    signer: Name,
    /// Signature data (the rest of the rdata).
    signature: Vec<u8>,
}

impl RRSIG {
    /// Creates a new RRSIG record.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        type_covered: u16,
        algorithm: u8,
        labels: u8,
        original_ttl: u32,
        expiration: u32,
        inception: u32,
        key_tag: u16,
        signer: Name,
        signature: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            type_covered,
            algorithm,
            labels,
            original_ttl,
            expiration,
            inception,
            key_tag,
            signer,
            signature: signature.into(),
        }
    }

    /// Returns the type covered by this signature.
    #[inline]
    pub const fn type_covered(&self) -> u16 {
        self.type_covered
    }

    /// Returns the algorithm number.
    #[inline]
    pub const fn algorithm(&self) -> u8 {
        self.algorithm
    }

    /// Returns the label count of the original owner name.
    #[inline]
    pub const fn labels(&self) -> u8 {
        self.labels
    }

    /// Returns the original TTL.
    #[inline]
    pub const fn original_ttl(&self) -> u32 {
        self.original_ttl
    }

    /// Returns the expiration time.
    #[inline]
    pub const fn expiration(&self) -> u32 {
        self.expiration
    }

    /// Returns the inception time.
    #[inline]
    pub const fn inception(&self) -> u32 {
        self.inception
    }

    /// Returns the key tag.
    #[inline]
    pub const fn key_tag(&self) -> u16 {
        self.key_tag
    }

    /// Returns the signer's name.
    #[inline]
    pub fn signer(&self) -> &Name {
        &self.signer
    }

    /// Returns the signature data.
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// Returns the signature as base64.
    pub fn signature_base64(&self) -> String {
        BASE64.encode(&self.signature)
    }

    /// Parses an RRSIG record from wire format.
    ///
    /// The signature spans the rdata remaining after the 18 fixed bytes
    /// and the signer name, so the declared rdlength bounds the parse.
    /// Returns the record and the number of bytes consumed.
    pub fn parse(message: &[u8], offset: usize, rdlength: u16) -> Result<(Self, usize)> {
        let end = offset + rdlength as usize;
        if end > message.len() {
            return Err(Error::buffer_too_short(end, message.len()));
        }

        let mut reader = WireReader::new_at(message, offset);
        let type_covered = reader.read_u16()?;
        let algorithm = reader.read_u8()?;
        let labels = reader.read_u8()?;
        let original_ttl = reader.read_u32()?;
        let expiration = reader.read_u32()?;
        let inception = reader.read_u32()?;
        let key_tag = reader.read_u16()?;

        let parser = NameParser::new(message);
        let (signer, name_len) = parser.parse_name(reader.position())?;

        let sig_start = reader.position() + name_len;
        if sig_start > end {
            return Err(Error::invalid_rdata("RRSIG", "signer name exceeds rdlength"));
        }
        let signature = message[sig_start..end].to_vec();

        Ok((
            Self {
                type_covered,
                algorithm,
                labels,
                original_ttl,
                expiration,
                inception,
                key_tag,
                signer,
                signature,
            },
            rdlength as usize,
        ))
    }

    /// Returns the wire format length.
    pub fn wire_len(&self) -> usize {
        18 + self.signer.wire_len() + self.signature.len()
    }

    /// Writes the RRSIG record to wire format.
    pub fn write_to(&self, buf: &mut BytesMut) {
        buf.extend_from_slice(&self.type_covered.to_be_bytes());
        buf.extend_from_slice(&[self.algorithm, self.labels]);
        buf.extend_from_slice(&self.original_ttl.to_be_bytes());
        buf.extend_from_slice(&self.expiration.to_be_bytes());
        buf.extend_from_slice(&self.inception.to_be_bytes());
        buf.extend_from_slice(&self.key_tag.to_be_bytes());
        self.signer.write_wire(buf);
        buf.extend_from_slice(&self.signature);
    }
}

impl fmt::Display for RRSIG {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {} {} {}",
            Type::from_u16(self.type_covered),
            self.algorithm,
            self.labels,
            self.original_ttl,
            self.expiration,
            self.inception,
            self.key_tag,
            self.signer,
            self.signature_base64()
        )
    }
}

// =============================================================================
// NSEC
// =============================================================================

/// NSEC record - authenticated denial of existence (RFC 4034).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NSEC {
    /// Next owner name in canonical zone order.
    next_name: Name,
    /// Type bitmap of record types present at this name.
    type_bitmap: Vec<u8>,
}

impl NSEC {
    /// Creates a new NSEC record from a raw bitmap.
    pub fn new(next_name: Name, type_bitmap: impl Into<Vec<u8>>) -> Self {
        Self {
            next_name,
            type_bitmap: type_bitmap.into(),
        }
    }

    /// Creates a new NSEC record covering the given record types.
    pub fn with_types(next_name: Name, types: &[u16]) -> Self {
        Self {
            next_name,
            type_bitmap: bitmap_from_types(types),
        }
    }

    /// Returns the next owner name.
    pub fn next_name(&self) -> &Name {
        &self.next_name
    }

    /// Returns the raw type bitmap.
    pub fn type_bitmap(&self) -> &[u8] {
        &self.type_bitmap
    }

    /// Returns the record types present according to the bitmap.
    pub fn types(&self) -> Vec<u16> {
        types_from_bitmap(&self.type_bitmap)
    }

    /// Parses an NSEC record from wire format.
    ///
    /// Returns the record and the number of bytes consumed.
    pub fn parse(message: &[u8], offset: usize, rdlength: u16) -> Result<(Self, usize)> {
        let end = offset + rdlength as usize;
        if end > message.len() {
            return Err(Error::buffer_too_short(end, message.len()));
        }

        let parser = NameParser::new(message);
        let (next_name, name_len) = parser.parse_name(offset)?;

        let bitmap_start = offset + name_len;
        if bitmap_start > end {
            return Err(Error::invalid_rdata("NSEC", "next name exceeds rdlength"));
        }
        let type_bitmap = message[bitmap_start..end].to_vec();

        Ok((
            Self {
                next_name,
                type_bitmap,
            },
            rdlength as usize,
        ))
    }

    /// Returns the wire format length.
    pub fn wire_len(&self) -> usize {
        self.next_name.wire_len() + self.type_bitmap.len()
    }

    /// Writes the NSEC record to wire format.
    pub fn write_to(&self, buf: &mut BytesMut) {
        self.next_name.write_wire(buf);
        buf.extend_from_slice(&self.type_bitmap);
    }
}

impl fmt::Display for NSEC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.next_name)?;
        fmt_type_list(f, &self.type_bitmap)
    }
}

// =============================================================================
// NSEC3 / NSEC3PARAM
// =============================================================================

/// NSEC3 record - hashed authenticated denial of existence (RFC 5155).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NSEC3 {
    /// Hash algorithm (1 = SHA-1).
    hash_algorithm: u8,
    /// Flags (opt-out).
    flags: u8,
    /// Number of additional hash iterations.
    iterations: u16,
    /// Salt.
    salt: Vec<u8>,
    /// Next hashed owner name.
    next_hashed: Vec<u8>,
    /// Type bitmap.
    type_bitmap: Vec<u8>,
}

impl NSEC3 {
    /// Opt-out flag bit.
    pub const FLAG_OPT_OUT: u8 = 0x01;

    /// Creates a new NSEC3 record.
    pub fn new(
        hash_algorithm: u8,
        flags: u8,
        iterations: u16,
        salt: impl Into<Vec<u8>>,
        next_hashed: impl Into<Vec<u8>>,
        type_bitmap: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            hash_algorithm,
            flags,
            iterations,
            salt: salt.into(),
            next_hashed: next_hashed.into(),
            type_bitmap: type_bitmap.into(),
        }
    }

    /// Returns the hash algorithm.
    #[inline]
    pub const fn hash_algorithm(&self) -> u8 {
        self.hash_algorithm
    }

    /// Returns the flags.
    #[inline]
    pub const fn flags(&self) -> u8 {
        self.flags
    }

    /// Returns true if opt-out is set.
    #[inline]
    pub const fn is_opt_out(&self) -> bool {
        (self.flags & Self::FLAG_OPT_OUT) != 0
    }

    /// Returns the iteration count.
    #[inline]
    pub const fn iterations(&self) -> u16 {
        self.iterations
    }

    /// Returns the salt.
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// Returns the next hashed owner name.
    pub fn next_hashed(&self) -> &[u8] {
        &self.next_hashed
    }

    /// Returns the raw type bitmap.
    pub fn type_bitmap(&self) -> &[u8] {
        &self.type_bitmap
    }

    /// Returns the record types present according to the bitmap.
    pub fn types(&self) -> Vec<u16> {
        types_from_bitmap(&self.type_bitmap)
    }

    /// Parses an NSEC3 record from its rdata.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut reader = WireReader::new(data);
        let hash_algorithm = reader.read_u8()?;
        let flags = reader.read_u8()?;
        let iterations = reader.read_u16()?;
        let salt = reader.read_character_string()?.to_vec();
        let next_hashed = reader.read_character_string()?.to_vec();
        let type_bitmap = reader.read_bytes(reader.remaining())?.to_vec();

        Ok(Self {
            hash_algorithm,
            flags,
            iterations,
            salt,
            next_hashed,
            type_bitmap,
        })
    }

    /// Returns the wire format length.
    pub fn wire_len(&self) -> usize {
        4 + 1 + self.salt.len() + 1 + self.next_hashed.len() + self.type_bitmap.len()
    }

    /// Writes the NSEC3 record to wire format.
    pub fn write_to(&self, buf: &mut BytesMut) {
        buf.extend_from_slice(&[self.hash_algorithm, self.flags]);
        buf.extend_from_slice(&self.iterations.to_be_bytes());
        buf.extend_from_slice(&[self.salt.len() as u8]);
        buf.extend_from_slice(&self.salt);
        buf.extend_from_slice(&[self.next_hashed.len() as u8]);
        buf.extend_from_slice(&self.next_hashed);
        buf.extend_from_slice(&self.type_bitmap);
    }

    fn salt_display(&self) -> String {
        if self.salt.is_empty() {
            "-".to_string()
        } else {
            HEXLOWER.encode(&self.salt)
        }
    }
}

impl fmt::Display for NSEC3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.hash_algorithm,
            self.flags,
            self.iterations,
            self.salt_display(),
            BASE32_NOPAD.encode(&self.next_hashed)
        )?;
        fmt_type_list(f, &self.type_bitmap)
    }
}

/// NSEC3PARAM record - NSEC3 hashing parameters (RFC 5155).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NSEC3PARAM {
    /// Hash algorithm.
    hash_algorithm: u8,
    /// Flags.
    flags: u8,
    /// Number of additional hash iterations.
    iterations: u16,
    /// Salt.
    salt: Vec<u8>,
}

impl NSEC3PARAM {
    /// Creates a new NSEC3PARAM record.
    pub fn new(hash_algorithm: u8, flags: u8, iterations: u16, salt: impl Into<Vec<u8>>) -> Self {
        Self {
            hash_algorithm,
            flags,
            iterations,
            salt: salt.into(),
        }
    }

    /// Returns the hash algorithm.
    #[inline]
    pub const fn hash_algorithm(&self) -> u8 {
        self.hash_algorithm
    }

    /// Returns the flags.
    #[inline]
    pub const fn flags(&self) -> u8 {
        self.flags
    }

    /// Returns the iteration count.
    #[inline]
    pub const fn iterations(&self) -> u16 {
        self.iterations
    }

    /// Returns the salt.
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// Parses an NSEC3PARAM record from its rdata.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut reader = WireReader::new(data);
        let hash_algorithm = reader.read_u8()?;
        let flags = reader.read_u8()?;
        let iterations = reader.read_u16()?;
        let salt = reader.read_character_string()?.to_vec();

        if !reader.is_empty() {
            return Err(Error::invalid_rdata(
                "NSEC3PARAM",
                "trailing bytes after salt",
            ));
        }

        Ok(Self {
            hash_algorithm,
            flags,
            iterations,
            salt,
        })
    }

    /// Returns the wire format length.
    pub fn wire_len(&self) -> usize {
        5 + self.salt.len()
    }

    /// Writes the NSEC3PARAM record to wire format.
    pub fn write_to(&self, buf: &mut BytesMut) {
        buf.extend_from_slice(&[self.hash_algorithm, self.flags]);
        buf.extend_from_slice(&self.iterations.to_be_bytes());
        buf.extend_from_slice(&[self.salt.len() as u8]);
        buf.extend_from_slice(&self.salt);
    }
}

impl fmt::Display for NSEC3PARAM {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let salt = if self.salt.is_empty() {
            "-".to_string()
        } else {
            HEXLOWER.encode(&self.salt)
        };

        write!(
            f,
            "{} {} {} {}",
            self.hash_algorithm, self.flags, self.iterations, salt
        )
    }
}
