//! Location record type (LOC, RFC 1876).

use crate::error::{Error, Result};
use crate::wire::WireReader;
use bytes::BytesMut;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed rdata size of a version-0 LOC record.
const LOC_RDATA_LEN: usize = 16;

/// Latitude/longitude zero point: the equator/prime meridian sits at
/// 2^31 thousandths of an arc second.
const LOC_EQUATOR: u32 = 0x8000_0000;

/// Altitude zero point: 100 000 m below the WGS 84 spheroid, in cm.
const LOC_ALTITUDE_BASE: i64 = 10_000_000;

/// LOC record - geographical location (RFC 1876).
///
/// # Wire Format
///
/// A fixed 16-byte layout: version, size, horizontal precision, and
/// vertical precision (one byte each, the latter three in the RFC's
/// base/exponent centimetre encoding), followed by latitude, longitude,
/// and altitude as 32-bit big-endian values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LOC {
    /// Version number of the representation (must be 0).
    version: u8,
    /// Diameter of the enclosing sphere (base/exponent cm encoding).
    size: u8,
    /// Horizontal precision (base/exponent cm encoding).
    horiz_pre: u8,
    /// Vertical precision (base/exponent cm encoding).
    vert_pre: u8,
    /// Latitude in thousandths of an arc second, offset by 2^31.
    latitude: u32,
    /// Longitude in thousandths of an arc second, offset by 2^31.
    longitude: u32,
    /// Altitude in centimetres, offset by 100 000 m.
    altitude: u32,
}

impl LOC {
    /// Creates a new LOC record from raw wire-encoded fields.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        version: u8,
        size: u8,
        horiz_pre: u8,
        vert_pre: u8,
        latitude: u32,
        longitude: u32,
        altitude: u32,
    ) -> Self {
        Self {
            version,
            size,
            horiz_pre,
            vert_pre,
            latitude,
            longitude,
            altitude,
        }
    }

    /// Returns the version field.
    #[inline]
    pub const fn version(&self) -> u8 {
        self.version
    }

    /// Returns the raw size field.
    #[inline]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Returns the raw horizontal precision field.
    #[inline]
    pub const fn horiz_pre(&self) -> u8 {
        self.horiz_pre
    }

    /// Returns the raw vertical precision field.
    #[inline]
    pub const fn vert_pre(&self) -> u8 {
        self.vert_pre
    }

    /// Returns the raw latitude field.
    #[inline]
    pub const fn latitude(&self) -> u32 {
        self.latitude
    }

    /// Returns the raw longitude field.
    #[inline]
    pub const fn longitude(&self) -> u32 {
        self.longitude
    }

    /// Returns the raw altitude field.
    #[inline]
    pub const fn altitude(&self) -> u32 {
        self.altitude
    }

    /// Returns the altitude in metres relative to the WGS 84 spheroid.
    pub fn altitude_meters(&self) -> f64 {
        (i64::from(self.altitude) - LOC_ALTITUDE_BASE) as f64 / 100.0
    }

    /// Decodes a base/exponent centimetre field into metres.
    fn precision_meters(field: u8) -> f64 {
        let mantissa = f64::from(field >> 4);
        let exponent = i32::from(field & 0x0F);
        mantissa * 10f64.powi(exponent) / 100.0
    }

    /// Parses a LOC record from its rdata.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() != LOC_RDATA_LEN {
            return Err(Error::rdata_length_mismatch("LOC", LOC_RDATA_LEN, data.len()));
        }

        let mut reader = WireReader::new(data);
        Ok(Self {
            version: reader.read_u8()?,
            size: reader.read_u8()?,
            horiz_pre: reader.read_u8()?,
            vert_pre: reader.read_u8()?,
            latitude: reader.read_u32()?,
            longitude: reader.read_u32()?,
            altitude: reader.read_u32()?,
        })
    }

    /// Returns the wire format length (always 16).
    #[inline]
    pub const fn wire_len(&self) -> usize {
        LOC_RDATA_LEN
    }

    /// Writes the LOC record to wire format.
    pub fn write_to(&self, buf: &mut BytesMut) {
        buf.extend_from_slice(&[self.version, self.size, self.horiz_pre, self.vert_pre]);
        buf.extend_from_slice(&self.latitude.to_be_bytes());
        buf.extend_from_slice(&self.longitude.to_be_bytes());
        buf.extend_from_slice(&self.altitude.to_be_bytes());
    }

    /// Formats an angle in thousandths of an arc second as
    /// degrees/minutes/seconds with a hemisphere letter.
    fn format_angle(
        f: &mut fmt::Formatter<'_>,
        raw: u32,
        positive: char,
        negative: char,
    ) -> fmt::Result {
        let (abs, hemi) = if raw >= LOC_EQUATOR {
            (raw - LOC_EQUATOR, positive)
        } else {
            (LOC_EQUATOR - raw, negative)
        };

        let msec = abs % 1000;
        let total_sec = abs / 1000;
        let sec = total_sec % 60;
        let total_min = total_sec / 60;
        let min = total_min % 60;
        let deg = total_min / 60;

        write!(f, "{deg} {min} {sec}.{msec:03} {hemi}")
    }
}

impl Default for LOC {
    /// An unknown location with the RFC 1876 default size (1 m) and
    /// precisions (10 km horizontal, 10 m vertical).
    fn default() -> Self {
        Self {
            version: 0,
            size: 0x12,
            horiz_pre: 0x16,
            vert_pre: 0x13,
            latitude: LOC_EQUATOR,
            longitude: LOC_EQUATOR,
            altitude: LOC_ALTITUDE_BASE as u32,
        }
    }
}

impl fmt::Display for LOC {
    /// Master-file presentation per RFC 1876 Section 3, e.g.
    /// `52 22 23.000 N 4 53 32.000 E -2.00m 0m 10000m 10m`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::format_angle(f, self.latitude, 'N', 'S')?;
        write!(f, " ")?;
        Self::format_angle(f, self.longitude, 'E', 'W')?;
        write!(
            f,
            " {:.2}m {}m {}m {}m",
            self.altitude_meters(),
            Self::precision_meters(self.size),
            Self::precision_meters(self.horiz_pre),
            Self::precision_meters(self.vert_pre),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 52 22 23.000 N 4 53 32.000 E, -2 m altitude (Amsterdam).
    fn amsterdam() -> LOC {
        let lat = LOC_EQUATOR + ((52 * 3600 + 22 * 60 + 23) * 1000);
        let lon = LOC_EQUATOR + ((4 * 3600 + 53 * 60 + 32) * 1000);
        let alt = (LOC_ALTITUDE_BASE - 200) as u32;
        LOC::new(0, 0x12, 0x16, 0x13, lat, lon, alt)
    }

    #[test]
    fn test_loc_roundtrip() {
        let loc = amsterdam();
        let mut buf = BytesMut::new();
        loc.write_to(&mut buf);
        assert_eq!(buf.len(), 16);

        let parsed = LOC::parse(&buf).unwrap();
        assert_eq!(loc, parsed);
    }

    #[test]
    fn test_loc_wrong_length() {
        assert!(LOC::parse(&[0; 15]).is_err());
        assert!(LOC::parse(&[0; 17]).is_err());
    }

    #[test]
    fn test_loc_display() {
        assert_eq!(
            amsterdam().to_string(),
            "52 22 23.000 N 4 53 32.000 E -2.00m 1m 10000m 10m"
        );
    }

    #[test]
    fn test_loc_southern_hemisphere() {
        let lat = LOC_EQUATOR - ((33 * 3600 + 51 * 60 + 54) * 1000);
        let loc = LOC::new(0, 0x12, 0x16, 0x13, lat, LOC_EQUATOR, LOC_ALTITUDE_BASE as u32);
        assert!(loc.to_string().starts_with("33 51 54.000 S"));
    }

    #[test]
    fn test_precision_decoding() {
        // 0x12 = mantissa 1, exponent 2 => 100 cm => 1 m.
        assert_eq!(LOC::precision_meters(0x12), 1.0);
        // 0x16 = 1e6 cm => 10 km.
        assert_eq!(LOC::precision_meters(0x16), 10_000.0);
    }
}
