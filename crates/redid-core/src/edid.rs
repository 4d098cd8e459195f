//! EDID base block decoder
//!
//! [`Edid`] borrows a raw buffer and exposes one accessor per field. Each
//! accessor checks that a full 128-byte base block is present before reading,
//! so a truncated buffer fails every accessor with [`Error::OutOfRange`]
//! instead of decoding partial data.
//!
//! [`Error::OutOfRange`]: crate::Error::OutOfRange

use alloc::string::String;
use core::fmt;

use crate::descriptor::{self, Descriptor, DescriptorKind, DetailedTiming, DESCRIPTOR_LEN};
use crate::error::Result;
use crate::field;
use crate::resolution::{self, Resolution, ResolutionSet};
use crate::{EDID_BLOCK_LEN, EDID_HEADER, EXTENSION_COUNT_OFFSET};

// Base block field offsets
const MANUFACTURER_OFFSET: usize = 0x08;
const PRODUCT_OFFSET: usize = 0x0A;
const SERIAL_OFFSET: usize = 0x0C;
const WEEK_OFFSET: usize = 0x10;
const YEAR_OFFSET: usize = 0x11;
const VERSION_OFFSET: usize = 0x12;
const REVISION_OFFSET: usize = 0x13;
const VIDEO_INPUT_OFFSET: usize = 0x14;
const H_SIZE_OFFSET: usize = 0x15;
const V_SIZE_OFFSET: usize = 0x16;
const PREFERRED_TIMING_OFFSET: usize = 0x36;

/// Year encoded by a year byte of zero
const YEAR_BASE: i32 = 1990;

// ============================================================================
// Identity values
// ============================================================================

/// PNP manufacturer ID: three 5-bit letters packed into a big-endian u16
///
/// Bit 15 is reserved. A letter value of 0 is absent and omitted, so the
/// rendered ID has zero to three characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManufacturerId {
    /// Raw big-endian value of bytes 8-9
    pub raw: u16,
}

impl ManufacturerId {
    /// Letters, most significant first, with absent letters skipped
    pub fn letters(&self) -> impl Iterator<Item = char> {
        let raw = self.raw;
        [10u16, 5, 0].into_iter().filter_map(move |shift| {
            let v = ((raw >> shift) & 0x1F) as u8;
            // 1 -> 'A' ... 26 -> 'Z'
            (v != 0).then(|| (b'@' + v) as char)
        })
    }
}

impl fmt::Display for ManufacturerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use core::fmt::Write;

        self.letters().try_for_each(|c| f.write_char(c))
    }
}

/// Manufacturer product code, rendered as lowercase hex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub u16);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

/// ID serial number (bytes 12-15)
///
/// Rendered from byte 15 down to byte 12; alphanumeric ASCII bytes appear as
/// characters and anything else as two uppercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerialNumber {
    /// Bytes 12-15 in buffer order
    pub raw: [u8; 4],
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.raw.iter().rev() {
            if b.is_ascii_alphanumeric() {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "{:02X}", b)?;
            }
        }
        Ok(())
    }
}

/// EDID structure version and revision, read as signed bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    /// Version (byte 18)
    pub major: i8,
    /// Revision (byte 19)
    pub minor: i8,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Maximum image size in centimetres, read as signed bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalSize {
    /// Horizontal size (byte 21)
    pub horizontal_cm: i8,
    /// Vertical size (byte 22)
    pub vertical_cm: i8,
}

impl PhysicalSize {
    /// Size in inches
    pub fn inches(&self) -> (f32, f32) {
        (
            self.horizontal_cm as f32 / 2.54,
            self.vertical_cm as f32 / 2.54,
        )
    }
}

impl fmt::Display for PhysicalSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h_in, v_in) = self.inches();
        write!(
            f,
            "{} x {} cm ({:.1} x {:.1} in)",
            self.horizontal_cm, self.vertical_cm, h_in, v_in
        )
    }
}

/// Week and year of manufacture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManufactureDate {
    /// Raw week byte; 0 and 255 carry special meaning and are passed through
    pub week: u8,
    /// Calendar year
    pub year: i32,
}

impl ManufactureDate {
    /// Approximate month (1-based) from the week number
    pub fn month(&self) -> i32 {
        self.week as i32 * 12 / 52 + 1
    }
}

impl fmt::Display for ManufactureDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month(), self.year)
    }
}

// ============================================================================
// Decoder
// ============================================================================

/// Read-only view over an EDID buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edid<'a> {
    data: &'a [u8],
}

impl<'a> Edid<'a> {
    /// Wrap a raw EDID buffer (base block plus optional extensions)
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// The buffer, if it holds a complete base block
    fn base(&self) -> Result<&'a [u8]> {
        field::require_len(self.data, EDID_BLOCK_LEN)?;
        Ok(self.data)
    }

    /// Check for the fixed 00 FF FF FF FF FF FF 00 header pattern
    pub fn has_valid_header(&self) -> bool {
        self.data.starts_with(&EDID_HEADER)
    }

    /// Manufacturer ID from bytes 8-9
    pub fn manufacturer_id(&self) -> Result<ManufacturerId> {
        let raw = field::u16_be(self.base()?, MANUFACTURER_OFFSET)?;
        Ok(ManufacturerId { raw })
    }

    /// Product code from bytes 10-11 (little-endian)
    pub fn product_id(&self) -> Result<ProductId> {
        field::u16_le(self.base()?, PRODUCT_OFFSET).map(ProductId)
    }

    /// Serial number from bytes 12-15
    pub fn serial_number(&self) -> Result<SerialNumber> {
        let raw = *field::array::<4>(self.base()?, SERIAL_OFFSET)?;
        Ok(SerialNumber { raw })
    }

    /// Week of manufacture (byte 16), unvalidated
    pub fn manufacture_week(&self) -> Result<u8> {
        field::byte_at(self.base()?, WEEK_OFFSET)
    }

    /// Year of manufacture (byte 17 + 1990)
    pub fn manufacture_year(&self) -> Result<i32> {
        field::byte_at(self.base()?, YEAR_OFFSET).map(|y| y as i32 + YEAR_BASE)
    }

    /// Week and year of manufacture
    pub fn manufacture_date(&self) -> Result<ManufactureDate> {
        Ok(ManufactureDate {
            week: self.manufacture_week()?,
            year: self.manufacture_year()?,
        })
    }

    /// EDID version and revision (bytes 18-19)
    pub fn version(&self) -> Result<Version> {
        let base = self.base()?;
        Ok(Version {
            major: field::i8_at(base, VERSION_OFFSET)?,
            minor: field::i8_at(base, REVISION_OFFSET)?,
        })
    }

    /// Digital input flag (bit 7 of byte 20)
    pub fn is_digital(&self) -> Result<bool> {
        field::byte_at(self.base()?, VIDEO_INPUT_OFFSET).map(|b| b & 0x80 != 0)
    }

    /// Physical size in cm (bytes 21-22)
    pub fn physical_size_cm(&self) -> Result<PhysicalSize> {
        let base = self.base()?;
        Ok(PhysicalSize {
            horizontal_cm: field::i8_at(base, H_SIZE_OFFSET)?,
            vertical_cm: field::i8_at(base, V_SIZE_OFFSET)?,
        })
    }

    /// Number of extension blocks declared in byte 0x7E
    pub fn extension_count(&self) -> Result<u8> {
        field::byte_at(self.base()?, EXTENSION_COUNT_OFFSET)
    }

    /// The four descriptor slots
    pub fn descriptors(&self) -> Result<[Descriptor<'a>; 4]> {
        descriptor::descriptors(self.base()?)
    }

    /// Monitor name from the first 0xFC descriptor
    ///
    /// Only the last whitespace-separated word of the name is returned, so
    /// "DELL P2418HT" yields "P2418HT". `None` when no descriptor carries a
    /// name.
    pub fn model_name(&self) -> Result<Option<String>> {
        let name = self
            .descriptors()?
            .iter()
            .find(|d| d.descriptor_type() == descriptor::TAG_MONITOR_NAME)
            .map(|d| descriptor::text(d.raw));

        Ok(name.map(|name| {
            let last = name.split_whitespace().last().unwrap_or("");
            String::from(last.trim())
        }))
    }

    /// Active area of the first descriptor slot, without validation
    pub fn preferred_resolution(&self) -> Result<Resolution> {
        let raw = field::array::<DESCRIPTOR_LEN>(self.base()?, PREFERRED_TIMING_OFFSET)?;
        let timing = DetailedTiming::from_bytes(raw);
        Ok(Resolution::new(timing.h_active, timing.v_active))
    }

    /// Every advertised resolution, merged across all timing sources
    pub fn resolutions(&self) -> Result<ResolutionSet> {
        resolution::resolutions(self.base()?)
    }

    /// Decoded descriptor payloads in slot order
    pub fn descriptor_kinds(&self) -> Result<[DescriptorKind<'a>; 4]> {
        Ok(self.descriptors()?.map(|d| d.kind()))
    }
}
