//! Descriptor type definitions
//!
//! Types representing the four 18-byte display descriptors of the EDID base
//! block as defined by VESA E-EDID 1.4.

use alloc::string::String;
use core::fmt;

/// Size of one display descriptor in bytes
pub const DESCRIPTOR_LEN: usize = 18;

/// Absolute offsets of the four descriptor slots in the base block
pub const DESCRIPTOR_OFFSETS: [usize; 4] = [0x36, 0x48, 0x5A, 0x6C];

// ============================================================================
// Display descriptor tags (byte 3 when bytes 0-2 are zero)
// ============================================================================

/// Display Product Serial Number
pub const TAG_SERIAL_NUMBER: u32 = 0xFF;
/// Alphanumeric Data String
pub const TAG_UNSPECIFIED_TEXT: u32 = 0xFE;
/// Display Range Limits
pub const TAG_RANGE_LIMITS: u32 = 0xFD;
/// Display Product Name
pub const TAG_MONITOR_NAME: u32 = 0xFC;
/// Color Point Data
pub const TAG_WHITE_POINT: u32 = 0xFB;
/// Standard Timing Identifications
pub const TAG_STANDARD_TIMING_ID: u32 = 0xFA;
/// Highest tag reserved for manufacturer-specific descriptors
pub const TAG_MANUFACTURER_MAX: u32 = 0x0F;

// ============================================================================
// Decoded payloads
// ============================================================================

/// Display range limits (tag 0xFD)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct RangeLimits {
    /// Minimum vertical field rate in Hz
    pub vertical_min_hz: u8,
    /// Maximum vertical field rate in Hz
    pub vertical_max_hz: u8,
    /// Minimum horizontal line rate in kHz
    pub horizontal_min_khz: u8,
    /// Maximum horizontal line rate in kHz
    pub horizontal_max_khz: u8,
    /// Maximum pixel clock in MHz
    pub max_pixel_clock_mhz: u16,
}

impl fmt::Display for RangeLimits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Field Rate {}-{} Hz vertical, {}-{} kHz horizontal, Max clock: {} MHz",
            self.vertical_min_hz,
            self.vertical_max_hz,
            self.horizontal_min_khz,
            self.horizontal_max_khz,
            self.max_pixel_clock_mhz
        )
    }
}

/// The leading fields of a detailed timing descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct DetailedTiming {
    /// Raw pixel clock in units of 10 kHz
    pub pixel_clock_10khz: u16,
    /// Horizontal addressable pixels
    pub h_active: u16,
    /// Vertical addressable lines
    pub v_active: u16,
}

impl DetailedTiming {
    /// Decode from an 18-byte descriptor
    ///
    /// Layout: [1:0] pixel clock (LE), [2] h active low, [4] upper nibble h
    /// active high, [5] v active low, [7] upper nibble v active high.
    pub fn from_bytes(raw: &[u8; DESCRIPTOR_LEN]) -> Self {
        Self {
            pixel_clock_10khz: u16::from_le_bytes([raw[0], raw[1]]),
            h_active: active_pixels(raw[2], raw[4]),
            v_active: active_pixels(raw[5], raw[7]),
        }
    }

    /// Pixel clock in whole MHz (truncated)
    pub fn pixel_clock_mhz(&self) -> u16 {
        self.pixel_clock_10khz / 100
    }

    /// True when the slot carries no timing (pixel clock of zero)
    pub fn is_unused(&self) -> bool {
        self.pixel_clock_10khz == 0
    }
}

impl fmt::Display for DetailedTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Clock {} MHz, Active Pixels {}x{}",
            self.pixel_clock_mhz(),
            self.h_active,
            self.v_active
        )
    }
}

/// Combine a low byte with the upper nibble of a shared high byte
pub(crate) fn active_pixels(low: u8, high: u8) -> u16 {
    ((high as u16 & 0xF0) << 4) | low as u16
}

// ============================================================================
// Descriptor classification
// ============================================================================

/// Decoded content of one display descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorKind<'a> {
    /// Display product serial number text (0xFF)
    SerialNumber(String),
    /// Unspecified alphanumeric text (0xFE)
    UnspecifiedText(String),
    /// Display range limits (0xFD)
    RangeLimits(RangeLimits),
    /// Display product name text (0xFC)
    MonitorName(String),
    /// White point data (0xFB), kept raw
    WhitePoint(&'a [u8; DESCRIPTOR_LEN]),
    /// Standard timing identifications (0xFA), kept raw
    StandardTimingId(&'a [u8; DESCRIPTOR_LEN]),
    /// Manufacturer-specific descriptor (0x00-0x0F), kept raw
    ManufacturerSpecific {
        /// Descriptor tag
        tag: u8,
        /// All 18 bytes
        raw: &'a [u8; DESCRIPTOR_LEN],
    },
    /// Detailed timing descriptor
    DetailedTiming(DetailedTiming),
}

impl DescriptorKind<'_> {
    /// Report label for this descriptor kind
    pub fn label(&self) -> &'static str {
        match self {
            Self::SerialNumber(_) => "Serial Number",
            Self::UnspecifiedText(_) => "Unspecified Text",
            Self::RangeLimits(_) => "Range Limits",
            Self::MonitorName(_) => "Monitor Name",
            Self::WhitePoint(_) => "White Point Data",
            Self::StandardTimingId(_) => "Standard Timing ID",
            Self::ManufacturerSpecific { .. } => "Manufacturer Data",
            Self::DetailedTiming(_) => "Preferred Timing",
        }
    }

    /// Text payload, for the text descriptor kinds
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::SerialNumber(s) | Self::UnspecifiedText(s) | Self::MonitorName(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for DescriptorKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.label())?;
        match self {
            Self::SerialNumber(s) | Self::UnspecifiedText(s) | Self::MonitorName(s) => {
                f.write_str(s)
            }
            Self::RangeLimits(limits) => write!(f, "{}", limits),
            Self::WhitePoint(raw)
            | Self::StandardTimingId(raw)
            | Self::ManufacturerSpecific { raw, .. } => write_hex(f, &raw[..]),
            Self::DetailedTiming(timing) => write!(f, "{}", timing),
        }
    }
}

/// Write bytes as contiguous uppercase hex
pub(crate) fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    for b in bytes {
        write!(f, "{:02X}", b)?;
    }
    Ok(())
}

/// Displays a byte slice as contiguous uppercase hex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexBytes<'a>(pub &'a [u8]);

impl fmt::Display for HexBytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, self.0)
    }
}

/// One of the four display descriptors, borrowed from the EDID buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor<'a> {
    /// Absolute offset of the descriptor in the EDID
    pub offset: usize,
    /// The raw 18 bytes
    pub raw: &'a [u8; DESCRIPTOR_LEN],
}

impl<'a> Descriptor<'a> {
    /// Descriptor type: bytes 0-3 read as a big-endian u32
    pub fn descriptor_type(&self) -> u32 {
        super::parser::descriptor_type(self.raw)
    }

    /// Classify and decode this descriptor
    pub fn kind(&self) -> DescriptorKind<'a> {
        super::parser::parse(self.raw)
    }
}
