//! Standard timings (bytes 0x26-0x35)

use super::{Resolution, ResolutionSet};
use crate::error::Result;
use crate::field;

/// Offset of the first standard timing pair
pub const STANDARD_TIMINGS_OFFSET: usize = 0x26;

/// Number of standard timing pairs in the base block
pub const STANDARD_TIMINGS_COUNT: usize = 8;

/// Image aspect ratio of a standard timing (bits 7:6 of the second byte)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    /// 00b
    Ratio16x10,
    /// 01b
    Ratio4x3,
    /// 10b
    Ratio5x4,
    /// 11b
    Ratio16x9,
}

impl AspectRatio {
    /// Decode from the top two bits of a byte
    pub fn from_bits(byte: u8) -> Self {
        match byte >> 6 {
            0b00 => Self::Ratio16x10,
            0b01 => Self::Ratio4x3,
            0b10 => Self::Ratio5x4,
            _ => Self::Ratio16x9,
        }
    }

    /// (horizontal, vertical) ratio terms
    pub fn terms(&self) -> (u32, u32) {
        match self {
            Self::Ratio16x10 => (16, 10),
            Self::Ratio4x3 => (4, 3),
            Self::Ratio5x4 => (5, 4),
            Self::Ratio16x9 => (16, 9),
        }
    }

    /// Vertical lines for a horizontal width, rounded half up
    pub fn height_for(&self, width: u16) -> u16 {
        let (h, v) = self.terms();
        ((2 * width as u32 * v + h) / (2 * h)) as u16
    }
}

/// One decoded standard timing entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardTiming {
    /// Horizontal active pixels
    pub h_active: u16,
    /// Image aspect ratio
    pub aspect_ratio: AspectRatio,
    /// Refresh rate in Hz
    pub refresh_hz: u8,
}

impl StandardTiming {
    /// Decode a byte pair, `None` for the (0x01, 0x01) unused marker
    ///
    /// Layout: byte 1 = (h_active / 8) - 31, byte 2 [7:6] aspect ratio,
    /// [5:0] refresh rate - 60.
    pub fn decode(b1: u8, b2: u8) -> Option<Self> {
        if b1 == 0x01 && b2 == 0x01 {
            return None;
        }

        Some(Self {
            h_active: (b1 as u16 + 31) * 8,
            aspect_ratio: AspectRatio::from_bits(b2),
            refresh_hz: (b2 & 0x3F) + 60,
        })
    }

    /// Vertical active lines derived from the aspect ratio
    pub fn v_active(&self) -> u16 {
        self.aspect_ratio.height_for(self.h_active)
    }

    /// Active pixel area
    pub fn resolution(&self) -> Resolution {
        Resolution::new(self.h_active, self.v_active())
    }
}

/// Add the resolutions of the eight standard timing slots
pub fn standard_timings(edid: &[u8], set: &mut ResolutionSet) -> Result<()> {
    let table = field::slice(edid, STANDARD_TIMINGS_OFFSET, STANDARD_TIMINGS_COUNT * 2)?;

    for pair in table.chunks_exact(2) {
        if let Some(timing) = StandardTiming::decode(pair[0], pair[1]) {
            log::trace!(
                "Standard timing {:02X} {:02X}: {} @ {} Hz",
                pair[0],
                pair[1],
                timing.resolution(),
                timing.refresh_hz
            );
            set.insert(timing.resolution());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_pair() {
        // (0x13 + 31) * 8 = 400
        let timing = StandardTiming::decode(0x13, 0x40).unwrap();
        assert_eq!(timing.h_active, 400);
        assert_eq!(timing.aspect_ratio, AspectRatio::Ratio4x3);
        assert_eq!(timing.refresh_hz, 60);
        assert_eq!(timing.resolution(), Resolution::new(400, 300));
        assert_eq!(
            StandardTiming::decode(0x31, 0x40).unwrap().resolution(),
            Resolution::new(640, 480)
        );
    }

    #[test]
    fn test_unused_marker() {
        assert!(StandardTiming::decode(0x01, 0x01).is_none());
        // Only the exact pair is the marker
        assert!(StandardTiming::decode(0x01, 0x00).is_some());
    }

    #[test]
    fn test_aspect_ratios() {
        let cases = [
            (0xD1, 0xC0, Resolution::new(1920, 1080)),
            (0x81, 0x00, Resolution::new(1280, 800)),
            (0x81, 0x80, Resolution::new(1280, 1024)),
            (0x71, 0x4F, Resolution::new(1152, 864)),
        ];
        for (b1, b2, expected) in cases {
            assert_eq!(StandardTiming::decode(b1, b2).unwrap().resolution(), expected);
        }
        assert_eq!(StandardTiming::decode(0x71, 0x4F).unwrap().refresh_hz, 75);
    }

    #[test]
    fn test_rounding_half_up() {
        // 264 * 9 / 16 = 148.5
        assert_eq!(AspectRatio::Ratio16x9.height_for(264), 149);
        // 1288 * 4 / 5 = 1030.4
        assert_eq!(AspectRatio::Ratio5x4.height_for(1288), 1030);
    }

    #[test]
    fn test_table() {
        let mut edid = [0u8; 0x36];
        edid[0x26..0x36].copy_from_slice(&[
            0x31, 0x40, 0x01, 0x01, 0xD1, 0xC0, 0x13, 0x40, 0x31, 0x40, 0x01, 0x01, 0x01, 0x01,
            0x01, 0x01,
        ]);
        let mut set = ResolutionSet::new();
        standard_timings(&edid, &mut set).unwrap();
        assert_eq!(set.to_strings(), ["640x480", "1920x1080", "400x300"]);
    }
}
