//! Descriptor parsing implementation
//!
//! This module classifies the 18-byte display descriptors and decodes the
//! payloads of the kinds the crate understands.

use alloc::string::{String, ToString};

use crate::error::Result;
use crate::field;

use super::types::*;

/// Read the descriptor type from the first four bytes
///
/// Display descriptors start with three zero bytes, so the value is the tag
/// in byte 3. A detailed timing descriptor starts with a nonzero pixel clock
/// and lands far outside the tag range.
pub fn descriptor_type(desc: &[u8; DESCRIPTOR_LEN]) -> u32 {
    u32::from_be_bytes([desc[0], desc[1], desc[2], desc[3]])
}

/// Classify a descriptor and decode its payload
pub fn parse(desc: &[u8; DESCRIPTOR_LEN]) -> DescriptorKind<'_> {
    let ty = descriptor_type(desc);
    log::trace!("Descriptor type 0x{:08X}", ty);

    match ty {
        TAG_SERIAL_NUMBER => DescriptorKind::SerialNumber(text(desc)),
        TAG_UNSPECIFIED_TEXT => DescriptorKind::UnspecifiedText(text(desc)),
        TAG_RANGE_LIMITS => DescriptorKind::RangeLimits(range_limits(desc)),
        TAG_MONITOR_NAME => DescriptorKind::MonitorName(text(desc)),
        TAG_WHITE_POINT => DescriptorKind::WhitePoint(desc),
        TAG_STANDARD_TIMING_ID => DescriptorKind::StandardTimingId(desc),
        0..=TAG_MANUFACTURER_MAX => DescriptorKind::ManufacturerSpecific {
            tag: desc[3],
            raw: desc,
        },
        _ => DescriptorKind::DetailedTiming(DetailedTiming::from_bytes(desc)),
    }
}

/// Decode the text payload (bytes 4-17) of a text descriptor
///
/// Bytes outside 7-bit ASCII become U+FFFD. Leading and trailing whitespace
/// and control bytes (the 0x0A terminator, NUL, padding) are trimmed.
pub fn text(desc: &[u8; DESCRIPTOR_LEN]) -> String {
    let decoded: String = desc[4..]
        .iter()
        .map(|&b| {
            if b.is_ascii() {
                b as char
            } else {
                char::REPLACEMENT_CHARACTER
            }
        })
        .collect();
    String::from(decoded.trim_matches(|c: char| c <= ' '))
}

/// Decode a display range limits descriptor
pub fn range_limits(desc: &[u8; DESCRIPTOR_LEN]) -> RangeLimits {
    RangeLimits {
        vertical_min_hz: desc[5],
        vertical_max_hz: desc[6],
        horizontal_min_khz: desc[7],
        horizontal_max_khz: desc[8],
        max_pixel_clock_mhz: desc[9] as u16 * 10,
    }
}

/// Decode the leading fields of a detailed timing descriptor
pub fn detailed_timing(desc: &[u8; DESCRIPTOR_LEN]) -> DetailedTiming {
    DetailedTiming::from_bytes(desc)
}

/// Borrow the four descriptor slots of the base block
pub fn descriptors(edid: &[u8]) -> Result<[Descriptor<'_>; 4]> {
    let at = |offset: usize| {
        field::array::<DESCRIPTOR_LEN>(edid, offset).map(|raw| Descriptor { offset, raw })
    };

    Ok([
        at(DESCRIPTOR_OFFSETS[0])?,
        at(DESCRIPTOR_OFFSETS[1])?,
        at(DESCRIPTOR_OFFSETS[2])?,
        at(DESCRIPTOR_OFFSETS[3])?,
    ])
}

/// Render bytes as contiguous uppercase hex
pub fn hex_dump(bytes: &[u8]) -> String {
    HexBytes(bytes).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn text_descriptor(tag: u8, payload: &[u8]) -> [u8; DESCRIPTOR_LEN] {
        let mut desc = [0x20u8; DESCRIPTOR_LEN];
        desc[..5].copy_from_slice(&[0x00, 0x00, 0x00, tag, 0x00]);
        desc[5..5 + payload.len()].copy_from_slice(payload);
        desc[5 + payload.len()] = 0x0A;
        desc
    }

    #[test]
    fn test_descriptor_type() {
        let desc = text_descriptor(0xFC, b"X");
        assert_eq!(descriptor_type(&desc), 0xFC);

        let mut dtd = [0u8; DESCRIPTOR_LEN];
        dtd[0] = 0x02;
        dtd[1] = 0x3A;
        assert_eq!(descriptor_type(&dtd), 0x023A_0000);
    }

    #[test]
    fn test_text_descriptors() {
        let desc = text_descriptor(0xFC, b"DELL P2418HT");
        assert_eq!(parse(&desc), DescriptorKind::MonitorName("DELL P2418HT".into()));

        let desc = text_descriptor(0xFF, b"TVT7F85UBSWL");
        assert_eq!(parse(&desc), DescriptorKind::SerialNumber("TVT7F85UBSWL".into()));

        let desc = text_descriptor(0xFE, b"LG Display");
        let kind = parse(&desc);
        assert_eq!(kind.text(), Some("LG Display"));
        assert_eq!(kind.to_string(), "Unspecified Text: LG Display");
    }

    #[test]
    fn test_text_non_ascii() {
        let desc = text_descriptor(0xFE, &[b'A', 0xC3, b'B']);
        assert_eq!(text(&desc), "A\u{FFFD}B");
    }

    #[test]
    fn test_range_limits() {
        let desc = [
            0x00, 0x00, 0x00, 0xFD, 0x00, 0x32, 0x4C, 0x1E, 0x53, 0x11, 0x00, 0x0A, 0x20, 0x20,
            0x20, 0x20, 0x20, 0x20,
        ];
        let limits = range_limits(&desc);
        assert_eq!(limits.vertical_min_hz, 50);
        assert_eq!(limits.vertical_max_hz, 76);
        assert_eq!(limits.horizontal_min_khz, 30);
        assert_eq!(limits.horizontal_max_khz, 83);
        assert_eq!(limits.max_pixel_clock_mhz, 170);
        assert_eq!(
            parse(&desc).to_string(),
            "Range Limits: Field Rate 50-76 Hz vertical, 30-83 kHz horizontal, Max clock: 170 MHz"
        );
    }

    #[test]
    fn test_detailed_timing() {
        let desc = [
            0x02, 0x3A, 0x80, 0x18, 0x71, 0x38, 0x2D, 0x40, 0x58, 0x2C, 0x45, 0x00, 0x0F, 0x28,
            0x21, 0x00, 0x00, 0x1E,
        ];
        let timing = detailed_timing(&desc);
        assert_eq!(timing.pixel_clock_10khz, 14850);
        assert_eq!(timing.pixel_clock_mhz(), 148);
        assert_eq!(timing.h_active, 1920);
        assert_eq!(timing.v_active, 1080);
        assert_eq!(
            parse(&desc).to_string(),
            "Preferred Timing: Clock 148 MHz, Active Pixels 1920x1080"
        );
    }

    #[test]
    fn test_raw_descriptors() {
        let mut desc = [0u8; DESCRIPTOR_LEN];
        desc[3] = 0xFB;
        assert_eq!(parse(&desc), DescriptorKind::WhitePoint(&desc));

        desc[3] = 0xFA;
        assert!(matches!(parse(&desc), DescriptorKind::StandardTimingId(_)));

        desc[3] = 0x0F;
        desc[4] = 0xAB;
        let kind = parse(&desc);
        assert!(matches!(kind, DescriptorKind::ManufacturerSpecific { tag: 0x0F, .. }));
        assert_eq!(
            kind.to_string(),
            concat!(
                "Manufacturer Data: ",
                "0000000FAB",
                "0000000000000",
                "0000000000000"
            )
        );
    }

    #[test]
    fn test_unlisted_tag_is_timing() {
        // Dummy descriptor (0x10) falls through to the timing decode
        let mut desc = [0u8; DESCRIPTOR_LEN];
        desc[3] = 0x10;
        assert!(matches!(parse(&desc), DescriptorKind::DetailedTiming(t) if t.is_unused()));
    }

    #[test]
    fn test_descriptors_offsets() {
        let edid = [0u8; 128];
        let descs = descriptors(&edid).unwrap();
        let offsets: [usize; 4] = descs.map(|d| d.offset);
        assert_eq!(offsets, [54, 72, 90, 108]);
        assert!(descriptors(&edid[..125]).is_err());
    }

    #[test]
    fn test_hex_dump() {
        assert_eq!(hex_dump(&[0x00, 0xAB, 0x1F]), "00AB1F");
        assert_eq!(hex_dump(&[]), "");
        assert_eq!(HexBytes(&[0xFF, 0x0A]).to_string(), "FF0A");
    }
}
