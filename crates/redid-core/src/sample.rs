//! Built-in sample EDID
//!
//! A 256-byte capture from a Dell P2418HT: the base block followed by one
//! CTA-861 extension.

/// Dell P2418HT EDID (base block + CTA-861 extension)
#[rustfmt::skip]
pub const SAMPLE_EDID: [u8; 256] = [
    0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x00, 0x10, 0xac, 0x13, 0x41, 0x4c, 0x57, 0x53, 0x42,
    0x16, 0x1c, 0x01, 0x04, 0xa5, 0x35, 0x1e, 0x78, 0x3e, 0xee, 0x95, 0xa3, 0x54, 0x4c, 0x99, 0x26,
    0x0f, 0x50, 0x54, 0xa5, 0x4b, 0x80, 0x71, 0x4f, 0x81, 0x00, 0x81, 0x80, 0xa9, 0xc0, 0xd1, 0xc0,
    0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x02, 0x3a, 0x80, 0x18, 0x71, 0x38, 0x2d, 0x40, 0x58, 0x2c,
    0x45, 0x00, 0x0f, 0x28, 0x21, 0x00, 0x00, 0x1e, 0x00, 0x00, 0x00, 0xff, 0x00, 0x54, 0x56, 0x54,
    0x37, 0x46, 0x38, 0x35, 0x55, 0x42, 0x53, 0x57, 0x4c, 0x0a, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x44,
    0x45, 0x4c, 0x4c, 0x20, 0x50, 0x32, 0x34, 0x31, 0x38, 0x48, 0x54, 0x0a, 0x00, 0x00, 0x00, 0xfd,
    0x00, 0x32, 0x4c, 0x1e, 0x53, 0x11, 0x00, 0x0a, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x01, 0x7e,
    0x02, 0x03, 0x18, 0xf1, 0x4b, 0x90, 0x05, 0x04, 0x03, 0x02, 0x01, 0x11, 0x12, 0x13, 0x14, 0x1f,
    0x23, 0x09, 0x07, 0x07, 0x83, 0x01, 0x00, 0x00, 0x02, 0x3a, 0x80, 0x18, 0x71, 0x38, 0x2d, 0x40,
    0x58, 0x2c, 0x45, 0x00, 0x0f, 0x28, 0x21, 0x00, 0x00, 0x1e, 0x01, 0x1d, 0x80, 0x18, 0x71, 0x1c,
    0x16, 0x20, 0x58, 0x2c, 0x25, 0x00, 0x0f, 0x28, 0x21, 0x00, 0x00, 0x9e, 0x01, 0x1d, 0x00, 0x72,
    0x51, 0xd0, 0x1e, 0x20, 0x6e, 0x28, 0x55, 0x00, 0x0f, 0x28, 0x21, 0x00, 0x00, 0x1e, 0x8c, 0x0a,
    0xd0, 0x8a, 0x20, 0xe0, 0x2d, 0x10, 0x10, 0x3e, 0x96, 0x00, 0x0f, 0x28, 0x21, 0x00, 0x00, 0x18,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xcf,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EDID_BLOCK_LEN, EDID_HEADER};

    fn block_sum(block: &[u8]) -> u8 {
        block.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
    }

    #[test]
    fn test_sample_layout() {
        assert!(SAMPLE_EDID.starts_with(&EDID_HEADER));
        assert_eq!(SAMPLE_EDID[0x7E], 1);
        assert_eq!(SAMPLE_EDID[EDID_BLOCK_LEN], 0x02);
    }

    #[test]
    fn test_sample_checksums() {
        for block in SAMPLE_EDID.chunks_exact(EDID_BLOCK_LEN) {
            assert_eq!(block_sum(block), 0);
        }
    }
}
