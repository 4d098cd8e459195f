//! Established timings (bytes 0x23-0x25)

use super::{Resolution, ResolutionSet};
use crate::error::Result;
use crate::field;

/// Offset of Established Timings I
pub const ESTABLISHED_TIMINGS_OFFSET: usize = 0x23;

/// Resolutions of the established timing bits, most significant bit of
/// byte 0x23 first
///
/// Index 15 is also reported for the manufacturer-reserved bit 7 of byte
/// 0x25.
pub const ESTABLISHED_TIMINGS: [Resolution; 16] = [
    Resolution::new(720, 400),   // 720x400 @ 70 Hz
    Resolution::new(720, 400),   // 720x400 @ 88 Hz
    Resolution::new(640, 480),   // 640x480 @ 60 Hz
    Resolution::new(640, 480),   // 640x480 @ 67 Hz
    Resolution::new(640, 480),   // 640x480 @ 72 Hz
    Resolution::new(640, 480),   // 640x480 @ 75 Hz
    Resolution::new(800, 600),   // 800x600 @ 56 Hz
    Resolution::new(800, 600),   // 800x600 @ 60 Hz
    Resolution::new(800, 600),   // 800x600 @ 72 Hz
    Resolution::new(800, 600),   // 800x600 @ 75 Hz
    Resolution::new(832, 624),   // 832x624 @ 75 Hz
    Resolution::new(1024, 768),  // 1024x768 @ 87 Hz interlaced
    Resolution::new(1024, 768),  // 1024x768 @ 60 Hz
    Resolution::new(1024, 768),  // 1024x768 @ 70 Hz
    Resolution::new(1280, 1024), // 1024x768 @ 75 Hz slot, reported as 1280x1024
    Resolution::new(1152, 870),  // 1280x1024 @ 75 Hz slot, reported as 1152x870
];

/// Add the resolutions flagged in the established timings bitmap
pub fn established_timings(edid: &[u8], set: &mut ResolutionSet) -> Result<()> {
    let [t1, t2, t3] = *field::array::<3>(edid, ESTABLISHED_TIMINGS_OFFSET)?;
    log::debug!(
        "Established timings: {:02X} {:02X} {:02X}",
        t1,
        t2,
        t3
    );

    for (bit, resolution) in ESTABLISHED_TIMINGS[..8].iter().enumerate() {
        if t1 & (0x80 >> bit) != 0 {
            set.insert(*resolution);
        }
    }
    for (bit, resolution) in ESTABLISHED_TIMINGS[8..].iter().enumerate() {
        if t2 & (0x80 >> bit) != 0 {
            set.insert(*resolution);
        }
    }
    if t3 & 0x80 != 0 {
        set.insert(ESTABLISHED_TIMINGS[15]);
    }

    Ok(())
}
