//! Detailed timing descriptors (the four descriptor slots)

use super::{Resolution, ResolutionSet};
use crate::descriptor::{DetailedTiming, DESCRIPTOR_LEN, DESCRIPTOR_OFFSETS};
use crate::error::Result;
use crate::field;

/// Check that a decoded timing has a plausible active area
///
/// Display descriptors misread as timings produce tiny or huge values, so
/// only 300 < h < 8000 and 200 < v < 8000 are accepted.
pub fn is_plausible(timing: &DetailedTiming) -> bool {
    (301..8000).contains(&timing.h_active) && (201..8000).contains(&timing.v_active)
}

/// Add the active area of every used, plausible descriptor slot
pub fn detailed_timings(edid: &[u8], set: &mut ResolutionSet) -> Result<()> {
    for offset in DESCRIPTOR_OFFSETS {
        let raw = field::array::<DESCRIPTOR_LEN>(edid, offset)?;
        let timing = DetailedTiming::from_bytes(raw);

        if timing.is_unused() {
            log::trace!("Descriptor slot 0x{:02X} holds no timing", offset);
            continue;
        }
        if !is_plausible(&timing) {
            log::trace!(
                "Descriptor slot 0x{:02X}: rejecting {}x{}",
                offset,
                timing.h_active,
                timing.v_active
            );
            continue;
        }

        set.insert(Resolution::new(timing.h_active, timing.v_active));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edid_with_slot(offset: usize, desc: [u8; DESCRIPTOR_LEN]) -> [u8; 128] {
        let mut edid = [0u8; 128];
        edid[offset..offset + DESCRIPTOR_LEN].copy_from_slice(&desc);
        edid
    }

    fn timing_bytes(clock: u16, h: u16, v: u16) -> [u8; DESCRIPTOR_LEN] {
        let mut desc = [0u8; DESCRIPTOR_LEN];
        desc[0..2].copy_from_slice(&clock.to_le_bytes());
        desc[2] = h as u8;
        desc[4] = ((h >> 8) as u8) << 4;
        desc[5] = v as u8;
        desc[7] = ((v >> 8) as u8) << 4;
        desc
    }

    #[test]
    fn test_timing_slot() {
        let edid = edid_with_slot(0x48, timing_bytes(14850, 2560, 1440));
        let mut set = ResolutionSet::new();
        detailed_timings(&edid, &mut set).unwrap();
        assert_eq!(set.to_strings(), ["2560x1440"]);
    }

    #[test]
    fn test_zero_clock_skipped() {
        let edid = edid_with_slot(0x36, timing_bytes(0, 1920, 1080));
        let mut set = ResolutionSet::new();
        detailed_timings(&edid, &mut set).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_bounds_are_exclusive() {
        let mut set = ResolutionSet::new();
        for (h, v) in [(300, 600), (800, 200)] {
            let edid = edid_with_slot(0x5A, timing_bytes(100, h, v));
            detailed_timings(&edid, &mut set).unwrap();
        }
        assert!(set.is_empty());

        let edid = edid_with_slot(0x6C, timing_bytes(100, 301, 201));
        detailed_timings(&edid, &mut set).unwrap();
        assert_eq!(set.to_strings(), ["301x201"]);
    }

    #[test]
    fn test_upper_bounds() {
        let timing = |h_active, v_active| DetailedTiming {
            pixel_clock_10khz: 1,
            h_active,
            v_active,
        };
        assert!(is_plausible(&timing(7999, 7999)));
        assert!(!is_plausible(&timing(8000, 600)));
        assert!(!is_plausible(&timing(800, 8000)));
    }

    #[test]
    fn test_truncated() {
        let mut set = ResolutionSet::new();
        assert!(detailed_timings(&[0u8; 0x7D], &mut set).is_err());
    }
}
