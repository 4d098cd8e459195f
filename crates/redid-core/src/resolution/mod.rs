//! Supported resolution enumeration
//!
//! An EDID advertises display modes in four independent places. This module
//! decodes each of them and merges the results, in this order, into one
//! [`ResolutionSet`]:
//!
//! 1. Established timings bitmap (bytes 0x23-0x25)
//! 2. Standard timings table (bytes 0x26-0x35)
//! 3. Detailed timing descriptors (the four descriptor slots)
//! 4. The video data block of a CTA-861 extension (first extension only)
//!
//! The first three are part of the base block and fail hard when it is
//! truncated. The CTA-861 walk degrades to "no additional resolutions" when
//! the extension is absent or malformed.

mod cta;
mod detailed;
mod established;
mod standard;

pub use cta::*;
pub use detailed::*;
pub use established::*;
pub use standard::*;

use core::fmt;

use crate::error::Result;
use crate::field;
use crate::EDID_BLOCK_LEN;

/// Capacity of a [`ResolutionSet`]
///
/// The four sources can produce at most 25 distinct labels (7 established,
/// 8 standard, 4 detailed, 6 CTA-861).
pub const MAX_RESOLUTIONS: usize = 32;

/// An active pixel area, optionally interlaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Resolution {
    /// Horizontal active pixels
    pub width: u16,
    /// Vertical active lines
    pub height: u16,
    /// Whether the mode is interlaced
    pub interlaced: bool,
}

impl Resolution {
    /// Create a progressive resolution
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            interlaced: false,
        }
    }

    /// Create an interlaced resolution
    pub const fn interlaced(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            interlaced: true,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)?;
        if self.interlaced {
            f.write_str("i")?;
        }
        Ok(())
    }
}

/// Insertion-ordered set of resolutions without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionSet {
    entries: heapless::Vec<Resolution, MAX_RESOLUTIONS>,
}

impl ResolutionSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a resolution, returning true if it was not already present
    pub fn insert(&mut self, resolution: Resolution) -> bool {
        if self.contains(&resolution) {
            return false;
        }
        if self.entries.push(resolution).is_err() {
            log::warn!("Resolution set full, dropping {}", resolution);
            return false;
        }
        log::trace!("Added resolution {}", resolution);
        true
    }

    /// Check whether a resolution is present
    pub fn contains(&self, resolution: &Resolution) -> bool {
        self.entries.contains(resolution)
    }

    /// Number of resolutions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> core::slice::Iter<'_, Resolution> {
        self.entries.iter()
    }

    /// Resolutions in insertion order
    pub fn as_slice(&self) -> &[Resolution] {
        &self.entries
    }

    /// Render every resolution as "WIDTHxHEIGHT" (with "i" when interlaced)
    pub fn to_strings(&self) -> alloc::vec::Vec<alloc::string::String> {
        use alloc::string::ToString;

        self.entries.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a ResolutionSet {
    type Item = &'a Resolution;
    type IntoIter = core::slice::Iter<'a, Resolution>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Enumerate every resolution the EDID advertises
///
/// Returns `Err(OutOfRange)` if the buffer is shorter than one EDID block.
pub fn resolutions(edid: &[u8]) -> Result<ResolutionSet> {
    field::require_len(edid, EDID_BLOCK_LEN)?;

    let mut set = ResolutionSet::new();

    established_timings(edid, &mut set)?;
    log::debug!("{} resolution(s) after established timings", set.len());

    standard_timings(edid, &mut set)?;
    log::debug!("{} resolution(s) after standard timings", set.len());

    detailed_timings(edid, &mut set)?;
    log::debug!("{} resolution(s) after detailed timings", set.len());

    cta861_video_modes(edid, &mut set)?;
    log::debug!("{} resolution(s) after CTA-861 extension", set.len());

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_resolution_display() {
        assert_eq!(Resolution::new(1920, 1080).to_string(), "1920x1080");
        assert_eq!(Resolution::interlaced(1920, 1080).to_string(), "1920x1080i");
    }

    #[test]
    fn test_set_dedup_preserves_order() {
        let mut set = ResolutionSet::new();
        assert!(set.insert(Resolution::new(800, 600)));
        assert!(set.insert(Resolution::new(640, 480)));
        assert!(!set.insert(Resolution::new(800, 600)));
        assert!(set.insert(Resolution::interlaced(800, 600)));

        assert_eq!(set.len(), 3);
        assert_eq!(set.to_strings(), ["800x600", "640x480", "800x600i"]);
    }

    #[test]
    fn test_set_full() {
        let mut set = ResolutionSet::new();
        for w in 0..MAX_RESOLUTIONS as u16 {
            assert!(set.insert(Resolution::new(w, 1)));
        }
        assert!(!set.insert(Resolution::new(9999, 1)));
        assert_eq!(set.len(), MAX_RESOLUTIONS);
    }

    #[test]
    fn test_resolutions_short_buffer() {
        assert!(resolutions(&[0u8; 127]).is_err());
    }

    #[test]
    fn test_resolutions_empty_edid() {
        // Standard timing slots filled with the unused marker, no descriptors
        let mut edid = [0u8; 128];
        edid[0x26..0x36].fill(0x01);
        let set = resolutions(&edid).unwrap();
        assert!(set.is_empty());
    }
}
