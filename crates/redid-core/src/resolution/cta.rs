//! CTA-861 extension video data block
//!
//! Only the first extension block is inspected, even when byte 0x7E declares
//! more.

use super::{Resolution, ResolutionSet};
use crate::error::{Error, Result};
use crate::field;
use crate::{EDID_BLOCK_LEN, EXTENSION_COUNT_OFFSET};

/// Extension tag of a CTA-861 block
pub const CTA_EXTENSION_TAG: u8 = 0x02;

/// Data block tag of a Video Data Block
pub const VIDEO_DATA_BLOCK: u8 = 0x02;

/// Offset of the first data block inside a CTA-861 block
const DATA_BLOCKS_START: usize = 4;

/// Map a Video Identification Code to its active area
///
/// Covers the common SD/HD formats; every other code yields `None`.
pub fn vic_resolution(vic: u8) -> Option<Resolution> {
    match vic {
        1 => Some(Resolution::new(640, 480)),
        2 | 3 => Some(Resolution::new(720, 480)),
        4 | 19 => Some(Resolution::new(1280, 720)),
        5 | 20 => Some(Resolution::interlaced(1920, 1080)),
        16 | 31 => Some(Resolution::new(1920, 1080)),
        17 | 18 => Some(Resolution::new(720, 576)),
        _ => None,
    }
}

/// Add the resolutions listed in the first CTA-861 extension's video data
/// blocks
///
/// Returns `Err` only when the base block itself is truncated. A missing,
/// foreign or malformed extension contributes nothing further.
pub fn cta861_video_modes(edid: &[u8], set: &mut ResolutionSet) -> Result<()> {
    let extensions = field::byte_at(edid, EXTENSION_COUNT_OFFSET)?;
    if extensions == 0 || edid.len() < 2 * EDID_BLOCK_LEN {
        log::debug!(
            "No extension to inspect ({} declared, {} bytes)",
            extensions,
            edid.len()
        );
        return Ok(());
    }
    if extensions > 1 {
        log::debug!(
            "{} extension blocks declared, inspecting the first only",
            extensions
        );
    }

    let base = EDID_BLOCK_LEN;
    let tag = field::byte_at(edid, base)?;
    if tag != CTA_EXTENSION_TAG {
        log::debug!("Extension tag 0x{:02X} is not CTA-861", tag);
        return Ok(());
    }

    let dtd_start = field::byte_at(edid, base + 2)? as usize;
    if let Err(e) = walk_data_blocks(edid, base, dtd_start, set) {
        log::warn!("Stopped CTA-861 data block walk: {}", e);
    }

    Ok(())
}

/// Walk the data block collection between byte 4 and `dtd_start`
fn walk_data_blocks(
    edid: &[u8],
    base: usize,
    dtd_start: usize,
    set: &mut ResolutionSet,
) -> Result<()> {
    let end = base + dtd_start;
    let mut pos = base + DATA_BLOCKS_START;

    while pos < end {
        // Header: [7:5] tag, [4:0] payload length
        let header = field::byte_at(edid, pos)?;
        let tag = header >> 5;
        let len = (header & 0x1F) as usize;

        if pos + 1 + len > end {
            return Err(Error::MalformedDescriptor { offset: pos });
        }
        let payload =
            field::slice(edid, pos + 1, len).map_err(|_| Error::MalformedDescriptor { offset: pos })?;

        log::trace!("CTA-861 data block tag {} len {} at 0x{:02X}", tag, len, pos);

        if tag == VIDEO_DATA_BLOCK {
            for &svd in payload {
                // Bit 7 is the native flag
                let vic = svd & 0x7F;
                match vic_resolution(vic) {
                    Some(resolution) => {
                        set.insert(resolution);
                    }
                    None => log::trace!("Ignoring VIC {}", vic),
                }
            }
        }

        pos += 1 + len;
    }

    Ok(())
}
