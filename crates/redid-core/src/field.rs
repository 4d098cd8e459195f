//! Bounds-checked field readers
//!
//! Every EDID field lives at a fixed offset with a fixed width. These helpers
//! are the only place the crate indexes into a raw buffer; all of them return
//! [`Error::OutOfRange`] instead of panicking when the span is missing.

use crate::error::{Error, Result};

/// Fail unless `buf` holds at least `len` bytes
pub fn require_len(buf: &[u8], len: usize) -> Result<()> {
    if buf.len() < len {
        return Err(Error::out_of_range(0, len, buf.len()));
    }
    Ok(())
}

/// Borrow `len` bytes starting at `start`
pub fn slice(buf: &[u8], start: usize, len: usize) -> Result<&[u8]> {
    let end = start
        .checked_add(len)
        .ok_or(Error::out_of_range(start, len, buf.len()))?;
    buf.get(start..end)
        .ok_or(Error::out_of_range(start, len, buf.len()))
}

/// Borrow a fixed-size array starting at `start`
pub fn array<const N: usize>(buf: &[u8], start: usize) -> Result<&[u8; N]> {
    let bytes = slice(buf, start, N)?;
    // Length was checked by `slice`
    bytes
        .try_into()
        .map_err(|_| Error::out_of_range(start, N, buf.len()))
}

/// Read a single byte
pub fn byte_at(buf: &[u8], offset: usize) -> Result<u8> {
    buf.get(offset)
        .copied()
        .ok_or(Error::out_of_range(offset, 1, buf.len()))
}

/// Read a little-endian u16
pub fn u16_le(buf: &[u8], offset: usize) -> Result<u16> {
    array::<2>(buf, offset).map(|b| u16::from_le_bytes(*b))
}

/// Read a big-endian u16
pub fn u16_be(buf: &[u8], offset: usize) -> Result<u16> {
    array::<2>(buf, offset).map(|b| u16::from_be_bytes(*b))
}

/// Read a big-endian u32
pub fn u32_be(buf: &[u8], offset: usize) -> Result<u32> {
    array::<4>(buf, offset).map(|b| u32::from_be_bytes(*b))
}

/// Read a byte as a two's complement value
pub fn i8_at(buf: &[u8], offset: usize) -> Result<i8> {
    byte_at(buf, offset).map(|b| b as i8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u16_endianness() {
        let data = [0x41, 0x4C, 0x00];
        assert_eq!(u16_le(&data, 0), Ok(0x4C41));
        assert_eq!(u16_be(&data, 0), Ok(0x414C));
        assert_eq!(u16_le(&data, 1), Ok(0x004C));
    }

    #[test]
    fn test_u16_past_end() {
        let data = [0x01, 0x02];
        assert_eq!(
            u16_le(&data, 1),
            Err(Error::OutOfRange {
                offset: 1,
                len: 2,
                available: 2
            })
        );
        assert!(u16_be(&data, 2).is_err());
        assert!(u16_le(&[], 0).is_err());
    }

    #[test]
    fn test_u32_be() {
        let data = [0x00, 0x00, 0x00, 0xFC];
        assert_eq!(u32_be(&data, 0), Ok(0xFC));
        assert!(u32_be(&data, 1).is_err());
    }

    #[test]
    fn test_byte_at() {
        let data = [0xAA, 0xBB];
        assert_eq!(byte_at(&data, 1), Ok(0xBB));
        assert!(byte_at(&data, 2).is_err());
        assert_eq!(i8_at(&[0xFF], 0), Ok(-1));
    }

    #[test]
    fn test_slice_bounds() {
        let data = [0u8; 18];
        assert_eq!(slice(&data, 0, 18).map(<[u8]>::len), Ok(18));
        assert_eq!(slice(&data, 18, 0).map(<[u8]>::len), Ok(0));
        assert!(slice(&data, 1, 18).is_err());
        assert!(slice(&data, usize::MAX, 2).is_err());
    }

    #[test]
    fn test_require_len() {
        assert!(require_len(&[0u8; 128], 128).is_ok());
        assert_eq!(
            require_len(&[0u8; 127], 128),
            Err(Error::OutOfRange {
                offset: 0,
                len: 128,
                available: 127
            })
        );
    }
}
