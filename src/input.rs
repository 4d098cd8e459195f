//! Loading EDID bytes from files or stdin
//!
//! Accepts raw binary dumps (`/sys/class/drm/*/edid`) as well as hex text as
//! printed by `xrandr --verbose`, `edid-decode` or kernel logs.

use redid_core::EDID_BLOCK_LEN;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors while loading an EDID
#[derive(Debug, Error)]
pub enum InputError {
    /// Failed to read the input
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Hex text with a malformed token
    #[error("Invalid hex at byte {position}: {token:?}")]
    InvalidHex { position: usize, token: String },

    /// Fewer bytes than a base block
    #[error("EDID too short: {len} bytes, need at least {}", EDID_BLOCK_LEN)]
    TooShort { len: usize },
}

/// Result type for input loading
pub type Result<T> = std::result::Result<T, InputError>;

/// Read `path` (or stdin for "-") and decode it into EDID bytes
pub fn load(path: &Path) -> Result<Vec<u8>> {
    let contents = read_all(path)?;
    log::debug!("Read {} bytes from {}", contents.len(), path.display());
    decode(&contents)
}

fn read_all(path: &Path) -> Result<Vec<u8>> {
    let io_err = |source| InputError::Io {
        path: path.display().to_string(),
        source,
    };

    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf).map_err(io_err)?;
        Ok(buf)
    } else {
        std::fs::read(path).map_err(io_err)
    }
}

/// Turn file contents into EDID bytes, detecting hex text
pub fn decode(contents: &[u8]) -> Result<Vec<u8>> {
    let bytes = if is_hex_text(contents) {
        log::debug!("Input looks like hex text");
        parse_hex(contents)?
    } else {
        contents.to_vec()
    };

    if bytes.len() < EDID_BLOCK_LEN {
        return Err(InputError::TooShort { len: bytes.len() });
    }
    if bytes.len() % EDID_BLOCK_LEN != 0 {
        log::warn!(
            "EDID length {} is not a multiple of {} bytes",
            bytes.len(),
            EDID_BLOCK_LEN
        );
    }

    Ok(bytes)
}

fn is_separator(b: u8) -> bool {
    b.is_ascii_whitespace() || b == b',' || b == b':'
}

/// Whether every byte belongs to the hex text alphabet
pub fn is_hex_text(contents: &[u8]) -> bool {
    contents.iter().any(u8::is_ascii_hexdigit)
        && contents
            .iter()
            .all(|&b| b.is_ascii_hexdigit() || is_separator(b) || b == b'x' || b == b'X')
}

/// Parse separator-delimited hex tokens, each an even number of digits with
/// an optional 0x prefix
pub fn parse_hex(text: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(text.len() / 2);
    let mut pos = 0;

    while pos < text.len() {
        if is_separator(text[pos]) {
            pos += 1;
            continue;
        }

        let start = pos;
        while pos < text.len() && !is_separator(text[pos]) {
            pos += 1;
        }
        let token = &text[start..pos];
        let invalid = || InputError::InvalidHex {
            position: start,
            token: String::from_utf8_lossy(token).into_owned(),
        };

        let digits = token
            .strip_prefix(b"0x")
            .or_else(|| token.strip_prefix(b"0X"))
            .unwrap_or(token);
        if digits.is_empty() || digits.len() % 2 != 0 {
            return Err(invalid());
        }

        for pair in digits.chunks_exact(2) {
            let hi = hex_value(pair[0]).ok_or_else(invalid)?;
            let lo = hex_value(pair[1]).ok_or_else(invalid)?;
            out.push((hi << 4) | lo);
        }
    }

    Ok(out)
}

fn hex_value(c: u8) -> Option<u8> {
    (c as char).to_digit(16).map(|v| v as u8)
}
