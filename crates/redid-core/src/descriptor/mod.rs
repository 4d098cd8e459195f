//! Display descriptor parsing
//!
//! The EDID base block carries four 18-byte descriptors at fixed offsets.
//! Each is either a detailed timing descriptor (nonzero pixel clock in bytes
//! 0-1) or a display descriptor whose tag sits in byte 3:
//!
//! - 0xFF, 0xFE, 0xFC - serial number, free text, monitor name
//! - 0xFD - display range limits
//! - 0xFB, 0xFA - white point and standard timing data (kept raw)
//! - 0x00-0x0F - manufacturer specific (kept raw)
//!
//! # Usage
//!
//! ```ignore
//! use redid_core::descriptor;
//!
//! for desc in descriptor::descriptors(&edid)? {
//!     println!("{}", desc.kind());
//! }
//! ```

mod parser;
mod types;

pub use parser::*;
pub use types::*;
