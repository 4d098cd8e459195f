//! redid-core - EDID decoding library
//!
//! This crate decodes the Extended Display Identification Data a monitor
//! reports about itself: identity fields, the four display descriptors and
//! the set of resolutions it advertises across the established, standard,
//! detailed and CTA-861 timing sources.
//!
//! It is `no_std` (with `alloc`); the `std` feature adds
//! `std::error::Error` and `serde::Serialize` implementations.
//!
//! # Example
//!
//! ```ignore
//! use redid_core::Edid;
//!
//! let edid = Edid::new(&bytes);
//! println!("{} {}", edid.manufacturer_id()?, edid.product_id()?);
//! for resolution in &edid.resolutions()? {
//!     println!("{}", resolution);
//! }
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod descriptor;
pub mod edid;
pub mod error;
pub mod field;
pub mod report;
pub mod resolution;
pub mod sample;

pub use descriptor::{Descriptor, DescriptorKind, DetailedTiming, RangeLimits};
pub use edid::{
    Edid, ManufactureDate, ManufacturerId, PhysicalSize, ProductId, SerialNumber, Version,
};
pub use error::{Error, Result};
pub use report::EdidInfo;
pub use resolution::{Resolution, ResolutionSet, MAX_RESOLUTIONS};

/// Size of the base block and of every extension block
pub const EDID_BLOCK_LEN: usize = 128;

/// Fixed header pattern at the start of the base block
pub const EDID_HEADER: [u8; 8] = [0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00];

/// Offset of the extension block count in the base block
pub const EXTENSION_COUNT_OFFSET: usize = 0x7E;
