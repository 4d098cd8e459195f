//! CLI command implementations
//!
//! Each command takes already-loaded EDID bytes and prints to stdout.

mod descriptors;
mod info;
mod resolutions;

pub use descriptors::run_descriptors;
pub use info::run_info;
pub use resolutions::run_resolutions;
