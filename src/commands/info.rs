//! Info command implementation

use crate::cli::OutputFormat;
use redid_core::Edid;
use std::error::Error;

/// Print the decoded summary in the requested format
pub fn run_info(data: &[u8], format: OutputFormat) -> Result<(), Box<dyn Error>> {
    let edid = Edid::new(data);
    if !edid.has_valid_header() {
        log::warn!("Missing EDID header pattern, decoding anyway");
    }

    let info = edid.info()?;
    match format {
        OutputFormat::Text => println!("{}", info),
        OutputFormat::Toml => print!("{}", toml::to_string(&info)?),
    }

    Ok(())
}
