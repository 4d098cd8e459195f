//! Resolutions command implementation

use redid_core::Edid;
use std::error::Error;

/// Print one resolution per line, in discovery order
pub fn run_resolutions(data: &[u8]) -> Result<(), Box<dyn Error>> {
    let edid = Edid::new(data);
    let resolutions = edid.resolutions()?;

    if resolutions.is_empty() {
        println!("No resolutions advertised.");
        return Ok(());
    }

    for resolution in &resolutions {
        println!("{}", resolution);
    }
    log::info!(
        "{} resolutions, preferred {}",
        resolutions.len(),
        edid.preferred_resolution()?
    );

    Ok(())
}
