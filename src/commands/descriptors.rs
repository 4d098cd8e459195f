//! Descriptors command implementation

use redid_core::descriptor::hex_dump;
use redid_core::Edid;
use std::error::Error;

/// Print the four descriptor slots
pub fn run_descriptors(data: &[u8], raw: bool) -> Result<(), Box<dyn Error>> {
    let edid = Edid::new(data);

    for descriptor in edid.descriptors()? {
        println!(
            "0x{:02X} [type 0x{:02X}] {}",
            descriptor.offset,
            descriptor.descriptor_type(),
            descriptor.kind()
        );
        if raw {
            println!("     {}", hex_dump(&descriptor.raw[..]));
        }
    }

    if let Some(model) = edid.model_name()? {
        println!();
        println!("Model: {}", model);
    }

    Ok(())
}
