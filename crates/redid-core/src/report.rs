//! Owned EDID summary and the human-readable report

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::edid::{Edid, ManufactureDate, PhysicalSize};
use crate::error::Result;

/// Everything the decoder knows about one EDID, as owned values
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct EdidInfo {
    /// Three-letter PNP ID
    pub manufacturer_id: String,
    /// Product code, lowercase hex
    pub product_id: String,
    /// ID serial number
    pub serial_number: String,
    /// Digital (true) or analog input
    pub digital: bool,
    /// Raw week of manufacture
    pub manufacture_week: u8,
    /// Year of manufacture
    pub manufacture_year: i32,
    /// EDID version, "major.minor"
    pub version: String,
    /// Horizontal image size in cm
    pub width_cm: i8,
    /// Vertical image size in cm
    pub height_cm: i8,
    /// Declared extension block count
    pub extension_count: u8,
    /// Last word of the monitor name, when present
    #[cfg_attr(feature = "std", serde(skip_serializing_if = "Option::is_none"))]
    pub model_name: Option<String>,
    /// Active area of the first descriptor slot
    pub preferred_resolution: String,
    /// One "Label: body" line per descriptor slot
    pub descriptors: Vec<String>,
    /// Merged resolution list in discovery order
    pub resolutions: Vec<String>,
}

impl EdidInfo {
    /// Collect every query of `edid`
    pub fn from_edid(edid: &Edid<'_>) -> Result<Self> {
        let size = edid.physical_size_cm()?;
        let info = Self {
            manufacturer_id: edid.manufacturer_id()?.to_string(),
            product_id: edid.product_id()?.to_string(),
            serial_number: edid.serial_number()?.to_string(),
            digital: edid.is_digital()?,
            manufacture_week: edid.manufacture_week()?,
            manufacture_year: edid.manufacture_year()?,
            version: edid.version()?.to_string(),
            width_cm: size.horizontal_cm,
            height_cm: size.vertical_cm,
            extension_count: edid.extension_count()?,
            model_name: edid.model_name()?,
            preferred_resolution: edid.preferred_resolution()?.to_string(),
            descriptors: edid
                .descriptor_kinds()?
                .iter()
                .map(ToString::to_string)
                .collect(),
            resolutions: edid.resolutions()?.to_strings(),
        };
        log::debug!(
            "Decoded {} {} with {} resolutions",
            info.manufacturer_id,
            info.product_id,
            info.resolutions.len()
        );
        Ok(info)
    }

    fn date(&self) -> ManufactureDate {
        ManufactureDate {
            week: self.manufacture_week,
            year: self.manufacture_year,
        }
    }

    fn size(&self) -> PhysicalSize {
        PhysicalSize {
            horizontal_cm: self.width_cm,
            vertical_cm: self.height_cm,
        }
    }
}

impl fmt::Display for EdidInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "  Manuf. ID={}, Product ID={}, {}, Serial={}, ManufDate={}, EDID v{}",
            self.manufacturer_id,
            self.product_id,
            if self.digital { "Digital" } else { "Analog" },
            self.serial_number,
            self.date(),
            self.version
        )?;
        write!(f, "\n  {}", self.size())?;
        for line in &self.descriptors {
            write!(f, "\n  {}", line)?;
        }

        if let Some(model) = &self.model_name {
            write!(f, "\n  Model: {}", model)?;
        }
        write!(f, "\n  Preferred Resolution: {}", self.preferred_resolution)?;
        write!(f, "\n  Resolutions: {}", self.resolutions.join(", "))
    }
}

impl Edid<'_> {
    /// Owned summary of every query, see [`EdidInfo`]
    pub fn info(&self) -> Result<EdidInfo> {
        EdidInfo::from_edid(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::SAMPLE_EDID;
    use crate::Error;

    #[test]
    fn test_sample_info() {
        let info = Edid::new(&SAMPLE_EDID).info().unwrap();
        assert_eq!(info.manufacturer_id, "DEL");
        assert_eq!(info.product_id, "4113");
        assert_eq!(info.serial_number, "BSWL");
        assert_eq!(info.version, "1.4");
        assert_eq!(info.extension_count, 1);
        assert_eq!(info.model_name.as_deref(), Some("P2418HT"));
        assert_eq!(info.preferred_resolution, "1920x1080");
        assert_eq!(info.descriptors.len(), 4);
        assert_eq!(info.resolutions.len(), 14);
    }

    #[test]
    fn test_report_text() {
        let report = Edid::new(&SAMPLE_EDID).info().unwrap().to_string();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(
            lines[..6],
            [
                "  Manuf. ID=DEL, Product ID=4113, Digital, Serial=BSWL, ManufDate=6/2018, EDID v1.4",
                "  53 x 30 cm (20.9 x 11.8 in)",
                "  Preferred Timing: Clock 148 MHz, Active Pixels 1920x1080",
                "  Serial Number: TVT7F85UBSWL",
                "  Monitor Name: DELL P2418HT",
                "  Range Limits: Field Rate 50-76 Hz vertical, 30-83 kHz horizontal, Max clock: 170 MHz",
            ]
        );
        assert_eq!(lines[6], "  Model: P2418HT");
        assert_eq!(lines[7], "  Preferred Resolution: 1920x1080");
        assert!(lines[8].starts_with("  Resolutions: 720x400, 640x480, "));
        assert!(lines[8].ends_with("720x480, 720x576"));
    }

    #[test]
    fn test_analog_without_name() {
        let mut data = [0u8; 128];
        data[0x14] = 0x0F;
        let report = Edid::new(&data).info().unwrap().to_string();
        assert!(report.contains(", Analog, "));
        assert!(!report.contains("Model:"));
    }

    #[test]
    fn test_short_buffer() {
        let err = Edid::new(&SAMPLE_EDID[..100]).info().unwrap_err();
        assert!(matches!(err, Error::OutOfRange { .. }));
    }
}
