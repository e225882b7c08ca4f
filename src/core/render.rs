use crate::domain::device::Device;
use crate::domain::model::{CatalogRow, DeviceEntry};
use crate::domain::ports::Renderer;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Text => Box::new(TextRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
            OutputFormat::Csv => Box::new(CsvRenderer),
        }
    }
}

/// One description per device, without the blank line `print_details`
/// leaves after a media player.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, devices: &[&DeviceEntry], out: &mut dyn Write) -> Result<()> {
        for device in devices {
            let description = device.describe();
            // media players end their description with a newline already
            let line = description.strip_suffix('\n').unwrap_or(&description);
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, devices: &[&DeviceEntry], out: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, devices)?;
        writeln!(out)?;
        Ok(())
    }
}

const CSV_HEADER: [&str; 3] = ["kind", "purpose", "description"];

#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRenderer;

impl Renderer for CsvRenderer {
    fn render(&self, devices: &[&DeviceEntry], out: &mut dyn Write) -> Result<()> {
        // header is written up front so an empty selection still has one
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(out);
        writer.write_record(CSV_HEADER)?;
        for device in devices {
            writer.serialize(CatalogRow::from(*device))?;
        }
        writer.flush()?;
        Ok(())
    }
}
