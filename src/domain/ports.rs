use crate::domain::model::DeviceEntry;
use crate::utils::error::Result;
use std::io::Write;

/// Turns a sequence of catalog entries into an output document.
pub trait Renderer {
    fn render(&self, devices: &[&DeviceEntry], out: &mut dyn Write) -> Result<()>;
}
