use crate::domain::device::{Device, Purpose};
use crate::domain::model::DeviceEntry;
use crate::domain::ports::Renderer;
use crate::utils::error::Result;
use std::io::{self, Write};

/// A named, ordered collection of validated devices.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    name: String,
    description: Option<String>,
    devices: Vec<DeviceEntry>,
}

impl Catalog {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            devices: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    pub fn push(&mut self, device: impl Into<DeviceEntry>) {
        let device = device.into();
        tracing::debug!(kind = device.kind(), "added device to catalog");
        self.devices.push(device);
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeviceEntry> {
        self.devices.iter()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut DeviceEntry> {
        self.devices.get_mut(index)
    }

    pub fn by_purpose(&self, purpose: Purpose) -> Vec<&DeviceEntry> {
        self.devices
            .iter()
            .filter(|d| d.purpose() == purpose)
            .collect()
    }

    /// Index pairs `(earlier, later)` of entries that compare equal.
    pub fn find_duplicates(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (i, a) in self.devices.iter().enumerate() {
            for (j, b) in self.devices.iter().enumerate().skip(i + 1) {
                if a == b {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    /// Writes each device's details in order, exactly as `print_details` would.
    pub fn write_details(&self, out: &mut dyn Write) -> io::Result<()> {
        for device in &self.devices {
            device.write_details(out)?;
        }
        Ok(())
    }

    pub fn print_details(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_details(&mut handle)
    }

    /// Renders every entry, or only those with `purpose` when given.
    pub fn render(
        &self,
        renderer: &dyn Renderer,
        purpose: Option<Purpose>,
        out: &mut dyn Write,
    ) -> Result<()> {
        let selected: Vec<&DeviceEntry> = match purpose {
            Some(p) => self.by_purpose(p),
            None => self.devices.iter().collect(),
        };
        tracing::info!(
            catalog = %self.name,
            description = self.description.as_deref().unwrap_or(""),
            selected = selected.len(),
            total = self.devices.len(),
            "rendering catalog"
        );
        renderer.render(&selected, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::TextRenderer;
    use crate::domain::advanced_phone::AdvancedPhone;
    use crate::domain::media_player::MediaPlayer;
    use crate::domain::phone::Phone;
    use crate::domain::tablet::Tablet;

    fn sample() -> Catalog {
        let mut catalog = Catalog::new("sample");
        catalog.push(Tablet::new(true, "17.4").unwrap());
        catalog.push(Phone::new(30.0, "Telus").unwrap());
        catalog.push(Phone::new(30.0, "Rogers").unwrap());
        catalog.push(AdvancedPhone::new(30.0, "Telus", true, 256).unwrap());
        catalog.push(MediaPlayer::new(5, 50.0).unwrap());
        catalog
    }

    #[test]
    fn test_by_purpose() {
        let catalog = sample();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.by_purpose(Purpose::Talking).len(), 3);
        assert_eq!(catalog.by_purpose(Purpose::Learning).len(), 1);
        assert_eq!(catalog.by_purpose(Purpose::Music).len(), 1);
    }

    #[test]
    fn test_find_duplicates_uses_device_equality() {
        let catalog = sample();
        assert_eq!(catalog.find_duplicates(), vec![(1, 2)]);
    }

    #[test]
    fn test_mutating_through_get_mut() {
        let mut catalog = sample();
        if let Some(DeviceEntry::Phone(phone)) = catalog.get_mut(2) {
            phone.add_minutes(1.0).unwrap();
        }
        assert!(catalog.find_duplicates().is_empty());
    }

    #[test]
    fn test_render_with_filter() {
        let catalog = sample();
        let mut out = Vec::new();
        catalog
            .render(&TextRenderer, Some(Purpose::Learning), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "The purpose of this device is: learning it has a case and is on version 17.4\n"
        );
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new("empty");
        assert!(catalog.is_empty());
        assert!(catalog.find_duplicates().is_empty());
        assert_eq!(catalog.iter().count(), 0);
    }

    #[test]
    fn test_write_details_emits_every_device() {
        let mut catalog = Catalog::new("details");
        catalog.push(Tablet::new(false, "16.1").unwrap());
        catalog.push(MediaPlayer::new(5, 50.0).unwrap());
        catalog.push(Phone::new(2.5, "Fido").unwrap());

        let mut out = Vec::new();
        catalog.write_details(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "The purpose of this device is: learning it has no case and is on version 16.1\n\
             Number of stored songs: 5\nMax volume decibel: 50.000000\n\n\
             The purpose of this device is: talking, it has 2.5 phone plan minutes remaining with the carrier Fido.\n"
        );
    }

    #[test]
    fn test_print_details_to_stdout() {
        let catalog = sample();
        assert!(catalog.print_details().is_ok());
        assert!(Catalog::new("empty").print_details().is_ok());
    }
}
