use crate::domain::advanced_phone::AdvancedPhone;
use crate::domain::device::{Device, Purpose};
use crate::domain::media_player::MediaPlayer;
use crate::domain::phone::Phone;
use crate::domain::tablet::Tablet;
use serde::Serialize;
use std::io::{self, Write};

/// Any device the catalog can hold.
///
/// Equality between entries only holds for the same variant, using that
/// variant's own rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeviceEntry {
    Tablet(Tablet),
    Phone(Phone),
    AdvancedPhone(AdvancedPhone),
    MediaPlayer(MediaPlayer),
}

impl DeviceEntry {
    pub fn kind(&self) -> &'static str {
        match self {
            DeviceEntry::Tablet(_) => "tablet",
            DeviceEntry::Phone(_) => "phone",
            DeviceEntry::AdvancedPhone(_) => "advanced_phone",
            DeviceEntry::MediaPlayer(_) => "media_player",
        }
    }

    fn as_device(&self) -> &dyn Device {
        match self {
            DeviceEntry::Tablet(d) => d,
            DeviceEntry::Phone(d) => d,
            DeviceEntry::AdvancedPhone(d) => d,
            DeviceEntry::MediaPlayer(d) => d,
        }
    }
}

impl Device for DeviceEntry {
    fn purpose(&self) -> Purpose {
        self.as_device().purpose()
    }

    fn describe(&self) -> String {
        self.as_device().describe()
    }

    fn write_details(&self, out: &mut dyn Write) -> io::Result<()> {
        self.as_device().write_details(out)
    }
}

impl From<Tablet> for DeviceEntry {
    fn from(d: Tablet) -> Self {
        DeviceEntry::Tablet(d)
    }
}

impl From<Phone> for DeviceEntry {
    fn from(d: Phone) -> Self {
        DeviceEntry::Phone(d)
    }
}

impl From<AdvancedPhone> for DeviceEntry {
    fn from(d: AdvancedPhone) -> Self {
        DeviceEntry::AdvancedPhone(d)
    }
}

impl From<MediaPlayer> for DeviceEntry {
    fn from(d: MediaPlayer) -> Self {
        DeviceEntry::MediaPlayer(d)
    }
}

/// One flattened line of a rendered catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogRow {
    pub kind: &'static str,
    pub purpose: Purpose,
    pub description: String,
}

impl From<&DeviceEntry> for CatalogRow {
    fn from(entry: &DeviceEntry) -> Self {
        Self {
            kind: entry.kind(),
            purpose: entry.purpose(),
            description: entry.describe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_delegates_to_variant() {
        let entry: DeviceEntry = MediaPlayer::new(3, 10.0).unwrap().into();
        assert_eq!(entry.kind(), "media_player");
        assert_eq!(entry.purpose(), Purpose::Music);
        assert!(entry.describe().starts_with("Number of stored songs: 3"));
    }

    #[test]
    fn test_phone_and_advanced_phone_are_never_equal() {
        let phone: DeviceEntry = Phone::new(10.0, "Verizon").unwrap().into();
        let advanced: DeviceEntry = AdvancedPhone::new(10.0, "Verizon", true, 64).unwrap().into();
        assert_ne!(phone, advanced);
        assert_eq!(phone.purpose(), advanced.purpose());
    }

    #[test]
    fn test_json_is_tagged_by_kind() {
        let entry: DeviceEntry = AdvancedPhone::new(10.0, "Verizon", true, 128).unwrap().into();
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["kind"], "advanced_phone");
        assert_eq!(json["carrier"], "Verizon");
        assert_eq!(json["minutes_remaining"], 10.0);
        assert_eq!(json["high_res_camera"], true);
        assert_eq!(json["memory_gb"], 128);
    }

    #[test]
    fn test_row_from_entry() {
        let entry: DeviceEntry = Tablet::new(true, "17.4").unwrap().into();
        let row = CatalogRow::from(&entry);
        assert_eq!(row.kind, "tablet");
        assert_eq!(row.purpose, Purpose::Learning);
        assert!(row.description.ends_with("version 17.4"));
    }
}
