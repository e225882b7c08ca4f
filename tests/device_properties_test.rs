use device_catalog::{AdvancedPhone, Device, DeviceEntry, MediaPlayer, Phone, Purpose, Tablet};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_purpose_is_fixed_per_kind() {
    for (has_case, version) in [(true, "1"), (false, "17.4"), (true, "beta 3")] {
        assert_eq!(Tablet::new(has_case, version).unwrap().purpose(), Purpose::Learning);
    }
    for (minutes, carrier) in [(0.0, "A"), (99.5, "Verizon")] {
        assert_eq!(Phone::new(minutes, carrier).unwrap().purpose(), Purpose::Talking);
        assert_eq!(
            AdvancedPhone::new(minutes, carrier, true, 1).unwrap().purpose(),
            Purpose::Talking
        );
    }
    for (songs, volume) in [(0, 0.0), (1000, 85.0)] {
        assert_eq!(MediaPlayer::new(songs, volume).unwrap().purpose(), Purpose::Music);
    }
}

#[test]
fn test_disallowed_values_are_rejected() {
    let errors = [
        "".parse::<Purpose>().unwrap_err(),
        Tablet::new(true, " ").unwrap_err(),
        Phone::new(-0.5, "Telus").unwrap_err(),
        Phone::new(5.0, "").unwrap_err(),
        AdvancedPhone::new(5.0, "Telus", false, 0).unwrap_err(),
        MediaPlayer::new(1, -1.0).unwrap_err(),
        MediaPlayer::new(1, 90.0).unwrap_err(),
    ];
    for err in errors {
        assert!(err.is_invalid_argument(), "expected invalid argument, got {:?}", err);
    }
}

#[test]
fn test_failed_mutations_leave_device_unchanged() {
    let mut phone = Phone::new(5.0, "Telus").unwrap();
    assert!(phone.remove_minutes(6.0).is_err());
    assert!(phone.change_carrier("").is_err());
    assert_eq!(phone.minutes_remaining(), 5.0);
    assert_eq!(phone.carrier(), "Telus");

    let mut advanced = AdvancedPhone::new(5.0, "Telus", true, 64).unwrap();
    assert!(advanced.set_memory_gb(0).is_err());
    assert_eq!(advanced.memory_gb(), 64);
}

#[test]
fn test_equal_devices_hash_equally() {
    let tablets = (Tablet::new(true, "17.4").unwrap(), Tablet::new(false, "17.4").unwrap());
    assert_eq!(tablets.0, tablets.1);
    assert_eq!(hash_of(&tablets.0), hash_of(&tablets.1));

    let phones = (Phone::new(30.0, "Telus").unwrap(), Phone::new(30.0, "Rogers").unwrap());
    assert_eq!(phones.0, phones.1);
    assert_eq!(hash_of(&phones.0), hash_of(&phones.1));

    let advanced = (
        AdvancedPhone::new(30.0, "Telus", true, 64).unwrap(),
        AdvancedPhone::new(30.0, "Rogers", true, 512).unwrap(),
    );
    assert_eq!(advanced.0, advanced.1);
    assert_eq!(hash_of(&advanced.0), hash_of(&advanced.1));

    let players = (MediaPlayer::new(7, 10.0).unwrap(), MediaPlayer::new(7, 80.0).unwrap());
    assert_eq!(players.0, players.1);
    assert_eq!(hash_of(&players.0), hash_of(&players.1));

    let entries: (DeviceEntry, DeviceEntry) = (players.0.into(), players.1.into());
    assert_eq!(hash_of(&entries.0), hash_of(&entries.1));
}

#[test]
fn test_write_details_matches_describe() {
    let devices: Vec<DeviceEntry> = vec![
        Tablet::new(false, "16.1").unwrap().into(),
        AdvancedPhone::new(10.0, "Verizon", true, 128).unwrap().into(),
    ];
    for device in &devices {
        let mut out = Vec::new();
        device.write_details(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", device.describe()));
    }
}
