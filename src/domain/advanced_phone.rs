use crate::domain::device::{hash_f64, Device, Purpose};
use crate::domain::phone::Phone;
use crate::utils::error::Result;
use crate::utils::validation::validate_min;
use serde::Serialize;
use std::hash::{Hash, Hasher};

pub const MIN_MEMORY_GB: u32 = 1;

/// A phone with a camera and on-board storage.
///
/// Builds on [`Phone`] by embedding it: plan minutes and carrier are managed
/// through [`AdvancedPhone::phone_mut`].
#[derive(Debug, Clone, Serialize)]
pub struct AdvancedPhone {
    #[serde(flatten)]
    phone: Phone,
    high_res_camera: bool,
    memory_gb: u32,
}

impl AdvancedPhone {
    pub fn new(
        minutes_remaining: f64,
        carrier: impl Into<String>,
        high_res_camera: bool,
        memory_gb: u32,
    ) -> Result<Self> {
        let phone = Phone::new(minutes_remaining, carrier)?;
        validate_min("memory_gb", memory_gb, MIN_MEMORY_GB)?;
        tracing::debug!(high_res_camera, memory_gb, "constructed advanced phone");
        Ok(Self {
            phone,
            high_res_camera,
            memory_gb,
        })
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn phone_mut(&mut self) -> &mut Phone {
        &mut self.phone
    }

    pub fn minutes_remaining(&self) -> f64 {
        self.phone.minutes_remaining()
    }

    pub fn carrier(&self) -> &str {
        self.phone.carrier()
    }

    pub fn has_high_res_camera(&self) -> bool {
        self.high_res_camera
    }

    pub fn set_high_res_camera(&mut self, high_res_camera: bool) {
        self.high_res_camera = high_res_camera;
    }

    pub fn memory_gb(&self) -> u32 {
        self.memory_gb
    }

    pub fn set_memory_gb(&mut self, memory_gb: u32) -> Result<()> {
        validate_min("memory_gb", memory_gb, MIN_MEMORY_GB)?;
        self.memory_gb = memory_gb;
        Ok(())
    }
}

impl Device for AdvancedPhone {
    fn purpose(&self) -> Purpose {
        self.phone.purpose()
    }

    fn describe(&self) -> String {
        let camera = if self.high_res_camera {
            " It also has a high-res camera,"
        } else {
            " It does not have a high-res camera,"
        };
        format!(
            "{}{} and has {}GB of memory.",
            self.phone.describe(),
            camera,
            self.memory_gb
        )
    }
}

impl PartialEq for AdvancedPhone {
    fn eq(&self, other: &Self) -> bool {
        self.phone.minutes_remaining() == other.phone.minutes_remaining()
            && self.high_res_camera == other.high_res_camera
    }
}

impl Eq for AdvancedPhone {}

impl Hash for AdvancedPhone {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f64(self.phone.minutes_remaining(), state);
        self.high_res_camera.hash(state);
    }
}
