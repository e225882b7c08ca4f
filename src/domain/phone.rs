use crate::domain::device::{describe_purpose, hash_f64, Device, Purpose};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_non_empty, validate_non_negative};
use serde::Serialize;
use std::hash::{Hash, Hasher};

/// A talking device with a prepaid plan balance.
///
/// `minutes_remaining` is always finite and non-negative, and `carrier` is
/// never empty. Every mutator checks this before touching the receiver.
#[derive(Debug, Clone, Serialize)]
pub struct Phone {
    minutes_remaining: f64,
    carrier: String,
}

impl Phone {
    pub const PURPOSE: Purpose = Purpose::Talking;

    pub fn new(minutes_remaining: f64, carrier: impl Into<String>) -> Result<Self> {
        let carrier = carrier.into();
        validate_non_negative("minutes_remaining", minutes_remaining)?;
        validate_non_empty("carrier", &carrier)?;
        tracing::debug!(minutes_remaining, %carrier, "constructed phone");
        Ok(Self {
            minutes_remaining,
            carrier,
        })
    }

    pub fn minutes_remaining(&self) -> f64 {
        self.minutes_remaining
    }

    pub fn add_minutes(&mut self, minutes: f64) -> Result<()> {
        validate_non_negative("minutes_to_add", minutes)?;
        let total = self.minutes_remaining + minutes;
        if !total.is_finite() {
            return Err(CatalogError::invalid_argument(
                "minutes_to_add",
                "Resulting balance is too large",
            ));
        }
        self.minutes_remaining = total;
        Ok(())
    }

    pub fn remove_minutes(&mut self, minutes: f64) -> Result<()> {
        validate_non_negative("minutes_to_remove", minutes)?;
        if minutes > self.minutes_remaining {
            tracing::warn!(
                requested = minutes,
                available = self.minutes_remaining,
                "rejected minute withdrawal"
            );
            return Err(CatalogError::invalid_argument(
                "minutes_to_remove",
                format!(
                    "Cannot remove {} minutes, only {} available",
                    minutes, self.minutes_remaining
                ),
            ));
        }
        self.minutes_remaining -= minutes;
        Ok(())
    }

    pub fn carrier(&self) -> &str {
        &self.carrier
    }

    pub fn change_carrier(&mut self, carrier: impl Into<String>) -> Result<()> {
        let carrier = carrier.into();
        validate_non_empty("carrier", &carrier)?;
        self.carrier = carrier;
        Ok(())
    }
}

/// Renders a minute balance the way a plan statement shows it: `10.0`, `12.5`.
pub(crate) fn format_minutes(minutes: f64) -> String {
    if minutes.fract() == 0.0 && minutes.abs() < 1e15 {
        format!("{:.1}", minutes)
    } else {
        minutes.to_string()
    }
}

impl Device for Phone {
    fn purpose(&self) -> Purpose {
        Self::PURPOSE
    }

    fn describe(&self) -> String {
        format!(
            "{}, it has {} phone plan minutes remaining with the carrier {}.",
            describe_purpose(self.purpose()),
            format_minutes(self.minutes_remaining),
            self.carrier
        )
    }
}

// Carrier is not part of a phone's identity.
impl PartialEq for Phone {
    fn eq(&self, other: &Self) -> bool {
        self.minutes_remaining == other.minutes_remaining
    }
}

// NaN never passes construction or mutation.
impl Eq for Phone {}

impl Hash for Phone {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f64(self.minutes_remaining, state);
    }
}
