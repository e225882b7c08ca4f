use crate::utils::error::{CatalogError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(CatalogError::invalid_argument(
            field_name,
            "Value cannot be empty",
        ));
    }
    Ok(())
}

pub fn validate_non_blank(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::invalid_argument(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// Rejects negative values as well as NaN and infinities.
pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CatalogError::invalid_argument(
            field_name,
            format!("Value must be a finite number, got {}", value),
        ));
    }
    if value < 0.0 {
        return Err(CatalogError::invalid_argument(
            field_name,
            format!("Value cannot be negative, got {}", value),
        ));
    }
    Ok(())
}

pub fn validate_min<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min_value: T,
) -> Result<()> {
    if value < min_value {
        return Err(CatalogError::invalid_argument(
            field_name,
            format!("Value must be at least {}, got {}", min_value, value),
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // written so that NaN falls outside every range
    if !(value >= min && value <= max) {
        return Err(CatalogError::invalid_argument(
            field_name,
            format!("Value must be between {} and {}, got {}", min, max, value),
        ));
    }
    Ok(())
}
