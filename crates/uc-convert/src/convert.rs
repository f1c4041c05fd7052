//! Per-domain conversion functions.
//!
//! All six table domains share [`UnitTable::convert`](crate::UnitTable::convert);
//! temperature lives in [`crate::temperature`].

use core::fmt;

use tracing::debug;
use uc_core::Real;

use crate::{AREA, ConvertResult, Domain, LENGTH, MASS, SPEED, TIME, VOLUME};

/// Convert a length. Canonical unit: meter.
pub fn convert_length(value: Real, from_unit: &str, to_unit: &str) -> ConvertResult<Real> {
    LENGTH.convert(value, from_unit, to_unit)
}

/// Convert an area. Canonical unit: square meter.
pub fn convert_area(value: Real, from_unit: &str, to_unit: &str) -> ConvertResult<Real> {
    AREA.convert(value, from_unit, to_unit)
}

/// Convert a volume. Canonical unit: cubic meter (the liter has the same factor).
pub fn convert_volume(value: Real, from_unit: &str, to_unit: &str) -> ConvertResult<Real> {
    VOLUME.convert(value, from_unit, to_unit)
}

/// Convert a mass. Canonical unit: gram.
pub fn convert_mass(value: Real, from_unit: &str, to_unit: &str) -> ConvertResult<Real> {
    MASS.convert(value, from_unit, to_unit)
}

/// Convert a duration. Canonical unit: second.
pub fn convert_time(value: Real, from_unit: &str, to_unit: &str) -> ConvertResult<Real> {
    TIME.convert(value, from_unit, to_unit)
}

/// Convert a speed. Canonical unit: meter per second.
pub fn convert_speed(value: Real, from_unit: &str, to_unit: &str) -> ConvertResult<Real> {
    SPEED.convert(value, from_unit, to_unit)
}

/// Convert within a domain chosen at runtime.
pub fn convert(domain: Domain, value: Real, from_unit: &str, to_unit: &str) -> ConvertResult<Real> {
    (domain.converter())(value, from_unit, to_unit)
}

/// A completed conversion, kept for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub domain: Domain,
    pub value: Real,
    pub from: String,
    pub to: String,
    pub result: Real,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = {} {}", self.value, self.from, self.result, self.to)
    }
}

/// Like [`convert`], but returns the whole request alongside the result.
pub fn convert_request(
    domain: Domain,
    value: Real,
    from_unit: &str,
    to_unit: &str,
) -> ConvertResult<Conversion> {
    match convert(domain, value, from_unit, to_unit) {
        Ok(result) => {
            debug!(%domain, value, from_unit, to_unit, result, "converted");
            Ok(Conversion {
                domain,
                value,
                from: from_unit.to_string(),
                to: to_unit.to_string(),
                result,
            })
        }
        Err(err) => {
            debug!(%domain, value, from_unit, to_unit, error = %err, "conversion rejected");
            Err(err)
        }
    }
}
