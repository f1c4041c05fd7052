//! Temperature conversions.
//!
//! Temperature scales are offset from one another, so they cannot share the
//! factor-table path. Each supported ordered pair of scales has its own affine
//! formula; every other pair (same-scale included) is rejected.

use core::fmt;

use uc_core::Real;

use crate::{ConvertError, ConvertResult};

const KELVIN_OFFSET: Real = 273.15;
const FAHRENHEIT_OFFSET: Real = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TempScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TempScale {
    pub const ALL: [TempScale; 3] = [TempScale::Celsius, TempScale::Fahrenheit, TempScale::Kelvin];

    pub fn code(self) -> &'static str {
        match self {
            TempScale::Celsius => "C",
            TempScale::Fahrenheit => "F",
            TempScale::Kelvin => "K",
        }
    }

    /// Case-insensitive: "c" and "C" both name Celsius.
    pub fn from_code(code: &str) -> Option<Self> {
        TempScale::ALL
            .into_iter()
            .find(|scale| scale.code().eq_ignore_ascii_case(code))
    }

    /// Apply the transition `self -> to` to `v`, or `None` if no transition exists.
    pub fn transition(self, to: TempScale, v: Real) -> Option<Real> {
        use TempScale::*;

        let converted = match (self, to) {
            (Celsius, Fahrenheit) => v * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
            (Celsius, Kelvin) => v + KELVIN_OFFSET,
            (Fahrenheit, Celsius) => (v - FAHRENHEIT_OFFSET) * 5.0 / 9.0,
            (Fahrenheit, Kelvin) => (v - FAHRENHEIT_OFFSET) * 5.0 / 9.0 + KELVIN_OFFSET,
            (Kelvin, Celsius) => v - KELVIN_OFFSET,
            (Kelvin, Fahrenheit) => (v - KELVIN_OFFSET) * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
            (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => return None,
        };
        Some(converted)
    }
}

impl fmt::Display for TempScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Convert a temperature between Celsius (`C`), Fahrenheit (`F`) and Kelvin (`K`).
///
/// Only the six directed pairs between distinct scales are defined. A
/// same-scale request or an unrecognized code yields
/// [`ConvertError::UnsupportedTemperature`].
pub fn convert_temperature(value: Real, from_unit: &str, to_unit: &str) -> ConvertResult<Real> {
    TempScale::from_code(from_unit)
        .zip(TempScale::from_code(to_unit))
        .and_then(|(from, to)| from.transition(to, value))
        .ok_or_else(|| ConvertError::UnsupportedTemperature {
            from: from_unit.to_string(),
            to: to_unit.to_string(),
        })
}

/// Express a temperature in Kelvin.
///
/// Kelvin input is passed through unchanged; this does not relax
/// [`convert_temperature`], which still rejects `K -> K`.
pub fn to_kelvin(value: Real, unit: &str) -> ConvertResult<Real> {
    match TempScale::from_code(unit) {
        Some(TempScale::Kelvin) => Ok(value),
        _ => convert_temperature(value, unit, TempScale::Kelvin.code()),
    }
}
