//! Measurement domains and runtime dispatch.

use core::fmt;
use core::str::FromStr;

use uc_core::Real;

use crate::convert::{
    convert_area, convert_length, convert_mass, convert_speed, convert_time, convert_volume,
};
use crate::temperature::{TempScale, convert_temperature};
use crate::{AREA, ConvertError, ConvertResult, LENGTH, MASS, SPEED, TIME, UnitTable, VOLUME};

/// Signature shared by every per-domain conversion function.
pub type ConvertFn = fn(Real, &str, &str) -> ConvertResult<Real>;

/// One measurement category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Length,
    Area,
    Volume,
    Mass,
    Temperature,
    Time,
    Speed,
}

impl Domain {
    pub const ALL: [Domain; 7] = [
        Domain::Length,
        Domain::Area,
        Domain::Volume,
        Domain::Mass,
        Domain::Temperature,
        Domain::Time,
        Domain::Speed,
    ];

    /// Lowercase name as typed at the prompt.
    pub fn name(self) -> &'static str {
        match self {
            Domain::Length => "length",
            Domain::Area => "area",
            Domain::Volume => "volume",
            Domain::Mass => "mass",
            Domain::Temperature => "temperature",
            Domain::Time => "time",
            Domain::Speed => "speed",
        }
    }

    /// The conversion function for this domain.
    pub fn converter(self) -> ConvertFn {
        match self {
            Domain::Length => convert_length,
            Domain::Area => convert_area,
            Domain::Volume => convert_volume,
            Domain::Mass => convert_mass,
            Domain::Temperature => convert_temperature,
            Domain::Time => convert_time,
            Domain::Speed => convert_speed,
        }
    }

    /// Unit table backing this domain. Temperature has none.
    pub fn table(self) -> Option<&'static UnitTable> {
        match self {
            Domain::Length => Some(&LENGTH),
            Domain::Area => Some(&AREA),
            Domain::Volume => Some(&VOLUME),
            Domain::Mass => Some(&MASS),
            Domain::Time => Some(&TIME),
            Domain::Speed => Some(&SPEED),
            Domain::Temperature => None,
        }
    }

    /// Unit codes accepted by this domain, in table order.
    pub fn unit_codes(self) -> Vec<&'static str> {
        match self.table() {
            Some(table) => table.codes().collect(),
            None => TempScale::ALL.iter().map(|scale| scale.code()).collect(),
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Domain {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Domain::ALL
            .into_iter()
            .find(|domain| domain.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConvertError::UnknownDomain {
                name: name.to_string(),
            })
    }
}
