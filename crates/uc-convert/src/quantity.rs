//! Typed canonical quantities.
//!
//! Bridges the string-keyed conversion tables to `uom` SI quantities so that
//! downstream code can keep working with dimension-checked values.

use uc_core::units::{Area, Length, Mass, Temperature, Time, Velocity, Volume};
use uc_core::{Real, g, k, m, m2, m3, mps, s};

use crate::temperature::to_kelvin;
use crate::{AREA, ConvertResult, Domain, LENGTH, MASS, SPEED, TIME, VOLUME};

/// A value expressed in its domain's canonical unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanonicalQuantity {
    Length(Length),
    Area(Area),
    /// Follows the volume table, where one liter counts as one cubic meter.
    Volume(Volume),
    /// Built from grams, stored by `uom` in kilograms.
    Mass(Mass),
    Temperature(Temperature),
    Time(Time),
    Speed(Velocity),
}

impl CanonicalQuantity {
    /// Convert `value` in `unit` to the canonical unit of `domain`.
    pub fn from_value(domain: Domain, value: Real, unit: &str) -> ConvertResult<Self> {
        let quantity = match domain {
            Domain::Length => Self::Length(m(LENGTH.to_canonical(value, unit)?)),
            Domain::Area => Self::Area(m2(AREA.to_canonical(value, unit)?)),
            Domain::Volume => Self::Volume(m3(VOLUME.to_canonical(value, unit)?)),
            Domain::Mass => Self::Mass(g(MASS.to_canonical(value, unit)?)),
            Domain::Temperature => Self::Temperature(k(to_kelvin(value, unit)?)),
            Domain::Time => Self::Time(s(TIME.to_canonical(value, unit)?)),
            Domain::Speed => Self::Speed(mps(SPEED.to_canonical(value, unit)?)),
        };
        Ok(quantity)
    }

    pub fn domain(&self) -> Domain {
        match self {
            Self::Length(_) => Domain::Length,
            Self::Area(_) => Domain::Area,
            Self::Volume(_) => Domain::Volume,
            Self::Mass(_) => Domain::Mass,
            Self::Temperature(_) => Domain::Temperature,
            Self::Time(_) => Domain::Time,
            Self::Speed(_) => Domain::Speed,
        }
    }

    /// Magnitude in SI base units (kilograms for mass).
    pub fn si_value(&self) -> Real {
        match self {
            Self::Length(q) => q.value,
            Self::Area(q) => q.value,
            Self::Volume(q) => q.value,
            Self::Mass(q) => q.value,
            Self::Temperature(q) => q.value,
            Self::Time(q) => q.value,
            Self::Speed(q) => q.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::length::meter;
    use uom::si::mass::gram;
    use uom::si::thermodynamic_temperature::kelvin;
    use uom::si::time::hour;

    #[test]
    fn length_in_meters() {
        let q = CanonicalQuantity::from_value(Domain::Length, 2.0, "km").unwrap();
        match q {
            CanonicalQuantity::Length(len) => assert!((len.get::<meter>() - 2000.0).abs() < 1e-9),
            other => panic!("expected length, got {other:?}"),
        }
        assert_eq!(q.domain(), Domain::Length);
    }

    #[test]
    fn mass_si_value_is_kilograms() {
        let q = CanonicalQuantity::from_value(Domain::Mass, 2.0, "kg").unwrap();
        assert!((q.si_value() - 2.0).abs() < 1e-12);
        if let CanonicalQuantity::Mass(mass) = q {
            assert!((mass.get::<gram>() - 2000.0).abs() < 1e-9);
        }
    }

    #[test]
    fn temperature_in_kelvin() {
        let q = CanonicalQuantity::from_value(Domain::Temperature, 0.0, "C").unwrap();
        assert_eq!(q.si_value(), 273.15);
        let q = CanonicalQuantity::from_value(Domain::Temperature, 10.0, "K").unwrap();
        if let CanonicalQuantity::Temperature(t) = q {
            assert_eq!(t.get::<kelvin>(), 10.0);
        }
    }

    #[test]
    fn time_reads_back_in_other_units() {
        let q = CanonicalQuantity::from_value(Domain::Time, 90.0, "min").unwrap();
        if let CanonicalQuantity::Time(t) = q {
            assert!((t.get::<hour>() - 1.5).abs() < 1e-12);
        } else {
            panic!("expected time");
        }
    }

    #[test]
    fn unknown_unit_is_rejected() {
        assert!(CanonicalQuantity::from_value(Domain::Speed, 1.0, "knot").is_err());
        assert!(CanonicalQuantity::from_value(Domain::Temperature, 1.0, "R").is_err());
    }

    #[test]
    fn every_domain_has_a_quantity() {
        for domain in Domain::ALL {
            let unit = domain.unit_codes()[0];
            let q = CanonicalQuantity::from_value(domain, 1.0, unit).unwrap();
            assert_eq!(q.domain(), domain);
        }
    }
}
