// uc-convert/src/tables.rs

use crate::{Domain, UnitTable};

pub static LENGTH: UnitTable = UnitTable::new(
    Domain::Length,
    "m",
    &[
        ("m", 1.0),
        ("km", 1000.0),
        ("cm", 0.01),
        ("mm", 0.001),
        ("mile", 1609.34),
        ("yard", 0.9144),
        ("foot", 0.3048),
    ],
);

pub static AREA: UnitTable = UnitTable::new(
    Domain::Area,
    "m2",
    &[
        ("m2", 1.0),
        ("km2", 1e6),
        ("cm2", 0.0001),
        ("mm2", 1e-6),
        ("acre", 4046.86),
        ("mile2", 2.59e6),
        ("ft2", 0.092903),
        ("yd2", 0.836127),
    ],
);

/// The liter shares the cubic meter's factor.
pub static VOLUME: UnitTable = UnitTable::new(
    Domain::Volume,
    "m3",
    &[
        ("m3", 1.0),
        ("l", 1.0),
        ("ml", 1e-3),
        ("cm3", 1e-6),
        ("ft3", 0.0283168),
        ("in3", 1.63871e-5),
        ("gal", 3.78541),
    ],
);

pub static MASS: UnitTable = UnitTable::new(
    Domain::Mass,
    "g",
    &[
        ("g", 1.0),
        ("kg", 1000.0),
        ("mg", 0.001),
        ("lb", 453.592),
        ("oz", 28.3495),
    ],
);

pub static TIME: UnitTable = UnitTable::new(
    Domain::Time,
    "s",
    &[("s", 1.0), ("min", 60.0), ("h", 3600.0), ("d", 86400.0)],
);

pub static SPEED: UnitTable = UnitTable::new(
    Domain::Speed,
    "m/s",
    &[
        ("m/s", 1.0),
        ("km/h", 1000.0 / 3600.0),
        ("mile/h", 1609.34 / 3600.0),
        ("ft/s", 0.3048),
    ],
);

/// Every table-backed domain, in prompt order.
pub static TABLES: [&UnitTable; 6] = [&LENGTH, &AREA, &VOLUME, &MASS, &TIME, &SPEED];
