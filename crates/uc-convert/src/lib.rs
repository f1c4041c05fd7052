//! uc-convert: unit conversion library for unitconv.
//!
//! Provides:
//! - One pure conversion function per measurement domain
//! - Compile-time unit tables (factor to the domain's canonical unit)
//! - Affine temperature transitions between Celsius, Fahrenheit and Kelvin
//! - `Domain` dispatch for callers that select the domain at runtime
//! - Typed canonical quantities backed by `uom`
//!
//! # Example
//!
//! ```
//! use uc_convert::{Domain, convert, convert_length, convert_temperature};
//!
//! assert_eq!(convert_length(1.0, "km", "m").unwrap(), 1000.0);
//! assert_eq!(convert_temperature(100.0, "C", "F").unwrap(), 212.0);
//!
//! let domain: Domain = "Time".parse().unwrap();
//! assert_eq!(convert(domain, 1.0, "d", "h").unwrap(), 24.0);
//! ```

pub mod convert;
pub mod domain;
pub mod error;
pub mod quantity;
pub mod table;
pub mod tables;
pub mod temperature;

// Re-exports for ergonomics
pub use convert::{
    Conversion, convert, convert_area, convert_length, convert_mass, convert_request,
    convert_speed, convert_time, convert_volume,
};
pub use domain::{ConvertFn, Domain};
pub use error::{ConvertError, ConvertResult};
pub use quantity::CanonicalQuantity;
pub use table::UnitTable;
pub use tables::{AREA, LENGTH, MASS, SPEED, TABLES, TIME, VOLUME};
pub use temperature::{TempScale, convert_temperature};
