//! Named units.
//!
//! This is a fixed lookup table, not a unit system: there is no prefix
//! handling and no parsing beyond an exact symbol match in [`by_symbol`].
//! Units not listed here can be composed with `*`, `/`, and
//! [`Unit::powi`], or created directly with [`Unit::new`].

use crate::{Dimension, Unit};

pub const ONE: Unit = Unit::coherent(Dimension::DIMENSIONLESS);
pub const PERCENT: Unit = Unit::new(Dimension::DIMENSIONLESS, 0.01);

pub const METER: Unit = Unit::coherent(Dimension::LENGTH);
pub const KILOMETER: Unit = Unit::new(Dimension::LENGTH, 1e3);
pub const CENTIMETER: Unit = Unit::new(Dimension::LENGTH, 1e-2);
pub const MILLIMETER: Unit = Unit::new(Dimension::LENGTH, 1e-3);
pub const INCH: Unit = Unit::new(Dimension::LENGTH, 0.0254);
pub const FOOT: Unit = Unit::new(Dimension::LENGTH, 0.3048);

pub const KILOGRAM: Unit = Unit::coherent(Dimension::MASS);
pub const GRAM: Unit = Unit::new(Dimension::MASS, 1e-3);
pub const POUND: Unit = Unit::new(Dimension::MASS, 0.453_592_37);

pub const SECOND: Unit = Unit::coherent(Dimension::TIME);
pub const MILLISECOND: Unit = Unit::new(Dimension::TIME, 1e-3);
pub const MINUTE: Unit = Unit::new(Dimension::TIME, 60.0);
pub const HOUR: Unit = Unit::new(Dimension::TIME, 3600.0);
pub const DAY: Unit = Unit::new(Dimension::TIME, 86_400.0);

pub const AMPERE: Unit = Unit::coherent(Dimension::CURRENT);
pub const KELVIN: Unit = Unit::coherent(Dimension::TEMPERATURE);
pub const MOLE: Unit = Unit::coherent(Dimension::AMOUNT);
pub const CANDELA: Unit = Unit::coherent(Dimension::LUMINOUS_INTENSITY);

pub const SQUARE_METER: Unit = Unit::coherent(Dimension::AREA);
pub const CUBIC_METER: Unit = Unit::coherent(Dimension::VOLUME);
pub const LITER: Unit = Unit::new(Dimension::VOLUME, 1e-3);

pub const HERTZ: Unit = Unit::coherent(Dimension::FREQUENCY);
pub const PER_MINUTE: Unit = Unit::new(Dimension::FREQUENCY, 1.0 / 60.0);

pub const METER_PER_SECOND: Unit = Unit::coherent(Dimension::VELOCITY);
pub const KILOMETER_PER_HOUR: Unit = Unit::new(Dimension::VELOCITY, 1e3 / 3600.0);
pub const METER_PER_SECOND_SQUARED: Unit = Unit::coherent(Dimension::ACCELERATION);

pub const NEWTON: Unit = Unit::coherent(Dimension::FORCE);
pub const KILONEWTON: Unit = Unit::new(Dimension::FORCE, 1e3);
pub const POUND_FORCE: Unit = Unit::new(Dimension::FORCE, 4.448_221_615_260_5);

pub const JOULE: Unit = Unit::coherent(Dimension::ENERGY);
pub const KILOJOULE: Unit = Unit::new(Dimension::ENERGY, 1e3);
pub const KILOWATT_HOUR: Unit = Unit::new(Dimension::ENERGY, 3.6e6);

pub const WATT: Unit = Unit::coherent(Dimension::POWER);
pub const KILOWATT: Unit = Unit::new(Dimension::POWER, 1e3);

pub const PASCAL: Unit = Unit::coherent(Dimension::PRESSURE);
pub const KILOPASCAL: Unit = Unit::new(Dimension::PRESSURE, 1e3);
pub const BAR: Unit = Unit::new(Dimension::PRESSURE, 1e5);

const TABLE: &[(&str, Unit)] = &[
    ("1", ONE),
    ("%", PERCENT),
    ("m", METER),
    ("km", KILOMETER),
    ("cm", CENTIMETER),
    ("mm", MILLIMETER),
    ("in", INCH),
    ("ft", FOOT),
    ("kg", KILOGRAM),
    ("g", GRAM),
    ("lb", POUND),
    ("s", SECOND),
    ("ms", MILLISECOND),
    ("min", MINUTE),
    ("h", HOUR),
    ("d", DAY),
    ("A", AMPERE),
    ("K", KELVIN),
    ("mol", MOLE),
    ("cd", CANDELA),
    ("m^2", SQUARE_METER),
    ("m^3", CUBIC_METER),
    ("L", LITER),
    ("Hz", HERTZ),
    ("m/s", METER_PER_SECOND),
    ("km/h", KILOMETER_PER_HOUR),
    ("m/s^2", METER_PER_SECOND_SQUARED),
    ("N", NEWTON),
    ("kN", KILONEWTON),
    ("lbf", POUND_FORCE),
    ("J", JOULE),
    ("kJ", KILOJOULE),
    ("kWh", KILOWATT_HOUR),
    ("W", WATT),
    ("kW", KILOWATT),
    ("Pa", PASCAL),
    ("kPa", KILOPASCAL),
    ("bar", BAR),
];

/// Looks up a named unit by its exact symbol, e.g. `"N"` or `"km/h"`.
///
/// Returns `None` for symbols not in the table.
#[must_use]
pub fn by_symbol(symbol: &str) -> Option<Unit> {
    TABLE
        .iter()
        .find(|(candidate, _)| *candidate == symbol)
        .map(|&(_, unit)| unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_symbols() {
        assert_eq!(by_symbol("N"), Some(NEWTON));
        assert_eq!(by_symbol("min"), Some(MINUTE));
        assert_eq!(by_symbol("km/h"), Some(KILOMETER_PER_HOUR));
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(by_symbol("n"), None);
        assert_eq!(by_symbol(" N"), None);
        assert_eq!(by_symbol("furlong"), None);
    }

    #[test]
    fn symbols_are_unique() {
        for (i, (symbol, _)) in TABLE.iter().enumerate() {
            assert!(
                TABLE[i + 1..].iter().all(|(other, _)| other != symbol),
                "duplicate symbol {symbol}"
            );
        }
    }
}
