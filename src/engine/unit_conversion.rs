// ============================================================================
// Unit Conversion Engine
// Factor-table conversion, with affine handling for temperature
// ============================================================================

use crate::domain::{Category, Quantity, UnitCode};
use crate::numeric::{CalcError, CalcResult};

/// Convert a scalar between two units of one measurement category.
///
/// Non-temperature categories multiply into the category's base unit and
/// divide back out, so `convert(convert(x, A, B), B, A)` returns `x` up to
/// floating-point rounding. Temperature always projects through Celsius;
/// there is no direct Fahrenheit/Kelvin path.
///
/// # Errors
/// Returns `UnitMismatch` when `from` or `to` is not a unit of `category`.
///
/// # Example
/// ```
/// use calc_engine::engine::unit_conversion::convert;
/// use calc_engine::domain::{Category, UnitCode};
///
/// let km = convert(1500.0, UnitCode::Meter, UnitCode::Kilometer, Category::Length).unwrap();
/// assert_eq!(km, 1.5);
/// ```
pub fn convert(value: f64, from: UnitCode, to: UnitCode, category: Category) -> CalcResult<f64> {
    if from.category() != category {
        return Err(CalcError::UnitMismatch {
            unit: from.symbol(),
            category: category.name(),
        });
    }
    if to.category() != category {
        return Err(CalcError::UnitMismatch {
            unit: to.symbol(),
            category: category.name(),
        });
    }

    if category == Category::Temperature {
        let celsius = to_celsius(value, from);
        return Ok(from_celsius(celsius, to));
    }

    let base_value = value * from.base_factor();
    Ok(base_value / to.base_factor())
}

/// Project a temperature reading onto the Celsius scale.
fn to_celsius(value: f64, from: UnitCode) -> f64 {
    match from {
        UnitCode::Fahrenheit => (value - 32.0) * (5.0 / 9.0),
        UnitCode::Kelvin => value - 273.15,
        _ => value,
    }
}

/// Project a Celsius reading onto the target scale.
fn from_celsius(celsius: f64, to: UnitCode) -> f64 {
    match to {
        UnitCode::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        UnitCode::Kelvin => celsius + 273.15,
        _ => celsius,
    }
}

impl Quantity {
    /// Convert this quantity into another unit of the same category.
    ///
    /// # Errors
    /// Returns `UnitMismatch` when the target is in a different category.
    pub fn convert_to(&self, to: UnitCode) -> CalcResult<Quantity> {
        let value = convert(self.value, self.unit, to, self.unit.category())?;
        Ok(Quantity::new(value, to))
    }
}
