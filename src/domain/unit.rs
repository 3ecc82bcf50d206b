// ============================================================================
// Measurement Units Domain Model
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Categories
// ============================================================================

/// Measurement categories. Conversion is only defined between two units of
/// the same category; the six sets are disjoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Category {
    Length,
    Mass,
    Temperature,
    Volume,
    Area,
    Time,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 6] = [
        Category::Length,
        Category::Mass,
        Category::Temperature,
        Category::Volume,
        Category::Area,
        Category::Time,
    ];

    /// Human-readable category name.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Mass => "mass",
            Category::Temperature => "temperature",
            Category::Volume => "volume",
            Category::Area => "area",
            Category::Time => "time",
        }
    }

    /// Every unit belonging to this category.
    pub fn units(&self) -> &'static [UnitCode] {
        use UnitCode::*;
        match self {
            Category::Length => &[
                Kilometer, Meter, Centimeter, Millimeter, Mile, Yard, Foot, Inch,
            ],
            Category::Mass => &[Kilogram, Gram, Milligram, Pound, Ounce],
            Category::Temperature => &[Celsius, Fahrenheit, Kelvin],
            Category::Volume => &[Liter, Milliliter, Gallon, Quart, Pint, Cup, FluidOunce],
            Category::Area => &[
                SquareMeter,
                SquareKilometer,
                SquareCentimeter,
                SquareMillimeter,
                Hectare,
                Acre,
                SquareFoot,
                SquareInch,
            ],
            Category::Time => &[Second, Minute, Hour, Day, Week, Month, Year],
        }
    }

    /// The unit all factors in this category are expressed against
    /// (the unit with factor 1.0).
    pub fn base_unit(&self) -> UnitCode {
        match self {
            Category::Length => UnitCode::Meter,
            Category::Mass => UnitCode::Gram,
            Category::Temperature => UnitCode::Celsius,
            Category::Volume => UnitCode::Liter,
            Category::Area => UnitCode::SquareMeter,
            Category::Time => UnitCode::Second,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Unit Codes
// ============================================================================

/// Every supported unit across all categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnitCode {
    // Length
    Kilometer,
    Meter,
    Centimeter,
    Millimeter,
    Mile,
    Yard,
    Foot,
    Inch,
    // Mass
    Kilogram,
    Gram,
    Milligram,
    Pound,
    Ounce,
    // Temperature
    Celsius,
    Fahrenheit,
    Kelvin,
    // Volume
    Liter,
    Milliliter,
    Gallon,
    Quart,
    Pint,
    Cup,
    FluidOunce,
    // Area
    SquareMeter,
    SquareKilometer,
    SquareCentimeter,
    SquareMillimeter,
    Hectare,
    Acre,
    SquareFoot,
    SquareInch,
    // Time
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl UnitCode {
    /// The category this unit belongs to.
    pub fn category(&self) -> Category {
        use UnitCode::*;
        match self {
            Kilometer | Meter | Centimeter | Millimeter | Mile | Yard | Foot | Inch => {
                Category::Length
            },
            Kilogram | Gram | Milligram | Pound | Ounce => Category::Mass,
            Celsius | Fahrenheit | Kelvin => Category::Temperature,
            Liter | Milliliter | Gallon | Quart | Pint | Cup | FluidOunce => Category::Volume,
            SquareMeter | SquareKilometer | SquareCentimeter | SquareMillimeter | Hectare
            | Acre | SquareFoot | SquareInch => Category::Area,
            Second | Minute | Hour | Day | Week | Month | Year => Category::Time,
        }
    }

    /// How many base units make up 1 of this unit.
    ///
    /// Temperature units return 1.0: Celsius/Fahrenheit/Kelvin are offset,
    /// not scaled, and convert through affine transforms instead of factors.
    pub fn base_factor(&self) -> f64 {
        use UnitCode::*;
        match self {
            // Length, base: meter
            Kilometer => 1000.0,
            Meter => 1.0,
            Centimeter => 0.01,
            Millimeter => 0.001,
            Mile => 1609.34,
            Yard => 0.9144,
            Foot => 0.3048,
            Inch => 0.0254,
            // Mass, base: gram
            Kilogram => 1000.0,
            Gram => 1.0,
            Milligram => 0.001,
            Pound => 453.592,
            Ounce => 28.3495,
            // Temperature: affine, handled by the conversion engine
            Celsius | Fahrenheit | Kelvin => 1.0,
            // Volume, base: liter
            Liter => 1.0,
            Milliliter => 0.001,
            Gallon => 3.78541,
            Quart => 0.946353,
            Pint => 0.473176,
            Cup => 0.236588,
            FluidOunce => 0.0295735,
            // Area, base: square meter
            SquareMeter => 1.0,
            SquareKilometer => 1_000_000.0,
            SquareCentimeter => 0.0001,
            SquareMillimeter => 0.000001,
            Hectare => 10000.0,
            Acre => 4046.86,
            SquareFoot => 0.092903,
            SquareInch => 0.00064516,
            // Time, base: second. A month is fixed at 30 days, a year at 365.
            Second => 1.0,
            Minute => 60.0,
            Hour => 3600.0,
            Day => 86400.0,
            Week => 604800.0,
            Month => 2_592_000.0,
            Year => 31_536_000.0,
        }
    }

    /// Short symbol, as shown next to input fields.
    pub fn symbol(&self) -> &'static str {
        use UnitCode::*;
        match self {
            Kilometer => "km",
            Meter => "m",
            Centimeter => "cm",
            Millimeter => "mm",
            Mile => "mi",
            Yard => "yd",
            Foot => "ft",
            Inch => "in",
            Kilogram => "kg",
            Gram => "g",
            Milligram => "mg",
            Pound => "lb",
            Ounce => "oz",
            Celsius => "c",
            Fahrenheit => "f",
            Kelvin => "k",
            Liter => "l",
            Milliliter => "ml",
            Gallon => "gal",
            Quart => "qt",
            Pint => "pt",
            Cup => "cup",
            FluidOunce => "floz",
            SquareMeter => "m2",
            SquareKilometer => "km2",
            SquareCentimeter => "cm2",
            SquareMillimeter => "mm2",
            Hectare => "ha",
            Acre => "ac",
            SquareFoot => "ft2",
            SquareInch => "in2",
            Second => "s",
            Minute => "min",
            Hour => "h",
            Day => "d",
            Week => "wk",
            Month => "mo",
            Year => "yr",
        }
    }

    /// Full unit name, for labels and logs.
    pub fn label(&self) -> &'static str {
        use UnitCode::*;
        match self {
            Kilometer => "Kilometers",
            Meter => "Meters",
            Centimeter => "Centimeters",
            Millimeter => "Millimeters",
            Mile => "Miles",
            Yard => "Yards",
            Foot => "Feet",
            Inch => "Inches",
            Kilogram => "Kilograms",
            Gram => "Grams",
            Milligram => "Milligrams",
            Pound => "Pounds",
            Ounce => "Ounces",
            Celsius => "Celsius",
            Fahrenheit => "Fahrenheit",
            Kelvin => "Kelvin",
            Liter => "Liters",
            Milliliter => "Milliliters",
            Gallon => "Gallons",
            Quart => "Quarts",
            Pint => "Pints",
            Cup => "Cups",
            FluidOunce => "Fluid Ounces",
            SquareMeter => "Square Meters",
            SquareKilometer => "Square Kilometers",
            SquareCentimeter => "Square Centimeters",
            SquareMillimeter => "Square Millimeters",
            Hectare => "Hectares",
            Acre => "Acres",
            SquareFoot => "Square Feet",
            SquareInch => "Square Inches",
            Second => "Seconds",
            Minute => "Minutes",
            Hour => "Hours",
            Day => "Days",
            Week => "Weeks",
            Month => "Months",
            Year => "Years",
        }
    }
}

impl std::fmt::Display for UnitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl std::str::FromStr for UnitCode {
    type Err = String;

    /// Parse a unit symbol (e.g. "km", "floz", "m2").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for category in Category::ALL {
            for unit in category.units() {
                if unit.symbol() == s {
                    return Ok(*unit);
                }
            }
        }
        Err(format!("unknown unit symbol '{}'", s))
    }
}

// ============================================================================
// Quantity
// ============================================================================

/// An immutable scalar value tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quantity {
    pub value: f64,
    pub unit: UnitCode,
}

impl Quantity {
    pub fn new(value: f64, unit: UnitCode) -> Self {
        Self { value, unit }
    }

    pub fn category(&self) -> Category {
        self.unit.category()
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}
