//! Pure unit-conversion functions. Temperature converts through Celsius,
//! weight through kilograms, and length through meters, so each category only
//! needs one factor (or offset pair) per unit instead of a full conversion
//! matrix.

use crate::error::{Error, Result};

/// The three conversion categories offered by the converter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionKind {
    Temperature,
    Weight,
    Length,
}

impl ConversionKind {
    pub const ALL: [ConversionKind; 3] = [
        ConversionKind::Temperature,
        ConversionKind::Weight,
        ConversionKind::Length,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ConversionKind::Temperature => "Temperature",
            ConversionKind::Weight => "Weight",
            ConversionKind::Length => "Length",
        }
    }

    /// Unit labels for this category, in picker order.
    pub fn unit_labels(self) -> &'static [&'static str] {
        match self {
            ConversionKind::Temperature => &["Celsius", "Fahrenheit", "Kelvin"],
            ConversionKind::Weight => &["Kilograms", "Pounds", "Grams", "Ounces"],
            ConversionKind::Length => &[
                "Meters",
                "Feet",
                "Kilometers",
                "Miles",
                "Centimeters",
                "Inches",
            ],
        }
    }

    /// Convert between two units of this category addressed by their position
    /// in `unit_labels`. The panel state keeps picker positions, so this is
    /// the entry point the shell uses. An index outside the unit list is
    /// reported rather than panicking.
    pub fn convert(self, value: f64, from: usize, to: usize) -> Result<f64> {
        let len = self.unit_labels().len();
        for index in [from, to] {
            if index >= len {
                return Err(Error::IndexOutOfBounds { index, len });
            }
        }
        Ok(match self {
            ConversionKind::Temperature => {
                convert_temperature(value, TemperatureUnit::ALL[from], TemperatureUnit::ALL[to])
            }
            ConversionKind::Weight => {
                convert_weight(value, WeightUnit::ALL[from], WeightUnit::ALL[to])
            }
            ConversionKind::Length => {
                convert_length(value, LengthUnit::ALL[from], LengthUnit::ALL[to])
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    Kilograms,
    Pounds,
    Grams,
    Ounces,
}

impl WeightUnit {
    pub const ALL: [WeightUnit; 4] = [
        WeightUnit::Kilograms,
        WeightUnit::Pounds,
        WeightUnit::Grams,
        WeightUnit::Ounces,
    ];

    /// Kilograms per one of this unit.
    fn factor(self) -> f64 {
        match self {
            WeightUnit::Kilograms => 1.0,
            WeightUnit::Pounds => 0.453592,
            WeightUnit::Grams => 0.001,
            WeightUnit::Ounces => 0.0283495,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Meters,
    Feet,
    Kilometers,
    Miles,
    Centimeters,
    Inches,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 6] = [
        LengthUnit::Meters,
        LengthUnit::Feet,
        LengthUnit::Kilometers,
        LengthUnit::Miles,
        LengthUnit::Centimeters,
        LengthUnit::Inches,
    ];

    /// Meters per one of this unit.
    fn factor(self) -> f64 {
        match self {
            LengthUnit::Meters => 1.0,
            LengthUnit::Feet => 0.3048,
            LengthUnit::Kilometers => 1000.0,
            LengthUnit::Miles => 1609.34,
            LengthUnit::Centimeters => 0.01,
            LengthUnit::Inches => 0.0254,
        }
    }
}

/// Convert a temperature by normalizing to Celsius first.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    let celsius = match from {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        TemperatureUnit::Kelvin => value - 273.15,
    };
    match to {
        TemperatureUnit::Celsius => celsius,
        TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        TemperatureUnit::Kelvin => celsius + 273.15,
    }
}

/// Convert a weight through the kilogram intermediate.
pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    value * from.factor() / to.factor()
}

/// Convert a length through the meter intermediate.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    value * from.factor() / to.factor()
}

/// Parse a user-entered number, turning the inevitable typos into a
/// validation error instead of a panic or a silent zero.
pub fn parse_number(input: &str) -> Result<f64> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::validation("Please enter a valid number."))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    #[test]
    fn celsius_to_fahrenheit_freezing_point() {
        let f = convert_temperature(0.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
        assert!((f - 32.0).abs() < TOLERANCE);
    }

    #[test]
    fn celsius_to_kelvin_boiling_point() {
        let k = convert_temperature(100.0, TemperatureUnit::Celsius, TemperatureUnit::Kelvin);
        assert!((k - 373.15).abs() < TOLERANCE);
    }

    #[test]
    fn kilograms_to_pounds() {
        let lb = convert_weight(1.0, WeightUnit::Kilograms, WeightUnit::Pounds);
        assert!((lb - 2.20462).abs() < 1e-4);
    }

    #[test]
    fn temperature_round_trips() {
        for from in TemperatureUnit::ALL {
            for to in TemperatureUnit::ALL {
                let back = convert_temperature(convert_temperature(21.5, from, to), to, from);
                assert!((back - 21.5).abs() < TOLERANCE, "{from:?} -> {to:?}");
            }
        }
    }

    #[test]
    fn weight_round_trips() {
        for from in WeightUnit::ALL {
            for to in WeightUnit::ALL {
                let back = convert_weight(convert_weight(3.25, from, to), to, from);
                assert!((back - 3.25).abs() < TOLERANCE, "{from:?} -> {to:?}");
            }
        }
    }

    #[test]
    fn length_round_trips() {
        for from in LengthUnit::ALL {
            for to in LengthUnit::ALL {
                let back = convert_length(convert_length(7.5, from, to), to, from);
                assert!((back - 7.5).abs() < TOLERANCE, "{from:?} -> {to:?}");
            }
        }
    }

    #[test]
    fn kind_dispatch_matches_typed_functions() {
        let direct = convert_length(2.0, LengthUnit::Miles, LengthUnit::Kilometers);
        let via_kind = ConversionKind::Length.convert(2.0, 3, 2).unwrap();
        assert!((direct - via_kind).abs() < TOLERANCE);
    }

    #[test]
    fn out_of_range_unit_index_is_reported_not_panicked() {
        assert!(matches!(
            ConversionKind::Temperature.convert(1.0, 0, 3),
            Err(Error::IndexOutOfBounds { index: 3, len: 3 })
        ));
        assert!(matches!(
            ConversionKind::Weight.convert(1.0, 9, 0),
            Err(Error::IndexOutOfBounds { index: 9, len: 4 })
        ));
    }

    #[test]
    fn non_numeric_input_is_a_validation_error() {
        assert!(matches!(
            parse_number("not a number"),
            Err(crate::error::Error::Validation(_))
        ));
        assert!((parse_number(" 12.5 ").unwrap() - 12.5).abs() < TOLERANCE);
    }
}
