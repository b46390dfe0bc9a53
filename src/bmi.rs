//! BMI computation over mixed input units. Weight is normalized to kilograms
//! and height to meters before the division, and the reading echoes the
//! normalized values so the panel can show what was actually computed.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyWeightUnit {
    Kilograms,
    Pounds,
}

impl BodyWeightUnit {
    pub const ALL: [BodyWeightUnit; 2] = [BodyWeightUnit::Kilograms, BodyWeightUnit::Pounds];

    pub fn label(self) -> &'static str {
        match self {
            BodyWeightUnit::Kilograms => "kg",
            BodyWeightUnit::Pounds => "lbs",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyHeightUnit {
    Centimeters,
    Meters,
    Feet,
}

impl BodyHeightUnit {
    pub const ALL: [BodyHeightUnit; 3] = [
        BodyHeightUnit::Centimeters,
        BodyHeightUnit::Meters,
        BodyHeightUnit::Feet,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BodyHeightUnit::Centimeters => "cm",
            BodyHeightUnit::Meters => "meters",
            BodyHeightUnit::Feet => "feet",
        }
    }
}

/// Standard BMI bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value against the standard thresholds.
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal (Healthy)",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// A computed BMI plus the normalized inputs behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiReading {
    pub bmi: f64,
    pub weight_kg: f64,
    pub height_m: f64,
    pub category: BmiCategory,
}

/// Compute a BMI reading. Height must be strictly positive; the check runs
/// before the division so a zero height surfaces as a validation error
/// rather than an infinity.
pub fn calculate_bmi(
    weight: f64,
    weight_unit: BodyWeightUnit,
    height: f64,
    height_unit: BodyHeightUnit,
) -> Result<BmiReading> {
    let weight_kg = match weight_unit {
        BodyWeightUnit::Kilograms => weight,
        BodyWeightUnit::Pounds => weight * 0.453592,
    };
    let height_m = match height_unit {
        BodyHeightUnit::Centimeters => height / 100.0,
        BodyHeightUnit::Meters => height,
        BodyHeightUnit::Feet => height * 0.3048,
    };

    if height_m <= 0.0 {
        return Err(Error::validation("Height must be greater than zero."));
    }

    let bmi = weight_kg / (height_m * height_m);
    Ok(BmiReading {
        bmi,
        weight_kg,
        height_m,
        category: BmiCategory::classify(bmi),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_reference_reading() {
        let reading =
            calculate_bmi(70.0, BodyWeightUnit::Kilograms, 1.75, BodyHeightUnit::Meters).unwrap();
        assert!((reading.bmi - 22.857142).abs() < 1e-4);
        assert_eq!(reading.category, BmiCategory::Normal);
    }

    #[test]
    fn imperial_inputs_are_normalized() {
        let reading =
            calculate_bmi(154.324, BodyWeightUnit::Pounds, 5.74147, BodyHeightUnit::Feet).unwrap();
        assert!((reading.weight_kg - 70.0).abs() < 1e-3);
        assert!((reading.height_m - 1.75).abs() < 1e-3);
        assert!((reading.bmi - 22.857).abs() < 0.05);
    }

    #[test]
    fn centimeters_divide_by_one_hundred() {
        let reading =
            calculate_bmi(70.0, BodyWeightUnit::Kilograms, 175.0, BodyHeightUnit::Centimeters)
                .unwrap();
        assert!((reading.height_m - 1.75).abs() < 1e-9);
    }

    #[test]
    fn zero_height_is_a_validation_error_not_a_division_fault() {
        assert!(matches!(
            calculate_bmi(70.0, BodyWeightUnit::Kilograms, 0.0, BodyHeightUnit::Meters),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            calculate_bmi(70.0, BodyWeightUnit::Kilograms, -1.0, BodyHeightUnit::Centimeters),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn category_thresholds_are_half_open() {
        assert_eq!(BmiCategory::classify(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::classify(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(24.99), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(29.99), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(30.0), BmiCategory::Obese);
    }
}
