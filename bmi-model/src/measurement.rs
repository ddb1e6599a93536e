use std::str::FromStr;

use crate::bmi::Bmi;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("weight \"{0}\" is not a number")]
    InvalidWeight(String),
    #[error("height \"{0}\" is not a number")]
    InvalidHeight(String),
    #[error("height must be positive, got {0} m")]
    NonPositiveHeight(f64),
}

/// Raw text of the two form fields, exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeasurementInput {
    weight: String,
    height: String,
}

impl MeasurementInput {
    pub fn new(weight: impl Into<String>, height: impl Into<String>) -> Self {
        Self {
            weight: weight.into(),
            height: height.into(),
        }
    }

    pub fn weight(&self) -> &str {
        &self.weight
    }

    pub fn height(&self) -> &str {
        &self.height
    }

    pub fn set_weight(&mut self, weight: impl Into<String>) {
        self.weight = weight.into();
    }

    pub fn set_height(&mut self, height: impl Into<String>) {
        self.height = height.into();
    }

    /// Parse weight (kg) and height (cm). Height is converted to meters and
    /// must be positive afterwards; weight is taken as is.
    pub fn parse(&self) -> Result<Measurement, InputError> {
        let weight_kg = parse_decimal(&self.weight)
            .ok_or_else(|| InputError::InvalidWeight(self.weight.clone()))?;
        let height_m = parse_decimal(&self.height)
            .ok_or_else(|| InputError::InvalidHeight(self.height.clone()))?
            / 100.0;

        if height_m <= 0.0 {
            return Err(InputError::NonPositiveHeight(height_m));
        }

        Ok(Measurement {
            weight_kg,
            height_m,
        })
    }
}

fn parse_decimal(text: &str) -> Option<f64> {
    f64::from_str(text.trim()).ok().filter(|x| x.is_finite())
}

/// A measurement that passed parsing. Height is always positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    weight_kg: f64,
    height_m: f64,
}

impl Measurement {
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn height_m(&self) -> f64 {
        self.height_m
    }

    pub fn height_cm(&self) -> f64 {
        self.height_m * 100.0
    }

    pub fn bmi(&self) -> Bmi {
        Bmi::new(self.weight_kg / (self.height_m * self.height_m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_converts_height_to_meters() {
        let measurement = MeasurementInput::new("65", "170").parse().unwrap();

        assert_eq!(measurement.weight_kg(), 65.0);
        assert!((measurement.height_m() - 1.7).abs() < 1e-12);
        assert!((measurement.height_cm() - 170.0).abs() < 1e-9);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let measurement = MeasurementInput::new(" 72.5 ", "\t181\n").parse().unwrap();

        assert_eq!(measurement.weight_kg(), 72.5);
        assert!((measurement.height_m() - 1.81).abs() < 1e-12);
    }

    #[test]
    fn rejects_invalid_input() {
        let test_data = [
            (("", "170"), InputError::InvalidWeight("".to_owned())),
            (("abc", "170"), InputError::InvalidWeight("abc".to_owned())),
            (("65", ""), InputError::InvalidHeight("".to_owned())),
            (("65", "1.7m"), InputError::InvalidHeight("1.7m".to_owned())),
            (("65", "NaN"), InputError::InvalidHeight("NaN".to_owned())),
            (("inf", "170"), InputError::InvalidWeight("inf".to_owned())),
            (("65", "0"), InputError::NonPositiveHeight(0.0)),
            (("65", "-170"), InputError::NonPositiveHeight(-1.7)),
        ];

        for (i, ((weight, height), expected_error)) in test_data.into_iter().enumerate() {
            assert_eq!(
                MeasurementInput::new(weight, height).parse(),
                Err(expected_error),
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn weight_is_not_range_checked() {
        let measurement = MeasurementInput::new("-10", "100").parse().unwrap();

        assert_eq!(measurement.weight_kg(), -10.0);
        assert_eq!(measurement.bmi().value(), -10.0);
    }
}
