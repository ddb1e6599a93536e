use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

use crate::measurement::{InputError, MeasurementInput};

/// Body mass index in kg/m².
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(transparent))]
pub struct Bmi(f64);

impl Bmi {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Value rounded to two decimal places, as displayed.
    pub fn rounded(&self) -> f64 {
        (self.0 * 100.0).round() / 100.0
    }
}

#[cfg(feature = "serde")]
impl Serialize for Bmi {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.rounded())
    }
}

/// Two decimal places unless the formatter asks for another precision.
impl fmt::Display for Bmi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(f, "{:.*}", precision, self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Category {
    #[strum(serialize = "Underweight")]
    #[cfg_attr(feature = "serde", serde(rename = "Underweight"))]
    Underweight,
    #[strum(serialize = "Normal weight")]
    #[cfg_attr(feature = "serde", serde(rename = "Normal weight"))]
    NormalWeight,
    #[strum(serialize = "Overweight")]
    #[cfg_attr(feature = "serde", serde(rename = "Overweight"))]
    Overweight,
    #[strum(serialize = "Obesity grade I")]
    #[cfg_attr(feature = "serde", serde(rename = "Obesity grade I"))]
    ObesityGradeI,
    #[strum(serialize = "Obesity grade II")]
    #[cfg_attr(feature = "serde", serde(rename = "Obesity grade II"))]
    ObesityGradeII,
    #[strum(serialize = "Obesity grade III")]
    #[cfg_attr(feature = "serde", serde(rename = "Obesity grade III"))]
    ObesityGradeIII,
}

impl Category {
    /// Exclusive upper bounds, checked in order; anything above the last one
    /// is grade III obesity.
    const THRESHOLDS: [(f64, Category); 5] = [
        (18.5, Category::Underweight),
        (24.9, Category::NormalWeight),
        (29.9, Category::Overweight),
        (35.0, Category::ObesityGradeI),
        (40.0, Category::ObesityGradeII),
    ];

    pub fn classify(bmi: Bmi) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(upper_bound, _)| bmi.value() < *upper_bound)
            .map(|(_, category)| *category)
            .unwrap_or(Category::ObesityGradeIII)
    }

    pub fn label(&self) -> &'static str {
        self.into()
    }

    /// Range as printed in the reference table shown next to a result.
    ///
    /// NOTE: these do not line up with `classify` in [24.9, 25) and
    /// [29.9, 30). Values there are classified into the higher category.
    pub fn reference_range(&self) -> &'static str {
        match self {
            Category::Underweight => "< 18.5",
            Category::NormalWeight => "18.5 - 24.9",
            Category::Overweight => "25 - 29.9",
            Category::ObesityGradeI => "30 - 34.9",
            Category::ObesityGradeII => "35 - 39.9",
            Category::ObesityGradeIII => "≥ 40",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A computed index together with its category. Only the evaluator builds
/// these, so the two always agree.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BmiResult {
    bmi: Bmi,
    category: Category,
}

impl BmiResult {
    fn from_bmi(bmi: Bmi) -> Self {
        Self {
            bmi,
            category: Category::classify(bmi),
        }
    }

    pub fn bmi(&self) -> Bmi {
        self.bmi
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

pub fn try_evaluate(input: &MeasurementInput) -> Result<BmiResult, InputError> {
    let measurement = input.parse()?;
    Ok(BmiResult::from_bmi(measurement.bmi()))
}

/// Evaluate raw weight (kg) and height (cm) text. Invalid input yields `None`.
pub fn evaluate(weight: &str, height: &str) -> Option<BmiResult> {
    try_evaluate(&MeasurementInput::new(weight, height)).ok()
}
