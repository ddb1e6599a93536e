pub mod bmi;
pub mod measurement;

pub use bmi::{evaluate, try_evaluate, Bmi, BmiResult, Category};
pub use measurement::{InputError, Measurement, MeasurementInput};
