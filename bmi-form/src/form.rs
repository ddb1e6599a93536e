use bmi_model::{try_evaluate, BmiResult, MeasurementInput};
use log::{debug, info};

/// State of one calculator form: the two text fields and the last result.
#[derive(Debug, Default)]
pub struct BmiForm {
    input: MeasurementInput,
    result: Option<BmiResult>,
}

impl BmiForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weight(&self) -> &str {
        self.input.weight()
    }

    pub fn height(&self) -> &str {
        self.input.height()
    }

    pub fn set_weight(&mut self, weight: impl Into<String>) {
        self.input.set_weight(weight);
    }

    pub fn set_height(&mut self, height: impl Into<String>) {
        self.input.set_height(height);
    }

    pub fn result(&self) -> Option<&BmiResult> {
        self.result.as_ref()
    }

    /// Evaluate the current fields. On invalid input the previous result is
    /// kept and `false` is returned.
    pub fn calculate(&mut self) -> bool {
        match try_evaluate(&self.input) {
            Ok(result) => {
                info!("Calculated BMI {} ({})", result.bmi(), result.category());
                self.result = Some(result);
                true
            }
            Err(e) => {
                debug!("Ignoring calculation: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use bmi_model::Category;

    use super::*;

    #[test]
    fn starts_without_result() {
        let form = BmiForm::new();

        assert_eq!(form.weight(), "");
        assert_eq!(form.height(), "");
        assert!(form.result().is_none());
    }

    #[test]
    fn calculate_sets_result() {
        let mut form = BmiForm::new();
        form.set_weight("80");
        form.set_height("170");

        assert!(form.calculate());
        let result = form.result().unwrap();
        assert_eq!(result.bmi().to_string(), "27.68");
        assert_eq!(result.category(), Category::Overweight);
    }

    #[test]
    fn invalid_input_keeps_previous_result() {
        let mut form = BmiForm::new();
        form.set_weight("65");
        form.set_height("170");
        assert!(form.calculate());
        let previous = *form.result().unwrap();

        form.set_height("0");
        assert!(!form.calculate());
        assert_eq!(form.result(), Some(&previous));

        form.set_weight("");
        form.set_height("170");
        assert!(!form.calculate());
        assert_eq!(form.result(), Some(&previous));
    }

    #[test]
    fn invalid_input_on_fresh_form_produces_nothing() {
        let mut form = BmiForm::new();
        form.set_weight("heavy");
        form.set_height("170");

        assert!(!form.calculate());
        assert!(form.result().is_none());
    }

    #[test]
    fn new_calculation_overwrites_result() {
        let mut form = BmiForm::new();
        form.set_weight("50");
        form.set_height("180");
        form.calculate();
        assert_eq!(form.result().unwrap().category(), Category::Underweight);

        form.set_weight("130");
        form.set_height("170");
        form.calculate();
        assert_eq!(form.result().unwrap().category(), Category::ObesityGradeIII);
    }
}
