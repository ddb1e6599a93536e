use std::io::{self, Write};

use bmi_model::{BmiResult, Category};
use strum::IntoEnumIterator;

use crate::form::BmiForm;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

#[mockall::automock]
pub trait Renderer {
    fn prompt(&mut self, form: &BmiForm) -> Result<(), RenderError>;
    fn result(&mut self, result: &BmiResult) -> Result<(), RenderError>;
    fn help(&mut self) -> Result<(), RenderError>;
}

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const HEADER: &str = "\x1b[1;38;5;24m";

fn category_color(category: Category) -> &'static str {
    match category {
        Category::Underweight => "\x1b[1;38;5;178m",
        Category::NormalWeight => "\x1b[1;38;5;28m",
        Category::Overweight => "\x1b[1;38;5;208m",
        Category::ObesityGradeI => "\x1b[1;38;5;203m",
        Category::ObesityGradeII => "\x1b[1;38;5;160m",
        Category::ObesityGradeIII => "\x1b[1;38;5;124m",
    }
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, style: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", style, text, RESET)
        } else {
            text.to_owned()
        }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn prompt(&mut self, form: &BmiForm) -> Result<(), RenderError> {
        write!(
            self.out,
            "weight [{}] kg, height [{}] cm > ",
            form.weight(),
            form.height()
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn result(&mut self, result: &BmiResult) -> Result<(), RenderError> {
        let category = result.category();
        let title = self.paint(HEADER, "Results");
        let bmi = self.paint(BOLD, &result.bmi().to_string());
        let label = self.paint(
            category_color(category),
            &format!("Category: {}", category),
        );

        writeln!(self.out)?;
        writeln!(self.out, "{}", title)?;
        writeln!(self.out, "  Your BMI is: {}", bmi)?;
        writeln!(self.out, "  {}", label)?;
        writeln!(self.out)?;
        writeln!(self.out, "  BMI ranges:")?;
        for category in Category::iter() {
            writeln!(
                self.out,
                "  • {}: {}",
                category,
                category.reference_range()
            )?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn help(&mut self) -> Result<(), RenderError> {
        let title = self.paint(HEADER, "Gestational BMI Calculator");
        writeln!(self.out, "{}", title)?;
        writeln!(self.out, "  weight <kg>   (w)  set weight in kilograms")?;
        writeln!(self.out, "  height <cm>   (h)  set height in centimeters")?;
        writeln!(self.out, "  calculate     (c)  calculate BMI")?;
        writeln!(self.out, "  help          (?)  show this message")?;
        writeln!(self.out, "  quit          (q)  exit")?;
        writeln!(self.out)?;
        writeln!(self.out, "All rights reserved to MimaternoFetal.cl")?;
        Ok(())
    }
}
