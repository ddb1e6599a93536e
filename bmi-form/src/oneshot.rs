use std::error::Error;
use std::io::Write;

use bmi_model::{try_evaluate, MeasurementInput};
use log::info;

use crate::render::{Renderer, TerminalRenderer};

/// Evaluate a single measurement given on the command line and write the
/// result panel, or JSON when `json` is set. Invalid input writes nothing.
pub fn run_once(
    weight: Option<String>,
    height: Option<String>,
    json: bool,
    color: bool,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    let input = MeasurementInput::new(weight.unwrap_or_default(), height.unwrap_or_default());
    let result = match try_evaluate(&input) {
        Ok(result) => result,
        Err(e) => {
            info!("No result: {}", e);
            return Ok(());
        }
    };

    if json {
        serde_json::to_writer(&mut *out, &result)?;
        writeln!(out)?;
    } else {
        TerminalRenderer::new(&mut *out, color).result(&result)?;
    }
    out.flush()?;

    Ok(())
}
