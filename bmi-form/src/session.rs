use std::io::{self, BufRead};
use std::str::FromStr;

use log::{debug, info, warn};

use crate::form::BmiForm;
use crate::render::{RenderError, Renderer};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to read input: {0}")]
    Input(#[from] io::Error),
    #[error(transparent)]
    Render(#[from] RenderError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown command \"{0}\"")]
pub struct UnknownCommand(String);

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Weight(String),
    Height(String),
    Calculate,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (name, argument) = line
            .split_once(char::is_whitespace)
            .map(|(name, argument)| (name, argument.trim()))
            .unwrap_or((line, ""));

        match name.to_lowercase().as_str() {
            "weight" | "w" => Ok(Command::Weight(argument.to_owned())),
            "height" | "h" => Ok(Command::Height(argument.to_owned())),
            "calculate" | "c" => Ok(Command::Calculate),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" => Ok(Command::Quit),
            _ => Err(UnknownCommand(line.to_owned())),
        }
    }
}

pub struct Session {
    input: Box<dyn BufRead>,
    renderer: Box<dyn Renderer>,
    form: BmiForm,
}

impl Session {
    pub fn new(input: Box<dyn BufRead>, renderer: Box<dyn Renderer>) -> Self {
        Self {
            input,
            renderer,
            form: BmiForm::new(),
        }
    }

    pub fn form(&self) -> &BmiForm {
        &self.form
    }

    pub fn run(&mut self) -> Result<(), SessionError> {
        info!("Starting session");
        self.renderer.help()?;

        loop {
            self.renderer.prompt(&self.form)?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                info!("End of input, terminating...");
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    warn!("{}", e);
                    self.renderer.help()?;
                    continue;
                }
            };
            debug!("Received command {:?}", command);

            match command {
                Command::Weight(weight) => self.form.set_weight(weight),
                Command::Height(height) => self.form.set_height(height),
                Command::Calculate => {
                    if self.form.calculate() {
                        if let Some(result) = self.form.result() {
                            self.renderer.result(result)?;
                        }
                    }
                }
                Command::Help => self.renderer.help()?,
                Command::Quit => {
                    info!("Received quit command, terminating...");
                    break;
                }
            }
        }

        Ok(())
    }
}
