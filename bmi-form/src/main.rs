use std::error::Error;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use bmi_form::render::TerminalRenderer;
use bmi_form::run_once;
use bmi_form::session::Session;
use clap::Parser;
use log::{warn, LevelFilter};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

#[derive(Parser, Debug)]
#[command(name = "bmi-calculator", version, about = "Body mass index calculator", long_about = None)]
struct Args {
    /// Weight in kilograms; evaluates once instead of starting the interactive form
    #[arg(short, long, allow_hyphen_values = true)]
    weight: Option<String>,

    /// Height in centimeters; evaluates once instead of starting the interactive form
    #[arg(short = 'H', long, allow_hyphen_values = true)]
    height: Option<String>,

    /// Print the one-shot result as JSON
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Path to the log4rs configuration file
    #[arg(long, default_value = "log4rs.yml")]
    log_config: PathBuf,
}

fn init_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    if path.exists() {
        log4rs::init_file(path, Default::default())?;
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d} {l} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    warn!("No log configuration at {}, logging to stderr", path.display());
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(&args.log_config)?;

    let color = !args.no_color && io::stdout().is_terminal();

    if args.weight.is_none() && args.height.is_none() {
        let renderer = TerminalRenderer::new(io::stdout(), color);
        let mut session = Session::new(Box::new(io::stdin().lock()), Box::new(renderer));
        session.run()?;
        return Ok(());
    }

    run_once(
        args.weight,
        args.height,
        args.json,
        color,
        &mut io::stdout().lock(),
    )
}
