// main.rs
//
// Command line front end: parse the options, draw the rose, save it.

use clap::{ArgAction, Parser, error::ErrorKind};
use env_logger::Env;
use maurer_rose::config::{ConfigError, DEFAULT_CANVAS_SIZE, RoseConfig};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "maurer-rose")]
#[command(about = "Render a Maurer rose (and optionally its rose curve) to SVG", long_about = None)]
#[command(version)]
struct Cli {
    /// Output filename (.svg)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// n coef
    #[arg(short = 'n', value_name = "N", allow_negative_numbers = true)]
    n: Option<i32>,

    /// d coef
    #[arg(short = 'd', value_name = "D", allow_negative_numbers = true)]
    d: Option<i32>,

    /// show complete curve
    #[arg(
        long = "show_curve",
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    show_curve: bool,

    /// Canvas Size
    #[arg(short = 'c', long = "canvas", value_name = "SIZE", allow_negative_numbers = true)]
    canvas: Option<i32>,

    /// Positional form of --output
    #[arg(value_name = "OUTPUT")]
    output_pos: Option<PathBuf>,

    /// Positional form of --canvas
    #[arg(value_name = "CANVAS", allow_negative_numbers = true)]
    canvas_pos: Option<i32>,

    /// Positional form of -n
    #[arg(value_name = "N_COEF", allow_negative_numbers = true)]
    n_pos: Option<i32>,

    /// Positional form of -d
    #[arg(value_name = "D_COEF", allow_negative_numbers = true)]
    d_pos: Option<i32>,
}

impl Cli {
    /// Merges flags with positionals (flags win) and applies defaults.
    fn into_config(self) -> Result<RoseConfig, ConfigError> {
        let output = self
            .output
            .or(self.output_pos)
            .ok_or(ConfigError::MissingValue("output"))?;
        let n = self.n.or(self.n_pos).ok_or(ConfigError::MissingValue("n"))?;
        let d = self.d.or(self.d_pos).ok_or(ConfigError::MissingValue("d"))?;
        let canvas_size = self.canvas.or(self.canvas_pos).unwrap_or(DEFAULT_CANVAS_SIZE);

        Ok(RoseConfig::new(output, n, d)
            .with_canvas_size(canvas_size)
            .with_curve(self.show_curve))
    }
}

fn main() -> ExitCode {
    // RUST_LOG overrides the default level
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        },
        Err(e) => {
            log::error!("Command Line : {}", parse_error_detail(&e));
            return ExitCode::FAILURE;
        },
    };

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Command Line : {e}");
            return ExitCode::FAILURE;
        },
    };

    if let Err(e) = run(&config) {
        log::error!("{e}");
        for cause in e.chain().skip(1) {
            log::debug!("  caused by: {cause}");
        }
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(config: &RoseConfig) -> anyhow::Result<()> {
    maurer_rose::render(config)?;
    Ok(())
}

/// First line of a clap error, without its `error: ` prefix.
fn parse_error_detail(e: &clap::Error) -> String {
    let text = e.to_string();
    let first = text.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}
