//! Cistercian numeral CLI
//!
//! Usage:
//!   cistercian [OPTIONS] generate [--from N] [--to N]
//!   cistercian [OPTIONS] render <NUMBER>
//!   cistercian [OPTIONS] difference <NUMBER>...
//!   cistercian [OPTIONS] compose

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;

use cistercian::{
    GeneratorConfig, NumeralRenderer, RenderError, SheetComposer, DEMO_GROUPS,
};

#[derive(Parser)]
#[command(name = "cistercian")]
#[command(about = "Render Cistercian numerals as PNG images")]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Segment length in pixels
    #[arg(long)]
    segment_length: Option<u32>,

    /// Line thickness in pixels
    #[arg(long)]
    line_thickness: Option<u32>,

    /// Padding around composed sheets in pixels
    #[arg(long)]
    merge_padding: Option<u32>,

    /// Directory for rendered numerals
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every numeral in a range
    Generate {
        /// First number to render
        #[arg(long, default_value_t = 1)]
        from: u32,

        /// Last number to render
        #[arg(long, default_value_t = 9999)]
        to: u32,
    },

    /// Render a single numeral and print its path
    Render { number: u32 },

    /// Render a segment-difference image for a set of numbers
    Difference {
        #[arg(required = true, num_args = 1..)]
        numbers: Vec<u32>,
    },

    /// Compose the demonstration comparison sheets
    Compose,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match GeneratorConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => GeneratorConfig::default(),
    };

    if let Some(segment_length) = cli.segment_length {
        config = config.with_segment_length(segment_length);
    }
    if let Some(line_thickness) = cli.line_thickness {
        config = config.with_line_thickness(line_thickness);
    }
    if let Some(merge_padding) = cli.merge_padding {
        config = config.with_merge_padding(merge_padding);
    }
    if let Some(output) = cli.output {
        config = config.with_output_directory(output);
    }

    if let Err(e) = run(&cli.command, config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: &Command, config: GeneratorConfig) -> Result<(), RenderError> {
    match command {
        Command::Generate { from, to } => {
            let renderer = NumeralRenderer::new(config);
            for number in *from..=*to {
                renderer.render(number)?;
                if number % 1000 == 0 {
                    info!("rendered up to {number}");
                }
            }
            info!("rendered numerals {from}..={to}");
        }
        Command::Render { number } => {
            let renderer = NumeralRenderer::new(config);
            let path = renderer.render(*number)?;
            println!("{}", path.display());
        }
        Command::Difference { numbers } => {
            let renderer = NumeralRenderer::new(config);
            let path = renderer.render_difference(numbers)?;
            println!("{}", path.display());
        }
        Command::Compose => {
            let composer = SheetComposer::new(config);
            let directory = composer.compose_all(DEMO_GROUPS)?;
            println!("{}", directory.display());
        }
    }
    Ok(())
}
