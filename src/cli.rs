use clap::Parser;

use crate::sketches::SKETCH_NAMES;

#[derive(Parser, Debug, Clone)]
#[command(name = "wirecube")]
#[command(about = "Interactive wireframe-cube sketch", long_about = None)]
pub struct Cli {
    /// Sketch to run (cube, square)
    #[arg(long, default_value = "cube", value_parser = clap::builder::PossibleValuesParser::new(SKETCH_NAMES.iter().copied()))]
    pub sketch: String,

    /// Initial window width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,
}
