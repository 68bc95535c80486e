use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Source image (default: logo/81481159904.png)
    pub input: Option<PathBuf>,

    /// Destination PNG (default: logo/logo-transparent.png)
    pub output: Option<PathBuf>,

    /// Pixels with red, green and blue all above this become transparent (default 240)
    #[arg(short, long)]
    pub threshold: Option<u8>,

    /// TOML file with input_path, output_path and threshold
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
