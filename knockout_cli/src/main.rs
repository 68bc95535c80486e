// Command-line runner for the `knockout` library: one input image in, one
// transparent PNG out.

use anyhow::Context;
use clap::Parser;
use knockout::{BackgroundRemover, RemoverConfig};

mod args;

use args::Args;

/// Defaults, then the config file, then explicit flags.
fn resolve_config(args: &Args) -> anyhow::Result<RemoverConfig> {
    let mut config = match &args.config {
        Some(path) => RemoverConfig::load(path)?,
        None => RemoverConfig::default(),
    };

    if let Some(input) = &args.input {
        config.input_path = input.clone();
    }
    if let Some(output) = &args.output {
        config.output_path = output.clone();
    }
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .init();

    let config = resolve_config(&args)?;
    log::debug!("Resolved configuration: {:?}", config);

    let remover = BackgroundRemover::new(config);
    remover.run().context("background removal failed")?;

    println!(
        "Saved transparent logo to {}",
        remover.config().output_path.display()
    );
    Ok(())
}
