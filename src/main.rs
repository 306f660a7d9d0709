use clap::Parser;
use std::error::Error;

use geoload::cli::Args;
use geoload::loader::LoaderConfig;
use geoload::logging;

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = LoaderConfig::resolve(args.config.as_deref())?;
    let command = args.command.unwrap_or_default();
    let output = command.run(config, args.format)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
