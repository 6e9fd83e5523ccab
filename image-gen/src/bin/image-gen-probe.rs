use clap::Parser;
use hf_imagegen::Client;
use image_gen::cli::Common;
use std::process::ExitCode;

/// Send one prompt to the inference endpoint and print the raw response.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Opt {
    /// Text describing the image
    #[arg(default_value = "Cyberpunk neon icon")]
    prompt: String,
    #[command(flatten)]
    common: Common,
}

fn main() -> anyhow::Result<ExitCode> {
    let Opt { prompt, common } = Parser::parse();
    common.init_logger()?;
    let client = Client::new(common.load_config()?)?;

    println!("Final Test on: {}", client.endpoint());
    match client.probe(&prompt) {
        Ok(report) => {
            println!("{}", report);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
