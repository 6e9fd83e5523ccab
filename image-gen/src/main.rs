use clap::Parser;
use hf_imagegen::Client;
use image_gen::cli::{self, Common};
use std::process::ExitCode;

/// Generate an image from a text prompt and save it to the output directory.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Opt {
    /// Text describing the image
    prompt: String,
    /// Target file name. `.webp` is appended unless it ends in .webp, .png or .jpg
    filename: String,
    #[command(flatten)]
    common: Common,
}

fn main() -> anyhow::Result<ExitCode> {
    let Opt {
        prompt,
        filename,
        common,
    } = Parser::parse();
    common.init_logger()?;
    let config = common.load_config()?;

    println!(
        "Generating image for prompt: '{}' using {}...",
        prompt, config.model_id
    );
    let client = Client::new(config)?;
    match client.generate(&prompt, &filename) {
        Ok(saved) => {
            println!("Success! Image saved to: {}", saved.path);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", cli::describe(&e));
            Ok(ExitCode::FAILURE)
        }
    }
}
