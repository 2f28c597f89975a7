mod cli;
mod error;
mod transcoder;

use error::TranscodeError;

fn run_converter(cli: cli::Cli) -> Result<(), TranscodeError> {
    let cli::Cli { input, output } = cli;

    transcoder::convert_file(&input, &output)?;

    println!("Converted {} to {}", input.display(), output.display());

    Ok(())
}

fn main() {
    let cli = match cli::parse() {
        Ok(cli) => cli,
        Err(usage) => {
            println!("{usage}");
            std::process::exit(1);
        }
    };

    if let Err(error) = run_converter(cli) {
        eprintln!("spv2inl error: {error}");
        std::process::exit(1);
    }
}
