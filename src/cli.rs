use clap::Parser;
use std::ffi::OsString;

#[derive(Parser, Debug)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Path to the compiled SPIR-V shader binary
    pub input: std::path::PathBuf,

    /// Path to the .inl file to write the byte literals into
    pub output: std::path::PathBuf,
}

pub fn usage(program: &str) -> String {
    format!("Usage: {program} <input.spv> <output.inl>")
}

/// Parses exactly two positional paths. Anything else yields the usage line for `argv[0]`.
///
/// Both paths are taken literally, so `--` or `-x` is a path here, never a separator or flag.
pub fn try_parse_from<I, T>(args: I) -> Result<Cli, String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = args
        .first()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

    if args.len() != 3 {
        return Err(usage(&program));
    }

    // Everything after the first `--` reaches clap as a positional value
    args.insert(1, OsString::from("--"));

    Cli::try_parse_from(&args).map_err(|_| usage(&program))
}

pub fn parse() -> Result<Cli, String> {
    try_parse_from(std::env::args_os())
}
