// crates/gcat-cli/src/main.rs

use std::ffi::OsString;
use std::process::ExitCode;

use clap::Parser;
use gcat_core::CatError;

mod cmd;
mod logging;

pub const BIN_NAME: &str = "gcat";

/// Argv is captured raw: flag clusters, --help and --version are handled by
/// gcat-core's resolver, not by clap.
#[derive(Parser)]
#[command(name = "gcat")]
#[command(about = "Concatenate FILE(s) to standard output", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Flags and files, in order. `-` reads standard input.
    #[arg(num_args = 0.., allow_hyphen_values = true, trailing_var_arg = true)]
    pub args: Vec<OsString>,
}

/// argv with a `--` inserted after the program name. clap consumes that one
/// as its own escape, so every user argument (a user `--` included) reaches
/// the resolver verbatim.
fn escaped_argv<I>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut argv = argv.into_iter();
    let bin = argv.next().unwrap_or_else(|| OsString::from(BIN_NAME));
    std::iter::once(bin)
        .chain(std::iter::once(OsString::from("--")))
        .chain(argv)
        .collect()
}

fn main() -> ExitCode {
    logging::init();

    let cli = Cli::parse_from(escaped_argv(std::env::args_os()));

    match cmd::run(&cli.args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{BIN_NAME}: {err}");
            if err.downcast_ref::<CatError>().is_some_and(CatError::is_usage) {
                eprintln!("Try '{BIN_NAME} --help' for more information.");
            }
            ExitCode::FAILURE
        }
    }
}
