// crates/gcat-cli/src/cmd/mod.rs

pub mod concat;
pub mod help;

use std::ffi::OsString;

use gcat_core::{parse_args, Invocation};

/// Dispatch one invocation.
pub fn run(args: &[OsString]) -> anyhow::Result<()> {
    match parse_args(args)? {
        Invocation::Help => help::print_help(),
        Invocation::Version => help::print_version(),
        Invocation::Concat(plan) => concat::run(&plan),
    }
}
