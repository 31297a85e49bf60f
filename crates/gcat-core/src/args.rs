// crates/gcat-core/src/args.rs
//
// Raw argv (program name excluded) -> Invocation.
// `--` ends option parsing.
// Validation is all-or-nothing: flags first, then every path in order,
// before a single byte is written.

use std::ffi::OsStr;

use tracing::debug;

use crate::error::Result;
use crate::options::OptionSet;
use crate::source::{validate_path, Source};

pub const END_OF_OPTIONS: &str = "--";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Version,
    Concat(Plan),
}

/// What to read and how to render it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plan {
    pub options: OptionSet,
    pub sources: Vec<Source>,
}

/// Split argv into flags and sources, resolve the flags, validate the paths.
/// `--` ends option parsing; everything after it is a file.
pub fn parse_args<S: AsRef<OsStr>>(args: &[S]) -> Result<Invocation> {
    let mut flags: Vec<String> = Vec::new();
    let mut sources: Vec<Source> = Vec::new();
    let mut options_done = false;

    for arg in args {
        let arg = arg.as_ref();
        if !options_done {
            match arg.to_str() {
                Some("--help") => return Ok(Invocation::Help),
                Some("--version") => return Ok(Invocation::Version),
                Some(END_OF_OPTIONS) => {
                    options_done = true;
                    continue;
                }
                _ => {}
            }
            if is_flag(arg) {
                flags.push(arg.to_string_lossy().into_owned());
                continue;
            }
        }
        sources.push(Source::from_arg(arg));
    }

    let options = OptionSet::resolve(&flags)?;
    debug!(?options, "resolved options");

    for src in &sources {
        if let Source::File(path) = src {
            validate_path(path)?;
        }
    }

    if sources.is_empty() {
        sources.push(Source::Stdin);
    }
    debug!(count = sources.len(), "validated sources");

    Ok(Invocation::Concat(Plan { options, sources }))
}

/// A dash token other than a lone `-`.
fn is_flag(arg: &OsStr) -> bool {
    let b = arg.as_encoded_bytes();
    b.len() > 1 && b[0] == b'-'
}
