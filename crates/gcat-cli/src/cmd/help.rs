// crates/gcat-cli/src/cmd/help.rs

use std::io::Write;

pub const HELP: &str = "\
Usage: gcat [OPTION]... [FILE]...
Concatenate FILE(s) to standard output.

With no FILE, or when FILE is -, read standard input.

  -A, --show-all           equivalent to -vET
  -b, --number-nonblank    number nonempty output lines, overrides -n
  -e                       equivalent to -vE
  -E, --show-ends          display $ at end of each line
  -n, --number             number all output lines
  -s, --squeeze-blank      suppress repeated empty output lines
  -t                       equivalent to -vT
  -T, --show-tabs          display TAB characters as ^I
  -u                       (ignored)
  -v, --show-nonprinting   use ^ and M- notation, except for LFD and TAB
      --help     display this help and exit
      --version  output version information and exit

Examples:
  gcat f - g  Output f's contents, then standard input, then g's contents.
  gcat        Copy standard input to standard output.

Set GCAT_LOG=debug to trace option resolution and per-file statistics.
";

pub fn print_help() -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    out.write_all(HELP.as_bytes())?;
    out.flush()?;
    Ok(())
}

pub fn print_version() -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "{} {}", crate::BIN_NAME, env!("CARGO_PKG_VERSION"))?;
    out.flush()?;
    Ok(())
}
