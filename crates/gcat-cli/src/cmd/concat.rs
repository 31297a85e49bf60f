// crates/gcat-cli/src/cmd/concat.rs

use gcat_core::Plan;

/// Stream the plan's sources to stdout.
pub fn run(plan: &Plan) -> anyhow::Result<()> {
    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();

    let summary = gcat_core::run(plan, stdin, &mut stdout)?;

    tracing::debug!(
        sources = summary.sources,
        bytes_in = summary.bytes_in,
        bytes_out = summary.bytes_out,
        "concat ok"
    );
    Ok(())
}
