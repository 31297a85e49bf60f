// crates/gcat-core/src/concat.rs
//
// Driver: every source in order, one shared TranscodeState, output flushed
// after each chunk.

use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::args::Plan;
use crate::error::{CatError, Result};
use crate::options::OptionSet;
use crate::source::{read_file, LineChunks, Source};
use crate::transcode::{transcode, TranscodeState, TranscodeStats};

/// Totals over a whole run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub sources: usize,
    pub bytes_in: usize,
    pub bytes_out: usize,
    pub lines_numbered: u64,
}

impl RunSummary {
    fn add(&mut self, s: &TranscodeStats) {
        self.bytes_in += s.bytes_in;
        self.bytes_out += s.bytes_out;
        self.lines_numbered += s.lines_numbered;
    }
}

/// Run a validated plan. A read failure stops the run; whatever was already
/// written stays written. A closed output pipe ends the run quietly.
pub fn run<R, W>(plan: &Plan, stdin: R, out: &mut W) -> Result<RunSummary>
where
    R: BufRead,
    W: Write,
{
    let mut state = TranscodeState::new();
    let mut stdin = LineChunks::new(stdin);
    let mut buf = Vec::new();
    let mut summary = RunSummary::default();

    for src in &plan.sources {
        let res = match src {
            Source::File(path) => concat_file(path, &plan.options, &mut state, &mut buf, out),
            Source::Stdin => concat_stdin(&mut stdin, &plan.options, &mut state, &mut buf, out),
        };
        let stats = match res {
            Ok(s) => s,
            Err(CatError::WriteFailure(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
                debug!(source = %src.name(), "output closed, stopping");
                return Ok(summary);
            }
            Err(e) => {
                warn!(source = %src.name(), error = %e, "aborting run");
                return Err(e);
            }
        };
        debug!(
            source = %src.name(),
            bytes_in = stats.bytes_in,
            bytes_out = stats.bytes_out,
            lines_numbered = stats.lines_numbered,
            lines_squeezed = stats.lines_squeezed,
            "source done"
        );
        summary.sources += 1;
        summary.add(&stats);
    }

    debug!(
        sources = summary.sources,
        next_line = state.line_number,
        "run complete"
    );
    Ok(summary)
}

fn concat_file<W: Write>(
    path: &Path,
    opts: &OptionSet,
    state: &mut TranscodeState,
    buf: &mut Vec<u8>,
    out: &mut W,
) -> Result<TranscodeStats> {
    let data = read_file(path)?;
    buf.clear();
    let stats = transcode(&data, opts, state, buf);
    emit(buf, out)?;
    Ok(stats)
}

fn concat_stdin<R: BufRead, W: Write>(
    chunks: &mut LineChunks<R>,
    opts: &OptionSet,
    state: &mut TranscodeState,
    buf: &mut Vec<u8>,
    out: &mut W,
) -> Result<TranscodeStats> {
    let mut total = TranscodeStats::default();
    while let Some(chunk) = chunks.next_chunk()? {
        buf.clear();
        let s = transcode(chunk, opts, state, buf);
        emit(buf, out)?;
        total.bytes_in += s.bytes_in;
        total.bytes_out += s.bytes_out;
        total.lines_numbered += s.lines_numbered;
        total.lines_squeezed += s.lines_squeezed;
    }
    Ok(total)
}

fn emit<W: Write>(bytes: &[u8], out: &mut W) -> Result<()> {
    out.write_all(bytes).map_err(CatError::WriteFailure)?;
    out.flush().map_err(CatError::WriteFailure)
}
